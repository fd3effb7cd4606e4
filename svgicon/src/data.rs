//! Path data (`d` attribute) tokenizer.
//!
//! Letters open a new command context, numbers are appended to the open
//! one. Once a letter's operands are collected they are split into groups
//! of the command's arity, so `L 1 1 2 2` becomes two `L` commands.

use log::{debug, warn};
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::satisfy,
    combinator::map,
    number::complete::recognize_float,
    IResult,
};

use crate::error::PathError;
use crate::types::{CommandKind, PathCommand};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Letter(char),
    Number(&'a str),
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == ','
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

fn letter(input: &str) -> IResult<&str, Token<'_>> {
    map(satisfy(|c| c.is_ascii_alphabetic()), Token::Letter)(input)
}

fn number(input: &str) -> IResult<&str, Token<'_>> {
    map(recognize_float, Token::Number)(input)
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((letter, number))(input)
}

///Only finite values are operands
fn finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

///Parses a leading number, ignoring whatever follows it (units and the like)
pub(crate) fn leading_number(input: &str) -> Option<f64> {
    match number(input.trim()) {
	Ok((_, Token::Number(token))) => finite(token),
	_ => None,
    }
}

///Error for input no token matches: names the whole numeric run if there is one
fn unreadable(input: &str, offset: usize) -> PathError {
    let run: IResult<&str, &str> = take_while1(is_number_char)(input);

    match run {
	Ok((_, token)) => PathError::InvalidNumber {
	    token: token.to_string(),
	    offset,
	},
	Err(_) => PathError::UnexpectedCharacter {
	    found: input.chars().next().unwrap_or_default(),
	    offset,
	},
    }
}

fn split_group(letter: char, operands: Vec<f64>, commands: &mut Vec<PathCommand>) -> Result<(), PathError> {
    let (kind, position) = CommandKind::from_letter(letter);

    match kind.arity() {
	Some(0) => {
	    if !operands.is_empty() {
		warn!("ignoring {} operand(s) after `{}`", operands.len(), letter);
	    }
	    commands.push(PathCommand::new(kind, position, Vec::new()));
	},
	Some(arity) => {
	    if operands.is_empty() || operands.len() % arity != 0 {
		return Err(PathError::ArityMismatch {
		    letter,
		    arity,
		    count: operands.len(),
		});
	    }

	    for group in operands.chunks_exact(arity) {
		commands.push(PathCommand::new(kind, position, group.to_vec()));
	    }
	},
	// Unknown arity, operands stay together
	None => commands.push(PathCommand::new(kind, position, operands)),
    }

    Ok(())
}

///Parses path data into commands with arity-exact operand lists
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>, PathError> {
    let mut commands = Vec::new();
    let mut open: Option<(char, Vec<f64>)> = None;
    let mut input = data;

    loop {
	input = input.trim_start_matches(is_separator);
	if input.is_empty() {
	    break;
	}

	let offset = data.len() - input.len();
	let (remaining, token) = token(input).map_err(|_| unreadable(input, offset))?;

	match token {
	    Token::Letter(letter) => {
		if let Some((previous, operands)) = open.take() {
		    split_group(previous, operands, &mut commands)?;
		}
		open = Some((letter, Vec::new()));
	    },
	    Token::Number(token) => match open.as_mut() {
		Some((_, operands)) => {
		    let value = finite(token).ok_or_else(|| PathError::InvalidNumber {
			token: token.to_string(),
			offset,
		    })?;
		    operands.push(value);
		},
		None => {
		    return Err(PathError::OperandBeforeCommand {
			token: token.to_string(),
			offset,
		    })
		},
	    },
	}

	input = remaining;
    }

    if let Some((letter, operands)) = open {
	split_group(letter, operands, &mut commands)?;
    }

    for command in &commands {
	debug!("cmd: {}, args: {}", command.letter(), command.operands.len());
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn letters_and_operands(data: &str) -> Vec<(char, Vec<f64>)> {
	parse_path_data(data)
	    .unwrap()
	    .into_iter()
	    .map(|cmd| (cmd.letter(), cmd.operands))
	    .collect()
    }

    #[test]
    fn simple_path() {
	assert_eq!(letters_and_operands("M 10 10 L 20 20 Z"), vec![
	    ('M', vec![10.0, 10.0]),
	    ('L', vec![20.0, 20.0]),
	    ('Z', vec![]),
	]);
    }

    #[test]
    fn implicit_repetition_splits_groups() {
	assert_eq!(letters_and_operands("L 1 1 2 2 3 3"), vec![
	    ('L', vec![1.0, 1.0]),
	    ('L', vec![2.0, 2.0]),
	    ('L', vec![3.0, 3.0]),
	]);
    }

    #[test]
    fn repeated_move_keeps_its_letter() {
	let commands = parse_path_data("m1 2 3 4").unwrap();
	assert_eq!(commands.len(), 2);
	assert!(commands.iter().all(|cmd| cmd.kind == CommandKind::Move && cmd.position == Position::Relative));
    }

    #[test]
    fn compact_number_syntax() {
	assert_eq!(letters_and_operands("M10-5.5.5,1e2L-.5+2"), vec![
	    ('M', vec![10.0, -5.5]),
	    ('M', vec![0.5, 100.0]),
	    ('L', vec![-0.5, 2.0]),
	]);
    }

    #[test]
    fn letters_without_separators() {
	assert_eq!(letters_and_operands("M0 0h5v5zm1 1"), vec![
	    ('M', vec![0.0, 0.0]),
	    ('h', vec![5.0]),
	    ('v', vec![5.0]),
	    ('z', vec![]),
	    ('m', vec![1.0, 1.0]),
	]);
    }

    #[test]
    fn cubic_and_smooth_arity() {
	let commands = parse_path_data("C1 2 3 4 5 6 7 8 9 10 11 12 s1 2 3 4").unwrap();
	let sizes: Vec<usize> = commands.iter().map(|cmd| cmd.operands.len()).collect();
	assert_eq!(sizes, vec![6, 6, 4]);
    }

    #[test]
    fn arity_mismatch_is_malformed() {
	assert_eq!(parse_path_data("M 0 0 L 1 2 3"), Err(PathError::ArityMismatch {
	    letter: 'L',
	    arity: 2,
	    count: 3,
	}));
	assert_eq!(parse_path_data("C 1 2 3 4"), Err(PathError::ArityMismatch {
	    letter: 'C',
	    arity: 6,
	    count: 4,
	}));
    }

    #[test]
    fn letter_without_operands_is_malformed() {
	assert!(matches!(parse_path_data("M 0 0 L"), Err(PathError::ArityMismatch { letter: 'L', count: 0, .. })));
    }

    #[test]
    fn operand_before_letter_is_malformed() {
	assert_eq!(parse_path_data("  12 M 0 0"), Err(PathError::OperandBeforeCommand {
	    token: "12".to_string(),
	    offset: 2,
	}));
    }

    #[test]
    fn unexpected_character() {
	assert_eq!(parse_path_data("M 0 0 # 1"), Err(PathError::UnexpectedCharacter {
	    found: '#',
	    offset: 6,
	}));
    }

    #[test]
    fn overflowing_number_is_malformed() {
	assert_eq!(parse_path_data("M 1e400 0"), Err(PathError::InvalidNumber {
	    token: "1e400".to_string(),
	    offset: 2,
	}));
	assert!(matches!(parse_path_data("M 0 -1e999"), Err(PathError::InvalidNumber { offset: 4, .. })));
    }

    #[test]
    fn incomplete_exponent_names_the_token() {
	assert_eq!(parse_path_data("M 1e 0"), Err(PathError::InvalidNumber {
	    token: "1e".to_string(),
	    offset: 2,
	}));
	assert_eq!(parse_path_data("M - 1"), Err(PathError::InvalidNumber {
	    token: "-".to_string(),
	    offset: 2,
	}));
    }

    #[test]
    fn close_ignores_trailing_operands() {
	assert_eq!(letters_and_operands("M0 0Z 4"), vec![('M', vec![0.0, 0.0]), ('Z', vec![])]);
    }

    #[test]
    fn unsupported_letters_are_kept() {
	let commands = parse_path_data("M 0 0 A 5 5 0 0 1 10 10 L 1 1").unwrap();
	assert_eq!(commands[1].kind, CommandKind::Unsupported('A'));
	assert_eq!(commands[1].operands.len(), 7);
	assert_eq!(commands[2].letter(), 'L');
    }

    #[test]
    fn empty_data() {
	assert_eq!(parse_path_data(" \n\t, "), Ok(vec![]));
    }

    #[test]
    fn leading_number_ignores_units() {
	assert_eq!(leading_number(" 2.5px"), Some(2.5));
	assert_eq!(leading_number("wide"), None);
	assert_eq!(leading_number("1e400"), None);
    }
}
