use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Move,
    Line,
    HorizontalLine,
    VerticalLine,
    CubicCurve,
    SmoothCubicCurve,
    Close,
    ///A letter the emitter has no directive for (arcs, quadratics, ...)
    Unsupported(char),
}

impl CommandKind {
    ///Classifies a path-data letter. Case decides the position.
    pub fn from_letter(letter: char) -> (CommandKind, Position) {
	let position = if letter.is_ascii_lowercase() {
	    Position::Relative
	} else {
	    Position::Absolute
	};

	let kind = match letter.to_ascii_uppercase() {
	    'M' => CommandKind::Move,
	    'L' => CommandKind::Line,
	    'H' => CommandKind::HorizontalLine,
	    'V' => CommandKind::VerticalLine,
	    'C' => CommandKind::CubicCurve,
	    'S' => CommandKind::SmoothCubicCurve,
	    'Z' => CommandKind::Close,
	    _ => CommandKind::Unsupported(letter),
	};

	(kind, position)
    }

    ///Number of operands one occurrence of the command takes, `None` when unknown
    pub fn arity(self) -> Option<usize> {
	match self {
	    CommandKind::Move | CommandKind::Line => Some(2),
	    CommandKind::HorizontalLine | CommandKind::VerticalLine => Some(1),
	    CommandKind::CubicCurve => Some(6),
	    CommandKind::SmoothCubicCurve => Some(4),
	    CommandKind::Close => Some(0),
	    CommandKind::Unsupported(_) => None,
	}
    }
}

///One drawing command with exactly the operands its letter takes
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub position: Position,
    pub operands: Vec<f64>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, position: Position, operands: Vec<f64>) -> PathCommand {
	PathCommand { kind, position, operands }
    }

    ///The path-data letter this command was written with
    pub fn letter(&self) -> char {
	let upper = match self.kind {
	    CommandKind::Move => 'M',
	    CommandKind::Line => 'L',
	    CommandKind::HorizontalLine => 'H',
	    CommandKind::VerticalLine => 'V',
	    CommandKind::CubicCurve => 'C',
	    CommandKind::SmoothCubicCurve => 'S',
	    CommandKind::Close => 'Z',
	    CommandKind::Unsupported(letter) => return letter,
	};

	match self.position {
	    Position::Absolute => upper,
	    Position::Relative => upper.to_ascii_lowercase(),
	}
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{}", self.letter())?;
	for operand in &self.operands {
	    write!(f, " {}", operand)?;
	}
	Ok(())
    }
}

///Current point in source coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

impl Cursor {
    pub fn origin() -> Cursor { Cursor::default() }

    pub fn set(&mut self, x: f64, y: f64) {
	self.x = x;
	self.y = y;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
	self.x += dx;
	self.y += dy;
    }
}
