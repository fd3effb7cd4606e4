use std::io;

use thiserror::Error;

///Path data that does not follow the path grammar
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("operand `{token}` at offset {offset} comes before any command letter")]
    OperandBeforeCommand { token: String, offset: usize },
    #[error("command `{letter}` takes operands in groups of {arity}, found {count}")]
    ArityMismatch { letter: char, arity: usize, count: usize },
    #[error("invalid number `{token}` at offset {offset}")]
    InvalidNumber { token: String, offset: usize },
    #[error("unexpected character `{found}` at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("invalid stroke-width `{0}`")]
    InvalidStrokeWidth(String),
    #[error("invalid style declaration `{0}`")]
    InvalidDeclaration(String),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("path #{index}: {source}")]
    MalformedPath { index: usize, source: PathError },
    #[error("path #{index}: {source}")]
    Style { index: usize, source: StyleError },
    #[error("could not parse document: {0}")]
    Document(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
