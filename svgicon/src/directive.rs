//! The icon command vocabulary.
//!
//! Each directive serializes to one line: the keyword followed by its
//! operands, every field terminated by a comma (`LINE_TO, 4.00, 2.00,`).

use std::fmt;

use crate::emit::UnsupportedCommand;

///One line of an icon script. Operands are already scaled.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    CanvasDimensions(u32),
    NewPath,
    FillRuleNonzero,
    Stroke(f64),
    CapRound,
    MoveTo(f64, f64),
    RMoveTo(f64, f64),
    LineTo(f64, f64),
    RLineTo(f64, f64),
    HLineTo(f64),
    RHLineTo(f64),
    VLineTo(f64),
    RVLineTo(f64),
    CubicTo([f64; 6]),
    RCubicTo([f64; 6]),
    Close,
}

impl Directive {
    pub fn keyword(&self) -> &'static str {
	match self {
	    Directive::CanvasDimensions(_) => "CANVAS_DIMENSIONS",
	    Directive::NewPath => "NEW_PATH",
	    Directive::FillRuleNonzero => "FILL_RULE_NONZERO",
	    Directive::Stroke(_) => "STROKE",
	    Directive::CapRound => "CAP_ROUND",
	    Directive::MoveTo(..) => "MOVE_TO",
	    Directive::RMoveTo(..) => "R_MOVE_TO",
	    Directive::LineTo(..) => "LINE_TO",
	    Directive::RLineTo(..) => "R_LINE_TO",
	    Directive::HLineTo(_) => "H_LINE_TO",
	    Directive::RHLineTo(_) => "R_H_LINE_TO",
	    Directive::VLineTo(_) => "V_LINE_TO",
	    Directive::RVLineTo(_) => "R_V_LINE_TO",
	    Directive::CubicTo(_) => "CUBIC_TO",
	    Directive::RCubicTo(_) => "R_CUBIC_TO",
	    Directive::Close => "CLOSE",
	}
    }

    ///Coordinate operands, empty for markers and the canvas size
    pub fn operands(&self) -> Vec<f64> {
	match *self {
	    Directive::Stroke(v)
	    | Directive::HLineTo(v)
	    | Directive::RHLineTo(v)
	    | Directive::VLineTo(v)
	    | Directive::RVLineTo(v) => vec![v],
	    Directive::MoveTo(x, y)
	    | Directive::RMoveTo(x, y)
	    | Directive::LineTo(x, y)
	    | Directive::RLineTo(x, y) => vec![x, y],
	    Directive::CubicTo(p) | Directive::RCubicTo(p) => p.to_vec(),
	    Directive::CanvasDimensions(_)
	    | Directive::NewPath
	    | Directive::FillRuleNonzero
	    | Directive::CapRound
	    | Directive::Close => Vec::new(),
	}
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{},", self.keyword())?;

	if let Directive::CanvasDimensions(size) = self {
	    return write!(f, " {},", size);
	}

	for operand in self.operands() {
	    write!(f, " {:.2},", operand)?;
	}

	Ok(())
    }
}

///Everything emitted for a document, plus the paths that were cut short
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub directives: Vec<Directive>,
    pub warnings: Vec<UnsupportedCommand>,
}

impl Script {
    pub fn new() -> Self { Script::default() }

    pub fn push(&mut self, directive: Directive) {
	self.directives.push(directive);
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
	self.directives.iter().map(|directive| directive.to_string())
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	for (i, directive) in self.directives.iter().enumerate() {
	    if i > 0 {
		writeln!(f)?;
	    }
	    write!(f, "{}", directive)?;
	}
	Ok(())
    }
}
