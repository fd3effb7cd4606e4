//! Translation of parsed path commands into icon directives.
//!
//! `S`/`s` are approximated: the current point stands in for the first
//! control point, the previous curve's second control point is never
//! reflected.

use std::fmt;

use log::{trace, warn};

use crate::directive::{Directive, Script};
use crate::style::{Mode, StyleContext};
use crate::types::{CommandKind, Cursor, PathCommand, Position};

///Canvas size the icon pipeline expects unless told otherwise
pub const DEFAULT_CANVAS_SIZE: u32 = 960;

///A path whose emission stopped at a command with no directive
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedCommand {
    pub path_index: usize,
    pub command_index: usize,
    pub letter: char,
}

impl fmt::Display for UnsupportedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(
	    f,
	    "unhandled command `{}` in path #{} (command {}), rest of the path dropped",
	    self.letter, self.path_index, self.command_index
	)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathStatus {
    Complete,
    Truncated(UnsupportedCommand),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emitter {
    scale: f64,
    canvas_size: u32,
}

impl Emitter {
    pub fn new(scale: f64) -> Self {
	Emitter {
	    scale,
	    canvas_size: DEFAULT_CANVAS_SIZE,
	}
    }

    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
	self.canvas_size = canvas_size;
	self
    }

    ///Emits a whole document. Paths without a matching style are filled.
    pub fn emit(&self, paths: &[Vec<PathCommand>], styles: &[StyleContext]) -> Script {
	let mut script = Script::new();
	self.emit_preamble(&mut script);

	for (i, commands) in paths.iter().enumerate() {
	    let style = styles.get(i).copied().unwrap_or_default();

	    if let PathStatus::Truncated(warning) = self.emit_path(i, i > 0, commands, &style, &mut script) {
		script.warnings.push(warning);
	    }
	}

	script
    }

    pub fn emit_preamble(&self, script: &mut Script) {
	script.push(Directive::CanvasDimensions(self.canvas_size));
    }

    ///Appends one path: separator (when `separate`), style, then geometry.
    ///
    ///`index` only labels a truncation warning.
    pub fn emit_path(
	&self,
	index: usize,
	separate: bool,
	commands: &[PathCommand],
	style: &StyleContext,
	script: &mut Script,
    ) -> PathStatus {
	if separate {
	    script.push(Directive::NewPath);
	}
	self.emit_style(style, script);

	let mut cursor = Cursor::origin();

	for (command_index, command) in commands.iter().enumerate() {
	    match self.translate(command, &mut cursor) {
		Some(directive) => {
		    trace!("{} -> {}", command, directive);
		    script.push(directive);
		},
		None => {
		    let warning = UnsupportedCommand {
			path_index: index,
			command_index,
			letter: command.letter(),
		    };
		    warn!("{}", warning);
		    return PathStatus::Truncated(warning);
		},
	    }
	}

	PathStatus::Complete
    }

    fn emit_style(&self, style: &StyleContext, script: &mut Script) {
	match style.mode {
	    Mode::Stroke => {
		script.push(Directive::Stroke(style.stroke_width * self.scale));
		script.push(Directive::CapRound);
	    },
	    Mode::Fill => script.push(Directive::FillRuleNonzero),
	}
    }

    ///`None` for letters without a directive, or operands that don't fit the letter
    fn translate(&self, command: &PathCommand, cursor: &mut Cursor) -> Option<Directive> {
	let s = self.scale;

	let directive = match (command.kind, command.position, command.operands.as_slice()) {
	    (CommandKind::Move, Position::Absolute, &[x, y]) => {
		cursor.set(x, y);
		Directive::MoveTo(x * s, y * s)
	    },
	    (CommandKind::Move, Position::Relative, &[dx, dy]) => {
		cursor.translate(dx, dy);
		Directive::RMoveTo(dx * s, dy * s)
	    },
	    (CommandKind::Line, Position::Absolute, &[x, y]) => {
		cursor.set(x, y);
		Directive::LineTo(x * s, y * s)
	    },
	    (CommandKind::Line, Position::Relative, &[dx, dy]) => {
		cursor.translate(dx, dy);
		Directive::RLineTo(dx * s, dy * s)
	    },
	    (CommandKind::HorizontalLine, Position::Absolute, &[x]) => {
		cursor.set(x, cursor.y);
		Directive::HLineTo(x * s)
	    },
	    (CommandKind::HorizontalLine, Position::Relative, &[dx]) => {
		cursor.translate(dx, 0.0);
		Directive::RHLineTo(dx * s)
	    },
	    (CommandKind::VerticalLine, Position::Absolute, &[y]) => {
		cursor.set(cursor.x, y);
		Directive::VLineTo(y * s)
	    },
	    (CommandKind::VerticalLine, Position::Relative, &[dy]) => {
		cursor.translate(0.0, dy);
		Directive::RVLineTo(dy * s)
	    },
	    (CommandKind::CubicCurve, Position::Absolute, &[x1, y1, x2, y2, x, y]) => {
		cursor.set(x, y);
		Directive::CubicTo([x1 * s, y1 * s, x2 * s, y2 * s, x * s, y * s])
	    },
	    (CommandKind::CubicCurve, Position::Relative, &[dx1, dy1, dx2, dy2, dx, dy]) => {
		cursor.translate(dx, dy);
		Directive::RCubicTo([dx1 * s, dy1 * s, dx2 * s, dy2 * s, dx * s, dy * s])
	    },
	    (CommandKind::SmoothCubicCurve, Position::Absolute, &[x2, y2, x, y]) => {
		let (cx, cy) = (cursor.x, cursor.y);
		cursor.set(x, y);
		Directive::CubicTo([cx * s, cy * s, x2 * s, y2 * s, x * s, y * s])
	    },
	    (CommandKind::SmoothCubicCurve, Position::Relative, &[dx2, dy2, dx, dy]) => {
		cursor.translate(dx, dy);
		Directive::RCubicTo([0.0, 0.0, dx2 * s, dy2 * s, dx * s, dy * s])
	    },
	    (CommandKind::Close, _, _) => Directive::Close,
	    _ => return None,
	};

	Some(directive)
    }
}

///Emits `paths` with their `styles` at the given scale and the default canvas size
pub fn emit(paths: &[Vec<PathCommand>], styles: &[StyleContext], scale: f64) -> Script {
    Emitter::new(scale).emit(paths, styles)
}
