//! Converts SVG path data into icon command scripts.
//!
//! ```
//! let script = svgicon::convert_str(
//!     r#"<svg><path d="M 10 10 L 20 20 Z"/></svg>"#,
//!     &svgicon::ConvertOptions::default(),
//! ).unwrap();
//!
//! assert_eq!(script.to_string(), "CANVAS_DIMENSIONS, 960,\nFILL_RULE_NONZERO,\nMOVE_TO, 10.00, 10.00,\nLINE_TO, 20.00, 20.00,\nCLOSE,");
//! ```

mod data;
mod directive;
mod emit;
mod error;
mod parse;
mod style;
mod types;

use std::path::Path;

use log::{debug, warn};

pub use data::parse_path_data;
pub use directive::{Directive, Script};
pub use emit::{emit, Emitter, PathStatus, UnsupportedCommand, DEFAULT_CANVAS_SIZE};
pub use error::{ConvertError, PathError, StyleError};
pub use parse::{load_paths, read_paths, PathElement};
pub use style::{Mode, PathStyle, StyleContext};
pub use types::{CommandKind, Cursor, PathCommand, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    ///Multiplier applied to every coordinate and stroke width
    pub scale: f64,
    pub canvas_size: u32,
    ///Drop malformed paths with a warning instead of failing the document
    pub isolate_paths: bool,
    ///Fill every path, ignoring stroke attributes
    pub fill_only: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
	ConvertOptions {
	    scale: 1.0,
	    canvas_size: DEFAULT_CANVAS_SIZE,
	    isolate_paths: false,
	    fill_only: false,
	}
    }
}

fn prepare(index: usize, element: &PathElement, options: &ConvertOptions) -> Result<(Vec<PathCommand>, StyleContext), ConvertError> {
    let commands = parse_path_data(&element.data).map_err(|source| ConvertError::MalformedPath { index, source })?;

    let style = if options.fill_only {
	StyleContext::fill()
    } else {
	element
	    .paint()
	    .and_then(|paint| paint.resolve())
	    .map_err(|source| ConvertError::Style { index, source })?
    };

    Ok((commands, style))
}

///Converts already extracted path elements.
///
///Elements with empty path data are skipped and take no part in `NEW_PATH`
///placement. Warnings and errors both number paths by document position.
pub fn convert_paths(elements: &[PathElement], options: &ConvertOptions) -> Result<Script, ConvertError> {
    let emitter = Emitter::new(options.scale).with_canvas_size(options.canvas_size);
    let mut script = Script::new();
    emitter.emit_preamble(&mut script);

    let mut emitted = 0;
    for (index, element) in elements.iter().enumerate() {
	if element.data.trim().is_empty() {
	    debug!("skipping path #{}: no path data", index);
	    continue;
	}

	let (commands, style) = match prepare(index, element, options) {
	    Ok(prepared) => prepared,
	    Err(err) if options.isolate_paths => {
		warn!("skipping {}", err);
		continue;
	    },
	    Err(err) => return Err(err),
	};

	if let PathStatus::Truncated(warning) = emitter.emit_path(index, emitted > 0, &commands, &style, &mut script) {
	    script.warnings.push(warning);
	}
	emitted += 1;
    }

    Ok(script)
}

///Converts an SVG document held in memory
pub fn convert_str(content: &str, options: &ConvertOptions) -> Result<Script, ConvertError> {
    convert_paths(&read_paths(content)?, options)
}

pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<Script, ConvertError> {
    convert_paths(&load_paths(path)?, options)
}
