use std::str::FromStr;

use crate::data::leading_number;
use crate::error::StyleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fill,
    Stroke,
}

///How one path is painted. Fixed before any of its commands are emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleContext {
    pub mode: Mode,
    pub stroke_width: f64,
}

impl StyleContext {
    pub fn fill() -> Self {
	StyleContext {
	    mode: Mode::Fill,
	    stroke_width: 0.0,
	}
    }

    pub fn stroke(width: f64) -> Self {
	StyleContext {
	    mode: Mode::Stroke,
	    stroke_width: width,
	}
    }
}

impl Default for StyleContext {
    fn default() -> Self { StyleContext::fill() }
}

fn is_none(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("none")
}

///Raw paint attributes of a `<path>`, before they are resolved to a [`StyleContext`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<String>,
}

impl PathStyle {
    pub fn new() -> Self { PathStyle::default() }

    ///Folds `style="..."` declarations in, overriding presentation attributes
    pub fn merge(&mut self, other: PathStyle) {
	if other.fill.is_some() {
	    self.fill = other.fill;
	}
	if other.stroke.is_some() {
	    self.stroke = other.stroke;
	}
	if other.stroke_width.is_some() {
	    self.stroke_width = other.stroke_width;
	}
    }

    ///A non-"none" stroke wins over any fill
    pub fn resolve(&self) -> Result<StyleContext, StyleError> {
	let stroked = match &self.stroke {
	    Some(stroke) => !stroke.trim().is_empty() && !is_none(stroke),
	    None => false,
	};

	if !stroked {
	    return Ok(StyleContext::fill());
	}

	let width = match &self.stroke_width {
	    Some(raw) if !raw.trim().is_empty() => {
		leading_number(raw)
		    .filter(|width| *width >= 0.0)
		    .ok_or_else(|| StyleError::InvalidStrokeWidth(raw.clone()))?
	    },
	    _ => 1.0,
	};

	Ok(StyleContext::stroke(width))
    }
}

impl FromStr for PathStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, StyleError> {
	let decl_err = |decl: &str| StyleError::InvalidDeclaration(decl.trim().to_string());

	let mut result = PathStyle::new();

	for decl in s.split(';').filter(|decl| !decl.trim().is_empty()) {
	    let mut decl_pair = decl.splitn(2, ':');
	    let prop_name = decl_pair.next().ok_or_else(|| decl_err(decl))?;
	    let val = decl_pair.next().ok_or_else(|| decl_err(decl))?.trim().to_string();

	    match prop_name.trim() {
		"fill" => result.fill = Some(val),
		"stroke" => result.stroke = Some(val),
		"stroke-width" => result.stroke_width = Some(val),
		_ => (),
	    };
	}

	Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(fill: Option<&str>, stroke: Option<&str>, width: Option<&str>) -> PathStyle {
	PathStyle {
	    fill: fill.map(String::from),
	    stroke: stroke.map(String::from),
	    stroke_width: width.map(String::from),
	}
    }

    #[test]
    fn no_stroke_means_fill() {
	assert_eq!(attrs(None, None, None).resolve(), Ok(StyleContext::fill()));
	assert_eq!(attrs(Some("#fff"), Some("none"), Some("3")).resolve(), Ok(StyleContext::fill()));
	assert_eq!(attrs(None, Some(""), None).resolve(), Ok(StyleContext::fill()));
    }

    #[test]
    fn stroke_wins_over_fill() {
	assert_eq!(attrs(Some("#fff"), Some("#000"), Some("2")).resolve(), Ok(StyleContext::stroke(2.0)));
    }

    #[test]
    fn stroke_width_defaults_to_one() {
	assert_eq!(attrs(None, Some("currentColor"), None).resolve(), Ok(StyleContext::stroke(1.0)));
    }

    #[test]
    fn stroke_width_accepts_px() {
	assert_eq!(attrs(None, Some("red"), Some("1.5px")).resolve(), Ok(StyleContext::stroke(1.5)));
    }

    #[test]
    fn bad_stroke_width() {
	assert_eq!(
	    attrs(None, Some("red"), Some("thick")).resolve(),
	    Err(StyleError::InvalidStrokeWidth("thick".to_string()))
	);
    }

    #[test]
    fn negative_stroke_width() {
	assert_eq!(
	    attrs(None, Some("red"), Some("-3")).resolve(),
	    Err(StyleError::InvalidStrokeWidth("-3".to_string()))
	);
	assert_eq!(attrs(None, Some("red"), Some("0")).resolve(), Ok(StyleContext::stroke(0.0)));
    }

    #[test]
    fn style_declarations() {
	let style: PathStyle = "fill:none; stroke: #333 ;stroke-width:4;stroke-linecap:round;".parse().unwrap();
	assert_eq!(style, attrs(Some("none"), Some("#333"), Some("4")));
    }

    #[test]
    fn style_declaration_without_colon() {
	assert_eq!(
	    "stroke #333".parse::<PathStyle>(),
	    Err(StyleError::InvalidDeclaration("stroke #333".to_string()))
	);
    }

    #[test]
    fn declarations_override_attributes() {
	let mut style = attrs(Some("#fff"), Some("#000"), Some("2"));
	style.merge(attrs(None, Some("none"), None));
	assert_eq!(style.resolve(), Ok(StyleContext::fill()));
    }
}
