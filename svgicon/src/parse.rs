use std::path::Path;

use log::debug;
use svg::node::element::tag;
use svg::node::Attributes;
use svg::parser::{Event, Parser};

use crate::error::{ConvertError, StyleError};
use crate::style::PathStyle;

///What the converter needs from one `<path>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathElement {
    pub data: String,
    pub style: PathStyle,
    ///Raw `style` attribute, applied on top of `style` when resolving
    pub declarations: Option<String>,
}

impl PathElement {
    ///Presentation attributes, overridden by `style="..."` declarations
    pub fn paint(&self) -> Result<PathStyle, StyleError> {
	let mut style = self.style.clone();
	if let Some(declarations) = &self.declarations {
	    style.merge(declarations.parse()?);
	}
	Ok(style)
    }
}

fn attribute(attributes: &Attributes, name: &str) -> Option<String> {
    attributes.get(name).map(|value| value.to_string())
}

fn path_element(attributes: &Attributes) -> PathElement {
    PathElement {
	data: attribute(attributes, "d").unwrap_or_default(),
	style: PathStyle {
	    fill: attribute(attributes, "fill"),
	    stroke: attribute(attributes, "stroke"),
	    stroke_width: attribute(attributes, "stroke-width"),
	},
	declarations: attribute(attributes, "style"),
    }
}

fn collect_paths(events: Parser<'_>) -> Result<Vec<PathElement>, ConvertError> {
    let mut paths = Vec::new();

    for event in events {
	match event {
	    Event::Tag(tag::Path, tag::Type::Start, attributes)
	    | Event::Tag(tag::Path, tag::Type::Empty, attributes) => {
		let element = path_element(&attributes);
		debug!("found path #{}: {} byte(s) of path data", paths.len(), element.data.len());
		paths.push(element);
	    },
	    Event::Error(err) => return Err(ConvertError::Document(err.to_string())),
	    _ => (),
	}
    }

    Ok(paths)
}

///Every `<path>` element of an SVG document, in document order
pub fn read_paths(content: &str) -> Result<Vec<PathElement>, ConvertError> {
    collect_paths(svg::read(content)?)
}

pub fn load_paths<P: AsRef<Path>>(path: P) -> Result<Vec<PathElement>, ConvertError> {
    let mut content = String::new();
    let events = svg::open(path, &mut content)?;

    collect_paths(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_in_document_order() {
	let doc = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
	    <g>
		<path d="M0 0 L1 1" fill="#000"/>
		<rect x="1" y="1" width="2" height="2"/>
	    </g>
	    <path d="m1 1 h2" stroke="#fff" stroke-width="2"></path>
	</svg>"##;

	let paths = read_paths(doc).unwrap();
	assert_eq!(paths.len(), 2);
	assert_eq!(paths[0].data, "M0 0 L1 1");
	assert_eq!(paths[0].style.fill.as_deref(), Some("#000"));
	assert_eq!(paths[1].style.stroke.as_deref(), Some("#fff"));
	assert_eq!(paths[1].style.stroke_width.as_deref(), Some("2"));
    }

    #[test]
    fn missing_data_is_empty() {
	let paths = read_paths(r#"<svg><path fill="red"/></svg>"#).unwrap();
	assert_eq!(paths, vec![PathElement {
	    data: String::new(),
	    style: PathStyle {
		fill: Some("red".to_string()),
		..PathStyle::default()
	    },
	    declarations: None,
	}]);
    }

    #[test]
    fn style_attribute_overrides() {
	let paths = read_paths(r#"<svg><path d="M0 0" stroke="red" style="stroke:none"/></svg>"#).unwrap();
	let paint = paths[0].paint().unwrap();
	assert_eq!(paint.stroke.as_deref(), Some("none"));
    }
}
