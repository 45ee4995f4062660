//! SVG parsing from XML.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::IkonError;

/// Parse an SVG string into its root element.
///
/// Only elements and attributes survive: XML declarations, DOCTYPEs,
/// comments, text nodes and processing instructions carry no icon geometry
/// and are skipped.
pub fn parse_svg(svg: &str) -> Result<Element, IkonError> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                return parse_element(&mut reader, &start);
            }
            Event::Empty(start) => {
                return parse_element_start(&start);
            }
            Event::Eof => break,
            _ => {
                // Declarations, comments, whitespace before the root
            }
        }
    }

    Err(IkonError::InvalidSvg("No root element found".into()))
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, IkonError> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element.children.push(parse_element(reader, &start)?);
            }
            Event::Empty(start) => {
                element.children.push(parse_element_start(&start)?);
            }
            Event::End(_) => {
                break;
            }
            Event::Eof => {
                return Err(IkonError::InvalidSvg("Unexpected end of file".into()));
            }
            _ => {
                // Text, comments, CDATA and PIs are not icon geometry
            }
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart) -> Result<Element, IkonError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| IkonError::InvalidSvg(format!("Invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element
            .attributes
            .push(Attribute::new(key, value.into_owned()));
    }

    Ok(element)
}
