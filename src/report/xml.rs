use std::io::Write;

use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::formatter::Formatter;
use crate::models::FormattedMetadata;

/// Build an XML document from normalized sections.
///
/// Free text goes through the formatter's sanitizer and is written as
/// already-escaped content, so markup kept by soft mode stays markup. When
/// that markup is not a well-formed fragment, the raw text is escaped whole
/// instead. Attribute values are escaped by quick-xml.
pub fn render(md: &FormattedMetadata, formatter: &Formatter) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("metadata");
    root.push_attribute(("lang", formatter.lang()));
    if !md.title.is_empty() {
        root.push_attribute(("title", md.title.as_str()));
    }
    writer.write_event(Event::Start(root))?;

    if let Some(text) = &md.abstract_text {
        write_cleaned(&mut writer, formatter, "abstract", &[], text)?;
    }

    if !md.conditions.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("conditions")))?;
        for condition in &md.conditions {
            let mut attrs = Vec::new();
            if let Some(name) = &condition.name {
                attrs.push(("name", name.as_str()));
            }
            if let Some(link) = &condition.link {
                attrs.push(("link", link.as_str()));
            }
            write_cleaned(&mut writer, formatter, "condition", &attrs, &condition.description)?;
        }
        writer.write_event(Event::End(BytesEnd::new("conditions")))?;
    }

    if !md.limitations.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("limitations")))?;
        for limitation in &md.limitations {
            write_cleaned(&mut writer, formatter, "limitation", &[], limitation)?;
        }
        writer.write_event(Event::End(BytesEnd::new("limitations")))?;
    }

    if !md.specifications.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("specifications")))?;
        for spec in &md.specifications {
            let start = BytesStart::new("specification").with_attributes([
                ("conformant", spec.conformant.as_str()),
                ("link", spec.link.as_str()),
                ("published", spec.published.as_str()),
            ]);
            writer.write_event(Event::Start(start))?;
            writer.write_event(Event::Text(BytesText::new(&spec.name)))?;
            writer.write_event(Event::End(BytesEnd::new("specification")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("specifications")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("metadata")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// `<name attrs...>text</name>`, with the sanitized text written verbatim.
fn write_cleaned<W: Write>(
    writer: &mut Writer<W>,
    formatter: &Formatter,
    name: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
    writer.write_event(Event::Start(start))?;

    let cleaned = formatter.clean(Some(text));
    if is_well_formed_fragment(&cleaned) {
        writer.write_event(Event::Text(BytesText::from_escaped(cleaned.as_str())))?;
    } else {
        tracing::debug!(element = name, "kept markup is not well-formed, escaping the raw text");
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Whether `fragment` is valid element content: tags balanced and matching,
/// alphabetic tag names, well-formed attributes and known entities only.
fn is_well_formed_fragment(fragment: &str) -> bool {
    let mut reader = Reader::from_str(fragment);
    let mut depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if !is_valid_start(&e) {
                    return false;
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                if !is_valid_start(&e) {
                    return false;
                }
            }
            Ok(Event::End(_)) => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            Ok(Event::Text(t)) => {
                if t.unescape().is_err() {
                    return false;
                }
            }
            Ok(Event::Eof) => return depth == 0,
            _ => return false,
        }
    }
}

fn is_valid_start(start: &BytesStart) -> bool {
    let name = start.name();
    !name.as_ref().is_empty()
        && name.as_ref().iter().all(u8::is_ascii_alphabetic)
        && start
            .attributes()
            .all(|attr| attr.map_or(false, |a| a.unescape_value().is_ok()))
}
