//! XML rendering and file output
//!
//! The document is rendered into memory first, so the output file is only
//! touched once a complete document exists.

use crate::document::{CardDatabase, CatalogSet, ROOT_ELEMENT};
use crate::error::Result;
use crate::mapper::CardElement;
use crate::sanitize::xml_safe;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

const INDENT_SIZE: usize = 2;

/// Render the document as indented UTF-8 XML
pub fn render(database: &CardDatabase) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new(ROOT_ELEMENT).with_attributes(database.root_attributes()),
    ))?;

    open(&mut writer, "sets")?;
    for set in &database.sets {
        write_catalog_set(&mut writer, set)?;
    }
    close(&mut writer, "sets")?;

    open(&mut writer, "cards")?;
    for card in &database.cards {
        write_card(&mut writer, card)?;
    }
    close(&mut writer, "cards")?;

    close(&mut writer, ROOT_ELEMENT)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Render and write to `path`, replacing any existing file
pub fn write_document(database: &CardDatabase, path: &Path) -> Result<()> {
    let bytes = render(database)?;
    std::fs::write(path, bytes)?;
    log::info!("Card database saved to {}", path.display());
    Ok(())
}

fn write_catalog_set<W: Write>(writer: &mut Writer<W>, set: &CatalogSet) -> Result<()> {
    open(writer, "set")?;
    text_element(writer, "name", &[], set.name)?;
    text_element(writer, "longname", &[], set.longname)?;
    text_element(writer, "settype", &[], set.settype)?;
    close(writer, "set")
}

fn write_card<W: Write>(writer: &mut Writer<W>, card: &CardElement) -> Result<()> {
    open(writer, "card")?;
    text_element(writer, "name", &[], &card.name)?;
    text_element(writer, "text", &[], &card.text)?;

    open(writer, "prop")?;
    for (name, value) in card.prop.entries() {
        text_element(writer, name, &[], value)?;
    }
    close(writer, "prop")?;

    for set in &card.sets {
        let uuid = set.uuid.hyphenated().to_string();
        text_element(
            writer,
            "set",
            &[("picURL", set.pic_url.as_str()), ("uuid", uuid.as_str())],
            &set.label,
        )?;
    }

    close(writer, "card")
}

fn open<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn close<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `<name attr="..">text</name>` on one line
///
/// Characters XML cannot carry are dropped from the text and attribute values.
fn text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let values: Vec<Cow<'_, str>> = attributes
        .iter()
        .map(|(_, value)| xml_safe(value))
        .collect();
    let start = BytesStart::new(name).with_attributes(
        attributes
            .iter()
            .zip(&values)
            .map(|((key, _), value)| (*key, value.as_ref())),
    );
    writer.write_event(Event::Start(start))?;
    let text = xml_safe(text);
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&*text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
