//! Sheet-body markup handling.
//!
//! A cifra body is lyric text with chord tokens wrapped in
//! `<span class="chord">...</span>`. The functions here walk that fragment
//! as an XML event stream: extraction collects the chord-span texts in
//! document order, rendering rewrites them and copies every other event
//! through verbatim. Rendering always starts from the authored body, never
//! from previously rendered output.

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::CifraError;
use crate::transpose::transpose_token;

/// A `<span>` whose class list contains `chord`.
fn is_chord_span(tag: &BytesStart) -> bool {
    if tag.name().as_ref() != b"span" {
        return false;
    }
    match tag.try_get_attribute("class") {
        Ok(Some(attr)) => attr
            .value
            .split(|&byte| byte == b' ')
            .any(|class| class == b"chord"),
        _ => false,
    }
}

fn markup_error(reader: &Reader<&[u8]>, err: impl std::fmt::Display) -> CifraError {
    CifraError::MarkupError {
        position: reader.buffer_position(),
        message: err.to_string(),
    }
}

/// Every chord token in the body, in document order.
pub fn chord_occurrences(content: &str) -> Result<Vec<String>, CifraError> {
    let mut reader = Reader::from_str(content);
    let mut chords = Vec::new();
    let mut in_chord = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => in_chord = is_chord_span(&tag),
            Ok(Event::Text(text)) if in_chord => {
                let token = text.unescape().map_err(|e| markup_error(&reader, e))?;
                chords.push(token.into_owned());
            }
            Ok(Event::End(_)) => in_chord = false,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(markup_error(&reader, e)),
        }
    }

    Ok(chords)
}

/// Re-render the body with every chord token moved by `semitones`.
///
/// Only the text inside chord spans changes; all other markup, lyrics, and
/// whitespace copy through untouched. Tokens the transposer does not
/// recognize stay exactly as written.
pub fn render(content: &str, semitones: i32) -> Result<String, CifraError> {
    let mut reader = Reader::from_str(content);
    let mut writer = Writer::new(Vec::new());
    let mut in_chord = false;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(markup_error(&reader, e)),
        };
        match &event {
            Event::Start(tag) => in_chord = is_chord_span(tag),
            Event::End(_) => in_chord = false,
            Event::Text(text) if in_chord => {
                let token = text.unescape().map_err(|e| markup_error(&reader, e))?;
                let transposed = transpose_token(&token, semitones);
                writer
                    .write_event(Event::Text(BytesText::new(&transposed)))
                    .map_err(|e| markup_error(&reader, e))?;
                continue;
            }
            Event::Eof => break,
            _ => {}
        }
        writer
            .write_event(event)
            .map_err(|e| markup_error(&reader, e))?;
    }

    String::from_utf8(writer.into_inner()).map_err(|e| markup_error(&reader, e))
}
