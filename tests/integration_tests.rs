//! Integration tests for the cifra library
//!
//! Tests the full pipeline from cifra source to rendered sheet.

use cifra::{parse, render_transposed, transpose_token};

const EVIDENCIAS: &str = r#"---
title: Evidências
artist: Chitãozinho & Xororó
key: C
---
<span class="chord">C</span>                    <span class="chord">Am</span>
Quando eu digo que deixei de te amar
<span class="chord">F</span>                    <span class="chord">G</span>
É porque eu te amo"#;

#[test]
fn test_render_transposed_up_two() {
    let sheet = render_transposed(EVIDENCIAS, 2).unwrap();
    assert!(sheet.contains(r#"<span class="chord">D</span>"#));
    assert!(sheet.contains(r#"<span class="chord">Bm</span>"#));
    assert!(sheet.contains(r#"<span class="chord">G</span>"#));
    assert!(sheet.contains(r#"<span class="chord">A</span>"#));
    assert!(sheet.contains("Quando eu digo que deixei de te amar"));
    assert!(sheet.contains("É porque eu te amo"));
}

#[test]
fn test_zero_offset_preserves_sheet() {
    let cifra = parse(EVIDENCIAS).unwrap();
    assert_eq!(cifra.render(0).unwrap(), cifra.content);
}

#[test]
fn test_metadata_and_chord_list() {
    let cifra = parse(EVIDENCIAS).unwrap();
    assert_eq!(cifra.metadata.title.as_deref(), Some("Evidências"));
    assert_eq!(cifra.metadata.artist.as_deref(), Some("Chitãozinho & Xororó"));
    assert_eq!(cifra.key(), "C");
    assert_eq!(cifra.chords().unwrap(), vec!["C", "Am", "F", "G"]);
}

#[test]
fn test_session_steps_match_single_step() {
    let cifra = parse(EVIDENCIAS).unwrap();
    let mut session = cifra.open_session().unwrap();
    session.step(1);
    session.step(1);
    let stepped = session.step(-1);

    let mut fresh = parse(EVIDENCIAS).unwrap().open_session().unwrap();
    assert_eq!(stepped, fresh.step(1));
    assert_eq!(stepped.key, "C#");
    assert_eq!(stepped.chords, vec!["C#", "A#m", "F#", "G#"]);
}

#[test]
fn test_missing_frontmatter_defaults() {
    let source = r#"<span class="chord">Em</span>
Lyrics here"#;
    let cifra = parse(source).unwrap();
    assert_eq!(cifra.metadata.title, None);
    assert_eq!(cifra.key(), "C");
    assert_eq!(cifra.chords().unwrap(), vec!["Em"]);
}

#[test]
fn test_invalid_metadata_is_an_error() {
    let source = "---\ntitle: [unclosed\n---\nbody";
    assert!(parse(source).is_err());
}

#[test]
fn test_unknown_tokens_render_untouched() {
    let source = r#"<span class="chord">C</span> <span class="chord">N.C.</span>"#;
    let sheet = render_transposed(source, 3).unwrap();
    assert!(sheet.contains(">D#<"));
    assert!(sheet.contains(">N.C.<"));
}

#[test]
fn test_key_indicator_tracks_the_sheet() {
    // The viewer shows transpose_token(key, offset) next to the rendered
    // sheet; both must agree for any offset.
    let cifra = parse(EVIDENCIAS).unwrap();
    for offset in [-3, 0, 5, 12] {
        let sheet = cifra.render(offset).unwrap();
        let key = transpose_token(cifra.key(), offset);
        assert!(sheet.contains(&format!(">{}<", key)));
    }
}
