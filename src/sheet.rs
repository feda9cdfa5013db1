//! Cifra source parsing.
//!
//! A cifra file is YAML frontmatter between `---` lines followed by the
//! sheet body. The frontmatter carries display metadata (title, artist,
//! declared key); the body is the tag-delimited lyric/chord markup handled
//! by [`crate::markup`].
//!
//! # Example
//! ```
//! use cifra::parse;
//!
//! let source = r#"---
//! title: Pais e Filhos
//! artist: Legião Urbana
//! key: G
//! ---
//! <span class="chord">G</span>
//! Estátuas e cofres"#;
//!
//! let cifra = parse(source)?;
//! assert_eq!(cifra.metadata.title.as_deref(), Some("Pais e Filhos"));
//! assert_eq!(cifra.key(), "G");
//! # Ok::<(), cifra::CifraError>(())
//! ```

use serde::Deserialize;

use crate::error::CifraError;
use crate::markup;
use crate::session::TransposeSession;

/// Key the viewer assumes when the frontmatter declares none.
pub const DEFAULT_KEY: &str = "C";

/// Display metadata from the frontmatter. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub key: Option<String>,
}

/// A parsed cifra: metadata plus the authored sheet body.
#[derive(Debug, Clone)]
pub struct Cifra {
    pub metadata: Metadata,
    pub content: String,
}

/// Parse a cifra source string.
///
/// A source without a frontmatter block yields default metadata; invalid
/// YAML inside the block is an error.
pub fn parse(source: &str) -> Result<Cifra, CifraError> {
    let (frontmatter, content) = extract_frontmatter(source);
    let metadata = match frontmatter {
        Some(block) => {
            serde_yaml::from_str(&block).map_err(|e| CifraError::MetadataError(e.to_string()))?
        }
        None => Metadata::default(),
    };
    Ok(Cifra { metadata, content })
}

/// Split off the frontmatter block (between the first two `---` lines).
///
/// Returns (frontmatter, body). Sources without a complete block are all
/// body.
fn extract_frontmatter(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    let mut start = None;
    let mut end = None;
    for (i, line) in lines.iter().enumerate() {
        if line.trim() == "---" {
            if start.is_none() {
                start = Some(i);
            } else {
                end = Some(i);
                break;
            }
        }
    }

    match (start, end) {
        (Some(start), Some(end)) => {
            let block = lines[start + 1..end].join("\n");
            let body: Vec<&str> = lines[..start]
                .iter()
                .chain(lines[end + 1..].iter())
                .copied()
                .collect();
            (Some(block), body.join("\n"))
        }
        _ => (None, source.to_string()),
    }
}

impl Cifra {
    /// The declared key, or the viewer default when absent.
    pub fn key(&self) -> &str {
        self.metadata.key.as_deref().unwrap_or(DEFAULT_KEY)
    }

    /// Every chord token in the body, in document order.
    pub fn chord_occurrences(&self) -> Result<Vec<String>, CifraError> {
        markup::chord_occurrences(&self.content)
    }

    /// Distinct chord tokens in order of first appearance. Feeds the
    /// chord-button strip and the dictionary popups.
    pub fn chords(&self) -> Result<Vec<String>, CifraError> {
        let mut seen = Vec::new();
        for chord in self.chord_occurrences()? {
            if !seen.contains(&chord) {
                seen.push(chord);
            }
        }
        Ok(seen)
    }

    /// Open a transpose session over the declared key and all chord
    /// occurrences.
    pub fn open_session(&self) -> Result<TransposeSession, CifraError> {
        Ok(TransposeSession::open(self.key(), self.chord_occurrences()?))
    }

    /// Render the body with every chord moved by `semitones`, always
    /// starting from the authored content.
    pub fn render(&self, semitones: i32) -> Result<String, CifraError> {
        markup::render(&self.content, semitones)
    }
}
