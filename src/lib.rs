//! # cifra
//!
//! Chord-sheet ("cifra") transposition for the MusicaViva viewer.
//!
//! A cifra source is YAML frontmatter (title, artist, declared key) followed
//! by a sheet body in which chord tokens are wrapped in
//! `<span class="chord">...</span>`. This crate parses that source, moves
//! every chord by a signed semitone count, and re-renders the sheet. All
//! transposed roots are spelled from a fixed sharp alphabet; anything the
//! parser does not recognize as a chord passes through untouched.
//!
//! ## Pipeline
//! 1. Parse the source into metadata + body ([`sheet`])
//! 2. Scan the body for chord spans ([`markup`])
//! 3. Transpose each token ([`chord`], [`transpose`])
//! 4. Re-render, or hand a [`TransposeSession`] to the viewer for
//!    cumulative up/down stepping
//!
//! The [`dictionary`] module carries the chord-dictionary data: tone
//! spellings, Portuguese names, and oscillator frequencies.
//!
//! ## Example
//! ```rust
//! use cifra::render_transposed;
//!
//! let source = r#"---
//! title: Evidências
//! key: C
//! ---
//! <span class="chord">C</span> <span class="chord">Am</span>
//! Quando eu digo que deixei de te amar"#;
//!
//! let sheet = render_transposed(source, 2)?;
//! assert!(sheet.contains(">D<"));
//! assert!(sheet.contains(">Bm<"));
//! # Ok::<(), cifra::CifraError>(())
//! ```

pub mod chord;
pub mod dictionary;
pub mod error;
pub mod markup;
pub mod session;
pub mod sheet;
pub mod transpose;

pub use chord::{Chord, InvalidRoot};
pub use error::CifraError;
pub use session::{TransposeSession, TransposedView};
pub use sheet::{parse, Cifra, Metadata};
pub use transpose::{transpose, transpose_token};

/// Parse a cifra source and render its sheet moved by `semitones`.
/// This is the main entry point for the library.
pub fn render_transposed(source: &str, semitones: i32) -> Result<String, CifraError> {
    let cifra = parse(source)?;
    cifra.render(semitones)
}
