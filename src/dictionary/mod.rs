//! # Chord Dictionary
//!
//! Data behind the dictionary page: for a chord symbol, the recognized
//! quality, the spelled chord tones, the Portuguese full name, and the
//! oscillator frequencies used to sound it.
//!
//! ## Sub-modules
//! - `quality` - Chord qualities, intervals, tone spelling, naming
//! - `audio` - Note and chord frequencies for oscillator playback
//!
//! ## Key Types
//! - [`ChordQuality`] - The eight qualities shown as chord cards
//! - [`ChordEntry`] - Serializable card data for one chord
//!
//! The dictionary is stricter than the transposer: transposition carries
//! any suffix opaquely, but only the quality suffixes listed in
//! [`ChordQuality::from_suffix`] have dictionary entries.
//!
//! ## Example
//! ```rust
//! use cifra::dictionary;
//!
//! let entry = dictionary::lookup("Am").unwrap();
//! assert_eq!(entry.full_name, "Lá Menor");
//! assert_eq!(entry.notes, vec!["A", "C", "E"]);
//! ```

mod audio;
mod quality;


pub use audio::{chord_frequencies, note_frequency};
pub use quality::{chord_tones, full_name, solfege_name, ChordQuality};

use serde::Serialize;

use crate::chord::Chord;

/// Card data for one chord, shaped for the dictionary page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordEntry {
    /// Symbol as displayed, e.g. `Cm7`.
    pub name: String,
    /// Portuguese full name, e.g. `Dó Menor com 7ª`.
    pub full_name: String,
    /// Tone names, sharp-spelled.
    pub notes: Vec<&'static str>,
    /// Oscillator frequencies in Hz, one per tone.
    pub frequencies: Vec<f64>,
}

/// Look up one chord token. Unknown roots or qualities have no entry.
pub fn lookup(token: &str) -> Option<ChordEntry> {
    let chord = Chord::parse(token).ok()?;
    let quality = ChordQuality::from_suffix(&chord.suffix)?;
    let notes = chord_tones(&chord.root, quality)?;
    let full_name = full_name(&chord)?;
    Some(ChordEntry {
        name: format!("{}{}", chord.root, quality.suffix()),
        full_name,
        notes,
        frequencies: audio::frequencies_for(&chord.root, quality),
    })
}

/// The eight card entries for a selected root, in page order.
pub fn entries_for(root: &str) -> Vec<ChordEntry> {
    ChordQuality::ALL
        .iter()
        .filter_map(|quality| lookup(&format!("{}{}", root, quality.suffix())))
        .collect()
}
