//! Chord qualities, intervals, and naming.

use serde::Serialize;

use crate::chord::Chord;
use crate::transpose::{pitch_index, SHARP_NAMES};

/// The qualities the dictionary page knows, in card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Seventh,
    Major7,
    Minor7,
    Sus4,
    Diminished,
    Augmented,
}

impl ChordQuality {
    /// Page order of the chord cards.
    pub const ALL: [ChordQuality; 8] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Seventh,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Sus4,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
    ];

    /// Parse the quality suffix of a chord token.
    ///
    /// The accepted aliases follow the dictionary page: `min` for minor,
    /// `°` for diminished, `+` for augmented. Anything else (including
    /// extensions the viewer transposes but never defines, like `9`) is
    /// not in the dictionary.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" | "maj" => Some(ChordQuality::Major),
            "m" | "min" => Some(ChordQuality::Minor),
            "7" => Some(ChordQuality::Seventh),
            "maj7" => Some(ChordQuality::Major7),
            "m7" | "min7" => Some(ChordQuality::Minor7),
            "sus4" => Some(ChordQuality::Sus4),
            "dim" | "°" => Some(ChordQuality::Diminished),
            "aug" | "+" => Some(ChordQuality::Augmented),
            _ => None,
        }
    }

    /// Canonical display suffix. Augmented displays as `+`, as in `C+`.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Seventh => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "+",
        }
    }

    /// Semitone intervals from the root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Seventh => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
        }
    }

    /// Portuguese quality name as shown on the chord cards.
    fn name_pt(self) -> &'static str {
        match self {
            ChordQuality::Major => "Maior",
            ChordQuality::Minor => "Menor",
            ChordQuality::Seventh => "com Sétima",
            ChordQuality::Major7 => "Maior com 7ª Maior",
            ChordQuality::Minor7 => "Menor com 7ª",
            ChordQuality::Sus4 => "Suspensa 4ª",
            ChordQuality::Diminished => "Diminuto",
            ChordQuality::Augmented => "Aumentado",
        }
    }
}

/// Solfège name of a root spelling, as the site displays notes.
pub fn solfege_name(root: &str) -> Option<&'static str> {
    let name = match root {
        "C" => "Dó",
        "C#" => "Dó#",
        "Db" => "Réb",
        "D" => "Ré",
        "D#" => "Ré#",
        "Eb" => "Mib",
        "E" => "Mi",
        "F" => "Fá",
        "F#" => "Fá#",
        "Gb" => "Solb",
        "G" => "Sol",
        "G#" => "Sol#",
        "Ab" => "Láb",
        "A" => "Lá",
        "A#" => "Lá#",
        "Bb" => "Sib",
        "B" => "Si",
        _ => return None,
    };
    Some(name)
}

/// Tone names of a chord, spelled with the sharp alphabet.
pub fn chord_tones(root: &str, quality: ChordQuality) -> Option<Vec<&'static str>> {
    let index = pitch_index(root)?;
    Some(
        quality
            .intervals()
            .iter()
            .map(|&interval| SHARP_NAMES[(index + interval as usize) % 12])
            .collect(),
    )
}

/// Full Portuguese name of a chord, e.g. `Dó Maior` or `Lá Menor com 7ª`.
pub fn full_name(chord: &Chord) -> Option<String> {
    let quality = ChordQuality::from_suffix(&chord.suffix)?;
    let note = solfege_name(&chord.root)?;
    Some(format!("{} {}", note, quality.name_pt()))
}
