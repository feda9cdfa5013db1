//! Chord transposition.
//!
//! Twelve-tone arithmetic over two fixed spelling alphabets. Roots are
//! recognized in either sharp or flat form, but transposed output is always
//! written back through the sharp alphabet, even for a shift of zero. The
//! fixed respelling matches the viewer's behavior and is not key-aware.

use crate::chord::Chord;

/// The twelve output spellings. Every transposed root is written from this
/// table.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings accepted on input and re-spelled via [`SHARP_NAMES`] on
/// output.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Semitone index (0-11) of a root spelling, checking the sharp table first
/// and the flat table second.
pub fn pitch_index(root: &str) -> Option<usize> {
    SHARP_NAMES
        .iter()
        .position(|&name| name == root)
        .or_else(|| FLAT_NAMES.iter().position(|&name| name == root))
}

/// Transpose a parsed chord by a signed number of semitones.
///
/// Chords whose root is in neither alphabet pass through unchanged. The
/// suffix is never touched. Pure: two calls with the same inputs always
/// produce the same output, which is what lets the viewer recompute every
/// displayed chord from its authored original on each step.
///
/// # Example
/// ```
/// use cifra::{transpose, Chord};
///
/// let g7 = Chord::parse("G7").unwrap();
/// assert_eq!(transpose(&g7, -1).to_string(), "F#7");
/// ```
pub fn transpose(chord: &Chord, semitones: i32) -> Chord {
    let index = match pitch_index(&chord.root) {
        Some(index) => index,
        None => return chord.clone(),
    };
    let new_index = (index as i32 + semitones).rem_euclid(12) as usize;
    Chord::new(SHARP_NAMES[new_index], chord.suffix.clone())
}

/// Transpose a raw chord token, leaving anything unparseable exactly as
/// written.
pub fn transpose_token(token: &str, semitones: i32) -> String {
    match Chord::parse(token) {
        Ok(chord) => transpose(&chord, semitones).to_string(),
        Err(_) => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_step_up() {
        assert_eq!(transpose_token("C", 2), "D");
    }

    #[test]
    fn test_step_down_spells_sharp() {
        assert_eq!(transpose_token("G7", -1), "F#7");
    }

    #[test]
    fn test_flat_input_respelled_sharp_even_at_zero() {
        assert_eq!(transpose_token("Bbmaj7", 0), "A#maj7");
    }

    #[test]
    fn test_wraparound_past_an_octave() {
        // A is index 9; 9 - 15 wraps to 6, which is F#
        assert_eq!(transpose_token("Am", -15), "F#m");
    }

    #[test]
    fn test_unrecognized_root_is_a_no_op() {
        let chord = Chord::new("H", "m");
        assert_eq!(transpose(&chord, 5), chord);
        assert_eq!(transpose_token("N.C.", 3), "N.C.");
    }

    #[test]
    fn test_period_is_twelve() {
        for name in SHARP_NAMES.iter().chain(FLAT_NAMES.iter()) {
            for n in -24..=24 {
                assert_eq!(transpose_token(name, n), transpose_token(name, n + 12));
            }
        }
    }

    #[test]
    fn test_round_trip_up_to_sharp_normalization() {
        for name in SHARP_NAMES.iter().chain(FLAT_NAMES.iter()) {
            let normalized = transpose_token(name, 0);
            for n in -13..=13 {
                let shifted = transpose_token(name, n);
                assert_eq!(transpose_token(&shifted, -n), normalized);
            }
        }
    }

    #[test]
    fn test_suffix_carried_byte_for_byte() {
        for suffix in ["", "m", "7", "maj7", "sus4", "dim", "+", "m7(b5)", "7M"] {
            let chord = Chord::new("E", suffix);
            assert_eq!(transpose(&chord, 3).suffix, suffix);
        }
    }

    #[test]
    fn test_both_spellings_resolve_to_one_index() {
        for (i, flat) in FLAT_NAMES.iter().enumerate() {
            assert_eq!(pitch_index(flat), Some(i));
            assert_eq!(pitch_index(SHARP_NAMES[i]), Some(i));
        }
        assert_eq!(pitch_index("H"), None);
    }
}
