//! Oscillator frequencies for chord playback.
//!
//! The dictionary page sounds a chord by spawning one oscillator per tone.
//! Roots take their frequency from a fixed equal-tempered table for the
//! octave at middle C (A4 = 440 Hz); the remaining tones are derived from
//! the root by the quality's intervals.

use crate::chord::Chord;
use crate::transpose::pitch_index;

use super::quality::ChordQuality;

/// Equal-tempered frequencies in Hz, octave 4, indexed like the spelling
/// alphabets.
const NOTE_FREQUENCIES: [f64; 12] = [
    261.63, // C
    277.18, // C#
    293.66, // D
    311.13, // D#
    329.63, // E
    349.23, // F
    369.99, // F#
    392.00, // G
    415.30, // G#
    440.00, // A
    466.16, // A#
    493.88, // B
];

/// Frequency of a root spelling (sharp or flat form), octave 4.
pub fn note_frequency(root: &str) -> Option<f64> {
    pitch_index(root).map(|index| NOTE_FREQUENCIES[index])
}

pub(super) fn frequencies_for(root: &str, quality: ChordQuality) -> Vec<f64> {
    let root_freq = match note_frequency(root) {
        Some(freq) => freq,
        None => return Vec::new(),
    };
    quality
        .intervals()
        .iter()
        .map(|&interval| root_freq * 2f64.powf(f64::from(interval) / 12.0))
        .collect()
}

/// Frequencies for a chord token, or empty when the dictionary does not
/// know it.
pub fn chord_frequencies(token: &str) -> Vec<f64> {
    let chord = match Chord::parse(token) {
        Ok(chord) => chord,
        Err(_) => return Vec::new(),
    };
    let quality = match ChordQuality::from_suffix(&chord.suffix) {
        Some(quality) => quality,
        None => return Vec::new(),
    };
    frequencies_for(&chord.root, quality)
}
