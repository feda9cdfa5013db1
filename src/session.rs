//! Per-sheet transpose state.
//!
//! The viewer keeps one session per open sheet. The session stores the
//! authored key token, the authored token of every chord occurrence, and a
//! single cumulative offset. Each step recomputes the whole view from those
//! originals at the net offset; transposed values are never fed back in, so
//! repeated up/down presses cannot drift or corrupt suffixes.
//!
//! Closing the sheet is dropping the session. Nothing survives it: the next
//! session is opened fresh at offset zero.

use serde::Serialize;

use crate::transpose::transpose_token;

/// Snapshot of a sheet's chords at the session's current offset.
///
/// Serialized camelCase for the viewer front-end, which overwrites the key
/// indicator and every chord span from it in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposedView {
    /// Key indicator text.
    pub key: String,
    /// One entry per chord occurrence, in document order.
    pub chords: Vec<String>,
    /// Net semitone offset from the authored key.
    pub offset: i32,
}

/// Cumulative transpose state for one open sheet.
#[derive(Debug, Clone)]
pub struct TransposeSession {
    original_key: String,
    originals: Vec<String>,
    offset: i32,
}

impl TransposeSession {
    /// Open a session over the authored key and chord occurrences. The
    /// offset starts at zero.
    pub fn open(key: impl Into<String>, chords: Vec<String>) -> Self {
        Self {
            original_key: key.into(),
            originals: chords,
            offset: 0,
        }
    }

    /// Net semitone offset from the authored key.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The authored (offset-zero) chord occurrences.
    pub fn originals(&self) -> &[String] {
        &self.originals
    }

    /// Move the offset by `delta` (`1` or `-1` from the up/down buttons;
    /// larger jumps are also valid) and return the recomputed view.
    pub fn step(&mut self, delta: i32) -> TransposedView {
        self.offset += delta;
        self.view()
    }

    /// The view at the current offset, recomputed from the originals.
    pub fn view(&self) -> TransposedView {
        TransposedView {
            key: transpose_token(&self.original_key, self.offset),
            chords: self
                .originals
                .iter()
                .map(|chord| transpose_token(chord, self.offset))
                .collect(),
            offset: self.offset,
        }
    }
}
