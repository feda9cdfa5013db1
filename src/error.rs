//! # Error Types
//!
//! This module defines the error types for cifra parsing and rendering.
//!
//! Chord-level failures are deliberately not represented here: an
//! unparseable chord root ([`crate::chord::InvalidRoot`]) is swallowed
//! during rendering so that a sheet containing a typo or unsupported
//! notation stays readable. The offending token is simply left
//! untransposed.
//!
//! ## Error Types
//! - `MetadataError` - Invalid YAML frontmatter
//! - `MarkupError` - Malformed markup in the sheet body, with byte position

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CifraError {
    /// Invalid metadata error.
    ///
    /// Occurs when the YAML frontmatter is invalid or contains unsupported
    /// values.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::MetadataError("missing value for key".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: missing value for key");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// Malformed markup in the sheet body.
    ///
    /// `position` is the byte offset the reader had reached when the error
    /// was detected.
    #[error("Markup error at byte {position}: {message}")]
    MarkupError { position: usize, message: String },
}
