//! Chord token parsing.
//!
//! A chord token is a root spelling (`A`-`G`, optionally followed by `#` or
//! `b`) plus a free-form quality/extension suffix (`m`, `7`, `maj7`, `sus4`,
//! ...). The suffix is opaque at this level: it is captured verbatim and
//! carried through transposition untouched.

use std::fmt;

use thiserror::Error;

/// A chord token does not begin with a pitch letter `A`-`G`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("chord root must begin with a letter A-G")]
pub struct InvalidRoot;

/// A chord symbol split into a root spelling and a quality suffix.
///
/// # Example
/// ```
/// use cifra::Chord;
///
/// let chord = Chord::parse("Am7").unwrap();
/// assert_eq!(chord.root, "A");
/// assert_eq!(chord.suffix, "m7");
/// assert_eq!(chord.to_string(), "Am7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: String,
    pub suffix: String,
}

impl Chord {
    pub fn new(root: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
        }
    }

    /// Split a raw token into root and suffix.
    ///
    /// The root is the longest prefix matching `[A-G][#b]?`; everything
    /// after it is the suffix, which may be empty.
    pub fn parse(token: &str) -> Result<Self, InvalidRoot> {
        let mut chars = token.chars();
        match chars.next() {
            Some('A'..='G') => {}
            _ => return Err(InvalidRoot),
        }
        let root_len = match chars.next() {
            Some('#') | Some('b') => 2,
            _ => 1,
        };
        Ok(Self {
            root: token[..root_len].to_string(),
            suffix: token[root_len..].to_string(),
        })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_root() {
        assert_eq!(Chord::parse("C").unwrap(), Chord::new("C", ""));
    }

    #[test]
    fn test_parse_accidental_and_suffix() {
        assert_eq!(Chord::parse("F#m7").unwrap(), Chord::new("F#", "m7"));
        assert_eq!(Chord::parse("Bbmaj7").unwrap(), Chord::new("Bb", "maj7"));
        assert_eq!(Chord::parse("Gsus4").unwrap(), Chord::new("G", "sus4"));
    }

    #[test]
    fn test_suffix_is_free_form() {
        assert_eq!(Chord::parse("C+").unwrap(), Chord::new("C", "+"));
        assert_eq!(Chord::parse("Am7(b5)").unwrap(), Chord::new("A", "m7(b5)"));
    }

    #[test]
    fn test_invalid_roots() {
        assert_eq!(Chord::parse("H"), Err(InvalidRoot));
        assert_eq!(Chord::parse("c"), Err(InvalidRoot));
        assert_eq!(Chord::parse("7"), Err(InvalidRoot));
        assert_eq!(Chord::parse(""), Err(InvalidRoot));
    }

    #[test]
    fn test_display_round_trips_the_token() {
        for token in ["C", "Bb", "F#m7", "Dsus4", "E+"] {
            assert_eq!(Chord::parse(token).unwrap().to_string(), token);
        }
    }
}
