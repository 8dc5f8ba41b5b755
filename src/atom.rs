//! Path atom validation
//!
//! An atom is a single path segment. Every atom in the crate passes through
//! [`Atom::new`] exactly once; path operations afterwards treat atoms as
//! opaque validated strings.

use std::fmt;

use crate::error::{PathError, Result};
use crate::path::Dialect;

/// A single validated path segment.
///
/// Atoms are non-empty, contain no separator character for their dialect,
/// and contain none of the characters the dialect forbids. They are never
/// mutated after validation.
///
/// # Examples
/// ```
/// use path_atoms::{Atom, Dialect, PathError};
///
/// let atom = Atom::new("lib.rs", Dialect::Unix).unwrap();
/// assert_eq!(atom.as_str(), "lib.rs");
///
/// assert_eq!(Atom::new("", Dialect::Unix), Err(PathError::EmptyAtom));
/// assert!(Atom::new("a/b", Dialect::Unix).is_err());
/// assert!(Atom::new("a|b", Dialect::Windows).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom(String);

impl Atom {
    /// Validate `text` as a path atom for `dialect`.
    ///
    /// Separator checks run over the whole atom before character checks, so
    /// an atom that is invalid in both ways reports the separator. The
    /// character error carries the first offending character.
    pub fn new(text: impl Into<String>, dialect: Dialect) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(PathError::EmptyAtom);
        }
        if text.chars().any(|c| dialect.is_separator(c)) {
            return Err(PathError::AtomContainsSeparator { atom: text });
        }
        if let Some(character) = text.chars().find(|&c| dialect.is_forbidden(c)) {
            return Err(PathError::InvalidAtomCharacter { atom: text, character });
        }
        Ok(Atom(text))
    }

    /// Construct an atom from already-validated text.
    ///
    /// Only for internal transforms that re-emit atoms which passed
    /// validation earlier (normalization output, `..` synthesis).
    pub(crate) fn new_unchecked(text: impl Into<String>) -> Self {
        Atom(text.into())
    }

    /// The atom's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the `.` atom.
    pub fn is_self(&self) -> bool {
        self.0 == "."
    }

    /// True for the `..` atom.
    pub fn is_parent(&self) -> bool {
        self.0 == ".."
    }

    /// Split the atom at the last `.` that is not its first character.
    ///
    /// Returns the stem and the extension, if any. A leading dot never
    /// starts an extension, so `.bashrc` has no extension.
    pub(crate) fn split_extension(&self) -> (&str, Option<&str>) {
        match self.0.rfind('.') {
            Some(index) if index > 0 => (&self.0[..index], Some(&self.0[index + 1..])),
            _ => (self.0.as_str(), None),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a whole atom sequence for `dialect`.
///
/// Fails on the first invalid atom; partially valid input is never accepted.
pub(crate) fn validate_atoms<I, S>(atoms: I, dialect: Dialect) -> Result<Vec<Atom>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    atoms
        .into_iter()
        .map(|atom| Atom::new(atom, dialect))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_atoms() {
        for text in ["file.txt", ".hidden", "..dots", "with space", "文件"] {
            assert!(Atom::new(text, Dialect::Unix).is_ok(), "unix: {}", text);
            assert!(Atom::new(text, Dialect::Windows).is_ok(), "windows: {}", text);
        }
    }

    #[test]
    fn test_empty_atom_rejected() {
        assert_eq!(Atom::new("", Dialect::Unix), Err(PathError::EmptyAtom));
        assert_eq!(Atom::new("", Dialect::Windows), Err(PathError::EmptyAtom));
    }

    #[test]
    fn test_separator_rejected() {
        assert_eq!(
            Atom::new("a/b", Dialect::Unix),
            Err(PathError::AtomContainsSeparator {
                atom: "a/b".to_string()
            })
        );
        assert_eq!(
            Atom::new("a/b", Dialect::Windows),
            Err(PathError::AtomContainsSeparator {
                atom: "a/b".to_string()
            })
        );
        // Backslash is a separator only on Windows
        assert!(Atom::new("a\\b", Dialect::Unix).is_ok());
        assert_eq!(
            Atom::new("a\\b", Dialect::Windows),
            Err(PathError::AtomContainsSeparator {
                atom: "a\\b".to_string()
            })
        );
    }

    #[test]
    fn test_windows_forbidden_characters() {
        for (text, character) in [
            ("a<b", '<'),
            ("a>b", '>'),
            ("a:b", ':'),
            ("a\"b", '"'),
            ("a|b", '|'),
            ("a?b", '?'),
            ("a*b", '*'),
            ("a\x01b", '\x01'),
            ("a\x1fb", '\x1f'),
        ] {
            assert_eq!(
                Atom::new(text, Dialect::Windows),
                Err(PathError::InvalidAtomCharacter {
                    atom: text.to_string(),
                    character,
                }),
                "windows should reject {:?}",
                text
            );
        }
    }

    #[test]
    fn test_unix_permissive_characters() {
        // Unix atoms only exclude the separator and NUL
        for text in ["a<b", "a:b", "a|b", "a?b", "a*b", "a\"b"] {
            assert!(Atom::new(text, Dialect::Unix).is_ok(), "unix: {:?}", text);
        }
        assert_eq!(
            Atom::new("a\0b", Dialect::Unix),
            Err(PathError::InvalidAtomCharacter {
                atom: "a\0b".to_string(),
                character: '\0',
            })
        );
    }

    #[test]
    fn test_separator_reported_before_forbidden_character() {
        assert!(matches!(
            Atom::new("a<b/c", Dialect::Windows),
            Err(PathError::AtomContainsSeparator { .. })
        ));
    }

    #[test]
    fn test_first_offending_character_reported() {
        assert_eq!(
            Atom::new("a*b?c", Dialect::Windows),
            Err(PathError::InvalidAtomCharacter {
                atom: "a*b?c".to_string(),
                character: '*',
            })
        );
    }

    #[test]
    fn test_dot_classification() {
        assert!(Atom::new(".", Dialect::Unix).unwrap().is_self());
        assert!(Atom::new("..", Dialect::Unix).unwrap().is_parent());
        assert!(!Atom::new("...", Dialect::Unix).unwrap().is_parent());
    }

    #[test]
    fn test_split_extension() {
        let split = |text: &str| {
            let atom = Atom::new(text, Dialect::Unix).unwrap();
            let (stem, extension) = atom.split_extension();
            (stem.to_string(), extension.map(str::to_string))
        };
        assert_eq!(split("file.txt"), ("file".to_string(), Some("txt".to_string())));
        assert_eq!(split("archive.tar.gz"), ("archive.tar".to_string(), Some("gz".to_string())));
        assert_eq!(split("plain"), ("plain".to_string(), None));
        assert_eq!(split(".bashrc"), (".bashrc".to_string(), None));
        assert_eq!(split("dot."), ("dot".to_string(), Some("".to_string())));
    }

    #[test]
    fn test_validate_atoms_rejects_whole_sequence() {
        let result = validate_atoms(["good", "", "also-good"], Dialect::Unix);
        assert_eq!(result, Err(PathError::EmptyAtom));
    }
}
