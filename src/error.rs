//! Error types for path operations

use thiserror::Error;

/// The error type for path construction and algebra operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Empty string supplied where a path atom is required
    #[error("path atoms must not be empty")]
    EmptyAtom,

    /// Atom contains a separator character for its dialect
    #[error("path atom {atom:?} contains a separator character")]
    AtomContainsSeparator { atom: String },

    /// Atom contains a character the dialect forbids
    #[error("invalid character {character:?} in path atom {atom:?}")]
    InvalidAtomCharacter { atom: String, character: char },

    /// Drive specifier is not a single ASCII letter
    #[error("invalid drive specifier {drive:?}, expected a single ASCII letter")]
    InvalidDrive { drive: String },

    /// Both paths specify a drive and the drives differ
    #[error("drive specifiers {base:?} and {other:?} do not match")]
    DriveMismatch { base: char, other: char },

    /// Unix and Windows paths cannot be combined
    #[error("paths of different dialects cannot be combined")]
    DialectMismatch,

    /// Operation requires a path with at least one atom
    #[error("the operation requires a path with at least one atom")]
    EmptyPath,

    /// Operation is only defined for absolute paths
    #[error("the operation requires an absolute path")]
    NotAbsolute,

    /// Operation is only defined for relative paths
    #[error("the operation requires a relative path")]
    NotRelative,

    /// No drive specifier is available to make the path absolute
    #[error("no drive specifier is available to make the path absolute")]
    DriveRequired,

    /// A relative Windows path cannot be anchored and carry a drive
    #[error("an anchored relative path cannot carry a drive specifier")]
    AnchoredDrive,

    /// Atom index is outside the path's atom sequence
    #[error("atom index {index} is out of range for a path with {len} atoms")]
    AtomIndexOutOfRange { index: usize, len: usize },
}

/// Result type for path operations
pub type Result<T> = std::result::Result<T, PathError>;
