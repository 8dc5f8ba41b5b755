//! # path-atoms
//!
//! Immutable, dialect-typed path values with a full path algebra and no
//! filesystem access.
//!
//! Paths are sequences of validated atoms plus a rootedness flag, with
//! Windows paths adding a drive specifier and an anchored relative form.
//! Every operation - join, normalize, parent, relative-path computation,
//! name and extension edits, resolution against a base - returns a new
//! value; nothing is ever mutated and nothing ever touches a disk.
//!
//! ## Features
//!
//! - **Two dialects, kept apart**: Unix and Windows paths are distinct
//!   types, so cross-dialect mixups fail at the call instead of producing
//!   a nonsense path
//! - **Validation at construction**: empty atoms, embedded separators and
//!   dialect-forbidden characters are rejected before a value exists
//! - **Path algebra**: join, parent, ancestor checks, shortest relative
//!   path, `.`/`..` normalization
//! - **Drive-aware Windows semantics**: case-insensitive drive matching,
//!   anchored relative paths, drive mismatch detection
//! - **Pluggable resolution**: a resolver bound to an external
//!   current-directory provider, mockable in tests
//!
//! ## Examples
//!
//! ### Parsing and the path algebra
//!
//! ```rust
//! use path_atoms::UnixPath;
//!
//! let path = UnixPath::parse("/var/log/./app/../app.log").unwrap();
//! let normal = path.normalize();
//! assert_eq!(normal.to_string(), "/var/log/app.log");
//! assert_eq!(normal.name().unwrap(), "app.log");
//! assert_eq!(normal.extension().unwrap(), Some("log"));
//!
//! let base = UnixPath::parse("/var/spool").unwrap();
//! assert_eq!(normal.relative_to(&base).unwrap().to_string(), "../log/app.log");
//! ```
//!
//! ### Windows drives and anchored paths
//!
//! ```rust
//! use path_atoms::WindowsPath;
//!
//! let base = WindowsPath::parse("C:\\projects\\app").unwrap();
//! assert!(base.matches_drive('c'));
//!
//! // An anchored path is rooted but names no drive; joining it onto a
//! // based path keeps the drive and discards the base's atoms.
//! let anchored = WindowsPath::parse("\\temp\\build").unwrap();
//! assert_eq!(base.join(&anchored).unwrap().to_string(), "C:\\temp\\build");
//! ```
//!
//! ### Rejected constructions
//!
//! ```rust
//! use path_atoms::{PathError, UnixPath, WindowsPath};
//!
//! assert!(UnixPath::from_atoms(["a/b"], false).is_err());
//! assert_eq!(UnixPath::from_atoms([""], true), Err(PathError::EmptyAtom));
//! assert!(WindowsPath::parse("C:\\bad|atom").is_err());
//! ```

mod atom;
mod error;
mod normalize;
mod path;
mod resolve;
mod unix;
mod windows;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use atom::Atom;
pub use error::{PathError, Result};
pub use path::{Dialect, Path};
pub use resolve::{resolve, resolve_unix, resolve_windows, BasePathProvider, BoundResolver};
pub use unix::UnixPath;
pub use windows::{Drive, WindowsPath};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
