//! Unix-dialect path values

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::atom::{validate_atoms, Atom};
use crate::error::{PathError, Result};
use crate::normalize::normalize_atoms;
use crate::path::Dialect;

/// An immutable Unix-dialect path.
///
/// A path is an ordered sequence of validated atoms plus a rootedness flag
/// and a cosmetic trailing-separator flag. The absolute path with no atoms
/// is the root `/`; the relative path with no atoms is the empty path, and
/// name or parent queries on it fail with [`PathError::EmptyPath`].
///
/// Every operation returns a new value; no path is mutated after
/// construction.
///
/// # Examples
/// ```
/// use path_atoms::UnixPath;
///
/// let path = UnixPath::parse("/src/./lib/../main.rs").unwrap();
/// let normal = path.normalize();
/// assert_eq!(normal.to_string(), "/src/main.rs");
/// assert_eq!(normal.name().unwrap(), "main.rs");
/// assert_eq!(normal.extension().unwrap(), Some("rs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnixPath {
    atoms: Vec<Atom>,
    absolute: bool,
    trailing_separator: bool,
}

impl UnixPath {
    /// Create a path from a sequence of atom strings.
    ///
    /// Every atom is validated; the whole call fails on the first invalid
    /// one.
    ///
    /// # Examples
    /// ```
    /// use path_atoms::UnixPath;
    ///
    /// let path = UnixPath::from_atoms(["foo", "bar"], true).unwrap();
    /// assert_eq!(path.to_string(), "/foo/bar");
    ///
    /// assert!(UnixPath::from_atoms(["a/b"], false).is_err());
    /// assert!(UnixPath::from_atoms([""], false).is_err());
    /// ```
    pub fn from_atoms<I, S>(atoms: I, absolute: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            atoms: validate_atoms(atoms, Dialect::Unix)?,
            absolute,
            trailing_separator: false,
        })
    }

    /// The root path `/`.
    pub fn root() -> Self {
        Self {
            atoms: Vec::new(),
            absolute: true,
            trailing_separator: false,
        }
    }

    /// The empty relative path.
    pub fn empty() -> Self {
        Self {
            atoms: Vec::new(),
            absolute: false,
            trailing_separator: false,
        }
    }

    /// Parse a path from its string form.
    ///
    /// A leading separator marks the path absolute, a trailing separator
    /// sets the trailing flag, and empty interior segments are dropped.
    /// The empty string parses to the empty relative path.
    ///
    /// # Examples
    /// ```
    /// use path_atoms::UnixPath;
    ///
    /// let path = UnixPath::parse("/usr//local/").unwrap();
    /// assert!(path.is_absolute());
    /// assert!(path.has_trailing_separator());
    /// assert_eq!(path.to_string(), "/usr/local/");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let absolute = text.starts_with('/');
        let atoms = validate_atoms(
            text.split('/').filter(|segment| !segment.is_empty()),
            Dialect::Unix,
        )?;
        let trailing_separator = !atoms.is_empty() && text.ends_with('/');
        Ok(Self {
            atoms,
            absolute,
            trailing_separator,
        })
    }

    /// Internal constructor for atoms that already passed validation.
    pub(crate) fn from_validated(atoms: Vec<Atom>, absolute: bool, trailing_separator: bool) -> Self {
        let trailing_separator = trailing_separator && !atoms.is_empty();
        Self {
            atoms,
            absolute,
            trailing_separator,
        }
    }

    /// The path's atoms in order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The number of atoms.
    pub fn depth(&self) -> usize {
        self.atoms.len()
    }

    /// The atom at `index`.
    pub fn atom_at(&self, index: usize) -> Result<&Atom> {
        self.atoms.get(index).ok_or(PathError::AtomIndexOutOfRange {
            index,
            len: self.atoms.len(),
        })
    }

    /// A sub-range of the path's atoms.
    pub fn slice_atoms(&self, range: Range<usize>) -> Result<&[Atom]> {
        if range.start > range.end || range.end > self.atoms.len() {
            return Err(PathError::AtomIndexOutOfRange {
                index: range.end,
                len: self.atoms.len(),
            });
        }
        Ok(&self.atoms[range])
    }

    /// True if the path is absolute.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// True if the path is relative.
    pub fn is_relative(&self) -> bool {
        !self.absolute
    }

    /// True for the absolute path with no atoms.
    pub fn is_root(&self) -> bool {
        self.absolute && self.atoms.is_empty()
    }

    /// True for the relative path with no atoms.
    pub fn is_empty(&self) -> bool {
        !self.absolute && self.atoms.is_empty()
    }

    /// True if the rendered form ends with a separator.
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// A copy with the trailing-separator flag set to `on`.
    ///
    /// The flag is cosmetic: it affects rendering only, never the result of
    /// join, resolve or ancestor checks. It has no effect on a path with no
    /// atoms.
    pub fn with_trailing_separator(&self, on: bool) -> Self {
        Self {
            atoms: self.atoms.clone(),
            absolute: self.absolute,
            trailing_separator: on && !self.atoms.is_empty(),
        }
    }

    /// Append a relative path's atoms to this path.
    ///
    /// The result keeps this path's rootedness and takes `other`'s trailing
    /// flag. Fails with [`PathError::NotRelative`] if `other` is absolute.
    ///
    /// # Examples
    /// ```
    /// use path_atoms::UnixPath;
    ///
    /// let base = UnixPath::parse("/usr").unwrap();
    /// let lib = UnixPath::parse("local/lib").unwrap();
    /// assert_eq!(base.join(&lib).unwrap().to_string(), "/usr/local/lib");
    /// ```
    pub fn join(&self, other: &UnixPath) -> Result<UnixPath> {
        if other.absolute {
            return Err(PathError::NotRelative);
        }
        let mut atoms = self.atoms.clone();
        atoms.extend(other.atoms.iter().cloned());
        Ok(Self::from_validated(
            atoms,
            self.absolute,
            other.trailing_separator,
        ))
    }

    /// The path with its last atom dropped.
    ///
    /// Fails with [`PathError::EmptyPath`] on the root and on the empty
    /// relative path.
    pub fn parent(&self) -> Result<UnixPath> {
        if self.atoms.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let mut atoms = self.atoms.clone();
        atoms.pop();
        Ok(Self::from_validated(atoms, self.absolute, false))
    }

    /// The last atom's text.
    pub fn name(&self) -> Result<&str> {
        self.atoms
            .last()
            .map(Atom::as_str)
            .ok_or(PathError::EmptyPath)
    }

    /// The last atom's text up to its extension.
    pub fn name_without_extension(&self) -> Result<&str> {
        Ok(self.last_atom()?.split_extension().0)
    }

    /// The last atom's extension, if it has one.
    pub fn extension(&self) -> Result<Option<&str>> {
        Ok(self.last_atom()?.split_extension().1)
    }

    fn last_atom(&self) -> Result<&Atom> {
        self.atoms.last().ok_or(PathError::EmptyPath)
    }

    /// A copy with the last atom replaced by `name`.
    pub fn replace_name(&self, name: &str) -> Result<UnixPath> {
        if self.atoms.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let atom = Atom::new(name, Dialect::Unix)?;
        let mut atoms = self.atoms.clone();
        atoms.pop();
        atoms.push(atom);
        Ok(Self::from_validated(
            atoms,
            self.absolute,
            self.trailing_separator,
        ))
    }

    /// A copy with the last atom's extension replaced by `extension`.
    ///
    /// An empty `extension` removes the extension.
    pub fn replace_extension(&self, extension: &str) -> Result<UnixPath> {
        let stem = self.name_without_extension()?.to_string();
        let name = if extension.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, extension)
        };
        self.replace_name(&name)
    }

    /// Collapse `.` and resolvable `..` atoms.
    ///
    /// Idempotent. Rootedness and the trailing flag are preserved.
    ///
    /// # Examples
    /// ```
    /// use path_atoms::UnixPath;
    ///
    /// let path = UnixPath::parse("/foo/./bar/../baz").unwrap();
    /// assert_eq!(path.normalize().to_string(), "/foo/baz");
    ///
    /// let relative = UnixPath::parse("../../a/..").unwrap();
    /// assert_eq!(relative.normalize().to_string(), "../..");
    /// ```
    pub fn normalize(&self) -> UnixPath {
        Self::from_validated(
            normalize_atoms(&self.atoms, self.absolute),
            self.absolute,
            self.trailing_separator,
        )
    }

    /// The same atoms reinterpreted as an absolute path.
    pub fn to_absolute(&self) -> UnixPath {
        Self {
            atoms: self.atoms.clone(),
            absolute: true,
            trailing_separator: self.trailing_separator,
        }
    }

    /// The same atoms reinterpreted as a relative path.
    pub fn to_relative(&self) -> UnixPath {
        Self {
            atoms: self.atoms.clone(),
            absolute: false,
            trailing_separator: self.trailing_separator,
        }
    }

    /// True if this path's atoms are a strict prefix of `other`'s.
    ///
    /// Meaningful for absolute paths; false whenever either side is
    /// relative. A path is never its own ancestor.
    pub fn is_ancestor_of(&self, other: &UnixPath) -> bool {
        self.absolute
            && other.absolute
            && other.atoms.len() > self.atoms.len()
            && self.atoms[..] == other.atoms[..self.atoms.len()]
    }

    /// True if `other` is exactly one atom below this path.
    pub fn is_parent_of(&self, other: &UnixPath) -> bool {
        self.is_ancestor_of(other) && other.atoms.len() == self.atoms.len() + 1
    }

    /// The shortest relative path from `base` to this path.
    ///
    /// Both paths must be absolute; each is normalized before comparison.
    /// One `..` is emitted per atom of `base` past the common prefix,
    /// followed by this path's remaining atoms. `base.join(result)`
    /// normalizes back to this path.
    ///
    /// # Examples
    /// ```
    /// use path_atoms::UnixPath;
    ///
    /// let this = UnixPath::parse("/foo/bar").unwrap();
    /// let base = UnixPath::parse("/foo/baz").unwrap();
    /// assert_eq!(this.relative_to(&base).unwrap().to_string(), "../bar");
    /// ```
    pub fn relative_to(&self, base: &UnixPath) -> Result<UnixPath> {
        if !self.absolute || !base.absolute {
            return Err(PathError::NotAbsolute);
        }
        let own = self.normalize();
        let base = base.normalize();
        Ok(Self::from_validated(
            relative_atoms(&own.atoms, &base.atoms),
            false,
            false,
        ))
    }
}

/// Atoms of the shortest path leading from `base` to `target`.
///
/// Both sequences must already be normalized.
pub(crate) fn relative_atoms(target: &[Atom], base: &[Atom]) -> Vec<Atom> {
    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let mut atoms = Vec::with_capacity(base.len() - common + target.len() - common);
    for _ in common..base.len() {
        atoms.push(Atom::new_unchecked(".."));
    }
    atoms.extend(target[common..].iter().cloned());
    atoms
}

impl fmt::Display for UnixPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            f.write_str(atom.as_str())?;
        }
        if self.trailing_separator {
            f.write_str("/")?;
        }
        Ok(())
    }
}

impl FromStr for UnixPath {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}
