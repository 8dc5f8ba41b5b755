//! Windows-dialect path values
//!
//! Windows paths extend the common model with an optional drive specifier
//! and, for relative paths, an anchored form: rooted at a drive's root
//! without naming the drive (`\foo` as opposed to `foo`). An absolute
//! Windows path always carries a drive; an anchored relative path never
//! does.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::str::FromStr;

use crate::atom::{validate_atoms, Atom};
use crate::error::{PathError, Result};
use crate::normalize::normalize_atoms;
use crate::path::Dialect;
use crate::unix::relative_atoms;

/// A single-letter Windows drive specifier.
///
/// Drives compare case-insensitively; the letter keeps its original case
/// for rendering.
///
/// # Examples
/// ```
/// use path_atoms::Drive;
///
/// let c = Drive::new('c').unwrap();
/// assert_eq!(c, Drive::new('C').unwrap());
/// assert_eq!(c.letter(), 'c');
/// assert!(Drive::new('7').is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Drive(char);

impl Drive {
    /// Validate `letter` as a drive specifier.
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_alphabetic() {
            Ok(Drive(letter))
        } else {
            Err(PathError::InvalidDrive {
                drive: letter.to_string(),
            })
        }
    }

    /// The stored letter, original case.
    pub fn letter(self) -> char {
        self.0
    }

    /// Case-insensitive comparison with another drive.
    pub fn matches(self, other: Drive) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq for Drive {
    fn eq(&self, other: &Self) -> bool {
        self.matches(*other)
    }
}

impl Eq for Drive {}

impl Hash for Drive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_uppercase().hash(state);
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable Windows-dialect path.
///
/// Invariants, enforced at construction:
/// - an absolute path always has a drive;
/// - an anchored relative path never has a drive;
/// - a drive is exactly one ASCII letter.
///
/// # Examples
/// ```
/// use path_atoms::WindowsPath;
///
/// let path = WindowsPath::from_drive_and_atoms(Some('C'), ["foo"], true, false).unwrap();
/// assert_eq!(path.to_string(), "C:\\foo");
///
/// let anchored = WindowsPath::parse("\\reports\\q3").unwrap();
/// assert!(anchored.is_relative());
/// assert!(anchored.is_anchored());
/// assert_eq!(path.parent().unwrap().join(&anchored).unwrap().to_string(), "C:\\reports\\q3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowsPath {
    drive: Option<Drive>,
    atoms: Vec<Atom>,
    absolute: bool,
    anchored: bool,
    trailing_separator: bool,
}

impl WindowsPath {
    /// Create a path from an optional drive and a sequence of atom strings.
    ///
    /// This is the full construction surface: `absolute` requires a drive
    /// ([`PathError::DriveRequired`]), and `anchored` is only legal for a
    /// driveless relative path ([`PathError::AnchoredDrive`]).
    pub fn from_drive_and_atoms<I, S>(
        drive: Option<char>,
        atoms: I,
        absolute: bool,
        anchored: bool,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let drive = drive.map(Drive::new).transpose()?;
        let atoms = validate_atoms(atoms, Dialect::Windows)?;
        if absolute && drive.is_none() {
            return Err(PathError::DriveRequired);
        }
        if anchored && drive.is_some() {
            return Err(PathError::AnchoredDrive);
        }
        Ok(Self::assemble(drive, atoms, absolute, anchored, false))
    }

    /// Create a driveless path from a sequence of atom strings.
    ///
    /// Fails with [`PathError::DriveRequired`] when `absolute` is set,
    /// since an absolute Windows path cannot exist without a drive.
    pub fn from_atoms<I, S>(atoms: I, absolute: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_drive_and_atoms(None, atoms, absolute, false)
    }

    /// The root of `drive`, e.g. `C:\`.
    pub fn drive_root(drive: char) -> Result<Self> {
        Ok(Self::assemble(
            Some(Drive::new(drive)?),
            Vec::new(),
            true,
            false,
            false,
        ))
    }

    /// The empty relative path.
    pub fn empty() -> Self {
        Self::assemble(None, Vec::new(), false, false, false)
    }

    /// Parse a path from its string form.
    ///
    /// Both `/` and `\` separate atoms; rendering always uses `\`. A
    /// leading `X:` is the drive. A drive followed by a separator is an
    /// absolute path, a drive without one a relative path on that drive,
    /// and a leading separator without a drive an anchored relative path.
    ///
    /// # Examples
    /// ```
    /// use path_atoms::WindowsPath;
    ///
    /// assert!(WindowsPath::parse("C:\\foo").unwrap().is_absolute());
    /// assert!(WindowsPath::parse("C:foo").unwrap().is_relative());
    /// assert!(WindowsPath::parse("\\foo").unwrap().is_anchored());
    /// assert!(WindowsPath::parse("foo/bar").unwrap().is_relative());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        let (drive, rest) = if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic()
        {
            (Some(Drive(bytes[0] as char)), &text[2..])
        } else {
            (None, text)
        };
        let rooted = rest.starts_with(['/', '\\']);
        let atoms = validate_atoms(
            rest.split(['/', '\\']).filter(|segment| !segment.is_empty()),
            Dialect::Windows,
        )?;
        let trailing = !atoms.is_empty() && rest.ends_with(['/', '\\']);
        Ok(Self::assemble(
            drive,
            atoms,
            rooted && drive.is_some(),
            rooted && drive.is_none(),
            trailing,
        ))
    }

    /// Assemble a path from parts that already satisfy the invariants.
    fn assemble(
        drive: Option<Drive>,
        atoms: Vec<Atom>,
        absolute: bool,
        anchored: bool,
        trailing_separator: bool,
    ) -> Self {
        let trailing_separator = trailing_separator && !atoms.is_empty();
        Self {
            drive,
            atoms,
            absolute,
            anchored,
            trailing_separator,
        }
    }

    /// The path's drive specifier, if any.
    pub fn drive(&self) -> Option<Drive> {
        self.drive
    }

    /// True if the path carries a drive specifier.
    pub fn has_drive(&self) -> bool {
        self.drive.is_some()
    }

    /// Case-insensitive comparison of this path's drive with `letter`.
    ///
    /// False when the path has no drive or `letter` is not a drive letter.
    pub fn matches_drive(&self, letter: char) -> bool {
        self.drive
            .map_or(false, |drive| drive.letter().eq_ignore_ascii_case(&letter))
    }

    /// True if the drives match or either side has none.
    pub fn matches_drive_or_none(&self, other: Option<Drive>) -> bool {
        match (self.drive, other) {
            (Some(own), Some(other)) => own.matches(other),
            _ => true,
        }
    }

    /// A copy of this path on `drive`, or with its drive removed.
    ///
    /// Attaching a drive produces an absolute path on that drive with this
    /// path's atoms. Detaching (`None`) produces an anchored relative path:
    /// still rooted, drive left unspecified.
    pub fn join_drive(&self, drive: Option<char>) -> Result<WindowsPath> {
        match drive {
            Some(letter) => Ok(Self::assemble(
                Some(Drive::new(letter)?),
                self.atoms.clone(),
                true,
                false,
                false,
            )),
            None => Ok(Self::assemble(
                None,
                self.atoms.clone(),
                false,
                true,
                false,
            )),
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

    /// True for a relative path rooted at an unspecified drive's root.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// True for the absolute path with no atoms.
    pub fn is_root(&self) -> bool {
        self.absolute && self.atoms.is_empty()
    }

    /// True for the unanchored, driveless relative path with no atoms.
    pub fn is_empty(&self) -> bool {
        !self.absolute && !self.anchored && self.drive.is_none() && self.atoms.is_empty()
    }

    /// True if the rendered form ends with a separator.
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// A copy with the trailing-separator flag set to `on`.
    ///
    /// Cosmetic only; no effect on a path with no atoms.
    pub fn with_trailing_separator(&self, on: bool) -> Self {
        let mut path = self.clone();
        path.trailing_separator = on && !self.atoms.is_empty();
        path
    }

    /// Append a relative path to this path.
    ///
    /// Fails with [`PathError::NotRelative`] if `other` is absolute, and
    /// with [`PathError::DriveMismatch`] when both paths specify different
    /// drives. If `other` is anchored, the result takes this path's drive
    /// with `other`'s atoms alone, discarding this path's atoms: absolute
    /// when a drive is present, anchored otherwise.
    ///
    /// # Examples
    /// ```
    /// use path_atoms::WindowsPath;
    ///
    /// let base = WindowsPath::parse("C:\\data\\old").unwrap();
    /// let anchored = WindowsPath::parse("\\data\\new").unwrap();
    /// assert_eq!(base.join(&anchored).unwrap().to_string(), "C:\\data\\new");
    ///
    /// let tail = WindowsPath::parse("2024\\q3").unwrap();
    /// assert_eq!(base.join(&tail).unwrap().to_string(), "C:\\data\\old\\2024\\q3");
    /// ```
    pub fn join(&self, other: &WindowsPath) -> Result<WindowsPath> {
        if other.absolute {
            return Err(PathError::NotRelative);
        }
        if let (Some(base), Some(joined)) = (self.drive, other.drive) {
            if !base.matches(joined) {
                return Err(PathError::DriveMismatch {
                    base: base.letter(),
                    other: joined.letter(),
                });
            }
        }
        if other.anchored {
            return Ok(Self::assemble(
                self.drive,
                other.atoms.clone(),
                self.drive.is_some(),
                self.drive.is_none(),
                other.trailing_separator,
            ));
        }
        let drive = self.drive.or(other.drive);
        let mut atoms = self.atoms.clone();
        atoms.extend(other.atoms.iter().cloned());
        let rooted = self.absolute || self.anchored;
        Ok(Self::assemble(
            drive,
            atoms,
            rooted && drive.is_some(),
            rooted && drive.is_none(),
            other.trailing_separator,
        ))
    }

    /// The path with its last atom dropped.
    pub fn parent(&self) -> Result<WindowsPath> {
        if self.atoms.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let mut atoms = self.atoms.clone();
        atoms.pop();
        Ok(Self::assemble(
            self.drive,
            atoms,
            self.absolute,
            self.anchored,
            false,
        ))
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
    pub fn replace_name(&self, name: &str) -> Result<WindowsPath> {
        if self.atoms.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let atom = Atom::new(name, Dialect::Windows)?;
        let mut atoms = self.atoms.clone();
        atoms.pop();
        atoms.push(atom);
        Ok(Self::assemble(
            self.drive,
            atoms,
            self.absolute,
            self.anchored,
            self.trailing_separator,
        ))
    }

    /// A copy with the last atom's extension replaced by `extension`.
    ///
    /// An empty `extension` removes the extension.
    pub fn replace_extension(&self, extension: &str) -> Result<WindowsPath> {
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
    /// Anchored paths sit at a drive root, so like absolute paths they drop
    /// `..` atoms that would climb above it. Drive, anchoring and the
    /// trailing flag are preserved. Idempotent.
    pub fn normalize(&self) -> WindowsPath {
        Self::assemble(
            self.drive,
            normalize_atoms(&self.atoms, self.absolute || self.anchored),
            self.absolute,
            self.anchored,
            self.trailing_separator,
        )
    }

    /// A relative version of this path: atoms and drive kept, anchoring and
    /// absoluteness dropped.
    pub fn to_relative(&self) -> WindowsPath {
        Self::assemble(
            self.drive,
            self.atoms.clone(),
            false,
            false,
            self.trailing_separator,
        )
    }

    /// An absolute version of this path.
    ///
    /// Fails with [`PathError::DriveRequired`] when the path has no drive
    /// to infer: an anchored or plain driveless relative path cannot say
    /// which drive it is absolute on.
    pub fn to_absolute(&self) -> Result<WindowsPath> {
        if self.absolute {
            return Ok(self.clone());
        }
        if self.drive.is_none() {
            return Err(PathError::DriveRequired);
        }
        Ok(Self::assemble(
            self.drive,
            self.atoms.clone(),
            true,
            false,
            self.trailing_separator,
        ))
    }

    /// True if this path's atoms are a strict prefix of `other`'s and the
    /// drives match or either is unspecified.
    ///
    /// Meaningful for absolute paths; false whenever either side is
    /// relative. Drive incompatibility yields false, never an error.
    pub fn is_ancestor_of(&self, other: &WindowsPath) -> bool {
        self.absolute
            && other.absolute
            && self.matches_drive_or_none(other.drive)
            && other.atoms.len() > self.atoms.len()
            && self.atoms[..] == other.atoms[..self.atoms.len()]
    }

    /// True if `other` is exactly one atom below this path on a compatible
    /// drive.
    pub fn is_parent_of(&self, other: &WindowsPath) -> bool {
        self.is_ancestor_of(other) && other.atoms.len() == self.atoms.len() + 1
    }

    /// The shortest relative path from `base` to this path.
    ///
    /// Both paths must be absolute. When the drives differ the result is
    /// simply [`to_relative`](Self::to_relative): no meaningful relative
    /// path exists across drives, and this is reported as a value rather
    /// than an error. Otherwise both paths are normalized and the common
    /// prefix walk produces a driveless relative path.
    pub fn relative_to(&self, base: &WindowsPath) -> Result<WindowsPath> {
        if !self.absolute || !base.absolute {
            return Err(PathError::NotAbsolute);
        }
        if !self.matches_drive_or_none(base.drive) {
            return Ok(self.to_relative());
        }
        let own = self.normalize();
        let base = base.normalize();
        Ok(Self::assemble(
            None,
            relative_atoms(&own.atoms, &base.atoms),
            false,
            false,
            false,
        ))
    }
}

impl fmt::Display for WindowsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(drive) = self.drive {
            write!(f, "{}:", drive)?;
        }
        if self.absolute || self.anchored {
            f.write_str("\\")?;
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            if index > 0 {
                f.write_str("\\")?;
            }
            f.write_str(atom.as_str())?;
        }
        if self.trailing_separator {
            f.write_str("\\")?;
        }
        Ok(())
    }
}

impl FromStr for WindowsPath {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}
