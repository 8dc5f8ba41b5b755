//! Property test generators for path values
//!
//! Strategies for producing valid atoms, drives and whole path values of
//! both dialects, plus deliberately messy atom sequences for normalization
//! coverage.

use proptest::prelude::*;

use crate::unix::UnixPath;
use crate::windows::WindowsPath;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate atom text valid in both dialects.
    ///
    /// The leading character class excludes `.`, so `.` and `..` can never
    /// be produced and every generated path is already normalized.
    pub fn atom() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,12}".prop_map(String::from)
    }

    /// Generate a short atom sequence
    pub fn atom_sequence() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(Self::atom(), 0..5)
    }

    /// Generate an atom sequence with `.` and `..` mixed in
    pub fn dotted_atom_sequence() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![
                3 => Self::atom(),
                1 => Just(".".to_string()),
                1 => Just("..".to_string()),
            ],
            0..8,
        )
    }

    /// Generate a drive letter
    pub fn drive_letter() -> impl Strategy<Value = char> {
        "[a-zA-Z]".prop_map(|s| s.chars().next().expect("single letter"))
    }

    /// Generate a Unix path of either rootedness
    pub fn unix_path() -> impl Strategy<Value = UnixPath> {
        (Self::atom_sequence(), any::<bool>(), any::<bool>()).prop_map(
            |(atoms, absolute, trailing)| {
                UnixPath::from_atoms(atoms, absolute)
                    .expect("generated atoms are valid")
                    .with_trailing_separator(trailing)
            },
        )
    }

    /// Generate an absolute Unix path
    pub fn absolute_unix_path() -> impl Strategy<Value = UnixPath> {
        Self::atom_sequence().prop_map(|atoms| {
            UnixPath::from_atoms(atoms, true).expect("generated atoms are valid")
        })
    }

    /// Generate a Windows path across all four shapes: absolute, on-drive
    /// relative, anchored, plain relative
    pub fn windows_path() -> impl Strategy<Value = WindowsPath> {
        (
            prop::option::of(Self::drive_letter()),
            Self::atom_sequence(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(drive, atoms, rooted, trailing)| {
                let absolute = rooted && drive.is_some();
                let anchored = rooted && drive.is_none();
                WindowsPath::from_drive_and_atoms(drive, atoms, absolute, anchored)
                    .expect("generated parts are valid")
                    .with_trailing_separator(trailing)
            })
    }

    /// Generate an absolute Windows path
    pub fn absolute_windows_path() -> impl Strategy<Value = WindowsPath> {
        (Self::drive_letter(), Self::atom_sequence()).prop_map(|(drive, atoms)| {
            WindowsPath::from_drive_and_atoms(Some(drive), atoms, true, false)
                .expect("generated parts are valid")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_atoms_are_valid_everywhere(atom in PathGenerators::atom()) {
            prop_assert!(crate::Atom::new(atom.clone(), crate::Dialect::Unix).is_ok());
            prop_assert!(crate::Atom::new(atom, crate::Dialect::Windows).is_ok());
        }

        #[test]
        fn generated_unix_paths_round_trip(path in PathGenerators::unix_path()) {
            let reparsed = UnixPath::parse(&path.to_string()).unwrap();
            prop_assert_eq!(reparsed, path);
        }

        #[test]
        fn generated_windows_paths_round_trip(path in PathGenerators::windows_path()) {
            let reparsed = WindowsPath::parse(&path.to_string()).unwrap();
            prop_assert_eq!(reparsed, path);
        }

        #[test]
        fn absolute_windows_paths_always_have_a_drive(
            path in PathGenerators::absolute_windows_path()
        ) {
            prop_assert!(path.is_absolute());
            prop_assert!(path.has_drive());
        }
    }
}
