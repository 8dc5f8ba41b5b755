//! Atom sequence normalization
//!
//! Collapses `.` and `..` atoms with a single left-to-right pass over the
//! sequence. Rooted paths drop `..` at the top of the stack, relative paths
//! keep it: an unresolved `..` can still cancel against whatever base the
//! path is later joined to.

use crate::atom::Atom;

/// Collapse `.` and resolvable `..` atoms.
///
/// `rooted` is true for absolute paths and for anchored relative Windows
/// paths, both of which sit at a root that `..` cannot climb above.
/// The result contains no `.` atoms and, for rooted paths, no `..` atoms;
/// for unrooted paths any surviving `..` atoms form a leading run.
pub(crate) fn normalize_atoms(atoms: &[Atom], rooted: bool) -> Vec<Atom> {
    let mut output: Vec<Atom> = Vec::with_capacity(atoms.len());
    for atom in atoms {
        if atom.is_self() {
            continue;
        }
        if atom.is_parent() {
            match output.last() {
                Some(top) if !top.is_parent() => {
                    output.pop();
                }
                _ if rooted => {}
                _ => output.push(atom.clone()),
            }
            continue;
        }
        output.push(atom.clone());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Dialect;

    fn atoms(texts: &[&str]) -> Vec<Atom> {
        texts
            .iter()
            .map(|text| Atom::new(*text, Dialect::Unix).unwrap())
            .collect()
    }

    fn normalized(texts: &[&str], rooted: bool) -> Vec<String> {
        normalize_atoms(&atoms(texts), rooted)
            .into_iter()
            .map(|atom| atom.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_self_atoms_dropped() {
        assert_eq!(normalized(&[".", "foo", ".", "bar", "."], false), ["foo", "bar"]);
    }

    #[test]
    fn test_parent_cancels_previous_atom() {
        assert_eq!(normalized(&["foo", "bar", ".."], false), ["foo"]);
        assert_eq!(normalized(&["foo", "..", "bar"], false), ["bar"]);
    }

    #[test]
    fn test_leading_parents_accumulate_when_unrooted() {
        assert_eq!(normalized(&["..", "foo"], false), ["..", "foo"]);
        assert_eq!(normalized(&["..", "..", "foo"], false), ["..", "..", "foo"]);
        assert_eq!(normalized(&["foo", "..", ".."], false), [".."]);
    }

    #[test]
    fn test_parents_dropped_at_root() {
        assert_eq!(normalized(&["..", "foo"], true), ["foo"]);
        assert_eq!(normalized(&["..", "..", ".."], true), Vec::<String>::new());
        assert_eq!(normalized(&["foo", "..", ".."], true), Vec::<String>::new());
    }

    #[test]
    fn test_already_normal_sequence_unchanged() {
        assert_eq!(normalized(&["foo", "bar", "baz"], false), ["foo", "bar", "baz"]);
        assert_eq!(normalized(&["..", "..", "foo"], false), ["..", "..", "foo"]);
    }

    #[test]
    fn test_idempotent() {
        for rooted in [false, true] {
            let once = normalize_atoms(&atoms(&["..", "a", ".", "b", "..", "c"]), rooted);
            let twice = normalize_atoms(&once, rooted);
            assert_eq!(once, twice);
        }
    }
}
