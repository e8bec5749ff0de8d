use std::fmt;
use std::ops;

use lazy_static::lazy_static;

use crate::range::comparator::Comparator;
use crate::range::primitive::PrimitiveComparator;
use crate::range::set::ComparatorSet;
use crate::range::RangeError;
use crate::version::SemanticVersion;

lazy_static! {
    static ref ALL: VersionRange = VersionRange {
        comparator_sets: vec![ComparatorSet::from(Comparator::from(
            PrimitiveComparator::greater_than_or_equal(
                SemanticVersion::new_unchecked(0, 0, 0, Vec::new(), Vec::new()),
            ),
        ))],
    };
    static ref NONE: VersionRange = VersionRange {
        comparator_sets: vec![ComparatorSet::from(Comparator::from(
            PrimitiveComparator::less_than(SemanticVersion::min_value().clone()),
        ))],
    };
}

/// A disjunction of comparator sets. Always owns at least one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    comparator_sets: Vec<ComparatorSet>,
}

impl VersionRange {
    pub fn new(comparator_sets: Vec<ComparatorSet>) -> Result<Self, RangeError> {
        if comparator_sets.is_empty() {
            return Err(RangeError::EmptyRange);
        }
        Ok(VersionRange { comparator_sets })
    }

    /// `>=0.0.0`, satisfied by every non-pre-release version.
    pub fn all() -> &'static VersionRange {
        &ALL
    }

    /// `<0.0.0-0`, satisfied by nothing. A synthetic boundary value.
    pub fn none() -> &'static VersionRange {
        &NONE
    }

    pub fn comparator_sets(&self) -> &[ComparatorSet] {
        &self.comparator_sets
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        self.satisfies_with(version, false)
    }

    pub fn satisfies_with(&self, version: &SemanticVersion, include_pre_releases: bool) -> bool {
        self.comparator_sets
            .iter()
            .any(|set| set.satisfies_with(version, include_pre_releases))
    }
}

impl From<ComparatorSet> for VersionRange {
    fn from(comparator_set: ComparatorSet) -> Self {
        VersionRange {
            comparator_sets: vec![comparator_set],
        }
    }
}

impl From<Comparator> for VersionRange {
    fn from(comparator: Comparator) -> Self {
        VersionRange::from(ComparatorSet::from(comparator))
    }
}

impl ops::BitOr for Comparator {
    type Output = VersionRange;
    fn bitor(self, rhs: Comparator) -> VersionRange {
        ComparatorSet::from(self) | ComparatorSet::from(rhs)
    }
}

impl ops::BitOr<Comparator> for ComparatorSet {
    type Output = VersionRange;
    fn bitor(self, rhs: Comparator) -> VersionRange {
        self | ComparatorSet::from(rhs)
    }
}

impl ops::BitOr<ComparatorSet> for Comparator {
    type Output = VersionRange;
    fn bitor(self, rhs: ComparatorSet) -> VersionRange {
        ComparatorSet::from(self) | rhs
    }
}

impl ops::BitOr for ComparatorSet {
    type Output = VersionRange;
    fn bitor(self, rhs: ComparatorSet) -> VersionRange {
        VersionRange {
            comparator_sets: vec![self, rhs],
        }
    }
}

impl ops::BitOr<ComparatorSet> for VersionRange {
    type Output = VersionRange;
    fn bitor(mut self, rhs: ComparatorSet) -> VersionRange {
        self.comparator_sets.push(rhs);
        self
    }
}

impl ops::BitOr<VersionRange> for ComparatorSet {
    type Output = VersionRange;
    fn bitor(self, mut rhs: VersionRange) -> VersionRange {
        rhs.comparator_sets.insert(0, self);
        rhs
    }
}

impl ops::BitOr for VersionRange {
    type Output = VersionRange;
    fn bitor(mut self, rhs: VersionRange) -> VersionRange {
        self.comparator_sets.extend(rhs.comparator_sets);
        self
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for set in &self.comparator_sets {
            if !first {
                f.write_str(" || ")?;
            }
            write!(f, "{set}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{CaretComparator, PartialVersion};

    fn version(text: &str) -> SemanticVersion {
        SemanticVersion::parse(text).unwrap()
    }

    fn caret(major: u32, minor: u32, patch: u32) -> ComparatorSet {
        let operand = PartialVersion::new(major, minor, patch).unwrap();
        ComparatorSet::from(Comparator::from(CaretComparator::new(operand).unwrap()))
    }

    #[test]
    fn test_requires_a_comparator_set() {
        assert_eq!(VersionRange::new(Vec::new()).unwrap_err(), RangeError::EmptyRange);
        assert!(VersionRange::new(vec![ComparatorSet::default()]).is_ok());
    }

    #[test]
    fn test_disjunction() {
        let range = VersionRange::new(vec![caret(1, 2, 0), caret(3, 0, 0)]).unwrap();
        assert!(range.satisfies(&version("1.4.7")));
        assert!(range.satisfies(&version("3.0.1")));
        assert!(!range.satisfies(&version("2.0.0")));
        assert!(!range.satisfies(&version("4.0.0")));
    }

    #[test]
    fn test_sentinels() {
        for text in ["0.0.0", "1.2.3", "2147483647.2147483647.2147483647"] {
            assert!(VersionRange::all().satisfies(&version(text)), "{text}");
            assert!(!VersionRange::none().satisfies(&version(text)), "{text}");
        }
        // the all-range still excludes pre-releases by default
        assert!(!VersionRange::all().satisfies(&version("1.0.0-rc.1")));
        assert!(VersionRange::all().satisfies_with(&version("1.0.0-rc.1"), true));
        assert!(!VersionRange::none().satisfies_with(&version("1.0.0-rc.1"), true));
        assert_eq!(VersionRange::all().to_string(), ">=0.0.0");
        assert_eq!(VersionRange::none().to_string(), "<0.0.0-0");
    }

    #[test]
    fn test_display() {
        let range = VersionRange::new(vec![caret(1, 2, 0), caret(3, 0, 0)]).unwrap();
        assert_eq!(range.to_string(), "^1.2.0 || ^3.0.0");
    }

    #[test]
    fn test_disjunction_operator() {
        let range = caret(1, 2, 0) | caret(3, 0, 0);
        assert_eq!(range, VersionRange::new(vec![caret(1, 2, 0), caret(3, 0, 0)]).unwrap());

        let range = range | caret(5, 0, 0);
        assert_eq!(range.to_string(), "^1.2.0 || ^3.0.0 || ^5.0.0");
        assert!(range.satisfies(&version("5.1.0")));

        let range = caret(0, 1, 0) | (caret(1, 2, 0) | caret(3, 0, 0));
        assert_eq!(range.to_string(), "^0.1.0 || ^1.2.0 || ^3.0.0");

        let pinned = Comparator::from(PrimitiveComparator::equal(version("2.0.0")))
            | Comparator::from(PrimitiveComparator::equal(version("4.0.0")));
        assert!(pinned.satisfies(&version("2.0.0")));
        assert!(!pinned.satisfies(&version("3.0.0")));
    }
}
