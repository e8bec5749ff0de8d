use std::fmt;
use std::ops;

use crate::range::comparator::Comparator;
use crate::version::SemanticVersion;

/// A conjunction of comparators with the pre-release exclusion rule.
///
/// A pre-release version only satisfies the set when some comparator in it
/// explicitly targets a pre-release of the same release triple, unless
/// pre-releases are opted in via
/// [`satisfies_with`](ComparatorSet::satisfies_with).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparatorSet {
    comparators: Vec<Comparator>,
}

impl ComparatorSet {
    pub fn new(comparators: Vec<Comparator>) -> Self {
        ComparatorSet { comparators }
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        self.satisfies_with(version, false)
    }

    pub fn satisfies_with(&self, version: &SemanticVersion, include_pre_releases: bool) -> bool {
        if version.is_pre_release() && !include_pre_releases {
            let targeted = self.comparators.iter().any(|comparator| {
                comparator.has_pre_release_version(version.major(), version.minor(), version.patch())
            });
            if !targeted {
                return false;
            }
        }
        self.comparators
            .iter()
            .all(|comparator| comparator.satisfies(version))
    }
}

impl From<Comparator> for ComparatorSet {
    fn from(comparator: Comparator) -> Self {
        ComparatorSet::new(vec![comparator])
    }
}

impl FromIterator<Comparator> for ComparatorSet {
    fn from_iter<I: IntoIterator<Item = Comparator>>(iter: I) -> Self {
        ComparatorSet::new(iter.into_iter().collect())
    }
}

impl ops::BitAnd for Comparator {
    type Output = ComparatorSet;
    fn bitand(self, rhs: Comparator) -> ComparatorSet {
        ComparatorSet::new(vec![self, rhs])
    }
}

impl ops::BitAnd<Comparator> for ComparatorSet {
    type Output = ComparatorSet;
    fn bitand(mut self, rhs: Comparator) -> ComparatorSet {
        self.comparators.push(rhs);
        self
    }
}

impl ops::BitAnd<ComparatorSet> for Comparator {
    type Output = ComparatorSet;
    fn bitand(self, mut rhs: ComparatorSet) -> ComparatorSet {
        rhs.comparators.insert(0, self);
        rhs
    }
}

impl ops::BitAnd for ComparatorSet {
    type Output = ComparatorSet;
    fn bitand(mut self, rhs: ComparatorSet) -> ComparatorSet {
        self.comparators.extend(rhs.comparators);
        self
    }
}

impl fmt::Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for comparator in &self.comparators {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{comparator}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{PrimitiveComparator, XRangeComparator};

    fn version(text: &str) -> SemanticVersion {
        SemanticVersion::parse(text).unwrap()
    }

    fn between(floor: &str, ceiling: &str) -> ComparatorSet {
        ComparatorSet::new(vec![
            PrimitiveComparator::greater_than_or_equal(version(floor)).into(),
            PrimitiveComparator::less_than(version(ceiling)).into(),
        ])
    }

    #[test]
    fn test_conjunction() {
        let set = between("1.2.0", "2.0.0");
        assert!(set.satisfies(&version("1.2.0")));
        assert!(set.satisfies(&version("1.99.99")));
        assert!(!set.satisfies(&version("1.1.9")));
        assert!(!set.satisfies(&version("2.0.0")));
    }

    #[test]
    fn test_empty_set_matches_releases() {
        let set = ComparatorSet::default();
        assert!(set.satisfies(&version("0.0.0")));
        assert!(!set.satisfies(&version("1.0.0-rc.1")));
        assert!(set.satisfies_with(&version("1.0.0-rc.1"), true));
    }

    #[test]
    fn test_pre_release_exclusion() {
        // no operand targets a pre-release, so none are admitted
        let set = between("1.0.0", "2.0.0");
        assert!(set.satisfies(&version("1.5.0")));
        assert!(!set.satisfies(&version("1.5.0-beta")));
        // >=1.5.0-alpha <2.0.0 admits pre-releases of 1.5.0
        let set = between("1.5.0-alpha", "2.0.0");
        assert!(set.satisfies(&version("1.5.0-beta")));

        // >=1.2.3-rc.1 <2.0.0 admits pre-releases of 1.2.3 only
        let set = between("1.2.3-rc.1", "2.0.0");
        assert!(set.satisfies(&version("1.2.3-rc.2")));
        assert!(!set.satisfies(&version("1.2.3-rc.0")));
        assert!(!set.satisfies(&version("1.2.4-rc.1")));
        assert!(set.satisfies(&version("1.2.4")));
        // opting in lifts the same-triple restriction
        assert!(set.satisfies_with(&version("1.2.4-rc.1"), true));
    }

    #[test]
    fn test_pre_release_exclusion_sees_through_advanced_operands() {
        let operand = crate::range::PartialVersion::with_identifiers(
            1u32,
            2u32,
            3u32,
            vec![crate::PreRelease::text("beta").unwrap()],
            Vec::new(),
        )
        .unwrap();
        let set: ComparatorSet = Comparator::from(
            XRangeComparator::greater_than_or_equal(operand).unwrap(),
        )
        .into();
        assert!(set.satisfies(&version("1.2.3-beta.1")));
        assert!(!set.satisfies(&version("1.2.4-beta.1")));
    }

    #[test]
    fn test_pre_release_exclusion_resolves_omitted_to_zero() {
        // >=1.2-rc <2.0.0: the omitted patch targets 1.2.0 only
        let operand = crate::range::PartialVersion::with_identifiers(
            1u32,
            2u32,
            crate::range::PartialComponent::Omitted,
            vec![crate::PreRelease::text("rc").unwrap()],
            Vec::new(),
        )
        .unwrap();
        let set = ComparatorSet::new(vec![
            XRangeComparator::greater_than_or_equal(operand).unwrap().into(),
            PrimitiveComparator::less_than(version("2.0.0")).into(),
        ]);
        assert!(set.satisfies(&version("1.2.0-rc.1")));
        assert!(!set.satisfies(&version("1.2.5-alpha")));
        assert!(set.satisfies(&version("1.2.5")));
    }

    #[test]
    fn test_display() {
        assert_eq!(between("1.2.0", "2.0.0").to_string(), ">=1.2.0 <2.0.0");
    }

    #[test]
    fn test_conjunction_operator() {
        let floor = Comparator::from(PrimitiveComparator::greater_than_or_equal(version("1.2.0")));
        let ceiling = Comparator::from(PrimitiveComparator::less_than(version("2.0.0")));
        assert_eq!(floor.clone() & ceiling.clone(), between("1.2.0", "2.0.0"));

        let cap = Comparator::from(PrimitiveComparator::less_than(version("1.5.0")));
        let set = (floor.clone() & ceiling.clone()) & cap.clone();
        assert_eq!(set.to_string(), ">=1.2.0 <2.0.0 <1.5.0");
        assert_eq!(
            cap & between("1.2.0", "2.0.0"),
            ComparatorSet::new(vec![
                PrimitiveComparator::less_than(version("1.5.0")).into(),
                floor.into(),
                ceiling.into(),
            ])
        );
    }
}
