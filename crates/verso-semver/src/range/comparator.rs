use std::fmt;

use crate::range::advanced::{
    CaretComparator, HyphenRangeComparator, TildeComparator, XRangeComparator,
};
use crate::range::primitive::PrimitiveComparator;
use crate::version::SemanticVersion;

/// Any comparator a range can contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparator {
    Primitive(PrimitiveComparator),
    Caret(CaretComparator),
    Tilde(TildeComparator),
    XRange(XRangeComparator),
    Hyphen(HyphenRangeComparator),
}

impl Comparator {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Comparator::Primitive(_))
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        match self {
            Comparator::Primitive(comparator) => comparator.satisfies(version),
            Comparator::Caret(comparator) => comparator.satisfies(version),
            Comparator::Tilde(comparator) => comparator.satisfies(version),
            Comparator::XRange(comparator) => comparator.satisfies(version),
            Comparator::Hyphen(comparator) => comparator.satisfies(version),
        }
    }

    pub fn has_pre_release_version(&self, major: u32, minor: u32, patch: u32) -> bool {
        match self {
            Comparator::Primitive(comparator) => {
                comparator.has_pre_release_version(major, minor, patch)
            }
            Comparator::Caret(comparator) => comparator.has_pre_release_version(major, minor, patch),
            Comparator::Tilde(comparator) => comparator.has_pre_release_version(major, minor, patch),
            Comparator::XRange(comparator) => {
                comparator.has_pre_release_version(major, minor, patch)
            }
            Comparator::Hyphen(comparator) => {
                comparator.has_pre_release_version(major, minor, patch)
            }
        }
    }
}

impl From<PrimitiveComparator> for Comparator {
    fn from(comparator: PrimitiveComparator) -> Self {
        Comparator::Primitive(comparator)
    }
}

impl From<CaretComparator> for Comparator {
    fn from(comparator: CaretComparator) -> Self {
        Comparator::Caret(comparator)
    }
}

impl From<TildeComparator> for Comparator {
    fn from(comparator: TildeComparator) -> Self {
        Comparator::Tilde(comparator)
    }
}

impl From<XRangeComparator> for Comparator {
    fn from(comparator: XRangeComparator) -> Self {
        Comparator::XRange(comparator)
    }
}

impl From<HyphenRangeComparator> for Comparator {
    fn from(comparator: HyphenRangeComparator) -> Self {
        Comparator::Hyphen(comparator)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Primitive(comparator) => comparator.fmt(f),
            Comparator::Caret(comparator) => comparator.fmt(f),
            Comparator::Tilde(comparator) => comparator.fmt(f),
            Comparator::XRange(comparator) => comparator.fmt(f),
            Comparator::Hyphen(comparator) => comparator.fmt(f),
        }
    }
}
