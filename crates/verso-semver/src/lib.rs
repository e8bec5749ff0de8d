//! Semantic versioning engine compatible with SemVer 2.0.0 and node-semver ranges
//!
//! This crate provides strict and configurably-loose version parsing, a total
//! order over versions, template-based formatting, a version builder with
//! increment operations, and range comparators (caret, tilde, x-range,
//! hyphen) that compile to primitive relational comparators.

pub mod range;
mod builder;
mod error;
mod format;
mod options;
mod parser;
mod prerelease;
mod version;

pub use builder::{IncrementKind, VersionBuilder};
pub use error::{ErrorNature, VersionError, VersionField};
pub use format::FormatError;
pub use options::SemanticOptions;
pub use prerelease::PreRelease;
pub use range::{
    CaretComparator, Comparator, ComparatorSet, HyphenRangeComparator, PartialComponent,
    PartialVersion, PrimitiveComparator, PrimitiveOperator, RangeError, TildeComparator,
    VersionRange, XRangeComparator,
};
pub use version::{compare_with_metadata, eq_with_metadata, SemanticVersion};
