//! Version ranges: primitive relational comparators, the four advanced
//! comparator forms that compile down to them, and the set/union layers
//! that evaluate satisfaction.

use thiserror::Error;

mod advanced;
mod comparator;
mod partial;
mod primitive;
mod set;
mod version_range;

pub use advanced::{CaretComparator, HyphenRangeComparator, TildeComparator, XRangeComparator};
pub use comparator::Comparator;
pub use partial::{PartialComponent, PartialVersion};
pub use primitive::{PrimitiveComparator, PrimitiveOperator};
pub use set::ComparatorSet;
pub use version_range::VersionRange;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("A version range must contain at least one comparator set.")]
    EmptyRange,
    #[error("A range boundary component cannot exceed 2147483647.")]
    ComponentOverflow,
}
