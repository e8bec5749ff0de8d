use std::cmp::Ordering;
use std::fmt;

use crate::version::SemanticVersion;

/// The five relational operators of a [`PrimitiveComparator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveOperator {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Equal,
}

impl PrimitiveOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveOperator::GreaterThan => ">",
            PrimitiveOperator::GreaterThanOrEqual => ">=",
            PrimitiveOperator::LessThan => "<",
            PrimitiveOperator::LessThanOrEqual => "<=",
            PrimitiveOperator::Equal => "=",
        }
    }
}

impl fmt::Display for PrimitiveOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relational comparison against a fixed version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimitiveComparator {
    operator: PrimitiveOperator,
    operand: SemanticVersion,
}

impl PrimitiveComparator {
    pub fn new(operator: PrimitiveOperator, operand: SemanticVersion) -> Self {
        PrimitiveComparator { operator, operand }
    }

    pub fn greater_than(operand: SemanticVersion) -> Self {
        Self::new(PrimitiveOperator::GreaterThan, operand)
    }

    pub fn greater_than_or_equal(operand: SemanticVersion) -> Self {
        Self::new(PrimitiveOperator::GreaterThanOrEqual, operand)
    }

    pub fn less_than(operand: SemanticVersion) -> Self {
        Self::new(PrimitiveOperator::LessThan, operand)
    }

    pub fn less_than_or_equal(operand: SemanticVersion) -> Self {
        Self::new(PrimitiveOperator::LessThanOrEqual, operand)
    }

    pub fn equal(operand: SemanticVersion) -> Self {
        Self::new(PrimitiveOperator::Equal, operand)
    }

    pub fn operator(&self) -> PrimitiveOperator {
        self.operator
    }

    pub fn operand(&self) -> &SemanticVersion {
        &self.operand
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        let ordering = version.cmp(&self.operand);
        match self.operator {
            PrimitiveOperator::GreaterThan => ordering == Ordering::Greater,
            PrimitiveOperator::GreaterThanOrEqual => ordering != Ordering::Less,
            PrimitiveOperator::LessThan => ordering == Ordering::Less,
            PrimitiveOperator::LessThanOrEqual => ordering != Ordering::Greater,
            PrimitiveOperator::Equal => ordering == Ordering::Equal,
        }
    }

    /// Whether the operand is a pre-release of exactly the given release
    /// triple. Feeds the pre-release exclusion rule of
    /// [`ComparatorSet`](crate::range::ComparatorSet).
    pub fn has_pre_release_version(&self, major: u32, minor: u32, patch: u32) -> bool {
        self.operand.is_pre_release()
            && self.operand.major() == major
            && self.operand.minor() == minor
            && self.operand.patch() == patch
    }
}

impl fmt::Display for PrimitiveComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.operand)
    }
}
