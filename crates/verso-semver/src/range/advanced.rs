//! The four advanced comparator forms. Each one compiles, eagerly at
//! construction, into an optional floor and an optional ceiling primitive;
//! `None` on both sides means the comparator matches every version.

use std::fmt;

use crate::prerelease::PreRelease;
use crate::range::partial::{PartialComponent, PartialVersion};
use crate::range::primitive::PrimitiveComparator;
use crate::range::RangeError;
use crate::version::{SemanticVersion, COMPONENT_MAX};

type PrimitivePair = (Option<PrimitiveComparator>, Option<PrimitiveComparator>);

fn bump(value: u32) -> Result<u32, RangeError> {
    value
        .checked_add(1)
        .filter(|&v| v <= COMPONENT_MAX)
        .ok_or(RangeError::ComponentOverflow)
}

/// An inclusive lower boundary at the operand's position, carrying the
/// operand's own pre-release identifiers.
fn floor_version(operand: &PartialVersion) -> SemanticVersion {
    SemanticVersion::new_unchecked(
        operand.major().value_or_zero(),
        operand.minor().value_or_zero(),
        operand.patch().value_or_zero(),
        operand.pre_releases().to_vec(),
        Vec::new(),
    )
}

/// An exclusive upper boundary: the first pre-release of `major.minor.patch`.
fn ceiling_version(major: u32, minor: u32, patch: u32) -> SemanticVersion {
    SemanticVersion::new_unchecked(major, minor, patch, vec![PreRelease::ZERO], Vec::new())
}

fn satisfies_pair(pair: &PrimitivePair, version: &SemanticVersion) -> bool {
    pair.0.as_ref().map_or(true, |floor| floor.satisfies(version))
        && pair.1.as_ref().map_or(true, |ceiling| ceiling.satisfies(version))
}

fn component_targets(component: PartialComponent, value: u32) -> bool {
    match component {
        PartialComponent::Wildcard(_) => true,
        component => component.value_or_zero() == value,
    }
}

/// Whether the operand is a pre-release whose components (wildcards
/// matching anything, omitted resolving to zero) equal the given
/// release triple.
fn operand_targets(operand: &PartialVersion, major: u32, minor: u32, patch: u32) -> bool {
    operand.is_pre_release()
        && component_targets(operand.major(), major)
        && component_targets(operand.minor(), minor)
        && component_targets(operand.patch(), patch)
}

/// `^P`: allows patch- and minor-level changes, or only patch-level ones
/// when the major component is `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretComparator {
    operand: PartialVersion,
    primitives: PrimitivePair,
}

impl CaretComparator {
    pub fn new(operand: PartialVersion) -> Result<Self, RangeError> {
        let primitives = Self::to_primitives(&operand)?;
        Ok(CaretComparator {
            operand,
            primitives,
        })
    }

    fn to_primitives(operand: &PartialVersion) -> Result<PrimitivePair, RangeError> {
        let Some(major) = operand.major().number() else {
            return Ok((None, None));
        };
        // unlike the other forms, the caret floor never carries the
        // operand's pre-release identifiers
        let floor = PrimitiveComparator::greater_than_or_equal(SemanticVersion::new_unchecked(
            major,
            operand.minor().value_or_zero(),
            operand.patch().value_or_zero(),
            Vec::new(),
            Vec::new(),
        ));
        let ceiling = if major != 0 || !operand.minor().is_numeric() {
            ceiling_version(bump(major)?, 0, 0)
        } else if operand.minor().value_or_zero() != 0 || !operand.patch().is_numeric() {
            ceiling_version(0, bump(operand.minor().value_or_zero())?, 0)
        } else {
            ceiling_version(0, 0, bump(operand.patch().value_or_zero())?)
        };
        Ok((Some(floor), Some(PrimitiveComparator::less_than(ceiling))))
    }

    pub fn operand(&self) -> &PartialVersion {
        &self.operand
    }

    /// The compiled `(floor, ceiling)` primitive pair.
    pub fn primitives(&self) -> (Option<&PrimitiveComparator>, Option<&PrimitiveComparator>) {
        (self.primitives.0.as_ref(), self.primitives.1.as_ref())
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        satisfies_pair(&self.primitives, version)
    }

    pub fn has_pre_release_version(&self, major: u32, minor: u32, patch: u32) -> bool {
        operand_targets(&self.operand, major, minor, patch)
    }
}

impl fmt::Display for CaretComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{}", self.operand)
    }
}

/// `~P`: allows patch-level changes, or minor-level ones when the minor
/// component is not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TildeComparator {
    operand: PartialVersion,
    primitives: PrimitivePair,
}

impl TildeComparator {
    pub fn new(operand: PartialVersion) -> Result<Self, RangeError> {
        let primitives = Self::to_primitives(&operand)?;
        Ok(TildeComparator {
            operand,
            primitives,
        })
    }

    fn to_primitives(operand: &PartialVersion) -> Result<PrimitivePair, RangeError> {
        let Some(major) = operand.major().number() else {
            return Ok((None, None));
        };
        let (floor, ceiling) = match operand.minor().number() {
            None => (
                SemanticVersion::new_unchecked(major, 0, 0, Vec::new(), Vec::new()),
                ceiling_version(bump(major)?, 0, 0),
            ),
            Some(minor) => (
                floor_version(operand),
                ceiling_version(major, bump(minor)?, 0),
            ),
        };
        Ok((
            Some(PrimitiveComparator::greater_than_or_equal(floor)),
            Some(PrimitiveComparator::less_than(ceiling)),
        ))
    }

    pub fn operand(&self) -> &PartialVersion {
        &self.operand
    }

    /// The compiled `(floor, ceiling)` primitive pair.
    pub fn primitives(&self) -> (Option<&PrimitiveComparator>, Option<&PrimitiveComparator>) {
        (self.primitives.0.as_ref(), self.primitives.1.as_ref())
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        satisfies_pair(&self.primitives, version)
    }

    pub fn has_pre_release_version(&self, major: u32, minor: u32, patch: u32) -> bool {
        operand_targets(&self.operand, major, minor, patch)
    }
}

impl fmt::Display for TildeComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", self.operand)
    }
}

/// A relational operator applied to a partial operand, e.g. `>=1.2.x`.
/// With every component numeric it degenerates to a single primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XRangeComparator {
    operator: super::PrimitiveOperator,
    operand: PartialVersion,
    primitives: PrimitivePair,
}

impl XRangeComparator {
    pub fn new(
        operand: PartialVersion,
        operator: super::PrimitiveOperator,
    ) -> Result<Self, RangeError> {
        let primitives = Self::to_primitives(operator, &operand)?;
        Ok(XRangeComparator {
            operator,
            operand,
            primitives,
        })
    }

    pub fn equal(operand: PartialVersion) -> Result<Self, RangeError> {
        Self::new(operand, super::PrimitiveOperator::Equal)
    }

    pub fn greater_than(operand: PartialVersion) -> Result<Self, RangeError> {
        Self::new(operand, super::PrimitiveOperator::GreaterThan)
    }

    pub fn greater_than_or_equal(operand: PartialVersion) -> Result<Self, RangeError> {
        Self::new(operand, super::PrimitiveOperator::GreaterThanOrEqual)
    }

    pub fn less_than(operand: PartialVersion) -> Result<Self, RangeError> {
        Self::new(operand, super::PrimitiveOperator::LessThan)
    }

    pub fn less_than_or_equal(operand: PartialVersion) -> Result<Self, RangeError> {
        Self::new(operand, super::PrimitiveOperator::LessThanOrEqual)
    }

    fn to_primitives(
        operator: super::PrimitiveOperator,
        operand: &PartialVersion,
    ) -> Result<PrimitivePair, RangeError> {
        use super::PrimitiveOperator::*;

        if operand.major().is_numeric()
            && operand.minor().is_numeric()
            && operand.patch().is_numeric()
        {
            let version = SemanticVersion::from(operand);
            return Ok((Some(PrimitiveComparator::new(operator, version)), None));
        }
        let Some(major) = operand.major().number() else {
            // a fully unspecified operand: relational bounds are
            // unsatisfiable, everything else matches everything
            return Ok(match operator {
                GreaterThan | LessThan => (
                    Some(PrimitiveComparator::less_than(
                        SemanticVersion::min_value().clone(),
                    )),
                    None,
                ),
                _ => (None, None),
            });
        };

        // the first version excluded by the operand's specified components
        let next_boundary = || -> Result<SemanticVersion, RangeError> {
            Ok(match operand.minor().number() {
                Some(minor) => ceiling_version(major, bump(minor)?, 0),
                None => ceiling_version(bump(major)?, 0, 0),
            })
        };
        Ok(match operator {
            GreaterThan => (
                Some(PrimitiveComparator::greater_than_or_equal(next_boundary()?)),
                None,
            ),
            LessThanOrEqual => (Some(PrimitiveComparator::less_than(next_boundary()?)), None),
            GreaterThanOrEqual => (
                Some(PrimitiveComparator::greater_than_or_equal(floor_version(
                    operand,
                ))),
                None,
            ),
            LessThan => (
                Some(PrimitiveComparator::less_than(floor_version(operand))),
                None,
            ),
            Equal => (
                Some(PrimitiveComparator::greater_than_or_equal(floor_version(
                    operand,
                ))),
                Some(PrimitiveComparator::less_than(next_boundary()?)),
            ),
        })
    }

    pub fn operator(&self) -> super::PrimitiveOperator {
        self.operator
    }

    pub fn operand(&self) -> &PartialVersion {
        &self.operand
    }

    /// The compiled `(floor, ceiling)` primitive pair.
    pub fn primitives(&self) -> (Option<&PrimitiveComparator>, Option<&PrimitiveComparator>) {
        (self.primitives.0.as_ref(), self.primitives.1.as_ref())
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        satisfies_pair(&self.primitives, version)
    }

    pub fn has_pre_release_version(&self, major: u32, minor: u32, patch: u32) -> bool {
        operand_targets(&self.operand, major, minor, patch)
    }
}

impl fmt::Display for XRangeComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator != super::PrimitiveOperator::Equal {
            write!(f, "{}", self.operator)?;
        }
        write!(f, "{}", self.operand)
    }
}

/// `A - B`: an inclusive interval between two partial operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenRangeComparator {
    from: PartialVersion,
    to: PartialVersion,
    primitives: PrimitivePair,
}

impl HyphenRangeComparator {
    pub fn new(from: PartialVersion, to: PartialVersion) -> Result<Self, RangeError> {
        let primitives = Self::to_primitives(&from, &to)?;
        Ok(HyphenRangeComparator {
            from,
            to,
            primitives,
        })
    }

    fn to_primitives(from: &PartialVersion, to: &PartialVersion) -> Result<PrimitivePair, RangeError> {
        let floor = from.major().number().map(|major| {
            // only a fully numeric floor keeps its pre-release identifiers
            let boundary = if from.minor().is_numeric() && from.patch().is_numeric() {
                SemanticVersion::from(from)
            } else {
                SemanticVersion::new_unchecked(
                    major,
                    from.minor().value_or_zero(),
                    0,
                    Vec::new(),
                    Vec::new(),
                )
            };
            PrimitiveComparator::greater_than_or_equal(boundary)
        });
        let ceiling = match to.major().number() {
            None => None,
            Some(major) => Some(if to.minor().is_numeric() && to.patch().is_numeric() {
                PrimitiveComparator::less_than_or_equal(SemanticVersion::from(to))
            } else if let Some(minor) = to.minor().number() {
                PrimitiveComparator::less_than(ceiling_version(major, bump(minor)?, 0))
            } else {
                PrimitiveComparator::less_than(ceiling_version(bump(major)?, 0, 0))
            }),
        };
        // a sole ceiling moves into the first slot
        Ok(match (floor, ceiling) {
            (None, Some(ceiling)) => (Some(ceiling), None),
            pair => pair,
        })
    }

    pub fn from(&self) -> &PartialVersion {
        &self.from
    }

    pub fn to(&self) -> &PartialVersion {
        &self.to
    }

    /// The compiled `(floor, ceiling)` primitive pair.
    pub fn primitives(&self) -> (Option<&PrimitiveComparator>, Option<&PrimitiveComparator>) {
        (self.primitives.0.as_ref(), self.primitives.1.as_ref())
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        satisfies_pair(&self.primitives, version)
    }

    pub fn has_pre_release_version(&self, major: u32, minor: u32, patch: u32) -> bool {
        operand_targets(&self.from, major, minor, patch)
            || operand_targets(&self.to, major, minor, patch)
    }
}

impl fmt::Display for HyphenRangeComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from, self.to)
    }
}
