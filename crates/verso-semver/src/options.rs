//! Parsing relaxation flags

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A bit set of parsing relaxations.
///
/// Every flag is independent and composable with any other subset.
/// [`SemanticOptions::STRICT`] (no flags) enforces the SemVer 2.0.0 grammar;
/// [`SemanticOptions::LOOSE`] enables everything.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SemanticOptions(u16);

impl SemanticOptions {
    /// No relaxations; the strict SemVer grammar.
    pub const STRICT: Self = Self(0);

    /// Allow leading zeroes on any numeric field (`01.2.3`).
    pub const ALLOW_LEADING_ZEROES: Self = Self(1 << 0);
    /// Allow a single `=` before the version.
    pub const ALLOW_EQUALS_PREFIX: Self = Self(1 << 1);
    /// Allow a single `v`/`V` before the version (after the `=`, if both are enabled).
    pub const ALLOW_VERSION_PREFIX: Self = Self(1 << 2);
    /// Allow the minor component to be absent (`1` reads as `1.0.0`).
    pub const OPTIONAL_MINOR: Self = Self(1 << 3);
    /// Allow the patch component to be absent (`1.2` reads as `1.2.0`).
    pub const OPTIONAL_PATCH: Self = Self(1 << 4);
    /// Read alternating digit/letter runs directly after the patch component
    /// as pre-release identifiers (`1.2.3alpha5` reads as `1.2.3-alpha.5`).
    pub const OPTIONAL_PRE_RELEASE_SEPARATOR: Self = Self(1 << 5);
    /// Silently drop empty pre-release identifiers instead of erroring.
    pub const REMOVE_EMPTY_PRE_RELEASES: Self = Self(1 << 6);
    /// Silently drop empty build metadata identifiers instead of erroring.
    pub const REMOVE_EMPTY_BUILD_METADATA: Self = Self(1 << 7);
    /// Allow whitespace around structural tokens.
    pub const ALLOW_INNER_WHITE: Self = Self(1 << 8);
    /// Allow whitespace before the version.
    pub const ALLOW_LEADING_WHITE: Self = Self(1 << 9);
    /// Allow whitespace after the version.
    pub const ALLOW_TRAILING_WHITE: Self = Self(1 << 10);
    /// Allow arbitrary trailing characters after the version.
    pub const ALLOW_LEFTOVERS: Self = Self(1 << 11);

    /// Every relaxation enabled.
    pub const LOOSE: Self = Self(0x0FFF);

    /// Whether every flag of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_strict(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl BitOr for SemanticOptions {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SemanticOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SemanticOptions {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for SemanticOptions {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for SemanticOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u16, &str); 12] = [
            (1 << 0, "ALLOW_LEADING_ZEROES"),
            (1 << 1, "ALLOW_EQUALS_PREFIX"),
            (1 << 2, "ALLOW_VERSION_PREFIX"),
            (1 << 3, "OPTIONAL_MINOR"),
            (1 << 4, "OPTIONAL_PATCH"),
            (1 << 5, "OPTIONAL_PRE_RELEASE_SEPARATOR"),
            (1 << 6, "REMOVE_EMPTY_PRE_RELEASES"),
            (1 << 7, "REMOVE_EMPTY_BUILD_METADATA"),
            (1 << 8, "ALLOW_INNER_WHITE"),
            (1 << 9, "ALLOW_LEADING_WHITE"),
            (1 << 10, "ALLOW_TRAILING_WHITE"),
            (1 << 11, "ALLOW_LEFTOVERS"),
        ];
        if self.0 == 0 {
            return f.write_str("STRICT");
        }
        let mut first = true;
        for (bit, name) in NAMES {
            if self.0 & bit != 0 {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_compose() {
        let options = SemanticOptions::OPTIONAL_MINOR | SemanticOptions::OPTIONAL_PATCH;
        assert!(options.contains(SemanticOptions::OPTIONAL_MINOR));
        assert!(options.contains(SemanticOptions::OPTIONAL_PATCH));
        assert!(!options.contains(SemanticOptions::ALLOW_LEADING_ZEROES));
        assert!(!options.is_strict());
        assert!(SemanticOptions::STRICT.is_strict());
    }

    #[test]
    fn test_loose_contains_every_flag() {
        for shift in 0..12u16 {
            let flag = SemanticOptions(1 << shift);
            assert!(SemanticOptions::LOOSE.contains(flag));
        }
    }

    #[test]
    fn test_debug_names() {
        assert_eq!(format!("{:?}", SemanticOptions::STRICT), "STRICT");
        let options = SemanticOptions::ALLOW_LEADING_ZEROES | SemanticOptions::OPTIONAL_PATCH;
        assert_eq!(
            format!("{options:?}"),
            "ALLOW_LEADING_ZEROES | OPTIONAL_PATCH"
        );
    }
}
