//! Parsing and validation errors

use thiserror::Error;

/// The version field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionField {
    Major,
    Minor,
    Patch,
    PreRelease,
    BuildMetadata,
}

/// The nature of a parsing or validation failure, independent of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorNature {
    NotFound,
    TooBig,
    LeadingZeroes,
    Empty,
    Invalid,
    Leftovers,
}

/// Error type for version parsing and construction.
///
/// Each variant is a (field, nature) pair with a fixed canonical message.
/// The `Component*` variants are produced by partial component parsing,
/// where the component's position is not known.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionError {
    #[error("The major version component could not be found.")]
    MajorNotFound,
    #[error("The minor version component could not be found.")]
    MinorNotFound,
    #[error("The patch version component could not be found.")]
    PatchNotFound,
    #[error("The pre-release identifier could not be found.")]
    PreReleaseNotFound,
    #[error("The build metadata identifier could not be found.")]
    BuildMetadataNotFound,

    #[error("The major version component cannot be greater than 2147483647.")]
    MajorTooBig,
    #[error("The minor version component cannot be greater than 2147483647.")]
    MinorTooBig,
    #[error("The patch version component cannot be greater than 2147483647.")]
    PatchTooBig,
    #[error("The numeric pre-release identifier cannot be greater than 2147483647.")]
    PreReleaseTooBig,

    #[error("The major version component cannot contain leading zeroes.")]
    MajorLeadingZeroes,
    #[error("The minor version component cannot contain leading zeroes.")]
    MinorLeadingZeroes,
    #[error("The patch version component cannot contain leading zeroes.")]
    PatchLeadingZeroes,
    #[error("The numeric pre-release identifier cannot contain leading zeroes.")]
    PreReleaseLeadingZeroes,

    #[error("The pre-release identifier cannot be empty.")]
    PreReleaseEmpty,
    #[error("The build metadata identifier cannot be empty.")]
    BuildMetadataEmpty,

    #[error("The pre-release identifier must only contain [A-Za-z0-9-] characters.")]
    PreReleaseInvalid,
    #[error("The build metadata identifier must only contain [A-Za-z0-9-] characters.")]
    BuildMetadataInvalid,

    #[error("Encountered an invalid character after the parsed version.")]
    Leftovers,

    #[error("The version component must be either numeric or a wildcard character.")]
    ComponentInvalid,
    #[error("The version component cannot be greater than 2147483647.")]
    ComponentTooBig,
    #[error("The version component cannot contain leading zeroes.")]
    ComponentLeadingZeroes,
}

impl VersionError {
    pub(crate) fn too_big(field: VersionField) -> Self {
        match field {
            VersionField::Major => Self::MajorTooBig,
            VersionField::Minor => Self::MinorTooBig,
            VersionField::Patch => Self::PatchTooBig,
            _ => Self::PreReleaseTooBig,
        }
    }
    pub(crate) fn leading_zeroes(field: VersionField) -> Self {
        match field {
            VersionField::Major => Self::MajorLeadingZeroes,
            VersionField::Minor => Self::MinorLeadingZeroes,
            VersionField::Patch => Self::PatchLeadingZeroes,
            _ => Self::PreReleaseLeadingZeroes,
        }
    }

    /// The version field this error refers to, if the error is tied to one.
    pub fn field(&self) -> Option<VersionField> {
        use VersionError::*;
        match self {
            MajorNotFound | MajorTooBig | MajorLeadingZeroes => Some(VersionField::Major),
            MinorNotFound | MinorTooBig | MinorLeadingZeroes => Some(VersionField::Minor),
            PatchNotFound | PatchTooBig | PatchLeadingZeroes => Some(VersionField::Patch),
            PreReleaseNotFound | PreReleaseTooBig | PreReleaseLeadingZeroes | PreReleaseEmpty
            | PreReleaseInvalid => Some(VersionField::PreRelease),
            BuildMetadataNotFound | BuildMetadataEmpty | BuildMetadataInvalid => {
                Some(VersionField::BuildMetadata)
            }
            Leftovers | ComponentInvalid | ComponentTooBig | ComponentLeadingZeroes => None,
        }
    }

    /// The nature of this error, independent of the field.
    pub fn nature(&self) -> ErrorNature {
        use VersionError::*;
        match self {
            MajorNotFound | MinorNotFound | PatchNotFound | PreReleaseNotFound
            | BuildMetadataNotFound => ErrorNature::NotFound,
            MajorTooBig | MinorTooBig | PatchTooBig | PreReleaseTooBig | ComponentTooBig => {
                ErrorNature::TooBig
            }
            MajorLeadingZeroes | MinorLeadingZeroes | PatchLeadingZeroes
            | PreReleaseLeadingZeroes | ComponentLeadingZeroes => ErrorNature::LeadingZeroes,
            PreReleaseEmpty | BuildMetadataEmpty => ErrorNature::Empty,
            PreReleaseInvalid | BuildMetadataInvalid | ComponentInvalid => ErrorNature::Invalid,
            Leftovers => ErrorNature::Leftovers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_axes() {
        assert_eq!(VersionError::MajorTooBig.field(), Some(VersionField::Major));
        assert_eq!(VersionError::MajorTooBig.nature(), ErrorNature::TooBig);
        assert_eq!(
            VersionError::PreReleaseLeadingZeroes.field(),
            Some(VersionField::PreRelease)
        );
        assert_eq!(
            VersionError::BuildMetadataEmpty.nature(),
            ErrorNature::Empty
        );
        assert_eq!(VersionError::Leftovers.field(), None);
        assert_eq!(VersionError::Leftovers.nature(), ErrorNature::Leftovers);
    }

    #[test]
    fn test_canonical_messages() {
        assert_eq!(
            VersionError::MajorTooBig.to_string(),
            "The major version component cannot be greater than 2147483647."
        );
        assert_eq!(
            VersionError::Leftovers.to_string(),
            "Encountered an invalid character after the parsed version."
        );
    }
}
