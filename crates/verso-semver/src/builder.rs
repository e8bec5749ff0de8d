//! Mutable construction and incrementing of versions.

use crate::error::{VersionError, VersionField};
use crate::prerelease::PreRelease;
use crate::version::{check_component, validate_build_metadata, SemanticVersion, COMPONENT_MAX};

/// The increment operation to apply to a [`VersionBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncrementKind {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
}

/// A mutable builder over the same fields as [`SemanticVersion`].
///
/// Setters validate eagerly, so [`build`](Self::build) itself cannot fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionBuilder {
    major: u32,
    minor: u32,
    patch: u32,
    pre_releases: Vec<PreRelease>,
    build_metadata: Vec<String>,
}

fn bump(value: u32, field: VersionField) -> Result<u32, VersionError> {
    value
        .checked_add(1)
        .filter(|&v| v <= COMPONENT_MAX)
        .ok_or_else(|| VersionError::too_big(field))
}

impl VersionBuilder {
    /// Starts from `0.0.0`.
    pub fn new() -> Self {
        VersionBuilder::default()
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn pre_releases(&self) -> &[PreRelease] {
        &self.pre_releases
    }

    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    pub fn with_major(&mut self, major: u32) -> Result<&mut Self, VersionError> {
        check_component(major, VersionField::Major)?;
        self.major = major;
        Ok(self)
    }

    pub fn with_minor(&mut self, minor: u32) -> Result<&mut Self, VersionError> {
        check_component(minor, VersionField::Minor)?;
        self.minor = minor;
        Ok(self)
    }

    pub fn with_patch(&mut self, patch: u32) -> Result<&mut Self, VersionError> {
        check_component(patch, VersionField::Patch)?;
        self.patch = patch;
        Ok(self)
    }

    pub fn append_pre_release(&mut self, identifier: PreRelease) -> &mut Self {
        self.pre_releases.push(identifier);
        self
    }

    pub fn clear_pre_releases(&mut self) -> &mut Self {
        self.pre_releases.clear();
        self
    }

    pub fn append_build_metadata(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<&mut Self, VersionError> {
        let identifier = identifier.into();
        validate_build_metadata(&identifier)?;
        self.build_metadata.push(identifier);
        Ok(self)
    }

    pub fn clear_build_metadata(&mut self) -> &mut Self {
        self.build_metadata.clear();
        self
    }

    /// Produces the version built so far. The builder stays usable.
    pub fn build(&self) -> SemanticVersion {
        SemanticVersion::new_unchecked(
            self.major,
            self.minor,
            self.patch,
            self.pre_releases.clone(),
            self.build_metadata.clone(),
        )
    }

    pub fn increment(
        &mut self,
        kind: IncrementKind,
        identifier: Option<PreRelease>,
    ) -> Result<&mut Self, VersionError> {
        match kind {
            IncrementKind::Major => self.increment_major(),
            IncrementKind::Minor => self.increment_minor(),
            IncrementKind::Patch => self.increment_patch(),
            IncrementKind::PreMajor => self.increment_pre_major(identifier),
            IncrementKind::PreMinor => self.increment_pre_minor(identifier),
            IncrementKind::PrePatch => self.increment_pre_patch(identifier),
            IncrementKind::PreRelease => self.increment_pre_release(identifier),
        }
    }

    /// A pre-release of the next major version collapses to that release
    /// instead of skipping it.
    pub fn increment_major(&mut self) -> Result<&mut Self, VersionError> {
        if self.minor != 0 || self.patch != 0 || self.pre_releases.is_empty() {
            self.major = bump(self.major, VersionField::Major)?;
        }
        self.minor = 0;
        self.patch = 0;
        self.pre_releases.clear();
        Ok(self)
    }

    pub fn increment_minor(&mut self) -> Result<&mut Self, VersionError> {
        if self.patch != 0 || self.pre_releases.is_empty() {
            self.minor = bump(self.minor, VersionField::Minor)?;
        }
        self.patch = 0;
        self.pre_releases.clear();
        Ok(self)
    }

    pub fn increment_patch(&mut self) -> Result<&mut Self, VersionError> {
        if self.pre_releases.is_empty() {
            self.patch = bump(self.patch, VersionField::Patch)?;
        }
        self.pre_releases.clear();
        Ok(self)
    }

    pub fn increment_pre_major(
        &mut self,
        identifier: Option<PreRelease>,
    ) -> Result<&mut Self, VersionError> {
        self.major = bump(self.major, VersionField::Major)?;
        self.minor = 0;
        self.patch = 0;
        self.set_pre_identifier(identifier);
        Ok(self)
    }

    pub fn increment_pre_minor(
        &mut self,
        identifier: Option<PreRelease>,
    ) -> Result<&mut Self, VersionError> {
        self.minor = bump(self.minor, VersionField::Minor)?;
        self.patch = 0;
        self.set_pre_identifier(identifier);
        Ok(self)
    }

    pub fn increment_pre_patch(
        &mut self,
        identifier: Option<PreRelease>,
    ) -> Result<&mut Self, VersionError> {
        self.patch = bump(self.patch, VersionField::Patch)?;
        self.set_pre_identifier(identifier);
        Ok(self)
    }

    /// On a release version this behaves like
    /// [`increment_pre_patch`](Self::increment_pre_patch). On a pre-release
    /// with a matching (or absent) identifier, the right-most numeric
    /// identifier is bumped, appending a `0` when there is none; a new
    /// identifier restarts the sequence at `identifier.0`.
    pub fn increment_pre_release(
        &mut self,
        identifier: Option<PreRelease>,
    ) -> Result<&mut Self, VersionError> {
        if self.pre_releases.is_empty() {
            return self.increment_pre_patch(identifier);
        }
        let restart = match &identifier {
            None => false,
            Some(id) => *id != PreRelease::ZERO && Some(id) != self.pre_releases.first(),
        };
        if restart {
            self.set_pre_identifier(identifier);
            return Ok(self);
        }
        match self
            .pre_releases
            .iter_mut()
            .rev()
            .find(|id| id.is_numeric())
        {
            Some(numeric) => {
                let next = numeric
                    .number()
                    .and_then(|n| n.checked_add(1))
                    .filter(|&n| n <= COMPONENT_MAX)
                    .ok_or(VersionError::PreReleaseTooBig)?;
                *numeric = PreRelease::Numeric(next);
            }
            None => self.pre_releases.push(PreRelease::ZERO),
        }
        Ok(self)
    }

    fn set_pre_identifier(&mut self, identifier: Option<PreRelease>) {
        self.pre_releases.clear();
        match identifier {
            None => self.pre_releases.push(PreRelease::ZERO),
            Some(id) if id == PreRelease::ZERO => self.pre_releases.push(id),
            Some(id) => {
                self.pre_releases.push(id);
                self.pre_releases.push(PreRelease::ZERO);
            }
        }
    }
}

impl From<&SemanticVersion> for VersionBuilder {
    fn from(version: &SemanticVersion) -> Self {
        VersionBuilder {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_releases: version.pre_releases().to_vec(),
            build_metadata: version.build_metadata().to_vec(),
        }
    }
}

impl From<&VersionBuilder> for SemanticVersion {
    fn from(builder: &VersionBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SemanticOptions;

    fn builder(text: &str) -> VersionBuilder {
        let version = SemanticVersion::parse(text).unwrap();
        VersionBuilder::from(&version)
    }

    fn incremented(text: &str, kind: IncrementKind, identifier: Option<&str>) -> String {
        let identifier = identifier.map(|id| {
            PreRelease::parse_with(id, SemanticOptions::STRICT).unwrap()
        });
        builder(text)
            .increment(kind, identifier)
            .unwrap()
            .build()
            .to_string()
    }

    #[test]
    fn test_build_round_trip() {
        let version = SemanticVersion::parse("1.2.3-rc.4+build.5").unwrap();
        assert_eq!(VersionBuilder::from(&version).build(), version);
        assert_eq!(
            VersionBuilder::from(&version).build().build_metadata(),
            version.build_metadata()
        );
    }

    #[test]
    fn test_setters_validate() {
        let mut builder = VersionBuilder::new();
        assert!(builder.with_major(2147483647).is_ok());
        assert_eq!(
            builder.with_minor(2147483648),
            Err(VersionError::MinorTooBig)
        );
        assert_eq!(
            builder.append_build_metadata(""),
            Err(VersionError::BuildMetadataEmpty)
        );
        assert_eq!(
            builder.append_build_metadata("wh@t"),
            Err(VersionError::BuildMetadataInvalid)
        );
        builder
            .with_minor(4)
            .unwrap()
            .append_pre_release(PreRelease::Numeric(0))
            .append_build_metadata("007")
            .unwrap();
        assert_eq!(builder.build().to_string(), "2147483647.4.0-0+007");
    }

    #[test]
    fn test_plain_increments() {
        assert_eq!(incremented("1.2.3", IncrementKind::Major, None), "2.0.0");
        assert_eq!(incremented("1.2.3", IncrementKind::Minor, None), "1.3.0");
        assert_eq!(incremented("1.2.3", IncrementKind::Patch, None), "1.2.4");
        // a pre-release collapses to the release it precedes
        assert_eq!(incremented("2.0.0-rc.1", IncrementKind::Major, None), "2.0.0");
        assert_eq!(incremented("2.1.0-rc.1", IncrementKind::Major, None), "3.0.0");
        assert_eq!(incremented("1.3.0-0", IncrementKind::Minor, None), "1.3.0");
        assert_eq!(incremented("1.3.2-0", IncrementKind::Minor, None), "1.4.0");
        assert_eq!(incremented("1.0.0-0", IncrementKind::Patch, None), "1.0.0");
    }

    #[test]
    fn test_pre_increments() {
        assert_eq!(incremented("1.2.3", IncrementKind::PreMajor, None), "2.0.0-0");
        assert_eq!(
            incremented("1.2.3", IncrementKind::PreMajor, Some("beta")),
            "2.0.0-beta.0"
        );
        assert_eq!(incremented("1.2.3", IncrementKind::PreMinor, Some("rc")), "1.3.0-rc.0");
        assert_eq!(incremented("1.2.3", IncrementKind::PrePatch, None), "1.2.4-0");
        assert_eq!(incremented("1.2.3", IncrementKind::PreMajor, Some("0")), "2.0.0-0");
    }

    #[test]
    fn test_pre_release_increment() {
        assert_eq!(incremented("1.2.3", IncrementKind::PreRelease, None), "1.2.4-0");
        assert_eq!(incremented("1.2.4-0", IncrementKind::PreRelease, None), "1.2.4-1");
        assert_eq!(
            incremented("1.2.4-beta.3", IncrementKind::PreRelease, None),
            "1.2.4-beta.4"
        );
        assert_eq!(
            incremented("1.2.4-beta.3", IncrementKind::PreRelease, Some("beta")),
            "1.2.4-beta.4"
        );
        assert_eq!(
            incremented("1.2.4-beta.3", IncrementKind::PreRelease, Some("rc")),
            "1.2.4-rc.0"
        );
        // no numeric identifier to bump, so one is appended
        assert_eq!(
            incremented("1.2.4-beta", IncrementKind::PreRelease, None),
            "1.2.4-beta.0"
        );
        // the right-most numeric identifier is the one bumped
        assert_eq!(
            incremented("1.2.4-0.alpha.7.x", IncrementKind::PreRelease, None),
            "1.2.4-0.alpha.8.x"
        );
    }

    #[test]
    fn test_increment_overflow() {
        let mut big = builder("2147483647.2147483647.2147483647");
        assert_eq!(big.increment_major().unwrap_err(), VersionError::MajorTooBig);
        assert_eq!(big.increment_minor().unwrap_err(), VersionError::MinorTooBig);
        assert_eq!(big.increment_patch().unwrap_err(), VersionError::PatchTooBig);
        assert_eq!(
            big.increment_pre_patch(None).unwrap_err(),
            VersionError::PatchTooBig
        );
        let mut version = builder("1.0.0-rc.2147483647");
        assert_eq!(
            version.increment_pre_release(None).unwrap_err(),
            VersionError::PreReleaseTooBig
        );
    }
}
