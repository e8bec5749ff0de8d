//! Hand-rolled version scanner: strict fast path plus the option-driven
//! loose path. Both hold a single forward cursor over the input; structural
//! scanning never allocates, only retained identifier text does.

use crate::error::{VersionError, VersionField};
use crate::options::SemanticOptions;
use crate::prerelease::PreRelease;
use crate::version::{SemanticVersion, COMPONENT_MAX};

pub(crate) fn is_valid_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

pub(crate) fn is_valid_identifier(text: &str) -> bool {
    text.bytes().all(is_valid_byte)
}

pub(crate) fn is_numeric(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Accumulates an already-scanned digit run, rejecting the instant the
/// value would exceed `2147483647`.
fn accumulate(digits: &[u8], field: VersionField) -> Result<u32, VersionError> {
    let mut value = 0u32;
    for &b in digits {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u32))
            .filter(|&v| v <= COMPONENT_MAX)
            .ok_or_else(|| VersionError::too_big(field))?;
    }
    Ok(value)
}

fn skip_digits(bytes: &[u8], pos: &mut usize) {
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
}

fn skip_whitespace(bytes: &[u8], pos: &mut usize) {
    while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
}

/// Scans one numeric component at the cursor, applying the leading-zero
/// rule. Returns `None` when there is no digit at the cursor.
fn scan_component(
    bytes: &[u8],
    pos: &mut usize,
    allow_leading_zeroes: bool,
    field: VersionField,
) -> Result<Option<u32>, VersionError> {
    let start = *pos;
    skip_digits(bytes, pos);
    if *pos == start {
        return Ok(None);
    }
    if !allow_leading_zeroes && bytes[start] == b'0' && *pos > start + 1 {
        return Err(VersionError::leading_zeroes(field));
    }
    Ok(Some(accumulate(&bytes[start..*pos], field)?))
}

/// The strict grammar, with no option checks on the hot path. Must behave
/// identically to the loose path with no flags set.
pub(crate) fn parse_strict(text: &str) -> Result<SemanticVersion, VersionError> {
    let bytes = text.as_bytes();
    let length = bytes.len();
    let mut pos = 0;

    let major = scan_component(bytes, &mut pos, false, VersionField::Major)?
        .ok_or(VersionError::MajorNotFound)?;

    if pos >= length || bytes[pos] != b'.' {
        return Err(VersionError::MinorNotFound);
    }
    pos += 1;
    let minor = scan_component(bytes, &mut pos, false, VersionField::Minor)?
        .ok_or(VersionError::MinorNotFound)?;

    if pos >= length || bytes[pos] != b'.' {
        return Err(VersionError::PatchNotFound);
    }
    pos += 1;
    let patch = scan_component(bytes, &mut pos, false, VersionField::Patch)?
        .ok_or(VersionError::PatchNotFound)?;

    let mut pre_releases = Vec::new();
    if pos < length && bytes[pos] == b'-' {
        loop {
            pos += 1; // skip '-' or '.'
            let start = pos;
            while pos < length && is_valid_byte(bytes[pos]) {
                pos += 1;
            }
            if pos == start {
                return Err(VersionError::PreReleaseNotFound);
            }
            pre_releases.push(PreRelease::from_scanned(&text[start..pos], false)?);
            if !(pos < length && bytes[pos] == b'.') {
                break;
            }
        }
    }

    let mut build_metadata = Vec::new();
    if pos < length && bytes[pos] == b'+' {
        loop {
            pos += 1; // skip '+' or '.'
            let start = pos;
            while pos < length && is_valid_byte(bytes[pos]) {
                pos += 1;
            }
            if pos == start {
                return Err(VersionError::BuildMetadataNotFound);
            }
            build_metadata.push(text[start..pos].to_owned());
            if !(pos < length && bytes[pos] == b'.') {
                break;
            }
        }
    }

    if pos < length {
        return Err(VersionError::Leftovers);
    }
    Ok(SemanticVersion::new_unchecked(
        major,
        minor,
        patch,
        pre_releases,
        build_metadata,
    ))
}

/// The loose path. Relaxations are checked in a fixed order against the
/// cursor; `pos` is left at the last position reached, success or failure.
pub(crate) fn parse_loose(
    text: &str,
    options: SemanticOptions,
    pos: &mut usize,
) -> Result<SemanticVersion, VersionError> {
    let bytes = text.as_bytes();
    let length = bytes.len();

    let inner_white = options.contains(SemanticOptions::ALLOW_INNER_WHITE);
    let leading_zeroes = options.contains(SemanticOptions::ALLOW_LEADING_ZEROES);

    if options.contains(SemanticOptions::ALLOW_LEADING_WHITE) {
        skip_whitespace(bytes, pos);
    }
    if options.contains(SemanticOptions::ALLOW_EQUALS_PREFIX) && *pos < length && bytes[*pos] == b'=' {
        *pos += 1;
        if inner_white {
            skip_whitespace(bytes, pos);
        }
    }
    if options.contains(SemanticOptions::ALLOW_VERSION_PREFIX)
        && *pos < length
        && (bytes[*pos] == b'v' || bytes[*pos] == b'V')
    {
        *pos += 1;
        if inner_white {
            skip_whitespace(bytes, pos);
        }
    }

    let major = scan_component(bytes, pos, leading_zeroes, VersionField::Major)?
        .ok_or(VersionError::MajorNotFound)?;
    if inner_white {
        skip_whitespace(bytes, pos);
    }

    let mut minor = 0;
    let mut patch = 0;
    if *pos >= length || bytes[*pos] != b'.' {
        if !options.contains(SemanticOptions::OPTIONAL_MINOR) {
            return Err(VersionError::MinorNotFound);
        }
        // minor absent: patch parsing is skipped entirely
    } else {
        *pos += 1; // skip '.'
        if inner_white {
            skip_whitespace(bytes, pos);
        }
        match scan_component(bytes, pos, leading_zeroes, VersionField::Minor)? {
            None => {
                if !options.contains(SemanticOptions::OPTIONAL_MINOR) {
                    return Err(VersionError::MinorNotFound);
                }
            }
            Some(found) => {
                minor = found;
                if inner_white {
                    skip_whitespace(bytes, pos);
                }
                if *pos >= length || bytes[*pos] != b'.' {
                    if !options.contains(SemanticOptions::OPTIONAL_PATCH) {
                        return Err(VersionError::PatchNotFound);
                    }
                } else {
                    *pos += 1; // skip '.'
                    if inner_white {
                        skip_whitespace(bytes, pos);
                    }
                    match scan_component(bytes, pos, leading_zeroes, VersionField::Patch)? {
                        None => {
                            if !options.contains(SemanticOptions::OPTIONAL_PATCH) {
                                return Err(VersionError::PatchNotFound);
                            }
                        }
                        Some(found) => {
                            patch = found;
                            if inner_white {
                                skip_whitespace(bytes, pos);
                            }
                        }
                    }
                }
            }
        }
    }

    let mut pre_releases = Vec::new();
    if *pos < length && bytes[*pos] == b'-' {
        let remove_empty = options.contains(SemanticOptions::REMOVE_EMPTY_PRE_RELEASES);
        loop {
            *pos += 1; // skip '-' or '.'
            if inner_white {
                skip_whitespace(bytes, pos);
            }
            let start = *pos;
            while *pos < length && is_valid_byte(bytes[*pos]) {
                *pos += 1;
            }
            if *pos == start {
                if !remove_empty {
                    return Err(VersionError::PreReleaseNotFound);
                }
            } else {
                pre_releases.push(PreRelease::from_scanned(&text[start..*pos], leading_zeroes)?);
                if inner_white {
                    skip_whitespace(bytes, pos);
                }
            }
            if !(*pos < length && bytes[*pos] == b'.') {
                break;
            }
        }
    } else if options.contains(SemanticOptions::OPTIONAL_PRE_RELEASE_SEPARATOR)
        && *pos < length
        && bytes[*pos].is_ascii_alphanumeric()
    {
        // no-separator mode: adjacent alternating digit runs and letter runs
        // directly after the patch component
        loop {
            let numeric = bytes[*pos].is_ascii_digit();
            let start = *pos;
            while *pos < length
                && bytes[*pos].is_ascii_alphanumeric()
                && bytes[*pos].is_ascii_digit() == numeric
            {
                *pos += 1;
            }
            pre_releases.push(PreRelease::from_scanned(&text[start..*pos], leading_zeroes)?);
            if inner_white {
                skip_whitespace(bytes, pos);
            }
            if !(*pos < length && bytes[*pos].is_ascii_alphanumeric()) {
                break;
            }
        }
    }

    let mut build_metadata = Vec::new();
    if *pos < length && bytes[*pos] == b'+' {
        let remove_empty = options.contains(SemanticOptions::REMOVE_EMPTY_BUILD_METADATA);
        loop {
            *pos += 1; // skip '+' or '.'
            if inner_white {
                skip_whitespace(bytes, pos);
            }
            let start = *pos;
            while *pos < length && is_valid_byte(bytes[*pos]) {
                *pos += 1;
            }
            if *pos == start {
                if !remove_empty {
                    return Err(VersionError::BuildMetadataNotFound);
                }
            } else {
                build_metadata.push(text[start..*pos].to_owned());
                if inner_white {
                    skip_whitespace(bytes, pos);
                }
            }
            if !(*pos < length && bytes[*pos] == b'.') {
                break;
            }
        }
    }

    if inner_white {
        // the inner-whitespace rule has already consumed any trailing run
        if !options.contains(SemanticOptions::ALLOW_TRAILING_WHITE)
            && *pos > 0
            && bytes[*pos - 1].is_ascii_whitespace()
        {
            return Err(VersionError::Leftovers);
        }
    } else if options.contains(SemanticOptions::ALLOW_TRAILING_WHITE) {
        skip_whitespace(bytes, pos);
    }

    if *pos < length && !options.contains(SemanticOptions::ALLOW_LEFTOVERS) {
        return Err(VersionError::Leftovers);
    }
    Ok(SemanticVersion::new_unchecked(
        major,
        minor,
        patch,
        pre_releases,
        build_metadata,
    ))
}

impl SemanticVersion {
    /// Parses a version under the strict SemVer 2.0.0 grammar.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        parse_strict(text)
    }

    /// Parses a version with the given set of relaxations.
    pub fn parse_with(text: &str, options: SemanticOptions) -> Result<Self, VersionError> {
        if options.is_strict() {
            return parse_strict(text);
        }
        let mut pos = 0;
        parse_loose(text, options, &mut pos)
    }

    /// Non-erroring form of [`parse_with`](Self::parse_with).
    pub fn try_parse(text: &str, options: SemanticOptions) -> Option<Self> {
        Self::parse_with(text, options).ok()
    }

    /// Parses a version, also reporting the last cursor position reached —
    /// where a loose parse stopped or failed.
    pub fn parse_tracked(
        text: &str,
        options: SemanticOptions,
    ) -> (Result<Self, VersionError>, usize) {
        let mut pos = 0;
        let result = parse_loose(text, options, &mut pos);
        (result, pos)
    }
}

impl std::str::FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_strict(text)
    }
}
