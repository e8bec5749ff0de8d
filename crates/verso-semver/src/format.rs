//! Custom format strings for [`SemanticVersion`].
//!
//! Specifiers: `M`, `m`, `p` for the numeric components, `mm` and `pp` for
//! the trailing-zero-omitting forms, `r`/`rr`/`r<N>` for pre-release
//! identifiers, `d`/`dd`/`d<N>` for build metadata. The characters
//! `.`, `-`, `+`, ` ` and `_` act as buffered separators that only appear
//! when the specifier after them produces output. `\` escapes the next
//! character, and text in single or double quotes is emitted verbatim.

use std::fmt::Write;

use thiserror::Error;

use crate::version::SemanticVersion;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("The format string contains an unterminated quoted literal.")]
    UnterminatedQuote,
    #[error("The format string contains an identifier index that is too big.")]
    IndexTooBig,
    #[error("The format string contains a reserved specifier.")]
    ReservedSpecifier,
}

fn is_separator(c: char) -> bool {
    matches!(c, '.' | '-' | '+' | ' ' | '_')
}

struct Output {
    text: String,
    separator: Option<char>,
}

impl Output {
    fn new() -> Self {
        Output {
            text: String::new(),
            separator: None,
        }
    }

    /// Emits the buffered separator, then the value.
    fn push(&mut self, value: impl std::fmt::Display) {
        if let Some(separator) = self.separator.take() {
            self.text.push(separator);
        }
        let _ = write!(self.text, "{value}");
    }

    fn push_literal(&mut self, value: char) {
        if let Some(separator) = self.separator.take() {
            self.text.push(separator);
        }
        self.text.push(value);
    }

    /// The specifier produced nothing, so its separator is dropped too.
    fn omit(&mut self) {
        self.separator = None;
    }
}

/// Reads a decimal index after `r` or `d`, advancing the cursor.
fn scan_index(chars: &[char], pos: &mut usize) -> Result<Option<usize>, FormatError> {
    let start = *pos;
    let mut index = 0usize;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        index = index
            .checked_mul(10)
            .and_then(|i| i.checked_add(chars[*pos] as usize - '0' as usize))
            .filter(|&i| i <= i32::MAX as usize)
            .ok_or(FormatError::IndexTooBig)?;
        *pos += 1;
    }
    Ok(if *pos == start { None } else { Some(index) })
}

impl SemanticVersion {
    /// Formats the version according to a format string. `"G"`, `"g"` and
    /// the empty string produce the canonical representation.
    pub fn format(&self, format: &str) -> Result<String, FormatError> {
        if format.is_empty() || format == "G" || format == "g" {
            return Ok(self.to_string());
        }

        let chars: Vec<char> = format.chars().collect();
        let mut output = Output::new();
        let mut pos = 0;
        let mut pre_release_index = 0usize;
        let mut metadata_index = 0usize;

        while pos < chars.len() {
            let c = chars[pos];
            pos += 1;
            match c {
                'M' => {
                    if pos < chars.len() && chars[pos] == 'M' {
                        return Err(FormatError::ReservedSpecifier);
                    }
                    output.push(self.major());
                }
                'm' => {
                    if pos < chars.len() && chars[pos] == 'm' {
                        pos += 1;
                        if self.minor() != 0 || self.patch() != 0 {
                            output.push(self.minor());
                        } else {
                            output.omit();
                        }
                    } else {
                        output.push(self.minor());
                    }
                }
                'p' => {
                    if pos < chars.len() && chars[pos] == 'p' {
                        pos += 1;
                        if self.patch() != 0 {
                            output.push(self.patch());
                        } else {
                            output.omit();
                        }
                    } else {
                        output.push(self.patch());
                    }
                }
                'r' => {
                    if pos < chars.len() && chars[pos] == 'r' {
                        pos += 1;
                        // all remaining identifiers, from the auto-index on
                        let remaining = self.pre_releases().get(pre_release_index..).unwrap_or(&[]);
                        pre_release_index = self.pre_releases().len();
                        if remaining.is_empty() {
                            output.omit();
                        } else {
                            let joined = remaining
                                .iter()
                                .map(|id| id.to_string())
                                .collect::<Vec<_>>()
                                .join(".");
                            output.push(joined);
                        }
                    } else {
                        let index = match scan_index(&chars, &mut pos)? {
                            Some(explicit) => explicit,
                            None => pre_release_index,
                        };
                        pre_release_index = index + 1;
                        match self.pre_releases().get(index) {
                            Some(identifier) => output.push(identifier),
                            None => output.omit(),
                        }
                    }
                }
                'd' => {
                    if pos < chars.len() && chars[pos] == 'd' {
                        pos += 1;
                        let remaining = self.build_metadata().get(metadata_index..).unwrap_or(&[]);
                        metadata_index = self.build_metadata().len();
                        if remaining.is_empty() {
                            output.omit();
                        } else {
                            output.push(remaining.join("."));
                        }
                    } else {
                        let index = match scan_index(&chars, &mut pos)? {
                            Some(explicit) => explicit,
                            None => metadata_index,
                        };
                        metadata_index = index + 1;
                        match self.build_metadata().get(index) {
                            Some(identifier) => output.push(identifier),
                            None => output.omit(),
                        }
                    }
                }
                '\\' => {
                    if pos < chars.len() {
                        output.push_literal(chars[pos]);
                        pos += 1;
                    } else {
                        output.push_literal('\\');
                    }
                }
                quote @ ('\'' | '"') => {
                    let start = pos;
                    while pos < chars.len() && chars[pos] != quote {
                        pos += 1;
                    }
                    if pos >= chars.len() {
                        return Err(FormatError::UnterminatedQuote);
                    }
                    for &literal in &chars[start..pos] {
                        output.push_literal(literal);
                    }
                    pos += 1; // closing quote
                }
                separator if is_separator(separator) => {
                    // emit any previously buffered separator unconditionally
                    if let Some(pending) = output.separator.replace(separator) {
                        output.text.push(pending);
                    }
                }
                other => output.push_literal(other),
            }
        }
        if let Some(separator) = output.separator.take() {
            output.text.push(separator);
        }
        Ok(output.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SemanticOptions;

    fn version(text: &str) -> SemanticVersion {
        SemanticVersion::parse_with(text, SemanticOptions::ALLOW_LEADING_ZEROES).unwrap()
    }

    fn fmt(text: &str, format: &str) -> String {
        version(text)
            .format(format)
            .unwrap_or_else(|error| panic!("{text} with {format:?}: {error}"))
    }

    #[test]
    fn test_general_format() {
        for input in ["1.2.3", "1.0.0-beta.5", "0.4.0+build.02", "1.2.3-rc.1+sha.5114f85"] {
            assert_eq!(fmt(input, "G"), input);
            assert_eq!(fmt(input, "g"), input);
            assert_eq!(fmt(input, ""), input);
        }
    }

    #[test]
    fn test_component_specifiers() {
        assert_eq!(fmt("1.2.3", "M.m.p"), "1.2.3");
        assert_eq!(fmt("1.2.3", "p.m.M"), "3.2.1");
        assert_eq!(fmt("1.2.3", "M"), "1");
        assert_eq!(fmt("1.2.3", "m-p"), "2-3");
    }

    #[test]
    fn test_optional_components() {
        assert_eq!(fmt("1.2.3", "M.mm.pp"), "1.2.3");
        assert_eq!(fmt("1.2.0", "M.mm.pp"), "1.2");
        assert_eq!(fmt("1.0.0", "M.mm.pp"), "1");
        // a zero minor is kept alive by a non-zero patch
        assert_eq!(fmt("1.0.3", "M.mm.pp"), "1.0.3");
        assert_eq!(fmt("1.0.0-beta", "M.mm.pp-rr"), "1-beta");
        assert_eq!(fmt("1.0.0", "M.mm.pp-rr"), "1");
    }

    #[test]
    fn test_identifier_specifiers() {
        assert_eq!(fmt("1.2.3-alpha.0.beta", "rr"), "alpha.0.beta");
        assert_eq!(fmt("1.2.3-alpha.0.beta", "r.r.r"), "alpha.0.beta");
        assert_eq!(fmt("1.2.3-alpha.0.beta", "r2.r0"), "beta.alpha");
        // an explicit index moves the auto-index past it
        assert_eq!(fmt("1.2.3-alpha.0.beta", "r1.r"), "0.beta");
        assert_eq!(fmt("1.2.3+build.00", "dd"), "build.00");
        // the remaining-identifiers forms pick up after the auto-index
        assert_eq!(fmt("1.2.3-alpha.0.beta", "r.rr"), "alpha.0.beta");
        assert_eq!(fmt("1.2.3+build.00.extra", "d.dd"), "build.00.extra");
        assert_eq!(fmt("1.2.3+build.00", "d1.d0"), "00.build");
        assert_eq!(fmt("1.2.3-pre.2+build.00", "dd+rr-p.m.M"), "build.00+pre.2-3.2.1");
    }

    #[test]
    fn test_out_of_range_identifiers_are_omitted() {
        assert_eq!(fmt("1.2.3", "M.m.p-rr"), "1.2.3");
        assert_eq!(fmt("1.2.3", "M.m.p+dd"), "1.2.3");
        assert_eq!(fmt("1.2.3-alpha", "M-r.r.r"), "1-alpha");
        assert_eq!(fmt("1.2.3", "M-r5"), "1");
    }

    #[test]
    fn test_escapes_and_literals() {
        assert_eq!(fmt("1.2.3", "\\M.m.p"), "M.2.3");
        assert_eq!(fmt("1.2.3", "M'.m.p'"), "1.m.p");
        assert_eq!(fmt("1.2.3", "M\".m.p\""), "1.m.p");
        assert_eq!(fmt("1.2.3", "'version 'M"), "version 1");
        assert_eq!(fmt("1.2.3", "M!"), "1!");
    }

    #[test]
    fn test_trailing_separator_is_kept() {
        assert_eq!(fmt("1.2.3", "M.m."), "1.2.");
        assert_eq!(fmt("1.2.3", "M+"), "1+");
    }

    #[test]
    fn test_errors() {
        let version = version("1.2.3");
        assert_eq!(version.format("M'.m.p"), Err(FormatError::UnterminatedQuote));
        assert_eq!(version.format("MM"), Err(FormatError::ReservedSpecifier));
        assert_eq!(version.format("r99999999999"), Err(FormatError::IndexTooBig));
    }
}
