use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// A single dot-separated prerelease identifier.
///
/// Numeric identifiers sort before alphanumeric ones, which matches semver precedence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    Alpha(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alpha(s) => f.write_str(s),
        }
    }
}

/// A semantic version (`major.minor.patch[-pre]`).
///
/// Build metadata (`+commit.7dd6d404`) is accepted when parsing and dropped,
/// so compiler build strings parse to their release version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Vec<Identifier>,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch, pre: Vec::new() }
    }

    /// Parse a version string. A leading `v` or `=` is tolerated.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidVersion(input.to_string());

        let body = input.trim();
        let body = body.strip_prefix('=').unwrap_or(body).trim_start();
        let body = strip_v_prefix(body);
        let body = strip_build(body);

        let (core, pre) = match body.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (body, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let major = parse_component(parts[0]).ok_or_else(invalid)?;
        let minor = parse_component(parts[1]).ok_or_else(invalid)?;
        let patch = parse_component(parts[2]).ok_or_else(invalid)?;

        let pre = match pre {
            Some(raw) => parse_prerelease(raw).ok_or_else(invalid)?,
            None => Vec::new(),
        };

        Ok(Self { major, minor, patch, pre })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// True when both versions share `major.minor.patch`, ignoring prerelease tags.
    pub fn same_release(&self, other: &Version) -> bool {
        (self.major, self.minor, self.patch) == (other.major, other.minor, other.patch)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // A release outranks any of its prereleases.
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(ToString::to_string).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

pub(crate) fn strip_v_prefix(text: &str) -> &str {
    text.strip_prefix('v').or_else(|| text.strip_prefix('V')).unwrap_or(text)
}

pub(crate) fn strip_build(text: &str) -> &str {
    text.split_once('+').map_or(text, |(head, _)| head)
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// A numeric component without leading zeros (`0` itself is fine).
pub(crate) fn parse_component(text: &str) -> Option<u64> {
    if !is_numeric(text) || (text.len() > 1 && text.starts_with('0')) {
        return None;
    }
    text.parse().ok()
}

pub(crate) fn parse_prerelease(text: &str) -> Option<Vec<Identifier>> {
    text.split('.')
        .map(|ident| {
            if ident.is_empty() || !ident.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            {
                return None;
            }
            if is_numeric(ident) {
                return parse_component(ident).map(Identifier::Numeric);
            }
            Some(Identifier::Alpha(ident.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn parses_plain_release() {
        assert_eq!(v("0.8.19"), Version::new(0, 8, 19));
        assert_eq!(v("v1.2.3"), Version::new(1, 2, 3));
        assert_eq!(v("=1.2.3"), Version::new(1, 2, 3));
    }

    #[test]
    fn drops_build_metadata() {
        assert_eq!(v("0.8.19+commit.7dd6d404"), Version::new(0, 8, 19));
    }

    #[test]
    fn parses_prerelease_identifiers() {
        let version = v("0.8.0-nightly.2021.1.1");
        assert!(version.is_prerelease());
        assert_eq!(
            version.pre,
            vec![
                Identifier::Alpha("nightly".to_string()),
                Identifier::Numeric(2021),
                Identifier::Numeric(1),
                Identifier::Numeric(1),
            ]
        );
        assert_eq!(version.to_string(), "0.8.0-nightly.2021.1.1");
    }

    #[test]
    fn rejects_malformed_versions() {
        for input in ["", "1", "1.2", "1.2.3.4", "a.b.c", "1.2.x", "1.2.3-", "1.2.3-a..b"] {
            assert!(Version::parse(input).is_err(), "expected '{}' to be rejected", input);
        }
    }

    #[test]
    fn rejects_leading_zeros() {
        for input in ["01.2.3", "1.02.3", "1.2.03", "1.2.3-01", "1.2.3-rc.007"] {
            assert!(Version::parse(input).is_err(), "expected '{}' to be rejected", input);
        }
        assert_eq!(v("0.0.0"), Version::new(0, 0, 0));
        assert_eq!(v("1.2.3-0a").pre, vec![Identifier::Alpha("0a".to_string())]);
    }

    #[test]
    fn orders_by_semver_precedence() {
        assert!(v("0.8.20") > v("0.8.19"));
        assert!(v("0.9.0") > v("0.8.99"));
        assert!(v("1.0.0") > v("1.0.0-rc.1"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
        assert!(v("1.0.0-beta.2") < v("1.0.0-beta.11"));
        assert_eq!(v("1.0.0+a").cmp(&v("1.0.0+b")), Ordering::Equal);
    }
}
