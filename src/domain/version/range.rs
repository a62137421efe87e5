//! npm-style version range expressions.
//!
//! A range is a set of alternatives joined by `||`; each alternative is an
//! intersection of comparators. Caret, tilde, hyphen and X-ranges are
//! desugared into plain comparators when parsing.

use std::fmt;
use std::str::FromStr;

use super::semver::{
    Identifier, Version, parse_component, parse_prerelease, strip_build, strip_v_prefix,
};
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Exact,
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Exact => "=",
            Op::Greater => ">",
            Op::GreaterEq => ">=",
            Op::Less => "<",
            Op::LessEq => "<=",
        }
    }
}

/// A single `<op><version>` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    pub op: Op,
    pub version: Version,
}

impl Comparator {
    pub fn new(op: Op, version: Version) -> Self {
        Self { op, version }
    }

    pub fn matches(&self, candidate: &Version) -> bool {
        match self.op {
            Op::Exact => candidate == &self.version,
            Op::Greater => candidate > &self.version,
            Op::GreaterEq => candidate >= &self.version,
            Op::Less => candidate < &self.version,
            Op::LessEq => candidate <= &self.version,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.version)
    }
}

/// A parsed version range such as `^0.8` or `>=0.7.0 <0.9.0 || 1.x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    raw: String,
    alternatives: Vec<Vec<Comparator>>,
}

impl VersionRange {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let alternatives = input
            .split("||")
            .map(parse_alternative)
            .collect::<Result<Vec<_>, String>>()
            .map_err(|reason| AppError::InvalidVersionRange {
                range: input.to_string(),
                reason,
            })?;

        Ok(Self { raw: input.trim().to_string(), alternatives })
    }

    /// The expression as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Desugared comparator sets; an empty set accepts every release.
    pub fn alternatives(&self) -> &[Vec<Comparator>] {
        &self.alternatives
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|set| set_matches(set, version))
    }

    /// Highest candidate satisfying the range.
    pub fn max_satisfying<'a>(&self, candidates: &'a [Version]) -> Option<&'a Version> {
        candidates.iter().filter(|candidate| self.matches(candidate)).max()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .alternatives
            .iter()
            .map(|set| {
                if set.is_empty() {
                    "*".to_string()
                } else {
                    set.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
                }
            })
            .collect();
        f.write_str(&rendered.join(" || "))
    }
}

impl FromStr for VersionRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

fn set_matches(set: &[Comparator], version: &Version) -> bool {
    if !set.iter().all(|comparator| comparator.matches(version)) {
        return false;
    }
    // Prereleases only match when the range opts into that exact release line.
    if version.is_prerelease() {
        return set.iter().any(|comparator| {
            comparator.version.is_prerelease() && comparator.version.same_release(version)
        });
    }
    true
}

fn parse_alternative(text: &str) -> Result<Vec<Comparator>, String> {
    let tokens = tokenize(text)?;

    if tokens.len() == 3 && tokens[1] == "-" {
        return hyphen(&tokens[0], &tokens[2]);
    }

    let mut comparators = Vec::new();
    for token in &tokens {
        comparators.extend(desugar(token)?);
    }
    Ok(comparators)
}

/// Split on whitespace, gluing a detached operator (`>= 1.2.3`) to its version.
fn tokenize(text: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut pending: Option<&str> = None;

    for word in text.split_whitespace() {
        match pending.take() {
            Some(op) => tokens.push(format!("{}{}", op, word)),
            None if is_bare_operator(word) => pending = Some(word),
            None => tokens.push(word.to_string()),
        }
    }

    if let Some(op) = pending {
        return Err(format!("operator '{}' is missing a version", op));
    }
    Ok(tokens)
}

fn is_bare_operator(word: &str) -> bool {
    matches!(word, "<" | "<=" | ">" | ">=" | "=" | "~" | "~>" | "^")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Caret,
    Tilde,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Exact,
}

fn split_operator(token: &str) -> (Operator, &str) {
    const PREFIXES: [(&str, Operator); 8] = [
        (">=", Operator::GreaterEq),
        ("<=", Operator::LessEq),
        ("~>", Operator::Tilde),
        (">", Operator::Greater),
        ("<", Operator::Less),
        ("=", Operator::Exact),
        ("~", Operator::Tilde),
        ("^", Operator::Caret),
    ];

    for (prefix, op) in PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            return (op, rest.trim());
        }
    }
    (Operator::Exact, token)
}

/// A version with optional trailing components (`1`, `1.2`, `1.x`, `*`).
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre: Vec<Identifier>,
}

impl Partial {
    fn parse(text: &str) -> Result<Self, String> {
        let body = strip_build(strip_v_prefix(text));
        if body.is_empty() {
            return Err(format!("missing version in '{}'", text));
        }

        let (core, pre) = match body.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (body, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() > 3 {
            return Err(format!("too many components in '{}'", text));
        }

        let mut slots = [None; 3];
        for (slot, part) in slots.iter_mut().zip(&parts) {
            if matches!(*part, "x" | "X" | "*") {
                // Components after a wildcard are ignored.
                break;
            }
            *slot = Some(parse_component(part).ok_or_else(|| {
                format!("'{}' is not a number or wildcard in '{}'", part, text)
            })?);
        }

        let pre = match pre {
            Some(raw) => {
                if slots[2].is_none() {
                    return Err(format!("prerelease needs a full version in '{}'", text));
                }
                parse_prerelease(raw).ok_or_else(|| format!("invalid prerelease in '{}'", text))?
            }
            None => Vec::new(),
        };

        Ok(Self { major: slots[0], minor: slots[1], patch: slots[2], pre })
    }

    fn floor(&self) -> Version {
        Version {
            major: self.major.unwrap_or(0),
            minor: self.minor.unwrap_or(0),
            patch: self.patch.unwrap_or(0),
            pre: self.pre.clone(),
        }
    }
}

fn desugar(token: &str) -> Result<Vec<Comparator>, String> {
    let (op, rest) = split_operator(token);
    let partial = Partial::parse(rest)?;

    Ok(match op {
        Operator::Exact => exact(&partial),
        Operator::Caret => caret(&partial),
        Operator::Tilde => tilde(&partial),
        Operator::Greater => greater(&partial),
        Operator::GreaterEq => match partial.major {
            None => Vec::new(),
            Some(_) => vec![ge(partial.floor())],
        },
        Operator::Less => match partial.major {
            None => nothing(),
            Some(_) => vec![lt(partial.floor())],
        },
        Operator::LessEq => less_eq(&partial),
    })
}

fn exact(p: &Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.patch) {
        (None, _, _) => Vec::new(),
        (Some(major), None, _) => next_major(major),
        (Some(major), Some(minor), None) => next_minor(major, minor),
        (Some(_), Some(_), Some(_)) => vec![Comparator::new(Op::Exact, p.floor())],
    }
}

fn caret(p: &Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.patch) {
        (None, _, _) => Vec::new(),
        (Some(major), None, _) => next_major(major),
        (Some(0), Some(minor), None) => next_minor(0, minor),
        (Some(major), Some(minor), None) => {
            vec![ge(Version::new(major, minor, 0)), lt(Version::new(major.saturating_add(1), 0, 0))]
        }
        (Some(major), Some(minor), Some(patch)) => {
            let upper = if major > 0 {
                Version::new(major.saturating_add(1), 0, 0)
            } else if minor > 0 {
                Version::new(0, minor.saturating_add(1), 0)
            } else {
                Version::new(0, 0, patch.saturating_add(1))
            };
            vec![ge(p.floor()), lt(upper)]
        }
    }
}

fn tilde(p: &Partial) -> Vec<Comparator> {
    match (p.major, p.minor) {
        (None, _) => Vec::new(),
        (Some(major), None) => next_major(major),
        (Some(major), Some(minor)) => {
            vec![ge(p.floor()), lt(Version::new(major, minor.saturating_add(1), 0))]
        }
    }
}

fn greater(p: &Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.patch) {
        (None, _, _) => nothing(),
        (Some(major), None, _) => vec![ge(Version::new(major.saturating_add(1), 0, 0))],
        (Some(major), Some(minor), None) => {
            vec![ge(Version::new(major, minor.saturating_add(1), 0))]
        }
        (Some(_), Some(_), Some(_)) => vec![Comparator::new(Op::Greater, p.floor())],
    }
}

fn less_eq(p: &Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.patch) {
        (None, _, _) => Vec::new(),
        (Some(major), None, _) => vec![lt(Version::new(major.saturating_add(1), 0, 0))],
        (Some(major), Some(minor), None) => {
            vec![lt(Version::new(major, minor.saturating_add(1), 0))]
        }
        (Some(_), Some(_), Some(_)) => vec![Comparator::new(Op::LessEq, p.floor())],
    }
}

fn hyphen(from: &str, to: &str) -> Result<Vec<Comparator>, String> {
    let lower = Partial::parse(from)?;
    let upper = Partial::parse(to)?;

    let mut comparators = Vec::new();
    if lower.major.is_some() {
        comparators.push(ge(lower.floor()));
    }
    comparators.extend(less_eq(&upper));
    Ok(comparators)
}

fn next_major(major: u64) -> Vec<Comparator> {
    vec![ge(Version::new(major, 0, 0)), lt(Version::new(major.saturating_add(1), 0, 0))]
}

fn next_minor(major: u64, minor: u64) -> Vec<Comparator> {
    vec![ge(Version::new(major, minor, 0)), lt(Version::new(major, minor.saturating_add(1), 0))]
}

fn ge(version: Version) -> Comparator {
    Comparator::new(Op::GreaterEq, version)
}

fn lt(version: Version) -> Comparator {
    Comparator::new(Op::Less, version)
}

/// A comparator set no release can satisfy (`>*`, `<*`).
fn nothing() -> Vec<Comparator> {
    vec![lt(Version::new(0, 0, 0))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn range(s: &str) -> VersionRange {
        VersionRange::parse(s).unwrap()
    }

    #[test]
    fn caret_zero_minor_pins_minor_line() {
        let r = range("^0.8");
        assert!(r.matches(&v("0.8.0")));
        assert!(r.matches(&v("0.8.28")));
        assert!(!r.matches(&v("0.7.6")));
        assert!(!r.matches(&v("0.9.0")));
        assert_eq!(r.to_string(), ">=0.8.0 <0.9.0");
    }

    #[test]
    fn caret_desugars_like_npm() {
        assert_eq!(range("^1.2.3").to_string(), ">=1.2.3 <2.0.0");
        assert_eq!(range("^0.2.3").to_string(), ">=0.2.3 <0.3.0");
        assert_eq!(range("^0.0.3").to_string(), ">=0.0.3 <0.0.4");
        assert_eq!(range("^1.2").to_string(), ">=1.2.0 <2.0.0");
        assert_eq!(range("^0.x").to_string(), ">=0.0.0 <1.0.0");
        assert_eq!(range("^0.0").to_string(), ">=0.0.0 <0.1.0");
    }

    #[test]
    fn tilde_allows_patch_updates() {
        assert_eq!(range("~1.2.3").to_string(), ">=1.2.3 <1.3.0");
        assert_eq!(range("~1.2").to_string(), ">=1.2.0 <1.3.0");
        assert_eq!(range("~1").to_string(), ">=1.0.0 <2.0.0");
        assert_eq!(range("~> 0.8.4").to_string(), ">=0.8.4 <0.9.0");
    }

    #[test]
    fn x_ranges_and_wildcards() {
        assert_eq!(range("0.8.x").to_string(), ">=0.8.0 <0.9.0");
        assert_eq!(range("1").to_string(), ">=1.0.0 <2.0.0");
        assert_eq!(range("*").to_string(), "*");
        assert_eq!(range("").to_string(), "*");
        assert!(range("*").matches(&v("99.0.0")));
        assert!(range("x").matches(&v("0.0.1")));
    }

    #[test]
    fn primitives_with_partial_versions() {
        assert_eq!(range(">1.2").to_string(), ">=1.3.0");
        assert_eq!(range(">1").to_string(), ">=2.0.0");
        assert_eq!(range("<=1.2").to_string(), "<1.3.0");
        assert_eq!(range("<1.2").to_string(), "<1.2.0");
        assert_eq!(range(">=1.2").to_string(), ">=1.2.0");
        assert_eq!(range("=0.8.19").to_string(), "=0.8.19");
        assert!(!range(">*").matches(&v("1.0.0")));
        assert!(!range("<*").matches(&v("0.0.0")));
    }

    #[test]
    fn detached_operators_are_glued() {
        let r = range(">= 0.7.0 < 0.9.0");
        assert_eq!(r.to_string(), ">=0.7.0 <0.9.0");
        assert!(r.matches(&v("0.8.1")));
        assert!(!r.matches(&v("0.9.0")));
    }

    #[test]
    fn hyphen_ranges_are_inclusive() {
        assert_eq!(range("0.6.0 - 0.8.4").to_string(), ">=0.6.0 <=0.8.4");
        assert_eq!(range("0.6 - 0.8").to_string(), ">=0.6.0 <0.9.0");
        assert!(range("0.6.0 - 0.8.4").matches(&v("0.8.4")));
        assert!(!range("0.6.0 - 0.8.4").matches(&v("0.8.5")));
    }

    #[test]
    fn alternatives_union() {
        let r = range("0.5.x || >=0.8.0 <0.8.5");
        assert!(r.matches(&v("0.5.17")));
        assert!(r.matches(&v("0.8.4")));
        assert!(!r.matches(&v("0.6.0")));
        assert!(!r.matches(&v("0.8.5")));
        assert_eq!(r.to_string(), ">=0.5.0 <0.6.0 || >=0.8.0 <0.8.5");
    }

    #[test]
    fn prereleases_need_an_opt_in_on_the_same_release() {
        let r = range("^0.8.0-nightly.1");
        assert!(r.matches(&v("0.8.0-nightly.5")));
        assert!(r.matches(&v("0.8.3")));
        assert!(!r.matches(&v("0.8.1-nightly.1")));
        assert!(!range("^0.8").matches(&v("0.8.2-rc.1")));
        assert!(!range("*").matches(&v("1.0.0-alpha")));
    }

    #[test]
    fn max_satisfying_picks_latest_in_line() {
        let candidates = vec![v("0.7.6"), v("0.8.19"), v("0.8.28"), v("0.9.0"), v("0.8.2")];
        let best = range("^0.8").max_satisfying(&candidates);
        assert_eq!(best, Some(&v("0.8.28")));
        assert_eq!(range("^0.6").max_satisfying(&candidates), None);
    }

    #[test]
    fn keeps_raw_expression() {
        assert_eq!(range("  ^0.8 ").as_str(), "^0.8");
    }

    #[test]
    fn rejects_garbage() {
        for input in ["^", ">=", "0.8.a", "^0.08", "1.2.3.4", "^0.8 ||| 1", "1.2-beta", "~>"] {
            let err = VersionRange::parse(input).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidVersionRange { .. }),
                "expected '{}' to be rejected, got {:?}",
                input,
                err
            );
        }
    }

    proptest! {
        #[test]
        fn caret_zero_eight_accepts_every_patch(patch in 0u64..10_000) {
            let r = range("^0.8");
            prop_assert!(r.matches(&Version::new(0, 8, patch)));
            prop_assert!(!r.matches(&Version::new(0, 7, patch)));
            prop_assert!(!r.matches(&Version::new(0, 9, patch)));
        }

        #[test]
        fn max_satisfying_result_satisfies_and_dominates(
            patches in prop::collection::vec((0u64..3, 0u64..12, 0u64..40), 0..20)
        ) {
            let candidates: Vec<Version> =
                patches.iter().map(|(a, b, c)| Version::new(*a, *b, *c)).collect();
            let r = range("^0.8");
            match r.max_satisfying(&candidates) {
                Some(best) => {
                    prop_assert!(r.matches(best));
                    for candidate in candidates.iter().filter(|c| r.matches(c)) {
                        prop_assert!(candidate <= best);
                    }
                }
                None => prop_assert!(candidates.iter().all(|c| !r.matches(c))),
            }
        }
    }
}
