//! Pre-flight constraint checks.
//!
//! Setters accept any value. [`validate`] is the opt-in hook a runtime calls
//! before sending a request: it walks the shape's static schema and reports
//! every violation at once, each with a member path such as
//! `Updates[0].Predicate.DataId`.

use std::sync::LazyLock;

use dashmap::DashMap;
use regex::Regex;
use tracing::debug;

use crate::schema::{Constraints, LengthRange, MemberKind, MemberValue, Shape, ValueRange};

/// Compiled patterns, keyed by their source text.
static PATTERNS: LazyLock<DashMap<&'static str, Regex>> = LazyLock::new(DashMap::new);

/// All constraint violations found in one shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{shape} has {} constraint violation(s)", .violations.len())]
pub struct ValidationError {
    /// Name of the validated shape.
    pub shape: &'static str,
    /// Violations in member declaration order.
    pub violations: Vec<Violation>,
}

/// A single violation at a member path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {kind}")]
pub struct Violation {
    /// Member path, e.g. `Updates[0].Predicate.DataId`.
    pub path: String,
    /// What is wrong.
    pub kind: ViolationKind,
}

/// Kind of constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViolationKind {
    /// A required member is unset.
    #[error("required member is missing")]
    MissingRequired,
    /// Text or list length is outside the bounds.
    #[error("length {actual} is outside {bounds}")]
    Length {
        /// Characters or elements present.
        actual: u64,
        /// Allowed bounds.
        bounds: LengthRange,
    },
    /// Numeric value is outside the bounds.
    #[error("value {actual} is outside {bounds}")]
    Range {
        /// Value present.
        actual: i64,
        /// Allowed bounds.
        bounds: ValueRange,
    },
    /// Text contains no match for the pattern.
    #[error("value does not match pattern `{pattern}`")]
    Pattern {
        /// Pattern source.
        pattern: &'static str,
    },
    /// Enum text is not one of the modeled values.
    #[error("`{value}` is not an allowed value")]
    NotAllowed {
        /// Offending wire text.
        value: String,
    },
    /// The pattern itself does not compile.
    #[error("pattern `{pattern}` is invalid: {reason}")]
    InvalidPattern {
        /// Pattern source.
        pattern: &'static str,
        /// Compiler message.
        reason: String,
    },
}

/// Check a shape and everything nested in it against its schema.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violation when at least one
/// constraint is broken.
pub fn validate(shape: &dyn Shape) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    check_shape(shape, &MemberPath::root(), &mut violations);

    if violations.is_empty() {
        return Ok(());
    }

    let name = shape.schema().name;
    debug!(
        shape = name,
        count = violations.len(),
        "constraint violations found"
    );
    Err(ValidationError {
        shape: name,
        violations,
    })
}

fn check_shape(shape: &dyn Shape, path: &MemberPath, out: &mut Vec<Violation>) {
    for member in shape.schema().members {
        let path = path.member(member.name);
        match shape.member_value(member.name) {
            Some(value) => check_value(&value, member.kind, &member.constraints, &path, out),
            None if member.required => out.push(path.violation(ViolationKind::MissingRequired)),
            None => {}
        }
    }
}

fn check_value(
    value: &MemberValue<'_>,
    kind: MemberKind,
    constraints: &Constraints,
    path: &MemberPath,
    out: &mut Vec<Violation>,
) {
    match value {
        MemberValue::String(text) => {
            check_length(text.chars().count(), constraints, path, out);
            if let Some(pattern) = constraints.pattern {
                check_pattern(pattern, text, path, out);
            }
        }
        MemberValue::Enum(text) => {
            if let MemberKind::Enum(allowed) = kind
                && !allowed.iter().any(|v| v == text)
            {
                out.push(path.violation(ViolationKind::NotAllowed {
                    value: (*text).to_owned(),
                }));
            }
        }
        MemberValue::Integer(n) => {
            if let Some(bounds) = constraints.range
                && !bounds.contains(*n)
            {
                out.push(path.violation(ViolationKind::Range { actual: *n, bounds }));
            }
        }
        MemberValue::Boolean(_) | MemberValue::Timestamp(_) => {}
        MemberValue::Structure(inner) => check_shape(*inner, path, out),
        MemberValue::List(items) => {
            check_length(items.len(), constraints, path, out);
            if let MemberKind::List(item) = kind {
                for (i, value) in items.iter().enumerate() {
                    check_value(value, item.kind, &item.constraints, &path.index(i), out);
                }
            }
        }
    }
}

fn check_length(
    len: usize,
    constraints: &Constraints,
    path: &MemberPath,
    out: &mut Vec<Violation>,
) {
    let Some(bounds) = constraints.length else {
        return;
    };
    let actual = u64::try_from(len).unwrap_or(u64::MAX);
    if !bounds.contains(actual) {
        out.push(path.violation(ViolationKind::Length { actual, bounds }));
    }
}

fn check_pattern(pattern: &'static str, text: &str, path: &MemberPath, out: &mut Vec<Violation>) {
    match pattern_matches(pattern, text) {
        Ok(true) => {}
        Ok(false) => out.push(path.violation(ViolationKind::Pattern { pattern })),
        Err(e) => out.push(path.violation(ViolationKind::InvalidPattern {
            pattern,
            reason: e.to_string(),
        })),
    }
}

/// Unanchored match: the text only has to contain a match.
fn pattern_matches(pattern: &'static str, text: &str) -> Result<bool, regex::Error> {
    if let Some(re) = PATTERNS.get(pattern) {
        return Ok(re.is_match(text));
    }
    let re = Regex::new(pattern)?;
    let matched = re.is_match(text);
    PATTERNS.insert(pattern, re);
    Ok(matched)
}

/// Dotted and indexed path to a member.
#[derive(Debug, Clone)]
struct MemberPath(String);

impl MemberPath {
    fn root() -> Self {
        Self(String::new())
    }

    fn member(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_owned())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    fn violation(&self, kind: ViolationKind) -> Violation {
        Violation {
            path: self.0.clone(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CreateRateBasedRuleInput, UpdateRuleInput};
    use crate::types::{ChangeAction, Predicate, PredicateType, RateKey, RuleUpdate, Tag};

    fn valid_rate_based_rule() -> CreateRateBasedRuleInput {
        CreateRateBasedRuleInput::default()
            .with_name("login-limit")
            .with_metric_name("LoginLimit")
            .with_rate_key(RateKey::Ip)
            .with_rate_limit(2000)
            .with_change_token("abcd-1234")
    }

    fn kinds_at<'a>(err: &'a ValidationError, path: &str) -> Vec<&'a ViolationKind> {
        err.violations
            .iter()
            .filter(|v| v.path == path)
            .map(|v| &v.kind)
            .collect()
    }

    #[test]
    fn test_should_accept_valid_input() {
        assert!(validate(&valid_rate_based_rule()).is_ok());
    }

    #[test]
    fn test_should_report_every_missing_required_member() {
        let err = validate(&CreateRateBasedRuleInput::default()).unwrap_err();
        assert_eq!(err.shape, "CreateRateBasedRuleInput");
        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["Name", "MetricName", "RateKey", "RateLimit", "ChangeToken"]
        );
        assert!(
            err.violations
                .iter()
                .all(|v| v.kind == ViolationKind::MissingRequired)
        );
        assert_eq!(
            err.to_string(),
            "CreateRateBasedRuleInput has 5 constraint violation(s)"
        );
    }

    #[test]
    fn test_should_report_range_violation() {
        let err = validate(&valid_rate_based_rule().with_rate_limit(99)).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert!(matches!(
            err.violations[0].kind,
            ViolationKind::Range { actual: 99, .. }
        ));
        assert_eq!(
            err.violations[0].to_string(),
            "RateLimit: value 99 is outside 100..=2000000000"
        );
    }

    #[test]
    fn test_should_report_pattern_and_length_violations() {
        let err = validate(&valid_rate_based_rule().with_name("   ")).unwrap_err();
        let kinds = kinds_at(&err, "Name");
        assert_eq!(kinds.len(), 1);
        assert_eq!(
            kinds[0].to_string(),
            "value does not match pattern `.*\\S.*`"
        );

        let err = validate(&valid_rate_based_rule().with_name("")).unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(matches!(
            kinds_at(&err, "Name")[0],
            ViolationKind::Length { actual: 0, .. }
        ));
    }

    #[test]
    fn test_should_count_characters_not_bytes() {
        let name = "é".repeat(128);
        assert!(validate(&valid_rate_based_rule().with_name(name)).is_ok());
    }

    #[test]
    fn test_should_report_unknown_enum_value() {
        let err = validate(&valid_rate_based_rule().with_rate_key("HEADER")).unwrap_err();
        let kinds = kinds_at(&err, "RateKey");
        assert_eq!(kinds.len(), 1);
        assert_eq!(kinds[0].to_string(), "`HEADER` is not an allowed value");
    }

    #[test]
    fn test_should_report_list_length_violation() {
        let err = validate(&valid_rate_based_rule().with_tags(&[])).unwrap_err();
        assert!(matches!(
            kinds_at(&err, "Tags")[0],
            ViolationKind::Length { actual: 0, .. }
        ));

        let tags = [Tag::default().with_key("team").with_value("")];
        assert!(validate(&valid_rate_based_rule().with_tags(&tags)).is_ok());
    }

    #[test]
    fn test_should_build_nested_paths() {
        let update = RuleUpdate::default()
            .with_action(ChangeAction::Insert)
            .with_predicate(
                Predicate::default()
                    .with_negated(false)
                    .with_type(PredicateType::IpMatch)
                    .with_data_id(" "),
            );
        let input = UpdateRuleInput::default()
            .with_rule_id("rule-1")
            .with_change_token("token")
            .with_updates(&[RuleUpdate::default(), update]);

        let err = validate(&input).unwrap_err();
        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "Updates[0].Action",
                "Updates[0].Predicate",
                "Updates[1].Predicate.DataId",
            ]
        );
    }

    #[test]
    fn test_should_report_invalid_pattern() {
        let mut out = Vec::new();
        check_pattern("(", "text", &MemberPath::root().member("Bad"), &mut out);
        assert_eq!(out.len(), 1);
        assert!(matches!(
            out[0].kind,
            ViolationKind::InvalidPattern { pattern: "(", .. }
        ));
    }
}
