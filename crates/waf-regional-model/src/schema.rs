//! Constraint metadata attached to every generated shape.
//!
//! Each structure has one static [`ShapeSchema`] listing its members in
//! declaration order with the constraints the service enforces. The metadata
//! is inert: setters never consult it. [`crate::validate`] walks it, and
//! external runtimes may inspect it directly.

use std::fmt;

use chrono::{DateTime, Utc};

/// A generated structure that exposes its schema and member values.
pub trait Shape: fmt::Debug {
    /// Static constraint metadata of this shape.
    fn schema(&self) -> &'static ShapeSchema;

    /// Current value of a member, looked up by wire name. `None` when the
    /// member is unset or unknown.
    fn member_value(&self, member: &str) -> Option<MemberValue<'_>>;
}

/// Schema of one structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSchema {
    /// Rust type name of the shape.
    pub name: &'static str,
    /// Members in declaration order.
    pub members: &'static [MemberSchema],
}

impl ShapeSchema {
    /// Look up a member by wire name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&'static MemberSchema> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Members the service requires.
    pub fn required_members(&self) -> impl Iterator<Item = &'static MemberSchema> {
        self.members.iter().filter(|m| m.required)
    }
}

/// Schema of one structure member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSchema {
    /// Wire name of the member.
    pub name: &'static str,
    /// Name of the Smithy shape the member targets.
    pub target: &'static str,
    /// Value kind.
    pub kind: MemberKind,
    /// Whether the service requires the member.
    pub required: bool,
    /// Constraints on the member value.
    pub constraints: Constraints,
}

/// Schema of the elements of a list member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSchema {
    /// Name of the Smithy shape each element targets.
    pub target: &'static str,
    /// Element kind.
    pub kind: MemberKind,
    /// Constraints on each element.
    pub constraints: Constraints,
}

/// Kind of value a member holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Text.
    String,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Boolean.
    Boolean,
    /// UTC timestamp.
    Timestamp,
    /// Enumerated text with its modeled wire values.
    Enum(&'static [&'static str]),
    /// Nested structure.
    Structure,
    /// Ordered list of elements.
    List(&'static ItemSchema),
}

/// Constraints on a member or list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Length bounds: characters for text, elements for lists.
    pub length: Option<LengthRange>,
    /// Inclusive numeric bounds.
    pub range: Option<ValueRange>,
    /// Regular expression the text must contain a match for.
    pub pattern: Option<&'static str>,
}

impl Constraints {
    /// No constraints.
    pub const NONE: Self = Self {
        length: None,
        range: None,
        pattern: None,
    };

    /// Whether no constraint is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.range.is_none() && self.pattern.is_none()
    }
}

/// Inclusive length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    /// Minimum length.
    pub min: Option<u64>,
    /// Maximum length.
    pub max: Option<u64>,
}

impl LengthRange {
    /// Create length bounds.
    #[must_use]
    pub const fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Whether `len` lies within the bounds.
    #[must_use]
    pub fn contains(&self, len: u64) -> bool {
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounds(f, self.min.map(i128::from), self.max.map(i128::from))
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    /// Minimum value.
    pub min: Option<i64>,
    /// Maximum value.
    pub max: Option<i64>,
}

impl ValueRange {
    /// Create numeric bounds.
    #[must_use]
    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounds(f, self.min.map(i128::from), self.max.map(i128::from))
    }
}

fn write_bounds(f: &mut fmt::Formatter<'_>, min: Option<i128>, max: Option<i128>) -> fmt::Result {
    match (min, max) {
        (Some(min), Some(max)) => write!(f, "{min}..={max}"),
        (Some(min), None) => write!(f, "{min}.."),
        (None, Some(max)) => write!(f, "..={max}"),
        (None, None) => f.write_str(".."),
    }
}

/// A borrowed view of a member value, as produced by [`Shape::member_value`].
#[derive(Debug, Clone)]
pub enum MemberValue<'a> {
    /// Text.
    String(&'a str),
    /// Integer or long.
    Integer(i64),
    /// Boolean.
    Boolean(bool),
    /// Timestamp.
    Timestamp(DateTime<Utc>),
    /// Wire value of an enum.
    Enum(&'a str),
    /// Nested structure.
    Structure(&'a dyn Shape),
    /// List elements in order.
    List(Vec<MemberValue<'a>>),
}

/// A stored member type that can be viewed as a [`MemberValue`].
pub trait AsMemberValue {
    /// Borrow `self` as a member value.
    fn as_member_value(&self) -> MemberValue<'_>;
}

impl AsMemberValue for String {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::String(self.as_str())
    }
}

impl AsMemberValue for i32 {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Integer(i64::from(*self))
    }
}

impl AsMemberValue for i64 {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Integer(*self)
    }
}

impl AsMemberValue for bool {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Boolean(*self)
    }
}

impl AsMemberValue for DateTime<Utc> {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Timestamp(*self)
    }
}

impl<T: AsMemberValue> AsMemberValue for Vec<T> {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::List(self.iter().map(AsMemberValue::as_member_value).collect())
    }
}

impl<T: Shape> AsMemberValue for T {
    fn as_member_value(&self) -> MemberValue<'_> {
        MemberValue::Structure(self)
    }
}

/// View of an optional member, `None` when unset.
#[must_use]
pub fn value_of<T: AsMemberValue>(value: Option<&T>) -> Option<MemberValue<'_>> {
    value.map(AsMemberValue::as_member_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Predicate, RateBasedRule, RateKey};

    #[test]
    fn test_should_list_members_in_declaration_order() {
        let schema = RateBasedRule::shape_schema();
        let names: Vec<_> = schema.members.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "RuleId",
                "Name",
                "MetricName",
                "MatchPredicates",
                "RateKey",
                "RateLimit",
            ]
        );
    }

    #[test]
    fn test_should_expose_member_constraints() {
        let schema = RateBasedRule::shape_schema();

        let rule_id = schema.member("RuleId").unwrap();
        assert!(rule_id.required);
        assert_eq!(rule_id.target, "ResourceId");
        assert_eq!(
            rule_id.constraints.length,
            Some(LengthRange::new(Some(1), Some(128)))
        );
        assert_eq!(rule_id.constraints.pattern, Some(".*\\S.*"));

        let rate_limit = schema.member("RateLimit").unwrap();
        assert_eq!(rate_limit.kind, MemberKind::Long);
        assert_eq!(
            rate_limit.constraints.range,
            Some(ValueRange::new(Some(100), Some(2_000_000_000)))
        );

        let rate_key = schema.member("RateKey").unwrap();
        assert_eq!(rate_key.kind, MemberKind::Enum(RateKey::VALUES));
        assert!(rate_key.constraints.is_empty());

        let predicates = schema.member("MatchPredicates").unwrap();
        let MemberKind::List(item) = predicates.kind else {
            panic!("expected list kind");
        };
        assert_eq!(item.target, "Predicate");
        assert_eq!(item.kind, MemberKind::Structure);

        assert!(schema.member("Unknown").is_none());
        assert_eq!(schema.required_members().count(), 4);
    }

    #[test]
    fn test_should_view_member_values() {
        let rule = RateBasedRule::default()
            .with_rate_limit(2000)
            .with_rate_key(RateKey::Ip)
            .with_match_predicates(&[Predicate::default()]);

        let limit = rule.member_value("RateLimit");
        assert!(matches!(limit, Some(MemberValue::Integer(2000))));
        let key = rule.member_value("RateKey");
        assert!(matches!(key, Some(MemberValue::Enum("IP"))));
        let Some(MemberValue::List(items)) = rule.member_value("MatchPredicates") else {
            panic!("expected list value");
        };
        assert!(matches!(items[..], [MemberValue::Structure(_)]));
        assert!(rule.member_value("Name").is_none());
        assert!(value_of::<String>(None).is_none());
    }

    #[test]
    fn test_should_check_and_render_bounds() {
        let length = LengthRange::new(Some(1), Some(128));
        assert!(length.contains(1));
        assert!(length.contains(128));
        assert!(!length.contains(0));
        assert!(!length.contains(129));
        assert_eq!(length.to_string(), "1..=128");

        let range = ValueRange::new(Some(0), None);
        assert!(range.contains(i64::MAX));
        assert!(!range.contains(-1));
        assert_eq!(range.to_string(), "0..");
        assert_eq!(ValueRange::new(None, Some(5)).to_string(), "..=5");
        assert!(Constraints::NONE.is_empty());
    }
}
