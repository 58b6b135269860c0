//! Textual rendering shared by generated `Display` impls.
//!
//! A shape renders as `{Name: value,Other: value}`: set members only, in
//! declaration order, separated by a bare comma. Lists render as
//! `[a, b]` and timestamps as RFC 3339 with second precision.

use std::fmt;

use chrono::SecondsFormat;

use crate::schema::{MemberValue, Shape};

/// Write the set members of `shape` between braces.
pub(crate) fn fmt_shape(shape: &dyn Shape, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    let mut first = true;
    for member in shape.schema().members {
        let Some(value) = shape.member_value(member.name) else {
            continue;
        };
        if !first {
            f.write_str(",")?;
        }
        first = false;
        write!(f, "{}: ", member.name)?;
        fmt_value(&value, f)?;
    }
    f.write_str("}")
}

fn fmt_value(value: &MemberValue<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        MemberValue::String(text) | MemberValue::Enum(text) => f.write_str(text),
        MemberValue::Integer(n) => write!(f, "{n}"),
        MemberValue::Boolean(b) => write!(f, "{b}"),
        MemberValue::Timestamp(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
        MemberValue::Structure(inner) => fmt_shape(*inner, f),
        MemberValue::List(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt_value(item, f)?;
            }
            f.write_str("]")
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::input::CreateRateBasedRuleInput;
    use crate::types::{Predicate, PredicateType, RuleUpdate, Tag, TimeWindow};

    #[test]
    fn test_should_render_set_members_only() {
        let tag = Tag::default().with_key("team").with_value("edge");
        let input = CreateRateBasedRuleInput::default()
            .with_name("rule")
            .with_tags(&[tag.clone(), tag]);
        assert_eq!(
            input.to_string(),
            "{Name: rule,Tags: [{Key: team,Value: edge}, {Key: team,Value: edge}]}"
        );
    }

    #[test]
    fn test_should_render_empty_shape_as_braces() {
        assert_eq!(CreateRateBasedRuleInput::default().to_string(), "{}");
        assert_eq!(Tag::default().to_string(), "{}");
    }

    #[test]
    fn test_should_distinguish_empty_list_from_unset() {
        let input = CreateRateBasedRuleInput::default()
            .with_rate_limit(5)
            .with_tags(&[]);
        assert_eq!(input.to_string(), "{RateLimit: 5,Tags: []}");
    }

    #[test]
    fn test_should_render_nested_shapes_and_booleans() {
        let predicate = Predicate::default()
            .with_negated(false)
            .with_type(PredicateType::IpMatch);
        let update = RuleUpdate::default().with_predicate(predicate);
        assert_eq!(
            update.to_string(),
            "{Predicate: {Negated: false,Type: IPMatch}}"
        );
    }

    #[test]
    fn test_should_render_timestamp_as_rfc3339() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let window = TimeWindow::default().with_start_time(start);
        assert_eq!(window.to_string(), "{StartTime: 2023-11-14T22:13:20Z}");
    }
}
