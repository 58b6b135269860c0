//! Smithy JSON AST model types for deserialization.
//!
//! Only the parts of the Smithy 2.0 JSON AST that the WAF Regional model
//! uses are typed out. Structure and enum members are kept in declaration
//! order, which drives field order, `Display` output and schema order in the
//! generated code.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Trait key for member/shape documentation.
pub const DOCUMENTATION_TRAIT: &str = "smithy.api#documentation";
/// Trait key marking a required member.
pub const REQUIRED_TRAIT: &str = "smithy.api#required";
/// Trait key for string/list length bounds.
pub const LENGTH_TRAIT: &str = "smithy.api#length";
/// Trait key for numeric range bounds.
pub const RANGE_TRAIT: &str = "smithy.api#range";
/// Trait key for a string pattern.
pub const PATTERN_TRAIT: &str = "smithy.api#pattern";
/// Trait key marking a structure as an error shape.
pub const ERROR_TRAIT: &str = "smithy.api#error";
/// Trait key carrying the wire value of an enum member.
pub const ENUM_VALUE_TRAIT: &str = "smithy.api#enumValue";

/// Top-level Smithy model document.
#[derive(Debug, Deserialize)]
pub struct SmithyModel {
    /// Smithy version (e.g., "2.0").
    pub smithy: String,
    /// All shapes defined in the model, keyed by their full shape ID.
    pub shapes: HashMap<String, Shape>,
}

/// A single Smithy shape.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// A structure shape (struct).
    #[serde(rename = "structure")]
    Structure(StructureShape),
    /// An operation shape.
    #[serde(rename = "operation")]
    Operation(OperationShape),
    /// A string shape (simple type or alias).
    #[serde(rename = "string")]
    String(SimpleShape),
    /// A boolean shape.
    #[serde(rename = "boolean")]
    Boolean(SimpleShape),
    /// A 32-bit integer shape.
    #[serde(rename = "integer")]
    Integer(SimpleShape),
    /// A 64-bit integer shape.
    #[serde(rename = "long")]
    Long(SimpleShape),
    /// A timestamp shape.
    #[serde(rename = "timestamp")]
    Timestamp(SimpleShape),
    /// An enum shape.
    #[serde(rename = "enum")]
    Enum(EnumShape),
    /// A list shape.
    #[serde(rename = "list")]
    List(ListShape),
    /// A blob shape (not referenced by generated shapes).
    #[serde(rename = "blob")]
    Blob(SimpleShape),
    /// A map shape (not referenced by generated shapes).
    #[serde(rename = "map")]
    Map(SimpleShape),
    /// A union shape (not referenced by generated shapes).
    #[serde(rename = "union")]
    Union(SimpleShape),
    /// A service shape (ignored).
    #[serde(rename = "service")]
    Service(SimpleShape),
    /// A resource shape (ignored).
    #[serde(rename = "resource")]
    Resource(SimpleShape),
    /// An integer enum shape (ignored).
    #[serde(rename = "intEnum")]
    IntEnum(SimpleShape),
    /// A double shape (ignored).
    #[serde(rename = "double")]
    Double(SimpleShape),
    /// A float shape (ignored).
    #[serde(rename = "float")]
    Float(SimpleShape),
}

impl Shape {
    /// Short lowercase kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Structure(_) => "structure",
            Self::Operation(_) => "operation",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Long(_) => "long",
            Self::Timestamp(_) => "timestamp",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Blob(_) => "blob",
            Self::Map(_) => "map",
            Self::Union(_) => "union",
            Self::Service(_) => "service",
            Self::Resource(_) => "resource",
            Self::IntEnum(_) => "intEnum",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
        }
    }

    /// Traits attached to the shape itself.
    pub fn traits(&self) -> &Traits {
        match self {
            Self::Structure(s) => &s.traits,
            Self::Operation(s) => &s.traits,
            Self::Enum(s) => &s.traits,
            Self::List(s) => &s.traits,
            Self::String(s)
            | Self::Boolean(s)
            | Self::Integer(s)
            | Self::Long(s)
            | Self::Timestamp(s)
            | Self::Blob(s)
            | Self::Map(s)
            | Self::Union(s)
            | Self::Service(s)
            | Self::Resource(s)
            | Self::IntEnum(s)
            | Self::Double(s)
            | Self::Float(s) => &s.traits,
        }
    }
}

/// Trait map of a shape or member.
pub type Traits = HashMap<String, serde_json::Value>;

/// Members of a structure or enum in declaration order.
pub type Members = Vec<(String, MemberShape)>;

/// A simple shape with optional traits.
#[derive(Debug, Default, Deserialize)]
pub struct SimpleShape {
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A structure (struct) shape.
#[derive(Debug, Deserialize)]
pub struct StructureShape {
    /// Members of the structure, in declaration order.
    #[serde(default, deserialize_with = "ordered_members")]
    pub members: Members,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A member within a structure or enum.
#[derive(Debug, Deserialize)]
pub struct MemberShape {
    /// Target shape ID this member points to.
    pub target: String,
    /// Traits applied to this member.
    #[serde(default)]
    pub traits: Traits,
}

/// An operation shape.
#[derive(Debug, Deserialize)]
pub struct OperationShape {
    /// Input shape reference.
    pub input: Option<ShapeRef>,
    /// Output shape reference.
    pub output: Option<ShapeRef>,
    /// Errors the operation declares.
    #[serde(default)]
    pub errors: Vec<ShapeRef>,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A reference to another shape.
#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    /// The full shape ID being referenced.
    pub target: String,
}

/// An enum shape.
#[derive(Debug, Deserialize)]
pub struct EnumShape {
    /// Enum variants in declaration order.
    #[serde(default, deserialize_with = "ordered_members")]
    pub members: Members,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

/// A list shape.
#[derive(Debug, Deserialize)]
pub struct ListShape {
    /// The shape of the list's elements.
    pub member: MemberShape,
    /// Traits applied to this shape.
    #[serde(default)]
    pub traits: Traits,
}

impl SmithyModel {
    /// Get the short name from a fully qualified shape ID.
    ///
    /// For example, `com.amazonaws.wafregional#RateKey` returns `RateKey`.
    pub fn short_name(shape_id: &str) -> &str {
        shape_id.rsplit_once('#').map_or(shape_id, |(_, name)| name)
    }

    /// Look up a shape by its full ID.
    pub fn shape(&self, shape_id: &str) -> Option<&Shape> {
        self.shapes.get(shape_id)
    }
}

/// Deserialize a JSON object into a vector, keeping key order.
fn ordered_members<'de, D>(deserializer: D) -> Result<Members, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedMembers;

    impl<'de> Visitor<'de> for OrderedMembers {
        type Value = Members;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of member names to member shapes")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, member)) = map.next_entry::<String, MemberShape>()? {
                if members.iter().any(|(existing, _)| *existing == name) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate member `{name}`"
                    )));
                }
                members.push((name, member));
            }
            Ok(members)
        }
    }

    deserializer.deserialize_map(OrderedMembers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_member_declaration_order() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "ns#Rule": {
                    "type": "structure",
                    "members": {
                        "Zeta": { "target": "smithy.api#String" },
                        "Alpha": { "target": "smithy.api#String" },
                        "Mid": { "target": "smithy.api#String" }
                    }
                }
            }
        }"#;
        let model: SmithyModel = serde_json::from_str(json).unwrap();
        let Some(Shape::Structure(rule)) = model.shape("ns#Rule") else {
            panic!("expected structure");
        };
        let names: Vec<_> = rule.members.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_should_reject_duplicate_members() {
        let json = r#"{
            "type": "structure",
            "members": {
                "A": { "target": "smithy.api#String" },
                "A": { "target": "smithy.api#Integer" }
            }
        }"#;
        let err = serde_json::from_str::<Shape>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate member `A`"));
    }

    #[test]
    fn test_should_parse_operation_errors() {
        let json = r#"{
            "type": "operation",
            "input": { "target": "ns#GetChangeTokenRequest" },
            "output": { "target": "ns#GetChangeTokenResponse" },
            "errors": [{ "target": "ns#WAFInternalErrorException" }]
        }"#;
        let Shape::Operation(op) = serde_json::from_str::<Shape>(json).unwrap() else {
            panic!("expected operation");
        };
        assert_eq!(op.errors.len(), 1);
        assert_eq!(op.errors[0].target, "ns#WAFInternalErrorException");
    }

    #[test]
    fn test_should_extract_short_name() {
        assert_eq!(
            SmithyModel::short_name("com.amazonaws.wafregional#RateKey"),
            "RateKey"
        );
        assert_eq!(SmithyModel::short_name("RateKey"), "RateKey");
    }
}
