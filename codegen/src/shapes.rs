//! Shape resolution and type mapping from Smithy shapes to Rust types.
//!
//! This module resolves the configured operations into input/output
//! structures, collects the transitive closure of shapes they reference, and
//! flattens every member into a [`FieldInfo`] carrying its semantic kind and
//! the constraints that apply to it (target-shape traits overridden by
//! member traits).

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::debug;

use crate::config::CodegenConfig;
use crate::model::{
    DOCUMENTATION_TRAIT, ENUM_VALUE_TRAIT, ERROR_TRAIT, EnumShape, LENGTH_TRAIT, MemberShape,
    PATTERN_TRAIT, RANGE_TRAIT, REQUIRED_TRAIT, Shape, ShapeRef, SmithyModel, StructureShape,
    Traits,
};

/// Maximum recursion depth when resolving shape references.
const MAX_RESOLVE_DEPTH: usize = 15;

/// Variant name reserved for unmodeled enum values.
const UNKNOWN_VARIANT: &str = "Unknown";

/// Semantic kind of a structure member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 text.
    String,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// Boolean flag.
    Boolean,
    /// UTC instant.
    Timestamp,
    /// Closed string set (enum type name).
    Enum(String),
    /// Nested structure (struct type name).
    Structure(String),
    /// Ordered list of items.
    List(Box<ListItemInfo>),
}

impl FieldKind {
    /// Rust type used to store a value of this kind.
    pub fn rust_type(&self) -> String {
        match self {
            Self::String => "String".to_owned(),
            Self::Integer => "i32".to_owned(),
            Self::Long => "i64".to_owned(),
            Self::Boolean => "bool".to_owned(),
            Self::Timestamp => "DateTime<Utc>".to_owned(),
            Self::Enum(name) | Self::Structure(name) => name.clone(),
            Self::List(item) => format!("Vec<{}>", item.kind.rust_type()),
        }
    }

    /// Name of the generated type this kind refers to, if any.
    pub fn named_type(&self) -> Option<&str> {
        match self {
            Self::Enum(name) | Self::Structure(name) => Some(name),
            Self::List(item) => item.kind.named_type(),
            _ => None,
        }
    }
}

/// Element type of a list member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemInfo {
    /// Short name of the element target shape.
    pub target: String,
    /// Element kind (never a list).
    pub kind: FieldKind,
    /// Constraints on each element.
    pub constraints: ConstraintInfo,
}

/// Validation constraints resolved for a member or list element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintInfo {
    /// `@length` bounds (string characters or list items).
    pub length: Option<(Option<u64>, Option<u64>)>,
    /// `@range` bounds for numeric members.
    pub range: Option<(Option<i64>, Option<i64>)>,
    /// `@pattern` regular expression.
    pub pattern: Option<String>,
}

impl ConstraintInfo {
    /// Read constraint traits from a trait map.
    fn from_traits(traits: &Traits) -> Result<Self> {
        let length = traits
            .get(LENGTH_TRAIT)
            .map(|v| Ok::<_, anyhow::Error>((bound_u64(v, "min")?, bound_u64(v, "max")?)))
            .transpose()?;
        let range = traits
            .get(RANGE_TRAIT)
            .map(|v| Ok::<_, anyhow::Error>((bound_i64(v, "min")?, bound_i64(v, "max")?)))
            .transpose()?;
        let pattern = traits
            .get(PATTERN_TRAIT)
            .map(|v| {
                v.as_str()
                    .map(str::to_owned)
                    .context("pattern trait must be a string")
            })
            .transpose()?;
        Ok(Self {
            length,
            range,
            pattern,
        })
    }

    /// Apply `other` on top of `self`; constraints set in `other` win.
    #[must_use]
    fn overlay(self, other: Self) -> Self {
        Self {
            length: other.length.or(self.length),
            range: other.range.or(self.range),
            pattern: other.pattern.or(self.pattern),
        }
    }

    /// Whether no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.range.is_none() && self.pattern.is_none()
    }
}

fn bound_u64(value: &Value, key: &str) -> Result<Option<u64>> {
    value
        .get(key)
        .map(|v| {
            v.as_u64()
                .with_context(|| format!("length {key} must be a non-negative integer"))
        })
        .transpose()
}

fn bound_i64(value: &Value, key: &str) -> Result<Option<i64>> {
    value
        .get(key)
        .map(|v| {
            v.as_i64()
                .with_context(|| format!("range {key} must be an integer"))
        })
        .transpose()
}

/// Information about a struct member field for code generation.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Smithy member name, as sent on the wire.
    pub smithy_name: String,
    /// Rust field name (snake_case, raw identifier for keywords).
    pub rust_name: String,
    /// Short name of the target shape.
    pub target: String,
    /// Semantic kind.
    pub kind: FieldKind,
    /// Whether the member carries `@required`.
    pub required: bool,
    /// Member documentation, falling back to the target's.
    pub documentation: Option<String>,
    /// Constraints on the member value itself.
    pub constraints: ConstraintInfo,
}

impl FieldInfo {
    /// Field name without the `r#` raw-identifier prefix, for method names.
    pub fn bare_name(&self) -> &str {
        self.rust_name.strip_prefix("r#").unwrap_or(&self.rust_name)
    }
}

/// A resolved structure.
#[derive(Debug, Clone)]
pub struct StructInfo {
    /// Smithy shape name (used in schema metadata).
    pub shape_name: String,
    /// Structure documentation.
    pub documentation: Option<String>,
    /// Members in declaration order.
    pub fields: Vec<FieldInfo>,
}

/// Enum variant information for code generation.
#[derive(Debug, Clone)]
pub struct EnumVariantInfo {
    /// Rust variant name (PascalCase).
    pub rust_name: String,
    /// The string value from `@enumValue`.
    pub string_value: String,
}

/// A resolved enum shape.
#[derive(Debug, Clone)]
pub struct EnumInfo {
    /// Enum documentation.
    pub documentation: Option<String>,
    /// Variants in declaration order.
    pub variants: Vec<EnumVariantInfo>,
}

/// A modeled service error.
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Wire error code (the shape name).
    pub code: String,
    /// Rust variant name.
    pub rust_name: String,
    /// Whether the error is a server fault.
    pub server_fault: bool,
    /// Error documentation.
    pub documentation: Option<String>,
}

/// A resolved operation.
#[derive(Debug, Clone)]
pub struct OperationInfo {
    /// Short operation name (e.g., "CreateRateBasedRule").
    pub name: String,
    /// Generated input struct name.
    pub input_struct: Option<String>,
    /// Generated output struct name.
    pub output_struct: Option<String>,
    /// Rust variant names of the declared errors, in model order.
    pub errors: Vec<String>,
    /// Operation documentation.
    pub documentation: Option<String>,
}

/// Resolved information about all shapes needed for code generation.
#[derive(Debug)]
pub struct ResolvedModel {
    /// All operations we are generating, sorted by name.
    pub operations: Vec<OperationInfo>,
    /// Operation categories for file organization.
    pub categories: BTreeMap<String, Vec<String>>,
    /// All enum shapes needed (name -> enum).
    pub enums: BTreeMap<String, EnumInfo>,
    /// Structures referenced from inputs/outputs (name -> struct).
    pub shared_structs: BTreeMap<String, StructInfo>,
    /// Input structures (Rust name -> struct).
    pub input_structs: BTreeMap<String, StructInfo>,
    /// Output structures (Rust name -> struct).
    pub output_structs: BTreeMap<String, StructInfo>,
    /// Every error declared by a generated operation, sorted by code.
    pub errors: Vec<ErrorInfo>,
}

/// Convert a Smithy PascalCase member name to Rust snake_case.
pub fn to_snake_case(name: &str) -> String {
    use heck::ToSnakeCase;
    let snake = name.to_snake_case();
    match snake.as_str() {
        "type" | "match" | "return" | "use" | "ref" | "override" => format!("r#{snake}"),
        _ => snake,
    }
}

/// Convert a Smithy enum variant or error name to Rust PascalCase.
///
/// Handles SCREAMING_SNAKE_CASE, camelCase, and already-PascalCase names.
pub fn to_pascal_case(name: &str) -> String {
    use heck::ToPascalCase;
    name.to_pascal_case()
}

/// Rename `XRequest` to `XInput` and `XResponse` to `XOutput`.
fn io_struct_name(short: &str, suffix: &str, replacement: &str) -> String {
    short
        .strip_suffix(suffix)
        .map_or_else(|| short.to_owned(), |base| format!("{base}{replacement}"))
}

fn documentation(traits: &Traits) -> Option<String> {
    traits
        .get(DOCUMENTATION_TRAIT)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Resolve built-in smithy.api types.
fn resolve_builtin_kind(target: &str) -> Option<FieldKind> {
    match target {
        "smithy.api#String" => Some(FieldKind::String),
        "smithy.api#Boolean" | "smithy.api#PrimitiveBoolean" => Some(FieldKind::Boolean),
        "smithy.api#Integer" | "smithy.api#PrimitiveInteger" => Some(FieldKind::Integer),
        "smithy.api#Long" | "smithy.api#PrimitiveLong" => Some(FieldKind::Long),
        "smithy.api#Timestamp" => Some(FieldKind::Timestamp),
        _ => None,
    }
}

/// Resolve a member target into its kind and the constraints its target
/// shape carries.
fn resolve_target(
    model: &SmithyModel,
    target: &str,
    allow_list: bool,
) -> Result<(FieldKind, ConstraintInfo)> {
    if let Some(kind) = resolve_builtin_kind(target) {
        return Ok((kind, ConstraintInfo::default()));
    }

    let shape = model
        .shape(target)
        .with_context(|| format!("Shape {target} not found in model"))?;
    let short = SmithyModel::short_name(target).to_owned();
    let constraints = ConstraintInfo::from_traits(shape.traits())
        .with_context(|| format!("Invalid constraint traits on {target}"))?;

    let kind = match shape {
        Shape::String(_) => FieldKind::String,
        Shape::Integer(_) => FieldKind::Integer,
        Shape::Long(_) => FieldKind::Long,
        Shape::Boolean(_) => FieldKind::Boolean,
        Shape::Timestamp(_) => FieldKind::Timestamp,
        Shape::Enum(_) => FieldKind::Enum(short),
        Shape::Structure(_) => FieldKind::Structure(short),
        Shape::List(list) if allow_list => {
            let (item_kind, item_base) = resolve_target(model, &list.member.target, false)
                .with_context(|| format!("Unsupported element type in list {target}"))?;
            if item_kind == FieldKind::Timestamp {
                bail!("{target}: lists of timestamps are not supported");
            }
            let item_constraints = item_base.overlay(
                ConstraintInfo::from_traits(&list.member.traits)
                    .with_context(|| format!("Invalid member traits on list {target}"))?,
            );
            FieldKind::List(Box::new(ListItemInfo {
                target: SmithyModel::short_name(&list.member.target).to_owned(),
                kind: item_kind,
                constraints: item_constraints,
            }))
        }
        other => bail!(
            "{target}: {} shapes are not supported as member targets here",
            other.kind()
        ),
    };
    Ok((kind, constraints))
}

/// Resolve one structure member.
fn resolve_field(model: &SmithyModel, name: &str, member: &MemberShape) -> Result<FieldInfo> {
    let (kind, target_constraints) = resolve_target(model, &member.target, true)?;
    let member_constraints = ConstraintInfo::from_traits(&member.traits)
        .with_context(|| format!("Invalid constraint traits on member {name}"))?;

    let documentation = documentation(&member.traits).or_else(|| {
        model
            .shape(&member.target)
            .and_then(|s| documentation(s.traits()))
    });

    Ok(FieldInfo {
        smithy_name: name.to_owned(),
        rust_name: to_snake_case(name),
        target: SmithyModel::short_name(&member.target).to_owned(),
        kind,
        required: member.traits.contains_key(REQUIRED_TRAIT),
        documentation,
        constraints: target_constraints.overlay(member_constraints),
    })
}

/// Resolve fields for a structure shape, keeping declaration order.
fn resolve_struct(
    model: &SmithyModel,
    shape_id: &str,
    structure: &StructureShape,
) -> Result<StructInfo> {
    let fields = structure
        .members
        .iter()
        .map(|(name, member)| {
            resolve_field(model, name, member)
                .with_context(|| format!("Failed to resolve {shape_id}${name}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut seen = BTreeSet::new();
    for field in &fields {
        if !seen.insert(field.bare_name()) {
            bail!(
                "{shape_id}: members map to the same Rust name `{}`",
                field.bare_name()
            );
        }
    }

    Ok(StructInfo {
        shape_name: SmithyModel::short_name(shape_id).to_owned(),
        documentation: documentation(&structure.traits),
        fields,
    })
}

/// Resolve enum variants in declaration order.
fn resolve_enum(shape_id: &str, shape: &EnumShape) -> Result<EnumInfo> {
    let mut variants = Vec::with_capacity(shape.members.len());
    let mut seen = BTreeSet::new();
    for (variant_name, member) in &shape.members {
        let string_value = member
            .traits
            .get(ENUM_VALUE_TRAIT)
            .and_then(Value::as_str)
            .unwrap_or(variant_name.as_str())
            .to_owned();
        let rust_name = to_pascal_case(variant_name);
        if rust_name == UNKNOWN_VARIANT {
            bail!("{shape_id}: variant name `{UNKNOWN_VARIANT}` is reserved");
        }
        if !seen.insert(rust_name.clone()) {
            bail!("{shape_id}: duplicate variant `{rust_name}`");
        }
        variants.push(EnumVariantInfo {
            rust_name,
            string_value,
        });
    }
    if variants.is_empty() {
        bail!("{shape_id}: enum has no members");
    }
    Ok(EnumInfo {
        documentation: documentation(&shape.traits),
        variants,
    })
}

/// Collect all shape IDs transitively referenced from a given shape.
///
/// Fails when a reference chain is deeper than [`MAX_RESOLVE_DEPTH`], so an
/// over-nested model is reported instead of generated with missing types.
fn collect_referenced_shapes(
    model: &SmithyModel,
    shape_id: &str,
    visited: &mut BTreeSet<String>,
    depth: usize,
) -> Result<()> {
    if visited.contains(shape_id) || shape_id.starts_with("smithy.api#") {
        return Ok(());
    }
    if depth > MAX_RESOLVE_DEPTH {
        bail!("{shape_id} is nested deeper than the maximum depth of {MAX_RESOLVE_DEPTH}");
    }
    visited.insert(shape_id.to_owned());

    let Some(shape) = model.shape(shape_id) else {
        return Ok(());
    };

    match shape {
        Shape::Structure(s) => {
            for (_, member) in &s.members {
                collect_referenced_shapes(model, &member.target, visited, depth + 1)?;
            }
        }
        Shape::List(l) => {
            collect_referenced_shapes(model, &l.member.target, visited, depth + 1)?;
        }
        _ => {}
    }
    Ok(())
}

/// Shape ID of an operation's input or output, ignoring `smithy.api#Unit`.
fn io_target(shape_ref: Option<&ShapeRef>) -> Option<&str> {
    shape_ref
        .map(|r| r.target.as_str())
        .filter(|t| *t != "smithy.api#Unit")
}

/// Collect the shapes an operation input or output references and name the
/// struct generated for it.
fn collect_io(
    model: &SmithyModel,
    shape_ref: Option<&ShapeRef>,
    suffix: &str,
    replacement: &str,
    referenced: &mut BTreeSet<String>,
    names: &mut BTreeMap<String, String>,
) -> Result<Option<String>> {
    let Some(target) = io_target(shape_ref) else {
        return Ok(None);
    };
    collect_referenced_shapes(model, target, referenced, 0)?;
    let name = io_struct_name(SmithyModel::short_name(target), suffix, replacement);
    names.insert(target.to_owned(), name.clone());
    Ok(Some(name))
}

/// Resolve every referenced enum shape, keyed by short name.
fn resolve_enums(
    model: &SmithyModel,
    referenced: &BTreeSet<String>,
) -> Result<BTreeMap<String, EnumInfo>> {
    let mut enums = BTreeMap::new();
    for shape_id in referenced {
        if let Some(Shape::Enum(enum_shape)) = model.shape(shape_id) {
            let short = SmithyModel::short_name(shape_id).to_owned();
            enums.insert(short, resolve_enum(shape_id, enum_shape)?);
        }
    }
    Ok(enums)
}

/// Resolve declared errors, sorted by code.
fn resolve_errors(model: &SmithyModel, shape_ids: &BTreeSet<String>) -> Result<Vec<ErrorInfo>> {
    let mut errors = Vec::with_capacity(shape_ids.len());
    for shape_id in shape_ids {
        let Some(Shape::Structure(structure)) = model.shape(shape_id) else {
            bail!("Error shape {shape_id} is missing or not a structure");
        };
        let fault = structure
            .traits
            .get(ERROR_TRAIT)
            .and_then(Value::as_str)
            .with_context(|| format!("{shape_id} lacks the error trait"))?;
        let code = SmithyModel::short_name(shape_id).to_owned();
        errors.push(ErrorInfo {
            rust_name: to_pascal_case(&code),
            code,
            server_fault: fault == "server",
            documentation: documentation(&structure.traits),
        });
    }
    errors.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(errors)
}

/// Resolve all needed shapes from the Smithy model.
pub fn resolve_model(model: &SmithyModel, config: &CodegenConfig) -> Result<ResolvedModel> {
    // Step 1: Collect operation info and the shapes each one references.
    let mut operations = Vec::new();
    let mut all_referenced = BTreeSet::new();
    let mut input_shape_ids = BTreeMap::new();
    let mut output_shape_ids = BTreeMap::new();
    let mut error_shape_ids = BTreeSet::new();

    for op_name in config.operations() {
        let full_name = config.shape_id(op_name);
        let shape = model
            .shape(&full_name)
            .with_context(|| format!("Operation {op_name} not found in model"))?;
        let Shape::Operation(op) = shape else {
            bail!("{op_name} is not an operation shape");
        };
        debug!(
            operation = op_name,
            errors = op.errors.len(),
            "resolving operation"
        );

        let input_struct = collect_io(
            model,
            op.input.as_ref(),
            "Request",
            "Input",
            &mut all_referenced,
            &mut input_shape_ids,
        )
        .with_context(|| format!("Failed to resolve input of {op_name}"))?;
        let output_struct = collect_io(
            model,
            op.output.as_ref(),
            "Response",
            "Output",
            &mut all_referenced,
            &mut output_shape_ids,
        )
        .with_context(|| format!("Failed to resolve output of {op_name}"))?;

        let errors = op
            .errors
            .iter()
            .map(|e| {
                error_shape_ids.insert(e.target.clone());
                to_pascal_case(SmithyModel::short_name(&e.target))
            })
            .collect();

        operations.push(OperationInfo {
            name: op_name.to_owned(),
            input_struct,
            output_struct,
            errors,
            documentation: documentation(&op.traits),
        });
    }

    // Step 2: Resolve enums.
    let enums = resolve_enums(model, &all_referenced)?;

    // Step 3: Resolve structs, separated into input, output, and shared.
    let mut input_structs = BTreeMap::new();
    let mut output_structs = BTreeMap::new();
    let mut shared_structs = BTreeMap::new();

    for shape_id in &all_referenced {
        let Some(Shape::Structure(structure)) = model.shape(shape_id) else {
            continue;
        };
        if structure.traits.contains_key(ERROR_TRAIT) {
            continue;
        }

        let info = resolve_struct(model, shape_id, structure)?;
        match (
            input_shape_ids.get(shape_id),
            output_shape_ids.get(shape_id),
        ) {
            (Some(_), Some(_)) => bail!("{shape_id} is used as both an input and an output"),
            (Some(name), None) => {
                input_structs.insert(name.clone(), info);
            }
            (None, Some(name)) => {
                output_structs.insert(name.clone(), info);
            }
            (None, None) => {
                shared_structs.insert(info.shape_name.clone(), info);
            }
        }
    }

    // Step 4: Resolve declared errors.
    let errors = resolve_errors(model, &error_shape_ids)?;
    debug!(shapes = all_referenced.len(), "collected referenced shapes");

    Ok(ResolvedModel {
        operations,
        categories: config.categories.clone(),
        enums,
        shared_structs,
        input_structs,
        output_structs,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use super::*;
    use crate::config::DEFAULT_CONFIG_NAME;

    fn load(json: &str) -> SmithyModel {
        serde_json::from_str(json).unwrap()
    }

    fn sample_config() -> CodegenConfig {
        CodegenConfig::from_toml_str(
            r#"
            [service]
            namespace = "ns"
            title = "Test"
            target_prefix = "Test_20200101"
            operation_enum = "TestOperation"
            error_enum = "TestErrorCode"
            error_struct = "TestError"

            [paths]
            model = "model.json"
            output = "out"

            [categories]
            rule = ["CreateRateBasedRule"]
            "#,
        )
        .unwrap()
    }

    const SAMPLE_MODEL: &str = r#"{
        "smithy": "2.0",
        "shapes": {
            "ns#CreateRateBasedRule": {
                "type": "operation",
                "input": { "target": "ns#CreateRateBasedRuleRequest" },
                "output": { "target": "ns#CreateRateBasedRuleResponse" },
                "errors": [{ "target": "ns#WAFStaleDataException" }]
            },
            "ns#CreateRateBasedRuleRequest": {
                "type": "structure",
                "members": {
                    "Name": { "target": "ns#ResourceName", "traits": { "smithy.api#required": {} } },
                    "RateKey": { "target": "ns#RateKey" },
                    "RateLimit": {
                        "target": "ns#RateLimit",
                        "traits": { "smithy.api#range": { "min": 200 } }
                    },
                    "Tags": { "target": "ns#TagList" }
                }
            },
            "ns#CreateRateBasedRuleResponse": {
                "type": "structure",
                "members": { "Type": { "target": "smithy.api#String" } }
            },
            "ns#ResourceName": {
                "type": "string",
                "traits": {
                    "smithy.api#length": { "min": 1, "max": 128 },
                    "smithy.api#pattern": ".*\\S.*",
                    "smithy.api#documentation": "A friendly name."
                }
            },
            "ns#RateLimit": {
                "type": "long",
                "traits": { "smithy.api#range": { "min": 100, "max": 2000000000 } }
            },
            "ns#RateKey": {
                "type": "enum",
                "members": { "IP": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": "IP" } } }
            },
            "ns#TagList": {
                "type": "list",
                "member": { "target": "ns#Tag" },
                "traits": { "smithy.api#length": { "min": 1 } }
            },
            "ns#Tag": {
                "type": "structure",
                "members": { "Key": { "target": "smithy.api#String" } }
            },
            "ns#WAFStaleDataException": {
                "type": "structure",
                "members": { "message": { "target": "smithy.api#String" } },
                "traits": { "smithy.api#error": "client" }
            }
        }
    }"#;

    #[test]
    fn test_should_convert_names() {
        assert_eq!(to_snake_case("WebACLId"), "web_acl_id");
        assert_eq!(to_snake_case("IPSetDescriptor"), "ip_set_descriptor");
        assert_eq!(to_snake_case("HTTPVersion"), "http_version");
        assert_eq!(to_snake_case("Type"), "r#type");
        assert_eq!(to_pascal_case("RATE_BASED"), "RateBased");
        assert_eq!(to_pascal_case("IPV4"), "Ipv4");
        assert_eq!(to_pascal_case("IPMatch"), "IpMatch");
        assert_eq!(
            io_struct_name("GetRuleRequest", "Request", "Input"),
            "GetRuleInput"
        );
        assert_eq!(io_struct_name("Rule", "Request", "Input"), "Rule");
    }

    #[test]
    fn test_should_resolve_sample_operation() {
        let model = load(SAMPLE_MODEL);
        let resolved = resolve_model(&model, &sample_config()).unwrap();

        assert_eq!(resolved.operations.len(), 1);
        let op = &resolved.operations[0];
        assert_eq!(op.input_struct.as_deref(), Some("CreateRateBasedRuleInput"));
        assert_eq!(
            op.output_struct.as_deref(),
            Some("CreateRateBasedRuleOutput")
        );
        assert_eq!(op.errors, vec!["WafStaleDataException".to_owned()]);

        assert!(resolved.enums.contains_key("RateKey"));
        assert!(resolved.shared_structs.contains_key("Tag"));
        assert_eq!(resolved.errors.len(), 1);
        assert!(!resolved.errors[0].server_fault);
    }

    #[test]
    fn test_should_keep_field_order_and_merge_constraints() {
        let model = load(SAMPLE_MODEL);
        let resolved = resolve_model(&model, &sample_config()).unwrap();
        let input = &resolved.input_structs["CreateRateBasedRuleInput"];

        let names: Vec<_> = input
            .fields
            .iter()
            .map(|f| f.smithy_name.as_str())
            .collect();
        assert_eq!(names, vec!["Name", "RateKey", "RateLimit", "Tags"]);

        let name = &input.fields[0];
        assert!(name.required);
        assert_eq!(name.constraints.length, Some((Some(1), Some(128))));
        assert_eq!(name.constraints.pattern.as_deref(), Some(".*\\S.*"));
        assert_eq!(name.documentation.as_deref(), Some("A friendly name."));

        let rate_limit = &input.fields[2];
        assert_eq!(rate_limit.kind, FieldKind::Long);
        // Member trait overrides the target's range.
        assert_eq!(rate_limit.constraints.range, Some((Some(200), None)));

        let FieldKind::List(item) = &input.fields[3].kind else {
            panic!("expected list");
        };
        assert_eq!(item.kind, FieldKind::Structure("Tag".to_owned()));
        assert_eq!(input.fields[3].constraints.length, Some((Some(1), None)));
        assert_eq!(input.fields[3].kind.rust_type(), "Vec<Tag>");
    }

    #[test]
    fn test_should_use_raw_identifier_for_keywords() {
        let model = load(SAMPLE_MODEL);
        let resolved = resolve_model(&model, &sample_config()).unwrap();
        let field = &resolved.output_structs["CreateRateBasedRuleOutput"].fields[0];
        assert_eq!(field.rust_name, "r#type");
        assert_eq!(field.bare_name(), "type");
    }

    #[test]
    fn test_should_reject_reserved_unknown_variant() {
        let json = SAMPLE_MODEL.replace(r#""IP": { "target""#, r#""UNKNOWN": { "target""#);
        let model = load(&json);
        let err = resolve_model(&model, &sample_config()).unwrap_err();
        assert!(format!("{err:#}").contains("reserved"));
    }

    fn nested_model(levels: usize) -> SmithyModel {
        let mut shapes = serde_json::Map::new();
        shapes.insert(
            "ns#CreateRateBasedRule".to_owned(),
            json!({ "type": "operation", "input": { "target": "ns#L0" } }),
        );
        for level in 0..levels {
            let members = if level + 1 < levels {
                json!({ "Next": { "target": format!("ns#L{}", level + 1) } })
            } else {
                json!({})
            };
            shapes.insert(
                format!("ns#L{level}"),
                json!({ "type": "structure", "members": members }),
            );
        }
        serde_json::from_value(json!({ "smithy": "2.0", "shapes": shapes })).unwrap()
    }

    #[test]
    fn test_should_fail_on_excessive_nesting() {
        let model = nested_model(MAX_RESOLVE_DEPTH + 2);
        let err = resolve_model(&model, &sample_config()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("input of CreateRateBasedRule"));
        assert!(message.contains("ns#L16 is nested deeper than the maximum depth of 15"));

        let model = nested_model(MAX_RESOLVE_DEPTH + 1);
        let resolved = resolve_model(&model, &sample_config()).unwrap();
        assert_eq!(resolved.shared_structs.len(), MAX_RESOLVE_DEPTH);
        assert!(resolved.input_structs.contains_key("L0"));
    }

    #[test]
    fn test_should_fail_on_missing_operation() {
        let model = load(r#"{ "smithy": "2.0", "shapes": {} }"#);
        let err = resolve_model(&model, &sample_config()).unwrap_err();
        assert!(err.to_string().contains("CreateRateBasedRule not found"));
    }

    #[test]
    fn test_should_resolve_checked_in_model() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = CodegenConfig::load(&dir.join(DEFAULT_CONFIG_NAME)).unwrap();
        let json = std::fs::read_to_string(&config.paths.model).unwrap();
        let model = load(&json);
        let resolved = resolve_model(&model, &config).unwrap();

        assert_eq!(resolved.operations.len(), 18);
        assert_eq!(resolved.input_structs.len(), 18);
        assert_eq!(resolved.output_structs.len(), 18);

        let rule = &resolved.shared_structs["RateBasedRule"];
        let names: Vec<_> = rule.fields.iter().map(|f| f.smithy_name.as_str()).collect();
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

        let tuple = &resolved.shared_structs["RegexMatchTuple"];
        assert_eq!(
            tuple.fields[0].kind,
            FieldKind::Structure("FieldToMatch".to_owned())
        );
        assert_eq!(
            tuple.fields[1].kind,
            FieldKind::Enum("TextTransformation".to_owned())
        );

        let transformation = &resolved.enums["TextTransformation"];
        assert_eq!(transformation.variants[0].string_value, "NONE");
        assert!(
            resolved
                .errors
                .iter()
                .any(|e| e.code == "WAFInternalErrorException" && e.server_fault)
        );
    }
}
