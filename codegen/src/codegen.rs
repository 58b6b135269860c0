//! Rust code generation from resolved Smithy shapes.
//!
//! This module takes a `ResolvedModel` and produces Rust source code strings
//! for enums, shared structures, input/output structures, the operation
//! table and the service error codes. Every structure gets accessors, a
//! `Display` impl and a static constraint schema. Constraint sets are
//! emitted once into `constraints.rs` and referenced by name.
//!
//! Output is laid out the way `rustfmt` would lay it out, see `layout`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use anyhow::{Result, bail};
use heck::ToShoutySnakeCase;

use crate::config::ServiceConfig;
use crate::layout::{
    write_assignment, write_attribute, write_fn_signature, write_match_arm, write_slice_const,
    write_use_list,
};
use crate::shapes::{
    ConstraintInfo, EnumInfo, FieldInfo, FieldKind, OperationInfo, ResolvedModel, StructInfo,
};

/// Signature line of a generated `Display::fmt`.
const DISPLAY_FMT: &str = "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {";

/// Which side of an operation a generated module holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IoKind {
    Input,
    Output,
}

impl IoKind {
    fn module(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Output => "Output",
        }
    }
}

/// A constant in the generated `constraints.rs`.
#[derive(Debug)]
struct NamedConstraints {
    /// Smithy shape the constant was first registered for.
    target: String,
    constraints: ConstraintInfo,
}

/// Constraint constants shared by every generated schema, keyed by name.
///
/// A constant is named after the targeted shape. A member whose traits
/// narrow its target's constraints gets a constant named after the owning
/// structure and the member.
#[derive(Debug, Default)]
struct ConstraintTable {
    by_name: BTreeMap<String, NamedConstraints>,
}

impl ConstraintTable {
    /// Register the constraints of every member, shared structures first.
    fn build(resolved: &ResolvedModel) -> Result<Self> {
        let mut table = Self::default();
        let groups = [
            &resolved.shared_structs,
            &resolved.input_structs,
            &resolved.output_structs,
        ];
        for structs in groups {
            for (owner, info) in structs {
                for field in &info.fields {
                    let fallback = member_constant(owner, &field.smithy_name, false);
                    table.register(&field.target, fallback, &field.constraints)?;
                    if let FieldKind::List(item) = &field.kind {
                        let fallback = member_constant(owner, &field.smithy_name, true);
                        table.register(&item.target, fallback, &item.constraints)?;
                    }
                }
            }
        }
        Ok(table)
    }

    fn register(
        &mut self,
        target: &str,
        fallback: String,
        constraints: &ConstraintInfo,
    ) -> Result<()> {
        if constraints.is_empty() {
            return Ok(());
        }
        for name in [target.to_shouty_snake_case(), fallback] {
            match self.by_name.get(&name) {
                None => {
                    let named = NamedConstraints {
                        target: target.to_owned(),
                        constraints: constraints.clone(),
                    };
                    self.by_name.insert(name, named);
                    return Ok(());
                }
                Some(existing) if existing.constraints == *constraints => return Ok(()),
                Some(_) => {}
            }
        }
        bail!("conflicting constraints for `{target}`")
    }

    /// Expression naming the constraints of a member or list element.
    fn lookup(&self, target: &str, fallback: &str, constraints: &ConstraintInfo) -> Result<String> {
        if constraints.is_empty() {
            return Ok("Constraints::NONE".to_owned());
        }
        let primary = target.to_shouty_snake_case();
        for name in [primary.as_str(), fallback] {
            if let Some(named) = self.by_name.get(name)
                && named.constraints == *constraints
            {
                return Ok(format!("constraints::{name}"));
            }
        }
        bail!("no constraint constant registered for `{fallback}`")
    }
}

/// Name of the constant for a member whose constraints differ from its target's.
fn member_constant(owner: &str, member: &str, item: bool) -> String {
    let owner = owner.to_shouty_snake_case();
    let member = member.to_shouty_snake_case();
    if item {
        format!("{owner}_{member}_ITEM")
    } else {
        format!("{owner}_{member}")
    }
}

/// Generate all source files and return them as a map of path -> content.
pub fn generate_all(
    resolved: &ResolvedModel,
    service: &ServiceConfig,
) -> Result<BTreeMap<String, String>> {
    let header = format!(
        "//! Auto-generated from the {} Smithy model. DO NOT EDIT.",
        service.title
    );
    let constraints = ConstraintTable::build(resolved)?;
    let mut files = BTreeMap::new();

    files.insert(
        "constraints.rs".to_owned(),
        generate_constraints(&constraints, &header)?,
    );
    files.insert(
        "types.rs".to_owned(),
        generate_types(resolved, service, &constraints, &header)?,
    );
    files.insert(
        "operations.rs".to_owned(),
        generate_operations(resolved, service, &header)?,
    );
    files.insert(
        "error.rs".to_owned(),
        generate_error(resolved, service, &header)?,
    );

    for kind in [IoKind::Input, IoKind::Output] {
        generate_io_modules(&mut files, kind, resolved, &constraints, &header)?;
    }

    for content in files.values_mut() {
        let end = content.trim_end_matches('\n').len();
        content.truncate(end);
        content.push('\n');
    }
    Ok(files)
}

/// Write a doc comment, one `///` line per source line.
fn write_docs(out: &mut String, indent: &str, doc: &str) -> Result<()> {
    for line in doc.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            writeln!(out, "{indent}///")?;
        } else {
            writeln!(out, "{indent}/// {line}")?;
        }
    }
    Ok(())
}

/// Render an integer literal with `_` separators.
fn int_literal(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    if digits.len() <= 4 {
        return value.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('_');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn opt_literal<T: Into<i128> + Copy>(value: Option<T>) -> String {
    value.map_or_else(
        || "None".to_owned(),
        |v| format!("Some({})", int_literal(v.into())),
    )
}

/// `Some(Ty::new(min, max))` for a bounded constraint, `None` otherwise.
fn bounds_literal<T: Into<i128> + Copy>(
    ty: &str,
    bounds: Option<(Option<T>, Option<T>)>,
) -> String {
    match bounds {
        Some((min, max)) => {
            let min = opt_literal(min);
            let max = opt_literal(max);
            format!("Some({ty}::new({min}, {max}))")
        }
        None => "None".to_owned(),
    }
}

/// Generate constraints.rs with one constant per distinct constraint set.
fn generate_constraints(table: &ConstraintTable, header: &str) -> Result<String> {
    let mut out = String::with_capacity(8 * 1024);
    writeln!(out, "{header}")?;
    writeln!(out)?;
    let sets: Vec<&ConstraintInfo> = table.by_name.values().map(|n| &n.constraints).collect();
    let mut imports = vec!["Constraints"];
    if sets.iter().any(|c| c.length.is_some()) {
        imports.push("LengthRange");
    }
    if sets.iter().any(|c| c.range.is_some()) {
        imports.push("ValueRange");
    }
    write_use_list(&mut out, "crate::schema", &imports)?;

    for (name, named) in &table.by_name {
        let constraints = &named.constraints;
        let length = bounds_literal("LengthRange", constraints.length);
        let range = bounds_literal("ValueRange", constraints.range);
        let pattern = match &constraints.pattern {
            Some(pattern) => format!("Some({pattern:?})"),
            None => "None".to_owned(),
        };
        writeln!(out)?;
        writeln!(out, "/// Constraints on `{}` values.", named.target)?;
        writeln!(out, "pub(crate) const {name}: Constraints = Constraints {{")?;
        writeln!(out, "    length: {length},")?;
        writeln!(out, "    range: {range},")?;
        writeln!(out, "    pattern: {pattern},")?;
        writeln!(out, "}};")?;
    }
    Ok(out)
}

/// Whether a member holds timestamps, directly or as list elements.
fn holds_timestamp(kind: &FieldKind) -> bool {
    match kind {
        FieldKind::Timestamp => true,
        FieldKind::List(item) => holds_timestamp(&item.kind),
        _ => false,
    }
}

/// `use` declarations of a file holding `structs`, and the enums when `with_enums`.
fn write_imports(
    out: &mut String,
    structs: &[&StructInfo],
    with_enums: bool,
    types: &BTreeSet<String>,
) -> Result<()> {
    let fields: Vec<&FieldInfo> = structs.iter().flat_map(|s| &s.fields).collect();
    writeln!(out, "use std::fmt;")?;
    writeln!(out)?;
    if fields.iter().any(|f| holds_timestamp(&f.kind)) {
        writeln!(out, "use chrono::{{DateTime, Utc}};")?;
    }
    if with_enums {
        writeln!(
            out,
            "use serde::{{Deserialize, Deserializer, Serialize, Serializer}};"
        )?;
    } else {
        writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    }
    writeln!(out)?;

    let mut schema = BTreeSet::new();
    if with_enums {
        schema.extend(["AsMemberValue", "MemberValue"]);
    }
    if !structs.is_empty() {
        schema.extend(["MemberValue", "Shape", "ShapeSchema"]);
    }
    if !fields.is_empty() {
        schema.extend(["self", "MemberKind", "MemberSchema"]);
    }
    let mut named_constraints = false;
    for field in &fields {
        let mut sets = vec![&field.constraints];
        if let FieldKind::List(item) = &field.kind {
            schema.insert("ItemSchema");
            sets.push(&item.constraints);
        }
        for constraints in sets {
            if constraints.is_empty() {
                schema.insert("Constraints");
            } else {
                named_constraints = true;
            }
        }
    }

    if named_constraints {
        writeln!(out, "use crate::constraints;")?;
    }
    if !structs.is_empty() {
        writeln!(out, "use crate::display;")?;
    }
    if !schema.is_empty() {
        let schema: Vec<&str> = schema.into_iter().collect();
        write_use_list(out, "crate::schema", &schema)?;
    }
    if !types.is_empty() {
        let types: Vec<&str> = types.iter().map(String::as_str).collect();
        write_use_list(out, "crate::types", &types)?;
    }
    if with_enums {
        writeln!(out, "use crate::unknown::UnknownVariantValue;")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Generate types.rs with all enums and shared structs.
fn generate_types(
    resolved: &ResolvedModel,
    service: &ServiceConfig,
    constraints: &ConstraintTable,
    header: &str,
) -> Result<String> {
    let mut out = String::with_capacity(256 * 1024);
    writeln!(out, "{header}")?;
    writeln!(out)?;
    let structs: Vec<&StructInfo> = resolved.shared_structs.values().collect();
    let with_enums = !resolved.enums.is_empty();
    write_imports(&mut out, &structs, with_enums, &BTreeSet::new())?;

    for (name, info) in &resolved.enums {
        write_enum(&mut out, name, info, service)?;
    }

    for (name, info) in &resolved.shared_structs {
        let doc = info
            .documentation
            .clone()
            .unwrap_or_else(|| format!("{} `{}` structure.", service.title, info.shape_name));
        write_struct(&mut out, name, info, &doc, constraints)?;
    }

    Ok(out)
}

/// `Display` impl forwarding to `as_str`.
fn write_display_as_str(out: &mut String, name: &str) -> Result<()> {
    writeln!(out, "impl fmt::Display for {name} {{")?;
    writeln!(out, "{DISPLAY_FMT}")?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Generate a single Rust enum with an `Unknown` catch-all variant.
fn write_enum(
    out: &mut String,
    name: &str,
    info: &EnumInfo,
    service: &ServiceConfig,
) -> Result<()> {
    let doc = info
        .documentation
        .clone()
        .unwrap_or_else(|| format!("{} `{name}` values.", service.title));
    write_docs(out, "", &doc)?;
    writeln!(out, "#[derive(Debug, Clone, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum {name} {{")?;
    for variant in &info.variants {
        writeln!(out, "    /// `{}`", variant.string_value)?;
        writeln!(out, "    {},", variant.rust_name)?;
    }
    writeln!(
        out,
        "    /// A value not known to this version of the model."
    )?;
    writeln!(out, "    Unknown(UnknownVariantValue),")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    let values: Vec<String> = info
        .variants
        .iter()
        .map(|v| format!("\"{}\"", v.string_value))
        .collect();
    writeln!(out, "impl {name} {{")?;
    writeln!(
        out,
        "    /// Wire values of every modeled variant, in declaration order."
    )?;
    write_slice_const(out, 4, "pub const VALUES: &[&str] =", &values)?;
    writeln!(out)?;
    writeln!(out, "    /// Returns the wire value of this variant.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &str {{")?;
    writeln!(out, "        match self {{")?;
    for variant in &info.variants {
        let pattern = format!("Self::{}", variant.rust_name);
        let body = format!("\"{}\"", variant.string_value);
        write_match_arm(out, 12, &pattern, &body)?;
    }
    writeln!(out, "            Self::Unknown(value) => value.as_str(),")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    /// Whether this is a modeled variant.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn is_known(&self) -> bool {{")?;
    writeln!(out, "        !matches!(self, Self::Unknown(_))")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    write_display_as_str(out, name)?;
    write_enum_conversions(out, name, info)
}

/// String, serde and member-value conversions of a generated enum.
fn write_enum_conversions(out: &mut String, name: &str, info: &EnumInfo) -> Result<()> {
    writeln!(out, "impl From<&str> for {name} {{")?;
    writeln!(out, "    fn from(s: &str) -> Self {{")?;
    writeln!(out, "        match s {{")?;
    for variant in &info.variants {
        let pattern = format!("\"{}\"", variant.string_value);
        let body = format!("Self::{}", variant.rust_name);
        write_match_arm(out, 12, &pattern, &body)?;
    }
    writeln!(
        out,
        "            other => Self::Unknown(UnknownVariantValue::new(other)),"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl From<String> for {name} {{")?;
    writeln!(out, "    fn from(s: String) -> Self {{")?;
    writeln!(out, "        Self::from(s.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl Serialize for {name} {{")?;
    writeln!(
        out,
        "    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {{"
    )?;
    writeln!(out, "        serializer.serialize_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl<'de> Deserialize<'de> for {name} {{")?;
    writeln!(
        out,
        "    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {{"
    )?;
    writeln!(
        out,
        "        String::deserialize(deserializer).map(Self::from)"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl AsMemberValue for {name} {{")?;
    writeln!(out, "    fn as_member_value(&self) -> MemberValue<'_> {{")?;
    writeln!(out, "        MemberValue::Enum(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Arguments of the `#[serde]` attribute on a struct field.
fn serde_args(field: &FieldInfo) -> Vec<String> {
    let timestamp = field.kind == FieldKind::Timestamp;
    let mut args = vec![format!("rename = \"{}\"", field.smithy_name)];
    if timestamp {
        args.push("default".to_owned());
    }
    args.push("skip_serializing_if = \"Option::is_none\"".to_owned());
    if timestamp {
        args.push("with = \"crate::timestamp::epoch_seconds\"".to_owned());
    }
    args
}

/// Generate a Rust struct with accessors, `Display`, `Shape` and its schema.
fn write_struct(
    out: &mut String,
    name: &str,
    info: &StructInfo,
    doc: &str,
    constraints: &ConstraintTable,
) -> Result<()> {
    write_docs(out, "", doc)?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]"
    )?;
    if info.fields.is_empty() {
        writeln!(out, "pub struct {name} {{}}")?;
    } else {
        writeln!(out, "pub struct {name} {{")?;
        for field in &info.fields {
            write_attribute(out, 4, "serde", &serde_args(field))?;
            let ty = field.kind.rust_type();
            writeln!(out, "    {}: Option<{ty}>,", field.rust_name)?;
        }
        writeln!(out, "}}")?;
    }
    writeln!(out)?;

    let prefix = name.to_shouty_snake_case();
    writeln!(out, "impl {name} {{")?;
    writeln!(out, "    /// Constraint metadata for this shape.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn shape_schema() -> &'static ShapeSchema {{")?;
    writeln!(out, "        &{prefix}_SCHEMA")?;
    writeln!(out, "    }}")?;
    for field in &info.fields {
        writeln!(out)?;
        write_accessors(out, field)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for {name} {{")?;
    writeln!(out, "{DISPLAY_FMT}")?;
    writeln!(out, "        display::fmt_shape(self, f)")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    write_shape_impl(out, name, info, &prefix)?;
    write_schema_static(out, name, info, &prefix, constraints)
}

/// Getter of one field, followed by its setters.
fn write_accessors(out: &mut String, field: &FieldInfo) -> Result<()> {
    let rust = &field.rust_name;

    let doc = field
        .documentation
        .clone()
        .unwrap_or_else(|| format!("The `{}` member.", field.smithy_name));
    write_docs(out, "    ", &doc)?;
    if field.required {
        writeln!(out, "    ///")?;
        writeln!(out, "    /// Required by the service.")?;
    }
    writeln!(out, "    #[must_use]")?;
    let (getter_type, getter_body) = match &field.kind {
        FieldKind::String => ("Option<&str>".to_owned(), format!("self.{rust}.as_deref()")),
        FieldKind::Integer | FieldKind::Long | FieldKind::Boolean | FieldKind::Timestamp => (
            format!("Option<{}>", field.kind.rust_type()),
            format!("self.{rust}"),
        ),
        FieldKind::Enum(ty) | FieldKind::Structure(ty) => {
            (format!("Option<&{ty}>"), format!("self.{rust}.as_ref()"))
        }
        FieldKind::List(item) => (
            format!("Option<&[{}]>", item.kind.rust_type()),
            format!("self.{rust}.as_deref()"),
        ),
    };
    let head = format!("pub fn {rust}");
    let tail = format!(" -> {getter_type}");
    write_fn_signature(out, 4, &head, &["&self"], &tail)?;
    writeln!(out, "        {getter_body}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    write_setters(out, field)
}

/// Setter, fluent setter and, for lists, appender of one field.
fn write_setters(out: &mut String, field: &FieldInfo) -> Result<()> {
    let rust = &field.rust_name;
    let bare = field.bare_name();
    let wire = &field.smithy_name;
    let target = format!("self.{rust}");

    writeln!(out, "    /// Sets `{wire}`; `None` clears it.")?;
    let (param, value) = match &field.kind {
        FieldKind::List(item) => {
            let item_type = item.kind.rust_type();
            writeln!(out, "    ///")?;
            writeln!(out, "    /// The slice is copied.")?;
            (
                format!("input: Option<&[{item_type}]>"),
                format!("input.map(<[{item_type}]>::to_vec)"),
            )
        }
        other => (
            format!("input: Option<{}>", other.rust_type()),
            "input".to_owned(),
        ),
    };
    let head = format!("pub fn set_{bare}");
    let params = ["&mut self", param.as_str()];
    write_fn_signature(out, 4, &head, &params, " -> &mut Self")?;
    write_assignment(out, 8, &target, &value)?;
    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Sets `{wire}` and returns the updated value.")?;
    writeln!(out, "    #[must_use]")?;
    let (param, value) = match &field.kind {
        FieldKind::String => ("impl Into<String>".to_owned(), "input.into()".to_owned()),
        FieldKind::Enum(ty) => (format!("impl Into<{ty}>"), "input.into()".to_owned()),
        FieldKind::List(item) => (
            format!("&[{}]", item.kind.rust_type()),
            "input.to_vec()".to_owned(),
        ),
        other => (other.rust_type(), "input".to_owned()),
    };
    let head = format!("pub fn with_{bare}");
    let params = ["mut self".to_owned(), format!("input: {param}")];
    write_fn_signature(out, 4, &head, &params, " -> Self")?;
    write_assignment(out, 8, &target, &format!("Some({value})"))?;
    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;

    if let FieldKind::List(item) = &field.kind {
        writeln!(out)?;
        writeln!(
            out,
            "    /// Appends to `{wire}`, creating the list if it is unset."
        )?;
        writeln!(out, "    #[must_use]")?;
        let head = format!("pub fn append_{bare}");
        let params = [
            "mut self".to_owned(),
            format!("items: impl IntoIterator<Item = {}>", item.kind.rust_type()),
        ];
        write_fn_signature(out, 4, &head, &params, " -> Self")?;
        let list = format!("{target}.get_or_insert_default()");
        write_assignment(out, 8, "let list", &list)?;
        writeln!(out, "        list.extend(items);")?;
        writeln!(out, "        self")?;
        writeln!(out, "    }}")?;
    }
    Ok(())
}

/// `Shape` impl exposing the schema and member values by wire name.
fn write_shape_impl(out: &mut String, name: &str, info: &StructInfo, prefix: &str) -> Result<()> {
    writeln!(out, "impl Shape for {name} {{")?;
    writeln!(out, "    fn schema(&self) -> &'static ShapeSchema {{")?;
    writeln!(out, "        &{prefix}_SCHEMA")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    if info.fields.is_empty() {
        writeln!(
            out,
            "    fn member_value(&self, _member: &str) -> Option<MemberValue<'_>> {{"
        )?;
        writeln!(out, "        None")?;
    } else {
        writeln!(
            out,
            "    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {{"
        )?;
        writeln!(out, "        match member {{")?;
        for field in &info.fields {
            let pattern = format!("\"{}\"", field.smithy_name);
            let body = format!("schema::value_of(self.{}.as_ref())", field.rust_name);
            write_match_arm(out, 12, &pattern, &body)?;
        }
        writeln!(out, "            _ => None,")?;
        writeln!(out, "        }}")?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// `MemberKind` expression of a scalar member or list element.
fn member_kind(kind: &FieldKind) -> Result<String> {
    Ok(match kind {
        FieldKind::String => "MemberKind::String".to_owned(),
        FieldKind::Integer => "MemberKind::Integer".to_owned(),
        FieldKind::Long => "MemberKind::Long".to_owned(),
        FieldKind::Boolean => "MemberKind::Boolean".to_owned(),
        FieldKind::Timestamp => "MemberKind::Timestamp".to_owned(),
        FieldKind::Enum(name) => format!("MemberKind::Enum({name}::VALUES)"),
        FieldKind::Structure(_) => "MemberKind::Structure".to_owned(),
        FieldKind::List(_) => bail!("nested lists are not supported"),
    })
}

/// Fields of one `MemberSchema` literal.
fn write_member_schema(
    out: &mut String,
    indent: usize,
    owner: &str,
    field: &FieldInfo,
    constraints: &ConstraintTable,
) -> Result<()> {
    let pad = " ".repeat(indent);
    let wire = &field.smithy_name;
    writeln!(out, "{pad}name: \"{wire}\",")?;
    writeln!(out, "{pad}target: \"{}\",", field.target)?;
    if let FieldKind::List(item) = &field.kind {
        let fallback = member_constant(owner, wire, true);
        let item_constraints = constraints.lookup(&item.target, &fallback, &item.constraints)?;
        writeln!(out, "{pad}kind: MemberKind::List(&ItemSchema {{")?;
        writeln!(out, "{pad}    target: \"{}\",", item.target)?;
        writeln!(out, "{pad}    kind: {},", member_kind(&item.kind)?)?;
        writeln!(out, "{pad}    constraints: {item_constraints},")?;
        writeln!(out, "{pad}}}),")?;
    } else {
        writeln!(out, "{pad}kind: {},", member_kind(&field.kind)?)?;
    }
    writeln!(out, "{pad}required: {},", field.required)?;
    let fallback = member_constant(owner, wire, false);
    let expr = constraints.lookup(&field.target, &fallback, &field.constraints)?;
    writeln!(out, "{pad}constraints: {expr},")?;
    Ok(())
}

/// Static `ShapeSchema` of a struct, members in declaration order.
fn write_schema_static(
    out: &mut String,
    name: &str,
    info: &StructInfo,
    prefix: &str,
    constraints: &ConstraintTable,
) -> Result<()> {
    writeln!(out, "static {prefix}_SCHEMA: ShapeSchema = ShapeSchema {{")?;
    writeln!(out, "    name: \"{name}\",")?;
    match info.fields.as_slice() {
        [] => writeln!(out, "    members: &[],")?,
        [field] => {
            writeln!(out, "    members: &[MemberSchema {{")?;
            write_member_schema(out, 8, name, field, constraints)?;
            writeln!(out, "    }}],")?;
        }
        fields => {
            writeln!(out, "    members: &[")?;
            for field in fields {
                writeln!(out, "        MemberSchema {{")?;
                write_member_schema(out, 12, name, field, constraints)?;
                writeln!(out, "        }},")?;
            }
            writeln!(out, "    ],")?;
        }
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    Ok(())
}

/// Generate input or output module files.
fn generate_io_modules(
    files: &mut BTreeMap<String, String>,
    kind: IoKind,
    resolved: &ResolvedModel,
    constraints: &ConstraintTable,
    header: &str,
) -> Result<()> {
    let module = kind.module();
    let structs = match kind {
        IoKind::Input => &resolved.input_structs,
        IoKind::Output => &resolved.output_structs,
    };

    // Generate mod.rs
    let mut mod_out = String::with_capacity(1024);
    writeln!(mod_out, "{header}")?;
    writeln!(mod_out)?;
    for cat_name in resolved.categories.keys() {
        writeln!(mod_out, "mod {cat_name};")?;
    }
    writeln!(mod_out)?;
    for cat_name in resolved.categories.keys() {
        writeln!(mod_out, "pub use {cat_name}::*;")?;
    }
    files.insert(format!("{module}/mod.rs"), mod_out);

    // Generate each category file
    for (cat_name, ops) in &resolved.categories {
        let mut category_structs: Vec<(&str, &OperationInfo)> = ops
            .iter()
            .filter_map(|op_name| resolved.operations.iter().find(|o| &o.name == op_name))
            .filter_map(|op| {
                let name = match kind {
                    IoKind::Input => op.input_struct.as_deref(),
                    IoKind::Output => op.output_struct.as_deref(),
                };
                name.filter(|n| structs.contains_key(*n)).map(|n| (n, op))
            })
            .collect();
        category_structs.sort_by(|a, b| a.0.cmp(b.0));
        category_structs.dedup_by(|a, b| a.0 == b.0);

        let mut out = String::with_capacity(32 * 1024);
        writeln!(out, "{header}")?;

        if !category_structs.is_empty() {
            writeln!(out)?;
            let infos: Vec<&StructInfo> = category_structs
                .iter()
                .filter_map(|(n, _)| structs.get(*n))
                .collect();
            let types = category_needs_types(&infos, resolved);
            write_imports(&mut out, &infos, false, &types)?;
        }

        for (name, op) in &category_structs {
            let Some(info) = structs.get(*name) else {
                continue;
            };
            let mut doc = format!("{} of the `{}` operation.", kind.label(), op.name);
            if let (IoKind::Input, Some(op_doc)) = (kind, &op.documentation) {
                doc.push_str("\n\n");
                doc.push_str(op_doc);
            }
            write_struct(&mut out, name, info, &doc, constraints)?;
        }

        files.insert(format!("{module}/{cat_name}.rs"), out);
    }

    Ok(())
}

/// Determine which types from `types.rs` are referenced by a set of structs.
fn category_needs_types(structs: &[&StructInfo], resolved: &ResolvedModel) -> BTreeSet<String> {
    let mut needed = BTreeSet::new();
    for info in structs {
        for field in &info.fields {
            if let Some(ty) = field.kind.named_type()
                && (resolved.enums.contains_key(ty) || resolved.shared_structs.contains_key(ty))
            {
                needed.insert(ty.to_owned());
            }
        }
    }
    needed
}

/// Generate operations.rs with the operation enum and the input binding trait.
fn generate_operations(
    resolved: &ResolvedModel,
    service: &ServiceConfig,
    header: &str,
) -> Result<String> {
    let op_enum = &service.operation_enum;
    let error_enum = &service.error_enum;
    let title = &service.title;

    let mut out = String::with_capacity(32 * 1024);
    writeln!(out, "{header}")?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out)?;
    writeln!(out, "use crate::error::{error_enum};")?;

    let inputs: Vec<&str> = resolved.input_structs.keys().map(String::as_str).collect();
    let outputs: Vec<&str> = resolved.output_structs.keys().map(String::as_str).collect();
    if !inputs.is_empty() {
        write_use_list(&mut out, "crate::input", &inputs)?;
    }
    if !outputs.is_empty() {
        write_use_list(&mut out, "crate::output", &outputs)?;
    }
    writeln!(out, "use crate::schema::Shape;")?;
    writeln!(out)?;

    writeln!(
        out,
        "/// JSON protocol target prefix of the {title} service."
    )?;
    let target_prefix = &service.target_prefix;
    writeln!(out, "pub const TARGET_PREFIX: &str = \"{target_prefix}\";")?;
    writeln!(out)?;

    writeln!(out, "/// All supported {title} operations.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum {op_enum} {{")?;
    for op in &resolved.operations {
        let doc = op
            .documentation
            .clone()
            .unwrap_or_else(|| format!("The {} operation.", op.name));
        write_docs(&mut out, "    ", &doc)?;
        writeln!(out, "    {},", op.name)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    for op in &resolved.operations {
        let shouty = op.name.to_shouty_snake_case();
        let lhs = format!("const {shouty}_ERRORS: &[{error_enum}] =");
        let errors: Vec<String> = op
            .errors
            .iter()
            .map(|e| format!("{error_enum}::{e}"))
            .collect();
        write_slice_const(&mut out, 0, &lhs, &errors)?;
    }
    writeln!(out)?;

    write_operation_impl(&mut out, resolved, service)?;
    write_display_as_str(&mut out, op_enum)?;
    write_operation_inputs(&mut out, resolved, op_enum)?;
    Ok(out)
}

/// Inherent impl of the operation enum.
fn write_operation_impl(
    out: &mut String,
    resolved: &ResolvedModel,
    service: &ServiceConfig,
) -> Result<()> {
    let op_enum = &service.operation_enum;
    let error_enum = &service.error_enum;

    writeln!(out, "impl {op_enum} {{")?;
    writeln!(out, "    /// Every operation, in name order.")?;
    let all: Vec<String> = resolved
        .operations
        .iter()
        .map(|op| format!("Self::{}", op.name))
        .collect();
    write_slice_const(out, 4, "pub const ALL: &[Self] =", &all)?;
    writeln!(out)?;

    writeln!(out, "    /// Returns the operation name.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for op in &resolved.operations {
        let pattern = format!("Self::{}", op.name);
        write_match_arm(out, 12, &pattern, &format!("\"{}\"", op.name))?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Parse an operation name into a {op_enum}.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_name(name: &str) -> Option<Self> {{")?;
    writeln!(out, "        match name {{")?;
    for op in &resolved.operations {
        let pattern = format!("\"{}\"", op.name);
        write_match_arm(out, 12, &pattern, &format!("Some(Self::{})", op.name))?;
    }
    writeln!(out, "            _ => None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(
        out,
        "    /// Value of the `X-Amz-Target` header for this operation."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn target(&self) -> String {{")?;
    writeln!(
        out,
        "        format!(\"{{TARGET_PREFIX}}.{{}}\", self.as_str())"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Errors the operation declares.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(
        out,
        "    pub fn errors(&self) -> &'static [{error_enum}] {{"
    )?;
    writeln!(out, "        match self {{")?;
    for op in &resolved.operations {
        let pattern = format!("Self::{}", op.name);
        let body = format!("{}_ERRORS", op.name.to_shouty_snake_case());
        write_match_arm(out, 12, &pattern, &body)?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// The `OperationInput` trait and its impl for every operation input.
fn write_operation_inputs(out: &mut String, resolved: &ResolvedModel, op_enum: &str) -> Result<()> {
    writeln!(
        out,
        "/// Binds an operation input to its operation and output type."
    )?;
    writeln!(out, "pub trait OperationInput: Shape {{")?;
    writeln!(out, "    /// Output type of the operation.")?;
    writeln!(out, "    type Output: Shape + Default;")?;
    writeln!(out, "    /// The operation this input belongs to.")?;
    writeln!(out, "    const OPERATION: {op_enum};")?;
    writeln!(out, "}}")?;

    for op in &resolved.operations {
        let (Some(input), Some(output)) = (&op.input_struct, &op.output_struct) else {
            continue;
        };
        writeln!(out)?;
        writeln!(out, "impl OperationInput for {input} {{")?;
        writeln!(out, "    type Output = {output};")?;
        let lhs = format!("const OPERATION: {op_enum}");
        write_assignment(out, 4, &lhs, &format!("{op_enum}::{}", op.name))?;
        writeln!(out, "}}")?;
    }
    Ok(())
}

/// Generate error.rs with the error code enum and the error struct.
fn generate_error(
    resolved: &ResolvedModel,
    service: &ServiceConfig,
    header: &str,
) -> Result<String> {
    let code_enum = &service.error_enum;
    let title = &service.title;

    let mut out = String::with_capacity(16 * 1024);
    writeln!(out, "{header}")?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out)?;
    writeln!(out, "use crate::unknown::UnknownVariantValue;")?;
    writeln!(out)?;

    writeln!(out, "/// Fault classification of a service error.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum ErrorFault {{")?;
    writeln!(out, "    /// The service rejected the request.")?;
    writeln!(out, "    Client,")?;
    writeln!(
        out,
        "    /// The service failed to process a valid request."
    )?;
    writeln!(out, "    Server,")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "/// Error codes returned by {title}.")?;
    writeln!(out, "#[derive(Debug, Clone, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum {code_enum} {{")?;
    for error in &resolved.errors {
        let doc = error
            .documentation
            .clone()
            .unwrap_or_else(|| format!("`{}`", error.code));
        write_docs(&mut out, "    ", &doc)?;
        writeln!(out, "    {},", error.rust_name)?;
    }
    writeln!(
        out,
        "    /// An error code not known to this version of the model."
    )?;
    writeln!(out, "    Unknown(UnknownVariantValue),")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "/// Codes the service reports as server faults.")?;
    let server: Vec<String> = resolved
        .errors
        .iter()
        .filter(|e| e.server_fault)
        .map(|e| format!("{code_enum}::{}", e.rust_name))
        .collect();
    let lhs = format!("const SERVER_FAULTS: &[{code_enum}] =");
    write_slice_const(&mut out, 0, &lhs, &server)?;
    writeln!(out)?;

    write_error_code_impl(&mut out, resolved, code_enum)?;
    write_display_as_str(&mut out, code_enum)?;
    write_error_struct(&mut out, service)?;
    Ok(out)
}

/// Inherent impl of the error code enum.
fn write_error_code_impl(
    out: &mut String,
    resolved: &ResolvedModel,
    code_enum: &str,
) -> Result<()> {
    writeln!(out, "impl {code_enum} {{")?;
    writeln!(out, "    /// Returns the wire error code.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &str {{")?;
    writeln!(out, "        match self {{")?;
    for error in &resolved.errors {
        let pattern = format!("Self::{}", error.rust_name);
        write_match_arm(out, 12, &pattern, &format!("\"{}\"", error.code))?;
    }
    writeln!(out, "            Self::Unknown(code) => code.as_str(),")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(
        out,
        "    /// Parse an error type as returned in `__type` or `X-Amzn-ErrorType`."
    )?;
    writeln!(out, "    ///")?;
    writeln!(
        out,
        "    /// Accepts a bare code, a namespaced `ns#Code` and a `Code:detail` form."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_type(error_type: &str) -> Self {{")?;
    writeln!(
        out,
        "        let code = error_type.rsplit('#').next().unwrap_or(error_type);"
    )?;
    writeln!(
        out,
        "        let code = code.split(':').next().unwrap_or(code);"
    )?;
    writeln!(out, "        match code {{")?;
    for error in &resolved.errors {
        let pattern = format!("\"{}\"", error.code);
        write_match_arm(out, 12, &pattern, &format!("Self::{}", error.rust_name))?;
    }
    writeln!(
        out,
        "            other => Self::Unknown(UnknownVariantValue::new(other)),"
    )?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(
        out,
        "    /// Whether the error is a client or a server fault."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn fault(&self) -> ErrorFault {{")?;
    writeln!(out, "        if SERVER_FAULTS.contains(self) {{")?;
    writeln!(out, "            ErrorFault::Server")?;
    writeln!(out, "        }} else {{")?;
    writeln!(out, "            ErrorFault::Client")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// The service error struct pairing a code with its message.
fn write_error_struct(out: &mut String, service: &ServiceConfig) -> Result<()> {
    let code_enum = &service.error_enum;
    let error_struct = &service.error_struct;

    writeln!(out, "/// An error returned by {}.", service.title)?;
    writeln!(out, "#[derive(Debug, Clone, PartialEq, Eq)]")?;
    writeln!(out, "pub struct {error_struct} {{")?;
    writeln!(out, "    /// The error code.")?;
    writeln!(out, "    pub code: {code_enum},")?;
    writeln!(out, "    /// The message returned with the error, if any.")?;
    writeln!(out, "    pub message: Option<String>,")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    let code_param = format!("code: {code_enum}");
    writeln!(out, "impl {error_struct} {{")?;
    writeln!(out, "    /// Create an error without a message.")?;
    writeln!(out, "    #[must_use]")?;
    write_fn_signature(out, 4, "pub fn new", &[code_param.as_str()], " -> Self")?;
    writeln!(out, "        Self {{")?;
    writeln!(out, "            code,")?;
    writeln!(out, "            message: None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Create an error with a message.")?;
    writeln!(out, "    #[must_use]")?;
    let params = [code_param.as_str(), "message: impl Into<String>"];
    write_fn_signature(out, 4, "pub fn with_message", &params, " -> Self")?;
    writeln!(out, "        Self {{")?;
    writeln!(out, "            code,")?;
    writeln!(out, "            message: Some(message.into()),")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(
        out,
        "    /// Whether the error is a client or a server fault."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn fault(&self) -> ErrorFault {{")?;
    writeln!(out, "        self.code.fault()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for {error_struct} {{")?;
    writeln!(out, "{DISPLAY_FMT}")?;
    writeln!(out, "        match &self.message {{")?;
    writeln!(
        out,
        "            Some(message) => write!(f, \"{{}}: {{message}}\", self.code),"
    )?;
    writeln!(out, "            None => write!(f, \"{{}}\", self.code),")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl std::error::Error for {error_struct} {{}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::{CodegenConfig, DEFAULT_CONFIG_NAME};
    use crate::model::SmithyModel;
    use crate::shapes::resolve_model;

    fn generate_checked_in() -> BTreeMap<String, String> {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = CodegenConfig::load(&dir.join(DEFAULT_CONFIG_NAME)).unwrap();
        let json = std::fs::read_to_string(&config.paths.model).unwrap();
        let model: SmithyModel = serde_json::from_str(&json).unwrap();
        let resolved = resolve_model(&model, &config).unwrap();
        generate_all(&resolved, &config.service).unwrap()
    }

    fn range(min: i64, max: Option<i64>) -> ConstraintInfo {
        ConstraintInfo {
            range: Some((Some(min), max)),
            ..ConstraintInfo::default()
        }
    }

    #[test]
    fn test_should_group_integer_literals() {
        assert_eq!(int_literal(128), "128");
        assert_eq!(int_literal(1224), "1224");
        assert_eq!(int_literal(2_000_000_000), "2_000_000_000");
        assert_eq!(int_literal(-12_345), "-12_345");
        assert_eq!(opt_literal::<u64>(None), "None");
        assert_eq!(opt_literal(Some(100_i64)), "Some(100)");
    }

    #[test]
    fn test_should_render_bounds_literal() {
        assert_eq!(
            bounds_literal("LengthRange", Some((Some(1_u64), Some(128)))),
            "Some(LengthRange::new(Some(1), Some(128)))"
        );
        assert_eq!(
            bounds_literal("ValueRange", Some((None, Some(20_000_i64)))),
            "Some(ValueRange::new(None, Some(20_000)))"
        );
        assert_eq!(bounds_literal::<u64>("LengthRange", None), "None");
    }

    #[test]
    fn test_should_fall_back_to_member_constant_on_conflict() {
        let wide = range(100, Some(2_000_000_000));
        let narrow = range(100, Some(500));
        let rule = member_constant("RateBasedRule", "RateLimit", false);
        let own = member_constant("Throttle", "RateLimit", false);
        assert_eq!(own, "THROTTLE_RATE_LIMIT");

        let mut table = ConstraintTable::default();
        table.register("RateLimit", rule.clone(), &wide).unwrap();
        table.register("RateLimit", own.clone(), &narrow).unwrap();
        table.register("RateLimit", rule.clone(), &wide).unwrap();
        assert_eq!(table.by_name.len(), 2);

        let expr = table.lookup("RateLimit", &rule, &wide).unwrap();
        assert_eq!(expr, "constraints::RATE_LIMIT");
        let expr = table.lookup("RateLimit", &own, &narrow).unwrap();
        assert_eq!(expr, "constraints::THROTTLE_RATE_LIMIT");
        let expr = table.lookup("RateLimit", &rule, &ConstraintInfo::default());
        assert_eq!(expr.unwrap(), "Constraints::NONE");

        let err = table.register("RateLimit", own, &range(1, None));
        assert!(err.unwrap_err().to_string().contains("conflicting"));
        assert!(table.lookup("RateLimit", &rule, &range(7, None)).is_err());
    }

    #[test]
    fn test_should_generate_expected_file_set() {
        let files = generate_checked_in();
        for path in [
            "constraints.rs",
            "types.rs",
            "operations.rs",
            "error.rs",
            "input/mod.rs",
            "input/rule.rs",
            "output/mod.rs",
            "output/logging.rs",
        ] {
            assert!(files.contains_key(path), "missing {path}");
        }
        assert!(
            files
                .values()
                .all(|content| content.starts_with("//! Auto-generated from the AWS WAF Regional"))
        );
    }

    #[test]
    fn test_should_keep_generated_lines_within_width() {
        for (path, content) in generate_checked_in() {
            assert!(content.ends_with('\n'), "{path}");
            assert!(!content.ends_with("\n\n"), "{path}");
            assert!(!content.contains("\n\n\n"), "{path}");
            for line in content.lines() {
                let doc = line.trim_start().starts_with("///");
                assert!(doc || line.len() <= 100, "{path}: {line}");
                assert_eq!(line, line.trim_end(), "{path}");
            }
        }
    }

    #[test]
    fn test_should_generate_shared_constraint_constants() {
        let files = generate_checked_in();
        let constraints = &files["constraints.rs"];
        assert!(constraints.starts_with(
            "//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.\n\n\
             use crate::schema::{Constraints, LengthRange, ValueRange};\n"
        ));
        assert!(constraints.contains(
            "pub(crate) const RESOURCE_ID: Constraints = Constraints {\n    \
             length: Some(LengthRange::new(Some(1), Some(128))),\n    \
             range: None,\n    \
             pattern: Some(\".*\\\\S.*\"),\n};\n"
        ));
        assert!(constraints.contains(
            "range: Some(ValueRange::new(Some(100), Some(2_000_000_000))),"
        ));
    }

    #[test]
    fn test_should_generate_enum_with_unknown_variant() {
        let files = generate_checked_in();
        let types = &files["types.rs"];
        assert!(types.contains("pub enum RateKey {\n    /// `IP`\n    Ip,\n"));
        assert!(types.contains("    Unknown(UnknownVariantValue),\n"));
        assert!(types.contains(
            "            other => Self::Unknown(UnknownVariantValue::new(other)),"
        ));
        assert!(types.contains("            \"RATE_BASED\" => Self::RateBased,"));
        assert!(types.contains("impl AsMemberValue for RateKey {"));
        assert!(types.contains("use crate::unknown::UnknownVariantValue;"));
    }

    #[test]
    fn test_should_generate_accessors_in_declaration_order() {
        let files = generate_checked_in();
        let rule = &files["input/rule.rs"];
        let with_rate_key = "pub fn with_rate_key(mut self, input: impl Into<RateKey>)";
        let name = rule.find("pub fn with_name(").unwrap();
        let metric = rule.find("pub fn with_metric_name(").unwrap();
        let rate_key = rule.find(with_rate_key).unwrap();
        assert!(name < metric && metric < rate_key);
        assert!(rule.contains("pub fn set_tags(&mut self, input: Option<&[Tag]>) -> &mut Self {"));
        assert!(rule.contains("self.tags = input.map(<[Tag]>::to_vec);"));
        assert!(rule.contains("let list = self.tags.get_or_insert_default();"));
        assert!(rule.contains("use crate::types::{RateKey, RuleUpdate, Tag};"));
    }

    #[test]
    fn test_should_generate_display_and_schema() {
        let files = generate_checked_in();
        let types = &files["types.rs"];
        assert!(types.contains("        display::fmt_shape(self, f)\n"));
        assert!(types.contains(
            "            \"RateLimit\" => schema::value_of(self.rate_limit.as_ref()),"
        ));
        assert!(types.contains("static RATE_BASED_RULE_SCHEMA: ShapeSchema = ShapeSchema {"));
        assert!(types.contains("            kind: MemberKind::Enum(RateKey::VALUES),"));
        assert!(types.contains("            constraints: constraints::RATE_LIMIT,"));
        assert!(types.contains("kind: MemberKind::List(&ItemSchema {"));
        assert!(types.contains("with = \"crate::timestamp::epoch_seconds\""));
    }

    #[test]
    fn test_should_generate_operations_and_errors() {
        let files = generate_checked_in();
        let ops = &files["operations.rs"];
        assert!(ops.contains("pub const TARGET_PREFIX: &str = \"AWSWAF_Regional_20161128\";"));
        assert!(ops.contains("impl OperationInput for CreateRateBasedRuleInput {"));
        assert!(ops.contains("    type Output = CreateRateBasedRuleOutput;"));

        let errors = &files["error.rs"];
        assert!(errors.contains(
            "            \"WAFStaleDataException\" => Self::WafStaleDataException,"
        ));
        assert!(errors.contains("            Self::Unknown(code) => code.as_str(),"));
        assert!(errors.contains("ErrorFault::Server"));
    }
}
