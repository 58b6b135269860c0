//! Line layout of generated sources.
//!
//! Generated files are written in the shape `rustfmt` gives them under its
//! default width heuristics, so the checked-in crate stays format-clean
//! without a formatter pass. Each helper covers one construct whose layout
//! depends on its width.

use std::fmt::Write;

use anyhow::Result;

/// Maximum line width.
const MAX_WIDTH: usize = 100;
/// Widest argument list of a function-like attribute kept on one line.
const ATTR_FN_LIKE_WIDTH: usize = 70;
/// Widest array literal kept on one line.
const ARRAY_WIDTH: usize = 60;
/// Longest element of an array that is packed several to a line.
const SHORT_ARRAY_ELEMENT_WIDTH: usize = 10;
/// Block indentation step.
const INDENT: usize = 4;

/// Join items with `", "`.
fn join<S: AsRef<str>>(items: &[S]) -> String {
    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push_str(", ");
        }
        joined.push_str(item.as_ref());
    }
    joined
}

/// Pack comma-terminated items onto as few lines as fit at `indent`.
fn pack_mixed<S: AsRef<str>>(items: &[S], indent: usize) -> Vec<String> {
    let width = MAX_WIDTH - indent - 1;
    let mut lines = Vec::new();
    let mut line = String::new();
    for item in items {
        let item = item.as_ref();
        if !line.is_empty() && line.len() + item.len() + 2 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(item);
        line.push(',');
    }
    lines.push(line);
    lines
}

/// Write `head(params) tail {`, one parameter per line when too wide.
pub fn write_fn_signature<S: AsRef<str>>(
    out: &mut String,
    indent: usize,
    head: &str,
    params: &[S],
    tail: &str,
) -> Result<()> {
    let pad = " ".repeat(indent);
    let line = format!("{pad}{head}({}){tail} {{", join(params));
    if line.len() <= MAX_WIDTH {
        writeln!(out, "{line}")?;
        return Ok(());
    }
    writeln!(out, "{pad}{head}(")?;
    for param in params {
        writeln!(out, "{pad}    {},", param.as_ref())?;
    }
    writeln!(out, "{pad}){tail} {{")?;
    Ok(())
}

/// Write `#[name(args)]`, one argument per line when too wide.
pub fn write_attribute<S: AsRef<str>>(
    out: &mut String,
    indent: usize,
    name: &str,
    args: &[S],
) -> Result<()> {
    let pad = " ".repeat(indent);
    let inner = join(args);
    let line = format!("{pad}#[{name}({inner})]");
    if inner.len() <= ATTR_FN_LIKE_WIDTH && line.len() <= MAX_WIDTH {
        writeln!(out, "{line}")?;
        return Ok(());
    }
    writeln!(out, "{pad}#[{name}(")?;
    for (i, arg) in args.iter().enumerate() {
        let sep = if i + 1 < args.len() { "," } else { "" };
        writeln!(out, "{pad}    {}{sep}", arg.as_ref())?;
    }
    writeln!(out, "{pad})]")?;
    Ok(())
}

/// Write a match arm, wrapping the body in a block when too wide.
pub fn write_match_arm(out: &mut String, indent: usize, pattern: &str, body: &str) -> Result<()> {
    let pad = " ".repeat(indent);
    let line = format!("{pad}{pattern} => {body},");
    if line.len() <= MAX_WIDTH {
        writeln!(out, "{line}")?;
        return Ok(());
    }
    writeln!(out, "{pad}{pattern} => {{")?;
    writeln!(out, "{pad}    {body}")?;
    writeln!(out, "{pad}}}")?;
    Ok(())
}

/// Write `lhs = rhs;`, moving the value to the next line when too wide.
pub fn write_assignment(out: &mut String, indent: usize, lhs: &str, rhs: &str) -> Result<()> {
    let pad = " ".repeat(indent);
    let line = format!("{pad}{lhs} = {rhs};");
    if line.len() <= MAX_WIDTH {
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{pad}{lhs} =")?;
        writeln!(out, "{pad}    {rhs};")?;
    }
    Ok(())
}

/// Write a `use path::{...};` declaration with sorted items.
pub fn write_use_list<S: AsRef<str>>(out: &mut String, path: &str, items: &[S]) -> Result<()> {
    let mut items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    items.sort_by_key(|item| (*item != "self", *item));
    if let [single] = items[..] {
        writeln!(out, "use {path}::{single};")?;
        return Ok(());
    }
    let line = format!("use {path}::{{{}}};", join(&items));
    if line.len() <= MAX_WIDTH {
        writeln!(out, "{line}")?;
        return Ok(());
    }
    writeln!(out, "use {path}::{{")?;
    for packed in pack_mixed(&items, INDENT) {
        writeln!(out, "    {packed}")?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

/// Write `lhs &[items];` for a slice constant or static.
///
/// Short slices stay on one line, or move to the next one when only that
/// fits. Longer ones list an element per line, or pack short elements
/// several to a line.
pub fn write_slice_const<S: AsRef<str>>(
    out: &mut String,
    indent: usize,
    lhs: &str,
    items: &[S],
) -> Result<()> {
    let pad = " ".repeat(indent);
    let inner = join(items);
    if inner.len() <= ARRAY_WIDTH {
        let line = format!("{pad}{lhs} &[{inner}];");
        if line.len() <= MAX_WIDTH {
            writeln!(out, "{line}")?;
            return Ok(());
        }
        if indent + INDENT + inner.len() + 4 <= MAX_WIDTH {
            writeln!(out, "{pad}{lhs}")?;
            writeln!(out, "{pad}    &[{inner}];")?;
            return Ok(());
        }
    }
    writeln!(out, "{pad}{lhs} &[")?;
    let short = items
        .iter()
        .all(|item| item.as_ref().len() <= SHORT_ARRAY_ELEMENT_WIDTH);
    if short {
        for packed in pack_mixed(items, indent + INDENT) {
            writeln!(out, "{pad}    {packed}")?;
        }
    } else {
        for item in items {
            writeln!(out, "{pad}    {},", item.as_ref())?;
        }
    }
    writeln!(out, "{pad}];")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_short_signature_on_one_line() {
        let mut out = String::new();
        write_fn_signature(&mut out, 4, "pub fn name", &["&self"], " -> &str").unwrap();
        assert_eq!(out, "    pub fn name(&self) -> &str {\n");
    }

    #[test]
    fn test_should_split_wide_signature() {
        let head = "pub fn append_geo_match_set_updates";
        let params = [
            "mut self",
            "items: impl IntoIterator<Item = GeoMatchSetUpdate>",
        ];
        let mut out = String::new();
        write_fn_signature(&mut out, 4, head, &params, " -> Self").unwrap();
        assert_eq!(
            out,
            "    pub fn append_geo_match_set_updates(\n        mut self,\n        \
             items: impl IntoIterator<Item = GeoMatchSetUpdate>,\n    ) -> Self {\n"
        );
    }

    #[test]
    fn test_should_split_attribute_past_seventy_columns() {
        let short = [
            "rename = \"Name\"",
            "skip_serializing_if = \"Option::is_none\"",
        ];
        let mut out = String::new();
        write_attribute(&mut out, 4, "serde", &short).unwrap();
        assert_eq!(
            out,
            "    #[serde(rename = \"Name\", skip_serializing_if = \"Option::is_none\")]\n"
        );

        let long = [
            "rename = \"LogDestinationConfigs\"",
            "skip_serializing_if = \"Option::is_none\"",
        ];
        let mut out = String::new();
        write_attribute(&mut out, 4, "serde", &long).unwrap();
        assert_eq!(
            out,
            "    #[serde(\n        rename = \"LogDestinationConfigs\",\n        \
             skip_serializing_if = \"Option::is_none\"\n    )]\n"
        );
    }

    #[test]
    fn test_should_wrap_wide_match_arm_in_block() {
        let mut out = String::new();
        write_match_arm(&mut out, 12, "Self::Ip", "\"IP\"").unwrap();
        assert_eq!(out, "            Self::Ip => \"IP\",\n");

        let body = format!("\"{}\"", "X".repeat(80));
        let mut out = String::new();
        write_match_arm(&mut out, 12, "Self::Long", &body).unwrap();
        let pad = " ".repeat(12);
        let expected = format!("{pad}Self::Long => {{\n{pad}    {body}\n{pad}}}\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_should_move_wide_assignment_value_to_next_line() {
        let mut out = String::new();
        write_assignment(&mut out, 8, "self.name", "input").unwrap();
        assert_eq!(out, "        self.name = input;\n");

        let rhs = "y".repeat(90);
        let mut out = String::new();
        write_assignment(&mut out, 4, "const X: T", &rhs).unwrap();
        assert_eq!(out, format!("    const X: T =\n        {rhs};\n"));
    }

    #[test]
    fn test_should_sort_use_list_with_self_first() {
        let mut out = String::new();
        write_use_list(&mut out, "crate::schema", &["Shape", "self", "MemberKind"]).unwrap();
        assert_eq!(out, "use crate::schema::{self, MemberKind, Shape};\n");

        let mut out = String::new();
        write_use_list(&mut out, "crate::types", &["Tag"]).unwrap();
        assert_eq!(out, "use crate::types::Tag;\n");
    }

    #[test]
    fn test_should_pack_wide_use_list() {
        let items: Vec<String> = (0..12).map(|i| format!("LongTypeName{i:02}")).collect();
        let mut out = String::new();
        write_use_list(&mut out, "crate::input", &items).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "use crate::input::{");
        for line in &lines[1..3] {
            assert!(line.len() <= MAX_WIDTH);
        }
        assert!(lines[2].ends_with("LongTypeName11,"));
        assert_eq!(lines[3], "};");
    }

    #[test]
    fn test_should_lay_out_slices_by_width() {
        let mut out = String::new();
        write_slice_const(&mut out, 4, "pub const VALUES: &[&str] =", &["\"IP\""]).unwrap();
        assert_eq!(out, "    pub const VALUES: &[&str] = &[\"IP\"];\n");

        let lhs = "const GET_CHANGE_TOKEN_ERRORS: &[WafRegionalErrorCode] =";
        let item = ["WafRegionalErrorCode::WafInternalErrorException"];
        let mut out = String::new();
        write_slice_const(&mut out, 0, lhs, &item).unwrap();
        let expected = format!("{lhs}\n    &[WafRegionalErrorCode::WafInternalErrorException];\n");
        assert_eq!(out, expected);

        let ops = [
            "Self::CreateRateBasedRule",
            "Self::GetChangeToken",
            "Self::UpdateRule",
        ];
        let mut out = String::new();
        write_slice_const(&mut out, 4, "pub const ALL: &[Self] =", &ops).unwrap();
        assert_eq!(
            out,
            "    pub const ALL: &[Self] = &[\n        Self::CreateRateBasedRule,\n        \
             Self::GetChangeToken,\n        Self::UpdateRule,\n    ];\n"
        );
    }

    #[test]
    fn test_should_pack_short_slice_elements() {
        let codes: Vec<String> = (0..40).map(|i| format!("\"C{i:02}\"")).collect();
        let mut out = String::new();
        write_slice_const(&mut out, 4, "pub const VALUES: &[&str] =", &codes).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "    pub const VALUES: &[&str] = &[");
        assert!(lines[1].starts_with("        \"C00\", \"C01\","));
        for line in &lines[1..lines.len() - 1] {
            assert!(line.len() <= MAX_WIDTH && line.ends_with(','));
        }
        assert_eq!(lines[lines.len() - 1], "    ];");
    }
}
