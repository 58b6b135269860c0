//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::schema::{MemberValue, Shape, ShapeSchema};

/// Input of the `GetChangeToken` operation.
///
/// Returns a change token for the next create, update, or delete request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetChangeTokenInput {}

impl GetChangeTokenInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_CHANGE_TOKEN_INPUT_SCHEMA
    }
}

impl fmt::Display for GetChangeTokenInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetChangeTokenInput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_CHANGE_TOKEN_INPUT_SCHEMA
    }

    fn member_value(&self, _member: &str) -> Option<MemberValue<'_>> {
        None
    }
}

static GET_CHANGE_TOKEN_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetChangeTokenInput",
    members: &[],
};
