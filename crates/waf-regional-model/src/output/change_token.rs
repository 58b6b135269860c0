//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{self, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema};

/// Output of the `GetChangeToken` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetChangeTokenOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl GetChangeTokenOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_CHANGE_TOKEN_OUTPUT_SCHEMA
    }

    /// The token to pass to the next create, update, or delete request.
    #[must_use]
    pub fn change_token(&self) -> Option<&str> {
        self.change_token.as_deref()
    }

    /// Sets `ChangeToken`; `None` clears it.
    pub fn set_change_token(&mut self, input: Option<String>) -> &mut Self {
        self.change_token = input;
        self
    }

    /// Sets `ChangeToken` and returns the updated value.
    #[must_use]
    pub fn with_change_token(mut self, input: impl Into<String>) -> Self {
        self.change_token = Some(input.into());
        self
    }
}

impl fmt::Display for GetChangeTokenOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetChangeTokenOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_CHANGE_TOKEN_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static GET_CHANGE_TOKEN_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetChangeTokenOutput",
    members: &[MemberSchema {
        name: "ChangeToken",
        target: "ChangeToken",
        kind: MemberKind::String,
        required: false,
        constraints: constraints::CHANGE_TOKEN,
    }],
};
