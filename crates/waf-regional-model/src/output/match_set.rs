//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{self, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema};

/// Output of the `UpdateGeoMatchSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateGeoMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl UpdateGeoMatchSetOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_GEO_MATCH_SET_OUTPUT_SCHEMA
    }

    /// Use this value to query the status of the request with GetChangeTokenStatus.
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

impl fmt::Display for UpdateGeoMatchSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateGeoMatchSetOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_GEO_MATCH_SET_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_GEO_MATCH_SET_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateGeoMatchSetOutput",
    members: &[MemberSchema {
        name: "ChangeToken",
        target: "ChangeToken",
        kind: MemberKind::String,
        required: false,
        constraints: constraints::CHANGE_TOKEN,
    }],
};

/// Output of the `UpdateIPSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateIPSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl UpdateIPSetOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_IP_SET_OUTPUT_SCHEMA
    }

    /// Use this value to query the status of the request with GetChangeTokenStatus.
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

impl fmt::Display for UpdateIPSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateIPSetOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_IP_SET_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_IP_SET_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateIPSetOutput",
    members: &[MemberSchema {
        name: "ChangeToken",
        target: "ChangeToken",
        kind: MemberKind::String,
        required: false,
        constraints: constraints::CHANGE_TOKEN,
    }],
};

/// Output of the `UpdateRegexMatchSet` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRegexMatchSetOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl UpdateRegexMatchSetOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_REGEX_MATCH_SET_OUTPUT_SCHEMA
    }

    /// Use this value to query the status of the request with GetChangeTokenStatus.
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

impl fmt::Display for UpdateRegexMatchSetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateRegexMatchSetOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_REGEX_MATCH_SET_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_REGEX_MATCH_SET_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateRegexMatchSetOutput",
    members: &[MemberSchema {
        name: "ChangeToken",
        target: "ChangeToken",
        kind: MemberKind::String,
        required: false,
        constraints: constraints::CHANGE_TOKEN,
    }],
};
