//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{self, Constraints, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema};
use crate::types::{WebACL, WebACLSummary};

/// Output of the `AssociateWebACL` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociateWebACLOutput {}

impl AssociateWebACLOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &ASSOCIATE_WEB_ACL_OUTPUT_SCHEMA
    }
}

impl fmt::Display for AssociateWebACLOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for AssociateWebACLOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &ASSOCIATE_WEB_ACL_OUTPUT_SCHEMA
    }

    fn member_value(&self, _member: &str) -> Option<MemberValue<'_>> {
        None
    }
}

static ASSOCIATE_WEB_ACL_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "AssociateWebACLOutput",
    members: &[],
};

/// Output of the `CreateWebACL` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateWebACLOutput {
    #[serde(rename = "WebACL", skip_serializing_if = "Option::is_none")]
    web_acl: Option<WebACL>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl CreateWebACLOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_WEB_ACL_OUTPUT_SCHEMA
    }

    /// Rules, their actions, and the default action that together inspect web requests.
    #[must_use]
    pub fn web_acl(&self) -> Option<&WebACL> {
        self.web_acl.as_ref()
    }

    /// Sets `WebACL`; `None` clears it.
    pub fn set_web_acl(&mut self, input: Option<WebACL>) -> &mut Self {
        self.web_acl = input;
        self
    }

    /// Sets `WebACL` and returns the updated value.
    #[must_use]
    pub fn with_web_acl(mut self, input: WebACL) -> Self {
        self.web_acl = Some(input);
        self
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

impl fmt::Display for CreateWebACLOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateWebACLOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_WEB_ACL_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "WebACL" => schema::value_of(self.web_acl.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static CREATE_WEB_ACL_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateWebACLOutput",
    members: &[
        MemberSchema {
            name: "WebACL",
            target: "WebACL",
            kind: MemberKind::Structure,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "ChangeToken",
            target: "ChangeToken",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::CHANGE_TOKEN,
        },
    ],
};

/// Output of the `DisassociateWebACL` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisassociateWebACLOutput {}

impl DisassociateWebACLOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &DISASSOCIATE_WEB_ACL_OUTPUT_SCHEMA
    }
}

impl fmt::Display for DisassociateWebACLOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for DisassociateWebACLOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &DISASSOCIATE_WEB_ACL_OUTPUT_SCHEMA
    }

    fn member_value(&self, _member: &str) -> Option<MemberValue<'_>> {
        None
    }
}

static DISASSOCIATE_WEB_ACL_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "DisassociateWebACLOutput",
    members: &[],
};

/// Output of the `GetWebACLForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetWebACLForResourceOutput {
    #[serde(rename = "WebACLSummary", skip_serializing_if = "Option::is_none")]
    web_acl_summary: Option<WebACLSummary>,
}

impl GetWebACLForResourceOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_WEB_ACL_FOR_RESOURCE_OUTPUT_SCHEMA
    }

    /// Identifier and name of a web ACL.
    #[must_use]
    pub fn web_acl_summary(&self) -> Option<&WebACLSummary> {
        self.web_acl_summary.as_ref()
    }

    /// Sets `WebACLSummary`; `None` clears it.
    pub fn set_web_acl_summary(&mut self, input: Option<WebACLSummary>) -> &mut Self {
        self.web_acl_summary = input;
        self
    }

    /// Sets `WebACLSummary` and returns the updated value.
    #[must_use]
    pub fn with_web_acl_summary(mut self, input: WebACLSummary) -> Self {
        self.web_acl_summary = Some(input);
        self
    }
}

impl fmt::Display for GetWebACLForResourceOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetWebACLForResourceOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_WEB_ACL_FOR_RESOURCE_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "WebACLSummary" => schema::value_of(self.web_acl_summary.as_ref()),
            _ => None,
        }
    }
}

static GET_WEB_ACL_FOR_RESOURCE_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetWebACLForResourceOutput",
    members: &[MemberSchema {
        name: "WebACLSummary",
        target: "WebACLSummary",
        kind: MemberKind::Structure,
        required: false,
        constraints: Constraints::NONE,
    }],
};

/// Output of the `UpdateWebACL` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateWebACLOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl UpdateWebACLOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_WEB_ACL_OUTPUT_SCHEMA
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

impl fmt::Display for UpdateWebACLOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateWebACLOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_WEB_ACL_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_WEB_ACL_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateWebACLOutput",
    members: &[MemberSchema {
        name: "ChangeToken",
        target: "ChangeToken",
        kind: MemberKind::String,
        required: false,
        constraints: constraints::CHANGE_TOKEN,
    }],
};
