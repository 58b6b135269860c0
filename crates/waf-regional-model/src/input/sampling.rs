//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{self, Constraints, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema};
use crate::types::TimeWindow;

/// Input of the `GetSampledRequests` operation.
///
/// Returns a sample of the web requests that matched a rule within a time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetSampledRequestsInput {
    #[serde(rename = "WebAclId", skip_serializing_if = "Option::is_none")]
    web_acl_id: Option<String>,
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    #[serde(rename = "TimeWindow", skip_serializing_if = "Option::is_none")]
    time_window: Option<TimeWindow>,
    #[serde(rename = "MaxItems", skip_serializing_if = "Option::is_none")]
    max_items: Option<i64>,
}

impl GetSampledRequestsInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_SAMPLED_REQUESTS_INPUT_SCHEMA
    }

    /// The `WebAclId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn web_acl_id(&self) -> Option<&str> {
        self.web_acl_id.as_deref()
    }

    /// Sets `WebAclId`; `None` clears it.
    pub fn set_web_acl_id(&mut self, input: Option<String>) -> &mut Self {
        self.web_acl_id = input;
        self
    }

    /// Sets `WebAclId` and returns the updated value.
    #[must_use]
    pub fn with_web_acl_id(mut self, input: impl Into<String>) -> Self {
        self.web_acl_id = Some(input.into());
        self
    }

    /// The `RuleId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    /// Sets `RuleId`; `None` clears it.
    pub fn set_rule_id(&mut self, input: Option<String>) -> &mut Self {
        self.rule_id = input;
        self
    }

    /// Sets `RuleId` and returns the updated value.
    #[must_use]
    pub fn with_rule_id(mut self, input: impl Into<String>) -> Self {
        self.rule_id = Some(input.into());
        self
    }

    /// A time range of up to three hours within the previous three hours.
    ///
    /// Required by the service.
    #[must_use]
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    /// Sets `TimeWindow`; `None` clears it.
    pub fn set_time_window(&mut self, input: Option<TimeWindow>) -> &mut Self {
        self.time_window = input;
        self
    }

    /// Sets `TimeWindow` and returns the updated value.
    #[must_use]
    pub fn with_time_window(mut self, input: TimeWindow) -> Self {
        self.time_window = Some(input);
        self
    }

    /// Number of requests to return, from 1 to 500.
    ///
    /// Required by the service.
    #[must_use]
    pub fn max_items(&self) -> Option<i64> {
        self.max_items
    }

    /// Sets `MaxItems`; `None` clears it.
    pub fn set_max_items(&mut self, input: Option<i64>) -> &mut Self {
        self.max_items = input;
        self
    }

    /// Sets `MaxItems` and returns the updated value.
    #[must_use]
    pub fn with_max_items(mut self, input: i64) -> Self {
        self.max_items = Some(input);
        self
    }
}

impl fmt::Display for GetSampledRequestsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetSampledRequestsInput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_SAMPLED_REQUESTS_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "WebAclId" => schema::value_of(self.web_acl_id.as_ref()),
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            "TimeWindow" => schema::value_of(self.time_window.as_ref()),
            "MaxItems" => schema::value_of(self.max_items.as_ref()),
            _ => None,
        }
    }
}

static GET_SAMPLED_REQUESTS_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetSampledRequestsInput",
    members: &[
        MemberSchema {
            name: "WebAclId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "RuleId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "TimeWindow",
            target: "TimeWindow",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "MaxItems",
            target: "GetSampledRequestsMaxItems",
            kind: MemberKind::Long,
            required: true,
            constraints: constraints::GET_SAMPLED_REQUESTS_MAX_ITEMS,
        },
    ],
};
