//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{self, Constraints, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema};
use crate::types::{RateBasedRule, Rule, RuleGroup};

/// Output of the `CreateRateBasedRule` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRateBasedRuleOutput {
    #[serde(rename = "Rule", skip_serializing_if = "Option::is_none")]
    rule: Option<RateBasedRule>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl CreateRateBasedRuleOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_RATE_BASED_RULE_OUTPUT_SCHEMA
    }

    /// A rule that counts requests per originating IP address and acts when the rate exceeds RateLimit.
    #[must_use]
    pub fn rule(&self) -> Option<&RateBasedRule> {
        self.rule.as_ref()
    }

    /// Sets `Rule`; `None` clears it.
    pub fn set_rule(&mut self, input: Option<RateBasedRule>) -> &mut Self {
        self.rule = input;
        self
    }

    /// Sets `Rule` and returns the updated value.
    #[must_use]
    pub fn with_rule(mut self, input: RateBasedRule) -> Self {
        self.rule = Some(input);
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

impl fmt::Display for CreateRateBasedRuleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateRateBasedRuleOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_RATE_BASED_RULE_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Rule" => schema::value_of(self.rule.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static CREATE_RATE_BASED_RULE_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateRateBasedRuleOutput",
    members: &[
        MemberSchema {
            name: "Rule",
            target: "RateBasedRule",
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

/// Output of the `CreateRuleGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRuleGroupOutput {
    #[serde(rename = "RuleGroup", skip_serializing_if = "Option::is_none")]
    rule_group: Option<RuleGroup>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl CreateRuleGroupOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_RULE_GROUP_OUTPUT_SCHEMA
    }

    /// A collection of predefined rules added to a web ACL as a unit.
    #[must_use]
    pub fn rule_group(&self) -> Option<&RuleGroup> {
        self.rule_group.as_ref()
    }

    /// Sets `RuleGroup`; `None` clears it.
    pub fn set_rule_group(&mut self, input: Option<RuleGroup>) -> &mut Self {
        self.rule_group = input;
        self
    }

    /// Sets `RuleGroup` and returns the updated value.
    #[must_use]
    pub fn with_rule_group(mut self, input: RuleGroup) -> Self {
        self.rule_group = Some(input);
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

impl fmt::Display for CreateRuleGroupOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateRuleGroupOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_RULE_GROUP_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleGroup" => schema::value_of(self.rule_group.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static CREATE_RULE_GROUP_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateRuleGroupOutput",
    members: &[
        MemberSchema {
            name: "RuleGroup",
            target: "RuleGroup",
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

/// Output of the `CreateRule` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRuleOutput {
    #[serde(rename = "Rule", skip_serializing_if = "Option::is_none")]
    rule: Option<Rule>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl CreateRuleOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_RULE_OUTPUT_SCHEMA
    }

    /// A combination of predicates that identifies the web requests to allow, block, or count.
    #[must_use]
    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    /// Sets `Rule`; `None` clears it.
    pub fn set_rule(&mut self, input: Option<Rule>) -> &mut Self {
        self.rule = input;
        self
    }

    /// Sets `Rule` and returns the updated value.
    #[must_use]
    pub fn with_rule(mut self, input: Rule) -> Self {
        self.rule = Some(input);
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

impl fmt::Display for CreateRuleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateRuleOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_RULE_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Rule" => schema::value_of(self.rule.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static CREATE_RULE_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateRuleOutput",
    members: &[
        MemberSchema {
            name: "Rule",
            target: "Rule",
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

/// Output of the `GetRateBasedRule` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetRateBasedRuleOutput {
    #[serde(rename = "Rule", skip_serializing_if = "Option::is_none")]
    rule: Option<RateBasedRule>,
}

impl GetRateBasedRuleOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_RATE_BASED_RULE_OUTPUT_SCHEMA
    }

    /// A rule that counts requests per originating IP address and acts when the rate exceeds RateLimit.
    #[must_use]
    pub fn rule(&self) -> Option<&RateBasedRule> {
        self.rule.as_ref()
    }

    /// Sets `Rule`; `None` clears it.
    pub fn set_rule(&mut self, input: Option<RateBasedRule>) -> &mut Self {
        self.rule = input;
        self
    }

    /// Sets `Rule` and returns the updated value.
    #[must_use]
    pub fn with_rule(mut self, input: RateBasedRule) -> Self {
        self.rule = Some(input);
        self
    }
}

impl fmt::Display for GetRateBasedRuleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetRateBasedRuleOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_RATE_BASED_RULE_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Rule" => schema::value_of(self.rule.as_ref()),
            _ => None,
        }
    }
}

static GET_RATE_BASED_RULE_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetRateBasedRuleOutput",
    members: &[MemberSchema {
        name: "Rule",
        target: "RateBasedRule",
        kind: MemberKind::Structure,
        required: false,
        constraints: Constraints::NONE,
    }],
};

/// Output of the `UpdateRateBasedRule` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRateBasedRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl UpdateRateBasedRuleOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_RATE_BASED_RULE_OUTPUT_SCHEMA
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

impl fmt::Display for UpdateRateBasedRuleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateRateBasedRuleOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_RATE_BASED_RULE_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_RATE_BASED_RULE_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateRateBasedRuleOutput",
    members: &[MemberSchema {
        name: "ChangeToken",
        target: "ChangeToken",
        kind: MemberKind::String,
        required: false,
        constraints: constraints::CHANGE_TOKEN,
    }],
};

/// Output of the `UpdateRule` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRuleOutput {
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl UpdateRuleOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_RULE_OUTPUT_SCHEMA
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

impl fmt::Display for UpdateRuleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateRuleOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_RULE_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_RULE_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateRuleOutput",
    members: &[MemberSchema {
        name: "ChangeToken",
        target: "ChangeToken",
        kind: MemberKind::String,
        required: false,
        constraints: constraints::CHANGE_TOKEN,
    }],
};
