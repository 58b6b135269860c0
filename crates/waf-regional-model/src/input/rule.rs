//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{
    self, Constraints, ItemSchema, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema,
};
use crate::types::{RateKey, RuleUpdate, Tag};

/// Input of the `CreateRateBasedRule` operation.
///
/// Creates a rate-based rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRateBasedRuleInput {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "RateKey", skip_serializing_if = "Option::is_none")]
    rate_key: Option<RateKey>,
    #[serde(rename = "RateLimit", skip_serializing_if = "Option::is_none")]
    rate_limit: Option<i64>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl CreateRateBasedRuleInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_RATE_BASED_RULE_INPUT_SCHEMA
    }

    /// The `Name` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `MetricName` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Sets `MetricName`; `None` clears it.
    pub fn set_metric_name(&mut self, input: Option<String>) -> &mut Self {
        self.metric_name = input;
        self
    }

    /// Sets `MetricName` and returns the updated value.
    #[must_use]
    pub fn with_metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }

    /// The field that WAF uses to aggregate requests for a rate-based rule.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rate_key(&self) -> Option<&RateKey> {
        self.rate_key.as_ref()
    }

    /// Sets `RateKey`; `None` clears it.
    pub fn set_rate_key(&mut self, input: Option<RateKey>) -> &mut Self {
        self.rate_key = input;
        self
    }

    /// Sets `RateKey` and returns the updated value.
    #[must_use]
    pub fn with_rate_key(mut self, input: impl Into<RateKey>) -> Self {
        self.rate_key = Some(input.into());
        self
    }

    /// The `RateLimit` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rate_limit(&self) -> Option<i64> {
        self.rate_limit
    }

    /// Sets `RateLimit`; `None` clears it.
    pub fn set_rate_limit(&mut self, input: Option<i64>) -> &mut Self {
        self.rate_limit = input;
        self
    }

    /// Sets `RateLimit` and returns the updated value.
    #[must_use]
    pub fn with_rate_limit(mut self, input: i64) -> Self {
        self.rate_limit = Some(input);
        self
    }

    /// The value returned by the most recent call to GetChangeToken.
    ///
    /// Required by the service.
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

    /// The `Tags` member.
    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// Sets `Tags`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_tags(&mut self, input: Option<&[Tag]>) -> &mut Self {
        self.tags = input.map(<[Tag]>::to_vec);
        self
    }

    /// Sets `Tags` and returns the updated value.
    #[must_use]
    pub fn with_tags(mut self, input: &[Tag]) -> Self {
        self.tags = Some(input.to_vec());
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn append_tags(mut self, items: impl IntoIterator<Item = Tag>) -> Self {
        let list = self.tags.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for CreateRateBasedRuleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateRateBasedRuleInput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_RATE_BASED_RULE_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            "RateKey" => schema::value_of(self.rate_key.as_ref()),
            "RateLimit" => schema::value_of(self.rate_limit.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Tags" => schema::value_of(self.tags.as_ref()),
            _ => None,
        }
    }
}

static CREATE_RATE_BASED_RULE_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateRateBasedRuleInput",
    members: &[
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_NAME,
        },
        MemberSchema {
            name: "MetricName",
            target: "MetricName",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::METRIC_NAME,
        },
        MemberSchema {
            name: "RateKey",
            target: "RateKey",
            kind: MemberKind::Enum(RateKey::VALUES),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RateLimit",
            target: "RateLimit",
            kind: MemberKind::Long,
            required: true,
            constraints: constraints::RATE_LIMIT,
        },
        MemberSchema {
            name: "ChangeToken",
            target: "ChangeToken",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::CHANGE_TOKEN,
        },
        MemberSchema {
            name: "Tags",
            target: "TagList",
            kind: MemberKind::List(&ItemSchema {
                target: "Tag",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: constraints::TAG_LIST,
        },
    ],
};

/// Input of the `CreateRuleGroup` operation.
///
/// Creates a rule group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRuleGroupInput {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl CreateRuleGroupInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_RULE_GROUP_INPUT_SCHEMA
    }

    /// The `Name` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `MetricName` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Sets `MetricName`; `None` clears it.
    pub fn set_metric_name(&mut self, input: Option<String>) -> &mut Self {
        self.metric_name = input;
        self
    }

    /// Sets `MetricName` and returns the updated value.
    #[must_use]
    pub fn with_metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }

    /// The value returned by the most recent call to GetChangeToken.
    ///
    /// Required by the service.
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

    /// The `Tags` member.
    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// Sets `Tags`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_tags(&mut self, input: Option<&[Tag]>) -> &mut Self {
        self.tags = input.map(<[Tag]>::to_vec);
        self
    }

    /// Sets `Tags` and returns the updated value.
    #[must_use]
    pub fn with_tags(mut self, input: &[Tag]) -> Self {
        self.tags = Some(input.to_vec());
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn append_tags(mut self, items: impl IntoIterator<Item = Tag>) -> Self {
        let list = self.tags.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for CreateRuleGroupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateRuleGroupInput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_RULE_GROUP_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Tags" => schema::value_of(self.tags.as_ref()),
            _ => None,
        }
    }
}

static CREATE_RULE_GROUP_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateRuleGroupInput",
    members: &[
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_NAME,
        },
        MemberSchema {
            name: "MetricName",
            target: "MetricName",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::METRIC_NAME,
        },
        MemberSchema {
            name: "ChangeToken",
            target: "ChangeToken",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::CHANGE_TOKEN,
        },
        MemberSchema {
            name: "Tags",
            target: "TagList",
            kind: MemberKind::List(&ItemSchema {
                target: "Tag",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: constraints::TAG_LIST,
        },
    ],
};

/// Input of the `CreateRule` operation.
///
/// Creates a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRuleInput {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl CreateRuleInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_RULE_INPUT_SCHEMA
    }

    /// The `Name` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets `Name`; `None` clears it.
    pub fn set_name(&mut self, input: Option<String>) -> &mut Self {
        self.name = input;
        self
    }

    /// Sets `Name` and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, input: impl Into<String>) -> Self {
        self.name = Some(input.into());
        self
    }

    /// The `MetricName` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    /// Sets `MetricName`; `None` clears it.
    pub fn set_metric_name(&mut self, input: Option<String>) -> &mut Self {
        self.metric_name = input;
        self
    }

    /// Sets `MetricName` and returns the updated value.
    #[must_use]
    pub fn with_metric_name(mut self, input: impl Into<String>) -> Self {
        self.metric_name = Some(input.into());
        self
    }

    /// The value returned by the most recent call to GetChangeToken.
    ///
    /// Required by the service.
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

    /// The `Tags` member.
    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// Sets `Tags`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_tags(&mut self, input: Option<&[Tag]>) -> &mut Self {
        self.tags = input.map(<[Tag]>::to_vec);
        self
    }

    /// Sets `Tags` and returns the updated value.
    #[must_use]
    pub fn with_tags(mut self, input: &[Tag]) -> Self {
        self.tags = Some(input.to_vec());
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn append_tags(mut self, items: impl IntoIterator<Item = Tag>) -> Self {
        let list = self.tags.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for CreateRuleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateRuleInput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_RULE_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Tags" => schema::value_of(self.tags.as_ref()),
            _ => None,
        }
    }
}

static CREATE_RULE_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateRuleInput",
    members: &[
        MemberSchema {
            name: "Name",
            target: "ResourceName",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_NAME,
        },
        MemberSchema {
            name: "MetricName",
            target: "MetricName",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::METRIC_NAME,
        },
        MemberSchema {
            name: "ChangeToken",
            target: "ChangeToken",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::CHANGE_TOKEN,
        },
        MemberSchema {
            name: "Tags",
            target: "TagList",
            kind: MemberKind::List(&ItemSchema {
                target: "Tag",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: constraints::TAG_LIST,
        },
    ],
};

/// Input of the `GetRateBasedRule` operation.
///
/// Returns a rate-based rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetRateBasedRuleInput {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
}

impl GetRateBasedRuleInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_RATE_BASED_RULE_INPUT_SCHEMA
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
}

impl fmt::Display for GetRateBasedRuleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetRateBasedRuleInput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_RATE_BASED_RULE_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            _ => None,
        }
    }
}

static GET_RATE_BASED_RULE_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetRateBasedRuleInput",
    members: &[MemberSchema {
        name: "RuleId",
        target: "ResourceId",
        kind: MemberKind::String,
        required: true,
        constraints: constraints::RESOURCE_ID,
    }],
};

/// Input of the `UpdateRateBasedRule` operation.
///
/// Inserts or deletes predicates in a rate-based rule, or changes its rate limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRateBasedRuleInput {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    updates: Option<Vec<RuleUpdate>>,
    #[serde(rename = "RateLimit", skip_serializing_if = "Option::is_none")]
    rate_limit: Option<i64>,
}

impl UpdateRateBasedRuleInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_RATE_BASED_RULE_INPUT_SCHEMA
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

    /// The value returned by the most recent call to GetChangeToken.
    ///
    /// Required by the service.
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

    /// The `Updates` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn updates(&self) -> Option<&[RuleUpdate]> {
        self.updates.as_deref()
    }

    /// Sets `Updates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_updates(&mut self, input: Option<&[RuleUpdate]>) -> &mut Self {
        self.updates = input.map(<[RuleUpdate]>::to_vec);
        self
    }

    /// Sets `Updates` and returns the updated value.
    #[must_use]
    pub fn with_updates(mut self, input: &[RuleUpdate]) -> Self {
        self.updates = Some(input.to_vec());
        self
    }

    /// Appends to `Updates`, creating the list if it is unset.
    #[must_use]
    pub fn append_updates(mut self, items: impl IntoIterator<Item = RuleUpdate>) -> Self {
        let list = self.updates.get_or_insert_default();
        list.extend(items);
        self
    }

    /// The `RateLimit` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn rate_limit(&self) -> Option<i64> {
        self.rate_limit
    }

    /// Sets `RateLimit`; `None` clears it.
    pub fn set_rate_limit(&mut self, input: Option<i64>) -> &mut Self {
        self.rate_limit = input;
        self
    }

    /// Sets `RateLimit` and returns the updated value.
    #[must_use]
    pub fn with_rate_limit(mut self, input: i64) -> Self {
        self.rate_limit = Some(input);
        self
    }
}

impl fmt::Display for UpdateRateBasedRuleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateRateBasedRuleInput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_RATE_BASED_RULE_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Updates" => schema::value_of(self.updates.as_ref()),
            "RateLimit" => schema::value_of(self.rate_limit.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_RATE_BASED_RULE_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateRateBasedRuleInput",
    members: &[
        MemberSchema {
            name: "RuleId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "ChangeToken",
            target: "ChangeToken",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::CHANGE_TOKEN,
        },
        MemberSchema {
            name: "Updates",
            target: "RuleUpdates",
            kind: MemberKind::List(&ItemSchema {
                target: "RuleUpdate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "RateLimit",
            target: "RateLimit",
            kind: MemberKind::Long,
            required: true,
            constraints: constraints::RATE_LIMIT,
        },
    ],
};

/// Input of the `UpdateRule` operation.
///
/// Inserts or deletes predicates in a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRuleInput {
    #[serde(rename = "RuleId", skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    updates: Option<Vec<RuleUpdate>>,
}

impl UpdateRuleInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_RULE_INPUT_SCHEMA
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

    /// The value returned by the most recent call to GetChangeToken.
    ///
    /// Required by the service.
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

    /// The `Updates` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn updates(&self) -> Option<&[RuleUpdate]> {
        self.updates.as_deref()
    }

    /// Sets `Updates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_updates(&mut self, input: Option<&[RuleUpdate]>) -> &mut Self {
        self.updates = input.map(<[RuleUpdate]>::to_vec);
        self
    }

    /// Sets `Updates` and returns the updated value.
    #[must_use]
    pub fn with_updates(mut self, input: &[RuleUpdate]) -> Self {
        self.updates = Some(input.to_vec());
        self
    }

    /// Appends to `Updates`, creating the list if it is unset.
    #[must_use]
    pub fn append_updates(mut self, items: impl IntoIterator<Item = RuleUpdate>) -> Self {
        let list = self.updates.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for UpdateRuleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateRuleInput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_RULE_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RuleId" => schema::value_of(self.rule_id.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Updates" => schema::value_of(self.updates.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_RULE_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateRuleInput",
    members: &[
        MemberSchema {
            name: "RuleId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "ChangeToken",
            target: "ChangeToken",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::CHANGE_TOKEN,
        },
        MemberSchema {
            name: "Updates",
            target: "RuleUpdates",
            kind: MemberKind::List(&ItemSchema {
                target: "RuleUpdate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: Constraints::NONE,
        },
    ],
};
