//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{
    self, Constraints, ItemSchema, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema,
};
use crate::types::{Tag, WafAction, WebACLUpdate};

/// Input of the `AssociateWebACL` operation.
///
/// Associates a web ACL with a regional resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociateWebACLInput {
    #[serde(rename = "WebACLId", skip_serializing_if = "Option::is_none")]
    web_acl_id: Option<String>,
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
}

impl AssociateWebACLInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &ASSOCIATE_WEB_ACL_INPUT_SCHEMA
    }

    /// The `WebACLId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn web_acl_id(&self) -> Option<&str> {
        self.web_acl_id.as_deref()
    }

    /// Sets `WebACLId`; `None` clears it.
    pub fn set_web_acl_id(&mut self, input: Option<String>) -> &mut Self {
        self.web_acl_id = input;
        self
    }

    /// Sets `WebACLId` and returns the updated value.
    #[must_use]
    pub fn with_web_acl_id(mut self, input: impl Into<String>) -> Self {
        self.web_acl_id = Some(input.into());
        self
    }

    /// ARN of the Application Load Balancer or API Gateway stage to protect.
    ///
    /// Required by the service.
    #[must_use]
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    /// Sets `ResourceArn`; `None` clears it.
    pub fn set_resource_arn(&mut self, input: Option<String>) -> &mut Self {
        self.resource_arn = input;
        self
    }

    /// Sets `ResourceArn` and returns the updated value.
    #[must_use]
    pub fn with_resource_arn(mut self, input: impl Into<String>) -> Self {
        self.resource_arn = Some(input.into());
        self
    }
}

impl fmt::Display for AssociateWebACLInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for AssociateWebACLInput {
    fn schema(&self) -> &'static ShapeSchema {
        &ASSOCIATE_WEB_ACL_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "WebACLId" => schema::value_of(self.web_acl_id.as_ref()),
            "ResourceArn" => schema::value_of(self.resource_arn.as_ref()),
            _ => None,
        }
    }
}

static ASSOCIATE_WEB_ACL_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "AssociateWebACLInput",
    members: &[
        MemberSchema {
            name: "WebACLId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "ResourceArn",
            target: "ResourceArn",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ARN,
        },
    ],
};

/// Input of the `CreateWebACL` operation.
///
/// Creates a web ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateWebACLInput {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "DefaultAction", skip_serializing_if = "Option::is_none")]
    default_action: Option<WafAction>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl CreateWebACLInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &CREATE_WEB_ACL_INPUT_SCHEMA
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

    /// The action taken when a request matches a rule or no rule matches.
    ///
    /// Required by the service.
    #[must_use]
    pub fn default_action(&self) -> Option<&WafAction> {
        self.default_action.as_ref()
    }

    /// Sets `DefaultAction`; `None` clears it.
    pub fn set_default_action(&mut self, input: Option<WafAction>) -> &mut Self {
        self.default_action = input;
        self
    }

    /// Sets `DefaultAction` and returns the updated value.
    #[must_use]
    pub fn with_default_action(mut self, input: WafAction) -> Self {
        self.default_action = Some(input);
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

impl fmt::Display for CreateWebACLInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for CreateWebACLInput {
    fn schema(&self) -> &'static ShapeSchema {
        &CREATE_WEB_ACL_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "Name" => schema::value_of(self.name.as_ref()),
            "MetricName" => schema::value_of(self.metric_name.as_ref()),
            "DefaultAction" => schema::value_of(self.default_action.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Tags" => schema::value_of(self.tags.as_ref()),
            _ => None,
        }
    }
}

static CREATE_WEB_ACL_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "CreateWebACLInput",
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
            name: "DefaultAction",
            target: "WafAction",
            kind: MemberKind::Structure,
            required: true,
            constraints: Constraints::NONE,
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

/// Input of the `DisassociateWebACL` operation.
///
/// Removes a web ACL from a regional resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisassociateWebACLInput {
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
}

impl DisassociateWebACLInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &DISASSOCIATE_WEB_ACL_INPUT_SCHEMA
    }

    /// The `ResourceArn` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    /// Sets `ResourceArn`; `None` clears it.
    pub fn set_resource_arn(&mut self, input: Option<String>) -> &mut Self {
        self.resource_arn = input;
        self
    }

    /// Sets `ResourceArn` and returns the updated value.
    #[must_use]
    pub fn with_resource_arn(mut self, input: impl Into<String>) -> Self {
        self.resource_arn = Some(input.into());
        self
    }
}

impl fmt::Display for DisassociateWebACLInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for DisassociateWebACLInput {
    fn schema(&self) -> &'static ShapeSchema {
        &DISASSOCIATE_WEB_ACL_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ResourceArn" => schema::value_of(self.resource_arn.as_ref()),
            _ => None,
        }
    }
}

static DISASSOCIATE_WEB_ACL_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "DisassociateWebACLInput",
    members: &[MemberSchema {
        name: "ResourceArn",
        target: "ResourceArn",
        kind: MemberKind::String,
        required: true,
        constraints: constraints::RESOURCE_ARN,
    }],
};

/// Input of the `GetWebACLForResource` operation.
///
/// Returns the web ACL associated with a regional resource, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetWebACLForResourceInput {
    #[serde(rename = "ResourceArn", skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
}

impl GetWebACLForResourceInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_WEB_ACL_FOR_RESOURCE_INPUT_SCHEMA
    }

    /// The `ResourceArn` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    /// Sets `ResourceArn`; `None` clears it.
    pub fn set_resource_arn(&mut self, input: Option<String>) -> &mut Self {
        self.resource_arn = input;
        self
    }

    /// Sets `ResourceArn` and returns the updated value.
    #[must_use]
    pub fn with_resource_arn(mut self, input: impl Into<String>) -> Self {
        self.resource_arn = Some(input.into());
        self
    }
}

impl fmt::Display for GetWebACLForResourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetWebACLForResourceInput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_WEB_ACL_FOR_RESOURCE_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "ResourceArn" => schema::value_of(self.resource_arn.as_ref()),
            _ => None,
        }
    }
}

static GET_WEB_ACL_FOR_RESOURCE_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetWebACLForResourceInput",
    members: &[MemberSchema {
        name: "ResourceArn",
        target: "ResourceArn",
        kind: MemberKind::String,
        required: true,
        constraints: constraints::RESOURCE_ARN,
    }],
};

/// Input of the `UpdateWebACL` operation.
///
/// Inserts or deletes activated rules in a web ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateWebACLInput {
    #[serde(rename = "WebACLId", skip_serializing_if = "Option::is_none")]
    web_acl_id: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    updates: Option<Vec<WebACLUpdate>>,
    #[serde(rename = "DefaultAction", skip_serializing_if = "Option::is_none")]
    default_action: Option<WafAction>,
}

impl UpdateWebACLInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_WEB_ACL_INPUT_SCHEMA
    }

    /// The `WebACLId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn web_acl_id(&self) -> Option<&str> {
        self.web_acl_id.as_deref()
    }

    /// Sets `WebACLId`; `None` clears it.
    pub fn set_web_acl_id(&mut self, input: Option<String>) -> &mut Self {
        self.web_acl_id = input;
        self
    }

    /// Sets `WebACLId` and returns the updated value.
    #[must_use]
    pub fn with_web_acl_id(mut self, input: impl Into<String>) -> Self {
        self.web_acl_id = Some(input.into());
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
    #[must_use]
    pub fn updates(&self) -> Option<&[WebACLUpdate]> {
        self.updates.as_deref()
    }

    /// Sets `Updates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_updates(&mut self, input: Option<&[WebACLUpdate]>) -> &mut Self {
        self.updates = input.map(<[WebACLUpdate]>::to_vec);
        self
    }

    /// Sets `Updates` and returns the updated value.
    #[must_use]
    pub fn with_updates(mut self, input: &[WebACLUpdate]) -> Self {
        self.updates = Some(input.to_vec());
        self
    }

    /// Appends to `Updates`, creating the list if it is unset.
    #[must_use]
    pub fn append_updates(mut self, items: impl IntoIterator<Item = WebACLUpdate>) -> Self {
        let list = self.updates.get_or_insert_default();
        list.extend(items);
        self
    }

    /// The action taken when a request matches a rule or no rule matches.
    #[must_use]
    pub fn default_action(&self) -> Option<&WafAction> {
        self.default_action.as_ref()
    }

    /// Sets `DefaultAction`; `None` clears it.
    pub fn set_default_action(&mut self, input: Option<WafAction>) -> &mut Self {
        self.default_action = input;
        self
    }

    /// Sets `DefaultAction` and returns the updated value.
    #[must_use]
    pub fn with_default_action(mut self, input: WafAction) -> Self {
        self.default_action = Some(input);
        self
    }
}

impl fmt::Display for UpdateWebACLInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateWebACLInput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_WEB_ACL_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "WebACLId" => schema::value_of(self.web_acl_id.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Updates" => schema::value_of(self.updates.as_ref()),
            "DefaultAction" => schema::value_of(self.default_action.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_WEB_ACL_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateWebACLInput",
    members: &[
        MemberSchema {
            name: "WebACLId",
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
            target: "WebACLUpdates",
            kind: MemberKind::List(&ItemSchema {
                target: "WebACLUpdate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "DefaultAction",
            target: "WafAction",
            kind: MemberKind::Structure,
            required: false,
            constraints: Constraints::NONE,
        },
    ],
};
