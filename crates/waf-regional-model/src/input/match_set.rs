//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{
    self, Constraints, ItemSchema, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema,
};
use crate::types::{GeoMatchSetUpdate, IPSetUpdate, RegexMatchSetUpdate};

/// Input of the `UpdateGeoMatchSet` operation.
///
/// Inserts or deletes countries in a geo match set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateGeoMatchSetInput {
    #[serde(rename = "GeoMatchSetId", skip_serializing_if = "Option::is_none")]
    geo_match_set_id: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    updates: Option<Vec<GeoMatchSetUpdate>>,
}

impl UpdateGeoMatchSetInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_GEO_MATCH_SET_INPUT_SCHEMA
    }

    /// The `GeoMatchSetId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn geo_match_set_id(&self) -> Option<&str> {
        self.geo_match_set_id.as_deref()
    }

    /// Sets `GeoMatchSetId`; `None` clears it.
    pub fn set_geo_match_set_id(&mut self, input: Option<String>) -> &mut Self {
        self.geo_match_set_id = input;
        self
    }

    /// Sets `GeoMatchSetId` and returns the updated value.
    #[must_use]
    pub fn with_geo_match_set_id(mut self, input: impl Into<String>) -> Self {
        self.geo_match_set_id = Some(input.into());
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
    pub fn updates(&self) -> Option<&[GeoMatchSetUpdate]> {
        self.updates.as_deref()
    }

    /// Sets `Updates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_updates(&mut self, input: Option<&[GeoMatchSetUpdate]>) -> &mut Self {
        self.updates = input.map(<[GeoMatchSetUpdate]>::to_vec);
        self
    }

    /// Sets `Updates` and returns the updated value.
    #[must_use]
    pub fn with_updates(mut self, input: &[GeoMatchSetUpdate]) -> Self {
        self.updates = Some(input.to_vec());
        self
    }

    /// Appends to `Updates`, creating the list if it is unset.
    #[must_use]
    pub fn append_updates(mut self, items: impl IntoIterator<Item = GeoMatchSetUpdate>) -> Self {
        let list = self.updates.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for UpdateGeoMatchSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateGeoMatchSetInput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_GEO_MATCH_SET_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "GeoMatchSetId" => schema::value_of(self.geo_match_set_id.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Updates" => schema::value_of(self.updates.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_GEO_MATCH_SET_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateGeoMatchSetInput",
    members: &[
        MemberSchema {
            name: "GeoMatchSetId",
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
            target: "GeoMatchSetUpdates",
            kind: MemberKind::List(&ItemSchema {
                target: "GeoMatchSetUpdate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: constraints::GEO_MATCH_SET_UPDATES,
        },
    ],
};

/// Input of the `UpdateIPSet` operation.
///
/// Inserts or deletes address ranges in an IP set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateIPSetInput {
    #[serde(rename = "IPSetId", skip_serializing_if = "Option::is_none")]
    ip_set_id: Option<String>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    updates: Option<Vec<IPSetUpdate>>,
}

impl UpdateIPSetInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_IP_SET_INPUT_SCHEMA
    }

    /// The `IPSetId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn ip_set_id(&self) -> Option<&str> {
        self.ip_set_id.as_deref()
    }

    /// Sets `IPSetId`; `None` clears it.
    pub fn set_ip_set_id(&mut self, input: Option<String>) -> &mut Self {
        self.ip_set_id = input;
        self
    }

    /// Sets `IPSetId` and returns the updated value.
    #[must_use]
    pub fn with_ip_set_id(mut self, input: impl Into<String>) -> Self {
        self.ip_set_id = Some(input.into());
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
    pub fn updates(&self) -> Option<&[IPSetUpdate]> {
        self.updates.as_deref()
    }

    /// Sets `Updates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_updates(&mut self, input: Option<&[IPSetUpdate]>) -> &mut Self {
        self.updates = input.map(<[IPSetUpdate]>::to_vec);
        self
    }

    /// Sets `Updates` and returns the updated value.
    #[must_use]
    pub fn with_updates(mut self, input: &[IPSetUpdate]) -> Self {
        self.updates = Some(input.to_vec());
        self
    }

    /// Appends to `Updates`, creating the list if it is unset.
    #[must_use]
    pub fn append_updates(mut self, items: impl IntoIterator<Item = IPSetUpdate>) -> Self {
        let list = self.updates.get_or_insert_default();
        list.extend(items);
        self
    }
}

impl fmt::Display for UpdateIPSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateIPSetInput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_IP_SET_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "IPSetId" => schema::value_of(self.ip_set_id.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            "Updates" => schema::value_of(self.updates.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_IP_SET_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateIPSetInput",
    members: &[
        MemberSchema {
            name: "IPSetId",
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
            target: "IPSetUpdates",
            kind: MemberKind::List(&ItemSchema {
                target: "IPSetUpdate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: constraints::IP_SET_UPDATES,
        },
    ],
};

/// Input of the `UpdateRegexMatchSet` operation.
///
/// Inserts or deletes regex match tuples in a regex match set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRegexMatchSetInput {
    #[serde(rename = "RegexMatchSetId", skip_serializing_if = "Option::is_none")]
    regex_match_set_id: Option<String>,
    #[serde(rename = "Updates", skip_serializing_if = "Option::is_none")]
    updates: Option<Vec<RegexMatchSetUpdate>>,
    #[serde(rename = "ChangeToken", skip_serializing_if = "Option::is_none")]
    change_token: Option<String>,
}

impl UpdateRegexMatchSetInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &UPDATE_REGEX_MATCH_SET_INPUT_SCHEMA
    }

    /// The `RegexMatchSetId` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn regex_match_set_id(&self) -> Option<&str> {
        self.regex_match_set_id.as_deref()
    }

    /// Sets `RegexMatchSetId`; `None` clears it.
    pub fn set_regex_match_set_id(&mut self, input: Option<String>) -> &mut Self {
        self.regex_match_set_id = input;
        self
    }

    /// Sets `RegexMatchSetId` and returns the updated value.
    #[must_use]
    pub fn with_regex_match_set_id(mut self, input: impl Into<String>) -> Self {
        self.regex_match_set_id = Some(input.into());
        self
    }

    /// The `Updates` member.
    ///
    /// Required by the service.
    #[must_use]
    pub fn updates(&self) -> Option<&[RegexMatchSetUpdate]> {
        self.updates.as_deref()
    }

    /// Sets `Updates`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_updates(&mut self, input: Option<&[RegexMatchSetUpdate]>) -> &mut Self {
        self.updates = input.map(<[RegexMatchSetUpdate]>::to_vec);
        self
    }

    /// Sets `Updates` and returns the updated value.
    #[must_use]
    pub fn with_updates(mut self, input: &[RegexMatchSetUpdate]) -> Self {
        self.updates = Some(input.to_vec());
        self
    }

    /// Appends to `Updates`, creating the list if it is unset.
    #[must_use]
    pub fn append_updates(mut self, items: impl IntoIterator<Item = RegexMatchSetUpdate>) -> Self {
        let list = self.updates.get_or_insert_default();
        list.extend(items);
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
}

impl fmt::Display for UpdateRegexMatchSetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for UpdateRegexMatchSetInput {
    fn schema(&self) -> &'static ShapeSchema {
        &UPDATE_REGEX_MATCH_SET_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "RegexMatchSetId" => schema::value_of(self.regex_match_set_id.as_ref()),
            "Updates" => schema::value_of(self.updates.as_ref()),
            "ChangeToken" => schema::value_of(self.change_token.as_ref()),
            _ => None,
        }
    }
}

static UPDATE_REGEX_MATCH_SET_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "UpdateRegexMatchSetInput",
    members: &[
        MemberSchema {
            name: "RegexMatchSetId",
            target: "ResourceId",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::RESOURCE_ID,
        },
        MemberSchema {
            name: "Updates",
            target: "RegexMatchSetUpdates",
            kind: MemberKind::List(&ItemSchema {
                target: "RegexMatchSetUpdate",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: true,
            constraints: constraints::REGEX_MATCH_SET_UPDATES,
        },
        MemberSchema {
            name: "ChangeToken",
            target: "ChangeToken",
            kind: MemberKind::String,
            required: true,
            constraints: constraints::CHANGE_TOKEN,
        },
    ],
};
