//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{self, Constraints, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema};
use crate::types::LoggingConfiguration;

/// Input of the `ListLoggingConfigurations` operation.
///
/// Returns the logging configurations of the account, one page at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListLoggingConfigurationsInput {
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    next_marker: Option<String>,
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
}

impl ListLoggingConfigurationsInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &LIST_LOGGING_CONFIGURATIONS_INPUT_SCHEMA
    }

    /// The `NextMarker` member.
    #[must_use]
    pub fn next_marker(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }

    /// Sets `NextMarker`; `None` clears it.
    pub fn set_next_marker(&mut self, input: Option<String>) -> &mut Self {
        self.next_marker = input;
        self
    }

    /// Sets `NextMarker` and returns the updated value.
    #[must_use]
    pub fn with_next_marker(mut self, input: impl Into<String>) -> Self {
        self.next_marker = Some(input.into());
        self
    }

    /// The `Limit` member.
    #[must_use]
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }

    /// Sets `Limit`; `None` clears it.
    pub fn set_limit(&mut self, input: Option<i32>) -> &mut Self {
        self.limit = input;
        self
    }

    /// Sets `Limit` and returns the updated value.
    #[must_use]
    pub fn with_limit(mut self, input: i32) -> Self {
        self.limit = Some(input);
        self
    }
}

impl fmt::Display for ListLoggingConfigurationsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for ListLoggingConfigurationsInput {
    fn schema(&self) -> &'static ShapeSchema {
        &LIST_LOGGING_CONFIGURATIONS_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "NextMarker" => schema::value_of(self.next_marker.as_ref()),
            "Limit" => schema::value_of(self.limit.as_ref()),
            _ => None,
        }
    }
}

static LIST_LOGGING_CONFIGURATIONS_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "ListLoggingConfigurationsInput",
    members: &[
        MemberSchema {
            name: "NextMarker",
            target: "NextMarker",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::NEXT_MARKER,
        },
        MemberSchema {
            name: "Limit",
            target: "PaginationLimit",
            kind: MemberKind::Integer,
            required: false,
            constraints: constraints::PAGINATION_LIMIT,
        },
    ],
};

/// Input of the `PutLoggingConfiguration` operation.
///
/// Associates a Kinesis Data Firehose stream with a web ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PutLoggingConfigurationInput {
    #[serde(
        rename = "LoggingConfiguration",
        skip_serializing_if = "Option::is_none"
    )]
    logging_configuration: Option<LoggingConfiguration>,
}

impl PutLoggingConfigurationInput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &PUT_LOGGING_CONFIGURATION_INPUT_SCHEMA
    }

    /// Associates a Kinesis Data Firehose stream with a web ACL.
    ///
    /// Required by the service.
    #[must_use]
    pub fn logging_configuration(&self) -> Option<&LoggingConfiguration> {
        self.logging_configuration.as_ref()
    }

    /// Sets `LoggingConfiguration`; `None` clears it.
    pub fn set_logging_configuration(&mut self, input: Option<LoggingConfiguration>) -> &mut Self {
        self.logging_configuration = input;
        self
    }

    /// Sets `LoggingConfiguration` and returns the updated value.
    #[must_use]
    pub fn with_logging_configuration(mut self, input: LoggingConfiguration) -> Self {
        self.logging_configuration = Some(input);
        self
    }
}

impl fmt::Display for PutLoggingConfigurationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for PutLoggingConfigurationInput {
    fn schema(&self) -> &'static ShapeSchema {
        &PUT_LOGGING_CONFIGURATION_INPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "LoggingConfiguration" => schema::value_of(self.logging_configuration.as_ref()),
            _ => None,
        }
    }
}

static PUT_LOGGING_CONFIGURATION_INPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "PutLoggingConfigurationInput",
    members: &[MemberSchema {
        name: "LoggingConfiguration",
        target: "LoggingConfiguration",
        kind: MemberKind::Structure,
        required: true,
        constraints: Constraints::NONE,
    }],
};
