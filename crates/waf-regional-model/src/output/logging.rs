//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraints;
use crate::display;
use crate::schema::{
    self, Constraints, ItemSchema, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema,
};
use crate::types::LoggingConfiguration;

/// Output of the `ListLoggingConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListLoggingConfigurationsOutput {
    #[serde(
        rename = "LoggingConfigurations",
        skip_serializing_if = "Option::is_none"
    )]
    logging_configurations: Option<Vec<LoggingConfiguration>>,
    #[serde(rename = "NextMarker", skip_serializing_if = "Option::is_none")]
    next_marker: Option<String>,
}

impl ListLoggingConfigurationsOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &LIST_LOGGING_CONFIGURATIONS_OUTPUT_SCHEMA
    }

    /// The `LoggingConfigurations` member.
    #[must_use]
    pub fn logging_configurations(&self) -> Option<&[LoggingConfiguration]> {
        self.logging_configurations.as_deref()
    }

    /// Sets `LoggingConfigurations`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_logging_configurations(
        &mut self,
        input: Option<&[LoggingConfiguration]>,
    ) -> &mut Self {
        self.logging_configurations = input.map(<[LoggingConfiguration]>::to_vec);
        self
    }

    /// Sets `LoggingConfigurations` and returns the updated value.
    #[must_use]
    pub fn with_logging_configurations(mut self, input: &[LoggingConfiguration]) -> Self {
        self.logging_configurations = Some(input.to_vec());
        self
    }

    /// Appends to `LoggingConfigurations`, creating the list if it is unset.
    #[must_use]
    pub fn append_logging_configurations(
        mut self,
        items: impl IntoIterator<Item = LoggingConfiguration>,
    ) -> Self {
        let list = self.logging_configurations.get_or_insert_default();
        list.extend(items);
        self
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
}

impl fmt::Display for ListLoggingConfigurationsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for ListLoggingConfigurationsOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &LIST_LOGGING_CONFIGURATIONS_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "LoggingConfigurations" => schema::value_of(self.logging_configurations.as_ref()),
            "NextMarker" => schema::value_of(self.next_marker.as_ref()),
            _ => None,
        }
    }
}

static LIST_LOGGING_CONFIGURATIONS_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "ListLoggingConfigurationsOutput",
    members: &[
        MemberSchema {
            name: "LoggingConfigurations",
            target: "LoggingConfigurations",
            kind: MemberKind::List(&ItemSchema {
                target: "LoggingConfiguration",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "NextMarker",
            target: "NextMarker",
            kind: MemberKind::String,
            required: false,
            constraints: constraints::NEXT_MARKER,
        },
    ],
};

/// Output of the `PutLoggingConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PutLoggingConfigurationOutput {
    #[serde(
        rename = "LoggingConfiguration",
        skip_serializing_if = "Option::is_none"
    )]
    logging_configuration: Option<LoggingConfiguration>,
}

impl PutLoggingConfigurationOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &PUT_LOGGING_CONFIGURATION_OUTPUT_SCHEMA
    }

    /// Associates a Kinesis Data Firehose stream with a web ACL.
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

impl fmt::Display for PutLoggingConfigurationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for PutLoggingConfigurationOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &PUT_LOGGING_CONFIGURATION_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "LoggingConfiguration" => schema::value_of(self.logging_configuration.as_ref()),
            _ => None,
        }
    }
}

static PUT_LOGGING_CONFIGURATION_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "PutLoggingConfigurationOutput",
    members: &[MemberSchema {
        name: "LoggingConfiguration",
        target: "LoggingConfiguration",
        kind: MemberKind::Structure,
        required: false,
        constraints: Constraints::NONE,
    }],
};
