//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display;
use crate::schema::{
    self, Constraints, ItemSchema, MemberKind, MemberSchema, MemberValue, Shape, ShapeSchema,
};
use crate::types::{SampledHTTPRequest, TimeWindow};

/// Output of the `GetSampledRequests` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetSampledRequestsOutput {
    #[serde(rename = "SampledRequests", skip_serializing_if = "Option::is_none")]
    sampled_requests: Option<Vec<SampledHTTPRequest>>,
    #[serde(rename = "PopulationSize", skip_serializing_if = "Option::is_none")]
    population_size: Option<i64>,
    #[serde(rename = "TimeWindow", skip_serializing_if = "Option::is_none")]
    time_window: Option<TimeWindow>,
}

impl GetSampledRequestsOutput {
    /// Constraint metadata for this shape.
    #[must_use]
    pub fn shape_schema() -> &'static ShapeSchema {
        &GET_SAMPLED_REQUESTS_OUTPUT_SCHEMA
    }

    /// The `SampledRequests` member.
    #[must_use]
    pub fn sampled_requests(&self) -> Option<&[SampledHTTPRequest]> {
        self.sampled_requests.as_deref()
    }

    /// Sets `SampledRequests`; `None` clears it.
    ///
    /// The slice is copied.
    pub fn set_sampled_requests(&mut self, input: Option<&[SampledHTTPRequest]>) -> &mut Self {
        self.sampled_requests = input.map(<[SampledHTTPRequest]>::to_vec);
        self
    }

    /// Sets `SampledRequests` and returns the updated value.
    #[must_use]
    pub fn with_sampled_requests(mut self, input: &[SampledHTTPRequest]) -> Self {
        self.sampled_requests = Some(input.to_vec());
        self
    }

    /// Appends to `SampledRequests`, creating the list if it is unset.
    #[must_use]
    pub fn append_sampled_requests(
        mut self,
        items: impl IntoIterator<Item = SampledHTTPRequest>,
    ) -> Self {
        let list = self.sampled_requests.get_or_insert_default();
        list.extend(items);
        self
    }

    /// The `PopulationSize` member.
    #[must_use]
    pub fn population_size(&self) -> Option<i64> {
        self.population_size
    }

    /// Sets `PopulationSize`; `None` clears it.
    pub fn set_population_size(&mut self, input: Option<i64>) -> &mut Self {
        self.population_size = input;
        self
    }

    /// Sets `PopulationSize` and returns the updated value.
    #[must_use]
    pub fn with_population_size(mut self, input: i64) -> Self {
        self.population_size = Some(input);
        self
    }

    /// A time range of up to three hours within the previous three hours.
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
}

impl fmt::Display for GetSampledRequestsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::fmt_shape(self, f)
    }
}

impl Shape for GetSampledRequestsOutput {
    fn schema(&self) -> &'static ShapeSchema {
        &GET_SAMPLED_REQUESTS_OUTPUT_SCHEMA
    }

    fn member_value(&self, member: &str) -> Option<MemberValue<'_>> {
        match member {
            "SampledRequests" => schema::value_of(self.sampled_requests.as_ref()),
            "PopulationSize" => schema::value_of(self.population_size.as_ref()),
            "TimeWindow" => schema::value_of(self.time_window.as_ref()),
            _ => None,
        }
    }
}

static GET_SAMPLED_REQUESTS_OUTPUT_SCHEMA: ShapeSchema = ShapeSchema {
    name: "GetSampledRequestsOutput",
    members: &[
        MemberSchema {
            name: "SampledRequests",
            target: "SampledHTTPRequests",
            kind: MemberKind::List(&ItemSchema {
                target: "SampledHTTPRequest",
                kind: MemberKind::Structure,
                constraints: Constraints::NONE,
            }),
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "PopulationSize",
            target: "PopulationSize",
            kind: MemberKind::Long,
            required: false,
            constraints: Constraints::NONE,
        },
        MemberSchema {
            name: "TimeWindow",
            target: "TimeWindow",
            kind: MemberKind::Structure,
            required: false,
            constraints: Constraints::NONE,
        },
    ],
};
