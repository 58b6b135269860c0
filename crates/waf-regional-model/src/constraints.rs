//! Auto-generated from the AWS WAF Regional Smithy model. DO NOT EDIT.

use crate::schema::{Constraints, LengthRange, ValueRange};

/// Constraints on `ChangeToken` values.
pub(crate) const CHANGE_TOKEN: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(128))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `GeoMatchSetUpdates` values.
pub(crate) const GEO_MATCH_SET_UPDATES: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), None)),
    range: None,
    pattern: None,
};

/// Constraints on `GetSampledRequestsMaxItems` values.
pub(crate) const GET_SAMPLED_REQUESTS_MAX_ITEMS: Constraints = Constraints {
    length: None,
    range: Some(ValueRange::new(Some(1), Some(500))),
    pattern: None,
};

/// Constraints on `IPSetDescriptorValue` values.
pub(crate) const IP_SET_DESCRIPTOR_VALUE: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(50))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `IPSetUpdates` values.
pub(crate) const IP_SET_UPDATES: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), None)),
    range: None,
    pattern: None,
};

/// Constraints on `LogDestinationConfigs` values.
pub(crate) const LOG_DESTINATION_CONFIGS: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(1))),
    range: None,
    pattern: None,
};

/// Constraints on `MatchFieldData` values.
pub(crate) const MATCH_FIELD_DATA: Constraints = Constraints {
    length: Some(LengthRange::new(Some(0), Some(128))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `MetricName` values.
pub(crate) const METRIC_NAME: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(128))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `NextMarker` values.
pub(crate) const NEXT_MARKER: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(1224))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `PaginationLimit` values.
pub(crate) const PAGINATION_LIMIT: Constraints = Constraints {
    length: None,
    range: Some(ValueRange::new(Some(0), Some(100))),
    pattern: None,
};

/// Constraints on `RateLimit` values.
pub(crate) const RATE_LIMIT: Constraints = Constraints {
    length: None,
    range: Some(ValueRange::new(Some(100), Some(2_000_000_000))),
    pattern: None,
};

/// Constraints on `RedactedFields` values.
pub(crate) const REDACTED_FIELDS: Constraints = Constraints {
    length: Some(LengthRange::new(Some(0), Some(100))),
    range: None,
    pattern: None,
};

/// Constraints on `RegexMatchSetUpdates` values.
pub(crate) const REGEX_MATCH_SET_UPDATES: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), None)),
    range: None,
    pattern: None,
};

/// Constraints on `ResourceArn` values.
pub(crate) const RESOURCE_ARN: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(1224))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `ResourceId` values.
pub(crate) const RESOURCE_ID: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(128))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `ResourceName` values.
pub(crate) const RESOURCE_NAME: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(128))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `SampleWeight` values.
pub(crate) const SAMPLE_WEIGHT: Constraints = Constraints {
    length: None,
    range: Some(ValueRange::new(Some(0), None)),
    pattern: None,
};

/// Constraints on `TagKey` values.
pub(crate) const TAG_KEY: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), Some(128))),
    range: None,
    pattern: Some(".*\\S.*"),
};

/// Constraints on `TagList` values.
pub(crate) const TAG_LIST: Constraints = Constraints {
    length: Some(LengthRange::new(Some(1), None)),
    range: None,
    pattern: None,
};

/// Constraints on `TagValue` values.
pub(crate) const TAG_VALUE: Constraints = Constraints {
    length: Some(LengthRange::new(Some(0), Some(256))),
    range: None,
    pattern: Some(".*"),
};
