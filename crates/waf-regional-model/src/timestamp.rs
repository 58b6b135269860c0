//! Wire encoding of timestamp members.

/// Epoch-seconds encoding used by the JSON protocol.
///
/// Whole seconds serialize as an integer, anything finer as a float.
/// Deserialization accepts either.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::ref_option
)]
pub(crate) mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(ts) if ts.timestamp_subsec_nanos() == 0 => {
                serializer.serialize_i64(ts.timestamp())
            }
            Some(ts) => {
                let secs = ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_nanos()) / 1e9;
                serializer.serialize_f64(secs)
            }
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if !secs.is_finite() {
            return Err(de::Error::custom(format!("invalid epoch seconds: {secs}")));
        }
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1e9).round() as u32;
        let (whole, nanos) = if nanos >= 1_000_000_000 {
            (whole as i64 + 1, 0)
        } else {
            (whole as i64, nanos)
        };
        DateTime::from_timestamp(whole, nanos)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("epoch seconds out of range: {secs}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(
            rename = "At",
            default,
            skip_serializing_if = "Option::is_none",
            with = "super::epoch_seconds"
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_should_serialize_whole_seconds_as_integer() {
        let holder = Holder {
            at: DateTime::from_timestamp(1_700_000_000, 0),
        };
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"At":1700000000}"#
        );
    }

    #[test]
    fn test_should_serialize_fraction_as_float() {
        let holder = Holder {
            at: DateTime::from_timestamp(1_700_000_000, 500_000_000),
        };
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"At":1700000000.5}"#
        );
    }

    #[test]
    fn test_should_deserialize_integer_and_float() {
        let holder: Holder = serde_json::from_str(r#"{"At":1700000000}"#).unwrap();
        assert_eq!(holder.at, DateTime::from_timestamp(1_700_000_000, 0));

        let holder: Holder = serde_json::from_str(r#"{"At":1700000000.25}"#).unwrap();
        assert_eq!(
            holder.at,
            DateTime::from_timestamp(1_700_000_000, 250_000_000)
        );
    }

    #[test]
    fn test_should_treat_missing_and_null_as_unset() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.at, None);
        let holder: Holder = serde_json::from_str(r#"{"At":null}"#).unwrap();
        assert_eq!(holder.at, None);
        assert_eq!(serde_json::to_string(&holder).unwrap(), "{}");
    }

    #[test]
    fn test_should_reject_non_numeric_timestamp() {
        assert!(serde_json::from_str::<Holder>(r#"{"At":"yesterday"}"#).is_err());
    }
}
