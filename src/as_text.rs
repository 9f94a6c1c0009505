//! Serde field adapters writing the canonical text of each kind.
//!
//! ```
//! use chrono::NaiveDate;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Landing {
//!     #[serde(with = "chronotext::as_text::calendar_date")]
//!     day: NaiveDate,
//!     #[serde(with = "chronotext::as_text::zone_identifier::option")]
//!     zone: Option<chronotext::datatype::ZoneIdentifier>,
//! }
//!
//! let landing = Landing { day: NaiveDate::from_ymd_opt(1969, 7, 21).unwrap(), zone: None };
//! assert_eq!(serde_json::to_string(&landing).unwrap(), r#"{"day":"1969-07-21","zone":null}"#);
//! ```
//!
//! The `option` submodule of each adapter maps the absent value to a null
//! and reads both null and the empty string back as `None`. The plain
//! adapter rejects the empty string, since its field cannot be absent.

macro_rules! text_adapter {
    ($name:ident, $value:ty) => {
        pub mod $name {
            use serde::de::Error;
            use serde::{Deserialize, Deserializer, Serializer};

            use crate::codec::Codec;
            use crate::datatype::DataType;

            pub fn serialize<S: Serializer>(value: &$value, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&Codec::encode(value))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$value, D::Error> {
                let text = String::deserialize(deserializer)?;
                <$value as Codec>::decode(&text)
                    .map_err(D::Error::custom)?
                    .ok_or_else(|| {
                        D::Error::custom(format!("empty text for a required {}", <$value as DataType>::DATA_TYPE))
                    })
            }

            pub mod option {
                use serde::de::Error;
                use serde::{Deserialize, Deserializer, Serializer};

                use crate::codec::Codec;

                pub fn serialize<S: Serializer>(
                    value: &Option<$value>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    match value {
                        Some(value) => super::serialize(value, serializer),
                        None => serializer.serialize_none(),
                    }
                }

                pub fn deserialize<'de, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Option<$value>, D::Error> {
                    match Option::<String>::deserialize(deserializer)? {
                        Some(text) => <$value as Codec>::decode(&text).map_err(D::Error::custom),
                        None => Ok(None),
                    }
                }
            }
        }
    };
}

text_adapter!(calendar_date, chrono::NaiveDate);
text_adapter!(clock_time, chrono::NaiveTime);
text_adapter!(date_time, chrono::NaiveDateTime);
text_adapter!(offset_date_time, crate::datatype::OffsetDateTime);
text_adapter!(offset_time, crate::datatype::OffsetTime);
text_adapter!(zoned_date_time, crate::datatype::ZonedDateTime);
text_adapter!(instant, crate::datatype::Instant);
text_adapter!(duration, crate::datatype::Duration);
text_adapter!(year_month, crate::datatype::YearMonth);
text_adapter!(zone_identifier, crate::datatype::ZoneIdentifier);
