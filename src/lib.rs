//! Chronotext – canonical text codecs for calendar, clock and duration values.
//!
//! Each temporal kind has exactly one textual form, and every codec is a
//! lossless, deterministic pair of functions between a value and that text:
//! `decode(encode(v)) == v` for every representable value.
//!
//! | Kind | Rust value | Canonical text |
//! |---|---|---|
//! | CalendarDate | [`chrono::NaiveDate`] | `1969-07-21` |
//! | ClockTime | [`chrono::NaiveTime`] | `12:56:00`, `12:56:00.566` |
//! | DateTime | [`chrono::NaiveDateTime`] | `1969-07-21T12:56:00` |
//! | OffsetTime | [`datatype::OffsetTime`] | `12:56:00+10:00` |
//! | OffsetDateTime | [`datatype::OffsetDateTime`] | `1969-07-21T12:56:00+10:00` |
//! | ZonedDateTime | [`datatype::ZonedDateTime`] | `1969-07-21T12:56:00+10:00[Australia/Brisbane]` |
//! | Instant | [`datatype::Instant`] | `1969-07-21T02:56:00Z` |
//! | Duration | [`datatype::Duration`] | `PT1M40S` |
//! | YearMonth | [`datatype::YearMonth`] | `2020-11` |
//! | ZoneIdentifier | [`datatype::ZoneIdentifier`] | `Australia/Brisbane`, `+10:00`, `UTC+10:00`, `Z` |
//!
//! ## Modules
//! * [`datatype`] – The temporal kinds, the [`datatype::DataType`] identity
//!   trait and the value types chrono does not provide.
//! * [`codec`] – The [`codec::Codec`] trait and one implementation per kind.
//! * [`registry`] – The [`registry::CodecHost`] seam a serialization framework
//!   implements, and [`registry::Registry`], a host over `serde_json` nodes.
//! * [`converters`] – Registration of one, some or all codecs on a host.
//! * [`as_text`] – `#[serde(with = "...")]` adapters for struct fields.
//! * [`settings`] – Which kinds to register, read with the `config` crate.
//!
//! ## Absent values
//! Decoding the empty string gives `Ok(None)` rather than an error. Text made
//! of whitespace is not empty and fails with [`error::CodecError::Format`].
//!
//! ## Quick Start
//! ```
//! use chronotext::codec::Codec;
//! use chronotext::converters::ConvertersExt;
//! use chronotext::registry::Registry;
//! use chrono::TimeDelta;
//!
//! assert_eq!(TimeDelta::seconds(100).encode(), "PT1M40S");
//!
//! let mut registry = Registry::new();
//! registry.register_all_temporal();
//! let json = registry.to_json(&TimeDelta::seconds(100)).unwrap();
//! assert_eq!(json, "\"PT1M40S\"");
//! assert_eq!(registry.from_json::<TimeDelta>(&json).unwrap(), Some(TimeDelta::seconds(100)));
//! ```

pub mod as_text;
pub mod codec;
pub mod converters;
pub mod datatype;
pub mod error;
mod format;
pub mod registry;
pub mod settings;

pub use codec::Codec;
pub use error::{CodecError, Result};
