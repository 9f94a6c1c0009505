//! Registration of the temporal codecs against a host.
//!
//! Every function takes the host by mutable reference and hands the same
//! reference back, so calls chain:
//!
//! ```
//! use chronotext::converters::{register_calendar_date, register_instant};
//! use chronotext::registry::Registry;
//! let mut registry = Registry::new();
//! register_instant(register_calendar_date(&mut registry));
//! assert_eq!(registry.len(), 2);
//! ```
//!
//! Re-registering a kind replaces the earlier association.

use std::any::TypeId;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::codec::Codec;
use crate::datatype::{
    Duration, Instant, OffsetDateTime, OffsetTime, TemporalKind, YearMonth, ZoneIdentifier,
    ZonedDateTime,
};
use crate::error::{CodecError, Result};
use crate::registry::{Adapter, CodecHost};
use crate::settings::Settings;

pub fn register<C: Codec, H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    host.register_adapter(TypeId::of::<C>(), Adapter::of::<C>());
    host
}

pub fn register_kind<H: CodecHost + ?Sized>(host: &mut H, kind: TemporalKind) -> &mut H {
    match kind {
        TemporalKind::CalendarDate => register::<NaiveDate, H>(host),
        TemporalKind::ClockTime => register::<NaiveTime, H>(host),
        TemporalKind::DateTime => register::<NaiveDateTime, H>(host),
        TemporalKind::OffsetDateTime => register::<OffsetDateTime, H>(host),
        TemporalKind::OffsetTime => register::<OffsetTime, H>(host),
        TemporalKind::ZonedDateTime => register::<ZonedDateTime, H>(host),
        TemporalKind::Instant => register::<Instant, H>(host),
        TemporalKind::Duration => register::<Duration, H>(host),
        TemporalKind::YearMonth => register::<YearMonth, H>(host),
        TemporalKind::ZoneIdentifier => register::<ZoneIdentifier, H>(host),
    }
}

/// Registers every temporal codec, in [`TemporalKind::ALL`] order.
pub fn register_all<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    for kind in TemporalKind::ALL {
        register_kind(host, kind);
    }
    host
}

pub fn register_calendar_date<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::CalendarDate)
}
pub fn register_clock_time<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::ClockTime)
}
pub fn register_date_time<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::DateTime)
}
pub fn register_offset_date_time<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::OffsetDateTime)
}
pub fn register_offset_time<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::OffsetTime)
}
pub fn register_zoned_date_time<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::ZonedDateTime)
}
pub fn register_instant<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::Instant)
}
pub fn register_duration<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::Duration)
}
pub fn register_year_month<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::YearMonth)
}
pub fn register_zone_identifier<H: CodecHost + ?Sized>(host: &mut H) -> &mut H {
    register_kind(host, TemporalKind::ZoneIdentifier)
}

/// Registers the kind called `name`, e.g. `"ZonedDateTime"`.
pub fn register_named<'h, H: CodecHost + ?Sized>(host: &'h mut H, name: &str) -> Result<&'h mut H> {
    let kind = TemporalKind::from_name(name)
        .ok_or_else(|| CodecError::InvalidArgument(format!("unknown temporal kind {name:?}")))?;
    Ok(register_kind(host, kind))
}

/// Registers the kinds listed in `settings`. The list is checked before
/// anything is registered.
pub fn register_configured<'h, H: CodecHost + ?Sized>(
    host: &'h mut H,
    settings: &Settings,
) -> Result<&'h mut H> {
    if settings.kinds.is_empty() {
        return Err(CodecError::InvalidArgument("no temporal kinds configured".to_owned()));
    }
    for kind in TemporalKind::ALL {
        if settings.kinds.contains(&kind) {
            register_kind(host, kind);
        }
    }
    Ok(host)
}

/// Fluent registration directly on a host.
pub trait ConvertersExt: CodecHost {
    fn register_all_temporal(&mut self) -> &mut Self {
        register_all(self)
    }
    fn register_calendar_date(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::CalendarDate)
    }
    fn register_clock_time(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::ClockTime)
    }
    fn register_date_time(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::DateTime)
    }
    fn register_offset_date_time(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::OffsetDateTime)
    }
    fn register_offset_time(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::OffsetTime)
    }
    fn register_zoned_date_time(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::ZonedDateTime)
    }
    fn register_instant(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::Instant)
    }
    fn register_duration(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::Duration)
    }
    fn register_year_month(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::YearMonth)
    }
    fn register_zone_identifier(&mut self) -> &mut Self {
        register_kind(self, TemporalKind::ZoneIdentifier)
    }
}

impl<H: CodecHost + ?Sized> ConvertersExt for H {}
