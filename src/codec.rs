//! One text codec per temporal kind.
//!
//! A codec is a pair of pure functions: [`Codec::encode`] renders the
//! canonical text of a value and never fails, [`Codec::decode`] accepts that
//! canonical text and nothing else. Decoding the empty string yields
//! `Ok(None)`, the absent value, because some producers cannot tell "no
//! value" apart from `""`. Any other non-conforming text, including text made
//! only of whitespace, is a [`CodecError::Format`].

use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use regex::{Captures, Regex};
use tracing::debug;

use crate::datatype::{
    DataType, Duration, Instant, OffsetDateTime, OffsetPrefix, OffsetTime, YearMonth,
    ZoneIdentifier, ZonedDateTime,
};
use crate::error::{CodecError, Result};
use crate::format::{
    DATE_PATTERN, DATE_TIME_PATTERN, DURATION_PATTERN, INSTANT_PATTERN, OFFSET_DATE_TIME_PATTERN,
    OFFSET_TIME_PATTERN, TIME_PATTERN, YEAR_MONTH_PATTERN, ZONE_OFFSET_PATTERN,
    ZONED_DATE_TIME_PATTERN, date_from, date_text, date_time_from, date_time_text, duration_from,
    duration_text, local_date_time_text, offset_from, offset_text, time_from, time_text, year_from,
    year_text, zone_offset_from,
};

pub trait Codec: DataType + Sized {
    fn encode(&self) -> String;
    fn decode(text: &str) -> Result<Option<Self>>;
}

/// Matches `text` against `pattern` and builds the value from the captures.
fn decode_with<T: DataType>(
    text: &str,
    pattern: &Regex,
    build: impl FnOnce(&Captures) -> Option<T>,
) -> Result<Option<T>> {
    if text.is_empty() {
        return Ok(None);
    }
    pattern
        .captures(text)
        .and_then(|caps| build(&caps))
        .map(Some)
        .ok_or_else(|| CodecError::format(text, T::KIND))
}

impl Codec for NaiveDate {
    fn encode(&self) -> String {
        date_text(self)
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &DATE_PATTERN, date_from)
    }
}

impl Codec for NaiveTime {
    fn encode(&self) -> String {
        time_text(self)
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &TIME_PATTERN, time_from)
    }
}

impl Codec for NaiveDateTime {
    fn encode(&self) -> String {
        date_time_text(self)
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &DATE_TIME_PATTERN, date_time_from)
    }
}

impl Codec for OffsetDateTime {
    fn encode(&self) -> String {
        format!(
            "{}{}",
            local_date_time_text(&self.naive_utc(), self.offset()),
            offset_text(self.offset())
        )
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &OFFSET_DATE_TIME_PATTERN, |caps| {
            let local = date_time_from(caps)?;
            offset_from(caps)?.from_local_datetime(&local).single()
        })
    }
}

impl Codec for OffsetTime {
    fn encode(&self) -> String {
        format!("{}{}", time_text(&self.time()), offset_text(&self.offset()))
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &OFFSET_TIME_PATTERN, |caps| {
            Some(OffsetTime::new(time_from(caps)?, offset_from(caps)?))
        })
    }
}

impl Codec for ZonedDateTime {
    fn encode(&self) -> String {
        let offset = self.offset().fix();
        format!(
            "{}{}[{}]",
            local_date_time_text(&self.naive_utc(), &offset),
            offset_text(&offset),
            self.timezone().name()
        )
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &ZONED_DATE_TIME_PATTERN, |caps| {
            let local = date_time_from(caps)?;
            let offset = offset_from(caps)?;
            let zone = caps.name("zone")?.as_str().parse::<Tz>().ok()?;
            resolve_zoned(local, offset, zone)
        })
    }
}

/// The bracketed region decides the zone. The written offset only settles
/// which of two instants an overlapping local time means, or pins the instant
/// when the local time falls into a gap.
fn resolve_zoned(
    local: NaiveDateTime,
    offset: FixedOffset,
    zone: Tz,
) -> Option<ZonedDateTime> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(resolved) => {
            if resolved.offset().fix() != offset {
                debug!(
                    zone = zone.name(),
                    written = %offset,
                    actual = %resolved.offset().fix(),
                    "offset disagrees with zone rules"
                );
            }
            Some(resolved)
        }
        LocalResult::Ambiguous(earlier, later) => {
            if later.offset().fix() == offset {
                Some(later)
            } else {
                Some(earlier)
            }
        }
        LocalResult::None => offset
            .from_local_datetime(&local)
            .single()
            .map(|fixed| fixed.with_timezone(&zone)),
    }
}

impl Codec for Instant {
    fn encode(&self) -> String {
        format!("{}Z", date_time_text(&self.naive_utc()))
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &INSTANT_PATTERN, |caps| {
            date_time_from(caps).map(|local| local.and_utc())
        })
    }
}

impl Codec for Duration {
    fn encode(&self) -> String {
        duration_text(self)
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &DURATION_PATTERN, duration_from)
    }
}

impl Codec for YearMonth {
    fn encode(&self) -> String {
        format!("{}-{:02}", year_text(self.year()), self.month())
    }
    fn decode(text: &str) -> Result<Option<Self>> {
        decode_with(text, &YEAR_MONTH_PATTERN, |caps| {
            YearMonth::new(year_from(caps)?, caps.name("month")?.as_str().parse().ok()?)
        })
    }
}

impl Codec for ZoneIdentifier {
    fn encode(&self) -> String {
        match self {
            ZoneIdentifier::Region(region) => region.name().to_owned(),
            ZoneIdentifier::Offset(offset) if offset.local_minus_utc() == 0 => "Z".to_owned(),
            ZoneIdentifier::Offset(offset) => offset_text(offset),
            ZoneIdentifier::Prefixed(prefix, offset) if offset.local_minus_utc() == 0 => {
                prefix.name().to_owned()
            }
            ZoneIdentifier::Prefixed(prefix, offset) => {
                format!("{}{}", prefix.name(), offset_text(offset))
            }
        }
    }
    /// Region names are looked up first, so `Etc/GMT+10` stays a region.
    fn decode(text: &str) -> Result<Option<Self>> {
        if let Ok(region) = text.parse::<Tz>() {
            return Ok(Some(ZoneIdentifier::Region(region)));
        }
        decode_with(text, &ZONE_OFFSET_PATTERN, offset_zone)
    }
}

fn offset_zone(caps: &Captures) -> Option<ZoneIdentifier> {
    match caps.name("prefix") {
        Some(prefix) => {
            let prefix = OffsetPrefix::from_name(prefix.as_str())?;
            let offset = match caps.name("prefixed") {
                Some(offset) => zone_offset_from(offset.as_str())?,
                None => FixedOffset::east_opt(0)?,
            };
            Some(ZoneIdentifier::Prefixed(prefix, offset))
        }
        None => {
            let offset = caps.name("offset").map_or("Z", |offset| offset.as_str());
            zone_offset_from(offset).map(ZoneIdentifier::Offset)
        }
    }
}
