// used for the calendar and clock values themselves
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
// used for named time-zone regions
use chrono_tz::Tz;
// used when kinds are named in settings
use serde::Deserialize;

// used to print out readable forms of a data type
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::codec::Codec;

pub type OffsetDateTime = DateTime<FixedOffset>;
pub type ZonedDateTime = DateTime<Tz>;
pub type Instant = DateTime<Utc>;
pub type Duration = TimeDelta;

/// The closed set of temporal kinds, declared in registration order.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Deserialize)]
pub enum TemporalKind {
    CalendarDate,
    ClockTime,
    DateTime,
    OffsetDateTime,
    OffsetTime,
    ZonedDateTime,
    Instant,
    Duration,
    YearMonth,
    ZoneIdentifier,
}

impl TemporalKind {
    pub const ALL: [TemporalKind; 10] = [
        TemporalKind::CalendarDate,
        TemporalKind::ClockTime,
        TemporalKind::DateTime,
        TemporalKind::OffsetDateTime,
        TemporalKind::OffsetTime,
        TemporalKind::ZonedDateTime,
        TemporalKind::Instant,
        TemporalKind::Duration,
        TemporalKind::YearMonth,
        TemporalKind::ZoneIdentifier,
    ];
    pub const fn name(self) -> &'static str {
        match self {
            TemporalKind::CalendarDate => "CalendarDate",
            TemporalKind::ClockTime => "ClockTime",
            TemporalKind::DateTime => "DateTime",
            TemporalKind::OffsetDateTime => "OffsetDateTime",
            TemporalKind::OffsetTime => "OffsetTime",
            TemporalKind::ZonedDateTime => "ZonedDateTime",
            TemporalKind::Instant => "Instant",
            TemporalKind::Duration => "Duration",
            TemporalKind::YearMonth => "YearMonth",
            TemporalKind::ZoneIdentifier => "ZoneIdentifier",
        }
    }
    pub fn from_name(name: &str) -> Option<TemporalKind> {
        TemporalKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}
impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub trait DataType: fmt::Debug + Clone + Send + Sync + 'static {
    // static stuff which needs to be implemented downstream
    const UID: u8;
    const KIND: TemporalKind;
    const DATA_TYPE: &'static str = Self::KIND.name();
    // instance callable with pre-made implementation
    fn data_type(&self) -> &'static str {
        Self::DATA_TYPE
    }
    fn identifier(&self) -> u8 {
        Self::UID
    }
}

// ------------- Data Types --------------
impl DataType for NaiveDate {
    const UID: u8 = 1;
    const KIND: TemporalKind = TemporalKind::CalendarDate;
}
impl DataType for NaiveTime {
    const UID: u8 = 2;
    const KIND: TemporalKind = TemporalKind::ClockTime;
}
impl DataType for NaiveDateTime {
    const UID: u8 = 3;
    const KIND: TemporalKind = TemporalKind::DateTime;
}
impl DataType for OffsetDateTime {
    const UID: u8 = 4;
    const KIND: TemporalKind = TemporalKind::OffsetDateTime;
}
impl DataType for OffsetTime {
    const UID: u8 = 5;
    const KIND: TemporalKind = TemporalKind::OffsetTime;
}
impl DataType for ZonedDateTime {
    const UID: u8 = 6;
    const KIND: TemporalKind = TemporalKind::ZonedDateTime;
}
impl DataType for Instant {
    const UID: u8 = 7;
    const KIND: TemporalKind = TemporalKind::Instant;
}
impl DataType for Duration {
    const UID: u8 = 8;
    const KIND: TemporalKind = TemporalKind::Duration;
}
impl DataType for YearMonth {
    const UID: u8 = 9;
    const KIND: TemporalKind = TemporalKind::YearMonth;
}
impl DataType for ZoneIdentifier {
    const UID: u8 = 10;
    const KIND: TemporalKind = TemporalKind::ZoneIdentifier;
}

// Special types below, chrono has no counterpart for these

/// A clock time paired with the UTC offset it was observed in.
///
/// Two offset times are equal only when both the clock reading and the
/// offset agree; `12:00+01:00` and `11:00+00:00` are different values.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}
impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }
    pub fn time(&self) -> NaiveTime {
        self.time
    }
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}
impl From<&OffsetDateTime> for OffsetTime {
    fn from(date_time: &OffsetDateTime) -> Self {
        Self::new(date_time.time(), *date_time.offset())
    }
}
impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// A month of a proleptic Gregorian year, without a day.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct YearMonth {
    year: i32,
    month: u32,
}
impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<YearMonth> {
        match month {
            1..=12 => Some(YearMonth { year, month }),
            _ => None,
        }
    }
    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}
impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }
}
impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// The prefix of an offset-style zone identifier such as `UTC+10:00`.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub enum OffsetPrefix {
    Utc,
    Gmt,
    Ut,
}
impl OffsetPrefix {
    pub const fn name(self) -> &'static str {
        match self {
            OffsetPrefix::Utc => "UTC",
            OffsetPrefix::Gmt => "GMT",
            OffsetPrefix::Ut => "UT",
        }
    }
    pub fn from_name(name: &str) -> Option<OffsetPrefix> {
        [OffsetPrefix::Utc, OffsetPrefix::Gmt, OffsetPrefix::Ut]
            .into_iter()
            .find(|prefix| prefix.name() == name)
    }
}

/// A time-zone identifier: a region of the IANA database, a bare UTC offset
/// (`Z`, `+10:00`) or an offset behind a `UTC`, `GMT` or `UT` prefix
/// (`UTC+10:00`).
///
/// Identifiers are equal when their canonical text is, so `UTC+00:00` names
/// the same zone as the `UTC` region while `Z` does not.
#[derive(Clone, Copy, Debug)]
pub enum ZoneIdentifier {
    Region(Tz),
    Offset(FixedOffset),
    Prefixed(OffsetPrefix, FixedOffset),
}
impl ZoneIdentifier {
    pub fn region(&self) -> Option<Tz> {
        match self {
            ZoneIdentifier::Region(region) => Some(*region),
            _ => None,
        }
    }
    /// The offset of an offset-style identifier, `None` for a region.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        match self {
            ZoneIdentifier::Region(_) => None,
            ZoneIdentifier::Offset(offset) | ZoneIdentifier::Prefixed(_, offset) => Some(*offset),
        }
    }
}
impl PartialEq for ZoneIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.encode() == other.encode()
    }
}
impl Eq for ZoneIdentifier {}
impl Hash for ZoneIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encode().hash(state);
    }
}
impl From<Tz> for ZoneIdentifier {
    fn from(region: Tz) -> Self {
        ZoneIdentifier::Region(region)
    }
}
impl From<FixedOffset> for ZoneIdentifier {
    fn from(offset: FixedOffset) -> Self {
        ZoneIdentifier::Offset(offset)
    }
}
impl fmt::Display for ZoneIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
