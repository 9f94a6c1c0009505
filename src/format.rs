//! Shared pieces of the canonical text grammars.
//!
//! Every grammar is anchored and written with ASCII digit classes only, so
//! leading or trailing whitespace, non-ASCII digits and foreign suffixes are
//! rejected before any value is built. Field ranges (month 13, hour 25, the
//! 30th of February) are left to chrono's checked constructors.

// used to recognize the canonical forms
use regex::{Captures, Regex};
use lazy_static::lazy_static;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Datelike};

const YEAR: &str = r"(?P<year>[+-]?[0-9]{4,})";
const DATE: &str = r"(?P<year>[+-]?[0-9]{4,})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})";
const TIME: &str = r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})(?:\.(?P<fraction>[0-9]{1,9}))?";
const OFFSET: &str = r"(?P<offset_sign>[+-])(?P<offset_hour>[0-9]{2}):(?P<offset_minute>[0-9]{2})(?::(?P<offset_second>[0-9]{2}))?";
const ZONE: &str = r"\[(?P<zone>[A-Za-z0-9/_+-]+)\]";
// the short and compact spellings are validated field by field in zone_offset_from
const ZONE_OFFSET: &str = r"Z|(?P<prefix>UTC|GMT|UT)(?P<prefixed>[+-][0-9:]{1,8})?|(?P<offset>[+-][0-9:]{1,8})";

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_MINUTE: u128 = 60;
const SECONDS_PER_HOUR: u128 = 3_600;
const SECONDS_PER_DAY: i128 = 86_400;
const MAX_OFFSET_SECONDS: i32 = 18 * 3_600;

lazy_static! {
    pub(crate) static ref DATE_PATTERN: Regex = anchored(&[DATE]);
    pub(crate) static ref TIME_PATTERN: Regex = anchored(&[TIME]);
    pub(crate) static ref DATE_TIME_PATTERN: Regex = anchored(&[DATE, "T", TIME]);
    pub(crate) static ref OFFSET_TIME_PATTERN: Regex = anchored(&[TIME, OFFSET]);
    pub(crate) static ref OFFSET_DATE_TIME_PATTERN: Regex = anchored(&[DATE, "T", TIME, OFFSET]);
    pub(crate) static ref ZONED_DATE_TIME_PATTERN: Regex = anchored(&[DATE, "T", TIME, OFFSET, ZONE]);
    pub(crate) static ref INSTANT_PATTERN: Regex = anchored(&[DATE, "T", TIME, "Z"]);
    pub(crate) static ref ZONE_OFFSET_PATTERN: Regex = anchored(&["(?:", ZONE_OFFSET, ")"]);
    pub(crate) static ref YEAR_MONTH_PATTERN: Regex = anchored(&[YEAR, "-", r"(?P<month>[0-9]{2})"]);
    pub(crate) static ref DURATION_PATTERN: Regex = Regex::new(concat!(
        r"^(?P<sign>[+-])?P(?:(?P<days>[+-]?[0-9]+)D)?",
        r"(?P<time>T(?:(?P<hours>[+-]?[0-9]+)H)?(?:(?P<minutes>[+-]?[0-9]+)M)?",
        r"(?:(?P<seconds>[+-]?[0-9]+)(?:\.(?P<fraction>[0-9]{1,9}))?S)?)?$",
    ))
    .unwrap();
}

fn anchored(parts: &[&str]) -> Regex {
    // the fragments are constants, a failure here is a programming error
    Regex::new(&format!("^{}$", parts.concat())).unwrap()
}

// ------------- Writing -------------

/// Four digits inside `0000..=9999`, otherwise an explicit sign and at least four digits.
pub(crate) fn year_text(year: i32) -> String {
    if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("+{year}")
    }
}

pub(crate) fn date_text(date: &NaiveDate) -> String {
    format!("{}-{:02}-{:02}", year_text(date.year()), date.month(), date.day())
}

pub(crate) fn time_text(time: &NaiveTime) -> String {
    let mut second = time.second();
    let mut nanos = time.nanosecond();
    // chrono keeps a leap second as an overflowing nanosecond count
    if nanos >= 1_000_000_000 {
        second += 1;
        nanos -= 1_000_000_000;
    }
    format!(
        "{:02}:{:02}:{:02}{}",
        time.hour(),
        time.minute(),
        second,
        fraction_text(nanos)
    )
}

pub(crate) fn date_time_text(date_time: &NaiveDateTime) -> String {
    format!("{}T{}", date_text(&date_time.date()), time_text(&date_time.time()))
}

/// Wall-clock text of `utc` seen at `offset`. At the ends of chrono's calendar
/// the local reading can fall one day outside it, that day is written by hand.
pub(crate) fn local_date_time_text(utc: &NaiveDateTime, offset: &FixedOffset) -> String {
    if let Some(local) = utc.checked_add_offset(*offset) {
        return date_time_text(&local);
    }
    let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    let (time, overflow) = utc.time().overflowing_add_signed(shift);
    let year = utc.date().year();
    let date = if overflow > 0 {
        format!("{}-01-01", year_text(year + 1))
    } else {
        format!("{}-12-31", year_text(year - 1))
    };
    format!("{date}T{}", time_text(&time))
}

/// Groups of three digits: milli, micro or nano precision, nothing when whole.
fn fraction_text(nanos: u32) -> String {
    if nanos == 0 {
        String::new()
    } else if nanos % 1_000_000 == 0 {
        format!(".{:03}", nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        format!(".{:06}", nanos / 1_000)
    } else {
        format!(".{nanos:09}")
    }
}

pub(crate) fn offset_text(offset: &FixedOffset) -> String {
    let total = offset.local_minus_utc();
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3_600, (total / 60) % 60, total % 60);
    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// ISO-8601 duration limited to hours, minutes and seconds. Each non-zero
/// component of a negative duration carries its own sign.
pub(crate) fn duration_text(duration: &TimeDelta) -> String {
    if duration.is_zero() {
        return "PT0S".to_owned();
    }
    let sign = if *duration < TimeDelta::zero() { "-" } else { "" };
    let total = i128::from(duration.num_seconds()) * NANOS_PER_SECOND + i128::from(duration.subsec_nanos());
    let magnitude = total.unsigned_abs();
    let seconds = magnitude / NANOS_PER_SECOND.unsigned_abs();
    let nanos = magnitude % NANOS_PER_SECOND.unsigned_abs();

    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = seconds % SECONDS_PER_MINUTE;

    let mut text = String::from("PT");
    if hours != 0 {
        text.push_str(&format!("{sign}{hours}H"));
    }
    if minutes != 0 {
        text.push_str(&format!("{sign}{minutes}M"));
    }
    if seconds != 0 || nanos != 0 {
        text.push_str(&format!("{sign}{seconds}"));
        if nanos != 0 {
            let digits = format!("{nanos:09}");
            text.push('.');
            text.push_str(digits.trim_end_matches('0'));
        }
        text.push('S');
    }
    text
}

// ------------- Reading -------------

/// Rejects years that parse but are not in their canonical spelling, e.g. `+2020`.
pub(crate) fn year_from(caps: &Captures) -> Option<i32> {
    let text = caps.name("year")?.as_str();
    let year = text.parse::<i32>().ok()?;
    (year_text(year) == text).then_some(year)
}

fn number<T: std::str::FromStr>(caps: &Captures, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse::<T>().ok()
}

fn fraction_nanos(digits: &str) -> Option<u32> {
    format!("{digits:0<9}").parse::<u32>().ok()
}

pub(crate) fn date_from(caps: &Captures) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year_from(caps)?, number(caps, "month")?, number(caps, "day")?)
}

pub(crate) fn time_from(caps: &Captures) -> Option<NaiveTime> {
    let hour = number::<u32>(caps, "hour")?;
    let minute = number::<u32>(caps, "minute")?;
    let second = number::<u32>(caps, "second")?;
    let nanos = match caps.name("fraction") {
        Some(digits) => fraction_nanos(digits.as_str())?,
        None => 0,
    };
    if second == 60 {
        NaiveTime::from_hms_nano_opt(hour, minute, 59, nanos + 1_000_000_000)
    } else {
        NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
    }
}

pub(crate) fn date_time_from(caps: &Captures) -> Option<NaiveDateTime> {
    Some(NaiveDateTime::new(date_from(caps)?, time_from(caps)?))
}

pub(crate) fn offset_from(caps: &Captures) -> Option<FixedOffset> {
    let hours = number::<i32>(caps, "offset_hour")?;
    let minutes = number::<i32>(caps, "offset_minute")?;
    let seconds = match caps.name("offset_second") {
        Some(_) => number::<i32>(caps, "offset_second")?,
        None => 0,
    };
    bounded_offset(caps.name("offset_sign")?.as_str() == "-", hours, minutes, seconds)
}

/// Offsets stop at `±18:00`.
fn bounded_offset(negative: bool, hours: i32, minutes: i32, seconds: i32) -> Option<FixedOffset> {
    if minutes > 59 || seconds > 59 {
        return None;
    }
    let total = hours * 3_600 + minutes * 60 + seconds;
    if total > MAX_OFFSET_SECONDS {
        return None;
    }
    if negative {
        FixedOffset::west_opt(total)
    } else {
        FixedOffset::east_opt(total)
    }
}

/// Reads the offset of a zone identifier: `Z`, or a sign followed by `h`,
/// `hh`, `hh:mm`, `hhmm`, `hh:mm:ss` or `hhmmss`.
pub(crate) fn zone_offset_from(text: &str) -> Option<FixedOffset> {
    if text == "Z" {
        return FixedOffset::east_opt(0);
    }
    let negative = match text.get(..1)? {
        "-" => true,
        "+" => false,
        _ => return None,
    };
    let body = &text[1..];
    if !body.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let colon_at = |index: usize| body.as_bytes().get(index) == Some(&b':');
    let (hours, minutes, seconds) = match body.len() {
        1 | 2 => (body, "0", "0"),
        4 => (&body[..2], &body[2..], "0"),
        5 if colon_at(2) => (&body[..2], &body[3..], "0"),
        6 => (&body[..2], &body[2..4], &body[4..]),
        8 if colon_at(2) && colon_at(5) => (&body[..2], &body[3..5], &body[6..]),
        _ => return None,
    };
    bounded_offset(
        negative,
        hours.parse().ok()?,
        minutes.parse().ok()?,
        seconds.parse().ok()?,
    )
}

pub(crate) fn duration_from(caps: &Captures) -> Option<TimeDelta> {
    // a bare designator carries no component
    if caps.name("time").is_some_and(|t| t.as_str() == "T") {
        return None;
    }
    if ["days", "hours", "minutes", "seconds"].iter().all(|name| caps.name(name).is_none()) {
        return None;
    }
    let component = |name: &str, seconds: i128| -> Option<i128> {
        match caps.name(name) {
            Some(m) => Some(i128::from(m.as_str().parse::<i64>().ok()?) * seconds * NANOS_PER_SECOND),
            None => Some(0),
        }
    };
    let mut total = component("days", SECONDS_PER_DAY)?
        + component("hours", 3_600)?
        + component("minutes", 60)?
        + component("seconds", 1)?;
    if let Some(digits) = caps.name("fraction") {
        let nanos = i128::from(fraction_nanos(digits.as_str())?);
        // the fraction takes the sign of its seconds, so -0.5S is negative
        let negative = caps.name("seconds").is_some_and(|s| s.as_str().starts_with('-'));
        total += if negative { -nanos } else { nanos };
    }
    if caps.name("sign").is_some_and(|s| s.as_str() == "-") {
        total = -total;
    }
    let seconds = i64::try_from(total.div_euclid(NANOS_PER_SECOND)).ok()?;
    let nanos = u32::try_from(total.rem_euclid(NANOS_PER_SECOND)).ok()?;
    TimeDelta::new(seconds, nanos)
}
