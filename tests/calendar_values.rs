use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use chronotext::datatype::TemporalKind;
use chronotext::{Codec, CodecError};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn calendar_date_moon_landing() {
    let landing = date(1969, 7, 21);
    assert_eq!(landing.encode(), "1969-07-21");
    assert_eq!(NaiveDate::decode("1969-07-21").unwrap(), Some(landing));
}

#[test]
fn calendar_date_leap_day() {
    let leap = date(2020, 2, 29);
    assert_eq!(leap.encode(), "2020-02-29");
    assert_eq!(NaiveDate::decode(&leap.encode()).unwrap(), Some(leap));
    // 2021 is not a leap year
    assert_eq!(
        NaiveDate::decode("2021-02-29"),
        Err(CodecError::Format { text: "2021-02-29".to_string(), kind: TemporalKind::CalendarDate })
    );
}

#[test]
fn calendar_date_years_outside_four_digits_carry_a_sign() {
    let far = date(10000, 1, 1);
    assert_eq!(far.encode(), "+10000-01-01");
    assert_eq!(NaiveDate::decode("+10000-01-01").unwrap(), Some(far));

    let before_common_era = date(-1, 12, 31);
    assert_eq!(before_common_era.encode(), "-0001-12-31");
    assert_eq!(NaiveDate::decode("-0001-12-31").unwrap(), Some(before_common_era));

    let first = date(0, 1, 1);
    assert_eq!(first.encode(), "0000-01-01");

    // a sign on an ordinary year is not canonical
    assert!(NaiveDate::decode("+2020-01-01").is_err());
}

#[test]
fn calendar_date_rejects_other_shapes() {
    for text in [
        "1969-07-21T12:56:00",
        "1969-07-21+10:00",
        "1969-7-21",
        "19690721",
        "1969-07-21 ",
        " 1969-07-21",
        "1969-13-01",
        "1969-07-32",
        "2020-11",
    ] {
        assert!(NaiveDate::decode(text).is_err(), "{text:?} should not decode as a date");
    }
}

#[test]
fn clock_time_always_writes_seconds() {
    let time = NaiveTime::from_hms_opt(12, 56, 0).unwrap();
    assert_eq!(time.encode(), "12:56:00");
    assert_eq!(NaiveTime::decode("12:56:00").unwrap(), Some(time));

    let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    assert_eq!(midnight.encode(), "00:00:00");
    assert_eq!(NaiveTime::decode("00:00:00").unwrap(), Some(midnight));

    let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap();
    assert_eq!(last.encode(), "23:59:59.999999999");
    assert_eq!(NaiveTime::decode(&last.encode()).unwrap(), Some(last));
}

#[test]
fn clock_time_fractions_come_in_groups_of_three() {
    let milli = NaiveTime::from_hms_milli_opt(22, 11, 28, 566).unwrap();
    assert_eq!(milli.encode(), "22:11:28.566");

    let micro = NaiveTime::from_hms_micro_opt(1, 2, 3, 26_490).unwrap();
    assert_eq!(micro.encode(), "01:02:03.026490");

    let nano = NaiveTime::from_hms_nano_opt(1, 2, 3, 26_490_708).unwrap();
    assert_eq!(nano.encode(), "01:02:03.026490708");

    for time in [milli, micro, nano] {
        assert_eq!(NaiveTime::decode(&time.encode()).unwrap(), Some(time));
    }

    // shorter fractions are read as the leading digits
    assert_eq!(
        NaiveTime::decode("12:56:00.5").unwrap(),
        NaiveTime::from_hms_milli_opt(12, 56, 0, 500)
    );
    assert!(NaiveTime::decode("12:56:00.").is_err());
    assert!(NaiveTime::decode("12:56:00.1234567890").is_err());
}

#[test]
fn clock_time_rejects_other_shapes() {
    for text in ["12:56", "24:00:00", "12:60:00", "1:02:03", "12:56:00+10:00", "12:56:00Z", "T12:56:00"] {
        assert!(NaiveTime::decode(text).is_err(), "{text:?} should not decode as a time");
    }
}

#[test]
fn clock_time_keeps_leap_seconds() {
    let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
    assert_eq!(leap.encode(), "23:59:60.500");
    assert_eq!(NaiveTime::decode("23:59:60.500").unwrap(), Some(leap));
}

#[test]
fn date_time_without_zone() {
    let date_time = NaiveDateTime::new(date(2017, 6, 8), NaiveTime::from_hms_milli_opt(22, 11, 28, 566).unwrap());
    assert_eq!(date_time.encode(), "2017-06-08T22:11:28.566");
    assert_eq!(NaiveDateTime::decode("2017-06-08T22:11:28.566").unwrap(), Some(date_time));

    let start_of_day = date(2017, 6, 8).and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(start_of_day.encode(), "2017-06-08T00:00:00");
}

#[test]
fn date_time_rejects_other_shapes() {
    for text in [
        "2017-06-08 22:11:28",
        "2017-06-08t22:11:28",
        "2017-06-08T22:11:28Z",
        "2017-06-08T22:11:28+00:00",
        "2017-06-08",
        "2017-06-08T22:11",
    ] {
        assert!(NaiveDateTime::decode(text).is_err(), "{text:?} should not decode as a date-time");
    }
}
