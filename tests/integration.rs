use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc};
use eday::{
    from_date, now, to_civil, to_date, EdayError, EpochDay, MAX_DISPLAY_DAY, MIN_DISPLAY_DAY,
};

#[test]
fn from_date_known_values() {
    assert_eq!(from_date("1970-01-01").unwrap(), 0.0);
    let next_day = Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap();
    assert!((from_date(next_day).unwrap() - 1.0).abs() < 1e-12);
    assert!((from_date("2022-02-17").unwrap() - 19_040.0).abs() < 1e-6);
    assert!((from_date("2022-02-17T12:00:00+00:00").unwrap() - 19_040.5).abs() < 1e-6);

    let naive = NaiveDate::from_ymd_opt(2022, 2, 17)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert!((from_date(naive).unwrap() - 19_040.5).abs() < 1e-6);
}

#[test]
fn from_date_clock_expressions() {
    assert!((from_date("-12:00").unwrap() + 0.5).abs() < 1e-6);
    assert!((from_date("-0:05").unwrap() + 0.003_472_222_22).abs() < 1e-9);
    assert!((from_date("25:50").unwrap() - 1.076_388_888_888_888_8).abs() < 1e-6);
}

#[test]
fn clock_expressions_past_the_calendar_round_trip_numerically() {
    let days = from_date("3000000000:00").unwrap();
    assert!((days - 125_000_000.0).abs() < 1e-6);

    let day = EpochDay::new("3000000000:00").unwrap();
    assert_eq!(day.origin(), "3000000000:00");
    assert!(matches!(to_date(day.value()), Err(EdayError::OutOfRange { .. })));
}

#[test]
fn duration_and_negation_are_additive_inverses() {
    assert_eq!(from_date("-1:15").unwrap() + from_date("1:15").unwrap(), 0.0);
}

#[test]
fn minus_on_a_date_is_arithmetic_negation() {
    assert!((from_date("-1970-01-10").unwrap() + 9.0).abs() < 1e-12);
}

#[test]
fn from_date_rejects_garbage() {
    assert!(matches!(
        from_date("the day after tomorrow"),
        Err(EdayError::InvalidFormat { .. })
    ));
}

#[test]
fn to_date_known_values() {
    assert_eq!(
        to_date(0).unwrap(),
        Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        to_date(1).unwrap(),
        Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap()
    );

    let dt = to_date(18_864.5).unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2021, 8, 25));
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 0, 0));

    let dt = to_date("18864.5").unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2021, 8, 25));
}

#[test]
fn to_date_display_range_bounds() {
    let dt = to_date(MIN_DISPLAY_DAY).unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (1, 1, 1));

    let dt = to_date(MAX_DISPLAY_DAY).unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (9999, 12, 31));
}

#[test]
fn round_trip_within_display_range() {
    for day in [
        MIN_DISPLAY_DAY,
        -365_243.219_9,
        -1.25,
        0.0,
        0.000_123,
        18_864.5,
        19_040.123_456,
        1_000_000.75,
        MAX_DISPLAY_DAY,
    ] {
        let back = from_date(to_date(day).unwrap()).unwrap();
        assert!((back - day).abs() < 1e-6, "{day} -> {back}");
    }
}

#[test]
fn to_civil_is_total_beyond_chrono() {
    let civil = to_civil(-1e11).unwrap();
    assert!(civil.year < -270_000_000);
    assert!((civil.epoch_day() + 1e11).abs() < 1e-3);
    assert!(matches!(to_date(-1e11), Err(EdayError::OutOfRange { .. })));
    assert!(matches!(to_civil(f64::NAN), Err(EdayError::NonFinite { .. })));
}

#[test]
fn to_civil_past_i64_days() {
    for day in [1e19, -1e19, 1e25] {
        let civil = to_civil(day).unwrap();
        assert!(((civil.epoch_day() - day) / day).abs() < 1e-12, "{day}");
    }
    assert!(to_civil(1e25).unwrap().year > 27_000_000_000_000_000_000);
    assert!(matches!(to_civil(1e300), Err(EdayError::OutOfRange { .. })));
}

#[test]
fn now_matches_system_clock() {
    let before = from_date(Utc::now()).unwrap();
    let current = now();
    let after = from_date(Utc::now()).unwrap();
    assert!(current.value() >= before - 1e-9 && current.value() <= after + 1e-9);

    let dt = current.to_date().unwrap();
    let drift = (Utc::now() - dt).num_milliseconds().abs();
    assert!(drift < 1_000, "drift {drift} ms");
}

#[test]
fn epoch_day_arithmetic_closure() {
    let (x, y) = (19_040.25, -3.5);
    assert_eq!(
        EpochDay::from_value(x) + EpochDay::from_value(y),
        EpochDay::from_value(x + y)
    );
    assert_eq!(
        EpochDay::from_value(x) - EpochDay::from_value(y),
        EpochDay::from_value(x - y)
    );

    let a = EpochDay::new("2022-02-17").unwrap();
    let b = EpochDay::new("2022-02-18").unwrap();
    assert!(((a.clone() + 1.0).value() - b.value()).abs() < 1e-6);
    assert!(((b - a).value() - 1.0).abs() < 1e-6);
}

#[test]
fn epoch_day_display() {
    let day = EpochDay::new("2022-02-17").unwrap();
    assert_eq!(day.to_string(), "19040.0 <2022-02-17 00:00:00+00:00>");

    let sum = EpochDay::new("25:50").unwrap() + EpochDay::new("-0:05").unwrap();
    assert!((sum.value() - 1.072_916_666_666_666_5).abs() < 1e-9);

    assert_eq!(EpochDay::from_value(1e16).to_string(), "1e+16 <1e+16>");
}

#[cfg(feature = "serde")]
#[test]
fn serde_epoch_day_in_a_struct() {
    #[derive(serde::Deserialize)]
    struct Event {
        at: EpochDay,
        length: EpochDay,
    }

    let event: Event =
        serde_json::from_str(r#"{ "at": "2022-02-17T12:00:00Z", "length": "1:30" }"#).unwrap();
    assert!((event.at.value() - 19_040.5).abs() < 1e-9);
    assert!((event.length.value() - 1.5 / 24.0).abs() < 1e-12);
}
