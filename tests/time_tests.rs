use lifreport::models::Timestamp;
use lifreport::utils::time::{format_elapsed, parse_hms};

#[test]
fn test_parse_hms_valid() {
    assert_eq!(parse_hms("01:02:03"), Timestamp::Valid(3723));
    assert_eq!(parse_hms("00:00:00"), Timestamp::Valid(0));
    assert_eq!(parse_hms("23:59:59"), Timestamp::Valid(86_399));
}

#[test]
fn test_parse_hms_accepts_out_of_range_components() {
    assert_eq!(parse_hms("25:00:00"), Timestamp::Valid(90_000));
    assert_eq!(parse_hms("0:90:0"), Timestamp::Valid(5_400));
}

#[test]
fn test_parse_hms_unparsable() {
    assert_eq!(parse_hms("bad"), Timestamp::Unparsable);
    assert_eq!(parse_hms("not-a-time"), Timestamp::Unparsable);
    assert_eq!(parse_hms("10:00"), Timestamp::Unparsable);
    assert_eq!(parse_hms("10:00:00:00"), Timestamp::Unparsable);
    assert_eq!(parse_hms("aa:bb:cc"), Timestamp::Unparsable);
    assert_eq!(parse_hms("10:x:05"), Timestamp::Unparsable);
    assert_eq!(parse_hms("-1:00:00"), Timestamp::Unparsable);
    assert_eq!(parse_hms(""), Timestamp::Unparsable);
}

#[test]
fn test_unparsable_sorts_after_valid() {
    let mut times = vec![
        Timestamp::Unparsable,
        Timestamp::Valid(u64::MAX),
        Timestamp::Valid(5),
    ];
    times.sort();
    assert_eq!(
        times,
        vec![
            Timestamp::Valid(5),
            Timestamp::Valid(u64::MAX),
            Timestamp::Unparsable
        ]
    );
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(3661), "01:01:01");
    assert_eq!(format_elapsed(59), "00:00:59");
    assert_eq!(format_elapsed(3605), "01:00:05");
    assert_eq!(format_elapsed(1795), "00:29:55");
}

#[test]
fn test_format_elapsed_widens_hours() {
    assert_eq!(format_elapsed(100 * 3600), "100:00:00");
}

#[test]
fn test_format_elapsed_huge_hours_are_not_clamped() {
    let hours = 1_000_000_000_000_000u64;
    assert_eq!(format_elapsed(hours * 3600 + 61), format!("{hours}:01:01"));
    assert_eq!(
        parse_hms(&format!("{hours}:00:00")),
        Timestamp::Valid(hours * 3600)
    );
}

#[test]
fn test_parse_hms_empty_components_count_as_zero() {
    assert_eq!(parse_hms("10::05"), Timestamp::Valid(36_005));
    assert_eq!(parse_hms("::"), Timestamp::Valid(0));
    assert_eq!(parse_hms(" 01 : : 30 "), Timestamp::Valid(3_630));
}

#[test]
fn test_since_requires_two_valid_times() {
    let a = Timestamp::Valid(100);
    let b = Timestamp::Valid(160);
    assert_eq!(b.since(&a), Some(60));
    assert_eq!(Timestamp::Unparsable.since(&a), None);
    assert_eq!(b.since(&Timestamp::Unparsable), None);
}
