use super::*;

fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(hh, mm, ss))
        .expect("valid test datetime")
}

#[test]
fn parse_fuzzy_recognizes_common_filename_dates() {
    let cases: &[(&str, Option<NaiveDateTime>)] = &[
        ("IMG_20200115_143022", Some(dt(2020, 1, 15, 14, 30, 22))),
        ("IMG_20200115", Some(dt(2020, 1, 15, 0, 0, 0))),
        ("VID20190704123456", Some(dt(2019, 7, 4, 12, 34, 56))),
        ("scan_202103041530", Some(dt(2021, 3, 4, 15, 30, 0))),
        ("2020-01-15 party", Some(dt(2020, 1, 15, 0, 0, 0))),
        ("2020_01_15_14_30_22 clip", Some(dt(2020, 1, 15, 14, 30, 22))),
        (
            "Screenshot 2023-06-01 at 09.15.42",
            Some(dt(2023, 6, 1, 9, 15, 42)),
        ),
        ("PXL_2022.12.24.1800", Some(dt(2022, 12, 24, 18, 0, 0))),
        ("01-02-2020 notes", Some(dt(2020, 1, 2, 0, 0, 0))),
        ("25.12.2018 xmas", Some(dt(2018, 12, 25, 0, 0, 0))),
        ("holiday 15 Jan 2020", Some(dt(2020, 1, 15, 0, 0, 0))),
        ("January 15, 2020 - beach", Some(dt(2020, 1, 15, 0, 0, 0))),
        ("Sept 2019 trip", Some(dt(2019, 9, 1, 0, 0, 0))),
        ("2021 mar 3rd", Some(dt(2021, 3, 3, 0, 0, 0))),
        ("vacation 2019", Some(dt(2019, 1, 1, 0, 0, 0))),
        ("photo", None),
        ("", None),
        ("IMG_12", None),
        ("may the force", None),
    ];

    let parser = TokenDateParser;
    for (text, expected) in cases {
        assert_eq!(
            parser.parse_fuzzy(text),
            *expected,
            "parse_fuzzy({:?})",
            text
        );
    }
}

#[test]
fn parse_fuzzy_skips_impossible_calendar_dates() {
    let parser = TokenDateParser;

    // Feb 30th is rejected, scanning falls through to the bare year.
    assert_eq!(
        parser.parse_fuzzy("2021-02-30"),
        Some(dt(2021, 1, 1, 0, 0, 0))
    );
    assert_eq!(parser.parse_fuzzy("20211341"), None);
}

#[test]
fn parse_fuzzy_prefers_numeric_dates_over_month_names() {
    let parser = TokenDateParser;
    assert_eq!(
        parser.parse_fuzzy("Jan 2001 copy of 2019-05-06"),
        Some(dt(2019, 5, 6, 0, 0, 0))
    );
}

#[test]
fn parse_all_lists_every_reading_best_first() {
    let parser = TokenDateParser;
    let cases: &[(&str, Vec<NaiveDateTime>)] = &[
        (
            "IMG_4521 2019",
            vec![dt(4521, 1, 1, 0, 0, 0), dt(2019, 1, 1, 0, 0, 0)],
        ),
        (
            "Jan 2001 copy of 2019-05-06",
            vec![dt(2019, 5, 6, 0, 0, 0), dt(2001, 1, 1, 0, 0, 0)],
        ),
        ("2019-05-06", vec![dt(2019, 5, 6, 0, 0, 0)]),
        ("photo", vec![]),
    ];

    for (text, expected) in cases {
        assert_eq!(&parser.parse_all(text), expected, "parse_all({:?})", text);
        assert_eq!(parser.parse_fuzzy(text), expected.first().copied());
    }
}

#[test]
fn invalid_trailing_time_keeps_the_date() {
    let parser = TokenDateParser;
    assert_eq!(
        parser.parse_fuzzy("20200115_996622"),
        Some(dt(2020, 1, 15, 0, 0, 0))
    );
    assert_eq!(
        parser.parse_fuzzy("2020-01-15 99 99"),
        Some(dt(2020, 1, 15, 0, 0, 0))
    );
}

#[test]
fn month_from_name_cases() {
    let cases: &[(&str, Option<u32>)] = &[
        ("Jan", Some(1)),
        ("JANUARY", Some(1)),
        ("feb", Some(2)),
        ("May", Some(5)),
        ("sep", Some(9)),
        ("Sept", Some(9)),
        ("september", Some(9)),
        ("dec", Some(12)),
        ("ja", None),
        ("janu", None),
        ("marathon", None),
        ("", None),
    ];

    for (word, expected) in cases {
        assert_eq!(month_from_name(word), *expected, "month_from_name({:?})", word);
    }
}

#[test]
fn compact_time_cases() {
    assert_eq!(compact_time("1430"), NaiveTime::from_hms_opt(14, 30, 0));
    assert_eq!(compact_time("143022"), NaiveTime::from_hms_opt(14, 30, 22));
    assert_eq!(compact_time("2561"), None);
    assert_eq!(compact_time("12345"), None);
}

#[test]
fn parse_fuzzy_reads_iso_8601_time() {
    let parser = TokenDateParser;
    assert_eq!(
        parser.parse_fuzzy("export-2020-01-15T14:30:22Z"),
        Some(dt(2020, 1, 15, 14, 30, 22))
    );
}
