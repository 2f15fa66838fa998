use crate::{AutocompletionMode, TimeZoneMode, UuidEncoding, ViewMode};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};

#[test]
fn given_in_range_raw_values_when_from_raw_then_round_trips_through_as_raw() {
    for raw in 0..=3 {
        assert_that!(UuidEncoding::from_raw(raw).as_raw(), eq(raw));
        assert_that!(ViewMode::from_raw(raw).as_raw(), eq(raw));
    }
    for raw in 0..=1 {
        assert_that!(TimeZoneMode::from_raw(raw).as_raw(), eq(raw));
    }
    for raw in 0..=2 {
        assert_that!(AutocompletionMode::from_raw(raw).as_raw(), eq(raw));
    }
}

#[test]
fn given_out_of_range_uuid_encoding_when_from_raw_then_default() {
    assert_that!(UuidEncoding::from_raw(4), eq(UuidEncoding::Default));
    assert_that!(UuidEncoding::from_raw(-1), eq(UuidEncoding::Default));
}

#[test]
fn given_out_of_range_time_zone_when_from_raw_then_utc() {
    assert_that!(TimeZoneMode::from_raw(2), eq(TimeZoneMode::Utc));
    assert_that!(TimeZoneMode::from_raw(-5), eq(TimeZoneMode::Utc));
}

#[test]
fn given_out_of_range_view_mode_when_from_raw_then_custom() {
    assert_that!(ViewMode::from_raw(3), eq(ViewMode::Custom));
    assert_that!(ViewMode::from_raw(99), eq(ViewMode::Custom));
    assert_that!(ViewMode::from_raw(-1), eq(ViewMode::Custom));
}

#[test]
fn given_out_of_range_autocompletion_when_from_raw_then_all() {
    assert_that!(AutocompletionMode::from_raw(3), eq(AutocompletionMode::All));
    assert_that!(AutocompletionMode::from_raw(-1), eq(AutocompletionMode::All));
}

#[test]
fn given_defaults_then_match_fresh_document_preferences() {
    assert_that!(UuidEncoding::default(), eq(UuidEncoding::Default));
    assert_that!(TimeZoneMode::default(), eq(TimeZoneMode::Utc));
    assert_that!(ViewMode::default(), eq(ViewMode::Tree));
    assert_that!(AutocompletionMode::default(), eq(AutocompletionMode::All));
}

#[test]
fn given_display_text_when_from_str_then_parses_back() {
    assert_that!(
        ViewMode::from_str(&ViewMode::Table.to_string()).unwrap(),
        eq(ViewMode::Table)
    );
    assert_that!(
        UuidEncoding::from_str("c_sharp").unwrap(),
        eq(UuidEncoding::CSharp)
    );
    assert_that!(
        AutocompletionMode::from_str("no_collection_names").unwrap(),
        eq(AutocompletionMode::NoCollectionNames)
    );
    assert_that!(
        TimeZoneMode::from_str("local_time").unwrap(),
        eq(TimeZoneMode::LocalTime)
    );
}

#[test]
fn given_unknown_text_when_from_str_then_error() {
    assert_that!(ViewMode::from_str("grid"), err(anything()));
    assert_that!(TimeZoneMode::from_str(""), err(anything()));
}
