//! Property tests for formatting and the parse/format round-trip.

use pnr_id::chrono::NaiveDate;
use pnr_id::{formats, Format, IdentityNumber, PinError, PinFormatter};
use pnr_testing::{
    any_date, invalid_ordinal, non_numeric_string, twentieth_century_date, valid_ordinal,
};
use proptest::prelude::*;
use rstest::rstest;

/// Layout shape as `(length, dash positions)`.
fn shape(format: Format) -> (usize, &'static [usize]) {
    match format {
        Format::NoSplitTwelveDigits => (12, &[]),
        Format::NoSplitTenDigits => (10, &[]),
        Format::TwelveDigits => (13, &[8]),
        Format::TenDigits => (11, &[6]),
        Format::SplitTwelveDigits => (15, &[4, 7, 10]),
        Format::SplitTenDigits => (13, &[2, 5, 8]),
    }
}

fn assert_shape(format: Format, output: &str) {
    let (len, dashes) = shape(format);
    assert_eq!(output.len(), len, "{format}: {output}");
    for (i, c) in output.chars().enumerate() {
        if dashes.contains(&i) {
            assert_eq!(c, '-', "{format}: {output}");
        } else {
            assert!(c.is_ascii_digit(), "{format}: {output}");
        }
    }
}

#[test]
fn canonical_example() {
    let pin = IdentityNumber::new(NaiveDate::from_ymd_opt(1996, 6, 15).unwrap(), 42).unwrap();
    let text = pin.to_formatted_string(&formats::TWELVE_DIGITS);
    assert_eq!(text, "19960615-0042");
    assert_eq!(IdentityNumber::parse(&text).unwrap(), pin);
}

#[rstest]
#[case(formats::NO_SPLIT_TWELVE_DIGITS)]
#[case(formats::NO_SPLIT_TEN_DIGITS)]
#[case(formats::TWELVE_DIGITS)]
#[case(formats::TEN_DIGITS)]
#[case(formats::SPLIT_TWELVE_DIGITS)]
#[case(formats::SPLIT_TEN_DIGITS)]
fn boundary_values_roundtrip(#[case] format: Format) {
    for (y, m, d, ordinal) in [(1900, 1, 1, 0), (1999, 12, 31, 9999), (1960, 2, 29, 1)] {
        let pin = IdentityNumber::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), ordinal).unwrap();
        let text = format.format(&pin);
        assert_shape(format, &text);
        assert_eq!(IdentityNumber::parse(&text).unwrap(), pin, "{format}: {text}");
    }
}

#[test]
fn ten_digit_layouts_lose_the_century() {
    let pin = IdentityNumber::new(NaiveDate::from_ymd_opt(2005, 3, 1).unwrap(), 7).unwrap();
    let text = pin.to_formatted_string(&formats::TEN_DIGITS);
    assert_eq!(text, "050301-0007");
    assert_eq!(
        IdentityNumber::parse(&text).unwrap().date_of_birth(),
        NaiveDate::from_ymd_opt(1905, 3, 1).unwrap()
    );
}

proptest! {
    #[test]
    fn century_layouts_roundtrip(date in any_date(), ordinal in valid_ordinal()) {
        let pin = IdentityNumber::new(date, ordinal).unwrap();
        for format in Format::ALL.into_iter().filter(Format::has_century) {
            let text = pin.to_formatted_string(&format);
            prop_assert_eq!(IdentityNumber::parse(&text).unwrap(), pin);
        }
    }

    #[test]
    fn every_layout_roundtrips_in_nineteen_hundreds(
        date in twentieth_century_date(),
        ordinal in valid_ordinal(),
    ) {
        let pin = IdentityNumber::new(date, ordinal).unwrap();
        for format in Format::ALL {
            let text = pin.to_formatted_string(&format);
            prop_assert_eq!(IdentityNumber::parse(&text).unwrap(), pin);
        }
    }

    #[test]
    fn every_layout_has_fixed_shape(date in any_date(), ordinal in valid_ordinal()) {
        let pin = IdentityNumber::new(date, ordinal).unwrap();
        for format in Format::ALL {
            assert_shape(format, &format.format(&pin));
        }
    }

    #[test]
    fn out_of_range_ordinals_are_rejected(date in any_date(), ordinal in invalid_ordinal()) {
        let is_ordinal_error = matches!(
            IdentityNumber::new(date, ordinal),
            Err(PinError::OrdinalOutOfRange { .. })
        );
        prop_assert!(is_ordinal_error);
    }

    #[test]
    fn random_text_never_parses(input in non_numeric_string()) {
        prop_assert_eq!(IdentityNumber::try_parse(&input), None);
        prop_assert!(IdentityNumber::parse(&input).unwrap_err().is_format_error());
    }

    #[test]
    fn time_of_day_is_ignored(
        date in any_date(),
        ordinal in valid_ordinal(),
        a in 0u32..86_400,
        b in 0u32..86_400,
    ) {
        let at = |secs: u32| date.and_hms_opt(secs / 3600, secs / 60 % 60, secs % 60).unwrap();
        prop_assert_eq!(
            IdentityNumber::from_datetime(at(a), ordinal).unwrap(),
            IdentityNumber::from_datetime(at(b), ordinal).unwrap()
        );
    }
}
