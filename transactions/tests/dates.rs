use transactions::{Error, format_date};

#[test]
fn fractional_iso_date_is_rendered_as_dd_mm_yyyy() {
    assert_eq!(format_date("2018-07-11T02:26:18.671407").unwrap(), "11.07.2018");
    assert_eq!(format_date("2019-03-23T01:09:46.296404").unwrap(), "23.03.2019");
}

#[test]
fn zulu_iso_date_is_rendered_as_dd_mm_yyyy() {
    assert_eq!(format_date("2023-09-05T11:30:32Z").unwrap(), "05.09.2023");
}

#[test]
fn empty_date_renders_as_empty_string() {
    assert_eq!(format_date("").unwrap(), "");
}

#[test]
fn unrecognized_date_string_is_rejected() {
    let err = format_date("11 июля 2018").unwrap_err();
    assert!(matches!(err, Error::DateFormat(ref s) if s == "11 июля 2018"), "got: {err}");

    let err = format_date("2018-07-11").unwrap_err();
    assert!(matches!(err, Error::DateFormat(_)), "got: {err}");
}
