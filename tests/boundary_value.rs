use nextdate::{Bound, CalendarDate, DateError, Field, compute_next_date, days_in_month, is_leap_year};
use rstest::rstest;

#[rstest]
#[case(1, 1, 1812, (1, 2, 1812))]
#[case(1, 31, 1991, (2, 1, 1991))]
#[case(4, 30, 2005, (5, 1, 2005))]
#[case(2, 28, 1991, (3, 1, 1991))]
#[case(2, 28, 1992, (2, 29, 1992))]
#[case(2, 29, 1992, (3, 1, 1992))]
#[case(12, 31, 2011, (1, 1, 2012))]
#[case(2, 28, 1900, (3, 1, 1900))]
#[case(2, 28, 2000, (2, 29, 2000))]
#[case(2, 29, 2000, (3, 1, 2000))]
fn valid_boundaries(#[case] m: u8, #[case] d: u8, #[case] y: u16, #[case] expected: (u8, u8, u16)) {
    assert_eq!(compute_next_date(m, d, y), Ok(expected));
}

#[rstest]
#[case(0, 10, 1991, Field::Month, 0)]
#[case(13, 10, 1991, Field::Month, 13)]
#[case(5, 0, 1991, Field::Day, 0)]
#[case(5, 32, 1991, Field::Day, 32)]
#[case(6, 15, 1811, Field::Year, 1811)]
#[case(6, 15, 2013, Field::Year, 2013)]
fn simple_out_of_range(
    #[case] m: u8,
    #[case] d: u8,
    #[case] y: u16,
    #[case] field: Field,
    #[case] value: u16,
) {
    assert_eq!(
        compute_next_date(m, d, y),
        Err(DateError::OutOfRange { field, value })
    );
}

#[rstest]
#[case(6, 31, 1991)]
#[case(4, 31, 1991)]
#[case(2, 30, 1992)]
#[case(2, 29, 1991)]
#[case(2, 29, 1900)]
fn invalid_combinations(#[case] m: u8, #[case] d: u8, #[case] y: u16) {
    let err = compute_next_date(m, d, y).unwrap_err();
    assert!(err.is_invalid_combination(), "{m}/{d}/{y}: {err}");
}

#[test]
fn dec_31_2012_next_is_out_of_domain() {
    assert_eq!(
        compute_next_date(12, 31, 2012),
        Err(DateError::DomainExceeded {
            bound: Bound::Upper
        })
    );
}

#[rstest]
#[case((3, 15, 1999), (3, 14, 1999))]
#[case((5, 1, 1999), (4, 30, 1999))]
#[case((8, 1, 1999), (7, 31, 1999))]
#[case((3, 1, 1991), (2, 28, 1991))]
#[case((3, 1, 1992), (2, 29, 1992))]
#[case((1, 1, 1995), (12, 31, 1994))]
fn prev_day(#[case] from: (u8, u8, u16), #[case] expected: (u8, u8, u16)) {
    let date = CalendarDate::try_from(from).unwrap();
    assert_eq!(date.prev_day().unwrap().as_tuple(), expected);
}

#[test]
fn prev_day_min_boundary_fails() {
    assert_eq!(
        CalendarDate::MIN.prev_day(),
        Err(DateError::DomainExceeded {
            bound: Bound::Lower
        })
    );
}

#[test]
fn shift_forward_and_backward() {
    let date = CalendarDate::new(12, 30, 2011).unwrap();
    assert_eq!(date.shift(2).unwrap().as_tuple(), (1, 1, 2012));
    assert_eq!(date.shift(-2).unwrap().as_tuple(), (12, 28, 2011));
}

#[test]
fn shift_outside_domain_fails() {
    assert!(CalendarDate::MAX.shift(1).unwrap_err().is_domain_exceeded());
    assert!(CalendarDate::MIN.shift(-1).unwrap_err().is_domain_exceeded());
}

#[test]
fn days_in_month_and_leap_logic() {
    assert_eq!(days_in_month(2, 2000), 29);
    assert_eq!(days_in_month(2, 1900), 28);
    assert!(is_leap_year(1996));
    assert!(!is_leap_year(1991));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
}
