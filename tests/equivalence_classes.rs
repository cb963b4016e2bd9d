use next_date::{NextDateError, next_date};

#[test]
fn month_classes() {
    let cases = [
        ((1, 15, 2000), "01/16/2000"),  // 31-day month
        ((4, 15, 2000), "04/16/2000"),  // 30-day month
        ((2, 15, 2000), "02/16/2000"),  // February, leap year
        ((2, 15, 2023), "02/16/2023"),  // February, common year
    ];
    for ((month, day, year), expected) in cases {
        assert_eq!(next_date(month, day, year).unwrap(), expected);
    }
}

#[test]
fn leap_year_classes() {
    // Divisible by 400
    assert_eq!(next_date(2, 28, 2000).unwrap(), "02/29/2000");
    // Divisible by 4, not by 100
    assert_eq!(next_date(2, 28, 2024).unwrap(), "02/29/2024");
    // Divisible by 100, not by 400
    assert_eq!(next_date(2, 28, 2100).unwrap(), "03/01/2100");
    assert_eq!(next_date(2, 28, 1900).unwrap(), "03/01/1900");
    // Not divisible by 4
    assert_eq!(next_date(2, 28, 2023).unwrap(), "03/01/2023");
}

#[test]
fn transition_classes() {
    let cases = [
        ((6, 15, 2000), "06/16/2000"),
        ((1, 31, 2000), "02/01/2000"),
        ((4, 30, 2000), "05/01/2000"),
        ((2, 29, 2000), "03/01/2000"),
        ((2, 28, 2019), "03/01/2019"),
        ((12, 31, 2000), "01/01/2001"),
    ];
    for ((month, day, year), expected) in cases {
        assert_eq!(
            next_date(month, day, year).unwrap(),
            expected,
            "next_date({month}, {day}, {year})"
        );
    }
}

#[test]
fn invalid_classes() {
    assert_eq!(
        next_date(0, 15, 2000),
        Err(NextDateError::MonthOutOfRange { month: 0 })
    );
    assert_eq!(
        next_date(13, 15, 2000),
        Err(NextDateError::MonthOutOfRange { month: 13 })
    );
    assert_eq!(
        next_date(1, 0, 2000),
        Err(NextDateError::DayOutOfRange { day: 0 })
    );
    assert_eq!(
        next_date(2, 30, 2000),
        Err(NextDateError::InvalidDayForMonth {
            day: 30,
            month: 2,
            year: 2000,
            max: 29
        })
    );
    assert_eq!(
        next_date(6, 15, 1811),
        Err(NextDateError::YearOutOfRange { year: 1811 })
    );
    assert_eq!(
        next_date(6, 15, 2101),
        Err(NextDateError::YearOutOfRange { year: 2101 })
    );
}

#[test]
fn invalid_year_wins_over_invalid_day() {
    assert_eq!(
        next_date(2, 31, 1700),
        Err(NextDateError::YearOutOfRange { year: 1700 })
    );
    assert_eq!(
        next_date(14, 40, 2000),
        Err(NextDateError::MonthOutOfRange { month: 14 })
    );
}
