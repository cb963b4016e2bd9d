//! One test per rollover rule:
//!
//! | Rule | Month         | Day | Action          |
//! |------|---------------|-----|-----------------|
//! | 1    | any           | 15  | day + 1         |
//! | 2    | 31-day        | 31  | next month      |
//! | 3    | 30-day        | 30  | next month      |
//! | 4    | Feb, leap     | 28  | day + 1         |
//! | 5    | Feb, leap     | 29  | next month      |
//! | 6    | Feb, common   | 28  | next month      |
//! | 7    | December      | 31  | next year       |

use next_date::next_date;

fn check(cases: &[(i32, i32, i32, &str)]) {
    for &(month, day, year, expected) in cases {
        assert_eq!(
            next_date(month, day, year).unwrap(),
            expected,
            "next_date({month}, {day}, {year})"
        );
    }
}

#[test]
fn rule1_normal_day() {
    check(&[(6, 15, 2000, "06/16/2000")]);
}

#[test]
fn rule2_last_day_of_31_day_month() {
    check(&[
        (1, 31, 2000, "02/01/2000"),
        (3, 31, 2000, "04/01/2000"),
        (5, 31, 2000, "06/01/2000"),
        (7, 31, 2000, "08/01/2000"),
        (8, 31, 2000, "09/01/2000"),
        (10, 31, 2000, "11/01/2000"),
    ]);
}

#[test]
fn rule3_last_day_of_30_day_month() {
    check(&[
        (4, 30, 2000, "05/01/2000"),
        (6, 30, 2000, "07/01/2000"),
        (9, 30, 2000, "10/01/2000"),
        (11, 30, 2000, "12/01/2000"),
    ]);
}

#[test]
fn rule4_feb_28_leap_year() {
    check(&[(2, 28, 2000, "02/29/2000"), (2, 28, 2024, "02/29/2024")]);
}

#[test]
fn rule5_feb_29_leap_year() {
    check(&[(2, 29, 2000, "03/01/2000"), (2, 29, 2024, "03/01/2024")]);
}

#[test]
fn rule6_feb_28_common_year() {
    check(&[
        (2, 28, 2023, "03/01/2023"),
        (2, 28, 2100, "03/01/2100"),
        (2, 28, 2019, "03/01/2019"),
    ]);
}

#[test]
fn rule7_end_of_year() {
    check(&[(12, 31, 2000, "01/01/2001"), (12, 31, 2024, "01/01/2025")]);
}
