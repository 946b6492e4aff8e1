//! Bundled Argentina monthly CPI inflation, 2017 through April 2025
//!
//! Each row is a year followed by its monthly rates in percent, January first.
//! A year with fewer than twelve entries has no observations for the later months.

pub(super) const ARGENTINA_MONTHLY: &[(i32, &[f64])] = &[
    (2017, &[1.3, 2.5, 2.4, 2.6, 1.3, 1.2, 1.7, 1.4, 1.9, 1.5, 1.4, 3.1]),
    (2018, &[1.8, 2.4, 2.3, 2.7, 2.1, 3.7, 3.1, 3.9, 6.5, 5.4, 3.2, 3.7]),
    (2019, &[2.9, 3.8, 4.7, 3.4, 3.1, 2.7, 2.2, 4.0, 5.9, 3.3, 4.3, 3.7]),
    (2020, &[2.3, 2.0, 3.3, 1.5, 1.5, 2.2, 1.9, 2.7, 2.8, 3.8, 3.2, 4.0]),
    (2021, &[4.0, 3.6, 4.8, 4.1, 3.3, 3.2, 3.0, 2.5, 3.5, 3.5, 2.5, 3.8]),
    (2022, &[3.9, 4.7, 6.7, 5.1, 5.1, 5.3, 7.4, 7.0, 6.2, 6.3, 4.9, 5.1]),
    (2023, &[6.0, 6.6, 7.7, 8.4, 7.8, 6.0, 6.3, 12.4, 12.7, 8.3, 12.8, 25.5]),
    (2024, &[20.6, 13.2, 11.0, 8.8, 4.2, 4.6, 4.0, 4.2, 3.5, 2.7, 2.4, 2.4]),
    (2025, &[2.781, 2.5, 2.3, 2.718]),
];
