//! Text rendering of solver output.
//!
//! Every number goes through [`format_value`], so a negative zero never shows
//! up as `-0.00` no matter which renderer produced it.

use itertools::Itertools;

use crate::matrix::{AugmentedMatrix, Solution};

pub fn format_value(v: f64) -> String {
    normalize_negative_zero(&format!("{v:.2}"))
}

/// Maps `-0`, `-0.0`, `-0.00`, ... to the same text without the sign.
pub fn normalize_negative_zero(text: &str) -> String {
    match text.strip_prefix('-') {
        Some(rest) if !rest.is_empty() && rest.chars().all(|c| c == '0' || c == '.') => {
            rest.to_string()
        }
        _ => text.to_string(),
    }
}

pub fn render_matrix(m: &AugmentedMatrix) -> String {
    m.rows()
        .map(|row| row.iter().map(|v| format_value(*v)).join("\t"))
        .join("\n")
}

pub fn render_solution(solution: &Solution) -> String {
    solution
        .labeled()
        .map(|(i, v)| format!("x{i} = {}", format_value(v)))
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn two_decimal_places() {
        assert_eq!(format_value(2.0), "2.00");
        assert_eq!(format_value(-1.0), "-1.00");
        assert_eq!(format_value(1.0 / 3.0), "0.33");
        assert_eq!(format_value(2.675e3), "2675.00");
    }

    #[test]
    fn negative_zero_is_shown_as_zero() {
        assert_eq!(format_value(-0.0), "0.00");
        assert_eq!(format_value(-0.004), "0.00");
        assert_eq!(format_value(-0.005_1), "-0.01");
    }

    #[test]
    fn normalization_is_idempotent() {
        for text in ["-0.00", "0.00", "-0", "-12.50", "3.10", "-", "-0.01"] {
            let once = normalize_negative_zero(text);
            assert_eq!(normalize_negative_zero(&once), once);
        }
        assert_eq!(normalize_negative_zero("-0.00"), "0.00");
        assert_eq!(normalize_negative_zero("-0.01"), "-0.01");
        assert_eq!(normalize_negative_zero("-"), "-");
    }

    #[test]
    fn renders_matrix_and_solution() {
        let m = AugmentedMatrix::from_rows(vec![vec![1.0, -0.0, 2.0], vec![0.0, 1.0, -1.5]]).unwrap();
        assert_eq!(render_matrix(&m), "1.00\t0.00\t2.00\n0.00\t1.00\t-1.50");
        assert_eq!(
            render_solution(&Solution::from_reduced(&m)),
            "x1 = 2.00\nx2 = -1.50"
        );
    }
}
