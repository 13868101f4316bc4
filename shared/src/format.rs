//! Display formatting in the Brazilian Portuguese convention used across the UI.

use crate::models::{CategoryPurpose, TransactionKind};

pub const CURRENCY_PREFIX: &str = "R$";

/// Format an amount as Brazilian reais, e.g. `1234.56` -> `"R$ 1.234,56"`.
///
/// Negative values put the sign before the prefix (`"-R$ 10,00"`). Values
/// that round to zero cents are rendered unsigned, and non-finite values are
/// rendered as zero.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = units.bytes().chain(cents.bytes()).all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!("{}{} {},{}", sign, CURRENCY_PREFIX, group_thousands(units), cents)
}

/// Insert `.` between groups of three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let reversed: Vec<char> = digits.chars().rev().collect();
    let mut out = Vec::with_capacity(reversed.len() + reversed.len() / 3);
    for (i, ch) in reversed.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Percentage with one decimal place, e.g. `"42.5%"`
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Label used in the category list's purpose column
pub fn purpose_label(purpose: CategoryPurpose) -> &'static str {
    match purpose {
        CategoryPurpose::Expense => "Despesa",
        CategoryPurpose::Income => "Receita",
        CategoryPurpose::Both => "Despesa/Receita",
    }
}

/// CSS class colouring amounts and badges by kind
pub fn kind_css_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "tipo-receita",
        TransactionKind::Expense => "tipo-despesa",
    }
}

/// Transaction count shown on the totals dashboards, e.g. `"3 transações"`
pub fn transaction_count_label(count: usize) -> String {
    format!("{} transações", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(-10.0), "-R$ 10,00");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(999.0), "R$ 999,00");
        assert_eq!(format_currency(1000.0), "R$ 1.000,00");
        assert_eq!(format_currency(1_000_000.5), "R$ 1.000.000,50");
        assert_eq!(format_currency(-1_234_567.891), "-R$ 1.234.567,89");
    }

    #[test]
    fn test_format_currency_rounding_edges() {
        assert_eq!(format_currency(0.005), "R$ 0,01");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
        assert_eq!(format_currency(f64::NAN), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_large_totals_keep_every_digit() {
        assert_eq!(format_currency(1e18), "R$ 1.000.000.000.000.000.000,00");
        assert_eq!(format_currency(1e20), "R$ 100.000.000.000.000.000.000,00");
        assert_eq!(format_currency(-1e20), "-R$ 100.000.000.000.000.000.000,00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
    }

    #[test]
    fn test_format_currency_is_stable_on_its_own_value() {
        // Re-formatting the numeric value shown never changes the text.
        for value in [1234.56, 0.0, -10.0, 0.1 + 0.2] {
            let once = format_currency(value);
            let shown: f64 = once
                .trim_start_matches('-')
                .trim_start_matches("R$ ")
                .replace('.', "")
                .replace(',', ".")
                .parse()
                .unwrap();
            let shown = if value < 0.0 { -shown } else { shown };
            assert_eq!(format_currency(shown), once);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(purpose_label(CategoryPurpose::Both), "Despesa/Receita");
        assert_eq!(kind_css_class(TransactionKind::Income), "tipo-receita");
        assert_eq!(format_percentage(33.333), "33.3%");
        assert_eq!(transaction_count_label(0), "0 transações");
        assert_eq!(transaction_count_label(3), "3 transações");
    }
}
