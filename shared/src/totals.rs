//! Display-only arithmetic for the totals dashboards.
//!
//! The server computes the sums; everything here derives percentages and
//! counts from data that has already been fetched.

use std::collections::HashMap;

use crate::models::{CategoryTotals, EntityId, PersonTotals, Transaction};

/// Colours cycled across category rows
pub const CATEGORY_COLORS: [&str; 6] = [
    "var(--category-blue)",
    "var(--category-orange)",
    "var(--category-green)",
    "var(--category-purple)",
    "var(--category-pink)",
    "var(--category-cyan)",
];

pub fn category_color(index: usize) -> &'static str {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

/// Number of transactions per person id.
///
/// Counted from a separately fetched transaction list, so it can drift from
/// the server totals if a transaction lands between the two requests.
pub fn count_by_person(transactions: &[Transaction]) -> HashMap<EntityId, usize> {
    count_by(transactions, |t| t.person_id)
}

/// Number of transactions per category id (same caveat as [`count_by_person`])
pub fn count_by_category(transactions: &[Transaction]) -> HashMap<EntityId, usize> {
    count_by(transactions, |t| t.category_id)
}

fn count_by(
    transactions: &[Transaction],
    key: impl Fn(&Transaction) -> EntityId,
) -> HashMap<EntityId, usize> {
    let mut counts = HashMap::new();
    for transaction in transactions {
        *counts.entry(key(transaction)).or_insert(0) += 1;
    }
    counts
}

/// Share of `value` in `total` as a percentage; zero when the total is zero
pub fn share_of_total(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    value.abs() / total * 100.0
}

/// A person's share of all money moved (income plus expense)
pub fn person_share(totals: &PersonTotals, total_income: f64, total_expense: f64) -> f64 {
    let grand_total = total_expense + total_income;
    if grand_total > 0.0 {
        (totals.total_expense + totals.total_income).abs() / grand_total * 100.0
    } else {
        0.0
    }
}

/// A category's share of all expenses
pub fn category_share(totals: &CategoryTotals, total_expense: f64) -> f64 {
    share_of_total(totals.total_expense, total_expense)
}

/// Category with the highest expense total; the earliest one wins ties
pub fn largest_expense_category(categories: &[CategoryTotals]) -> Option<&CategoryTotals> {
    categories.iter().fold(None, |largest, current| match largest {
        Some(prev) if current.total_expense <= prev.total_expense => Some(prev),
        _ => Some(current),
    })
}

/// Clamp a percentage into the range a progress bar can draw
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn transaction(id: EntityId, person_id: EntityId, category_id: EntityId) -> Transaction {
        Transaction {
            id,
            description: "Teste".to_string(),
            amount: 10.0,
            kind: TransactionKind::Expense,
            category_id,
            person_id,
            category: None,
            person: None,
        }
    }

    fn category_totals(id: EntityId, expense: f64) -> CategoryTotals {
        CategoryTotals {
            category_id: id,
            description: format!("Categoria {}", id),
            total_income: 0.0,
            total_expense: expense,
            balance: -expense,
        }
    }

    #[test]
    fn test_counts_by_foreign_key() {
        let transactions = vec![
            transaction(1, 1, 10),
            transaction(2, 1, 11),
            transaction(3, 2, 10),
        ];

        let by_person = count_by_person(&transactions);
        assert_eq!(by_person.get(&1), Some(&2));
        assert_eq!(by_person.get(&2), Some(&1));
        assert_eq!(by_person.get(&3), None);

        let by_category = count_by_category(&transactions);
        assert_eq!(by_category.get(&10), Some(&2));
        assert_eq!(by_category.get(&11), Some(&1));
    }

    #[test]
    fn test_share_of_total() {
        assert_eq!(share_of_total(25.0, 100.0), 25.0);
        assert_eq!(share_of_total(-25.0, 100.0), 25.0);
        assert_eq!(share_of_total(25.0, 0.0), 0.0);
    }

    #[test]
    fn test_person_share() {
        let totals = PersonTotals {
            person_id: 1,
            name: "João".to_string(),
            total_income: 1000.0,
            total_expense: 500.0,
            balance: 500.0,
        };
        assert_eq!(person_share(&totals, 2000.0, 1000.0), 50.0);
        assert_eq!(person_share(&totals, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_largest_expense_category() {
        assert!(largest_expense_category(&[]).is_none());

        let categories = vec![
            category_totals(1, 100.0),
            category_totals(2, 300.0),
            category_totals(3, 300.0),
        ];
        let largest = largest_expense_category(&categories).unwrap();
        assert_eq!(largest.category_id, 2);
    }

    #[test]
    fn test_clamp_and_colors() {
        assert_eq!(clamp_percentage(150.0), 100.0);
        assert_eq!(clamp_percentage(-3.0), 0.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
        assert_eq!(category_color(0), category_color(6));
        assert_ne!(category_color(0), category_color(1));
    }
}
