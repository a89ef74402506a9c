use std::collections::HashMap;

use crate::Transaction;
use crate::format::DisplayLocale;

/// Transactions sharing one month heading, most recent first
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub label: String,
    pub transactions: Vec<Transaction>,
}

/// Month groups in the order their labels were first seen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthGroups {
    groups: Vec<MonthGroup>,
}

impl MonthGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthGroup> {
        self.groups.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&[Transaction]> {
        self.groups
            .iter()
            .find(|group| group.label == label)
            .map(|group| group.transactions.as_slice())
    }
}

impl IntoIterator for MonthGroups {
    type Item = MonthGroup;
    type IntoIter = std::vec::IntoIter<MonthGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group transactions under their local "Month Year" label.
///
/// Group order follows the first appearance of each label in `transactions`,
/// not the calendar. Inside a group the sort is stable and descending by date.
pub fn group_by_month(transactions: &[Transaction], locale: &DisplayLocale) -> MonthGroups {
    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        let label = locale.month_label(transaction.date.date());
        let position = *positions.entry(label.clone()).or_insert_with(|| {
            groups.push(MonthGroup {
                label,
                transactions: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].transactions.push(transaction.clone());
    }

    for group in &mut groups {
        group.transactions.sort_by(|a, b| b.date.cmp(&a.date));
    }

    tracing::trace!(
        "Grouped {} transactions into {} months",
        transactions.len(),
        groups.len()
    );

    MonthGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransactionType;
    use crate::test_support::transaction;

    fn dates(group: &[Transaction]) -> Vec<String> {
        group
            .iter()
            .map(|t| t.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    #[test]
    fn test_empty_input_gives_empty_mapping() {
        let groups = group_by_month(&[], &DisplayLocale::en_us());
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }

    #[test]
    fn test_groups_by_month_and_sorts_descending() {
        let transactions = vec![
            transaction(1, "2024-01-05", TransactionType::Outflow, 10),
            transaction(2, "2024-01-20", TransactionType::Inflow, 20),
            transaction(3, "2024-02-01", TransactionType::Outflow, 30),
        ];

        let groups = group_by_month(&transactions, &DisplayLocale::en_us());

        assert_eq!(groups.labels(), vec!["January 2024", "February 2024"]);
        assert_eq!(
            dates(groups.get("January 2024").unwrap()),
            vec!["2024-01-20", "2024-01-05"]
        );
        assert_eq!(dates(groups.get("February 2024").unwrap()), vec!["2024-02-01"]);
    }

    #[test]
    fn test_group_order_is_first_encounter_not_chronological() {
        let transactions = vec![
            transaction(1, "2024-03-02", TransactionType::Outflow, 10),
            transaction(2, "2023-12-24", TransactionType::Outflow, 10),
            transaction(3, "2024-03-15", TransactionType::Inflow, 10),
            transaction(4, "2024-01-01", TransactionType::Inflow, 10),
        ];

        let groups = group_by_month(&transactions, &DisplayLocale::en_us());
        assert_eq!(
            groups.labels(),
            vec!["March 2024", "December 2023", "January 2024"]
        );
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let transactions = vec![
            transaction(1, "2024-05-10", TransactionType::Outflow, 10),
            transaction(2, "2024-05-10", TransactionType::Outflow, 20),
            transaction(3, "2024-05-11", TransactionType::Outflow, 30),
        ];

        let groups = group_by_month(&transactions, &DisplayLocale::en_us());
        let ids: Vec<i32> = groups
            .get("May 2024")
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_labels_follow_locale() {
        let transactions = vec![transaction(1, "2024-01-05", TransactionType::Inflow, 10)];
        let groups = group_by_month(&transactions, &DisplayLocale::pt_br());
        assert_eq!(groups.labels(), vec!["janeiro de 2024"]);
    }
}
