//! Within-group ticket ordering.

use std::cmp::Ordering;

use unicase::UniCase;

use crate::ticket::Ticket;
use crate::types::SortKey;

/// Order tickets by the given key, returning a new vector.
///
/// The sort is stable, so ties keep the grouping step's output order.
/// Applied within a single group; never across groups.
pub fn sort_tickets(tickets: &[Ticket], key: SortKey) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    match key {
        // descending: most urgent first
        SortKey::Priority => sorted.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    sorted
}

/// Case-insensitive ascending order with a byte-order tiebreak, so equal
/// titles that differ only in case still order deterministically.
fn compare_titles(a: &str, b: &str) -> Ordering {
    UniCase::new(a)
        .cmp(&UniCase::new(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, title: &str, priority: i64) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status: "Todo".to_string(),
            priority,
            user_id: None,
            tag: Vec::new(),
        }
    }

    #[test]
    fn test_sort_by_priority_descending() {
        let tickets = vec![
            ticket("t-1", "a", 1),
            ticket("t-2", "b", 4),
            ticket("t-3", "c", 0),
            ticket("t-4", "d", 3),
        ];
        let sorted = sort_tickets(&tickets, SortKey::Priority);
        let priorities: Vec<i64> = sorted.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![4, 3, 1, 0]);
    }

    #[test]
    fn test_sort_by_priority_ties_are_stable() {
        let tickets = vec![
            ticket("t-1", "a", 2),
            ticket("t-2", "b", 2),
            ticket("t-3", "c", 4),
            ticket("t-4", "d", 2),
        ];
        let sorted = sort_tickets(&tickets, SortKey::Priority);
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-3", "t-1", "t-2", "t-4"]);
    }

    #[test]
    fn test_sort_by_title_ascending() {
        let tickets = vec![
            ticket("t-1", "Refactor auth", 0),
            ticket("t-2", "add retry logic", 0),
            ticket("t-3", "Bump deps", 0),
        ];
        let sorted = sort_tickets(&tickets, SortKey::Title);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        // case-insensitive: "add" sorts before "Bump"
        assert_eq!(titles, vec!["add retry logic", "Bump deps", "Refactor auth"]);
    }

    #[test]
    fn test_sort_by_title_case_tiebreak_is_deterministic() {
        let tickets = vec![ticket("t-1", "alpha", 0), ticket("t-2", "Alpha", 0)];
        let sorted = sort_tickets(&tickets, SortKey::Title);
        assert_eq!(sorted[0].title, "Alpha");
        assert_eq!(sorted[1].title, "alpha");
    }

    #[test]
    fn test_sort_returns_new_sequence() {
        let tickets = vec![ticket("t-1", "b", 1), ticket("t-2", "a", 2)];
        let sorted = sort_tickets(&tickets, SortKey::Title);
        // input untouched
        assert_eq!(tickets[0].id, "t-1");
        assert_eq!(sorted[0].id, "t-2");
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_tickets(&[], SortKey::Priority).is_empty());
    }
}
