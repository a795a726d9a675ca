//! List Filtering
//!
//! Local, presentation-only narrowing of the fetched complaint list.

use crate::models::Complaint;

/// Case-insensitive substring match against each description.
/// An empty query keeps every complaint.
pub fn filter_by_text(items: &[Complaint], query: &str) -> Vec<Complaint> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|c| c.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Priority, Status};

    fn make_complaint(id: &str, text: &str) -> Complaint {
        Complaint {
            complaint_id: id.to_string(),
            text: text.to_string(),
            category: Category::Others,
            priority: Priority::Medium,
            status: Status::Pending,
            location: None,
            district: None,
        }
    }

    #[test]
    fn test_filter_substring() {
        let items = vec![
            make_complaint("1", "Pothole on 5th"),
            make_complaint("2", "No water supply"),
        ];

        let filtered = filter_by_text(&items, "water");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].complaint_id, "2");
    }

    #[test]
    fn test_filter_case_insensitive() {
        let items = vec![
            make_complaint("1", "Pothole on 5th"),
            make_complaint("2", "No WATER supply"),
        ];

        assert_eq!(filter_by_text(&items, "pOtHoLe").len(), 1);
        assert_eq!(filter_by_text(&items, "Water")[0].complaint_id, "2");
    }

    #[test]
    fn test_filter_empty_query_keeps_order() {
        let items = vec![
            make_complaint("b", "Broken bench"),
            make_complaint("a", "Overflowing drain"),
        ];

        let filtered = filter_by_text(&items, "");
        assert_eq!(filtered, items);
        assert!(filter_by_text(&items, "streetlight").is_empty());
    }
}
