use flight_hours_db::models::FlightEntryModel;

/// Free-text match used by the past-entries table.
///
/// Case-insensitive over the ISO date, any non-zero hour or cancellation
/// figure, the word "off" on off days and the notes. An empty query matches.
pub fn matches_search(entry: &FlightEntryModel, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let number_matches = |value: f64| value != 0.0 && value.to_string().contains(&query);

    entry.date.to_string().contains(&query)
        || number_matches(entry.flight)
        || number_matches(entry.prepost)
        || number_matches(entry.ground)
        || (entry.cancellations != 0 && entry.cancellations.to_string().contains(&query))
        || (entry.off && "off".contains(query.as_str()))
        || entry
            .notes
            .as_ref()
            .is_some_and(|notes| notes.to_lowercase().contains(&query))
}

pub fn search_entries<'a>(entries: &'a [FlightEntryModel], query: &str) -> Vec<&'a FlightEntryModel> {
    entries.iter().filter(|entry| matches_search(entry, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::test_utils::test_utils::{create_test_entry, with_notes};

    #[test]
    fn test_empty_query_matches_everything() {
        let entry = create_test_entry("2024-05-14", 0.0, 0.0, 0.0);
        assert!(matches_search(&entry, ""));
        assert!(matches_search(&entry, "   "));
    }

    #[test]
    fn test_matches_date_numbers_and_notes() {
        let entry = with_notes(create_test_entry("2024-05-14", 2.5, 0.0, 1.0), "Steep Turns");
        assert!(matches_search(&entry, "05-14"));
        assert!(matches_search(&entry, "2.5"));
        assert!(matches_search(&entry, "steep"));
        assert!(!matches_search(&entry, "stalls"));
    }

    #[test]
    fn test_zero_fields_do_not_match() {
        let entry = create_test_entry("2024-05-14", 0.0, 0.0, 3.0);
        assert!(!matches_search(&entry, "0.0"));
        assert!(matches_search(&entry, "3"));
    }

    #[test]
    fn test_off_days_match_off() {
        let entry = FlightEntryModel::off_day(create_test_entry("2024-05-18", 0.0, 0.0, 0.0).date);
        assert!(matches_search(&entry, "OFF"));
        assert!(matches_search(&entry, "of"));
    }

    #[test]
    fn test_search_entries_preserves_order() {
        let entries = vec![
            with_notes(create_test_entry("2024-05-01", 1.0, 0.0, 0.0), "pattern work"),
            create_test_entry("2024-05-02", 1.0, 0.0, 0.0),
            with_notes(create_test_entry("2024-05-03", 1.0, 0.0, 0.0), "Pattern work again"),
        ];
        let found = search_entries(&entries, "pattern");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].date, entries[0].date);
        assert_eq!(found[1].date, entries[2].date);
    }
}
