// Tests for start-date sorting, including unparseable dates.
use schoolscout::model::School;
use schoolscout::store::{Filters, SchoolStore, SortOrder};

fn school(name: &str, start: &str) -> School {
    School {
        name: name.to_string(),
        link: format!("https://example.org/{}", name.to_lowercase()),
        venue: String::new(),
        start_date: start.to_string(),
        end_date: start.to_string(),
        registration_status: "Open".to_string(),
        application_deadline: None,
        description: None,
    }
}

fn names(schools: &[School]) -> Vec<&str> {
    schools.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn test_ascending_and_descending() {
    let store = SchoolStore::new(vec![
        school("B", "2026-03-01"),
        school("A", "2026-01-01"),
        school("C", "2026-06-01"),
    ]);

    let asc = store.filter(&Filters::default());
    assert_eq!(names(&asc), vec!["A", "B", "C"]);

    let desc = store.filter(&Filters {
        sort: SortOrder::Desc,
        ..Filters::default()
    });
    assert_eq!(names(&desc), vec!["C", "B", "A"]);
}

#[test]
fn test_invalid_dates_sink_in_both_directions() {
    let store = SchoolStore::new(vec![
        school("NoDate", ""),
        school("B", "2026-03-01"),
        school("Garbage", "when it's warm"),
        school("A", "2026-01-01"),
    ]);

    let asc = store.filter(&Filters::default());
    assert_eq!(names(&asc), vec!["A", "B", "NoDate", "Garbage"]);

    // Direction never lifts invalid dates back to the front
    let desc = store.filter(&Filters {
        sort: SortOrder::Desc,
        ..Filters::default()
    });
    assert_eq!(names(&desc), vec!["B", "A", "NoDate", "Garbage"]);
}

#[test]
fn test_ties_keep_arrival_order() {
    let store = SchoolStore::new(vec![
        school("First", "2026-02-01"),
        school("Second", "2026-02-01"),
        school("Third", "2026-02-01"),
    ]);

    let asc = store.filter(&Filters::default());
    assert_eq!(names(&asc), vec!["First", "Second", "Third"]);

    let desc = store.filter(&Filters {
        sort: SortOrder::Desc,
        ..Filters::default()
    });
    assert_eq!(names(&desc), vec!["First", "Second", "Third"]);
}

#[test]
fn test_time_component_participates_in_ordering() {
    let store = SchoolStore::new(vec![
        school("Afternoon", "2026-02-01T14:00:00"),
        school("Morning", "2026-02-01T08:00:00"),
    ]);

    let asc = store.filter(&Filters::default());
    assert_eq!(names(&asc), vec!["Morning", "Afternoon"]);
}
