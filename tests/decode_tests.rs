// Tests for listing payload decoding at the data-source boundary.
use schoolscout::client::ListingPayload;

const SCHOOL_JSON: &str = r#"{
    "name": "Quantum Summer School",
    "link": "https://example.org/quantum",
    "venue": "Lisbon, Portugal",
    "start_date": "2026-07-01",
    "end_date": "2026-07-14",
    "registration_status": "Open",
    "application_deadline": "2026-05-15",
    "description": "Two weeks of quantum information theory."
}"#;

#[test]
fn test_decode_bare_array() {
    let json = format!("[{}]", SCHOOL_JSON);
    let payload: ListingPayload = serde_json::from_str(&json).unwrap();
    let schools = payload.into_schools();
    assert_eq!(schools.len(), 1);
    assert_eq!(schools[0].name, "Quantum Summer School");
    assert_eq!(
        schools[0].application_deadline.as_deref(),
        Some("2026-05-15")
    );
}

#[test]
fn test_decode_wrapped_object() {
    let json = format!(r#"{{ "data": [{}] }}"#, SCHOOL_JSON);
    let payload: ListingPayload = serde_json::from_str(&json).unwrap();
    let schools = payload.into_schools();
    assert_eq!(schools.len(), 1);
    assert_eq!(schools[0].venue, "Lisbon, Portugal");
}

#[test]
fn test_decode_empty_collection() {
    let payload: ListingPayload = serde_json::from_str("[]").unwrap();
    assert!(payload.into_schools().is_empty());

    let payload: ListingPayload = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
    assert!(payload.into_schools().is_empty());
}

#[test]
fn test_decode_missing_optional_fields() {
    // Sparse entries decode with placeholder-friendly defaults instead of
    // being rejected.
    let json = r#"[{ "name": "Minimal", "link": "https://example.org/min" }]"#;
    let payload: ListingPayload = serde_json::from_str(json).unwrap();
    let schools = payload.into_schools();
    assert_eq!(schools.len(), 1);

    let s = &schools[0];
    assert_eq!(s.venue, "");
    assert_eq!(s.start_date, "");
    assert_eq!(s.end_date, "");
    assert_eq!(s.registration_status, "");
    assert!(s.application_deadline.is_none());
    assert!(s.description.is_none());
}

#[test]
fn test_decode_rejects_wrong_shape() {
    // A completely different payload shape is a decoding error, not a
    // silently empty listing.
    assert!(serde_json::from_str::<ListingPayload>(r#"{ "error": "nope" }"#).is_err());
    assert!(serde_json::from_str::<ListingPayload>("42").is_err());
}
