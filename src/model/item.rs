// File: ./src/model/item.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One school/program listing as delivered by the listing API.
///
/// `name` and `link` are required for the entry to be meaningfully displayed,
/// but nothing here validates that: malformed entries render placeholders
/// instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub registration_status: String,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RegistrationState {
    Open,
    Closed,
    Unknown,
}

impl School {
    /// Classifies the free-text registration status. Anything that is not a
    /// case-insensitive "open"/"closed" is a neutral status.
    pub fn registration_state(&self) -> RegistrationState {
        let status = self.registration_status.trim();
        if status.eq_ignore_ascii_case("open") {
            RegistrationState::Open
        } else if status.eq_ignore_ascii_case("closed") {
            RegistrationState::Closed
        } else {
            RegistrationState::Unknown
        }
    }

    pub fn start_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.start_date)
    }

    pub fn end_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.end_date)
    }

    pub fn deadline_timestamp(&self) -> Option<DateTime<Utc>> {
        self.application_deadline
            .as_deref()
            .and_then(parse_timestamp)
    }

    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Orders two schools by start date. Entries whose start date fails to
    /// parse sink below every entry with a valid date, in both directions;
    /// only the valid-valid comparison is flipped for descending order.
    pub fn compare_by_start(&self, other: &Self, descending: bool) -> Ordering {
        match (self.start_timestamp(), other.start_timestamp()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                if descending {
                    b.cmp(&a)
                } else {
                    a.cmp(&b)
                }
            }
        }
    }
}

/// Lenient timestamp parser for listing data and user-typed filter bounds.
///
/// Accepts ISO `YYYY-MM-DD` with an optional time component (with or without
/// an offset); a bare date resolves to midnight UTC. Returns `None` for empty
/// or unrecognized input rather than an error: parse failures are a filtering
/// policy (exclusion or inactive bound), never a hard failure.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn school(status: &str) -> School {
        School {
            name: "X".into(),
            link: "https://example.org".into(),
            venue: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            registration_status: status.into(),
            application_deadline: None,
            description: None,
        }
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_timestamp("2026-01-10").unwrap();
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.to_rfc3339(), "2026-01-10T00:00:00+00:00");
    }

    #[test]
    fn test_parse_with_time_component() {
        assert!(parse_timestamp("2026-01-10T09:30:00").is_some());
        assert!(parse_timestamp("2026-01-10T09:30").is_some());
        assert!(parse_timestamp("2026-01-10T09:30:00+02:00").is_some());
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("TBD").is_none());
        assert!(parse_timestamp("2026-13-45").is_none());
    }

    #[test]
    fn test_registration_state_case_insensitive() {
        assert_eq!(school("OPEN").registration_state(), RegistrationState::Open);
        assert_eq!(
            school("Closed").registration_state(),
            RegistrationState::Closed
        );
        assert_eq!(
            school("waitlist").registration_state(),
            RegistrationState::Unknown
        );
    }
}
