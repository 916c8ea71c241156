// File: ./src/model/display.rs
use crate::model::item::{RegistrationState, School, parse_timestamp};

pub trait SchoolDisplay {
    fn format_date_range(&self) -> String;
    fn format_deadline(&self) -> String;
    fn venue_label(&self) -> &str;
    fn status_symbol(&self) -> &'static str;
}

impl SchoolDisplay for School {
    fn format_date_range(&self) -> String {
        format!(
            "{} – {}",
            format_date(Some(&self.start_date)),
            format_date(Some(&self.end_date))
        )
    }

    fn format_deadline(&self) -> String {
        format!(
            "Deadline: {}",
            format_date(self.application_deadline.as_deref())
        )
    }

    fn venue_label(&self) -> &str {
        if self.venue.trim().is_empty() {
            "Venue TBD"
        } else {
            &self.venue
        }
    }

    fn status_symbol(&self) -> &'static str {
        match self.registration_state() {
            RegistrationState::Open => "[+]",
            RegistrationState::Closed => "[-]",
            RegistrationState::Unknown => "[ ]",
        }
    }
}

/// Renders a raw date string as "Jan 20, 2026".
///
/// Missing values render "N/A"; a string that does not parse as an ISO date
/// passes through unchanged so the user still sees whatever the backend sent.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    if raw.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date(Some("2026-01-20")), "Jan 20, 2026");
        assert_eq!(format_date(Some("2026-11-03T09:00:00")), "Nov 3, 2026");
    }

    #[test]
    fn test_format_date_fallbacks() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        // Unparseable text passes through raw.
        assert_eq!(format_date(Some("mid-June")), "mid-June");
    }

    #[test]
    fn test_venue_placeholder() {
        let s = School {
            name: "A".into(),
            link: "https://example.org/a".into(),
            venue: "  ".into(),
            start_date: String::new(),
            end_date: String::new(),
            registration_status: String::new(),
            application_deadline: None,
            description: None,
        };
        assert_eq!(s.venue_label(), "Venue TBD");
    }
}
