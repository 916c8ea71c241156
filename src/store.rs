// File: src/store.rs
use crate::model::{RegistrationState, School, parse_timestamp};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Open => "Open",
            StatusFilter::Closed => "Closed",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Open,
            StatusFilter::Open => StatusFilter::Closed,
            StatusFilter::Closed => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Earliest → Latest",
            SortOrder::Desc => "Latest → Earliest",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The user's current filter/sort selections. Ephemeral: owned by the UI
/// state, recreated per session, never persisted. Date bounds stay as the raw
/// typed text; the engine decides what an unparseable bound means.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub name: String,
    pub status: StatusFilter,
    pub start_from: String,
    pub start_to: String,
    pub deadline_before: String,
    pub sort: SortOrder,
}

impl Filters {
    pub fn is_default(&self) -> bool {
        self.name.trim().is_empty()
            && self.status == StatusFilter::All
            && self.start_from.is_empty()
            && self.start_to.is_empty()
            && self.deadline_before.is_empty()
    }
}

/// Holds the full collection fetched for this session. Immutable after load;
/// every view of it is derived fresh through `filter`.
#[derive(Debug, Clone, Default)]
pub struct SchoolStore {
    pub schools: Vec<School>,
}

impl SchoolStore {
    pub fn new(schools: Vec<School>) -> Self {
        Self { schools }
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// Derives the filtered, sorted view. Pure function of the store contents
    /// and the filter snapshot: AND-combined predicates, then a stable sort
    /// on start date.
    pub fn filter(&self, filters: &Filters) -> Vec<School> {
        let query = filters.name.trim();
        let has_name = !query.is_empty();
        let has_range = !filters.start_from.is_empty() || !filters.start_to.is_empty();
        let has_deadline = !filters.deadline_before.is_empty();

        // A typed bound that fails to parse acts as an unset bound, so the
        // range check degrades to one-sided rather than rejecting everything.
        let from = parse_timestamp(&filters.start_from);
        let to = parse_timestamp(&filters.start_to);
        let deadline_limit = parse_timestamp(&filters.deadline_before);

        let mut result: Vec<School> = self
            .schools
            .iter()
            .filter(|school| {
                if has_name && !school.matches_name(query) {
                    return false;
                }

                if filters.status != StatusFilter::All {
                    let wanted = match filters.status {
                        StatusFilter::Open => RegistrationState::Open,
                        StatusFilter::Closed => RegistrationState::Closed,
                        StatusFilter::All => unreachable!(),
                    };
                    if school.registration_state() != wanted {
                        return false;
                    }
                }

                if has_range {
                    // An entry without valid start AND end dates cannot prove
                    // overlap, so it is excluded while the filter is active.
                    let (Some(start), Some(end)) =
                        (school.start_timestamp(), school.end_timestamp())
                    else {
                        return false;
                    };
                    if let Some(to) = to
                        && start > to
                    {
                        return false;
                    }
                    if let Some(from) = from
                        && end < from
                    {
                        return false;
                    }
                }

                if has_deadline {
                    // Unknown deadline passes; a deadline (or bound) that
                    // fails to parse excludes. Deliberately asymmetric with
                    // the range filter above. An absent or blank deadline
                    // counts as unknown.
                    let known_deadline = school
                        .application_deadline
                        .as_deref()
                        .is_some_and(|d| !d.trim().is_empty());
                    if known_deadline {
                        match (school.deadline_timestamp(), deadline_limit) {
                            (Some(deadline), Some(limit)) => {
                                if deadline > limit {
                                    return false;
                                }
                            }
                            _ => return false,
                        }
                    }
                }

                true
            })
            .cloned()
            .collect();

        let descending = filters.sort == SortOrder::Desc;
        result.sort_by(|a, b| a.compare_by_start(b, descending));
        result
    }
}
