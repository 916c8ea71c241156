// Defines events flowing from the background fetch into the TUI state.
use crate::model::School;

#[derive(Debug)]
pub enum AppEvent {
    SchoolsLoaded(Vec<School>),
    Error(String),
    Status(String),
}
