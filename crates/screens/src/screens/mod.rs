/// Provider selection, date/hour picking and booking
pub mod create_appointment;
/// Landing screen listing providers
pub mod dashboard;
/// Profile and avatar editing
pub mod profile;
/// Account creation
pub mod sign_up;

/// What happened to a submitted form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Validation failed; field errors are available on the screen
    Invalid,
    /// The API rejected the request or could not be reached
    Failed,
    Saved,
}
