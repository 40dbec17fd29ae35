pub mod appointments;
pub mod providers;
pub mod users;
