pub mod appointment;
pub mod provider;
pub mod user;
