//! # GoBarber Core
//!
//! Domain types shared by the API client and the screen view-models:
//! providers and their day availability, appointments, users and the
//! forms that create or edit them.
//!
//! Besides plain data the crate holds the small amount of pure logic the
//! screens rely on:
//!
//! - [`slots`] turns raw availability into labeled morning/afternoon lists
//!   and builds the appointment timestamp from a date and an hour
//! - [`validation`] checks sign-up and profile forms and reports errors per
//!   field

/// Error type shared by every crate in the workspace
pub mod errors;
/// Wire models for providers, appointments and users
pub mod models;
/// Time-slot derivation for the scheduling screen
pub mod slots;
/// Form validation with field-keyed error messages
pub mod validation;
