//! # GoBarber Screens
//!
//! View-models of the GoBarber mobile app. Each screen owns its state, calls
//! the API through an injected [`gobarber_client::BarberApi`], and reports
//! back to the navigation layer through a [`navigation::Navigator`].
//!
//! ## Architecture
//!
//! - **Screens**: one view-model per app screen
//! - **Runtime**: runs the appointment screen's effects on tokio tasks
//! - **Navigation**: routes, alerts and the signal sink
//! - **Auth**: the signed-in user shared between screens
//! - **Alerts**: user-facing messages for failures
//! - **Config**: environment configuration

/// User-facing failure messages
pub mod alerts;
/// Shared signed-in user
pub mod auth;
/// Configuration loaded from the environment
pub mod config;
/// Signals to the navigation layer
pub mod navigation;
/// Async driver for the appointment screen
pub mod runtime;
/// Screen view-models
pub mod screens;
