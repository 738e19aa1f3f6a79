//! Core types and state for the ShoreSquad beach-cleanup app.
//!
//! This crate provides:
//! - `spot` / `event`: sample cleanup spots and events (embedded CSV fixtures)
//! - `weather` / `service`: data.gov.sg payload parsing and the weather service trait
//! - `advisory`: cleanup recommendation derived from current conditions
//! - `controller`: the single application state struct driven by the UI
//! - `view`: pure view models rendered by the Dioxus components
//!
//! Nothing here depends on Dioxus or the browser, so the whole pipeline is
//! testable on the host.

pub mod advisory;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod latch;
pub mod notice;
pub mod service;
pub mod spot;
pub mod view;
pub mod weather;
