//! Domain logic for the Sublynx event-discovery platform.
//!
//! This crate is pure: catalogs, filters, plan permissions, demo
//! authentication and the session state machine, with no persistence or
//! network I/O. The `sublynx-store` crate adds local persistence and
//! `sublynx-app` composes everything into the interactive shell.

pub mod auth;
pub mod catalog;
pub mod engagement;
pub mod error;
pub mod events;
pub mod filter;
pub mod gamification;
pub mod invites;
pub mod marketplace;
pub mod plans;
pub mod profile;
pub mod session;
pub mod sort;
pub mod types;
