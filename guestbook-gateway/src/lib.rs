//! HTTP API gateway for the guestbook backend.
//!
//! Exposes the comments endpoints; every handler reaches the database
//! through the shared connection registry, which opens the one connection
//! on first use.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
