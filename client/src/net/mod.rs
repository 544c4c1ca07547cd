//! Networking modules for the registration REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the two server endpoints behind plain async functions; the
//! wire types live in the shared `schema` crate.

pub mod api;
