//! Shared client state modules.
//!
//! DESIGN
//! ======
//! Each page owns one plain state struct held in a `RwSignal`. The structs
//! carry no DOM or network references, so the submission and listing state
//! machines run headless in native tests.

pub mod admin;
pub mod register;
