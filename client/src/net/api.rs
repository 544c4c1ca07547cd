//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since submissions and listings
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; pages collapse
//! any failure into a toast and an interactive state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::{RegisterAck, Registration, RegistrationForm};

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("registration request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn registrations_failed_message(status: u16) -> String {
    format!("registrations request failed: {status}")
}

/// Submit a validated registration via `POST /api/register`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-2xx status.
pub async fn submit_registration(form: &RegistrationForm) -> Result<RegisterAck, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register")
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        resp.json::<RegisterAck>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}

/// Fetch all stored registrations via `GET /api/registrations`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-2xx status.
pub async fn fetch_registrations() -> Result<Vec<Registration>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/registrations")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(registrations_failed_message(resp.status()));
        }
        resp.json::<Vec<Registration>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
