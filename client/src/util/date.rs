//! Locale-aware date formatting for display timestamps.
//!
//! Uses the browser's `toLocaleDateString` under hydration so dates on the
//! admin dashboard match the visitor's locale. Server rendering falls back
//! to an ISO date so SSR output stays deterministic.

use chrono::{DateTime, Utc};

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Format a timestamp as a short date in the visitor's locale.
#[must_use]
pub fn locale_date(ts: &DateTime<Utc>) -> String {
    #[cfg(feature = "hydrate")]
    {
        let locale = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| "en-US".to_owned());
        #[allow(clippy::cast_precision_loss)]
        let millis = ts.timestamp_millis() as f64;
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
        String::from(date.to_locale_date_string(&locale, &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ts.format("%Y-%m-%d").to_string()
    }
}
