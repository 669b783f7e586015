//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the formatters and the CLI to report recoveries from malformed
//! input without turning them into errors.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning key, returning `true` the first time it is seen.
fn first_sighting(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a recovered problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Parser", "unmatched closing tag </div> ignored");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_sighting(format!("[{component}] {message}")) {
        eprintln!("{} {}", format!("[ridge {component}] ⚠").yellow(), message.yellow());
    }
}

/// Clear all recorded warnings (call before processing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
