//! Full-page navigation, used by the 401 policy.
//!
//! In-app navigation goes through the Dioxus router; this is only for the
//! hard redirect that discards all client state.

use std::sync::Mutex;

pub trait Navigator {
    /// Replace the current document with `path`.
    fn navigate(&self, path: &str);
}

/// Sets `window.location.href`.
///
/// Skips the redirect when the browser is already on `path`, so a rejected
/// login does not reload the login form and wipe its error message.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        if let Err(e) = location.set_href(path) {
            tracing::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}

/// Records navigations instead of performing them
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    visited: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path passed to `navigate`, oldest first
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    pub fn current(&self) -> Option<String> {
        self.visited().last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigation requested");
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_navigator_records_paths() {
        let nav = MemoryNavigator::new();
        assert_eq!(nav.current(), None);
        nav.navigate("/login");
        nav.navigate("/");
        assert_eq!(nav.visited(), vec!["/login".to_string(), "/".to_string()]);
        assert_eq!(nav.current().as_deref(), Some("/"));
    }
}
