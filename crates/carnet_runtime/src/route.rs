//! Startup routing derived once from the page URL.

use crate::model::PageKey;

/// Route information computed at startup and passed down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteContext {
    /// Page requested through `?page=<key>`.
    pub initial_page: Option<PageKey>,
}

impl RouteContext {
    /// Parses a `location.search` string. Unknown keys and pages are ignored; the last valid
    /// `page` parameter wins.
    pub fn from_query(query: &str) -> Self {
        let mut initial_page = None;
        for pair in query
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
        {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key == "page" {
                if let Some(page) = PageKey::parse(value) {
                    initial_page = Some(page);
                }
            }
        }
        Self { initial_page }
    }

    /// Reads the current browser URL; empty outside the browser.
    pub fn current() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let search = web_sys::window()
                .and_then(|window| window.location().search().ok())
                .unwrap_or_default();
            Self::from_query(&search)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }

    /// Initial stack order: `order` with the routed page moved to the top when it is present.
    pub fn initial_order(&self, order: &[PageKey]) -> Vec<PageKey> {
        let mut keys = order.to_vec();
        if let Some(page) = self.initial_page {
            if let Some(index) = keys.iter().position(|key| *key == page) {
                let moved = keys.remove(index);
                keys.push(moved);
            }
        }
        keys
    }
}
