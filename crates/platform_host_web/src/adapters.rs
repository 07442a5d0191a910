use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, PrefsStore};

use crate::{WebContentFeedService, WebMediaCatalogService, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-memory")]
    {
        HostStrategy::Memory
    }

    #[cfg(not(feature = "host-memory"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Returns the preference store for the selected strategy.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebPrefsStore),
        HostStrategy::Memory => HostServices::memory().prefs,
    }
}

/// Builds the host bundle injected into the runtime provider.
///
/// `base_url` roots the media catalog and content feed endpoints.
pub fn build_host_services(base_url: &str) -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: prefs_store(),
            media: Rc::new(WebMediaCatalogService::new(base_url)),
            content: Rc::new(WebContentFeedService::new(base_url)),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Memory => HostServices::memory(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_selects_browser_strategy() {
        #[cfg(not(feature = "host-memory"))]
        assert_eq!(host_strategy_name(), "browser");
        let services = build_host_services("/api");
        assert_eq!(services.host_strategy, selected_host_strategy());
    }
}
