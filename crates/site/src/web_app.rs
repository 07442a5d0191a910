use carnet_runtime::{CarnetProvider, CarnetShell, PageKey, RouteContext, SiteConfig};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="le carnet de urhu" />
        <Meta name="description" content="A slow archive of notes, postcards, letters and a quiet café desk." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=CarnetEntry />
                    <Route path="/:page" view=PageEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn CarnetRoot(route: RouteContext) -> impl IntoView {
    let config = SiteConfig::builtin();
    let host_services = build_host_services(&config.backend.base_url);

    view! {
        <CarnetProvider host_services=host_services config=config route=route>
            <CarnetShell />
        </CarnetProvider>
    }
}

/// `/?page=<key>` or no page at all.
#[component]
pub fn CarnetEntry() -> impl IntoView {
    view! { <CarnetRoot route=RouteContext::current() /> }
}

/// `/<key>`; unknown keys fall back to the configured order.
#[component]
fn PageEntry() -> impl IntoView {
    let params = use_params_map();
    let initial_page = params.with_untracked(|map| map.get("page").and_then(|page| PageKey::parse(page)));

    view! { <CarnetRoot route=RouteContext { initial_page } /> }
}
