//! Runtime provider and context wiring for the card stack.
//!
//! This module owns the stack reducer container, the deferred notification queue and the animation
//! frame that flushes it, plus the host bundle and persistent store shared by every widget. UI
//! composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::{leptos_dom::helpers::AnimationFrameRequestHandle, *};
use platform_host::HostServices;

use crate::{
    card_stack::{reduce_stack, StackAction, StackOrder},
    config::SiteConfig,
    model::PageKey,
    notifications::{schedule_stack_effects, DeferredQueue, PageNotification, ReseedTick},
    persistence::PersistentStore,
    route::RouteContext,
};

#[derive(Clone, Copy)]
/// Leptos context for reading stack state and dispatching [`StackAction`] values.
pub struct CarnetRuntimeContext {
    /// Injected host service bundle.
    pub host: StoredValue<HostServices>,
    /// Advisory store shared by the café widgets.
    pub store: StoredValue<PersistentStore>,
    /// Site configuration embedded at build time.
    pub config: StoredValue<SiteConfig>,
    /// Reactive card order, back to front.
    pub stack: RwSignal<StackOrder>,
    /// Last page reported as active.
    pub active: RwSignal<Option<PageKey>>,
    /// Latest delivered re-activation, one tick after the click that caused it.
    pub reseed: RwSignal<Option<ReseedTick>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<StackAction>,
}

impl CarnetRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: StackAction) {
        self.dispatch.call(action);
    }

    /// Key of the active page, or `today` before the stack is seeded.
    pub fn active_page(&self) -> PageKey {
        self.active.get().unwrap_or(PageKey::Today)
    }
}

fn deliver(notifications: Vec<PageNotification>, reseed: RwSignal<Option<ReseedTick>>) {
    for notification in notifications {
        match notification {
            PageNotification::Reseed(page) => {
                let seq = reseed.get_untracked().map_or(1, |tick| tick.seq + 1);
                reseed.set(Some(ReseedTick { page, seq }));
            }
        }
    }
}

#[component]
/// Provides [`CarnetRuntimeContext`] to descendant components and seeds the stack.
pub fn CarnetProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Site configuration; usually [`SiteConfig::builtin`].
    config: SiteConfig,
    /// Startup route derived from the page URL.
    route: RouteContext,
    /// Notified whenever the active page changes.
    #[prop(optional)]
    on_active_change: Option<Callback<PageKey>>,
    children: Children,
) -> impl IntoView {
    let store = store_value(PersistentStore::new(host_services.prefs.clone()));
    let host = store_value(host_services);
    let initial = StackOrder::initialize(route.initial_order(&config.page_order));
    let active = create_rw_signal(initial.active());
    let stack = create_rw_signal(initial);
    let config = store_value(config);
    let reseed = create_rw_signal(None::<ReseedTick>);
    let queue = store_value(DeferredQueue::<PageNotification>::new());
    let frame = store_value(None::<AnimationFrameRequestHandle>);

    let dispatch = Callback::new(move |action: StackAction| {
        let mut order = stack.get_untracked();
        let previous = order.clone();

        match reduce_stack(&mut order, action) {
            Ok(effects) => {
                if order != previous {
                    stack.set(order);
                }
                let reported = queue
                    .try_update_value(|queue| schedule_stack_effects(&effects, queue))
                    .flatten();
                if let Some(key) = reported {
                    active.set(Some(key));
                    if let Some(callback) = on_active_change {
                        callback.call(key);
                    }
                }
                let pending = queue.with_value(|queue| !queue.is_idle());
                if pending && frame.with_value(Option::is_none) {
                    match request_animation_frame_with_handle(move || {
                        frame.set_value(None);
                        let due = queue
                            .try_update_value(DeferredQueue::flush)
                            .unwrap_or_default();
                        deliver(due, reseed);
                    }) {
                        Ok(handle) => frame.set_value(Some(handle)),
                        Err(err) => logging::warn!("animation frame unavailable: {err:?}"),
                    }
                }
            }
            Err(err) => logging::warn!("card stack reducer error: {err}"),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = frame.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
        queue.try_update_value(DeferredQueue::cancel_all);
    });

    let runtime = CarnetRuntimeContext {
        host,
        store,
        config,
        stack,
        active,
        reseed,
        dispatch,
    };

    provide_context(runtime.clone());

    children().into_view()
}

/// Returns the current [`CarnetRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`CarnetProvider`].
pub fn use_carnet_runtime() -> CarnetRuntimeContext {
    use_context::<CarnetRuntimeContext>().expect("CarnetRuntimeContext not provided")
}
