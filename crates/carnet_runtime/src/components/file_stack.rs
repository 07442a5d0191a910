use super::*;
use crate::{card_stack::StackAction, model::PageKey};

use super::pages::PageView;

const CARD_WIDTH: &str = "100.5%";

fn card_style(key: PageKey, position: usize) -> String {
    let page = key.as_str();
    format!(
        "--position: {position}; --cardWidth: {CARD_WIDTH}; --cardColor: var(--{page}-card-color); \
         --cardTextColor: var(--{page}-card-text-color); \
         --cardBackground: var(--{page}-card-background, var(--{page}-card-color)); \
         --tabOffset: {};",
        key.tab_offset()
    )
}

#[component]
/// Stack of folder cards; clicking a card raises it, clicking its tab raises or re-activates it.
pub fn FileStack(
    /// Shell-supplied page list; a different set rebuilds the stack.
    #[prop(optional, into)]
    pages: Option<Signal<Vec<PageKey>>>,
) -> impl IntoView {
    let runtime = use_carnet_runtime();
    let stack = runtime.stack;

    if let Some(pages) = pages {
        create_effect(move |_| {
            let keys = pages.get();
            runtime.dispatch_action(StackAction::Reseed { keys });
        });
    }

    view! {
        <div class="file-stack">
            <For each=move || PageKey::ALL.into_iter().filter(move |key| stack.with(|s| s.contains(*key))) key=|key| *key let:key>
                <FileCard page=key />
            </For>
        </div>
    }
}

#[component]
fn FileCard(page: PageKey) -> impl IntoView {
    let key = page;
    let runtime = use_carnet_runtime();
    let stack = runtime.stack;
    let card = key.card();

    let position = Signal::derive(move || stack.with(|s| s.position_of(key).unwrap_or(0)));
    let is_front = Signal::derive(move || stack.with(|s| s.is_top(position.get())));

    let raise = move |_| runtime.dispatch_action(StackAction::CardClicked { key });
    let reactivate = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(StackAction::LabelClicked { key });
    };

    view! {
        <div
            class="file-card"
            class=("file-card--active", move || is_front.get())
            data-page=key.as_str()
            style=move || card_style(key, position.get())
            on:click=raise
        >
            <div class="file-main">
                <PageView page=key />
            </div>
            <div class="file-label" on:click=reactivate>
                <span>{card.label}</span>
            </div>
        </div>
    }
}
