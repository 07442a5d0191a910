use super::*;
use crate::quote_ticker::{ticker_style, QuoteTicker};

#[component]
/// Typewriter line of quotes, tinted with the active card's colours.
pub fn QuoteTickerBar() -> impl IntoView {
    let runtime = use_carnet_runtime();
    let ticker = create_rw_signal(QuoteTicker::default());
    let pending = store_value(None::<TimeoutHandle>);

    let content = runtime.host.with_value(|host| host.content.clone());
    spawn_local(async move {
        let feed = content.list_quotes().await;
        ticker.try_set(QuoteTicker::from_feed(feed));
    });

    create_effect(move |_| {
        let delay = ticker.with(QuoteTicker::next_delay);
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        let Some(delay) = delay else {
            return;
        };
        match set_timeout_with_handle(
            move || {
                pending.try_set_value(None);
                ticker.try_update(QuoteTicker::advance);
            },
            delay,
        ) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => logging::warn!("quote ticker timer unavailable: {err:?}"),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    view! {
        <Show when=move || ticker.with(|ticker| !ticker.is_empty()) fallback=|| ()>
            <div class="quote-ticker" style=move || ticker_style(runtime.active_page().as_str())>
                <span class="quote-text">{move || ticker.with(QuoteTicker::display_text)}</span>
                <span class="quote-cursor">"▌"</span>
            </div>
        </Show>
    }
}
