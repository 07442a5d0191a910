use std::time::Duration;

use super::*;
use crate::{
    clock::ClockSnapshot,
    model::PageKey,
    moon::{
        frame_count_label, group_postcard_boards, letter_date_label, letter_folder_label,
        letter_preview, PostcardBoard, LETTER_FEED_LIMIT, POSTCARD_FEED_LIMIT,
    },
};
use platform_host::LetterItem;

use super::cafe::CafePage;

#[component]
/// Page body for one card, selected from the closed page set.
pub(super) fn PageView(page: PageKey) -> impl IntoView {
    match page {
        PageKey::Today => view! { <TodayPage /> }.into_view(),
        PageKey::Cafe => view! { <CafePage /> }.into_view(),
        PageKey::Moon => view! { <MoonPage /> }.into_view(),
        PageKey::Urhu => view! { <UrhuPage /> }.into_view(),
    }
}

#[component]
fn TodayPage() -> impl IntoView {
    let clock_now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <section class="today-section">
            <header class="today-header">
                <div class="today-timeblock">
                    <div class="today-time">{move || clock_now.get().time_label()}</div>
                    <div class="today-date">{move || clock_now.get().date_label()}</div>
                </div>
                <p class="today-intro">
                    "you ended up here, quietly. leave a note, a line from a song, a secret goal, anything you want to fold into this day."
                </p>
            </header>
            <div class="today-layout">
                <aside class="today-aside">
                    <div class="aside-card">
                        <h2>"a small rule"</h2>
                        <p>"keep it short enough to reread later."</p>
                        <p>"keep it honest enough to matter."</p>
                    </div>
                </aside>
            </div>
        </section>
    }
}

#[component]
fn MoonPage() -> impl IntoView {
    let runtime = use_carnet_runtime();
    let boards = create_rw_signal(Vec::<PostcardBoard>::new());
    let letters = create_rw_signal(Vec::<LetterItem>::new());

    let content = runtime.host.with_value(|host| host.content.clone());
    spawn_local(async move {
        match content.list_postcard_images(POSTCARD_FEED_LIMIT).await {
            Ok(images) => {
                boards.try_set(group_postcard_boards(&images));
            }
            Err(err) => logging::warn!("postcard feed failed: {err}"),
        }
        match content.list_letters(LETTER_FEED_LIMIT).await {
            Ok(items) => {
                letters.try_set(items);
            }
            Err(err) => logging::warn!("letter feed failed: {err}"),
        }
    });

    view! {
        <section class="moon-section">
            <div class="moon-overlay" />
            <div class="moon-inner">
                <header class="moon-header">
                    <h1 class="moon-title">"moon"</h1>
                    <p class="moon-subtitle">"postcards & letters. a slow gallery. things that glow only at night."</p>
                </header>
                <div class="moon-layout">
                    <section class="moon-panel moon-panel--boards">
                        <div class="moon-panel-head">
                            <h2>"postcards"</h2>
                        </div>
                        <Show
                            when=move || boards.with(|boards| !boards.is_empty())
                            fallback=|| view! { <div class="moon-empty"><p>"no postcards yet."</p></div> }
                        >
                            <div class="moon-board-grid">
                                <For each=move || boards.get() key=|board| board.name.clone() let:board>
                                    <div class="moon-board-card">
                                        <div class="moon-board-meta">
                                            <span class="moon-board-name">{board.name.clone()}</span>
                                            <span class="moon-board-count">{frame_count_label(board.thumbs.len())}</span>
                                        </div>
                                        <div class="moon-thumb-row">
                                            {board
                                                .thumbs
                                                .into_iter()
                                                .map(|thumb| view! {
                                                    <div class="moon-thumb">
                                                        <img src=thumb.url alt="" loading="lazy" />
                                                    </div>
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </For>
                            </div>
                        </Show>
                    </section>
                    <section class="moon-panel moon-panel--letters">
                        <div class="moon-panel-head">
                            <h2>"letters"</h2>
                        </div>
                        <Show
                            when=move || letters.with(|letters| !letters.is_empty())
                            fallback=|| view! { <div class="moon-empty"><p>"no letters have landed yet."</p></div> }
                        >
                            <ul class="moon-letter-list">
                                <For each=move || letters.get() key=|letter| letter.id.clone() let:letter>
                                    <li class="moon-letter">
                                        <div class="moon-letter-top">
                                            <span class="moon-letter-folder">{letter_folder_label(&letter).to_string()}</span>
                                            <span class="moon-letter-date">{letter_date_label(&letter)}</span>
                                        </div>
                                        <p class="moon-letter-text">{letter_preview(&letter.text)}</p>
                                    </li>
                                </For>
                            </ul>
                        </Show>
                    </section>
                </div>
            </div>
        </section>
    }
}

#[component]
fn UrhuPage() -> impl IntoView {
    view! {
        <section class="urhu-section">
            <header class="urhu-header">
                <h1>"urhu"</h1>
                <p class="intro">
                    "this page is not a bio. it's a small plaque on the door: why this room exists and what it's becoming."
                </p>
            </header>
            <div class="urhu-grid">
                <div class="card">
                    <h2>"how to use it"</h2>
                    <ul>
                        <li>"if you don't know where to go, go to today."</li>
                        <li>"if you're collecting images and letters, go to moon."</li>
                        <li>"if you want a quiet working screen, go to café."</li>
                        <li>"if you want context, stay here."</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}
