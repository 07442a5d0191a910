use std::time::Duration;

use platform_host::unix_time_ms_now;

use super::*;
use crate::{
    drag::DraggablePosition,
    media_pool::{fetch_catalog, no_media_message, MediaRotationPool, MediaStatus},
    model::PageKey,
    notifications::should_advance,
    persistence::POMODORO_DOCK_KEY,
    pomodoro::PomodoroTimer,
    sticky_notes::{NoteLayout, StickyNoteCollection},
};

/// Window-level listeners of one pointer-drag session. Dropping the guard detaches them.
struct PointerListeners {
    handles: Vec<WindowListenerHandle>,
}

impl PointerListeners {
    fn attach(
        on_move: impl Fn(PointerPosition) + 'static,
        on_end: impl Fn() + Clone + 'static,
    ) -> Self {
        let on_cancel = on_end.clone();
        let handles = vec![
            window_event_listener(ev::pointermove, move |ev| {
                on_move(pointer_from_pointer_event(&ev))
            }),
            window_event_listener(ev::pointerup, move |_| on_end()),
            window_event_listener(ev::pointercancel, move |_| on_cancel()),
        ];
        Self { handles }
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

fn stop_ticking(interval: StoredValue<Option<IntervalHandle>>) {
    if let Some(handle) = interval.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}

fn ensure_ticking(timer: RwSignal<PomodoroTimer>, interval: StoredValue<Option<IntervalHandle>>) {
    if !timer.with_untracked(PomodoroTimer::is_running) || interval.with_value(Option::is_some) {
        return;
    }
    match set_interval_with_handle(
        move || {
            let still_running = timer
                .try_update(|timer| timer.tick(unix_time_ms_now()))
                .unwrap_or(false);
            if !still_running {
                stop_ticking(interval);
            }
        },
        Duration::from_secs(1),
    ) {
        Ok(handle) => interval.set_value(Some(handle)),
        Err(err) => logging::warn!("pomodoro interval unavailable: {err:?}"),
    }
}

#[component]
/// Café desk: rotating background video, draggable pomodoro dock and sticky notes.
pub fn CafePage() -> impl IntoView {
    let runtime = use_carnet_runtime();
    let store = runtime.store.get_value();
    let cafe = runtime.config.with_value(|config| config.cafe.clone());

    let timer = create_rw_signal(PomodoroTimer::hydrate(
        store.clone(),
        cafe.pomodoro_seconds,
        unix_time_ms_now(),
    ));
    let interval = store_value(None::<IntervalHandle>);
    ensure_ticking(timer, interval);
    on_cleanup(move || stop_ticking(interval));

    let dock = create_rw_signal(DraggablePosition::load(
        store.clone(),
        POMODORO_DOCK_KEY,
        cafe.pomo_dock_default(),
    ));
    let dock_listeners = store_value(None::<PointerListeners>);

    let notes = create_rw_signal(StickyNoteCollection::load(
        store.clone(),
        NoteLayout::from_config(&cafe),
    ));
    let note_listeners = store_value(None::<PointerListeners>);

    on_cleanup(move || {
        dock_listeners.try_set_value(None);
        note_listeners.try_set_value(None);
    });

    let pool = create_rw_signal(MediaRotationPool::load(store));
    let media = runtime.host.with_value(|host| host.media.clone());
    let folder = cafe.media_folder.clone();
    let no_media_text = no_media_message(&cafe.media_folder);
    spawn_local(async move {
        let fetched = fetch_catalog(media.as_ref(), &folder).await;
        pool.try_update(|pool| pool.apply_catalog(fetched));
    });

    create_effect(move |last_seen: Option<Option<u64>>| {
        let tick = runtime.reseed.get();
        if should_advance(PageKey::Cafe, last_seen, tick) {
            pool.update(|pool| {
                pool.pick_next(&mut rand::thread_rng());
            });
        }
        tick.map(|tick| tick.seq)
    });

    let video_ref = create_node_ref::<html::Video>();
    let current_url = Signal::derive(move || pool.with(|pool| pool.current_url().map(str::to_string)));
    create_effect(move |_| {
        if current_url.get().is_none() {
            return;
        }
        if let Some(video) = video_ref.get() {
            let _ = video.play();
        }
    });

    let begin_dock_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        dock.update(|dock| dock.on_grab(pointer_from_pointer_event(&ev)));
        dock_listeners.set_value(Some(PointerListeners::attach(
            move |pointer| {
                dock.update(|dock| {
                    dock.on_move(pointer);
                })
            },
            move || {
                dock.update(|dock| {
                    dock.on_release();
                });
                dock_listeners.set_value(None);
            },
        )));
    };

    let begin_note_drag = move |id: String, ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        let started = notes
            .try_update(|notes| notes.begin_drag(&id, pointer))
            .unwrap_or(false);
        if !started {
            return;
        }
        note_listeners.set_value(Some(PointerListeners::attach(
            move |pointer| {
                notes.update(|notes| {
                    notes.drag_to(pointer);
                })
            },
            move || {
                notes.update(|notes| {
                    notes.end_drag();
                });
                note_listeners.set_value(None);
            },
        )));
    };

    let start = move |_| {
        timer.update(|timer| timer.start(unix_time_ms_now()));
        ensure_ticking(timer, interval);
    };
    let pause = move |_| {
        timer.update(|timer| timer.pause(unix_time_ms_now()));
        stop_ticking(interval);
    };
    let reset = move |_| {
        timer.update(|timer| timer.reset(unix_time_ms_now()));
        stop_ticking(interval);
    };

    let note_placeholder = move || {
        if pool.with(|pool| pool.status() == MediaStatus::Loading) {
            "loading videos…"
        } else {
            "write something small…"
        }
    };

    view! {
        <section class="cafe-section">
            <div class="cafe-video-wrap" aria-hidden="true">
                <Show when=move || current_url.get().is_some() fallback=|| ()>
                    <video
                        node_ref=video_ref
                        class="cafe-video"
                        src=move || current_url.get().unwrap_or_default()
                        autoplay=true
                        muted=true
                        loop=true
                        playsinline=true
                    />
                </Show>
            </div>

            <div class="cafe-layer">
                <div class="cafe-dock">
                    <div
                        class="pomo glass-dark"
                        data-phase=move || format!("{:?}", timer.with(PomodoroTimer::phase)).to_lowercase()
                        style=move || dock.with(|dock| dock.position().translate_style())
                    >
                        <div class="pomo-dragbar" on:pointerdown=begin_dock_drag>
                            <div class="pomo-grip" />
                        </div>
                        <div class="pomo-time">{move || timer.with(PomodoroTimer::clock_label)}</div>
                        <div class="pomo-controls">
                            <button class="btn-start" type="button" on:click=start>"start"</button>
                            <button class="btn-pause" type="button" on:click=pause>"pause"</button>
                            <button class="btn-reset" type="button" on:click=reset>"reset"</button>
                        </div>
                    </div>

                    <button
                        class="dock-add glass-dark"
                        type="button"
                        aria-label="add note"
                        on:click=move |_| {
                            notes.update(|notes| {
                                notes.add_note();
                            })
                        }
                    >
                        "+"
                    </button>
                </div>

                <For
                    each=move || notes.with(|notes| notes.notes().iter().map(|note| note.id.clone()).collect::<Vec<_>>())
                    key=|id| id.clone()
                    let:id
                >
                    {{
                        let note_id = id.clone();
                        let drag_id = id.clone();
                        let delete_id = id.clone();
                        let text_id = id.clone();
                        let input_id = id;
                        view! {
                            <div
                                class="sticky glass-dark"
                                style=move || {
                                    notes.with(|notes| {
                                        notes
                                            .get(&note_id)
                                            .map(|note| note.position.translate_style())
                                            .unwrap_or_default()
                                    })
                                }
                            >
                                <div
                                    class="sticky-head"
                                    on:pointerdown=move |ev| begin_note_drag(drag_id.clone(), ev)
                                >
                                    <div class="sticky-grip" />
                                    <button
                                        class="icon-btn icon-btn--light"
                                        type="button"
                                        aria-label="delete note"
                                        on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                                        on:click=move |_| notes.update(|notes| notes.delete_note(&delete_id))
                                    >
                                        "×"
                                    </button>
                                </div>
                                <textarea
                                    placeholder=note_placeholder
                                    prop:value=move || {
                                        notes.with(|notes| {
                                            notes.get(&text_id).map(|note| note.text.clone()).unwrap_or_default()
                                        })
                                    }
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        notes.update(|notes| notes.update_text(&input_id, text));
                                    }
                                />
                            </div>
                        }
                    }}
                </For>

                <Show when=move || pool.with(|pool| pool.status() == MediaStatus::NoMedia) fallback=|| ()>
                    <div class="cafe-status">{no_media_text.clone()}</div>
                </Show>
            </div>
        </section>
    }
}
