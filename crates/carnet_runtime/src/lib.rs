//! Card-stack navigation and persistent café desk widgets for the carnet site.
//!
//! Pure state machines (stack reducer, drag sessions, sticky notes, pomodoro, media rotation) live
//! in their own modules and are driven by the Leptos components in [`components`].

pub mod card_stack;
pub mod clock;
pub mod components;
pub mod config;
pub mod drag;
pub mod media_pool;
pub mod model;
pub mod moon;
pub mod notifications;
pub mod persistence;
pub mod pomodoro;
pub mod quote_ticker;
pub mod route;
mod runtime_context;
pub mod sticky_notes;

pub use card_stack::{reduce_stack, StackAction, StackEffect, StackError, StackOrder};
pub use components::{CafePage, CarnetShell, FileStack, QuoteTickerBar};
pub use config::SiteConfig;
pub use drag::DraggablePosition;
pub use media_pool::{fetch_catalog, CatalogError, MediaRotationPool, MediaStatus};
pub use model::*;
pub use notifications::{
    schedule_stack_effects, should_advance, DeferredQueue, PageNotification, ReseedTick, TickHandle,
};
pub use persistence::{PersistentStore, StoreError};
pub use pomodoro::{PomodoroPhase, PomodoroState, PomodoroTimer};
pub use route::RouteContext;
pub use runtime_context::{use_carnet_runtime, CarnetProvider, CarnetRuntimeContext};
pub use sticky_notes::{NoteLayout, StickyNote, StickyNoteCollection};
