use crate::presentation::components::Status;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub feed_status: RwSignal<Status>,
    pub record_count: RwSignal<usize>,
    pub last_error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        feed_status: create_rw_signal(Status::Warning),
        record_count: create_rw_signal(0),
        last_error: create_rw_signal(None),
        loading: create_rw_signal(false),
    })
}

pub fn mark_loading() {
    let g = globals();
    g.loading.set(true);
    g.feed_status.set(Status::Warning);
}

pub fn mark_loaded(record_count: usize) {
    let g = globals();
    g.record_count.set(record_count);
    g.last_error.set(None);
    g.feed_status.set(Status::Ok);
    g.loading.set(false);
}

pub fn mark_failed(message: String) {
    let g = globals();
    g.last_error.set(Some(message));
    g.feed_status.set(Status::Error);
    g.loading.set(false);
}
