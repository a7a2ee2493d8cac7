//! Offline Pad App
//!
//! Single-page todo & notes widget backed by localStorage.

use leptos::prelude::*;

use crate::components::{NoteSection, TodoSection};
use crate::storage::BrowserStorage;
use crate::store::Pad;

#[component]
pub fn App() -> impl IntoView {
    let initial = Pad::load(&BrowserStorage);
    web_sys::console::log_1(
        &format!(
            "[APP] Loaded {} todos, {} notes",
            initial.todos.len(),
            initial.notes.len()
        )
        .into(),
    );
    let (pad, set_pad) = signal(initial);

    view! {
        <div class="page">
            <div class="card">
                <h1>"📝 Todo & Notes (Offline Ready)"</h1>

                <TodoSection pad=pad set_pad=set_pad />

                <NoteSection pad=pad set_pad=set_pad />
            </div>
        </div>
    }
}
