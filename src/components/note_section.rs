//! Note Section Component
//!
//! Multi-line draft area plus the saved-note list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::storage::BrowserStorage;
use crate::store::Pad;

/// Note list with its draft textarea
#[component]
pub fn NoteSection(pad: ReadSignal<Pad>, set_pad: WriteSignal<Pad>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let add_note = move |_| {
        let content = draft.get();
        let mut added = false;
        set_pad.update(|p| {
            added = p.add_note(&content);
            if added {
                p.persist(&BrowserStorage);
            }
        });
        if added {
            set_draft.set(String::new());
        }
    };

    view! {
        <section>
            <h2>"🗒️ Notes"</h2>

            <textarea
                class="note-draft"
                placeholder="Write a note..."
                rows="3"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_draft.set(textarea.value());
                }
            ></textarea>
            <button class="save-note-btn" on:click=add_note>"Save Note"</button>

            <ul class="note-list">
                <For
                    each=move || pad.get().notes
                    key=|note| note.id
                    children=move |note| {
                        let id = note.id;
                        view! {
                            <li class="note-row">
                                <p>{note.content}</p>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| set_pad.update(|p| {
                                        p.delete_note(id);
                                        p.persist(&BrowserStorage);
                                    })
                                >
                                    "🗑️"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
