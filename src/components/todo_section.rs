//! Todo Section Component
//!
//! Add form plus the checkbox list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::storage::BrowserStorage;
use crate::store::Pad;

/// Todo list with its add form
#[component]
pub fn TodoSection(pad: ReadSignal<Pad>, set_pad: WriteSignal<Pad>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        let mut added = false;
        set_pad.update(|p| {
            added = p.add_todo(&text);
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
            <h2>"✅ Todos"</h2>

            <form class="add-row" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="Add new todo"
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <ul class="todo-list">
                <For
                    each=move || pad.get().todos
                    // Key includes `done` so a toggled row re-renders
                    key=|todo| (todo.id, todo.done)
                    children=move |todo| {
                        let id = todo.id;
                        view! {
                            <li class="todo-row">
                                <label class="todo-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=todo.done
                                        on:change=move |_| set_pad.update(|p| {
                                            p.toggle_todo(id);
                                            p.persist(&BrowserStorage);
                                        })
                                    />
                                    <span class=if todo.done { "todo-text done" } else { "todo-text" }>
                                        {todo.text}
                                    </span>
                                </label>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| set_pad.update(|p| {
                                        p.delete_todo(id);
                                        p.persist(&BrowserStorage);
                                    })
                                >
                                    "❌"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
