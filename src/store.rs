//! Pad State Store
//!
//! Framework-independent state for the todo and note sequences with the
//! mutation commands the view dispatches. Callers follow every mutation
//! with a `persist` write-through.

use crate::models::{Note, Todo};
use crate::storage::{KeyValueStorage, NOTES_KEY, TODOS_KEY};

/// The widget state: two append-only sequences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pad {
    pub todos: Vec<Todo>,
    pub notes: Vec<Note>,
    /// Highest id handed out so far, so ids stay unique when the clock
    /// has not advanced between two creations
    last_id: i64,
}

impl Pad {
    /// Read both sequences back from storage.
    ///
    /// An absent key or a value that fails to parse yields an empty
    /// sequence for that key.
    pub fn load(storage: &impl KeyValueStorage) -> Self {
        let todos: Vec<Todo> = storage
            .get(TODOS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        let notes: Vec<Note> = storage
            .get(NOTES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        let last_id = todos
            .iter()
            .map(|t| t.id)
            .chain(notes.iter().map(|n| n.id))
            .max()
            .unwrap_or(0);
        Self {
            todos,
            notes,
            last_id,
        }
    }

    /// Mirror both sequences to storage, unconditionally.
    pub fn persist(&self, storage: &impl KeyValueStorage) {
        if let Ok(raw) = serde_json::to_string(&self.todos) {
            storage.set(TODOS_KEY, &raw);
        }
        if let Ok(raw) = serde_json::to_string(&self.notes) {
            storage.set(NOTES_KEY, &raw);
        }
    }

    /// Append a new todo.
    ///
    /// Returns false and leaves state untouched when the input trims to
    /// empty; the caller keeps its draft buffer then. The stored text is
    /// the input as typed, the trim is only a gate.
    pub fn add_todo(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        let id = self.next_id();
        self.todos.push(Todo {
            id,
            text: input.to_string(),
            done: false,
        });
        true
    }

    /// Flip `done` on the matching todo. Unknown ids are a no-op.
    pub fn toggle_todo(&mut self, id: i64) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.done = !todo.done;
        }
    }

    /// Remove the matching todo. Unknown ids are a no-op.
    pub fn delete_todo(&mut self, id: i64) {
        self.todos.retain(|t| t.id != id);
    }

    /// Append a new note. Same empty-input gate as `add_todo`.
    pub fn add_note(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        let id = self.next_id();
        self.notes.push(Note {
            id,
            content: input.to_string(),
        });
        true
    }

    /// Remove the matching note. Unknown ids are a no-op.
    pub fn delete_note(&mut self, id: i64) {
        self.notes.retain(|n| n.id != id);
    }

    /// Wall-clock millisecond id, bumped past the last issued one when
    /// two creations land on the same clock tick.
    fn next_id(&mut self) -> i64 {
        let id = now_ms().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_add_todo_appends_last() {
        let mut pad = Pad::default();

        assert!(pad.add_todo("First"));
        assert!(pad.add_todo("Second"));

        assert_eq!(pad.todos.len(), 2);
        let last = pad.todos.last().unwrap();
        assert_eq!(last.text, "Second");
        assert!(!last.done);
    }

    #[test]
    fn test_add_todo_blank_is_noop() {
        let mut pad = Pad::default();

        assert!(!pad.add_todo(""));
        assert!(!pad.add_todo("   "));

        assert!(pad.todos.is_empty());
    }

    #[test]
    fn test_add_todo_keeps_text_as_typed() {
        let mut pad = Pad::default();

        assert!(pad.add_todo("  padded  "));

        assert_eq!(pad.todos[0].text, "  padded  ");
    }

    #[test]
    fn test_toggle_twice_restores_done() {
        let mut pad = Pad::default();
        pad.add_todo("Flip me");
        let id = pad.todos[0].id;

        pad.toggle_todo(id);
        assert!(pad.todos[0].done);

        pad.toggle_todo(id);
        assert!(!pad.todos[0].done);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut pad = Pad::default();
        pad.add_todo("Stay");

        pad.toggle_todo(999);

        assert!(!pad.todos[0].done);
    }

    #[test]
    fn test_delete_todo_is_idempotent() {
        let mut pad = Pad::default();
        pad.add_todo("Go away");
        let id = pad.todos[0].id;

        pad.delete_todo(id);
        assert!(pad.todos.is_empty());

        pad.delete_todo(id);
        assert!(pad.todos.is_empty());
    }

    #[test]
    fn test_add_note_blank_is_noop() {
        let mut pad = Pad::default();

        assert!(!pad.add_note("  "));

        assert!(pad.notes.is_empty());
    }

    #[test]
    fn test_delete_note() {
        let mut pad = Pad::default();
        pad.add_note("Keep");
        pad.add_note("Drop");
        let drop_id = pad.notes[1].id;

        pad.delete_note(drop_id);

        assert_eq!(pad.notes.len(), 1);
        assert_eq!(pad.notes[0].content, "Keep");
    }

    #[test]
    fn test_rapid_ids_are_unique() {
        let mut pad = Pad::default();
        for i in 0..50 {
            pad.add_todo(&format!("Todo {}", i));
        }

        let mut ids: Vec<i64> = pad.todos.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_persist_then_load_roundtrips() {
        let storage = MemoryStorage::default();
        let mut pad = Pad::default();
        pad.add_todo("A");
        pad.add_todo("B");
        pad.toggle_todo(pad.todos[0].id);
        pad.add_note("remember this");
        pad.persist(&storage);

        let reloaded = Pad::load(&storage);

        assert_eq!(reloaded.todos, pad.todos);
        assert_eq!(reloaded.notes, pad.notes);
    }

    #[test]
    fn test_load_without_stored_data_is_empty() {
        let storage = MemoryStorage::default();

        let pad = Pad::load(&storage);

        assert!(pad.todos.is_empty());
        assert!(pad.notes.is_empty());
    }

    #[test]
    fn test_load_with_corrupt_key_falls_back_to_empty() {
        let storage = MemoryStorage::default();
        storage.set(TODOS_KEY, "not json at all");
        storage.set(NOTES_KEY, r#"[{"id":7,"content":"survives"}]"#);

        let pad = Pad::load(&storage);

        assert!(pad.todos.is_empty());
        assert_eq!(pad.notes.len(), 1);
        assert_eq!(pad.notes[0].content, "survives");
    }

    #[test]
    fn test_load_seeds_ids_past_existing() {
        let storage = MemoryStorage::default();
        let mut pad = Pad::default();
        pad.add_todo("old");
        let old_id = pad.todos[0].id;
        pad.persist(&storage);

        let mut reloaded = Pad::load(&storage);
        reloaded.add_todo("new");

        assert!(reloaded.todos[1].id > old_id);
    }

    #[test]
    fn test_scenario_milk_and_mom_survive_reload() {
        let storage = MemoryStorage::default();
        let mut pad = Pad::load(&storage);
        pad.add_todo("Buy milk");
        pad.persist(&storage);
        pad.add_note("Call mom");
        pad.persist(&storage);

        let reloaded = Pad::load(&storage);

        assert_eq!(reloaded.todos.len(), 1);
        assert_eq!(reloaded.todos[0].text, "Buy milk");
        assert!(!reloaded.todos[0].done);
        assert_eq!(reloaded.notes.len(), 1);
        assert_eq!(reloaded.notes[0].content, "Call mom");
    }

    #[test]
    fn test_scenario_toggle_a_delete_b() {
        let mut pad = Pad::default();
        pad.add_todo("A");
        pad.add_todo("B");
        let id_a = pad.todos[0].id;
        let id_b = pad.todos[1].id;

        pad.toggle_todo(id_a);
        pad.delete_todo(id_b);

        assert_eq!(pad.todos.len(), 1);
        assert_eq!(pad.todos[0].text, "A");
        assert!(pad.todos[0].done);
    }
}
