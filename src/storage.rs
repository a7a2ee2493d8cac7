//! Browser localStorage Adapter
//!
//! Centralizes the web-sys glue behind a key-value trait so the state
//! store can run against an in-memory substitute in tests.

/// localStorage key for the todo sequence
pub const TODOS_KEY: &str = "todos";
/// localStorage key for the note sequence
pub const NOTES_KEY: &str = "notes";

/// String key-value storage with localStorage semantics
pub trait KeyValueStorage {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`; write failures are dropped
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`-backed storage
///
/// Off wasm32 every key reads as absent and writes are dropped, which
/// keeps host-target builds and tests linkable without a browser.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory storage substitute for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
