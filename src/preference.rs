use std::collections::HashMap;

use crate::scheme::{Scheme, Schemes};


// Cookie key under which the chosen scheme id is persisted.
pub const PREFERENCE_KEY: &str = "PowerPreference";

// Key-value preference storage. In the browser this is backed by cookies; the
// in-memory implementation below backs the tests.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> { self.values.get(key).cloned() }
    fn set(&mut self, key: &str, value: &str) { self.values.insert(key.to_owned(), value.to_owned()); }
}

// Persisted display-scheme preference.
//
// `apply_scheme` is the only path that writes the store; `initialize` applies
// a stored scheme without re-writing it, so loading is idempotent and an
// unrecognized cookie value is left untouched.
#[derive(Clone, Debug)]
pub struct DisplayPreference {
    schemes: Schemes,
}

impl DisplayPreference {
    pub fn new(schemes: Schemes) -> Self { DisplayPreference { schemes } }

    pub fn schemes(&self) -> &Schemes { &self.schemes }

    pub fn load_stored_scheme(&self, store: &dyn PreferenceStore) -> Option<&Scheme> {
        let value = store.get(PREFERENCE_KEY)?;
        let scheme = self.schemes.get(&value);
        if scheme.is_none() {
            log::warn!(
                "Ignoring unrecognized stored scheme {:?} (known: {})",
                value,
                self.schemes.known_ids()
            );
        }
        scheme
    }

    // Returns the scheme to display, or `None` if `scheme_id` is unknown.
    // Persists the canonical scheme id.
    pub fn apply_scheme(&self, store: &mut dyn PreferenceStore, scheme_id: &str) -> Option<&Scheme> {
        let scheme = self.schemes.get(scheme_id)?;
        store.set(PREFERENCE_KEY, scheme.id());
        log::info!("Display scheme set to {:?}", scheme.id());
        Some(scheme)
    }

    // Called once on page load. Never writes the store.
    pub fn initialize(&self, store: &dyn PreferenceStore) -> Option<&Scheme> {
        self.load_stored_scheme(store)
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn preference() -> DisplayPreference { DisplayPreference::new(Schemes::standard()) }

    #[test]
    fn apply_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let preference = preference();
        preference.apply_scheme(&mut store, "power").unwrap();
        assert_eq!(preference.load_stored_scheme(&store).unwrap().id(), "power");
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), "power");
    }

    #[test]
    fn first_visit_has_no_preference() {
        let store = MemoryStore::new();
        assert!(preference().initialize(&store).is_none());
    }

    #[test]
    fn unknown_scheme_is_not_applied() {
        let mut store = MemoryStore::new();
        assert!(preference().apply_scheme(&mut store, "projected").is_none());
        assert_eq!(store.get(PREFERENCE_KEY), None);
    }

    #[test]
    fn initialize_does_not_rewrite_the_store() {
        let mut store = MemoryStore::new();
        store.set(PREFERENCE_KEY, "record");
        let preference = preference();
        assert_eq!(preference.initialize(&store).unwrap().id(), "record");
        // The stored value stays as-is until the user actively picks a scheme.
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), "record");
    }

    #[test]
    fn unrecognized_stored_value_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(PREFERENCE_KEY, "banana");
        assert!(preference().initialize(&store).is_none());
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), "banana");
    }

    #[test]
    fn applying_alias_persists_canonical_id() {
        let mut store = MemoryStore::new();
        let preference = preference();
        assert_eq!(preference.apply_scheme(&mut store, "score").unwrap().id(), "power");
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), "power");
    }
}
