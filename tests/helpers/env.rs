// tests/helpers/env.rs
// Scoped environment variable guard for tests. Restores previous values on drop.

use std::env;

#[derive(Debug, Default)]
pub struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    pub fn new() -> Self { Self::default() }

    fn save(&mut self, key: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), env::var(key).ok()));
        }
    }

    pub fn set<K: AsRef<str>, V: AsRef<str>>(mut self, key: K, value: V) -> Self {
        self.save(key.as_ref());
        env::set_var(key.as_ref(), value.as_ref());
        self
    }

    pub fn remove<K: AsRef<str>>(mut self, key: K) -> Self {
        self.save(key.as_ref());
        env::remove_var(key.as_ref());
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, prev) in self.saved.drain(..).rev() {
            match prev {
                Some(v) => env::set_var(&key, v),
                None => env::remove_var(&key),
            }
        }
    }
}
