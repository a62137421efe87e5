use crate::ports::ConfigStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ConfigStore> {
    store: S,
}

impl<S: ConfigStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the configuration store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
