//! Loading indicator state toggled around asynchronous requests
//!
//! [`LoadingState::begin`] flips the indicator on synchronously, before the
//! caller reaches its first await point, and returns a guard whose `Drop`
//! flips it back off. The clear therefore runs on every exit path of the
//! request: success, failure, or unwind.

/// One active/label pair per controller instance.
#[derive(Debug, Default)]
pub struct LoadingState {
    active: bool,
    label: String,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Mark the state active with the given label and return the guard that
    /// clears it when dropped.
    pub fn begin(&mut self, label: &str) -> LoadingGuard<'_> {
        self.active = true;
        self.label = label.to_string();
        LoadingGuard { state: self }
    }
}

/// Clears the owning [`LoadingState`] when it goes out of scope.
pub struct LoadingGuard<'a> {
    state: &'a mut LoadingState,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.active = false;
        self.state.label.clear();
    }
}
