//! Per-page fetch state.
//!
//! DESIGN
//! ======
//! A page moves `idle -> loading -> success | error` and may re-enter
//! `loading` at any time. Requests are never cancelled, so whichever response
//! resolves last is what the page shows.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

#[derive(Clone, Debug, PartialEq)]
pub struct PageState<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self { loading: false, data: None, error: None }
    }
}

impl<T> PageState<T> {
    /// A page that starts fetching on mount.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Replace the payload and clear any error.
    pub fn succeed(&mut self, data: T) {
        self.loading = false;
        self.data = Some(data);
        self.error = None;
    }

    /// Patch the current payload in place and clear any error.
    pub fn succeed_with(&mut self, patch: impl FnOnce(&mut T)) {
        self.loading = false;
        if let Some(data) = self.data.as_mut() {
            patch(data);
        }
        self.error = None;
    }

    /// Record an error. Existing data stays on screen.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
