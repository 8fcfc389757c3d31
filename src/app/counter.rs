//! Click counter shown next to the example button

/// Number of completed clicks on the example button.
///
/// Starts at zero and only ever grows. The value lives as long as the
/// application state and is never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickCounter {
    clicks: u64,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one completed click. Saturates instead of wrapping.
    pub fn record_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    pub fn value(&self) -> u64 {
        self.clicks
    }
}
