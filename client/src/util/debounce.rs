//! Debounced input helper.
//!
//! Each keystroke takes a ticket; the value is applied only if no newer
//! ticket was issued before the delay elapsed. Only the last value in a burst
//! reaches the target signal.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use leptos::prelude::*;

/// Quiet period before a typed value is committed.
pub const INPUT_DEBOUNCE_MS: u32 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Monotonic ticket counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&mut self) -> DebounceTicket {
        self.latest += 1;
        DebounceTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Callback that writes into `target` after `delay_ms` of input silence.
pub fn debounced_input(target: RwSignal<String>, delay_ms: u32) -> Callback<String> {
    let clock = StoredValue::new(Debouncer::default());
    Callback::new(move |value: String| {
        let ticket = clock.try_update_value(Debouncer::issue);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            let current = ticket.is_some_and(|t| clock.with_value(|c| c.is_latest(t)));
            if current {
                target.set(value);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, value, delay_ms, target);
        }
    })
}
