//! Clocks
//!
//! Source of creation timestamps for new todos.

pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;
}

/// Wall clock: `Date.now()` in the browser, `SystemTime` elsewhere
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Settable clock for tests. Clones share the same time.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<u64>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn at(now_ms: u64) -> Self {
        Self { now: std::rc::Rc::new(std::cell::Cell::new(now_ms)) }
    }

    pub fn advance(&self, by_ms: u64) {
        self.now.set(self.now.get() + by_ms);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
