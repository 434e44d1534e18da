use gloo_timers::callback::Interval;
use std::collections::HashMap;

/// Repeating timers keyed by episode index. Dropping an `Interval` clears it.
#[derive(Default)]
pub struct Tickers {
    active: HashMap<usize, Interval>,
}

impl Tickers {
    pub fn start<F>(&mut self, key: usize, millis: u32, tick: F)
    where
        F: FnMut() + 'static,
    {
        self.active.insert(key, Interval::new(millis, tick));
    }

    pub fn stop(&mut self, key: usize) {
        self.active.remove(&key);
    }

    /// Stops a ticker from inside its own callback. The interval's closure is
    /// still on the stack, so it is dropped on the next microtask instead.
    pub fn stop_deferred(&mut self, key: usize) {
        if let Some(interval) = self.active.remove(&key) {
            wasm_bindgen_futures::spawn_local(async move {
                drop(interval);
            });
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
