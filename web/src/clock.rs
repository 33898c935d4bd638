use gloo::timers::callback::Interval;
use memento_core::TICK_INTERVAL_MS;

/// Once-a-second tick source; the interval is released when stopped or dropped.
#[derive(Debug, Default)]
pub(crate) struct Clock {
    interval: Option<Interval>,
}

impl Clock {
    /// (Re)starts ticking; any previous interval is cancelled first.
    pub(crate) fn start(&mut self, on_tick: impl FnMut() + 'static) {
        self.stop();
        self.interval = Some(Interval::new(TICK_INTERVAL_MS, on_tick));
        log::debug!("clock started");
    }

    pub(crate) fn stop(&mut self) {
        if self.interval.take().is_some() {
            log::debug!("clock stopped");
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn restart_keeps_a_single_interval() {
        let mut clock = Clock::default();
        assert!(!clock.is_running());

        clock.start(|| {});
        clock.start(|| {});
        assert!(clock.is_running());

        clock.stop();
        assert!(!clock.is_running());
    }
}
