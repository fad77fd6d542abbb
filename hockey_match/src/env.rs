use std::cell::Cell;
use std::rc::Rc;

/// Abstract environment (wall clock)
pub trait Environment {
    fn now(&self) -> u64; // ms since the Unix epoch
}

/// Real clock
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn now(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Hand-driven clock for headless runs and tests.
///
/// Clones share the same time, so a host can keep one handle and give the
/// other to a controller.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) -> u64 {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);
        now
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }
}

impl Environment for ManualClock {
    fn now(&self) -> u64 {
        self.now_ms.get()
    }
}
