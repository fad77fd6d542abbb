/// A cancellable fixed-period task polled by the host loop.
///
/// `due` reports how many firings are owed at a given time and advances the
/// schedule past them. Debt beyond `max_catch_up` firings is dropped rather
/// than replayed.
#[derive(Debug, Clone)]
pub struct Periodic {
    period_ms: u64,
    next_due: Option<u64>,
    max_catch_up: u32,
}

impl Periodic {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due: None,
            max_catch_up: u32::MAX,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Arm the task; the first firing is one period after `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms + self.period_ms);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn due(&mut self, now_ms: u64) -> u32 {
        let Some(next) = self.next_due else {
            return 0;
        };
        if now_ms < next {
            return 0;
        }

        let owed = (now_ms - next) / self.period_ms + 1;
        self.next_due = Some(next + owed * self.period_ms);
        owed.min(self.max_catch_up as u64) as u32
    }
}
