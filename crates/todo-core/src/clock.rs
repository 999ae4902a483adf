//! Time source for creation and export timestamps.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock (`Date.now()` under wasm)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_advances() {
        let clock = Rc::new(FixedClock::new(Utc.timestamp_opt(10, 0).unwrap()));
        let shared: Rc<dyn Clock> = clock.clone();
        clock.advance(Duration::seconds(5));
        assert_eq!(shared.now().timestamp(), 15);
    }
}
