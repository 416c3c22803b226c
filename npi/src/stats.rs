use lazy_static::lazy_static;
use metrics::{counter, gauge, Counter, Gauge};
use std::sync::atomic::{AtomicI64, Ordering};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

/// Process wide lifecycle of configured validators.
pub struct Stats {
    created: Counter,
    dropped: Counter,
    // statsd style exporters can't increment a gauge, so the live count is kept here
    live: AtomicI64,
    live_gauge: Gauge,
}

impl Stats {
    fn new() -> Self {
        Self {
            created: counter!("npi.validators.created"),
            dropped: counter!("npi.validators.deleted"),
            live: AtomicI64::new(0),
            live_gauge: gauge!("npi.validators.total_count"),
        }
    }

    pub fn validator_created(&self) {
        self.created.increment(1);
        self.adjust_live(1);
    }

    pub fn validator_dropped(&self) {
        self.dropped.increment(1);
        self.adjust_live(-1);
    }

    fn adjust_live(&self, delta: i64) {
        let live = self.live.fetch_add(delta, Ordering::SeqCst) + delta;
        self.live_gauge.set(live as f64);
    }
}
