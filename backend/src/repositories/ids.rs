//! Log entry id generation

use chrono::Utc;
use nutriai_shared::LogId;
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out time-derived ids that are strictly increasing
///
/// Each id is the current Unix time in milliseconds, bumped past the
/// previous id when two requests land in the same millisecond.
#[derive(Debug, Default)]
pub struct LogIdGenerator {
    last: AtomicI64,
}

impl LogIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> LogId {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    fn next_id_at(&self, now_millis: i64) -> LogId {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}
