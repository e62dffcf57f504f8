//! Fixed-cadence chunk reveal schedule.
//!
//! Reveals one chunk per period. The schedule owns only its armed deadline
//! and the current chunk index; chunk text and play state live in the
//! session controller.

/// Outcome of a chunk schedule tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChunkTick {
    /// Deadline not reached, or schedule disarmed.
    Idle,
    /// The chunk at `index` is due for reveal.
    Advanced { index: u32 },
    /// The last chunk's display period elapsed; the schedule disarmed
    /// itself without revealing anything further.
    Finished,
}

#[derive(Clone, Copy, Debug)]
pub struct ChunkSchedule {
    chunk_total: u32,
    period_ms: u64,
    index: u32,
    next_due_ms: Option<u64>,
}

impl ChunkSchedule {
    pub fn new(chunk_total: u32, period_ms: u64) -> Self {
        Self {
            chunk_total: chunk_total.max(1),
            period_ms: period_ms.max(1),
            index: 0,
            next_due_ms: None,
        }
    }

    /// Arms the repeating deadline. The caller reveals chunk 0 itself at arm
    /// time; the first deadline covers chunk 1.
    pub fn arm(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
    }

    /// Disarms without touching the index.
    pub fn pause(&mut self) {
        self.next_due_ms = None;
    }

    /// Re-arms a fresh full period from `now_ms`. Time already elapsed
    /// inside the period interrupted by [`Self::pause`] is dropped.
    pub fn resume(&mut self, now_ms: u64) {
        if self.index < self.chunk_total {
            self.arm(now_ms);
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> ChunkTick {
        let Some(due) = self.next_due_ms else {
            return ChunkTick::Idle;
        };
        if now_ms < due {
            return ChunkTick::Idle;
        }

        if self.index + 1 >= self.chunk_total {
            self.next_due_ms = None;
            return ChunkTick::Finished;
        }

        self.index += 1;
        self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
        ChunkTick::Advanced { index: self.index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn chunk_total(&self) -> u32 {
        self.chunk_total
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }
}
