use std::collections::VecDeque;

use ow_core::NormalizedShare;

/// Bounded FIFO of shares waiting for a downstream handler.
///
/// When full, pushing drops the oldest share and hands it back to the caller.
#[derive(Debug)]
pub struct PendingShareQueue {
    capacity: usize,
    shares: VecDeque<NormalizedShare>,
}

impl PendingShareQueue {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            shares: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Append a share, returning the evicted oldest share on overflow.
    pub fn push(&mut self, share: NormalizedShare) -> Option<NormalizedShare> {
        let evicted = if self.shares.len() >= self.capacity {
            self.shares.pop_front()
        } else {
            None
        };
        self.shares.push_back(share);
        evicted
    }

    pub fn pop_front(&mut self) -> Option<NormalizedShare> {
        self.shares.pop_front()
    }

    /// Put back a share that was just popped and could not be delivered.
    pub(crate) fn requeue_front(&mut self, share: NormalizedShare) {
        self.shares.push_front(share);
    }

    pub fn clear(&mut self) {
        self.shares.clear();
    }
}
