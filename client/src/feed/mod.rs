use std::collections::VecDeque;

use log::{debug, warn};

use tilesync_shared::PubKey;

mod source;

pub use source::{AccountSource, TransportError};

/// How an update reached the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOrigin {
    Push,
    Poll,
}

/// Raw account bytes as delivered, not yet decoded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountUpdate {
    pub address: PubKey,
    pub bytes: Vec<u8>,
    pub origin: UpdateOrigin,
}

impl AccountUpdate {
    pub fn push(address: PubKey, bytes: Vec<u8>) -> Self {
        Self {
            address,
            bytes,
            origin: UpdateOrigin::Push,
        }
    }

    pub fn poll(address: PubKey, bytes: Vec<u8>) -> Self {
        Self {
            address,
            bytes,
            origin: UpdateOrigin::Poll,
        }
    }
}

/// FIFO joining subscription pushes and polled reads, so both reach the
/// decoder one at a time in arrival order
pub struct SubscriptionFeed {
    queue: VecDeque<AccountUpdate>,
    max_queued: usize,
    dropped: u64,
}

impl SubscriptionFeed {
    pub fn new(max_queued: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            max_queued: max_queued.max(1),
            dropped: 0,
        }
    }

    /// Queues an update. When the queue is full the oldest update is dropped,
    /// a later snapshot of the same account supersedes it anyway.
    pub fn push(&mut self, update: AccountUpdate) {
        if self.queue.len() >= self.max_queued {
            if let Some(oldest) = self.queue.pop_front() {
                self.dropped += 1;
                warn!(
                    "Update queue full, dropping oldest update from {}",
                    oldest.address
                );
            }
        }
        self.queue.push_back(update);
    }

    /// Reads `address` once from `source` and queues the bytes.
    /// Returns whether anything was queued.
    pub fn poll_source(
        &mut self,
        source: &mut dyn AccountSource,
        address: PubKey,
    ) -> Result<bool, TransportError> {
        match source.get(&address)? {
            Some(bytes) => {
                self.push(AccountUpdate::poll(address, bytes));
                Ok(true)
            }
            None => {
                debug!("Account {} does not exist yet", address);
                Ok(false)
            }
        }
    }

    pub fn pop(&mut self) -> Option<AccountUpdate> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Updates lost to a full queue since creation
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
