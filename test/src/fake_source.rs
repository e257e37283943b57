use std::collections::{HashMap, HashSet};

use tilesync_client::{AccountSource, TransportError};
use tilesync_shared::PubKey;

/// In-memory ledger endpoint for one-shot reads
#[derive(Default)]
pub struct FakeAccountSource {
    accounts: HashMap<PubKey, Vec<u8>>,
    unavailable: HashSet<PubKey>,
    reads: usize,
}

impl FakeAccountSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, address: PubKey, bytes: Vec<u8>) {
        self.accounts.insert(address, bytes);
    }

    /// Reads of `address` fail until [`FakeAccountSource::recover`]
    pub fn fail(&mut self, address: PubKey) {
        self.unavailable.insert(address);
    }

    pub fn recover(&mut self, address: &PubKey) {
        self.unavailable.remove(address);
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AccountSource for FakeAccountSource {
    fn get(&mut self, address: &PubKey) -> Result<Option<Vec<u8>>, TransportError> {
        self.reads += 1;
        if self.unavailable.contains(address) {
            return Err(TransportError::Unavailable { address: *address });
        }
        Ok(self.accounts.get(address).cloned())
    }
}
