//! In-process registry — backs the dry-run mode and the tests.
//!
//! Clones share one registry, so a test can hand a clone to the runner
//! and keep its own handle for assertions. Write-failure injection
//! simulates a remote that rejects every price push.

use super::{RacerRecord, RegistryTransport, TransportError, WriteReceipt};
use crate::price::Price;
use crate::types::RacerId;
use std::sync::{Arc, Mutex, MutexGuard};

struct MemoryRegistry {
    records: Vec<RacerRecord>,
    writes: Vec<(RacerId, Price)>,
    fail_writes: bool,
    write_seq: u64,
}

#[derive(Clone)]
pub struct MemoryTransport {
    inner: Arc<Mutex<MemoryRegistry>>,
}

impl MemoryTransport {
    pub fn new(records: Vec<RacerRecord>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryRegistry {
                records,
                writes: Vec::new(),
                fail_writes: false,
                write_seq: 0,
            })),
        }
    }

    /// The demo roster used by race-runner --dry-run: six racers with a
    /// spread of temperaments, priced at fractions of 1e18 wei.
    pub fn sample() -> Self {
        let records = [
            ("Comet", 190u8, 140u8, 90u8, 1_000_000_000_000_000_000u128),
            ("Blitz", 182, 230, 40, 750_000_000_000_000_000),
            ("Aurora", 195, 45, 210, 1_250_000_000_000_000_000),
            ("Marble", 170, 110, 160, 500_000_000_000_000_000),
            ("Tempest", 188, 200, 70, 900_000_000_000_000_000),
            ("Juniper", 176, 80, 130, 600_000_000_000_000_000),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (name, speed, aggression, consistency, price))| RacerRecord {
            id: index as RacerId + 1,
            name: name.to_string(),
            speed,
            aggression,
            consistency,
            price: Price::new(price),
        })
        .collect();
        Self::new(records)
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Every accepted write, in order.
    pub fn writes(&self) -> Vec<(RacerId, Price)> {
        self.lock().writes.clone()
    }

    /// Current registry-side price for a racer.
    pub fn price_of(&self, id: RacerId) -> Option<Price> {
        self.lock()
            .records
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.price)
    }

    fn lock(&self) -> MutexGuard<'_, MemoryRegistry> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RegistryTransport for MemoryTransport {
    fn read_all(&self) -> Result<Vec<RacerRecord>, TransportError> {
        Ok(self.lock().records.clone())
    }

    fn write_price(&self, id: RacerId, price: Price) -> Result<WriteReceipt, TransportError> {
        let mut registry = self.lock();
        if registry.fail_writes {
            return Err(TransportError::Status {
                code: 503,
                body: "injected registry fault".to_string(),
            });
        }
        let Some(record) = registry.records.iter_mut().find(|r| r.id == id) else {
            return Err(TransportError::UnknownRacer(id));
        };
        record.price = price;
        registry.writes.push((id, price));
        registry.write_seq += 1;
        Ok(WriteReceipt {
            confirmation: format!("0x{:016x}", registry.write_seq),
        })
    }
}
