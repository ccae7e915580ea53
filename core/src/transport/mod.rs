//! Transport boundary to the racer registry.
//!
//! RULE: Only this module talks to the remote registry.
//! The engine and its passes never see the wire — the runner reads the
//! roster once at startup and pushes price updates through the
//! RegistryTransport trait, nothing more.

use crate::price::Price;
use crate::types::RacerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod http;
mod memory;

pub use http::HttpTransport;
pub use memory::MemoryTransport;

/// One registry entity as served by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RacerRecord {
    pub id: RacerId,
    pub name: String,
    pub speed: u8,
    pub aggression: u8,
    pub consistency: u8,
    pub price: Price,
}

/// Acknowledgement of a price write.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteReceipt {
    /// Confirmation token from the registry (the transaction hash).
    #[serde(rename = "txHash")]
    pub confirmation: String,
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("client build failed: {0}")]
    BuildClient(String),

    #[error("request failed: {0}")]
    Http(String),

    #[error("registry returned status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("malformed registry payload: {0}")]
    Decode(String),

    #[error("unknown racer id {0}")]
    UnknownRacer(RacerId),
}

/// The read/write boundary the simulation core consumes.
///
/// `read_all` seeds the race; a failure there is fatal and the race
/// never starts. `write_price` failures are non-fatal to the caller by
/// contract: the runner logs them and keeps going.
pub trait RegistryTransport: Send {
    fn read_all(&self) -> Result<Vec<RacerRecord>, TransportError>;

    fn write_price(&self, id: RacerId, price: Price) -> Result<WriteReceipt, TransportError>;
}
