use crate::config::ConfigError;
use crate::transport::TransportError;
use crate::types::RacerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaceError {
    /// The initial roster read failed. Fatal: the race never starts.
    #[error("startup failed: {0}")]
    Startup(#[source] TransportError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("registry returned an empty roster")]
    EmptyRoster,

    #[error("duplicate racer id {0} in roster")]
    DuplicateRacer(RacerId),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RaceResult<T> = Result<T, RaceError>;
