pub mod bsn_btc_state;
pub mod canonical_chain;
pub mod chain_info;
pub mod epochs;
pub mod forks;
pub mod params;
pub mod triggers;

pub use bsn_btc_state::*;
pub use canonical_chain::*;
pub use chain_info::*;
pub use epochs::*;
pub use forks::*;
pub use params::*;
pub use triggers::*;

use cosmwasm_std::StdError;

/// Error type for the ZoneConcierge stores.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("The bytes cannot be decoded")]
    Decode(#[from] prost::DecodeError),
    #[error(transparent)]
    CosmwasmStd(#[from] StdError),
    #[error("Chain info of consumer {consumer_id} is not found")]
    ChainInfoNotFound { consumer_id: String },
    #[error("Header of consumer {consumer_id} at height {height} is not found")]
    HeaderNotFound { consumer_id: String, height: u64 },
    #[error("Chain info of consumer {consumer_id} at epoch {epoch} is not found")]
    EpochChainInfoNotFound { consumer_id: String, epoch: u64 },
    #[error("Consumer {consumer_id} has no timestamped header at or before height {height}")]
    NoTimestampedHeaderBefore { consumer_id: String, height: u64 },
    #[error("Proof that epoch {epoch} is sealed is not found")]
    SealedEpochProofNotFound { epoch: u64 },
    #[error("Params are not set")]
    ParamsNotFound {},
}
