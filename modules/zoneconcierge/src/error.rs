use cosmwasm_std::StdError;
use thiserror::Error;

use crate::state::StoreError;

#[derive(Error, Debug, PartialEq)]
pub enum ZoneConciergeError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to decode protobuf message: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Invalid channel version: expected {expected}, got {actual}")]
    InvalidVersion { expected: String, actual: String },

    #[error("Invalid channel ordering: ZoneConcierge channels must be ORDERED")]
    InvalidOrdering {},

    #[error("Invalid port: expected {expected}, got {actual}")]
    InvalidPort { expected: String, actual: String },

    #[error("Client {client_id} is not a registered Cosmos consumer")]
    UnregisteredConsumer { client_id: String },

    #[error("User cannot close a ZoneConcierge channel")]
    ChannelCloseNotAllowed {},

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid ProofEpochSealed: {0}")]
    InvalidProofEpochSealed(String),

    #[error("Invalid ProofEpochSubmitted: {0}")]
    InvalidProofEpochSubmitted(String),

    #[error("Packet of {size} bytes exceeds the maximum payload size of {max} bytes")]
    OversizePacket { size: usize, max: usize },

    #[error("No open channel on port {port_id} and channel {channel_id}")]
    ChannelNotFound { port_id: String, channel_id: String },

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Invalid genesis state: {0}")]
    InvalidGenesis(String),

    #[error("Invalid BTC header: {0}")]
    InvalidBtcHeader(String),

    #[error("Empty IBC packet")]
    EmptyPacket {},

    #[error("Finality provider {fp_btc_pk_hex} belongs to consumer {fp_consumer_id}, not {consumer_id}")]
    ConsumerMismatch {
        fp_btc_pk_hex: String,
        fp_consumer_id: String,
        consumer_id: String,
    },

    #[error("Consensus-critical failure: {0}")]
    ConsensusCritical(String),

    #[error(transparent)]
    Evidence(#[from] eots::Error),
}
