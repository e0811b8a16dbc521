//! Query messages and responses of the ZoneConcierge module.

use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_proto::babylon::checkpointing::v1::{RawCheckpoint, ValidatorWithBlsKey};
use babylon_proto::babylon::epoching::v1::Epoch;
use babylon_proto::babylon::zoneconcierge::v1::{
    BsnBtcState, ChainInfo, ChainInfoWithProof, Forks, IndexedHeader, Params, ProofEpochSealed,
};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Timestamp};
use hex::ToHex;
use prost::Message;

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the module params.
    #[returns(ParamsResponse)]
    Params {},
    /// Returns the latest chain info of a consumer.
    #[returns(ChainInfoResponse)]
    ChainInfo { consumer_id: String },
    /// Returns the latest chain infos of the given consumers.
    #[returns(ChainInfosResponse)]
    ChainInfos { consumer_ids: Vec<String> },
    /// Returns the IDs of all consumers that got at least one header timestamped.
    #[returns(ConsumerIdsResponse)]
    ConsumerIds {},
    /// Returns the canonical header of a consumer at a height, with the fork
    /// headers at that height.
    #[returns(HeaderResponse)]
    Header { consumer_id: String, height: u64 },
    /// Lists the canonical headers of a consumer.
    /// `start_after` is the height to start after, `reverse` iterates from the
    /// highest header down.
    #[returns(ListHeadersResponse)]
    ListHeaders {
        consumer_id: String,
        start_after: Option<u64>,
        limit: Option<u32>,
        reverse: Option<bool>,
    },
    /// Returns the highest canonical header of a consumer at or below a height.
    #[returns(IndexedHeaderResponse)]
    ClosestHeader { consumer_id: String, height: u64 },
    /// Returns the latest header of a consumer timestamped in the current epoch.
    #[returns(Option<IndexedHeaderResponse>)]
    LatestEpochHeader { consumer_id: String },
    /// Returns the chain info of a consumer at the end of an epoch.
    #[returns(EpochChainInfoResponse)]
    EpochChainInfo { epoch_number: u64, consumer_id: String },
    /// Returns the chain info of a consumer at the last finalized epoch.
    #[returns(FinalizedChainInfoResponse)]
    FinalizedChainInfo { consumer_id: String },
    /// Returns the BTC synchronisation state of a consumer.
    #[returns(BsnBtcStateResponse)]
    BsnBtcState { consumer_id: String },
    /// Returns the proof that an epoch is sealed.
    #[returns(SealedEpochProofResponse)]
    SealedEpochProof { epoch_number: u64 },
}

/// `None` if the time is before the Unix epoch or does not fit in `u64`
/// nanoseconds.
fn to_timestamp(t: &pbjson_types::Timestamp) -> Option<Timestamp> {
    let seconds = u64::try_from(t.seconds).ok()?;
    let nanos = u64::try_from(t.nanos).ok().filter(|n| *n < 1_000_000_000)?;
    seconds
        .checked_mul(1_000_000_000)?
        .checked_add(nanos)
        .map(Timestamp::from_nanos)
}

#[cw_serde]
pub struct ParamsResponse {
    pub ibc_packet_timeout_seconds: u32,
    pub max_headers_per_packet: u32,
}

impl From<&Params> for ParamsResponse {
    fn from(params: &Params) -> Self {
        Self {
            ibc_packet_timeout_seconds: params.ibc_packet_timeout_seconds,
            max_headers_per_packet: params.max_headers_per_packet,
        }
    }
}

/// Metadata of a consumer header.
///
/// This struct is for use in RPC requests and responses. It has convenience helpers to convert
/// from the internal representation (`IndexedHeader`).
#[cw_serde]
pub struct IndexedHeaderResponse {
    /// Unique ID of the consumer
    pub consumer_id: String,
    /// Hash of this header.
    /// Hex-encoded string of 32 bytes
    pub hash: String,
    /// Height of this header in the consumer's ledger.
    /// (hash, height) jointly provides the position of the header on the consumer ledger
    pub height: u64,
    /// Timestamp of this header in the consumer's ledger
    pub time: Option<Timestamp>,
    /// Hash of the babylon block that includes this consumer header.
    /// Hex-encoded string of 32 bytes
    pub babylon_header_hash: String,
    /// Height of the babylon block that includes this consumer header
    pub babylon_header_height: u64,
    /// Epoch number of this header in the Babylon ledger
    pub babylon_epoch: u64,
    /// Hash of the tx that includes this header.
    /// Hex-encoded string of 32 bytes
    pub babylon_tx_hash: String,
}

impl From<&IndexedHeader> for IndexedHeaderResponse {
    fn from(header: &IndexedHeader) -> Self {
        IndexedHeaderResponse {
            consumer_id: header.consumer_id.clone(),
            hash: header.hash.encode_hex(),
            height: header.height,
            time: header.time.as_ref().and_then(to_timestamp),
            babylon_header_hash: header.babylon_header_hash.encode_hex(),
            babylon_header_height: header.babylon_header_height,
            babylon_epoch: header.babylon_epoch,
            babylon_tx_hash: header.babylon_tx_hash.encode_hex(),
        }
    }
}

impl From<IndexedHeader> for IndexedHeaderResponse {
    fn from(header: IndexedHeader) -> Self {
        Self::from(&header)
    }
}

#[cw_serde]
pub struct ForksResponse {
    pub headers: Vec<IndexedHeaderResponse>,
}

impl From<&Forks> for ForksResponse {
    fn from(forks: &Forks) -> Self {
        Self {
            headers: forks.headers.iter().map(Into::into).collect(),
        }
    }
}

#[cw_serde]
pub struct ChainInfoResponse {
    pub consumer_id: String,
    /// The latest canonical header
    pub latest_header: Option<IndexedHeaderResponse>,
    /// The fork headers at the highest height forks were seen at
    pub latest_forks: ForksResponse,
    /// Number of canonical heights timestamped so far
    pub timestamped_headers_count: u64,
}

impl From<&ChainInfo> for ChainInfoResponse {
    fn from(chain_info: &ChainInfo) -> Self {
        Self {
            consumer_id: chain_info.consumer_id.clone(),
            latest_header: chain_info.latest_header.as_ref().map(Into::into),
            latest_forks: chain_info
                .latest_forks
                .as_ref()
                .map(Into::into)
                .unwrap_or(ForksResponse { headers: vec![] }),
            timestamped_headers_count: chain_info.timestamped_headers_count,
        }
    }
}

impl From<ChainInfo> for ChainInfoResponse {
    fn from(chain_info: ChainInfo) -> Self {
        Self::from(&chain_info)
    }
}

#[cw_serde]
pub struct ChainInfosResponse {
    pub chain_infos: Vec<ChainInfoResponse>,
}

#[cw_serde]
pub struct ConsumerIdsResponse {
    pub consumer_ids: Vec<String>,
}

#[cw_serde]
pub struct HeaderResponse {
    pub header: IndexedHeaderResponse,
    pub fork_headers: ForksResponse,
}

#[cw_serde]
pub struct ListHeadersResponse {
    pub headers: Vec<IndexedHeaderResponse>,
}

/// Chain info snapshot of a consumer at the end of an epoch
#[cw_serde]
pub struct EpochChainInfoResponse {
    pub epoch_number: u64,
    pub chain_info: Option<ChainInfoResponse>,
    /// Protobuf-encoded `ProofOps` proving the latest header was committed in
    /// the epoch. Only set once the epoch is sealed and if the header belongs
    /// to the epoch.
    pub proof_header_in_epoch: Option<Binary>,
}

impl EpochChainInfoResponse {
    pub fn new(epoch_number: u64, chain_info: &ChainInfoWithProof) -> Self {
        Self {
            epoch_number,
            chain_info: chain_info.chain_info.as_ref().map(Into::into),
            proof_header_in_epoch: chain_info
                .proof_header_in_epoch
                .as_ref()
                .map(|p| Binary::new(p.encode_to_vec())),
        }
    }
}

/// Babylon epoch.
///
/// Adapted from `Epoch`.
#[cw_serde]
pub struct EpochResponse {
    pub epoch_number: u64,
    pub current_epoch_interval: u64,
    pub first_block_height: u64,
    /// Height of the first block of the next epoch, whose header seals this one
    pub sealer_block_height: u64,
    /// The time of the last block in this epoch
    pub last_block_time: Option<Timestamp>,
    /// App hash of the sealer header, hex-encoded
    pub sealer_app_hash: String,
    /// The hash of the sealer, hex-encoded.
    pub sealer_block_hash: String,
}

impl From<&Epoch> for EpochResponse {
    fn from(epoch: &Epoch) -> Self {
        EpochResponse {
            epoch_number: epoch.epoch_number,
            current_epoch_interval: epoch.current_epoch_interval,
            first_block_height: epoch.first_block_height,
            sealer_block_height: epoch.sealer_block_height(),
            last_block_time: epoch.last_block_time.as_ref().and_then(to_timestamp),
            sealer_app_hash: epoch.sealer_app_hash.encode_hex(),
            sealer_block_hash: epoch.sealer_block_hash.encode_hex(),
        }
    }
}

/// CheckpointResponse wraps the BLS multi sig with metadata.
///
/// Adapted from `RawCheckpoint`.
#[cw_serde]
pub struct CheckpointResponse {
    /// The epoch number the raw checkpoint is for.
    pub epoch_num: u64,
    /// Defines the 'BlockID.Hash', which is the hash of the block that individual BLS sigs
    /// are signed on, in hex-encoded string.
    pub block_hash: String,
    /// Defines the bitmap that indicates the signers of the BLS multi sig, in hex-encoded string.
    pub bitmap: String,
    /// Defines the multi sig that is aggregated from individual BLS sigs, in hex-encoded string.
    pub bls_multi_sig: String,
}

impl From<&RawCheckpoint> for CheckpointResponse {
    fn from(checkpoint: &RawCheckpoint) -> Self {
        Self {
            epoch_num: checkpoint.epoch_num,
            block_hash: checkpoint.block_hash.encode_hex(),
            bitmap: checkpoint.bitmap.encode_hex(),
            bls_multi_sig: checkpoint.bls_multi_sig.encode_hex(),
        }
    }
}

#[cw_serde]
pub struct FinalizedChainInfoResponse {
    pub epoch_info: EpochResponse,
    pub raw_checkpoint: CheckpointResponse,
    pub finalized_chain_info: EpochChainInfoResponse,
}

#[cw_serde]
pub struct BtcHeaderResponse {
    pub height: u32,
    /// Block hash in Bitcoin's display byte order
    pub hash: String,
    /// Consensus-encoded header, hex-encoded
    pub header: String,
}

impl From<&BtcHeaderInfo> for BtcHeaderResponse {
    fn from(header: &BtcHeaderInfo) -> Self {
        Self {
            height: header.height,
            hash: header.hash_hex(),
            header: header.header.encode_hex(),
        }
    }
}

#[cw_serde]
pub struct BsnBtcStateResponse {
    /// BTC header the consumer's light client is based on, if reported
    pub base_header: Option<BtcHeaderResponse>,
    /// Headers of the last segment sent to the consumer
    pub last_sent_segment: Vec<BtcHeaderResponse>,
}

impl From<&BsnBtcState> for BsnBtcStateResponse {
    fn from(state: &BsnBtcState) -> Self {
        Self {
            base_header: state.base_header.as_ref().map(Into::into),
            last_sent_segment: state.last_sent_headers().iter().map(Into::into).collect(),
        }
    }
}

#[cw_serde]
pub struct ValidatorResponse {
    pub validator_address: String,
    /// BLS public key, hex-encoded
    pub bls_pub_key: String,
    pub voting_power: u64,
}

impl From<&ValidatorWithBlsKey> for ValidatorResponse {
    fn from(val: &ValidatorWithBlsKey) -> Self {
        Self {
            validator_address: val.validator_address.clone(),
            bls_pub_key: val.bls_pub_key.encode_hex(),
            voting_power: val.voting_power,
        }
    }
}

#[cw_serde]
pub struct SealedEpochProofResponse {
    pub epoch_number: u64,
    pub validator_set: Vec<ValidatorResponse>,
    /// Protobuf-encoded `ProofOps` of the epoch metadata
    pub proof_epoch_info: Option<Binary>,
    /// Protobuf-encoded `ProofOps` of the validator set
    pub proof_epoch_val_set: Option<Binary>,
}

impl SealedEpochProofResponse {
    pub fn new(epoch_number: u64, proof: &ProofEpochSealed) -> Self {
        Self {
            epoch_number,
            validator_set: proof.validator_set.iter().map(Into::into).collect(),
            proof_epoch_info: proof
                .proof_epoch_info
                .as_ref()
                .map(|p| Binary::new(p.encode_to_vec())),
            proof_epoch_val_set: proof
                .proof_epoch_val_set
                .as_ref()
                .map(|p| Binary::new(p.encode_to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pb_time(seconds: i64, nanos: i32) -> pbjson_types::Timestamp {
        pbjson_types::Timestamp { seconds, nanos }
    }

    #[test]
    fn out_of_range_times_are_dropped() {
        assert_eq!(
            to_timestamp(&pb_time(1_700_000_000, 42)),
            Some(Timestamp::from_seconds(1_700_000_000).plus_nanos(42))
        );
        assert_eq!(to_timestamp(&pb_time(-1, 0)), None);
        assert_eq!(to_timestamp(&pb_time(0, -1)), None);
        assert_eq!(to_timestamp(&pb_time(i64::MAX, 0)), None);

        let header = IndexedHeader {
            consumer_id: "07-tendermint-0".to_string(),
            time: Some(pb_time(-5, 0)),
            ..Default::default()
        };
        assert_eq!(IndexedHeaderResponse::from(&header).time, None);
    }
}
