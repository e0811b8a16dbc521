//! Interfaces of the Babylon modules ZoneConcierge depends on.

use std::collections::BTreeMap;

use babylon_proto::babylon::btccheckpoint::v1::{
    Params as BtcCheckpointParams, SubmissionKey, TransactionInfo,
};
use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_proto::babylon::btcstaking::v1::BtcStakingIbcPacket;
use babylon_proto::babylon::btcstkconsumer::v1::consumer_register::ConsumerMetadata;
use babylon_proto::babylon::btcstkconsumer::v1::ConsumerRegister;
use babylon_proto::babylon::checkpointing::v1::{RawCheckpoint, ValidatorWithBlsKey};
use babylon_proto::babylon::epoching::v1::Epoch;
use cosmwasm_std::{Binary, IbcTimeout, StdResult};
use ibc_proto::ibc::core::channel::v1::IdentifiedChannel;
use tendermint_proto::crypto::ProofOps;

pub trait ConsumerRegistry {
    fn get_consumer_register(&self, consumer_id: &str) -> StdResult<ConsumerRegister>;

    /// Whether the IBC client backs a registered Cosmos consumer. A Cosmos
    /// consumer is identified by the ID of its light client.
    fn is_registered_cosmos_consumer(&self, client_id: &str) -> bool {
        matches!(
            self.get_consumer_register(client_id),
            Ok(ConsumerRegister {
                consumer_metadata: Some(ConsumerMetadata::CosmosConsumerMetadata(_)),
                ..
            })
        )
    }
}

pub trait ClientKeeper {
    /// A frozen client has accepted conflicting headers
    fn is_frozen(&self, client_id: &str) -> StdResult<bool>;
}

pub trait BtcLightClientKeeper {
    fn get_tip_info(&self) -> StdResult<BtcHeaderInfo>;
    /// Canonical headers from `height` to the tip, ascending
    fn get_main_chain_from(&self, height: u32) -> StdResult<Vec<BtcHeaderInfo>>;
    /// The `depth + 1` canonical headers ending at the tip, ascending
    fn get_main_chain_up_to(&self, depth: u32) -> StdResult<Vec<BtcHeaderInfo>>;
    fn get_header_by_hash(&self, hash: &[u8]) -> StdResult<Option<BtcHeaderInfo>>;
    fn get_header_by_height(&self, height: u32) -> StdResult<Option<BtcHeaderInfo>>;
}

pub trait CheckpointingKeeper {
    fn get_raw_checkpoint(&self, epoch: u64) -> StdResult<RawCheckpoint>;
    fn get_last_finalized_epoch(&self) -> StdResult<u64>;
    fn get_bls_pub_key_set(&self, epoch: u64) -> StdResult<Vec<ValidatorWithBlsKey>>;
    /// Proof that the epoch's validator set is committed to the sealer header
    fn prove_val_set(&self, epoch: &Epoch) -> StdResult<ProofOps>;
}

pub trait BtcCheckpointKeeper {
    fn get_params(&self) -> BtcCheckpointParams;
    /// The earliest submission carrying the epoch's checkpoint
    fn get_best_submission(&self, epoch: u64) -> StdResult<SubmissionKey>;
    fn get_submission_data(&self, key: &SubmissionKey) -> StdResult<Vec<TransactionInfo>>;
}

pub trait EpochingKeeper {
    /// The current epoch
    fn get_epoch(&self) -> Epoch;
    fn get_historical_epoch(&self, epoch: u64) -> StdResult<Epoch>;
    /// Proof that the epoch's metadata is committed to the sealer header
    fn prove_epoch_info(&self, epoch: &Epoch) -> StdResult<ProofOps>;
}

pub trait BtcStakingKeeper {
    /// Pending BTC staking events, grouped by consumer ID
    fn get_all_consumer_event_batches(&self) -> StdResult<BTreeMap<String, BtcStakingIbcPacket>>;
    fn delete_consumer_event_batch(&self, consumer_id: &str) -> StdResult<()>;
    /// Consumer ID the finality provider is registered on
    fn get_finality_provider_consumer(&self, fp_btc_pk: &[u8]) -> StdResult<String>;
    fn slash_finality_provider(&self, fp_btc_pk: &[u8]) -> StdResult<()>;
    fn propagate_fp_slashing_to_consumers(&self, fp_btc_sk: &[u8]) -> StdResult<()>;
}

pub trait ChannelKeeper {
    fn get_all_channels(&self, port_id: &str) -> StdResult<Vec<IdentifiedChannel>>;
    fn get_channel(&self, port_id: &str, channel_id: &str) -> StdResult<Option<IdentifiedChannel>>;
    fn get_next_sequence_send(&self, port_id: &str, channel_id: &str) -> StdResult<u64>;
    /// ID of the light client the channel's connection is built on
    fn get_channel_client_id(&self, port_id: &str, channel_id: &str) -> StdResult<String>;
    fn get_connection_client_id(&self, connection_id: &str) -> StdResult<String>;
    /// Sends a packet, returning its sequence number
    fn send_packet(
        &self,
        port_id: &str,
        channel_id: &str,
        data: Binary,
        timeout: IbcTimeout,
    ) -> StdResult<u64>;
    /// Largest payload a packet may carry, in bytes
    fn max_packet_size(&self) -> usize;
}

pub trait StoreQuerier {
    /// Queries `key` in the store `store_key` at `height`, with a Merkle proof
    /// against the app hash of that height
    fn query_store(&self, store_key: &str, key: &[u8], height: u64) -> StdResult<ProofOps>;
}
