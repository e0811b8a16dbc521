//! In-memory implementations of the modules ZoneConcierge depends on, for
//! unit tests and downstream test suites.

mod btc_light_client;
mod channels;

pub use btc_light_client::MockBtcLightClient;
pub use channels::{MockChannels, SentPacket, DEFAULT_MAX_PACKET_SIZE};

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use babylon_proto::babylon::btccheckpoint::v1::{
    Params as BtcCheckpointParams, SubmissionKey, TransactionInfo,
};
use babylon_proto::babylon::btcstaking::v1::BtcStakingIbcPacket;
use babylon_proto::babylon::btcstkconsumer::v1::consumer_register::ConsumerMetadata;
use babylon_proto::babylon::btcstkconsumer::v1::{ConsumerRegister, CosmosConsumerMetadata};
use babylon_proto::babylon::checkpointing::v1::{RawCheckpoint, ValidatorWithBlsKey};
use babylon_proto::babylon::epoching::v1::Epoch;
use babylon_test_utils::{
    gen_random_epoch, gen_random_raw_checkpoint, gen_random_submission, gen_random_validator_set,
};
use cosmwasm_std::{StdError, StdResult, Timestamp};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tendermint_proto::crypto::{ProofOp, ProofOps};

use crate::expected_keepers::{
    BtcCheckpointKeeper, BtcStakingKeeper, CheckpointingKeeper, ClientKeeper, ConsumerRegistry,
    EpochingKeeper, StoreQuerier,
};
use crate::{BlockHeader, Keeper};

/// Finalization depth `w` of a fresh app
pub const DEFAULT_FINALIZATION_DEPTH: u32 = 6;
const VALIDATOR_SET_SIZE: usize = 4;

/// Babylon block at `height`, five seconds apart
pub fn mock_block(height: u64) -> BlockHeader {
    BlockHeader {
        height,
        time: Timestamp::from_seconds(1_700_000_000 + height * 5),
        hash: Sha256::digest(height.to_be_bytes()).to_vec(),
    }
}

/// Deterministic single-op proof of `key`
pub fn mock_proof(key: &[u8]) -> ProofOps {
    ProofOps {
        ops: vec![ProofOp {
            r#type: "ics23:iavl".to_string(),
            key: key.to_vec(),
            data: Sha256::digest(key).to_vec(),
        }],
    }
}

/// Every Babylon module ZoneConcierge talks to, backed by plain collections.
///
/// The BTC light client and the channel keeper are exposed as fields so tests
/// can drive them directly.
pub struct MockApp {
    pub btc: MockBtcLightClient,
    pub channels: MockChannels,
    epoch_interval: u64,
    consumers: RefCell<BTreeMap<String, ConsumerRegister>>,
    frozen_clients: RefCell<BTreeSet<String>>,
    current_epoch: RefCell<Epoch>,
    epochs: RefCell<BTreeMap<u64, Epoch>>,
    validator_sets: RefCell<BTreeMap<u64, Vec<ValidatorWithBlsKey>>>,
    raw_checkpoints: RefCell<BTreeMap<u64, RawCheckpoint>>,
    last_finalized_epoch: Cell<u64>,
    btc_checkpoint_params: RefCell<BtcCheckpointParams>,
    submissions: RefCell<BTreeMap<u64, (SubmissionKey, Vec<TransactionInfo>)>>,
    staking_events: RefCell<BTreeMap<String, BtcStakingIbcPacket>>,
    finality_providers: RefCell<BTreeMap<Vec<u8>, String>>,
    slashed: RefCell<Vec<Vec<u8>>>,
    propagated_sks: RefCell<Vec<Vec<u8>>>,
    store_queries: RefCell<Vec<(Vec<u8>, u64)>>,
}

impl MockApp {
    /// An app at epoch 1, with epochs of `epoch_interval` blocks
    pub fn new<R: RngCore>(rng: &mut R, epoch_interval: u64) -> Self {
        Self {
            btc: MockBtcLightClient::default(),
            channels: MockChannels::default(),
            epoch_interval,
            consumers: Default::default(),
            frozen_clients: Default::default(),
            current_epoch: RefCell::new(gen_random_epoch(rng, 1, epoch_interval)),
            epochs: Default::default(),
            validator_sets: Default::default(),
            raw_checkpoints: Default::default(),
            last_finalized_epoch: Cell::new(0),
            btc_checkpoint_params: RefCell::new(BtcCheckpointParams {
                btc_confirmation_depth: 1,
                checkpoint_finalization_timeout: DEFAULT_FINALIZATION_DEPTH,
                ..Default::default()
            }),
            submissions: Default::default(),
            staking_events: Default::default(),
            finality_providers: Default::default(),
            slashed: Default::default(),
            propagated_sks: Default::default(),
            store_queries: Default::default(),
        }
    }

    pub fn keeper(&self) -> Keeper<'_> {
        Keeper {
            registry: self,
            clients: self,
            btc_light_client: &self.btc,
            checkpointing: self,
            btc_checkpoint: self,
            epoching: self,
            btc_staking: self,
            channels: &self.channels,
            store_querier: self,
        }
    }

    /// Registers a Cosmos consumer identified by its IBC client ID
    pub fn register_consumer(&self, consumer_id: &str) {
        let register = ConsumerRegister {
            consumer_id: consumer_id.to_string(),
            consumer_name: format!("{consumer_id} chain"),
            consumer_metadata: Some(ConsumerMetadata::CosmosConsumerMetadata(
                CosmosConsumerMetadata::default(),
            )),
            ..Default::default()
        };
        self.consumers
            .borrow_mut()
            .insert(consumer_id.to_string(), register);
    }

    pub fn freeze_client(&self, client_id: &str) {
        self.frozen_clients
            .borrow_mut()
            .insert(client_id.to_string());
    }

    pub fn set_finalization_depth(&self, depth: u32) {
        self.btc_checkpoint_params
            .borrow_mut()
            .checkpoint_finalization_timeout = depth;
    }

    /// Moves the app to `epoch`
    pub fn set_current_epoch<R: RngCore>(&self, rng: &mut R, epoch: u64) {
        *self.current_epoch.borrow_mut() = gen_random_epoch(rng, epoch, self.epoch_interval);
    }

    /// Makes `epoch` historical, with a validator set
    pub fn seal_epoch<R: RngCore>(&self, rng: &mut R, epoch: u64) {
        self.epochs
            .borrow_mut()
            .insert(epoch, gen_random_epoch(rng, epoch, self.epoch_interval));
        self.validator_sets
            .borrow_mut()
            .insert(epoch, gen_random_validator_set(rng, VALIDATOR_SET_SIZE));
    }

    pub fn clear_validator_set(&self, epoch: u64) {
        self.validator_sets.borrow_mut().insert(epoch, vec![]);
    }

    /// Seals `epoch` if needed, then gives it a raw checkpoint submitted to
    /// BTC and marks it as the last finalized epoch.
    pub fn finalize_epoch<R: RngCore>(&self, rng: &mut R, epoch: u64) {
        if !self.epochs.borrow().contains_key(&epoch) {
            self.seal_epoch(rng, epoch);
        }
        self.raw_checkpoints
            .borrow_mut()
            .insert(epoch, gen_random_raw_checkpoint(rng, epoch));
        self.submissions
            .borrow_mut()
            .insert(epoch, gen_random_submission(rng));
        self.last_finalized_epoch.set(epoch);
    }

    /// Drops all but the first transaction of the epoch's submission
    pub fn truncate_submission(&self, epoch: u64) {
        if let Some((_, txs)) = self.submissions.borrow_mut().get_mut(&epoch) {
            txs.truncate(1);
        }
    }

    pub fn queue_staking_events(&self, consumer_id: &str, events: BtcStakingIbcPacket) {
        self.staking_events
            .borrow_mut()
            .insert(consumer_id.to_string(), events);
    }

    /// Consumers with pending staking events
    pub fn staking_event_batches(&self) -> Vec<String> {
        self.staking_events.borrow().keys().cloned().collect()
    }

    pub fn register_finality_provider(&self, fp_btc_pk: &[u8], consumer_id: &str) {
        self.finality_providers
            .borrow_mut()
            .insert(fp_btc_pk.to_vec(), consumer_id.to_string());
    }

    pub fn slashed_finality_providers(&self) -> Vec<Vec<u8>> {
        self.slashed.borrow().clone()
    }

    pub fn propagated_secret_keys(&self) -> Vec<Vec<u8>> {
        self.propagated_sks.borrow().clone()
    }

    /// Every `(key, height)` proven against the module store
    pub fn store_queries(&self) -> Vec<(Vec<u8>, u64)> {
        self.store_queries.borrow().clone()
    }
}

impl ConsumerRegistry for MockApp {
    fn get_consumer_register(&self, consumer_id: &str) -> StdResult<ConsumerRegister> {
        self.consumers
            .borrow()
            .get(consumer_id)
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("consumer {consumer_id}")))
    }
}

impl ClientKeeper for MockApp {
    fn is_frozen(&self, client_id: &str) -> StdResult<bool> {
        Ok(self.frozen_clients.borrow().contains(client_id))
    }
}

impl CheckpointingKeeper for MockApp {
    fn get_raw_checkpoint(&self, epoch: u64) -> StdResult<RawCheckpoint> {
        self.raw_checkpoints
            .borrow()
            .get(&epoch)
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("raw checkpoint of epoch {epoch}")))
    }

    fn get_last_finalized_epoch(&self) -> StdResult<u64> {
        Ok(self.last_finalized_epoch.get())
    }

    fn get_bls_pub_key_set(&self, epoch: u64) -> StdResult<Vec<ValidatorWithBlsKey>> {
        self.validator_sets
            .borrow()
            .get(&epoch)
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("validator set of epoch {epoch}")))
    }

    fn prove_val_set(&self, epoch: &Epoch) -> StdResult<ProofOps> {
        let key = [b"valset/".as_slice(), &epoch.epoch_number.to_be_bytes()].concat();
        Ok(mock_proof(&key))
    }
}

impl BtcCheckpointKeeper for MockApp {
    fn get_params(&self) -> BtcCheckpointParams {
        self.btc_checkpoint_params.borrow().clone()
    }

    fn get_best_submission(&self, epoch: u64) -> StdResult<SubmissionKey> {
        self.submissions
            .borrow()
            .get(&epoch)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| StdError::not_found(format!("submission of epoch {epoch}")))
    }

    fn get_submission_data(&self, key: &SubmissionKey) -> StdResult<Vec<TransactionInfo>> {
        self.submissions
            .borrow()
            .values()
            .find(|(k, _)| k == key)
            .map(|(_, txs)| txs.clone())
            .ok_or_else(|| StdError::not_found("submission data"))
    }
}

impl EpochingKeeper for MockApp {
    fn get_epoch(&self) -> Epoch {
        self.current_epoch.borrow().clone()
    }

    fn get_historical_epoch(&self, epoch: u64) -> StdResult<Epoch> {
        self.epochs
            .borrow()
            .get(&epoch)
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("epoch {epoch}")))
    }

    fn prove_epoch_info(&self, epoch: &Epoch) -> StdResult<ProofOps> {
        let key = [b"epoch/".as_slice(), &epoch.epoch_number.to_be_bytes()].concat();
        Ok(mock_proof(&key))
    }
}

impl BtcStakingKeeper for MockApp {
    fn get_all_consumer_event_batches(&self) -> StdResult<BTreeMap<String, BtcStakingIbcPacket>> {
        Ok(self.staking_events.borrow().clone())
    }

    fn delete_consumer_event_batch(&self, consumer_id: &str) -> StdResult<()> {
        self.staking_events.borrow_mut().remove(consumer_id);
        Ok(())
    }

    fn get_finality_provider_consumer(&self, fp_btc_pk: &[u8]) -> StdResult<String> {
        self.finality_providers
            .borrow()
            .get(fp_btc_pk)
            .cloned()
            .ok_or_else(|| {
                StdError::not_found(format!("finality provider {}", hex::encode(fp_btc_pk)))
            })
    }

    fn slash_finality_provider(&self, fp_btc_pk: &[u8]) -> StdResult<()> {
        self.slashed.borrow_mut().push(fp_btc_pk.to_vec());
        Ok(())
    }

    fn propagate_fp_slashing_to_consumers(&self, fp_btc_sk: &[u8]) -> StdResult<()> {
        self.propagated_sks.borrow_mut().push(fp_btc_sk.to_vec());
        Ok(())
    }
}

impl StoreQuerier for MockApp {
    fn query_store(&self, _store_key: &str, key: &[u8], height: u64) -> StdResult<ProofOps> {
        self.store_queries.borrow_mut().push((key.to_vec(), height));
        Ok(mock_proof(key))
    }
}
