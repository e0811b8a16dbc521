//! Assembly and broadcast of the BTC timestamps of a finalized epoch.

use babylon_proto::babylon::btccheckpoint::v1::{SubmissionKey, TransactionInfo};
use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_proto::babylon::checkpointing::v1::RawCheckpoint;
use babylon_proto::babylon::epoching::v1::Epoch;
use babylon_proto::babylon::zoneconcierge::v1::{
    outbound_packet::Packet as OutboundPacketType, BtcHeaders, BtcTimestamp, ProofEpochSealed,
    ProofFinalizedHeader,
};
use cosmwasm_std::Storage;
use log::{debug, info, warn};

use crate::broadcast::encode_outbound_packet;
use crate::error::ZoneConciergeError;
use crate::state::{get_epoch_chain_info, get_sealed_epoch_proof, set_last_sent_segment, StoreError};
use crate::{Context, Keeper};

/// Number of BTC transactions a checkpoint is split into
pub const CHECKPOINT_TX_COUNT: usize = 2;

/// Epoch data shared by the timestamps sent to every consumer
#[derive(Clone, Debug, PartialEq)]
pub struct EpochMetadata {
    pub epoch_info: Epoch,
    pub raw_checkpoint: RawCheckpoint,
    pub btc_submission_key: SubmissionKey,
    pub proof_epoch_sealed: ProofEpochSealed,
    pub proof_epoch_submitted: Vec<TransactionInfo>,
}

impl<'a> Keeper<'a> {
    pub fn get_finalized_epoch_metadata(
        &self,
        storage: &dyn Storage,
        epoch: u64,
    ) -> Result<EpochMetadata, ZoneConciergeError> {
        let epoch_info = self.epoching.get_historical_epoch(epoch)?;
        let raw_checkpoint = self.checkpointing.get_raw_checkpoint(epoch)?;
        let btc_submission_key = self.btc_checkpoint.get_best_submission(epoch)?;
        let proof_epoch_submitted = self.btc_checkpoint.get_submission_data(&btc_submission_key)?;
        if proof_epoch_submitted.len() != CHECKPOINT_TX_COUNT {
            return Err(ZoneConciergeError::InvalidProofEpochSubmitted(format!(
                "expected {CHECKPOINT_TX_COUNT} transactions, got {}",
                proof_epoch_submitted.len()
            )));
        }
        let proof_epoch_sealed = get_sealed_epoch_proof(storage, epoch)?;

        Ok(EpochMetadata {
            epoch_info,
            raw_checkpoint,
            btc_submission_key,
            proof_epoch_sealed,
            proof_epoch_submitted,
        })
    }

    /// Builds the consumer's timestamp of `epoch`. The consumer header is
    /// only included when it was indexed in `epoch` and its proof is known.
    pub fn build_btc_timestamp(
        &self,
        storage: &dyn Storage,
        consumer_id: &str,
        epoch: u64,
        metadata: &EpochMetadata,
        btc_headers: Vec<BtcHeaderInfo>,
    ) -> Result<BtcTimestamp, ZoneConciergeError> {
        let (header, proof_consumer_header_in_epoch) =
            match get_epoch_chain_info(storage, epoch, consumer_id) {
                Ok(snapshot) => {
                    let header = snapshot.chain_info.and_then(|ci| ci.latest_header);
                    match (header, snapshot.proof_header_in_epoch) {
                        (Some(header), Some(proof)) if header.babylon_epoch == epoch => {
                            (Some(header), Some(proof))
                        }
                        _ => (None, None),
                    }
                }
                Err(StoreError::EpochChainInfoNotFound { .. }) => (None, None),
                Err(e) => return Err(e.into()),
            };

        Ok(BtcTimestamp {
            header,
            btc_headers: Some(BtcHeaders {
                headers: btc_headers,
            }),
            epoch_info: Some(metadata.epoch_info.clone()),
            raw_checkpoint: Some(metadata.raw_checkpoint.clone()),
            btc_submission_key: Some(metadata.btc_submission_key.clone()),
            proof: Some(ProofFinalizedHeader {
                proof_epoch_sealed: Some(metadata.proof_epoch_sealed.clone()),
                proof_epoch_submitted: metadata.proof_epoch_submitted.clone(),
                proof_consumer_header_in_epoch,
            }),
        })
    }

    /// Sends the timestamp of a finalized epoch to every consumer. Only a
    /// failure to gather the epoch's own data is returned; failures specific
    /// to one consumer are logged.
    pub fn broadcast_btc_timestamps(
        &self,
        ctx: &mut Context,
        epoch: u64,
    ) -> Result<(), ZoneConciergeError> {
        if epoch == 0 {
            return Ok(());
        }
        let open_channels = self.get_open_channels()?;
        if open_channels.is_empty() {
            debug!("no open channel, skipping BTC timestamps of epoch {epoch}");
            return Ok(());
        }

        let metadata = self
            .get_finalized_epoch_metadata(ctx.storage, epoch)
            .map_err(|e| ZoneConciergeError::ConsensusCritical(format!("epoch {epoch}: {e}")))?;

        for (consumer_id, channels) in open_channels {
            if let Err(e) = self.send_btc_timestamp(ctx, &consumer_id, &channels, epoch, &metadata) {
                warn!("failed to send BTC timestamp of epoch {epoch} to {consumer_id}: {e}");
            }
        }
        info!("broadcast BTC timestamps of epoch {epoch}");
        Ok(())
    }

    fn send_btc_timestamp(
        &self,
        ctx: &mut Context,
        consumer_id: &str,
        channels: &[ibc_proto::ibc::core::channel::v1::IdentifiedChannel],
        epoch: u64,
        metadata: &EpochMetadata,
    ) -> Result<(), ZoneConciergeError> {
        let delta = self.headers_to_broadcast(ctx.storage, consumer_id)?;
        let mut last_sent: Option<Vec<BtcHeaderInfo>> = None;
        let mut failure = None;

        for channel in channels {
            let headers = if self.is_channel_uninitialized(channel)? {
                let depth = self.btc_finalization_depth() + delta.len() as u32;
                self.btc_light_client.get_main_chain_up_to(depth)?
            } else {
                delta.clone()
            };

            let timestamp =
                self.build_btc_timestamp(ctx.storage, consumer_id, epoch, metadata, headers.clone())?;
            let data = encode_outbound_packet(OutboundPacketType::BtcTimestamp(timestamp));
            match self.send_outbound_packet(ctx, channel, data) {
                Ok(_) => last_sent = Some(headers),
                Err(e) => failure = Some(e),
            }
        }

        if let Some(headers) = last_sent {
            set_last_sent_segment(ctx.storage, consumer_id, &headers)?;
        }
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
