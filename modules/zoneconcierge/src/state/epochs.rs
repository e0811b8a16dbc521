//! Epoch-indexed stores: the latest header each consumer got timestamped in
//! the current epoch, the `(epoch, consumer)` chain info snapshots with their
//! inclusion proofs, and the proofs that epochs are sealed.

use babylon_proto::babylon::zoneconcierge::v1::{
    ChainInfoWithProof, FinalizedHeaderEntry, IndexedHeader, ProofEpochSealed,
    SealedEpochProofEntry,
};
use cosmwasm_std::Order::Ascending;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;
use prost::Message;

use super::StoreError;

pub const LATEST_EPOCH_HEADERS: Map<&str, Vec<u8>> = Map::new("zc_latest_epoch_headers");
pub const EPOCH_CHAIN_INFOS: Map<(u64, &str), Vec<u8>> = Map::new("zc_epoch_chain_infos");
pub const SEALED_EPOCH_PROOFS: Map<u64, Vec<u8>> = Map::new("zc_sealed_epoch_proofs");

// getter/setter for the latest header of a consumer in the current epoch
pub fn get_latest_epoch_header(
    storage: &dyn Storage,
    consumer_id: &str,
) -> Result<Option<IndexedHeader>, StoreError> {
    LATEST_EPOCH_HEADERS
        .may_load(storage, consumer_id)?
        .map(|bytes| IndexedHeader::decode(bytes.as_slice()).map_err(StoreError::Decode))
        .transpose()
}

pub fn set_latest_epoch_header(storage: &mut dyn Storage, header: &IndexedHeader) -> StdResult<()> {
    LATEST_EPOCH_HEADERS.save(storage, header.consumer_id.as_str(), &header.encode_to_vec())
}

pub fn all_latest_epoch_headers(storage: &dyn Storage) -> Result<Vec<IndexedHeader>, StoreError> {
    LATEST_EPOCH_HEADERS
        .range(storage, None, None, Ascending)
        .map(|item| {
            let (_, bytes) = item?;
            IndexedHeader::decode(bytes.as_slice()).map_err(StoreError::Decode)
        })
        .collect()
}

// getter/setter for the chain info snapshot of a consumer at an epoch
pub fn get_epoch_chain_info(
    storage: &dyn Storage,
    epoch: u64,
    consumer_id: &str,
) -> Result<ChainInfoWithProof, StoreError> {
    let bytes = EPOCH_CHAIN_INFOS
        .load(storage, (epoch, consumer_id))
        .map_err(|_| StoreError::EpochChainInfoNotFound {
            consumer_id: consumer_id.to_string(),
            epoch,
        })?;
    ChainInfoWithProof::decode(bytes.as_slice()).map_err(StoreError::Decode)
}

pub fn set_epoch_chain_info(
    storage: &mut dyn Storage,
    epoch: u64,
    consumer_id: &str,
    chain_info: &ChainInfoWithProof,
) -> StdResult<()> {
    EPOCH_CHAIN_INFOS.save(storage, (epoch, consumer_id), &chain_info.encode_to_vec())
}

/// Snapshots of all consumers at an epoch, ordered by consumer ID
pub fn get_epoch_chain_infos(
    storage: &dyn Storage,
    epoch: u64,
) -> Result<Vec<(String, ChainInfoWithProof)>, StoreError> {
    EPOCH_CHAIN_INFOS
        .prefix(epoch)
        .range(storage, None, None, Ascending)
        .map(|item| {
            let (consumer_id, bytes) = item?;
            Ok((consumer_id, ChainInfoWithProof::decode(bytes.as_slice())?))
        })
        .collect()
}

pub fn all_epoch_chain_infos(storage: &dyn Storage) -> Result<Vec<FinalizedHeaderEntry>, StoreError> {
    EPOCH_CHAIN_INFOS
        .range(storage, None, None, Ascending)
        .map(|item| {
            let ((epoch_number, consumer_id), bytes) = item?;
            Ok(FinalizedHeaderEntry {
                epoch_number,
                consumer_id,
                finalized_chain_info: Some(ChainInfoWithProof::decode(bytes.as_slice())?),
            })
        })
        .collect()
}

// getter/setter for the proof that an epoch is sealed
pub fn get_sealed_epoch_proof(
    storage: &dyn Storage,
    epoch: u64,
) -> Result<ProofEpochSealed, StoreError> {
    let bytes = SEALED_EPOCH_PROOFS
        .load(storage, epoch)
        .map_err(|_| StoreError::SealedEpochProofNotFound { epoch })?;
    ProofEpochSealed::decode(bytes.as_slice()).map_err(StoreError::Decode)
}

pub fn set_sealed_epoch_proof(
    storage: &mut dyn Storage,
    epoch: u64,
    proof: &ProofEpochSealed,
) -> StdResult<()> {
    SEALED_EPOCH_PROOFS.save(storage, epoch, &proof.encode_to_vec())
}

pub fn all_sealed_epoch_proofs(
    storage: &dyn Storage,
) -> Result<Vec<SealedEpochProofEntry>, StoreError> {
    SEALED_EPOCH_PROOFS
        .range(storage, None, None, Ascending)
        .map(|item| {
            let (epoch_number, bytes) = item?;
            Ok(SealedEpochProofEntry {
                epoch_number,
                proof: Some(ProofEpochSealed::decode(bytes.as_slice())?),
            })
        })
        .collect()
}
