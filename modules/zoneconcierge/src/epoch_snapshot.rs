//! Per-epoch snapshots of consumer chain infos and the proofs attached to them
//! once the epoch is sealed.

use babylon_proto::babylon::zoneconcierge::v1::{ChainInfoWithProof, IndexedHeader, ProofEpochSealed};
use cosmwasm_std::Storage;
use log::debug;
use tendermint_proto::crypto::ProofOps;

use crate::error::ZoneConciergeError;
use crate::keeper::STORE_KEY;
use crate::state::{
    all_chain_infos, canonical_header_key, get_epoch_chain_infos, set_epoch_chain_info,
    set_sealed_epoch_proof,
};
use crate::Keeper;

/// Snapshots the chain info of every consumer at the end of `epoch`. Proofs
/// are attached later, when the epoch gets sealed.
pub fn record_epoch_chain_infos(
    storage: &mut dyn Storage,
    epoch: u64,
) -> Result<(), ZoneConciergeError> {
    for chain_info in all_chain_infos(storage)? {
        let consumer_id = chain_info.consumer_id.clone();
        let snapshot = ChainInfoWithProof {
            chain_info: Some(chain_info),
            proof_header_in_epoch: None,
        };
        set_epoch_chain_info(storage, epoch, &consumer_id, &snapshot)?;
    }
    Ok(())
}

impl<'a> Keeper<'a> {
    /// Proves that the header is committed to this module's store at the
    /// Babylon height it got indexed at.
    pub fn prove_consumer_header_in_epoch(
        &self,
        header: &IndexedHeader,
    ) -> Result<ProofOps, ZoneConciergeError> {
        let key = canonical_header_key(&header.consumer_id, header.height);
        let proof = self
            .store_querier
            .query_store(STORE_KEY, &key, header.babylon_header_height)?;
        Ok(proof)
    }

    /// Attaches an inclusion proof to every `epoch` snapshot whose latest
    /// header was indexed during `epoch`.
    pub fn record_epoch_header_proofs(
        &self,
        storage: &mut dyn Storage,
        epoch: u64,
    ) -> Result<(), ZoneConciergeError> {
        for (consumer_id, mut snapshot) in get_epoch_chain_infos(storage, epoch)? {
            let Some(header) = snapshot
                .chain_info
                .as_ref()
                .and_then(|ci| ci.latest_header.as_ref())
                .filter(|h| h.babylon_epoch == epoch)
            else {
                debug!("consumer {consumer_id} has no header in epoch {epoch}");
                continue;
            };
            let proof = self.prove_consumer_header_in_epoch(header)?;
            snapshot.proof_header_in_epoch = Some(proof);
            set_epoch_chain_info(storage, epoch, &consumer_id, &snapshot)?;
        }
        Ok(())
    }

    /// Proves that the epoch's metadata and validator set are committed to
    /// its sealer header.
    pub fn prove_epoch_sealed(&self, epoch: u64) -> Result<ProofEpochSealed, ZoneConciergeError> {
        let epoch_info = self.epoching.get_historical_epoch(epoch)?;
        let proof = ProofEpochSealed {
            validator_set: self.checkpointing.get_bls_pub_key_set(epoch)?,
            proof_epoch_info: Some(self.epoching.prove_epoch_info(&epoch_info)?),
            proof_epoch_val_set: Some(self.checkpointing.prove_val_set(&epoch_info)?),
        };
        proof
            .validate()
            .map_err(ZoneConciergeError::InvalidProofEpochSealed)?;
        Ok(proof)
    }

    pub fn record_sealed_epoch_proof(
        &self,
        storage: &mut dyn Storage,
        epoch: u64,
    ) -> Result<(), ZoneConciergeError> {
        let proof = self.prove_epoch_sealed(epoch)?;
        set_sealed_epoch_proof(storage, epoch, &proof)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::record_canonical_header;
    use crate::state::{get_chain_info, get_epoch_chain_info, get_sealed_epoch_proof};
    use crate::testutil::MockApp;
    use assert_matches::assert_matches;
    use babylon_test_utils::gen_random_indexed_header;
    use cosmwasm_std::testing::MockStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snapshot_equals_chain_info_at_epoch_end() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut storage = MockStorage::new();
        for (consumer, height) in [("07-tendermint-0", 5), ("07-tendermint-1", 9)] {
            let header = gen_random_indexed_header(&mut rng, consumer, height, 10, 1);
            record_canonical_header(&mut storage, &header).unwrap();
        }

        record_epoch_chain_infos(&mut storage, 1).unwrap();

        // later headers do not leak into the snapshot
        let later = gen_random_indexed_header(&mut rng, "07-tendermint-0", 6, 11, 2);
        record_canonical_header(&mut storage, &later).unwrap();

        let snapshots = get_epoch_chain_infos(&storage, 1).unwrap();
        assert_eq!(snapshots.len(), 2);
        let (consumer_id, snapshot) = &snapshots[0];
        assert_eq!(consumer_id, "07-tendermint-0");
        assert_eq!(snapshot.proof_header_in_epoch, None);
        let chain_info = snapshot.chain_info.as_ref().unwrap();
        assert_eq!(chain_info.latest_header.as_ref().unwrap().height, 5);
        assert_eq!(chain_info.timestamped_headers_count, 1);
        assert_eq!(
            get_chain_info(&storage, "07-tendermint-0")
                .unwrap()
                .timestamped_headers_count,
            2
        );
    }

    #[test]
    fn proof_only_for_headers_of_the_sealed_epoch() {
        let mut rng = StdRng::seed_from_u64(2);
        let app = MockApp::new(&mut rng, 10);
        let keeper = app.keeper();
        let mut storage = MockStorage::new();

        let active = gen_random_indexed_header(&mut rng, "07-tendermint-0", 42, 45, 5);
        let idle = gen_random_indexed_header(&mut rng, "07-tendermint-1", 7, 12, 2);
        record_canonical_header(&mut storage, &active).unwrap();
        record_canonical_header(&mut storage, &idle).unwrap();
        record_epoch_chain_infos(&mut storage, 5).unwrap();

        keeper.record_epoch_header_proofs(&mut storage, 5).unwrap();

        let proven = get_epoch_chain_info(&storage, 5, "07-tendermint-0").unwrap();
        let proof = proven.proof_header_in_epoch.unwrap();
        assert_eq!(proof.ops[0].key, canonical_header_key("07-tendermint-0", 42));
        assert_eq!(app.store_queries(), vec![(canonical_header_key("07-tendermint-0", 42), 45)]);

        let unproven = get_epoch_chain_info(&storage, 5, "07-tendermint-1").unwrap();
        assert_eq!(unproven.proof_header_in_epoch, None);
    }

    #[test]
    fn sealed_epoch_proof_is_stored() {
        let mut rng = StdRng::seed_from_u64(3);
        let app = MockApp::new(&mut rng, 10);
        app.seal_epoch(&mut rng, 3);
        let keeper = app.keeper();
        let mut storage = MockStorage::new();

        keeper.record_sealed_epoch_proof(&mut storage, 3).unwrap();
        let proof = get_sealed_epoch_proof(&storage, 3).unwrap();
        assert!(!proof.validator_set.is_empty());
        assert!(proof.proof_epoch_info.is_some());
        assert!(proof.proof_epoch_val_set.is_some());
    }

    #[test]
    fn sealed_epoch_proof_requires_validator_set() {
        let mut rng = StdRng::seed_from_u64(4);
        let app = MockApp::new(&mut rng, 10);
        app.seal_epoch(&mut rng, 3);
        app.clear_validator_set(3);
        let keeper = app.keeper();

        let err = keeper.prove_epoch_sealed(3).unwrap_err();
        assert_matches!(err, ZoneConciergeError::InvalidProofEpochSealed(_));
    }
}
