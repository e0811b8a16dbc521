//! Slashing of finality providers that double-signed on a consumer.
//!
//! Two EOTS signatures under the same public randomness on different messages
//! leak the signer's secret key: `x = (s1 - s2) / (e1 - e2)`.

use babylon_proto::babylon::finality::v1::Evidence;
use eots::PublicKey;
use log::info;
use sha2::{Digest, Sha256};

use crate::error::ZoneConciergeError;
use crate::Keeper;

/// Hash of a finality vote: `sha256(signing_context || height || app_hash)`
pub fn vote_hash(signing_context: &str, block_height: u64, app_hash: &[u8]) -> [u8; 32] {
    Sha256::new()
        .chain_update(signing_context.as_bytes())
        .chain_update(block_height.to_be_bytes())
        .chain_update(app_hash)
        .finalize()
        .into()
}

/// Extracts the BTC secret key of the finality provider that produced the
/// evidence. The key is returned as its 32-byte big-endian scalar.
pub fn extract_btc_sk(evidence: &Evidence) -> Result<Vec<u8>, eots::Error> {
    let pk = PublicKey::from_bytes(&evidence.fp_btc_pk)?;
    let sk = pk.extract_secret_key(
        &evidence.pub_rand,
        vote_hash(
            &evidence.signing_context,
            evidence.block_height,
            &evidence.canonical_app_hash,
        ),
        &evidence.canonical_finality_sig,
        vote_hash(
            &evidence.signing_context,
            evidence.block_height,
            &evidence.fork_app_hash,
        ),
        &evidence.fork_finality_sig,
    )?;
    Ok(sk.to_bytes())
}

impl<'a> Keeper<'a> {
    /// Slashes the finality provider that double-signed on `consumer_id` and
    /// propagates its secret key to the other consumers.
    pub fn handle_consumer_slashing(
        &self,
        consumer_id: &str,
        evidence: &Evidence,
    ) -> Result<(), ZoneConciergeError> {
        let fp_consumer_id = self
            .btc_staking
            .get_finality_provider_consumer(&evidence.fp_btc_pk)?;
        if fp_consumer_id != consumer_id {
            return Err(ZoneConciergeError::ConsumerMismatch {
                fp_btc_pk_hex: hex::encode(&evidence.fp_btc_pk),
                fp_consumer_id,
                consumer_id: consumer_id.to_string(),
            });
        }

        let sk = extract_btc_sk(evidence)?;
        self.btc_staking
            .slash_finality_provider(&evidence.fp_btc_pk)?;
        self.btc_staking.propagate_fp_slashing_to_consumers(&sk)?;
        info!(
            "slashed finality provider {} of {consumer_id} at height {}",
            hex::encode(&evidence.fp_btc_pk),
            evidence.block_height
        );
        Ok(())
    }
}
