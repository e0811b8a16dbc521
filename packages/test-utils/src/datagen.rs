use babylon_proto::babylon::btccheckpoint::v1::{SubmissionKey, TransactionInfo, TransactionKey};
use babylon_proto::babylon::checkpointing::v1::{RawCheckpoint, ValidatorWithBlsKey};
use babylon_proto::babylon::epoching::v1::Epoch;
use babylon_proto::babylon::zoneconcierge::v1::IndexedHeader;
use rand::{Rng, RngCore};
use tendermint_proto::crypto::{ProofOp, ProofOps};

// Sizes of the random fields, matching what Babylon produces
pub const TMHASH_SIZE: usize = 32;
pub const BLS_PUB_KEY_LEN: usize = 96;
pub const BLS_SIG_LEN: usize = 48;
pub const BITMAP_LEN: usize = 13;

/// Generate random bytes of specified length using the provided RNG
pub fn gen_random_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

/// Generate a consumer header indexed at the given Babylon height and epoch
pub fn gen_random_indexed_header<R: RngCore>(
    rng: &mut R,
    consumer_id: &str,
    height: u64,
    babylon_header_height: u64,
    babylon_epoch: u64,
) -> IndexedHeader {
    IndexedHeader {
        consumer_id: consumer_id.to_string(),
        hash: gen_random_bytes(rng, TMHASH_SIZE).into(),
        height,
        time: Some(pbjson_types::Timestamp {
            seconds: 1_700_000_000 + height as i64 * 5,
            nanos: 0,
        }),
        babylon_header_hash: gen_random_bytes(rng, TMHASH_SIZE).into(),
        babylon_header_height,
        babylon_epoch,
        babylon_tx_hash: gen_random_bytes(rng, TMHASH_SIZE).into(),
    }
}

pub fn gen_random_epoch<R: RngCore>(rng: &mut R, epoch_number: u64, interval: u64) -> Epoch {
    Epoch {
        epoch_number,
        current_epoch_interval: interval,
        first_block_height: (epoch_number - 1) * interval + 1,
        last_block_time: Some(pbjson_types::Timestamp {
            seconds: 1_700_000_000 + epoch_number as i64 * 3600,
            nanos: 0,
        }),
        app_hash_root: gen_random_bytes(rng, TMHASH_SIZE).into(),
        sealer_app_hash: gen_random_bytes(rng, TMHASH_SIZE).into(),
        sealer_block_hash: gen_random_bytes(rng, TMHASH_SIZE).into(),
    }
}

pub fn gen_random_raw_checkpoint<R: RngCore>(rng: &mut R, epoch_num: u64) -> RawCheckpoint {
    RawCheckpoint {
        epoch_num,
        block_hash: gen_random_bytes(rng, TMHASH_SIZE).into(),
        bitmap: gen_random_bytes(rng, BITMAP_LEN).into(),
        bls_multi_sig: gen_random_bytes(rng, BLS_SIG_LEN).into(),
    }
}

pub fn gen_random_validator_set<R: RngCore>(rng: &mut R, n: usize) -> Vec<ValidatorWithBlsKey> {
    (0..n)
        .map(|i| ValidatorWithBlsKey {
            validator_address: format!("bbnvaloper1{}{i}", hex::encode(gen_random_bytes(rng, 8))),
            bls_pub_key: gen_random_bytes(rng, BLS_PUB_KEY_LEN).into(),
            voting_power: rng.gen_range(1..1000),
        })
        .collect()
}

/// A checkpoint submission made of two BTC transactions, with the matching
/// transaction infos
pub fn gen_random_submission<R: RngCore>(rng: &mut R) -> (SubmissionKey, Vec<TransactionInfo>) {
    let keys: Vec<TransactionKey> = (0..2)
        .map(|_| TransactionKey {
            index: rng.gen_range(0..100),
            hash: gen_random_bytes(rng, 32).into(),
        })
        .collect();
    let infos = keys
        .iter()
        .map(|key| TransactionInfo {
            key: Some(key.clone()),
            transaction: gen_random_bytes(rng, 120).into(),
            proof: gen_random_bytes(rng, 64).into(),
        })
        .collect();
    (SubmissionKey { key: keys }, infos)
}

/// A single-op Merkle proof over random data
pub fn gen_random_proof_ops<R: RngCore>(rng: &mut R, key: &[u8]) -> ProofOps {
    ProofOps {
        ops: vec![ProofOp {
            r#type: "ics23:iavl".to_string(),
            key: key.to_vec(),
            data: gen_random_bytes(rng, 64),
        }],
    }
}
