use babylon_proto::babylon::finality::v1::Evidence;
use eots::{SecRand, SecretKey};
use k256::Scalar;
use rand::{CryptoRng, Rng, RngCore};

/// A finality provider key pair used to produce EOTS signatures in tests
pub struct EotsKeyPair {
    pub sk: SecretKey,
}

impl EotsKeyPair {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let sk = SecretKey::from_bytes(&Scalar::generate_vartime(rng).to_bytes())
            .expect("random scalar is a valid secret key");
        Self { sk }
    }

    /// BIP-340 x-only public key
    pub fn pk_bytes(&self) -> [u8; 32] {
        self.sk
            .pubkey()
            .to_bytes()
            .try_into()
            .expect("x-only keys are 32 bytes")
    }
}

/// The message an EOTS finality vote signs: `signing_context || height || app_hash`
pub fn msg_to_sign_for_vote(context: &str, block_height: u64, app_hash: &[u8]) -> Vec<u8> {
    let mut msg = Vec::new();
    msg.extend_from_slice(context.as_bytes());
    msg.extend_from_slice(&block_height.to_be_bytes());
    msg.extend_from_slice(app_hash);
    msg
}

/// Generates double-sign evidence for `key` at `block_height`, i.e. two EOTS
/// signatures under the same public randomness on two different app hashes.
pub fn gen_random_evidence<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &EotsKeyPair,
    signing_context: &str,
    block_height: u64,
) -> Evidence {
    let sec_rand = SecRand::new(&Scalar::generate_vartime(rng).to_bytes())
        .expect("random scalar is valid randomness");

    let canonical_app_hash: [u8; 32] = rng.gen();
    let fork_app_hash: [u8; 32] = rng.gen();
    let sign = |app_hash: &[u8]| {
        key.sk
            .sign(
                &sec_rand.to_bytes(),
                &msg_to_sign_for_vote(signing_context, block_height, app_hash),
            )
            .expect("valid randomness")
            .to_bytes()
    };

    Evidence {
        fp_btc_pk: key.pk_bytes().to_vec().into(),
        block_height,
        pub_rand: sec_rand.pub_rand().to_bytes().into(),
        canonical_app_hash: canonical_app_hash.to_vec().into(),
        fork_app_hash: fork_app_hash.to_vec().into(),
        canonical_finality_sig: sign(&canonical_app_hash[..]).into(),
        fork_finality_sig: sign(&fork_app_hash[..]).into(),
        signing_context: signing_context.to_string(),
    }
}
