use crate::error::Error;
use crate::Result;

use k256::elliptic_curve::{
    group::Group,
    ops::{MulByGenerator, Reduce},
    point::{AffineCoordinates, DecompressPoint},
    subtle::Choice,
    PrimeField,
};
use k256::{AffinePoint, FieldBytes, NonZeroScalar, ProjectivePoint, Scalar, U256};
use sha2::{Digest, Sha256};
use std::ops::Deref;

pub const CHALLENGE_TAG: &[u8] = b"BIP0340/challenge";

// Adapted from https://github.com/RustCrypto/elliptic-curves/blob/520f67d26be1773bd600d05796cc26d797dd7182/k256/src/schnorr.rs#L181-L187
pub fn tagged_hash(tag: &[u8]) -> Sha256 {
    let tag_hash = Sha256::digest(tag);
    let mut digest = Sha256::new();
    digest.update(tag_hash);
    digest.update(tag_hash);
    digest
}

/// Hash applied to every message before signing or verifying.
pub fn hash(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// BIP-340 challenge `e = tagged_hash("BIP0340/challenge", R.x || P.x || m) mod n`
fn challenge(r_bytes: &[u8], p_bytes: &[u8], hash: [u8; 32]) -> Scalar {
    <Scalar as Reduce<U256>>::reduce_bytes(
        &tagged_hash(CHALLENGE_TAG)
            .chain_update(r_bytes)
            .chain_update(p_bytes)
            .chain_update(hash)
            .finalize(),
    )
}

fn parse_scalar(bytes: &[u8]) -> Result<Option<Scalar>> {
    let array: [u8; 32] = bytes
        .try_into()
        .map_err(|_| Error::InvalidInputLength(bytes.len()))?;
    Ok(Scalar::from_repr_vartime(array.into()))
}

/// Splits a 32 (x-only), 33 (compressed) or 65 (uncompressed) byte point
/// encoding into its x-coordinate and y parity.
fn split_point_encoding(bytes: &[u8]) -> Result<(&[u8], bool)> {
    match bytes.len() {
        32 => Ok((bytes, false)),
        33 if bytes[0] == 0x02 || bytes[0] == 0x03 => Ok((&bytes[1..], bytes[0] == 0x03)),
        65 if bytes[0] == 0x04 => Ok((&bytes[1..33], bytes[64] & 0x01 == 0x01)),
        len => Err(Error::InvalidInputLength(len)),
    }
}

fn decompress(x_bytes: &[u8], y_is_odd: bool) -> Option<AffinePoint> {
    AffinePoint::decompress(
        FieldBytes::from_slice(x_bytes),
        Choice::from(y_is_odd as u8),
    )
    .into()
}

fn point_to_bytes(p: &ProjectivePoint) -> [u8; 32] {
    let mut x = [0u8; 32];
    x.copy_from_slice(&p.to_affine().x());
    x
}

fn is_y_odd(p: &ProjectivePoint) -> bool {
    p.to_affine().y_is_odd().into()
}

/// Secret randomness, normalized so that its public point has even y.
pub struct SecRand {
    inner: Scalar,
}

impl SecRand {
    pub fn new(r: &[u8]) -> Result<SecRand> {
        let scalar = parse_scalar(r)?
            .filter(|s| !bool::from(s.is_zero()))
            .ok_or(Error::SecretRandomnessParseFailed {})?;
        if is_y_odd(&ProjectivePoint::mul_by_generator(&scalar)) {
            Ok(Self { inner: -scalar })
        } else {
            Ok(Self { inner: scalar })
        }
    }

    /// The public randomness `R = r*G` committed to ahead of signing
    pub fn pub_rand(&self) -> PubRand {
        PubRand::from(ProjectivePoint::mul_by_generator(&self.inner))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes().to_vec()
    }
}

impl Deref for SecRand {
    type Target = Scalar;

    fn deref(&self) -> &Scalar {
        &self.inner
    }
}

/// Public randomness, a point on the secp256k1 curve.
pub struct PubRand {
    inner: ProjectivePoint,
}

impl PubRand {
    /// Parses an x-only, compressed or uncompressed point encoding. An
    /// x-only encoding is lifted to the point with even y.
    pub fn new(pr_bytes: &[u8]) -> Result<PubRand> {
        let (x_bytes, y_is_odd) = split_point_encoding(pr_bytes)?;
        decompress(x_bytes, y_is_odd)
            .map(|p| Self { inner: p.into() })
            .ok_or(Error::PublicRandomnessParseFailed {})
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        point_to_bytes(&self.inner).to_vec()
    }
}

impl Deref for PubRand {
    type Target = ProjectivePoint;

    fn deref(&self) -> &ProjectivePoint {
        &self.inner
    }
}

impl From<ProjectivePoint> for PubRand {
    fn from(p: ProjectivePoint) -> Self {
        Self { inner: p }
    }
}

/// An extractable one-time signature, i.e. `s` of a Schnorr signature `(R, s)`
pub struct Signature {
    inner: Scalar,
}

impl Signature {
    pub fn new(s: &[u8]) -> Result<Signature> {
        let inner = parse_scalar(s)?.ok_or(Error::SignatureParseFailed {})?;
        Ok(Self { inner })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes().to_vec()
    }
}

impl Deref for Signature {
    type Target = Scalar;

    fn deref(&self) -> &Scalar {
        &self.inner
    }
}

impl From<Scalar> for Signature {
    fn from(s: Scalar) -> Self {
        Self { inner: s }
    }
}

/// A secret key, formed as a non-zero 32-byte scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretKey {
    inner: k256::SecretKey,
}

impl From<NonZeroScalar> for SecretKey {
    fn from(x: NonZeroScalar) -> Self {
        Self {
            inner: k256::SecretKey::from(x),
        }
    }
}

impl SecretKey {
    pub fn from_bytes(x: &[u8]) -> Result<Self> {
        let scalar = parse_scalar(x)?.ok_or(Error::SecretKeyParseFailed {})?;
        Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar))
            .map(SecretKey::from)
            .ok_or(Error::SecretKeyParseFailed {})
    }

    pub fn pubkey(&self) -> PublicKey {
        PublicKey {
            inner: self.inner.public_key(),
        }
    }

    /// Signs `sha256(message)` with the given secret randomness.
    pub fn sign(&self, private_rand: &[u8], message: &[u8]) -> Result<Signature> {
        self.sign_hash(private_rand, hash(message))
    }

    /// Signs an already hashed message. The caller must ensure `hash` is the
    /// output of a cryptographically secure hash function.
    pub fn sign_hash(&self, private_rand: &[u8], hash: [u8; 32]) -> Result<Signature> {
        let d = *self.inner.to_nonzero_scalar();
        let p = ProjectivePoint::mul_by_generator(&d);
        // BIP-340 signs for the even-y lift of P
        let d = if is_y_odd(&p) { -d } else { d };
        let k = SecRand::new(private_rand)?;
        let e = challenge(&k.pub_rand().to_bytes(), &point_to_bytes(&p), hash);
        Ok(Signature::from(*k + e * d))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes().to_vec()
    }
}

/// A public key, formed as a point on the secp256k1 curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: k256::PublicKey,
}

impl PublicKey {
    /// Parses an x-only, compressed or uncompressed point encoding. An
    /// x-only encoding is lifted to the point with even y.
    pub fn from_bytes(p_bytes: &[u8]) -> Result<Self> {
        let (x_bytes, y_is_odd) = split_point_encoding(p_bytes)?;
        let point = decompress(x_bytes, y_is_odd).ok_or(Error::PublicKeyParseFailed {})?;
        let inner = k256::PublicKey::from_affine(point)
            .map_err(|e| Error::EllipticCurveError(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// BIP-340 x-only encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        point_to_bytes(&self.inner.to_projective()).to_vec()
    }

    pub fn is_y_odd(&self) -> bool {
        is_y_odd(&self.inner.to_projective())
    }

    fn even_y_point(&self) -> ProjectivePoint {
        let p = self.inner.to_projective();
        if is_y_odd(&p) {
            -p
        } else {
            p
        }
    }

    pub fn verify(&self, r_bytes: &[u8], message: &[u8], sig: &[u8]) -> Result<bool> {
        self.verify_hash(r_bytes, hash(message), sig)
    }

    /// Checks `s*G - e*P == R` with `R.y` even.
    pub fn verify_hash(&self, r_bytes: &[u8], hash: [u8; 32], sig: &[u8]) -> Result<bool> {
        let r = PubRand::new(r_bytes)?;
        let s = Signature::new(sig)?;
        let e = challenge(&r.to_bytes(), &self.to_bytes(), hash);

        let recovered_r = ProjectivePoint::mul_by_generator(&*s) - self.even_y_point() * e;
        if recovered_r.is_identity().into() || is_y_odd(&recovered_r) {
            return Ok(false);
        }
        Ok(recovered_r == *r)
    }

    /// Extracts the secret key from two signatures under the same public
    /// randomness on different messages: `x = (s1 - s2) / (e1 - e2)`.
    pub fn extract_secret_key(
        &self,
        r_bytes: &[u8],
        hash1: [u8; 32],
        sig1: &[u8],
        hash2: [u8; 32],
        sig2: &[u8],
    ) -> Result<SecretKey> {
        let r_point_bytes = PubRand::new(r_bytes)?.to_bytes();
        let p_bytes = self.to_bytes();

        let s1 = Signature::new(sig1)?;
        let s2 = Signature::new(sig2)?;
        if *s1 == *s2 {
            return Err(Error::IdenticalSignatures {});
        }

        let e1 = challenge(&r_point_bytes, &p_bytes, hash1);
        let e2 = challenge(&r_point_bytes, &p_bytes, hash2);
        let denom_inv =
            Option::<Scalar>::from((e1 - e2).invert()).ok_or(Error::IdenticalMessages {})?;

        let mut x = (*s1 - *s2) * denom_inv;
        if self.is_y_odd() {
            x = -x;
        }

        let extracted = Option::<NonZeroScalar>::from(NonZeroScalar::new(x))
            .map(SecretKey::from)
            .ok_or(Error::SecretKeyMismatch {})?;
        if extracted.pubkey().to_bytes() != p_bytes {
            return Err(Error::SecretKeyMismatch {});
        }
        Ok(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn random_sk(rng: &mut StdRng) -> SecretKey {
        SecretKey::from_bytes(&Scalar::generate_vartime(rng).to_bytes()).unwrap()
    }

    fn random_sec_rand(rng: &mut StdRng) -> SecRand {
        SecRand::new(&Scalar::generate_vartime(rng).to_bytes()).unwrap()
    }

    #[test]
    fn sign_verify() {
        let sk = SecretKey::from_bytes(&[0x12; 32]).unwrap();
        let sec_rand = SecRand::new(&[0xab; 32]).unwrap();
        let pub_rand = sec_rand.pub_rand();

        let sig = sk.sign(&sec_rand.to_bytes(), b"test message").unwrap();
        let pk = sk.pubkey();
        assert!(pk
            .verify(&pub_rand.to_bytes(), b"test message", &sig.to_bytes())
            .unwrap());
        assert!(!pk
            .verify(&pub_rand.to_bytes(), b"other message", &sig.to_bytes())
            .unwrap());
    }

    #[test]
    fn extract() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..8 {
            let sk = random_sk(&mut rng);
            let sec_rand = random_sec_rand(&mut rng);
            let sig1 = sk.sign(&sec_rand.to_bytes(), b"message1").unwrap();
            let sig2 = sk.sign(&sec_rand.to_bytes(), b"message2").unwrap();

            // x-only key, as finality providers publish it
            let pk = PublicKey::from_bytes(&sk.pubkey().to_bytes()).unwrap();
            let extracted = pk
                .extract_secret_key(
                    &sec_rand.pub_rand().to_bytes(),
                    hash(b"message1"),
                    &sig1.to_bytes(),
                    hash(b"message2"),
                    &sig2.to_bytes(),
                )
                .unwrap();
            assert_eq!(extracted.pubkey().to_bytes(), sk.pubkey().to_bytes());
        }
    }

    #[test]
    fn extract_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(8);
        let sk = random_sk(&mut rng);
        let pk = sk.pubkey();
        let sec_rand = random_sec_rand(&mut rng);
        let r = sec_rand.pub_rand().to_bytes();
        let sig1 = sk.sign(&sec_rand.to_bytes(), b"message1").unwrap().to_bytes();
        let sig2 = sk.sign(&sec_rand.to_bytes(), b"message2").unwrap().to_bytes();

        assert_eq!(
            pk.extract_secret_key(&r, hash(b"message1"), &sig1, hash(b"message1"), &sig1),
            Err(Error::IdenticalSignatures {})
        );
        assert_eq!(
            pk.extract_secret_key(&r, hash(b"message1"), &sig1, hash(b"message1"), &sig2),
            Err(Error::IdenticalMessages {})
        );

        let other = random_sk(&mut rng).pubkey();
        assert_eq!(
            other.extract_secret_key(&r, hash(b"message1"), &sig1, hash(b"message2"), &sig2),
            Err(Error::SecretKeyMismatch {})
        );
        assert_eq!(
            pk.extract_secret_key(&r[..31], hash(b"message1"), &sig1, hash(b"message2"), &sig2),
            Err(Error::InvalidInputLength(31))
        );
    }

    #[test]
    fn point_encodings_parse_to_same_key() {
        let mut rng = StdRng::seed_from_u64(9);
        let pk = random_sk(&mut rng).pubkey();
        let x_only = pk.to_bytes();
        let mut compressed = vec![if pk.is_y_odd() { 0x03 } else { 0x02 }];
        compressed.extend_from_slice(&x_only);

        assert_eq!(PublicKey::from_bytes(&compressed).unwrap(), pk);
        assert!(!PublicKey::from_bytes(&x_only).unwrap().is_y_odd());
        assert_eq!(
            PublicKey::from_bytes(&[0x05; 33]),
            Err(Error::InvalidInputLength(33))
        );
    }
}
