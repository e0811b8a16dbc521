use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Invalid input length {0}")]
    InvalidInputLength(usize),
    #[error("Failed to parse secret randomness")]
    SecretRandomnessParseFailed {},
    #[error("Failed to parse public randomness")]
    PublicRandomnessParseFailed {},
    #[error("Failed to parse signature")]
    SignatureParseFailed {},
    #[error("Failed to parse secret key")]
    SecretKeyParseFailed {},
    #[error("Failed to parse public key")]
    PublicKeyParseFailed {},
    #[error("The two signatures need to be different in order to extract")]
    IdenticalSignatures {},
    #[error("The two signed messages need to be different in order to extract")]
    IdenticalMessages {},
    #[error("Extracted secret key does not match the public key")]
    SecretKeyMismatch {},
    #[error("Elliptic curve error: {0}")]
    EllipticCurveError(String),
}
