// @generated
/// IndexedHeader is the metadata of a BSN header
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexedHeader {
    /// consumer_id is the unique ID of the consumer
    #[prost(string, tag="1")]
    pub consumer_id: ::prost::alloc::string::String,
    /// hash is the hash of this header
    #[prost(bytes="bytes", tag="2")]
    pub hash: ::prost::bytes::Bytes,
    /// height is the height of this header on the BSN's ledger.
    /// (hash, height) jointly provide the position of the header on the BSN ledger
    #[prost(uint64, tag="3")]
    pub height: u64,
    /// time is the timestamp of this header on the BSN's ledger.
    /// It is needed for a BSN to unbond all mature validators/delegations before
    /// this timestamp, when this header is BTC-finalised
    #[prost(message, optional, tag="4")]
    pub time: ::core::option::Option<::pbjson_types::Timestamp>,
    /// babylon_header_hash is the hash of the babylon block that includes this BSN
    /// header
    #[prost(bytes="bytes", tag="5")]
    pub babylon_header_hash: ::prost::bytes::Bytes,
    /// babylon_header_height is the height of the babylon block that includes this
    /// BSN header
    #[prost(uint64, tag="6")]
    pub babylon_header_height: u64,
    /// epoch is the epoch number of this header on Babylon ledger
    #[prost(uint64, tag="7")]
    pub babylon_epoch: u64,
    /// babylon_tx_hash is the hash of the tx that includes this header
    /// (babylon_block_height, babylon_tx_hash) jointly provides the position of
    /// the header on Babylon ledger
    #[prost(bytes="bytes", tag="8")]
    pub babylon_tx_hash: ::prost::bytes::Bytes,
}
/// ProofEpochSealed is the proof that an epoch is sealed by the sealer header,
/// i.e., the 2nd header of the next epoch With the access of metadata
/// - Metadata of this epoch, which includes the sealer header
/// - Raw checkpoint of this epoch
/// The verifier can perform the following verification rules:
/// - The raw checkpoint's `app_hash` is same as in the sealer header
/// - More than 2/3 (in voting power) validators in the validator set of this
/// epoch have signed `app_hash` of the sealer header
/// - The epoch metadata is committed to the `app_hash` of the sealer header
/// - The validator set is committed to the `app_hash` of the sealer header
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProofEpochSealed {
    /// validator_set is the validator set of the sealed epoch
    /// This validator set has generated a BLS multisig on `app_hash` of
    /// the sealer header
    #[prost(message, repeated, tag="1")]
    pub validator_set: ::prost::alloc::vec::Vec<super::super::checkpointing::v1::ValidatorWithBlsKey>,
    /// proof_epoch_info is the Merkle proof that the epoch's metadata is committed
    /// to `app_hash` of the sealer header
    #[prost(message, optional, tag="2")]
    pub proof_epoch_info: ::core::option::Option<tendermint_proto::crypto::ProofOps>,
    /// proof_epoch_info is the Merkle proof that the epoch's validator set is
    /// committed to `app_hash` of the sealer header
    #[prost(message, optional, tag="3")]
    pub proof_epoch_val_set: ::core::option::Option<tendermint_proto::crypto::ProofOps>,
}
/// ProofFinalizedHeader is a set of proofs that attest a header is
/// BTC-finalised
///
///
/// The following fields include proofs that attest the header is
/// BTC-finalised
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProofFinalizedHeader {
    /// proof_epoch_sealed is the proof that the epoch is sealed
    #[prost(message, optional, tag="1")]
    pub proof_epoch_sealed: ::core::option::Option<ProofEpochSealed>,
    /// proof_epoch_submitted is the proof that the epoch's checkpoint is included
    /// in BTC ledger It is the two TransactionInfo in the best (i.e., earliest)
    /// checkpoint submission
    #[prost(message, repeated, tag="2")]
    pub proof_epoch_submitted: ::prost::alloc::vec::Vec<super::super::btccheckpoint::v1::TransactionInfo>,
    /// proof_consumer_header_in_epoch is the proof that the consumer header is included in the epoch
    #[prost(message, optional, tag="3")]
    pub proof_consumer_header_in_epoch: ::core::option::Option<tendermint_proto::crypto::ProofOps>,
}
/// OutboundPacket represents packets sent from Babylon to other chains
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OutboundPacket {
    /// packet is the actual message carried in the IBC packet
    #[prost(oneof="outbound_packet::Packet", tags="1, 2, 3")]
    pub packet: ::core::option::Option<outbound_packet::Packet>,
}
/// Nested message and enum types in `OutboundPacket`.
pub mod outbound_packet {
    /// packet is the actual message carried in the IBC packet
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Packet {
        #[prost(message, tag="1")]
        BtcTimestamp(super::BtcTimestamp),
        #[prost(message, tag="2")]
        BtcStaking(super::super::super::btcstaking::v1::BtcStakingIbcPacket),
        #[prost(message, tag="3")]
        BtcHeaders(super::BtcHeaders),
    }
}
/// InboundPacket represents packets received by Babylon from other chains
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InboundPacket {
    /// packet is the actual message carried in the IBC packet
    #[prost(oneof="inbound_packet::Packet", tags="1, 2")]
    pub packet: ::core::option::Option<inbound_packet::Packet>,
}
/// Nested message and enum types in `InboundPacket`.
pub mod inbound_packet {
    /// packet is the actual message carried in the IBC packet
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Packet {
        #[prost(message, tag="1")]
        BsnSlashing(super::BsnSlashingIbcPacket),
        #[prost(message, tag="2")]
        BsnBaseBtcHeader(super::BsnBaseBtcHeaderIbcPacket),
    }
}
/// BTCHeaders contains BTC headers that have been verified and inserted into Babylon's BTC light client
/// These headers are forwarded to BSNs to keep their light clients in sync with Babylon
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BtcHeaders {
    #[prost(message, repeated, tag="1")]
    pub headers: ::prost::alloc::vec::Vec<super::super::btclightclient::v1::BtcHeaderInfo>,
}
/// BTCTimestamp is a BTC timestamp that carries information of a BTC-finalised epoch.
/// It includes a number of BTC headers, a raw checkpoint, an epoch metadata, and
/// a BSN header if there exists BSN headers checkpointed to this epoch.
/// Upon a newly finalised epoch in Babylon, Babylon will send a BTC timestamp to each
/// BSN via IBC.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BtcTimestamp {
    /// header is the last BSN header in the finalized Babylon epoch
    #[prost(message, optional, tag="1")]
    pub header: ::core::option::Option<IndexedHeader>,
    //
    // Data for BTC light client

    /// btc_headers is BTC headers between
    /// - the block AFTER the common ancestor of BTC tip at epoch `lastFinalizedEpoch-1` and BTC tip at epoch `lastFinalizedEpoch`
    /// - BTC tip at epoch `lastFinalizedEpoch`
    /// where `lastFinalizedEpoch` is the last finalised epoch in Babylon
    #[prost(message, optional, tag="2")]
    pub btc_headers: ::core::option::Option<BtcHeaders>,
    //
    // Data for Babylon epoch chain

    /// epoch_info is the metadata of the sealed epoch
    #[prost(message, optional, tag="3")]
    pub epoch_info: ::core::option::Option<super::super::epoching::v1::Epoch>,
    /// raw_checkpoint is the raw checkpoint that seals this epoch
    #[prost(message, optional, tag="4")]
    pub raw_checkpoint: ::core::option::Option<super::super::checkpointing::v1::RawCheckpoint>,
    /// btc_submission_key is position of two BTC txs that include the raw checkpoint of this epoch
    #[prost(message, optional, tag="5")]
    pub btc_submission_key: ::core::option::Option<super::super::btccheckpoint::v1::SubmissionKey>,
    ///
    /// Proofs that the header is finalized
    #[prost(message, optional, tag="6")]
    pub proof: ::core::option::Option<ProofFinalizedHeader>,
}
/// BSNSlashingIBCPacket defines the slashing information that a BSN sends to Babylon's ZoneConcierge upon a
/// BSN slashing event.
/// It includes the FP public key, the BSN block height at the slashing event, and the double sign evidence.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BsnSlashingIbcPacket {
    /// / evidence is the FP slashing evidence that the BSN sends to Babylon
    #[prost(message, optional, tag="1")]
    pub evidence: ::core::option::Option<super::super::finality::v1::Evidence>,
}
/// BSNBaseBTCHeaderIBCPacket defines the base BTC header information that a BSN sends to Babylon's ZoneConcierge
/// to inform Babylon about which BTC header the BSN considers as its starting point for BTC light client synchronization
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BsnBaseBtcHeaderIbcPacket {
    /// base_btc_header is the BTC header that the BSN uses as the base for its BTC light client
    #[prost(message, optional, tag="1")]
    pub base_btc_header: ::core::option::Option<super::super::btclightclient::v1::BtcHeaderInfo>,
}
/// Forks is a list of non-canonical `IndexedHeader`s at the same height.
/// For example, assuming the following blockchain
/// ```
/// A <- B <- C <- D <- E
///            \ -- D1
///            \ -- D2
/// ```
/// Then the fork will be {[D1, D2]} where each item is in struct `IndexedBlock`.
///
/// Note that each `IndexedHeader` in the fork should have a valid quorum
/// certificate. Such forks exist since Babylon considers CZs might have
/// dishonest majority. Also note that the IBC-Go implementation will only
/// consider the first header in a fork valid, since the subsequent headers
/// cannot be verified without knowing the validator set in the previous header.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Forks {
    /// blocks is the list of non-canonical indexed headers at the same height
    #[prost(message, repeated, tag="3")]
    pub headers: ::prost::alloc::vec::Vec<IndexedHeader>,
}
/// ChainInfo is the information of a BSN
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChainInfo {
    /// consumer_id is the ID of the consumer
    #[prost(string, tag="1")]
    pub consumer_id: ::prost::alloc::string::String,
    /// latest_header is the latest header in BSN's canonical chain
    #[prost(message, optional, tag="2")]
    pub latest_header: ::core::option::Option<IndexedHeader>,
    /// latest_forks is the latest forks, formed as a series of IndexedHeader (from
    /// low to high)
    #[prost(message, optional, tag="3")]
    pub latest_forks: ::core::option::Option<Forks>,
    /// timestamped_headers_count is the number of timestamped headers in the BSN's
    /// canonical chain
    #[prost(uint64, tag="4")]
    pub timestamped_headers_count: u64,
}
/// ChainInfoWithProof is the chain info with a proof that the latest header in
/// the chain info is included in the epoch
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChainInfoWithProof {
    #[prost(message, optional, tag="1")]
    pub chain_info: ::core::option::Option<ChainInfo>,
    /// proof_header_in_epoch is an inclusion proof that the latest_header in
    /// chain_info is committed to `app_hash` of the sealer header of latest_header.epoch
    /// this field is optional
    #[prost(message, optional, tag="2")]
    pub proof_header_in_epoch: ::core::option::Option<tendermint_proto::crypto::ProofOps>,
}
/// BTCChainSegment is a segment of the Bitcoin canonical chain
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BtcChainSegment {
    #[prost(message, repeated, tag="1")]
    pub btc_headers: ::prost::alloc::vec::Vec<super::super::btclightclient::v1::BtcHeaderInfo>,
}
/// BSNBTCState stores per-BSN BTC synchronization state
/// This includes both the base header and the last sent segment
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BsnBtcState {
    /// base_header is the base BTC header for this BSN
    /// This represents the starting point from which BTC headers are synchronized
    #[prost(message, optional, tag="1")]
    pub base_header: ::core::option::Option<super::super::btclightclient::v1::BtcHeaderInfo>,
    /// last_sent_segment is the last segment of BTC headers sent to this BSN
    /// This is used to determine the next headers to send and handle reorgs
    #[prost(message, optional, tag="2")]
    pub last_sent_segment: ::core::option::Option<BtcChainSegment>,
}
/// Params defines the parameters for the module.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Params {
    /// ibc_packet_timeout_seconds is the time period after which an unrelayed
    /// IBC packet becomes timeout, measured in seconds
    #[prost(uint32, tag="1")]
    pub ibc_packet_timeout_seconds: u32,
    /// max_headers_per_packet is the maximum number of BTC headers carried by a
    /// single BTCHeaders packet
    #[prost(uint32, tag="2")]
    pub max_headers_per_packet: u32,
}
/// GenesisState defines the zoneconcierge module's genesis state.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenesisState {
    #[prost(string, tag="1")]
    pub port_id: ::prost::alloc::string::String,
    /// params holds all the parameters of this module.
    #[prost(message, optional, tag="2")]
    pub params: ::core::option::Option<Params>,
    /// finalized_headers contains the finalized headers with proofs per
    /// (epoch, consumer)
    #[prost(message, repeated, tag="3")]
    pub finalized_headers: ::prost::alloc::vec::Vec<FinalizedHeaderEntry>,
    /// sealed_epochs_proofs contains the proofs of sealed epochs
    #[prost(message, repeated, tag="4")]
    pub sealed_epochs_proofs: ::prost::alloc::vec::Vec<SealedEpochProofEntry>,
    /// bsn_btc_states contains the BTC synchronization states of the BSNs
    #[prost(message, repeated, tag="5")]
    pub bsn_btc_states: ::prost::alloc::vec::Vec<BsnBtcStateEntry>,
    /// chain_infos contains the latest chain info of every BSN
    #[prost(message, repeated, tag="6")]
    pub chain_infos: ::prost::alloc::vec::Vec<ChainInfo>,
    /// canonical_headers contains every indexed canonical header
    #[prost(message, repeated, tag="7")]
    pub canonical_headers: ::prost::alloc::vec::Vec<IndexedHeader>,
    /// fork_headers contains every indexed fork set
    #[prost(message, repeated, tag="8")]
    pub fork_headers: ::prost::alloc::vec::Vec<ForksEntry>,
    /// latest_epoch_headers contains the latest header of every BSN in the
    /// current epoch
    #[prost(message, repeated, tag="9")]
    pub latest_epoch_headers: ::prost::alloc::vec::Vec<IndexedHeader>,
}
/// FinalizedHeaderEntry is the finalized header of a BSN at a given epoch
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FinalizedHeaderEntry {
    #[prost(uint64, tag="1")]
    pub epoch_number: u64,
    #[prost(string, tag="2")]
    pub consumer_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag="3")]
    pub finalized_chain_info: ::core::option::Option<ChainInfoWithProof>,
}
/// SealedEpochProofEntry is the proof that an epoch is sealed
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SealedEpochProofEntry {
    #[prost(uint64, tag="1")]
    pub epoch_number: u64,
    #[prost(message, optional, tag="2")]
    pub proof: ::core::option::Option<ProofEpochSealed>,
}
/// BSNBTCStateEntry is the BTC synchronization state of a BSN
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BsnBtcStateEntry {
    #[prost(string, tag="1")]
    pub consumer_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag="2")]
    pub state: ::core::option::Option<BsnBtcState>,
}
/// ForksEntry is the set of fork headers of a BSN at a given height
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ForksEntry {
    #[prost(string, tag="1")]
    pub consumer_id: ::prost::alloc::string::String,
    #[prost(uint64, tag="2")]
    pub height: u64,
    #[prost(message, optional, tag="3")]
    pub forks: ::core::option::Option<Forks>,
}
// @@protoc_insertion_point(module)
