// @generated
/// ConsumerRegister is the registration information of a consumer
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsumerRegister {
    /// consumer_id is the ID of the consumer
    /// - for Cosmos SDK chains, the consumer ID will be the IBC client ID
    /// - for rollup chains, the consumer ID will be the chain ID of the rollup
    ///   chain
    #[prost(string, tag="1")]
    pub consumer_id: ::prost::alloc::string::String,
    /// consumer_name is the name of the consumer
    #[prost(string, tag="2")]
    pub consumer_name: ::prost::alloc::string::String,
    /// consumer_description is a description for the consumer (can be empty)
    #[prost(string, tag="3")]
    pub consumer_description: ::prost::alloc::string::String,
    /// consumer_metadata is necessary metadata of the consumer, and the data
    /// depends on the type of integration
    #[prost(oneof="consumer_register::ConsumerMetadata", tags="4, 5")]
    pub consumer_metadata: ::core::option::Option<consumer_register::ConsumerMetadata>,
}
/// Nested message and enum types in `ConsumerRegister`.
pub mod consumer_register {
    /// consumer_metadata is necessary metadata of the consumer, and the data
    /// depends on the type of integration
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ConsumerMetadata {
        #[prost(message, tag="4")]
        CosmosConsumerMetadata(super::CosmosConsumerMetadata),
        #[prost(message, tag="5")]
        RollupConsumerMetadata(super::RollupConsumerMetadata),
    }
}
/// CosmosConsumerMetadata is the metadata for the Cosmos integration
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CosmosConsumerMetadata {
    /// channel_id defines the IBC channel ID for the consumer chain
    #[prost(string, tag="1")]
    pub channel_id: ::prost::alloc::string::String,
}
/// RollupConsumerMetadata is the metadata for the rollup integration
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RollupConsumerMetadata {
    /// finality_contract_address is the address of the finality contract for
    /// the rollup integration
    #[prost(string, tag="1")]
    pub finality_contract_address: ::prost::alloc::string::String,
}
// @@protoc_insertion_point(module)
