use crate::expected_keepers::{
    BtcCheckpointKeeper, BtcLightClientKeeper, BtcStakingKeeper, ChannelKeeper,
    CheckpointingKeeper, ClientKeeper, ConsumerRegistry, EpochingKeeper, StoreQuerier,
};

/// Name of the module's store, used when querying proofs against it
pub const STORE_KEY: &str = "zoneconcierge";
/// IBC port ZoneConcierge binds to
pub const PORT_ID: &str = "zoneconcierge";

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// ZoneConcierge wired to the modules it depends on.
///
/// State is not held here; every operation receives the block's
/// [`Context`](crate::Context).
#[derive(Clone, Copy)]
pub struct Keeper<'a> {
    pub registry: &'a dyn ConsumerRegistry,
    pub clients: &'a dyn ClientKeeper,
    pub btc_light_client: &'a dyn BtcLightClientKeeper,
    pub checkpointing: &'a dyn CheckpointingKeeper,
    pub btc_checkpoint: &'a dyn BtcCheckpointKeeper,
    pub epoching: &'a dyn EpochingKeeper,
    pub btc_staking: &'a dyn BtcStakingKeeper,
    pub channels: &'a dyn ChannelKeeper,
    pub store_querier: &'a dyn StoreQuerier,
}
