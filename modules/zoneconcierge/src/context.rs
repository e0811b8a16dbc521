use cosmwasm_std::{MemoryStorage, Storage, Timestamp};

/// Metadata of the Babylon block being executed
#[derive(Clone, Debug, PartialEq)]
pub struct BlockHeader {
    pub height: u64,
    pub time: Timestamp,
    pub hash: Vec<u8>,
}

/// Execution context of a single Babylon block.
///
/// The transient store is created empty with the context and dropped with it,
/// so values written there are only visible until the end of the block.
pub struct Context<'a> {
    pub storage: &'a mut dyn Storage,
    pub transient: MemoryStorage,
    pub block: BlockHeader,
}

impl<'a> Context<'a> {
    pub fn new(storage: &'a mut dyn Storage, block: BlockHeader) -> Self {
        Self {
            storage,
            transient: MemoryStorage::new(),
            block,
        }
    }
}
