//! Block-scoped flags deciding whether BTC headers get broadcast at end block.
//!
//! They live in the context's transient store, which is dropped together with
//! the block context, so nothing carries over to the next block.

use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Item;

pub const HEADER_INSERTED: Item<bool> = Item::new("zc_trigger_header_inserted");
pub const REORG_OCCURRED: Item<bool> = Item::new("zc_trigger_reorg_occurred");
pub const NEW_CONSUMER_CHANNEL: Item<bool> = Item::new("zc_trigger_new_consumer_channel");

pub fn set_header_inserted(transient: &mut dyn Storage) -> StdResult<()> {
    HEADER_INSERTED.save(transient, &true)
}

pub fn set_reorg_occurred(transient: &mut dyn Storage) -> StdResult<()> {
    REORG_OCCURRED.save(transient, &true)
}

pub fn set_new_consumer_channel(transient: &mut dyn Storage) -> StdResult<()> {
    NEW_CONSUMER_CHANNEL.save(transient, &true)
}

fn is_set(transient: &dyn Storage, flag: &Item<bool>) -> StdResult<bool> {
    Ok(flag.may_load(transient)?.unwrap_or(false))
}

pub fn should_broadcast_btc_headers(transient: &dyn Storage) -> StdResult<bool> {
    Ok(is_set(transient, &HEADER_INSERTED)?
        || is_set(transient, &REORG_OCCURRED)?
        || is_set(transient, &NEW_CONSUMER_CHANNEL)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::MemoryStorage;

    #[test]
    fn no_flag_means_no_broadcast() {
        let transient = MemoryStorage::new();
        assert!(!should_broadcast_btc_headers(&transient).unwrap());
    }

    #[test]
    fn any_flag_triggers_broadcast() {
        type Setter = fn(&mut dyn Storage) -> StdResult<()>;
        let setters: [Setter; 3] = [
            set_header_inserted,
            set_reorg_occurred,
            set_new_consumer_channel,
        ];
        for set in setters {
            let mut transient = MemoryStorage::new();
            set(&mut transient).unwrap();
            // setting twice in the same block is harmless
            set(&mut transient).unwrap();
            assert!(should_broadcast_btc_headers(&transient).unwrap());
        }
    }
}
