use babylon_proto::babylon::zoneconcierge::v1::{Forks, ForksEntry, IndexedHeader};
use cosmwasm_std::Order::Ascending;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;
use prost::Message;

use super::StoreError;

/// Fork headers of every consumer, keyed by `(consumer_id, height)`
pub const FORKS: Map<(&str, u64), Vec<u8>> = Map::new("zc_forks");

/// Returns the fork headers at the given height, empty if there are none.
pub fn get_forks(storage: &dyn Storage, consumer_id: &str, height: u64) -> Result<Forks, StoreError> {
    match FORKS.may_load(storage, (consumer_id, height))? {
        Some(forks_bytes) => Forks::decode(forks_bytes.as_slice()).map_err(StoreError::Decode),
        None => Ok(Forks::default()),
    }
}

pub fn set_forks(
    storage: &mut dyn Storage,
    consumer_id: &str,
    height: u64,
    forks: &Forks,
) -> StdResult<()> {
    FORKS.save(storage, (consumer_id, height), &forks.encode_to_vec())
}

pub fn insert_fork_header(storage: &mut dyn Storage, header: &IndexedHeader) -> Result<(), StoreError> {
    let mut forks = get_forks(storage, &header.consumer_id, header.height)?;
    forks.headers.push(header.clone());
    set_forks(storage, &header.consumer_id, header.height, &forks)?;
    Ok(())
}

pub fn all_forks(storage: &dyn Storage) -> Result<Vec<ForksEntry>, StoreError> {
    FORKS
        .range(storage, None, None, Ascending)
        .map(|item| {
            let ((consumer_id, height), forks_bytes) = item?;
            Ok(ForksEntry {
                consumer_id,
                height,
                forks: Some(Forks::decode(forks_bytes.as_slice())?),
            })
        })
        .collect()
}
