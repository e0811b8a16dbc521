use babylon_proto::babylon::zoneconcierge::v1::{ChainInfo, Forks, IndexedHeader};
use cosmwasm_std::Order::Ascending;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;
use prost::Message;

use super::StoreError;

/// Latest chain info of every consumer that has sent at least one header
pub const CHAIN_INFOS: Map<&str, Vec<u8>> = Map::new("zc_chain_infos");

pub fn has_chain_info(storage: &dyn Storage, consumer_id: &str) -> bool {
    CHAIN_INFOS.has(storage, consumer_id)
}

pub fn get_chain_info(storage: &dyn Storage, consumer_id: &str) -> Result<ChainInfo, StoreError> {
    let chain_info_bytes =
        CHAIN_INFOS
            .load(storage, consumer_id)
            .map_err(|_| StoreError::ChainInfoNotFound {
                consumer_id: consumer_id.to_string(),
            })?;
    ChainInfo::decode(chain_info_bytes.as_slice()).map_err(StoreError::Decode)
}

pub fn set_chain_info(storage: &mut dyn Storage, chain_info: &ChainInfo) -> StdResult<()> {
    CHAIN_INFOS.save(
        storage,
        chain_info.consumer_id.as_str(),
        &chain_info.encode_to_vec(),
    )
}

/// IDs of all consumers with a chain info, in lexicographic order
pub fn get_all_consumer_ids(storage: &dyn Storage) -> StdResult<Vec<String>> {
    CHAIN_INFOS
        .keys(storage, None, None, Ascending)
        .collect()
}

pub fn all_chain_infos(storage: &dyn Storage) -> Result<Vec<ChainInfo>, StoreError> {
    CHAIN_INFOS
        .range(storage, None, None, Ascending)
        .map(|item| {
            let (_, chain_info_bytes) = item?;
            ChainInfo::decode(chain_info_bytes.as_slice()).map_err(StoreError::Decode)
        })
        .collect()
}

/// Accounts for a newly indexed canonical height. The chain info is created on
/// the consumer's first header.
pub fn update_latest_header(
    storage: &mut dyn Storage,
    header: &IndexedHeader,
) -> Result<ChainInfo, StoreError> {
    let mut chain_info = match get_chain_info(storage, &header.consumer_id) {
        Ok(chain_info) => chain_info,
        Err(StoreError::ChainInfoNotFound { .. }) => ChainInfo {
            consumer_id: header.consumer_id.clone(),
            ..Default::default()
        },
        Err(e) => return Err(e),
    };

    if chain_info
        .latest_height()
        .map_or(true, |latest| header.height >= latest)
    {
        chain_info.latest_header = Some(header.clone());
    }
    chain_info.timestamped_headers_count += 1;

    set_chain_info(storage, &chain_info)?;
    Ok(chain_info)
}

/// Applies a fork header to the consumer's latest forks. A higher fork
/// replaces the set, a fork at the same height joins it, a lower one is
/// ignored.
pub fn update_latest_forks(
    storage: &mut dyn Storage,
    header: &IndexedHeader,
) -> Result<ChainInfo, StoreError> {
    let mut chain_info = get_chain_info(storage, &header.consumer_id)?;
    let forks = chain_info.latest_forks.get_or_insert_with(Forks::default);

    match forks.headers.last().map(|h| h.height) {
        Some(fork_height) if header.height < fork_height => return Ok(chain_info),
        Some(fork_height) if header.height == fork_height => forks.headers.push(header.clone()),
        _ => forks.headers = vec![header.clone()],
    }

    set_chain_info(storage, &chain_info)?;
    Ok(chain_info)
}
