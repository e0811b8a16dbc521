//! Canonical index of BSN headers, keyed by `(consumer_id, height)`.
//!
//! Heights are stored big-endian by `cw-storage-plus`, so iterating over a
//! consumer's prefix walks its headers in height order.

use babylon_proto::babylon::zoneconcierge::v1::IndexedHeader;
use cosmwasm_std::Order::{Ascending, Descending};
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::{Bound, Map};
use prost::Message;

use super::{get_chain_info, StoreError};

pub const CANONICAL_HEADERS: Map<(&str, u64), Vec<u8>> = Map::new("zc_canonical_headers");

/// Raw store key of the canonical header `(consumer_id, height)`. This is the
/// key whose inclusion in the module store gets proven at epoch seal.
pub fn canonical_header_key(consumer_id: &str, height: u64) -> Vec<u8> {
    CANONICAL_HEADERS.key((consumer_id, height)).to_vec()
}

pub fn has_header(storage: &dyn Storage, consumer_id: &str, height: u64) -> bool {
    CANONICAL_HEADERS.has(storage, (consumer_id, height))
}

pub fn get_header(
    storage: &dyn Storage,
    consumer_id: &str,
    height: u64,
) -> Result<IndexedHeader, StoreError> {
    let header_bytes = CANONICAL_HEADERS
        .load(storage, (consumer_id, height))
        .map_err(|_| StoreError::HeaderNotFound {
            consumer_id: consumer_id.to_string(),
            height,
        })?;
    IndexedHeader::decode(header_bytes.as_slice()).map_err(StoreError::Decode)
}

/// Inserts a canonical header. Returns `false` and leaves the store untouched
/// if a header already exists at that height.
pub fn insert_header(storage: &mut dyn Storage, header: &IndexedHeader) -> StdResult<bool> {
    let key = (header.consumer_id.as_str(), header.height);
    if CANONICAL_HEADERS.has(storage, key) {
        return Ok(false);
    }
    CANONICAL_HEADERS.save(storage, key, &header.encode_to_vec())?;
    Ok(true)
}

/// Returns the highest canonical header at or below `height`.
pub fn find_closest_header(
    storage: &dyn Storage,
    consumer_id: &str,
    height: u64,
) -> Result<IndexedHeader, StoreError> {
    let not_found = || StoreError::NoTimestampedHeaderBefore {
        consumer_id: consumer_id.to_string(),
        height,
    };

    let chain_info = get_chain_info(storage, consumer_id).map_err(|_| not_found())?;
    if let Some(latest) = chain_info.latest_header {
        if latest.height <= height {
            return Ok(latest);
        }
    }

    let closest = CANONICAL_HEADERS
        .prefix(consumer_id)
        .range(storage, None, Some(Bound::inclusive(height)), Descending)
        .next()
        .ok_or_else(not_found)?;
    let (_, header_bytes) = closest?;
    IndexedHeader::decode(header_bytes.as_slice()).map_err(StoreError::Decode)
}

// Retrieves a consumer's canonical headers in a given range.
pub fn list_headers(
    storage: &dyn Storage,
    consumer_id: &str,
    start_after: Option<u64>,
    limit: Option<u32>,
    reverse: Option<bool>,
) -> Result<Vec<IndexedHeader>, StoreError> {
    let limit = limit.unwrap_or(10) as usize;
    let reverse = reverse.unwrap_or(false);

    let (start, end, order) = match (start_after, reverse) {
        (Some(start), true) => (None, Some(Bound::exclusive(start)), Descending),
        (Some(start), false) => (Some(Bound::exclusive(start)), None, Ascending),
        (None, true) => (None, None, Descending),
        (None, false) => (None, None, Ascending),
    };

    CANONICAL_HEADERS
        .prefix(consumer_id)
        .range(storage, start, end, order)
        .take(limit)
        .map(|item| {
            let (_, header_bytes) = item?;
            IndexedHeader::decode(header_bytes.as_slice()).map_err(StoreError::Decode)
        })
        .collect()
}

pub fn all_canonical_headers(storage: &dyn Storage) -> Result<Vec<IndexedHeader>, StoreError> {
    CANONICAL_HEADERS
        .range(storage, None, None, Ascending)
        .map(|item| {
            let (_, header_bytes) = item?;
            IndexedHeader::decode(header_bytes.as_slice()).map_err(StoreError::Decode)
        })
        .collect()
}
