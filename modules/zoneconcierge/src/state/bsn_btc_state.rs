use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_proto::babylon::zoneconcierge::v1::{BsnBtcState, BsnBtcStateEntry, BtcChainSegment};
use cosmwasm_std::Order::Ascending;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;
use prost::Message;

use super::StoreError;

/// BTC synchronisation state of every consumer
pub const BSN_BTC_STATES: Map<&str, Vec<u8>> = Map::new("zc_bsn_btc_states");

/// Returns the consumer's BTC state, empty if nothing was recorded yet.
pub fn get_bsn_btc_state(storage: &dyn Storage, consumer_id: &str) -> Result<BsnBtcState, StoreError> {
    match BSN_BTC_STATES.may_load(storage, consumer_id)? {
        Some(bytes) => BsnBtcState::decode(bytes.as_slice()).map_err(StoreError::Decode),
        None => Ok(BsnBtcState::default()),
    }
}

pub fn set_bsn_btc_state(
    storage: &mut dyn Storage,
    consumer_id: &str,
    state: &BsnBtcState,
) -> StdResult<()> {
    BSN_BTC_STATES.save(storage, consumer_id, &state.encode_to_vec())
}

pub fn set_bsn_base_header(
    storage: &mut dyn Storage,
    consumer_id: &str,
    base_header: &BtcHeaderInfo,
) -> Result<(), StoreError> {
    let mut state = get_bsn_btc_state(storage, consumer_id)?;
    state.base_header = Some(base_header.clone());
    set_bsn_btc_state(storage, consumer_id, &state)?;
    Ok(())
}

/// Records the headers last sent to the consumer. An empty segment is not
/// recorded.
pub fn set_last_sent_segment(
    storage: &mut dyn Storage,
    consumer_id: &str,
    headers: &[BtcHeaderInfo],
) -> Result<(), StoreError> {
    if headers.is_empty() {
        return Ok(());
    }
    let mut state = get_bsn_btc_state(storage, consumer_id)?;
    state.last_sent_segment = Some(BtcChainSegment {
        btc_headers: headers.to_vec(),
    });
    set_bsn_btc_state(storage, consumer_id, &state)?;
    Ok(())
}

pub fn all_bsn_btc_states(storage: &dyn Storage) -> Result<Vec<BsnBtcStateEntry>, StoreError> {
    BSN_BTC_STATES
        .range(storage, None, None, Ascending)
        .map(|item| {
            let (consumer_id, bytes) = item?;
            Ok(BsnBtcStateEntry {
                consumer_id,
                state: Some(BsnBtcState::decode(bytes.as_slice())?),
            })
        })
        .collect()
}
