use babylon_proto::babylon::zoneconcierge::v1::Params;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Item;
use prost::Message;

use super::StoreError;

pub const PARAMS: Item<Vec<u8>> = Item::new("zc_params");

pub fn get_params(storage: &dyn Storage) -> Result<Params, StoreError> {
    let params_bytes = PARAMS
        .may_load(storage)?
        .ok_or(StoreError::ParamsNotFound {})?;
    Params::decode(params_bytes.as_slice()).map_err(StoreError::Decode)
}

/// Stores the params. Callers validate them first.
pub fn set_params(storage: &mut dyn Storage, params: &Params) -> StdResult<()> {
    PARAMS.save(storage, &params.encode_to_vec())
}
