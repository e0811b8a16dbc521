use cosmwasm_std::{to_json_binary, QueryResponse, Storage};

use crate::error::ZoneConciergeError;
use crate::msg::{
    BsnBtcStateResponse, ChainInfoResponse, ChainInfosResponse, CheckpointResponse,
    ConsumerIdsResponse, EpochChainInfoResponse, EpochResponse, FinalizedChainInfoResponse,
    ForksResponse, HeaderResponse, IndexedHeaderResponse, ListHeadersResponse, ParamsResponse,
    QueryMsg, SealedEpochProofResponse,
};
use crate::state::{
    self, find_closest_header, get_all_consumer_ids, get_bsn_btc_state, get_chain_info,
    get_epoch_chain_info, get_forks, get_header, get_latest_epoch_header, get_sealed_epoch_proof,
    StoreError,
};
use crate::Keeper;

const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

pub fn params(storage: &dyn Storage) -> Result<ParamsResponse, StoreError> {
    Ok(ParamsResponse::from(&state::get_params(storage)?))
}

pub fn chain_info(storage: &dyn Storage, consumer_id: &str) -> Result<ChainInfoResponse, StoreError> {
    Ok(ChainInfoResponse::from(get_chain_info(storage, consumer_id)?))
}

pub fn chain_infos(
    storage: &dyn Storage,
    consumer_ids: &[String],
) -> Result<ChainInfosResponse, StoreError> {
    let chain_infos = consumer_ids
        .iter()
        .map(|consumer_id| chain_info(storage, consumer_id))
        .collect::<Result<_, _>>()?;
    Ok(ChainInfosResponse { chain_infos })
}

pub fn consumer_ids(storage: &dyn Storage) -> Result<ConsumerIdsResponse, StoreError> {
    Ok(ConsumerIdsResponse {
        consumer_ids: get_all_consumer_ids(storage)?,
    })
}

pub fn header(
    storage: &dyn Storage,
    consumer_id: &str,
    height: u64,
) -> Result<HeaderResponse, StoreError> {
    let header = get_header(storage, consumer_id, height)?;
    let forks = get_forks(storage, consumer_id, height)?;
    Ok(HeaderResponse {
        header: IndexedHeaderResponse::from(&header),
        fork_headers: ForksResponse::from(&forks),
    })
}

pub fn list_headers(
    storage: &dyn Storage,
    consumer_id: &str,
    start_after: Option<u64>,
    limit: Option<u32>,
    reverse: Option<bool>,
) -> Result<ListHeadersResponse, StoreError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let headers = state::list_headers(storage, consumer_id, start_after, Some(limit), reverse)?;
    Ok(ListHeadersResponse {
        headers: headers.iter().map(IndexedHeaderResponse::from).collect(),
    })
}

pub fn closest_header(
    storage: &dyn Storage,
    consumer_id: &str,
    height: u64,
) -> Result<IndexedHeaderResponse, StoreError> {
    let header = find_closest_header(storage, consumer_id, height)?;
    Ok(IndexedHeaderResponse::from(&header))
}

pub fn latest_epoch_header(
    storage: &dyn Storage,
    consumer_id: &str,
) -> Result<Option<IndexedHeaderResponse>, StoreError> {
    Ok(get_latest_epoch_header(storage, consumer_id)?.map(IndexedHeaderResponse::from))
}

pub fn epoch_chain_info(
    storage: &dyn Storage,
    epoch_number: u64,
    consumer_id: &str,
) -> Result<EpochChainInfoResponse, StoreError> {
    let snapshot = get_epoch_chain_info(storage, epoch_number, consumer_id)?;
    Ok(EpochChainInfoResponse::new(epoch_number, &snapshot))
}

/// Chain info of the consumer at the last epoch whose checkpoint is
/// finalized on BTC
pub fn finalized_chain_info(
    keeper: &Keeper,
    storage: &dyn Storage,
    consumer_id: &str,
) -> Result<FinalizedChainInfoResponse, ZoneConciergeError> {
    let epoch_number = keeper.checkpointing.get_last_finalized_epoch()?;
    let epoch = keeper.epoching.get_historical_epoch(epoch_number)?;
    let raw_checkpoint = keeper.checkpointing.get_raw_checkpoint(epoch_number)?;
    let finalized_chain_info = epoch_chain_info(storage, epoch_number, consumer_id)?;
    Ok(FinalizedChainInfoResponse {
        epoch_info: EpochResponse::from(&epoch),
        raw_checkpoint: CheckpointResponse::from(&raw_checkpoint),
        finalized_chain_info,
    })
}

pub fn bsn_btc_state(
    storage: &dyn Storage,
    consumer_id: &str,
) -> Result<BsnBtcStateResponse, StoreError> {
    Ok(BsnBtcStateResponse::from(&get_bsn_btc_state(storage, consumer_id)?))
}

pub fn sealed_epoch_proof(
    storage: &dyn Storage,
    epoch_number: u64,
) -> Result<SealedEpochProofResponse, StoreError> {
    let proof = get_sealed_epoch_proof(storage, epoch_number)?;
    Ok(SealedEpochProofResponse::new(epoch_number, &proof))
}

pub fn query(
    keeper: &Keeper,
    storage: &dyn Storage,
    msg: QueryMsg,
) -> Result<QueryResponse, ZoneConciergeError> {
    match msg {
        QueryMsg::Params {} => Ok(to_json_binary(&params(storage)?)?),
        QueryMsg::ChainInfo { consumer_id } => {
            Ok(to_json_binary(&chain_info(storage, &consumer_id)?)?)
        }
        QueryMsg::ChainInfos { consumer_ids } => {
            Ok(to_json_binary(&chain_infos(storage, &consumer_ids)?)?)
        }
        QueryMsg::ConsumerIds {} => Ok(to_json_binary(&consumer_ids(storage)?)?),
        QueryMsg::Header {
            consumer_id,
            height,
        } => Ok(to_json_binary(&header(storage, &consumer_id, height)?)?),
        QueryMsg::ListHeaders {
            consumer_id,
            start_after,
            limit,
            reverse,
        } => Ok(to_json_binary(&list_headers(
            storage,
            &consumer_id,
            start_after,
            limit,
            reverse,
        )?)?),
        QueryMsg::ClosestHeader {
            consumer_id,
            height,
        } => Ok(to_json_binary(&closest_header(
            storage,
            &consumer_id,
            height,
        )?)?),
        QueryMsg::LatestEpochHeader { consumer_id } => {
            Ok(to_json_binary(&latest_epoch_header(storage, &consumer_id)?)?)
        }
        QueryMsg::EpochChainInfo {
            epoch_number,
            consumer_id,
        } => Ok(to_json_binary(&epoch_chain_info(
            storage,
            epoch_number,
            &consumer_id,
        )?)?),
        QueryMsg::FinalizedChainInfo { consumer_id } => Ok(to_json_binary(
            &finalized_chain_info(keeper, storage, &consumer_id)?,
        )?),
        QueryMsg::BsnBtcState { consumer_id } => {
            Ok(to_json_binary(&bsn_btc_state(storage, &consumer_id)?)?)
        }
        QueryMsg::SealedEpochProof { epoch_number } => {
            Ok(to_json_binary(&sealed_epoch_proof(storage, epoch_number)?)?)
        }
    }
}
