//! Import and export of the module state.

use std::collections::BTreeSet;

use babylon_proto::babylon::zoneconcierge::v1::{GenesisState, Params};
use cosmwasm_std::Storage;

use crate::error::ZoneConciergeError;
use crate::keeper::{CONTRACT_NAME, CONTRACT_VERSION, PORT_ID};
use crate::state::{
    all_bsn_btc_states, all_canonical_headers, all_chain_infos, all_epoch_chain_infos, all_forks,
    all_latest_epoch_headers, all_sealed_epoch_proofs, get_params, insert_header,
    set_bsn_btc_state, set_chain_info, set_epoch_chain_info, set_forks, set_latest_epoch_header,
    set_params, set_sealed_epoch_proof,
};

pub fn default_genesis() -> GenesisState {
    GenesisState {
        port_id: PORT_ID.to_string(),
        params: Some(Params::default_params()),
        ..Default::default()
    }
}

fn invalid(msg: impl Into<String>) -> ZoneConciergeError {
    ZoneConciergeError::InvalidGenesis(msg.into())
}

/// Rejects a genesis with invalid params, malformed entries or duplicated keys.
pub fn validate_genesis(genesis: &GenesisState) -> Result<(), ZoneConciergeError> {
    if genesis.port_id != PORT_ID {
        return Err(invalid(format!(
            "port ID must be {PORT_ID}, got {:?}",
            genesis.port_id
        )));
    }
    genesis
        .params
        .as_ref()
        .ok_or_else(|| invalid("missing params"))?
        .validate()
        .map_err(ZoneConciergeError::InvalidParams)?;

    let mut seen = BTreeSet::new();
    for entry in &genesis.finalized_headers {
        if !seen.insert((entry.epoch_number, entry.consumer_id.as_str())) {
            return Err(invalid(format!(
                "duplicate finalized header of {} at epoch {}",
                entry.consumer_id, entry.epoch_number
            )));
        }
        let chain_info = entry
            .finalized_chain_info
            .as_ref()
            .and_then(|cip| cip.chain_info.as_ref())
            .ok_or_else(|| invalid(format!("empty finalized header of {}", entry.consumer_id)))?;
        if chain_info.consumer_id != entry.consumer_id {
            return Err(invalid(format!(
                "finalized header of {} holds chain info of {}",
                entry.consumer_id, chain_info.consumer_id
            )));
        }
        chain_info.validate().map_err(invalid)?;
    }

    let mut seen = BTreeSet::new();
    for entry in &genesis.sealed_epochs_proofs {
        if !seen.insert(entry.epoch_number) {
            return Err(invalid(format!(
                "duplicate sealed epoch proof of epoch {}",
                entry.epoch_number
            )));
        }
        entry
            .proof
            .as_ref()
            .ok_or_else(|| invalid(format!("empty sealed proof of epoch {}", entry.epoch_number)))?
            .validate()
            .map_err(invalid)?;
    }

    let mut seen = BTreeSet::new();
    for entry in &genesis.bsn_btc_states {
        if entry.consumer_id.is_empty() {
            return Err(invalid("BSN BTC state with empty consumer ID"));
        }
        if !seen.insert(entry.consumer_id.as_str()) {
            return Err(invalid(format!("duplicate BSN BTC state of {}", entry.consumer_id)));
        }
        let state = entry
            .state
            .as_ref()
            .ok_or_else(|| invalid(format!("empty BSN BTC state of {}", entry.consumer_id)))?;
        if matches!(&state.last_sent_segment, Some(segment) if segment.btc_headers.is_empty()) {
            return Err(invalid(format!(
                "empty last sent segment of {}",
                entry.consumer_id
            )));
        }
    }

    let mut seen = BTreeSet::new();
    for chain_info in &genesis.chain_infos {
        chain_info.validate().map_err(invalid)?;
        if !seen.insert(chain_info.consumer_id.as_str()) {
            return Err(invalid(format!("duplicate chain info of {}", chain_info.consumer_id)));
        }
    }

    let mut seen = BTreeSet::new();
    for header in &genesis.canonical_headers {
        header.validate().map_err(invalid)?;
        if !seen.insert((header.consumer_id.as_str(), header.height)) {
            return Err(invalid(format!(
                "duplicate canonical header of {} at height {}",
                header.consumer_id, header.height
            )));
        }
    }

    let mut seen = BTreeSet::new();
    for entry in &genesis.fork_headers {
        if !seen.insert((entry.consumer_id.as_str(), entry.height)) {
            return Err(invalid(format!(
                "duplicate forks of {} at height {}",
                entry.consumer_id, entry.height
            )));
        }
        let forks = entry
            .forks
            .as_ref()
            .ok_or_else(|| invalid(format!("empty forks of {}", entry.consumer_id)))?;
        for header in &forks.headers {
            header.validate().map_err(invalid)?;
            if header.consumer_id != entry.consumer_id || header.height != entry.height {
                return Err(invalid(format!(
                    "fork header of {} at height {} filed under {} at height {}",
                    header.consumer_id, header.height, entry.consumer_id, entry.height
                )));
            }
        }
    }

    let mut seen = BTreeSet::new();
    for header in &genesis.latest_epoch_headers {
        header.validate().map_err(invalid)?;
        if !seen.insert(header.consumer_id.as_str()) {
            return Err(invalid(format!(
                "duplicate latest epoch header of {}",
                header.consumer_id
            )));
        }
    }
    Ok(())
}

pub fn init_genesis(
    storage: &mut dyn Storage,
    genesis: &GenesisState,
) -> Result<(), ZoneConciergeError> {
    validate_genesis(genesis)?;
    cw2::set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if let Some(params) = &genesis.params {
        set_params(storage, params)?;
    }
    for entry in &genesis.finalized_headers {
        if let Some(chain_info) = &entry.finalized_chain_info {
            set_epoch_chain_info(storage, entry.epoch_number, &entry.consumer_id, chain_info)?;
        }
    }
    for entry in &genesis.sealed_epochs_proofs {
        if let Some(proof) = &entry.proof {
            set_sealed_epoch_proof(storage, entry.epoch_number, proof)?;
        }
    }
    for entry in &genesis.bsn_btc_states {
        if let Some(state) = &entry.state {
            set_bsn_btc_state(storage, &entry.consumer_id, state)?;
        }
    }
    for chain_info in &genesis.chain_infos {
        set_chain_info(storage, chain_info)?;
    }
    for header in &genesis.canonical_headers {
        insert_header(storage, header)?;
    }
    for entry in &genesis.fork_headers {
        if let Some(forks) = &entry.forks {
            set_forks(storage, &entry.consumer_id, entry.height, forks)?;
        }
    }
    for header in &genesis.latest_epoch_headers {
        set_latest_epoch_header(storage, header)?;
    }
    Ok(())
}

/// Exports the whole module state. Entries come out sorted by key.
pub fn export_genesis(storage: &dyn Storage) -> Result<GenesisState, ZoneConciergeError> {
    Ok(GenesisState {
        port_id: PORT_ID.to_string(),
        params: Some(get_params(storage)?),
        finalized_headers: all_epoch_chain_infos(storage)?,
        sealed_epochs_proofs: all_sealed_epoch_proofs(storage)?,
        bsn_btc_states: all_bsn_btc_states(storage)?,
        chain_infos: all_chain_infos(storage)?,
        canonical_headers: all_canonical_headers(storage)?,
        fork_headers: all_forks(storage)?,
        latest_epoch_headers: all_latest_epoch_headers(storage)?,
    })
}
