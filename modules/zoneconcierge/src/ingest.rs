//! Indexing of BSN headers carried by IBC light client updates.

use babylon_proto::babylon::zoneconcierge::v1::IndexedHeader;
use cosmos_sdk_proto::Any;
use cosmwasm_std::Storage;
use ibc_proto::ibc::core::client::v1::MsgUpdateClient;
use ibc_proto::ibc::lightclients::tendermint::v1::Header as TmHeader;
use log::{debug, warn};
use prost::Message;

use crate::error::ZoneConciergeError;
use crate::state::{
    get_latest_epoch_header, insert_fork_header, insert_header, set_latest_epoch_header,
    update_latest_forks, update_latest_header,
};
use crate::{Context, Keeper};

pub const MSG_UPDATE_CLIENT_TYPE_URL: &str = "/ibc.core.client.v1.MsgUpdateClient";
pub const TM_HEADER_TYPE_URL: &str = "/ibc.lightclients.tendermint.v1.Header";

/// A transaction executed in the current Babylon block
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tx {
    pub hash: Vec<u8>,
    pub msgs: Vec<Any>,
}

/// Fields of a BSN header relevant to timestamping
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderInfo {
    pub client_id: String,
    pub chain_id: String,
    pub app_hash: Vec<u8>,
    pub height: u64,
    pub time: Option<pbjson_types::Timestamp>,
}

/// Extracts the header of a Tendermint light client update. Returns `None` for
/// any other message.
pub fn extract_header_info(msg: &Any) -> Result<Option<HeaderInfo>, ZoneConciergeError> {
    if msg.type_url != MSG_UPDATE_CLIENT_TYPE_URL {
        return Ok(None);
    }
    let update = MsgUpdateClient::decode(msg.value.as_slice())?;
    let client_msg = match update.client_message {
        Some(client_msg) if client_msg.type_url == TM_HEADER_TYPE_URL => client_msg,
        _ => return Ok(None),
    };

    let tm_header = TmHeader::decode(client_msg.value.as_slice())?;
    let header = tm_header
        .signed_header
        .and_then(|sh| sh.header)
        .ok_or_else(|| ZoneConciergeError::InvalidHeader("missing signed header".to_string()))?;
    let height = u64::try_from(header.height)
        .map_err(|_| ZoneConciergeError::InvalidHeader(format!("negative height {}", header.height)))?;

    Ok(Some(HeaderInfo {
        client_id: update.client_id,
        chain_id: header.chain_id,
        app_hash: header.app_hash,
        height,
        time: header.time.map(|t| pbjson_types::Timestamp {
            seconds: t.seconds,
            nanos: t.nanos,
        }),
    }))
}

/// Indexes a header on the consumer's canonical chain.
pub fn record_canonical_header(
    storage: &mut dyn Storage,
    header: &IndexedHeader,
) -> Result<(), ZoneConciergeError> {
    if insert_header(storage, header)? {
        update_latest_header(storage, header)?;
    } else {
        debug!(
            "header of consumer {} at height {} is already indexed",
            header.consumer_id, header.height
        );
    }

    let replace = match get_latest_epoch_header(storage, &header.consumer_id)? {
        None => true,
        Some(slot) => slot.babylon_epoch < header.babylon_epoch || slot.height < header.height,
    };
    if replace {
        set_latest_epoch_header(storage, header)?;
    }
    Ok(())
}

/// Indexes a header accepted while the consumer's light client is frozen.
pub fn record_fork_header(
    storage: &mut dyn Storage,
    header: &IndexedHeader,
) -> Result<(), ZoneConciergeError> {
    update_latest_forks(storage, header)?;
    insert_fork_header(storage, header)?;
    Ok(())
}

impl<'a> Keeper<'a> {
    /// Post-handler of a Babylon transaction. Never fails: headers that cannot
    /// be indexed are logged and skipped.
    pub fn post_handle_tx(&self, ctx: &mut Context, tx: &Tx, success: bool) {
        if !success {
            return;
        }
        for msg in &tx.msgs {
            match extract_header_info(msg) {
                Ok(Some(info)) => {
                    if let Err(e) = self.handle_header(ctx, &tx.hash, &info) {
                        warn!(
                            "failed to index header of client {} at height {}: {e}",
                            info.client_id, info.height
                        );
                    }
                }
                Ok(None) => {}
                Err(e) => debug!("skipping malformed client update: {e}"),
            }
        }
    }

    pub fn handle_header(
        &self,
        ctx: &mut Context,
        tx_hash: &[u8],
        info: &HeaderInfo,
    ) -> Result<(), ZoneConciergeError> {
        if !self.registry.is_registered_cosmos_consumer(&info.client_id) {
            debug!("client {} is not a registered consumer, skipping", info.client_id);
            return Ok(());
        }
        let is_on_fork = self.clients.is_frozen(&info.client_id)?;

        let header = IndexedHeader {
            consumer_id: info.client_id.clone(),
            hash: info.app_hash.clone().into(),
            height: info.height,
            time: info.time.clone(),
            babylon_header_hash: ctx.block.hash.clone().into(),
            babylon_header_height: ctx.block.height,
            babylon_epoch: self.epoching.get_epoch().epoch_number,
            babylon_tx_hash: tx_hash.to_vec().into(),
        };
        header.validate().map_err(ZoneConciergeError::InvalidHeader)?;

        if is_on_fork {
            debug!(
                "indexing fork header of {} ({}) at height {}",
                info.client_id, info.chain_id, info.height
            );
            record_fork_header(ctx.storage, &header)
        } else {
            debug!(
                "indexing header of {} ({}) at height {}",
                info.client_id, info.chain_id, info.height
            );
            record_canonical_header(ctx.storage, &header)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{find_closest_header, get_chain_info, get_forks, get_header};
    use assert_matches::assert_matches;
    use babylon_test_utils::gen_random_indexed_header;
    use cosmwasm_std::testing::MockStorage;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const CONSUMER: &str = "07-tendermint-0";

    #[test]
    fn canonical_insert_counts_each_height_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut storage = MockStorage::new();

        let h1 = gen_random_indexed_header(&mut rng, CONSUMER, 10, 100, 1);
        let h2 = gen_random_indexed_header(&mut rng, CONSUMER, 11, 101, 1);
        record_canonical_header(&mut storage, &h1).unwrap();
        record_canonical_header(&mut storage, &h2).unwrap();
        // re-inserting the same header is a no-op
        record_canonical_header(&mut storage, &h2).unwrap();

        let chain_info = get_chain_info(&storage, CONSUMER).unwrap();
        assert_eq!(chain_info.timestamped_headers_count, 2);
        assert_eq!(chain_info.latest_header, Some(h2.clone()));
        assert_eq!(get_header(&storage, CONSUMER, 10).unwrap(), h1);
    }

    #[test]
    fn lower_header_does_not_replace_latest() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut storage = MockStorage::new();

        let high = gen_random_indexed_header(&mut rng, CONSUMER, 20, 100, 1);
        let low = gen_random_indexed_header(&mut rng, CONSUMER, 15, 101, 1);
        record_canonical_header(&mut storage, &high).unwrap();
        record_canonical_header(&mut storage, &low).unwrap();

        let chain_info = get_chain_info(&storage, CONSUMER).unwrap();
        assert_eq!(chain_info.timestamped_headers_count, 2);
        assert_eq!(chain_info.latest_header, Some(high));
    }

    #[test]
    fn closest_header_never_exceeds_query_height() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut storage = MockStorage::new();

        let mut heights: Vec<u64> = (0..30).map(|_| rng.gen_range(1..500)).collect();
        heights.sort_unstable();
        heights.dedup();
        for h in &heights {
            let header = gen_random_indexed_header(&mut rng, CONSUMER, *h, 100 + h, 1);
            record_canonical_header(&mut storage, &header).unwrap();
        }

        for query in 0..520u64 {
            match find_closest_header(&storage, CONSUMER, query) {
                Ok(found) => {
                    assert!(found.height <= query);
                    assert!(!heights.iter().any(|h| *h > found.height && *h <= query));
                }
                Err(e) => {
                    assert!(heights.iter().all(|h| *h > query));
                    assert_matches!(e, crate::state::StoreError::NoTimestampedHeaderBefore { .. });
                }
            }
        }
    }

    #[test]
    fn fork_set_follows_highest_fork() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut storage = MockStorage::new();

        let canonical = gen_random_indexed_header(&mut rng, CONSUMER, 100, 1000, 1);
        record_canonical_header(&mut storage, &canonical).unwrap();

        let fork_a = gen_random_indexed_header(&mut rng, CONSUMER, 100, 1001, 1);
        let fork_b = gen_random_indexed_header(&mut rng, CONSUMER, 100, 1002, 1);
        record_fork_header(&mut storage, &fork_a).unwrap();
        record_fork_header(&mut storage, &fork_b).unwrap();
        let forks = get_chain_info(&storage, CONSUMER).unwrap().latest_forks.unwrap();
        assert_eq!(forks.headers, vec![fork_a.clone(), fork_b.clone()]);

        let fork_c = gen_random_indexed_header(&mut rng, CONSUMER, 101, 1003, 1);
        record_fork_header(&mut storage, &fork_c).unwrap();
        let fork_d = gen_random_indexed_header(&mut rng, CONSUMER, 99, 1004, 1);
        record_fork_header(&mut storage, &fork_d).unwrap();
        let forks = get_chain_info(&storage, CONSUMER).unwrap().latest_forks.unwrap();
        assert_eq!(forks.headers, vec![fork_c]);

        // the per-height index keeps everything
        assert_eq!(get_forks(&storage, CONSUMER, 100).unwrap().headers.len(), 2);
        assert_eq!(get_forks(&storage, CONSUMER, 99).unwrap().headers, vec![fork_d]);
        // forks never touch the canonical count
        let chain_info = get_chain_info(&storage, CONSUMER).unwrap();
        assert_eq!(chain_info.timestamped_headers_count, 1);
    }

    #[test]
    fn fork_without_chain_info_is_rejected() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut storage = MockStorage::new();
        let fork = gen_random_indexed_header(&mut rng, CONSUMER, 5, 50, 1);
        let err = record_fork_header(&mut storage, &fork).unwrap_err();
        assert_matches!(
            err,
            ZoneConciergeError::Store(crate::state::StoreError::ChainInfoNotFound { .. })
        );
    }

    #[test]
    fn latest_epoch_header_resets_on_new_epoch() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut storage = MockStorage::new();

        let e1 = gen_random_indexed_header(&mut rng, CONSUMER, 30, 100, 1);
        record_canonical_header(&mut storage, &e1).unwrap();
        let e1_lower = gen_random_indexed_header(&mut rng, CONSUMER, 25, 101, 1);
        record_canonical_header(&mut storage, &e1_lower).unwrap();
        assert_eq!(get_latest_epoch_header(&storage, CONSUMER).unwrap(), Some(e1));

        let e2_lower = gen_random_indexed_header(&mut rng, CONSUMER, 26, 200, 2);
        record_canonical_header(&mut storage, &e2_lower).unwrap();
        assert_eq!(
            get_latest_epoch_header(&storage, CONSUMER).unwrap(),
            Some(e2_lower)
        );
    }

    #[test]
    fn extracts_tendermint_update() {
        use ibc_proto::google::protobuf::Any as IbcAny;
        use tendermint_proto::types::{Header, SignedHeader};

        let header = Header {
            chain_id: "bsn-1".to_string(),
            height: 42,
            time: Some(tendermint_proto::google::protobuf::Timestamp {
                seconds: 1_700_000_000,
                nanos: 5,
            }),
            app_hash: vec![9u8; 32],
            ..Default::default()
        };
        let tm_header = TmHeader {
            signed_header: Some(SignedHeader {
                header: Some(header),
                commit: None,
            }),
            ..Default::default()
        };
        let update = MsgUpdateClient {
            client_id: CONSUMER.to_string(),
            client_message: Some(IbcAny {
                type_url: TM_HEADER_TYPE_URL.to_string(),
                value: tm_header.encode_to_vec(),
            }),
            signer: "bbn1relayer".to_string(),
        };
        let msg = Any {
            type_url: MSG_UPDATE_CLIENT_TYPE_URL.to_string(),
            value: update.encode_to_vec(),
        };

        let info = extract_header_info(&msg).unwrap().unwrap();
        assert_eq!(info.client_id, CONSUMER);
        assert_eq!(info.chain_id, "bsn-1");
        assert_eq!(info.height, 42);
        assert_eq!(info.app_hash, vec![9u8; 32]);
        assert_eq!(info.time.unwrap().nanos, 5);

        let other = Any {
            type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
            value: vec![],
        };
        assert_eq!(extract_header_info(&other).unwrap(), None);
    }
}
