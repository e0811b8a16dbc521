//! Selection and relaying of the BTC headers each consumer is missing.

use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use cosmwasm_std::{StdResult, Storage};
use log::{debug, info, warn};

use crate::broadcast::PacketCache;
use crate::error::ZoneConciergeError;
use crate::state::{get_bsn_btc_state, get_params, set_last_sent_segment};
use crate::{Context, Keeper};

impl<'a> Keeper<'a> {
    /// `w`, the depth at which a BTC header is considered final
    pub fn btc_finalization_depth(&self) -> u32 {
        self.btc_checkpoint.get_params().checkpoint_finalization_timeout
    }

    /// Whether the header is on the light client's main chain
    pub fn is_canonical(&self, header: &BtcHeaderInfo) -> StdResult<bool> {
        if self.btc_light_client.get_header_by_hash(&header.hash)?.is_none() {
            return Ok(false);
        }
        Ok(self
            .btc_light_client
            .get_header_by_height(header.height)?
            .is_some_and(|main| main.hash == header.hash))
    }

    /// The last `w + 1` main chain headers, extended down to the consumer's
    /// base header if the consumer reported one that is still canonical.
    pub fn deep_enough_window(
        &self,
        storage: &dyn Storage,
        consumer_id: &str,
    ) -> Result<Vec<BtcHeaderInfo>, ZoneConciergeError> {
        let window = self
            .btc_light_client
            .get_main_chain_up_to(self.btc_finalization_depth())?;

        if let Some(base) = get_bsn_btc_state(storage, consumer_id)?.base_header {
            let below_window = window
                .first()
                .is_some_and(|first| base.height + 1 < first.height);
            if below_window && self.is_canonical(&base)? {
                debug!(
                    "extending window of {consumer_id} down to base header {}",
                    base.height
                );
                return Ok(self.btc_light_client.get_main_chain_from(base.height + 1)?);
            }
        }
        Ok(window)
    }

    /// BTC headers the consumer is missing, ascending. Every returned header
    /// is on the main chain.
    pub fn headers_to_broadcast(
        &self,
        storage: &dyn Storage,
        consumer_id: &str,
    ) -> Result<Vec<BtcHeaderInfo>, ZoneConciergeError> {
        let state = get_bsn_btc_state(storage, consumer_id)?;
        let last_sent = state.last_sent_headers();
        if last_sent.is_empty() {
            return self.deep_enough_window(storage, consumer_id);
        }

        for header in last_sent.iter().rev() {
            if self.is_canonical(header)? {
                return Ok(self.btc_light_client.get_main_chain_from(header.height + 1)?);
            }
        }

        info!("last segment sent to {consumer_id} was reorged out, resending the window");
        self.deep_enough_window(storage, consumer_id)
    }

    /// Sends every consumer the headers it is missing, in packets of at most
    /// `max_headers_per_packet` headers.
    pub fn broadcast_btc_headers(&self, ctx: &mut Context) -> Result<(), ZoneConciergeError> {
        let open_channels = self.get_open_channels()?;
        if open_channels.is_empty() {
            return Ok(());
        }
        let chunk_size = get_params(ctx.storage)?.max_headers_per_packet.max(1) as usize;
        let mut cache = PacketCache::default();

        for (consumer_id, channels) in open_channels {
            let headers = match self.headers_to_broadcast(ctx.storage, &consumer_id) {
                Ok(headers) => headers,
                Err(e) => {
                    warn!("failed to select BTC headers for {consumer_id}: {e}");
                    continue;
                }
            };
            if headers.is_empty() {
                debug!("{consumer_id} is in sync with the BTC light client");
                continue;
            }

            let mut all_sent = true;
            for channel in &channels {
                for chunk in headers.chunks(chunk_size) {
                    let data = cache.btc_headers_packet(chunk);
                    if let Err(e) = self.send_outbound_packet(ctx, channel, data) {
                        warn!(
                            "failed to send BTC headers to {consumer_id} on {}: {e}",
                            channel.channel_id
                        );
                        all_sent = false;
                        break;
                    }
                }
            }

            if all_sent {
                set_last_sent_segment(ctx.storage, &consumer_id, &headers)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::set_bsn_base_header;
    use crate::testutil::MockApp;
    use babylon_test_utils::{gen_btc_base_header, gen_btc_header_chain};
    use cosmwasm_std::testing::MockStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CONSUMER: &str = "07-tendermint-0";

    fn heights(headers: &[BtcHeaderInfo]) -> Vec<u32> {
        headers.iter().map(|h| h.height).collect()
    }

    #[test]
    fn first_send_is_deep_enough_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let app = MockApp::new(&mut rng, 10);
        app.btc.extend_random(&mut rng, 50);
        app.set_finalization_depth(6);
        let storage = MockStorage::new();

        let headers = app.keeper().headers_to_broadcast(&storage, CONSUMER).unwrap();
        assert_eq!(heights(&headers), (44..=50).collect::<Vec<_>>());
    }

    #[test]
    fn base_header_extends_window() {
        let mut rng = StdRng::seed_from_u64(2);
        let app = MockApp::new(&mut rng, 10);
        app.btc.extend_random(&mut rng, 50);
        app.set_finalization_depth(6);
        let mut storage = MockStorage::new();

        let base = app.btc.header_at(30).unwrap();
        set_bsn_base_header(&mut storage, CONSUMER, &base).unwrap();
        let headers = app.keeper().headers_to_broadcast(&storage, CONSUMER).unwrap();
        assert_eq!(heights(&headers), (31..=50).collect::<Vec<_>>());

        // a base header off the main chain is ignored
        let stale = gen_btc_base_header(&mut rng, 20);
        set_bsn_base_header(&mut storage, CONSUMER, &stale).unwrap();
        let headers = app.keeper().headers_to_broadcast(&storage, CONSUMER).unwrap();
        assert_eq!(heights(&headers), (44..=50).collect::<Vec<_>>());
    }

    #[test]
    fn shallow_reorg_anchors_on_newest_canonical_header() {
        let mut rng = StdRng::seed_from_u64(3);
        let app = MockApp::new(&mut rng, 10);
        app.btc.extend_random(&mut rng, 50);
        app.set_finalization_depth(6);
        let mut storage = MockStorage::new();

        let sent = app.btc.main_chain()[40..50].to_vec();
        set_last_sent_segment(&mut storage, CONSUMER, &sent).unwrap();

        // 48..50 are replaced by a longer fork
        app.btc.rollback_to(47);
        let fork_parent = app.btc.header_at(47).unwrap();
        app.btc.extend(gen_btc_header_chain(&mut rng, &fork_parent, 5));

        let headers = app.keeper().headers_to_broadcast(&storage, CONSUMER).unwrap();
        assert_eq!(heights(&headers), (48..=52).collect::<Vec<_>>());
        for header in &headers {
            assert!(app.keeper().is_canonical(header).unwrap());
        }
    }

    #[test]
    fn up_to_date_consumer_gets_nothing() {
        let mut rng = StdRng::seed_from_u64(4);
        let app = MockApp::new(&mut rng, 10);
        app.btc.extend_random(&mut rng, 20);
        app.set_finalization_depth(6);
        let mut storage = MockStorage::new();

        let sent = app.btc.main_chain()[10..].to_vec();
        set_last_sent_segment(&mut storage, CONSUMER, &sent).unwrap();
        let headers = app.keeper().headers_to_broadcast(&storage, CONSUMER).unwrap();
        assert!(headers.is_empty());
    }
}
