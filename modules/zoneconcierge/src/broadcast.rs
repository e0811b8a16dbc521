//! Outbound side of the ZoneConcierge channels: channel discovery, packet
//! encoding and sending.

use std::collections::BTreeMap;

use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_proto::babylon::zoneconcierge::v1::{
    outbound_packet::Packet as OutboundPacketType, BtcHeaders, OutboundPacket,
};
use cosmwasm_std::{Binary, IbcTimeout, StdResult, Storage, Timestamp};
use ibc_proto::ibc::core::channel::v1::{IdentifiedChannel, State};
use log::{debug, warn};
use prost::Message;
use sha2::{Digest, Sha256};

use crate::error::ZoneConciergeError;
use crate::keeper::PORT_ID;
use crate::state::get_params;
use crate::{Context, Keeper};

/// Open channels of every registered Cosmos consumer, keyed by consumer ID
pub type OpenChannels = BTreeMap<String, Vec<IdentifiedChannel>>;

pub fn encode_outbound_packet(packet: OutboundPacketType) -> Binary {
    Binary::new(
        OutboundPacket {
            packet: Some(packet),
        }
        .encode_to_vec(),
    )
}

/// Get IBC packet timeout based on the module params
pub fn get_ibc_packet_timeout(
    storage: &dyn Storage,
    block_time: Timestamp,
) -> Result<IbcTimeout, ZoneConciergeError> {
    let params = get_params(storage)?;
    let timeout = block_time.plus_seconds(u64::from(params.ibc_packet_timeout_seconds));
    Ok(IbcTimeout::with_timestamp(timeout))
}

/// Encoded `BtcHeaders` packets of one broadcast phase.
///
/// Consumers at the same sync point receive the same headers, so the payload
/// is encoded once and keyed by the hash of its header hashes.
#[derive(Default)]
pub struct PacketCache {
    packets: BTreeMap<[u8; 32], Binary>,
}

impl PacketCache {
    pub fn cache_key(headers: &[BtcHeaderInfo]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for header in headers {
            hasher.update(&header.hash);
        }
        hasher.finalize().into()
    }

    pub fn btc_headers_packet(&mut self, headers: &[BtcHeaderInfo]) -> Binary {
        self.packets
            .entry(Self::cache_key(headers))
            .or_insert_with(|| {
                encode_outbound_packet(OutboundPacketType::BtcHeaders(BtcHeaders {
                    headers: headers.to_vec(),
                }))
            })
            .clone()
    }
}

impl<'a> Keeper<'a> {
    /// Open channels on the ZoneConcierge port whose counterparty client is a
    /// registered Cosmos consumer, grouped by consumer.
    pub fn get_open_channels(&self) -> StdResult<OpenChannels> {
        let mut open = OpenChannels::new();
        for channel in self.channels.get_all_channels(PORT_ID)? {
            if channel.state != State::Open as i32 {
                continue;
            }
            let client_id = match self
                .channels
                .get_channel_client_id(&channel.port_id, &channel.channel_id)
            {
                Ok(client_id) => client_id,
                Err(e) => {
                    warn!("no client behind channel {}: {e}", channel.channel_id);
                    continue;
                }
            };
            if !self.registry.is_registered_cosmos_consumer(&client_id) {
                debug!(
                    "channel {} belongs to unregistered client {client_id}",
                    channel.channel_id
                );
                continue;
            }
            open.entry(client_id).or_default().push(channel);
        }
        Ok(open)
    }

    /// A channel nothing was sent on yet
    pub fn is_channel_uninitialized(&self, channel: &IdentifiedChannel) -> StdResult<bool> {
        let next_sequence = self
            .channels
            .get_next_sequence_send(&channel.port_id, &channel.channel_id)?;
        Ok(next_sequence == 1)
    }

    /// Sends an encoded packet over the channel, returning its sequence.
    pub fn send_outbound_packet(
        &self,
        ctx: &Context,
        channel: &IdentifiedChannel,
        data: Binary,
    ) -> Result<u64, ZoneConciergeError> {
        let max = self.channels.max_packet_size();
        if data.len() > max {
            return Err(ZoneConciergeError::OversizePacket {
                size: data.len(),
                max,
            });
        }
        if self
            .channels
            .get_channel(&channel.port_id, &channel.channel_id)?
            .is_none()
        {
            return Err(ZoneConciergeError::ChannelNotFound {
                port_id: channel.port_id.clone(),
                channel_id: channel.channel_id.clone(),
            });
        }

        let timeout = get_ibc_packet_timeout(ctx.storage, ctx.block.time)?;
        let sequence =
            self.channels
                .send_packet(&channel.port_id, &channel.channel_id, data, timeout)?;
        debug!(
            "sent packet {sequence} on channel {}/{}",
            channel.port_id, channel.channel_id
        );
        Ok(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{mock_block, MockApp};
    use assert_matches::assert_matches;
    use babylon_test_utils::{gen_btc_base_header, gen_btc_header_chain};
    use cosmwasm_std::testing::MockStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn cache_reuses_identical_payloads() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = gen_btc_base_header(&mut rng, 100);
        let chain = gen_btc_header_chain(&mut rng, &base, 5);

        let mut cache = PacketCache::default();
        let first = cache.btc_headers_packet(&chain);
        let second = cache.btc_headers_packet(&chain);
        assert_eq!(first, second);
        assert_eq!(cache.packets.len(), 1);

        cache.btc_headers_packet(&chain[1..]);
        assert_eq!(cache.packets.len(), 2);

        let decoded = OutboundPacket::decode(first.as_slice()).unwrap();
        assert_matches!(
            decoded.packet,
            Some(OutboundPacketType::BtcHeaders(BtcHeaders { headers })) if headers == chain
        );
    }

    #[test]
    fn open_channels_skip_closed_and_unregistered() {
        let mut rng = StdRng::seed_from_u64(2);
        let app = MockApp::new(&mut rng, 10);
        app.register_consumer("07-tendermint-0");
        app.channels.open_channel("channel-0", "07-tendermint-0");
        app.channels.open_channel("channel-1", "07-tendermint-0");
        app.channels.open_channel("channel-2", "07-tendermint-9");
        app.channels.add_channel("channel-3", "07-tendermint-0", State::Closed);

        let open = app.keeper().get_open_channels().unwrap();
        assert_eq!(open.len(), 1);
        let ids: Vec<_> = open["07-tendermint-0"]
            .iter()
            .map(|c| c.channel_id.as_str())
            .collect();
        assert_eq!(ids, vec!["channel-0", "channel-1"]);
    }

    #[test]
    fn oversize_packet_is_not_sent() {
        let mut rng = StdRng::seed_from_u64(3);
        let app = MockApp::new(&mut rng, 10);
        app.register_consumer("07-tendermint-0");
        let channel = app.channels.open_channel("channel-0", "07-tendermint-0");
        app.channels.set_max_packet_size(8);

        let mut storage = MockStorage::new();
        crate::state::set_params(&mut storage, &Default::default()).unwrap();
        let ctx = Context::new(&mut storage, mock_block(10));

        let err = app
            .keeper()
            .send_outbound_packet(&ctx, &channel, Binary::new(vec![0u8; 9]))
            .unwrap_err();
        assert_eq!(err, ZoneConciergeError::OversizePacket { size: 9, max: 8 });
        assert!(app.channels.sent_packets().is_empty());
    }

    #[test]
    fn packet_times_out_after_configured_seconds() {
        let mut rng = StdRng::seed_from_u64(4);
        let app = MockApp::new(&mut rng, 10);
        app.register_consumer("07-tendermint-0");
        let channel = app.channels.open_channel("channel-0", "07-tendermint-0");

        let mut storage = MockStorage::new();
        let params = babylon_proto::babylon::zoneconcierge::v1::Params {
            ibc_packet_timeout_seconds: 60,
            max_headers_per_packet: 10,
        };
        crate::state::set_params(&mut storage, &params).unwrap();
        let block = mock_block(10);
        let block_time = block.time;
        let ctx = Context::new(&mut storage, block);

        let keeper = app.keeper();
        assert!(keeper.is_channel_uninitialized(&channel).unwrap());
        let sequence = keeper
            .send_outbound_packet(&ctx, &channel, Binary::new(vec![1, 2, 3]))
            .unwrap();
        assert_eq!(sequence, 1);
        assert!(!keeper.is_channel_uninitialized(&channel).unwrap());

        let sent = app.channels.sent_packets();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].timeout,
            IbcTimeout::with_timestamp(block_time.plus_seconds(60))
        );
    }
}
