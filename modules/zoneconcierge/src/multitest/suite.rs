use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_proto::babylon::zoneconcierge::v1::{
    outbound_packet::Packet as OutboundPacketType, BtcTimestamp, OutboundPacket, Params,
};
use babylon_test_utils::{gen_btc_header_chain, gen_random_bytes};
use cosmos_sdk_proto::Any;
use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::{from_json, IbcChannel, IbcChannelConnectMsg, IbcEndpoint, IbcOrder};
use ibc_proto::google::protobuf::Any as IbcAny;
use ibc_proto::ibc::core::client::v1::MsgUpdateClient;
use ibc_proto::ibc::lightclients::tendermint::v1::Header as TmHeader;
use prost::Message;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tendermint_proto::types::{Header, SignedHeader};

use crate::genesis::{default_genesis, init_genesis};
use crate::ibc::{ibc_channel_connect, IBC_VERSION};
use crate::ingest::{Tx, MSG_UPDATE_CLIENT_TYPE_URL, TM_HEADER_TYPE_URL};
use crate::keeper::PORT_ID;
use crate::msg::{ChainInfoResponse, QueryMsg};
use crate::queries;
use crate::state::get_bsn_btc_state;
use crate::testutil::{mock_block, MockApp, DEFAULT_FINALIZATION_DEPTH};
use crate::{Context, Keeper};

pub struct SuiteBuilder {
    seed: u64,
    btc_headers: usize,
    finalization_depth: u32,
    epoch_interval: u64,
    params: Params,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            seed: 42,
            btc_headers: 0,
            finalization_depth: DEFAULT_FINALIZATION_DEPTH,
            epoch_interval: 10,
            params: Params::default_params(),
        }
    }

    /// Populates the BTC light client with headers 1..=n
    pub fn with_btc_headers(mut self, n: usize) -> Self {
        self.btc_headers = n;
        self
    }

    pub fn with_finalization_depth(mut self, depth: u32) -> Self {
        self.finalization_depth = depth;
        self
    }

    pub fn with_max_headers_per_packet(mut self, max: u32) -> Self {
        self.params.max_headers_per_packet = max;
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let app = MockApp::new(&mut rng, self.epoch_interval);
        app.set_finalization_depth(self.finalization_depth);
        app.btc.extend_random(&mut rng, self.btc_headers);

        let mut storage = MockStorage::new();
        let mut genesis = default_genesis();
        genesis.params = Some(self.params);
        init_genesis(&mut storage, &genesis).unwrap();

        Suite {
            app,
            storage,
            rng,
            height: 1,
        }
    }
}

pub struct Suite {
    pub app: MockApp,
    pub storage: MockStorage,
    rng: StdRng,
    height: u64,
}

impl Suite {
    /// Runs a Babylon block: begin block, `f`, end block.
    pub fn next_block(&mut self, f: impl FnOnce(&Keeper, &mut Context)) {
        let keeper = self.app.keeper();
        let mut ctx = Context::new(&mut self.storage, mock_block(self.height));
        keeper.begin_block(&mut ctx);
        f(&keeper, &mut ctx);
        keeper.end_block(&mut ctx);
        self.height += 1;
    }

    /// Registers the consumer and opens its channel, without any handshake
    /// callback reaching ZoneConcierge yet.
    pub fn add_consumer(&mut self, consumer_id: &str, channel_id: &str) {
        self.app.register_consumer(consumer_id);
        self.app.channels.open_channel(channel_id, consumer_id);
    }

    /// Completes the channel handshake in a new block
    pub fn connect(&mut self, channel_id: &str) {
        let channel = IbcChannel::new(
            IbcEndpoint {
                port_id: PORT_ID.to_string(),
                channel_id: channel_id.to_string(),
            },
            IbcEndpoint {
                port_id: PORT_ID.to_string(),
                channel_id: format!("{channel_id}-counterparty"),
            },
            IbcOrder::Ordered,
            IBC_VERSION,
            "connection-0",
        );
        self.next_block(|_, ctx| {
            ibc_channel_connect(ctx, IbcChannelConnectMsg::new_confirm(channel)).unwrap();
        });
    }

    /// Inserts `n` BTC headers in a single block
    pub fn extend_btc(&mut self, n: usize) {
        let before = self.app.btc.main_chain().len();
        self.app.btc.extend_random(&mut self.rng, n);
        let inserted = self.app.btc.main_chain().len() - before;
        self.next_block(|k, ctx| {
            for _ in 0..inserted {
                k.after_btc_header_inserted(ctx);
            }
        });
    }

    /// Replaces the BTC main chain above `fork_height` with a fork ending at
    /// `new_tip`
    pub fn reorg_btc(&mut self, fork_height: u32, new_tip: u32) {
        self.app.btc.rollback_to(fork_height);
        let fork_parent = self.app.btc.header_at(fork_height).unwrap();
        let fork = gen_btc_header_chain(
            &mut self.rng,
            &fork_parent,
            (new_tip - fork_height) as usize,
        );
        self.app.btc.extend(fork);
        self.next_block(|k, ctx| {
            k.after_btc_roll_back(ctx);
            k.after_btc_roll_forward(ctx);
        });
    }

    pub fn set_epoch(&mut self, epoch: u64) {
        self.app.set_current_epoch(&mut self.rng, epoch);
    }

    /// Relays a header of the consumer through a light client update
    pub fn submit_header(&mut self, consumer_id: &str, height: u64) {
        let header = Header {
            chain_id: format!("{consumer_id}-chain"),
            height: height as i64,
            time: Some(tendermint_proto::google::protobuf::Timestamp {
                seconds: 1_700_000_000 + height as i64 * 6,
                nanos: 0,
            }),
            app_hash: gen_random_bytes(&mut self.rng, 32),
            ..Default::default()
        };
        let update = MsgUpdateClient {
            client_id: consumer_id.to_string(),
            client_message: Some(IbcAny {
                type_url: TM_HEADER_TYPE_URL.to_string(),
                value: TmHeader {
                    signed_header: Some(SignedHeader {
                        header: Some(header),
                        commit: None,
                    }),
                    ..Default::default()
                }
                .encode_to_vec(),
            }),
            signer: "bbn1relayer".to_string(),
        };
        let tx = Tx {
            hash: gen_random_bytes(&mut self.rng, 32),
            msgs: vec![Any {
                type_url: MSG_UPDATE_CLIENT_TYPE_URL.to_string(),
                value: update.encode_to_vec(),
            }],
        };
        self.next_block(|k, ctx| k.post_handle_tx(ctx, &tx, true));
    }

    pub fn end_epoch(&mut self, epoch: u64) {
        self.next_block(|k, ctx| k.after_epoch_ends(ctx, epoch));
    }

    pub fn seal_epoch(&mut self, epoch: u64) {
        self.app.seal_epoch(&mut self.rng, epoch);
        self.next_block(|k, ctx| k.after_raw_checkpoint_sealed(ctx, epoch));
    }

    pub fn finalize_epoch(&mut self, epoch: u64) {
        self.app.finalize_epoch(&mut self.rng, epoch);
        self.next_block(|k, ctx| k.after_raw_checkpoint_finalized(ctx, epoch));
    }

    /// Every packet sent on the channel so far, decoded
    pub fn sent_packets(&self, channel_id: &str) -> Vec<OutboundPacketType> {
        self.app
            .channels
            .sent_on(channel_id)
            .into_iter()
            .filter_map(|p| OutboundPacket::decode(p.data.as_slice()).unwrap().packet)
            .collect()
    }

    /// Heights of the BTC headers carried by the channel's packets, per packet
    pub fn sent_btc_header_heights(&self, channel_id: &str) -> Vec<Vec<u32>> {
        self.sent_packets(channel_id)
            .into_iter()
            .filter_map(|p| match p {
                OutboundPacketType::BtcHeaders(headers) => Some(heights(&headers.headers)),
                _ => None,
            })
            .collect()
    }

    pub fn sent_btc_timestamps(&self, channel_id: &str) -> Vec<BtcTimestamp> {
        self.sent_packets(channel_id)
            .into_iter()
            .filter_map(|p| match p {
                OutboundPacketType::BtcTimestamp(timestamp) => Some(timestamp),
                _ => None,
            })
            .collect()
    }

    pub fn last_sent_heights(&self, consumer_id: &str) -> Vec<u32> {
        let state = get_bsn_btc_state(&self.storage, consumer_id).unwrap();
        heights(state.last_sent_headers())
    }

    pub fn query_chain_info(&self, consumer_id: &str) -> ChainInfoResponse {
        let bin = queries::query(
            &self.app.keeper(),
            &self.storage,
            QueryMsg::ChainInfo {
                consumer_id: consumer_id.to_string(),
            },
        )
        .unwrap();
        from_json(bin).unwrap()
    }
}

pub fn heights(headers: &[BtcHeaderInfo]) -> Vec<u32> {
    headers.iter().map(|h| h.height).collect()
}
