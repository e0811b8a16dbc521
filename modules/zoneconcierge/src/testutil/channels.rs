use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_std::{Binary, IbcTimeout, StdError, StdResult};
use ibc_proto::ibc::core::channel::v1::{Counterparty, IdentifiedChannel, Order, State};

use crate::expected_keepers::ChannelKeeper;
use crate::ibc::IBC_VERSION;
use crate::keeper::PORT_ID;

/// Default max payload, large enough for a full header window
pub const DEFAULT_MAX_PACKET_SIZE: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq)]
pub struct SentPacket {
    pub channel_id: String,
    pub sequence: u64,
    pub data: Binary,
    pub timeout: IbcTimeout,
}

/// In-memory IBC channel keeper recording every packet sent through it
pub struct MockChannels {
    channels: RefCell<BTreeMap<String, IdentifiedChannel>>,
    channel_clients: RefCell<BTreeMap<String, String>>,
    connection_clients: RefCell<BTreeMap<String, String>>,
    next_sequences: RefCell<BTreeMap<String, u64>>,
    failing: RefCell<BTreeSet<String>>,
    sent: RefCell<Vec<SentPacket>>,
    max_packet_size: Cell<usize>,
}

impl Default for MockChannels {
    fn default() -> Self {
        Self {
            channels: Default::default(),
            channel_clients: Default::default(),
            connection_clients: Default::default(),
            next_sequences: Default::default(),
            failing: Default::default(),
            sent: Default::default(),
            max_packet_size: Cell::new(DEFAULT_MAX_PACKET_SIZE),
        }
    }
}

impl MockChannels {
    pub fn open_channel(&self, channel_id: &str, client_id: &str) -> IdentifiedChannel {
        self.add_channel(channel_id, client_id, State::Open)
    }

    pub fn add_channel(&self, channel_id: &str, client_id: &str, state: State) -> IdentifiedChannel {
        let connection_id = format!("connection-{client_id}");
        let channel = IdentifiedChannel {
            state: state as i32,
            ordering: Order::Ordered as i32,
            counterparty: Some(Counterparty {
                port_id: PORT_ID.to_string(),
                channel_id: format!("{channel_id}-counterparty"),
            }),
            connection_hops: vec![connection_id.clone()],
            version: IBC_VERSION.to_string(),
            port_id: PORT_ID.to_string(),
            channel_id: channel_id.to_string(),
            ..Default::default()
        };
        self.channels
            .borrow_mut()
            .insert(channel_id.to_string(), channel.clone());
        self.channel_clients
            .borrow_mut()
            .insert(channel_id.to_string(), client_id.to_string());
        self.set_connection_client(&connection_id, client_id);
        channel
    }

    pub fn set_connection_client(&self, connection_id: &str, client_id: &str) {
        self.connection_clients
            .borrow_mut()
            .insert(connection_id.to_string(), client_id.to_string());
    }

    /// Makes every later send on the channel fail
    pub fn fail_sends_on(&self, channel_id: &str) {
        self.failing.borrow_mut().insert(channel_id.to_string());
    }

    pub fn set_max_packet_size(&self, size: usize) {
        self.max_packet_size.set(size);
    }

    pub fn sent_packets(&self) -> Vec<SentPacket> {
        self.sent.borrow().clone()
    }

    pub fn sent_on(&self, channel_id: &str) -> Vec<SentPacket> {
        self.sent
            .borrow()
            .iter()
            .filter(|p| p.channel_id == channel_id)
            .cloned()
            .collect()
    }
}

impl ChannelKeeper for MockChannels {
    fn get_all_channels(&self, port_id: &str) -> StdResult<Vec<IdentifiedChannel>> {
        Ok(self
            .channels
            .borrow()
            .values()
            .filter(|c| c.port_id == port_id)
            .cloned()
            .collect())
    }

    fn get_channel(&self, port_id: &str, channel_id: &str) -> StdResult<Option<IdentifiedChannel>> {
        Ok(self
            .channels
            .borrow()
            .get(channel_id)
            .filter(|c| c.port_id == port_id)
            .cloned())
    }

    fn get_next_sequence_send(&self, _port_id: &str, channel_id: &str) -> StdResult<u64> {
        Ok(self
            .next_sequences
            .borrow()
            .get(channel_id)
            .copied()
            .unwrap_or(1))
    }

    fn get_channel_client_id(&self, _port_id: &str, channel_id: &str) -> StdResult<String> {
        self.channel_clients
            .borrow()
            .get(channel_id)
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("client of channel {channel_id}")))
    }

    fn get_connection_client_id(&self, connection_id: &str) -> StdResult<String> {
        self.connection_clients
            .borrow()
            .get(connection_id)
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("client of connection {connection_id}")))
    }

    fn send_packet(
        &self,
        _port_id: &str,
        channel_id: &str,
        data: Binary,
        timeout: IbcTimeout,
    ) -> StdResult<u64> {
        if self.failing.borrow().contains(channel_id) {
            return Err(StdError::generic_err(format!(
                "send on channel {channel_id} failed"
            )));
        }
        let sequence = self.get_next_sequence_send(PORT_ID, channel_id)?;
        self.next_sequences
            .borrow_mut()
            .insert(channel_id.to_string(), sequence + 1);
        self.sent.borrow_mut().push(SentPacket {
            channel_id: channel_id.to_string(),
            sequence,
            data,
            timeout,
        });
        Ok(sequence)
    }

    fn max_packet_size(&self) -> usize {
        self.max_packet_size.get()
    }
}
