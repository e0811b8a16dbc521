use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_proto::babylon::zoneconcierge::v1::{
    inbound_packet::Packet as InboundPacketType, InboundPacket,
};
use bitcoin::hashes::Hash;
use cosmwasm_std::{
    from_json, Event, Ibc3ChannelOpenResponse, IbcBasicResponse, IbcChannelCloseMsg,
    IbcChannelConnectMsg, IbcChannelOpenMsg, IbcChannelOpenResponse, IbcOrder, IbcPacketAckMsg,
    IbcPacketReceiveMsg, IbcPacketTimeoutMsg, IbcReceiveResponse, Never, StdAck, StdError,
};
use log::{info, warn};
use prost::Message;

use crate::error::ZoneConciergeError;
use crate::keeper::PORT_ID;
use crate::state::{set_bsn_base_header, set_new_consumer_channel};
use crate::{Context, Keeper};

/// Zone Concierge IBC channel settings
pub const IBC_VERSION: &str = "zoneconcierge-1";
pub const IBC_ORDERING: IbcOrder = IbcOrder::Ordered;

/// This is executed during the ChannelOpenInit and ChannelOpenTry
/// of the IBC 4-step channel protocol.
/// Besides ordering and version, the connection must be built on the light
/// client of a registered Cosmos consumer.
pub fn ibc_channel_open(
    keeper: &Keeper,
    msg: IbcChannelOpenMsg,
) -> Result<IbcChannelOpenResponse, ZoneConciergeError> {
    let channel = msg.channel();
    if channel.endpoint.port_id != PORT_ID {
        return Err(ZoneConciergeError::InvalidPort {
            expected: PORT_ID.to_string(),
            actual: channel.endpoint.port_id.clone(),
        });
    }
    // The IBC channel has to be ordered
    if channel.order != IBC_ORDERING {
        return Err(ZoneConciergeError::InvalidOrdering {});
    }

    // On init an empty version means ours, on try the counterparty must
    // propose ours
    let version = match msg.counterparty_version() {
        Some(counter_version) => counter_version,
        None if channel.version.is_empty() => IBC_VERSION,
        None => channel.version.as_str(),
    };
    if version != IBC_VERSION {
        return Err(ZoneConciergeError::InvalidVersion {
            expected: IBC_VERSION.to_string(),
            actual: version.to_string(),
        });
    }

    let client_id = keeper
        .channels
        .get_connection_client_id(&channel.connection_id)?;
    if !keeper.registry.is_registered_cosmos_consumer(&client_id) {
        return Err(ZoneConciergeError::UnregisteredConsumer { client_id });
    }

    Ok(Some(Ibc3ChannelOpenResponse {
        version: IBC_VERSION.to_string(),
    }))
}

/// Second part of the 4-step handshake, i.e. ChannelOpenAck and ChannelOpenConfirm.
/// A new channel makes the end block send BTC headers to its consumer.
pub fn ibc_channel_connect(
    ctx: &mut Context,
    msg: IbcChannelConnectMsg,
) -> Result<IbcBasicResponse, ZoneConciergeError> {
    if let Some(counter_version) = msg.counterparty_version() {
        if counter_version != IBC_VERSION {
            return Err(ZoneConciergeError::InvalidVersion {
                expected: IBC_VERSION.to_string(),
                actual: counter_version.to_string(),
            });
        }
    }
    let channel = msg.channel();
    set_new_consumer_channel(&mut ctx.transient)?;

    let channel_id = &channel.endpoint.channel_id;
    info!("channel {channel_id} with {} is open", channel.connection_id);
    let response = IbcBasicResponse::new()
        .add_attribute("action", "ibc_connect")
        .add_attribute("channel_id", channel_id)
        .add_event(Event::new("ibc").add_attribute("channel", "connect"));

    Ok(response)
}

/// Consumers may close their end of the channel, Babylon never closes its own.
pub fn ibc_channel_close(msg: IbcChannelCloseMsg) -> Result<IbcBasicResponse, ZoneConciergeError> {
    if let IbcChannelCloseMsg::CloseInit { .. } = msg {
        return Err(ZoneConciergeError::ChannelCloseNotAllowed {});
    }
    let channel_id = msg.channel().endpoint.channel_id.as_str();
    warn!("channel {channel_id} was closed by the counterparty");
    Ok(IbcBasicResponse::new()
        .add_attribute("action", "ibc_close")
        .add_attribute("channel_id", channel_id))
}

/// Invoked when an IBC packet is received.
/// We decode the contents of the packet and if it matches one of the packets we support, execute
/// the relevant function, otherwise return an IBC Ack error.
pub fn ibc_packet_receive(
    keeper: &Keeper,
    ctx: &mut Context,
    msg: IbcPacketReceiveMsg,
) -> Result<IbcReceiveResponse, Never> {
    (|| -> Result<IbcReceiveResponse, ZoneConciergeError> {
        let packet = msg.packet;
        let consumer_id = keeper
            .channels
            .get_channel_client_id(&packet.dest.port_id, &packet.dest.channel_id)?;
        let packet_data = InboundPacket::decode(packet.data.as_slice())?;
        let inbound_packet = packet_data
            .packet
            .ok_or(ZoneConciergeError::EmptyPacket {})?;
        match inbound_packet {
            InboundPacketType::BsnSlashing(slashing) => {
                let evidence = slashing
                    .evidence
                    .ok_or_else(|| StdError::generic_err("slashing packet without evidence"))?;
                keeper.handle_consumer_slashing(&consumer_id, &evidence)?;
                Ok(IbcReceiveResponse::new(StdAck::success(vec![]))
                    .add_attribute("action", "receive_bsn_slashing")
                    .add_attribute("consumer_id", consumer_id))
            }
            InboundPacketType::BsnBaseBtcHeader(base) => {
                let header = base.base_btc_header.ok_or_else(|| {
                    ZoneConciergeError::InvalidBtcHeader("missing base header".into())
                })?;
                verify_btc_header_info(&header)?;
                set_bsn_base_header(ctx.storage, &consumer_id, &header)?;
                Ok(IbcReceiveResponse::new(StdAck::success(vec![]))
                    .add_attribute("action", "receive_bsn_base_btc_header")
                    .add_attribute("consumer_id", consumer_id)
                    .add_attribute("height", header.height.to_string()))
            }
        }
    })()
    .or_else(|e| {
        Ok(
            IbcReceiveResponse::new(StdAck::error(format!("invalid packet: {e}")))
                .add_event(Event::new("ibc").add_attribute("packet", "receive")),
        )
    })
}

/// Checks that the header bytes decode and hash to the claimed hash
fn verify_btc_header_info(header: &BtcHeaderInfo) -> Result<(), ZoneConciergeError> {
    let block_header = header
        .block_header()
        .map_err(|e| ZoneConciergeError::InvalidBtcHeader(e.to_string()))?;
    if block_header.block_hash().to_byte_array().as_slice() != header.hash.as_ref() {
        return Err(ZoneConciergeError::InvalidBtcHeader(format!(
            "hash mismatch at height {}",
            header.height
        )));
    }
    Ok(())
}

pub fn ibc_packet_ack(msg: IbcPacketAckMsg) -> Result<IbcBasicResponse, ZoneConciergeError> {
    let channel_id = &msg.original_packet.src.channel_id;
    match from_json::<StdAck>(&msg.acknowledgement.data) {
        Ok(ack) if !ack.is_success() => warn!(
            "packet {} on channel {channel_id} failed on the consumer: {ack:?}",
            msg.original_packet.sequence
        ),
        Ok(_) => {}
        Err(e) => warn!("undecodable acknowledgement on channel {channel_id}: {e}"),
    }
    Ok(IbcBasicResponse::new().add_attribute("action", "ibc_packet_ack"))
}

pub fn ibc_packet_timeout(msg: IbcPacketTimeoutMsg) -> Result<IbcBasicResponse, ZoneConciergeError> {
    warn!(
        "packet {} timed out on channel {} port {}",
        msg.packet.sequence, msg.packet.src.channel_id, msg.packet.src.port_id
    );

    let response = IbcBasicResponse::new()
        .add_attribute("action", "ibc_packet_timeout")
        .add_attribute("channel_id", &msg.packet.src.channel_id)
        .add_attribute("port_id", &msg.packet.src.port_id);

    Ok(response)
}
