use babylon_proto::babylon::zoneconcierge::v1::outbound_packet::Packet as OutboundPacketType;
use log::{debug, warn};

use crate::broadcast::encode_outbound_packet;
use crate::error::ZoneConciergeError;
use crate::{Context, Keeper};

impl<'a> Keeper<'a> {
    /// Sends the pending BTC staking events of every consumer. A batch is only
    /// deleted once it went out on all of the consumer's channels, so failed
    /// batches are retried next block.
    pub fn broadcast_btc_staking_events(&self, ctx: &mut Context) -> Result<(), ZoneConciergeError> {
        let batches = self.btc_staking.get_all_consumer_event_batches()?;
        if batches.is_empty() {
            return Ok(());
        }
        let open_channels = self.get_open_channels()?;

        for (consumer_id, batch) in batches {
            let Some(channels) = open_channels.get(&consumer_id) else {
                debug!("no open channel for {consumer_id}, keeping its staking events");
                continue;
            };
            let data = encode_outbound_packet(OutboundPacketType::BtcStaking(batch));

            let mut all_sent = true;
            for channel in channels {
                if let Err(e) = self.send_outbound_packet(ctx, channel, data.clone()) {
                    warn!(
                        "failed to send staking events to {consumer_id} on {}: {e}",
                        channel.channel_id
                    );
                    all_sent = false;
                }
            }

            if all_sent {
                self.btc_staking.delete_consumer_event_batch(&consumer_id)?;
            }
        }
        Ok(())
    }
}
