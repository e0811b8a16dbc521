//! Entry points called by the host chain and the modules ZoneConcierge
//! subscribes to.
//!
//! Steps the chain cannot continue without panic, everything else is logged
//! and skipped.

use log::{debug, warn};

use crate::epoch_snapshot::record_epoch_chain_infos;
use crate::error::ZoneConciergeError;
use crate::state::{set_header_inserted, set_reorg_occurred, should_broadcast_btc_headers};
use crate::{Context, Keeper};

fn consensus_critical(hook: &str, err: ZoneConciergeError) -> ! {
    panic!(
        "{}",
        ZoneConciergeError::ConsensusCritical(format!("{hook}: {err}"))
    )
}

impl<'a> Keeper<'a> {
    pub fn after_btc_header_inserted(&self, ctx: &mut Context) {
        if let Err(e) = set_header_inserted(&mut ctx.transient) {
            warn!("failed to flag BTC header insertion: {e}");
        }
    }

    pub fn after_btc_roll_forward(&self, ctx: &mut Context) {
        if let Err(e) = set_header_inserted(&mut ctx.transient) {
            warn!("failed to flag BTC roll forward: {e}");
        }
    }

    pub fn after_btc_roll_back(&self, ctx: &mut Context) {
        if let Err(e) = set_reorg_occurred(&mut ctx.transient) {
            warn!("failed to flag BTC reorg: {e}");
        }
    }

    /// Snapshots every consumer's chain info at the end of `epoch`.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot cannot be written.
    pub fn after_epoch_ends(&self, ctx: &mut Context, epoch: u64) {
        if let Err(e) = record_epoch_chain_infos(ctx.storage, epoch) {
            consensus_critical("after_epoch_ends", e);
        }
    }

    /// Attaches header proofs to the epoch's snapshots and stores the proof
    /// that the epoch is sealed.
    ///
    /// # Panics
    ///
    /// Panics if a proof cannot be produced or stored.
    pub fn after_raw_checkpoint_sealed(&self, ctx: &mut Context, epoch: u64) {
        if let Err(e) = self.record_epoch_header_proofs(ctx.storage, epoch) {
            consensus_critical("after_raw_checkpoint_sealed", e);
        }
        if let Err(e) = self.record_sealed_epoch_proof(ctx.storage, epoch) {
            consensus_critical("after_raw_checkpoint_sealed", e);
        }
    }

    /// Sends the BTC timestamps of the finalized epoch.
    ///
    /// # Panics
    ///
    /// Panics if the epoch's shared metadata cannot be assembled.
    pub fn after_raw_checkpoint_finalized(&self, ctx: &mut Context, epoch: u64) {
        if let Err(e) = self.broadcast_btc_timestamps(ctx, epoch) {
            consensus_critical("after_raw_checkpoint_finalized", e);
        }
    }

    pub fn begin_block(&self, ctx: &mut Context) {
        debug!("zoneconcierge begin block {}", ctx.block.height);
    }

    /// Relays BTC headers if the light client moved or a channel opened in
    /// this block, then the pending BTC staking events.
    pub fn end_block(&self, ctx: &mut Context) {
        match should_broadcast_btc_headers(&ctx.transient) {
            Ok(true) => {
                if let Err(e) = self.broadcast_btc_headers(ctx) {
                    warn!("failed to broadcast BTC headers: {e}");
                }
            }
            Ok(false) => {}
            Err(e) => warn!("failed to read broadcast triggers: {e}"),
        }

        if let Err(e) = self.broadcast_btc_staking_events(ctx) {
            warn!("failed to broadcast BTC staking events: {e}");
        }
    }
}
