pub use crate::context::{BlockHeader, Context};
pub use crate::error::ZoneConciergeError;
pub use crate::keeper::Keeper;

pub mod broadcast;
mod btc_headers;
pub mod btc_timestamp;
pub mod context;
pub mod epoch_snapshot;
pub mod error;
pub mod evidence;
pub mod expected_keepers;
pub mod genesis;
mod hooks;
pub mod ibc;
pub mod ingest;
pub mod keeper;
pub mod msg;
pub mod queries;
mod staking_events;
pub mod state;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

#[cfg(test)]
mod multitest;
