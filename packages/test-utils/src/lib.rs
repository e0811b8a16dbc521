mod btc;
mod datagen;
mod eots;

pub use btc::{gen_btc_base_header, gen_btc_header_chain, gen_btc_header_info};
pub use datagen::*;
pub use eots::{gen_random_evidence, msg_to_sign_for_vote, EotsKeyPair};
