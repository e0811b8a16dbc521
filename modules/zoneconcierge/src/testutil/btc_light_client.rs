use std::cell::RefCell;
use std::collections::BTreeMap;

use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use babylon_test_utils::{gen_btc_base_header, gen_btc_header_chain};
use cosmwasm_std::{StdError, StdResult};
use rand::RngCore;

use crate::expected_keepers::BtcLightClientKeeper;

/// In-memory BTC light client.
///
/// Headers rolled back from the main chain stay known by hash, like in the
/// real light client.
#[derive(Default)]
pub struct MockBtcLightClient {
    known: RefCell<BTreeMap<Vec<u8>, BtcHeaderInfo>>,
    main_chain: RefCell<Vec<BtcHeaderInfo>>,
}

impl MockBtcLightClient {
    /// Appends `n` random headers to the main chain. An empty chain starts
    /// at height 1.
    pub fn extend_random<R: RngCore>(&self, rng: &mut R, n: usize) {
        if n == 0 {
            return;
        }
        let tip = self.main_chain.borrow().last().cloned();
        let headers = match tip {
            Some(tip) => gen_btc_header_chain(rng, &tip, n),
            None => {
                let base = gen_btc_base_header(rng, 1);
                let mut headers = vec![base.clone()];
                headers.extend(gen_btc_header_chain(rng, &base, n - 1));
                headers
            }
        };
        self.extend(headers);
    }

    /// Appends headers that extend the current tip
    pub fn extend(&self, headers: Vec<BtcHeaderInfo>) {
        let mut known = self.known.borrow_mut();
        let mut main_chain = self.main_chain.borrow_mut();
        for header in headers {
            known.insert(header.hash.to_vec(), header.clone());
            main_chain.push(header);
        }
    }

    /// Drops every main chain header above `height`
    pub fn rollback_to(&self, height: u32) {
        self.main_chain.borrow_mut().retain(|h| h.height <= height);
    }

    pub fn header_at(&self, height: u32) -> Option<BtcHeaderInfo> {
        self.main_chain
            .borrow()
            .iter()
            .find(|h| h.height == height)
            .cloned()
    }

    pub fn main_chain(&self) -> Vec<BtcHeaderInfo> {
        self.main_chain.borrow().clone()
    }
}

impl BtcLightClientKeeper for MockBtcLightClient {
    fn get_tip_info(&self) -> StdResult<BtcHeaderInfo> {
        self.main_chain
            .borrow()
            .last()
            .cloned()
            .ok_or_else(|| StdError::not_found("BTC tip"))
    }

    fn get_main_chain_from(&self, height: u32) -> StdResult<Vec<BtcHeaderInfo>> {
        Ok(self
            .main_chain
            .borrow()
            .iter()
            .filter(|h| h.height >= height)
            .cloned()
            .collect())
    }

    fn get_main_chain_up_to(&self, depth: u32) -> StdResult<Vec<BtcHeaderInfo>> {
        let main_chain = self.main_chain.borrow();
        let start = main_chain.len().saturating_sub(depth as usize + 1);
        Ok(main_chain[start..].to_vec())
    }

    fn get_header_by_hash(&self, hash: &[u8]) -> StdResult<Option<BtcHeaderInfo>> {
        Ok(self.known.borrow().get(hash).cloned())
    }

    fn get_header_by_height(&self, height: u32) -> StdResult<Option<BtcHeaderInfo>> {
        Ok(self.header_at(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rolled_back_headers_stay_known() {
        let mut rng = StdRng::seed_from_u64(1);
        let btc = MockBtcLightClient::default();
        btc.extend_random(&mut rng, 10);
        assert_eq!(btc.get_tip_info().unwrap().height, 10);
        let up_to = btc.get_main_chain_up_to(3).unwrap();
        assert_eq!(up_to.iter().map(|h| h.height).collect::<Vec<_>>(), vec![7, 8, 9, 10]);

        let stale = btc.header_at(9).unwrap();
        btc.rollback_to(8);
        assert_eq!(btc.get_header_by_height(9).unwrap(), None);
        assert_eq!(btc.get_header_by_hash(&stale.hash).unwrap(), Some(stale));
    }
}
