use babylon_proto::babylon::btclightclient::v1::BtcHeaderInfo;
use bitcoin::block::{Header as BlockHeader, Version};
use bitcoin::hashes::Hash;
use bitcoin::pow::Work;
use bitcoin::{BlockHash, CompactTarget, TxMerkleNode};
use rand::{Rng, RngCore};

/// Regtest difficulty, the lowest target the header format allows
const REGTEST_BITS: u32 = 0x207f_ffff;
const BLOCK_INTERVAL_SECS: u32 = 600;

fn header_info(header: &BlockHeader, height: u32, parent_work: Option<Work>) -> BtcHeaderInfo {
    let work = match parent_work {
        Some(w) => w + header.work(),
        None => header.work(),
    };
    BtcHeaderInfo {
        header: bitcoin::consensus::serialize(header).into(),
        hash: header.block_hash().to_byte_array().to_vec().into(),
        height,
        work: work.to_be_bytes().to_vec().into(),
    }
}

/// Generates a header with no known parent at the given height, to be used as
/// the base of a test chain.
pub fn gen_btc_base_header<R: RngCore>(rng: &mut R, height: u32) -> BtcHeaderInfo {
    let header = BlockHeader {
        version: Version::from_consensus(4),
        prev_blockhash: BlockHash::from_byte_array(rng.gen()),
        merkle_root: TxMerkleNode::from_byte_array(rng.gen()),
        time: 1_700_000_000 + height * BLOCK_INTERVAL_SECS,
        bits: CompactTarget::from_consensus(REGTEST_BITS),
        nonce: rng.gen(),
    };
    header_info(&header, height, None)
}

/// Generates a random child of `parent`.
pub fn gen_btc_header_info<R: RngCore>(rng: &mut R, parent: &BtcHeaderInfo) -> BtcHeaderInfo {
    let parent_header = parent
        .block_header()
        .expect("parent header must be a valid BTC header");
    let parent_work: [u8; 32] = parent
        .work
        .as_ref()
        .try_into()
        .expect("work must be 32 bytes");
    let header = BlockHeader {
        version: Version::from_consensus(4),
        prev_blockhash: parent_header.block_hash(),
        merkle_root: TxMerkleNode::from_byte_array(rng.gen()),
        time: parent_header.time + BLOCK_INTERVAL_SECS,
        bits: CompactTarget::from_consensus(REGTEST_BITS),
        nonce: rng.gen(),
    };
    header_info(&header, parent.height + 1, Some(Work::from_be_bytes(parent_work)))
}

/// Generates `len` headers extending `parent`, ordered by ascending height.
pub fn gen_btc_header_chain<R: RngCore>(
    rng: &mut R,
    parent: &BtcHeaderInfo,
    len: usize,
) -> Vec<BtcHeaderInfo> {
    let mut chain: Vec<BtcHeaderInfo> = Vec::with_capacity(len);
    for _ in 0..len {
        let next = gen_btc_header_info(rng, chain.last().unwrap_or(parent));
        chain.push(next);
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn chain_links_to_parent() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = gen_btc_base_header(&mut rng, 0);
        let chain = gen_btc_header_chain(&mut rng, &base, 5);

        assert_eq!(chain.len(), 5);
        let mut prev = base;
        for header in chain {
            assert_eq!(header.height, prev.height + 1);
            let decoded = header.block_header().unwrap();
            assert_eq!(
                decoded.prev_blockhash.to_byte_array().to_vec(),
                prev.hash.to_vec()
            );
            prev = header;
        }
    }
}
