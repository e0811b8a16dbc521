use bitcoin::block::Header as BlockHeader;

impl BtcHeaderInfo {
    pub fn block_header(&self) -> Result<BlockHeader, bitcoin::consensus::encode::Error> {
        bitcoin::consensus::deserialize(self.header.as_ref())
    }

    /// Hex representation of the header hash, in Bitcoin's display (reversed) byte order.
    pub fn hash_hex(&self) -> String {
        self.hash.iter().rev().map(|b| format!("{b:02x}")).collect()
    }
}
