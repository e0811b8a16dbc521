impl Epoch {
    /// Height of the last block of this epoch.
    pub fn last_block_height(&self) -> u64 {
        if self.epoch_number == 0 {
            return 0;
        }
        self.first_block_height
            .saturating_add(self.current_epoch_interval)
            .saturating_sub(1)
    }

    /// Height of the sealer block, i.e. the first block of the next epoch.
    /// Its header carries the app hash the epoch's validators signed.
    pub fn sealer_block_height(&self) -> u64 {
        self.last_block_height().saturating_add(1)
    }
}
