/// Default IBC packet timeout, one day
pub const DEFAULT_IBC_PACKET_TIMEOUT_SECONDS: u32 = 60 * 60 * 24;
/// Upper bound on the IBC packet timeout, one year
pub const MAX_IBC_PACKET_TIMEOUT_SECONDS: u32 = 60 * 60 * 24 * 365;
pub const DEFAULT_MAX_HEADERS_PER_PACKET: u32 = 1000;

impl Params {
    pub fn default_params() -> Self {
        Params {
            ibc_packet_timeout_seconds: DEFAULT_IBC_PACKET_TIMEOUT_SECONDS,
            max_headers_per_packet: DEFAULT_MAX_HEADERS_PER_PACKET,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.ibc_packet_timeout_seconds == 0 {
            return Err("ibc_packet_timeout_seconds must be positive".to_string());
        }
        if self.ibc_packet_timeout_seconds > MAX_IBC_PACKET_TIMEOUT_SECONDS {
            return Err(format!(
                "ibc_packet_timeout_seconds must be at most {MAX_IBC_PACKET_TIMEOUT_SECONDS}, got {}",
                self.ibc_packet_timeout_seconds
            ));
        }
        if self.max_headers_per_packet == 0 {
            return Err("max_headers_per_packet must be positive".to_string());
        }
        Ok(())
    }
}

impl IndexedHeader {
    pub fn validate(&self) -> Result<(), String> {
        if self.consumer_id.is_empty() {
            return Err("empty consumer_id".to_string());
        }
        if self.hash.is_empty() {
            return Err("empty hash".to_string());
        }
        if self.babylon_header_hash.is_empty() {
            return Err("empty babylon_header_hash".to_string());
        }
        if self.babylon_tx_hash.is_empty() {
            return Err("empty babylon_tx_hash".to_string());
        }
        if let Some(time) = &self.time {
            if time.seconds < 0 || !(0..1_000_000_000).contains(&time.nanos) {
                return Err(format!(
                    "time out of range: {}s {}ns",
                    time.seconds, time.nanos
                ));
            }
        }
        Ok(())
    }
}

impl ChainInfo {
    pub fn validate(&self) -> Result<(), String> {
        if self.consumer_id.is_empty() {
            return Err("empty consumer_id".to_string());
        }
        match &self.latest_header {
            Some(header) => header.validate()?,
            None => return Err("empty latest_header".to_string()),
        }
        if let Some(forks) = &self.latest_forks {
            for header in &forks.headers {
                header.validate()?;
            }
        }
        Ok(())
    }

    /// Height of the latest canonical header, if any
    pub fn latest_height(&self) -> Option<u64> {
        self.latest_header.as_ref().map(|h| h.height)
    }
}

impl ProofEpochSealed {
    pub fn validate(&self) -> Result<(), String> {
        if self.validator_set.is_empty() {
            return Err("empty validator_set".to_string());
        }
        if self.proof_epoch_info.is_none() {
            return Err("missing proof_epoch_info".to_string());
        }
        if self.proof_epoch_val_set.is_none() {
            return Err("missing proof_epoch_val_set".to_string());
        }
        Ok(())
    }
}

impl BsnBtcState {
    /// Headers of the last segment sent to the BSN, oldest first
    pub fn last_sent_headers(&self) -> &[super::super::btclightclient::v1::BtcHeaderInfo] {
        self.last_sent_segment
            .as_ref()
            .map(|s| s.btc_headers.as_slice())
            .unwrap_or_default()
    }
}
