// @generated
pub mod babylon {
    pub mod btccheckpoint {
        // @@protoc_insertion_point(attribute:babylon.btccheckpoint.v1)
        pub mod v1 {
            include!("gen/babylon.btccheckpoint.v1.rs");
            // @@protoc_insertion_point(babylon.btccheckpoint.v1)
        }
    }
    pub mod btclightclient {
        // @@protoc_insertion_point(attribute:babylon.btclightclient.v1)
        pub mod v1 {
            include!("gen/babylon.btclightclient.v1.rs");
            // @@protoc_insertion_point(babylon.btclightclient.v1)
            include!("impl/babylon.btclightclient.v1.impl.rs");
        }
    }
    pub mod btcstaking {
        // @@protoc_insertion_point(attribute:babylon.btcstaking.v1)
        pub mod v1 {
            include!("gen/babylon.btcstaking.v1.rs");
            // @@protoc_insertion_point(babylon.btcstaking.v1)
        }
    }
    pub mod btcstkconsumer {
        // @@protoc_insertion_point(attribute:babylon.btcstkconsumer.v1)
        pub mod v1 {
            include!("gen/babylon.btcstkconsumer.v1.rs");
            // @@protoc_insertion_point(babylon.btcstkconsumer.v1)
        }
    }
    pub mod checkpointing {
        // @@protoc_insertion_point(attribute:babylon.checkpointing.v1)
        pub mod v1 {
            include!("gen/babylon.checkpointing.v1.rs");
            // @@protoc_insertion_point(babylon.checkpointing.v1)
        }
    }
    pub mod epoching {
        // @@protoc_insertion_point(attribute:babylon.epoching.v1)
        pub mod v1 {
            include!("gen/babylon.epoching.v1.rs");
            // @@protoc_insertion_point(babylon.epoching.v1)
            include!("impl/babylon.epoching.v1.impl.rs");
        }
    }
    pub mod finality {
        // @@protoc_insertion_point(attribute:babylon.finality.v1)
        pub mod v1 {
            include!("gen/babylon.finality.v1.rs");
            // @@protoc_insertion_point(babylon.finality.v1)
        }
    }
    pub mod zoneconcierge {
        // @@protoc_insertion_point(attribute:babylon.zoneconcierge.v1)
        pub mod v1 {
            include!("gen/babylon.zoneconcierge.v1.rs");
            // @@protoc_insertion_point(babylon.zoneconcierge.v1)
            include!("impl/babylon.zoneconcierge.v1.impl.rs");
        }
    }
}

#[cfg(test)]
mod test {
    use crate::babylon::checkpointing::v1::ValidatorWithBlsKey;
    use crate::babylon::epoching::v1::Epoch;
    use crate::babylon::zoneconcierge::v1::{
        IndexedHeader, Params, ProofEpochSealed, MAX_IBC_PACKET_TIMEOUT_SECONDS,
    };
    use tendermint_proto::crypto::ProofOps;

    #[test]
    fn epoch_sealer_height_is_first_block_of_next_epoch() {
        let epoch = Epoch {
            epoch_number: 3,
            current_epoch_interval: 10,
            first_block_height: 21,
            ..Default::default()
        };
        assert_eq!(epoch.last_block_height(), 30);
        assert_eq!(epoch.sealer_block_height(), 31);
    }

    #[test]
    fn empty_epoch_heights_do_not_underflow() {
        let epoch = Epoch {
            epoch_number: 1,
            ..Default::default()
        };
        assert_eq!(epoch.last_block_height(), 0);
        assert_eq!(epoch.sealer_block_height(), 1);
    }

    #[test]
    fn params_validation() {
        assert!(Params::default_params().validate().is_ok());
        let zero_timeout = Params {
            ibc_packet_timeout_seconds: 0,
            ..Params::default_params()
        };
        assert!(zero_timeout.validate().is_err());
        let too_long = Params {
            ibc_packet_timeout_seconds: MAX_IBC_PACKET_TIMEOUT_SECONDS + 1,
            ..Params::default_params()
        };
        assert!(too_long.validate().is_err());
        let no_headers = Params {
            max_headers_per_packet: 0,
            ..Params::default_params()
        };
        assert!(no_headers.validate().is_err());
    }

    #[test]
    fn indexed_header_requires_hashes() {
        let mut header = IndexedHeader {
            consumer_id: "07-tendermint-0".to_string(),
            hash: vec![1u8; 32].into(),
            height: 10,
            time: None,
            babylon_header_hash: vec![2u8; 32].into(),
            babylon_header_height: 100,
            babylon_epoch: 2,
            babylon_tx_hash: vec![3u8; 32].into(),
        };
        assert!(header.validate().is_ok());

        header.time = Some(pbjson_types::Timestamp {
            seconds: 1_700_000_000,
            nanos: 5,
        });
        assert!(header.validate().is_ok());
        header.time = Some(pbjson_types::Timestamp {
            seconds: -1,
            nanos: 0,
        });
        assert!(header.validate().is_err());
        header.time = Some(pbjson_types::Timestamp {
            seconds: 1,
            nanos: -1,
        });
        assert!(header.validate().is_err());

        header.time = None;
        header.babylon_tx_hash = Default::default();
        assert!(header.validate().is_err());
    }

    #[test]
    fn proof_epoch_sealed_requires_all_parts() {
        let mut proof = ProofEpochSealed {
            validator_set: vec![ValidatorWithBlsKey {
                validator_address: "bbnvaloper1".to_string(),
                bls_pub_key: vec![1u8; 96].into(),
                voting_power: 10,
            }],
            proof_epoch_info: Some(ProofOps::default()),
            proof_epoch_val_set: Some(ProofOps::default()),
        };
        assert!(proof.validate().is_ok());
        proof.proof_epoch_val_set = None;
        assert!(proof.validate().is_err());
    }
}
