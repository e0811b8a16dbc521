mod suite;

use babylon_proto::babylon::btcstaking::v1::BtcStakingIbcPacket;
use babylon_proto::babylon::zoneconcierge::v1::outbound_packet::Packet as OutboundPacketType;
use suite::{heights, SuiteBuilder};

use crate::state::{canonical_header_key, get_bsn_btc_state, get_epoch_chain_info};

const C1: &str = "07-tendermint-0";
const C2: &str = "07-tendermint-1";

#[test]
fn first_send_is_deep_enough_window() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(200)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");

    // an open channel alone does not trigger a broadcast
    suite.next_block(|_, _| {});
    assert!(suite.sent_packets("channel-0").is_empty());

    suite.connect("channel-0");
    let expected: Vec<u32> = (194..=200).collect();
    assert_eq!(suite.sent_btc_header_heights("channel-0"), vec![expected.clone()]);
    assert_eq!(suite.last_sent_heights(C1), expected);
}

#[test]
fn incremental_send_after_new_headers() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(200)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");
    suite.connect("channel-0");

    suite.extend_btc(10);
    let sent = suite.sent_btc_header_heights("channel-0");
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1], (201..=210).collect::<Vec<_>>());
    assert_eq!(suite.last_sent_heights(C1), (201..=210).collect::<Vec<_>>());

    // nothing new, nothing sent
    suite.next_block(|k, ctx| k.after_btc_header_inserted(ctx));
    assert_eq!(suite.sent_btc_header_heights("channel-0").len(), 2);
}

#[test]
fn deep_reorg_resends_window() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(200)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");
    suite.connect("channel-0");
    suite.extend_btc(10);

    suite.reorg_btc(180, 220);
    let sent = suite.sent_btc_header_heights("channel-0");
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2], (214..=220).collect::<Vec<_>>());
    assert_eq!(suite.last_sent_heights(C1), (214..=220).collect::<Vec<_>>());

    let state = get_bsn_btc_state(&suite.storage, C1).unwrap();
    for header in state.last_sent_headers() {
        assert!(suite.app.keeper().is_canonical(header).unwrap());
    }
}

#[test]
fn headers_are_chunked_per_packet() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(50)
        .with_finalization_depth(6)
        .with_max_headers_per_packet(3)
        .build();
    suite.add_consumer(C1, "channel-0");
    suite.connect("channel-0");

    assert_eq!(
        suite.sent_btc_header_heights("channel-0"),
        vec![vec![44, 45, 46], vec![47, 48, 49], vec![50]]
    );
    assert_eq!(suite.last_sent_heights(C1), (44..=50).collect::<Vec<_>>());
}

#[test]
fn timestamp_carries_header_of_the_epoch() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(30)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");
    suite.connect("channel-0");

    suite.set_epoch(5);
    suite.submit_header(C1, 41);
    suite.submit_header(C1, 42);
    suite.end_epoch(5);
    suite.set_epoch(6);
    suite.seal_epoch(5);

    let snapshot = get_epoch_chain_info(&suite.storage, 5, C1).unwrap();
    let proof = snapshot.proof_header_in_epoch.unwrap();
    assert_eq!(proof.ops[0].key, canonical_header_key(C1, 42));

    suite.finalize_epoch(5);
    let timestamps = suite.sent_btc_timestamps("channel-0");
    assert_eq!(timestamps.len(), 1);
    let timestamp = &timestamps[0];

    let header = timestamp.header.as_ref().unwrap();
    assert_eq!(header.height, 42);
    assert_eq!(header.babylon_epoch, 5);
    assert_eq!(timestamp.epoch_info.as_ref().unwrap().epoch_number, 5);
    assert_eq!(timestamp.raw_checkpoint.as_ref().unwrap().epoch_num, 5);
    assert!(timestamp.btc_submission_key.is_some());

    let proof = timestamp.proof.as_ref().unwrap();
    assert_eq!(
        proof.proof_consumer_header_in_epoch.as_ref().unwrap().ops[0].key,
        canonical_header_key(C1, 42)
    );
    assert!(proof.proof_epoch_sealed.is_some());
    assert_eq!(proof.proof_epoch_submitted.len(), 2);

    // the consumer already has every BTC header
    assert!(timestamp.btc_headers.as_ref().unwrap().headers.is_empty());
}

#[test]
fn timestamp_without_consumer_activity() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(30)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");

    suite.set_epoch(2);
    suite.submit_header(C1, 10);
    suite.set_epoch(5);
    suite.end_epoch(5);
    suite.seal_epoch(5);

    let snapshot = get_epoch_chain_info(&suite.storage, 5, C1).unwrap();
    assert_eq!(snapshot.proof_header_in_epoch, None);
    assert_eq!(
        snapshot
            .chain_info
            .unwrap()
            .latest_header
            .unwrap()
            .babylon_epoch,
        2
    );
    assert!(suite.app.store_queries().is_empty());

    suite.finalize_epoch(5);
    let timestamps = suite.sent_btc_timestamps("channel-0");
    assert_eq!(timestamps.len(), 1);
    let timestamp = &timestamps[0];
    assert_eq!(timestamp.header, None);

    let proof = timestamp.proof.as_ref().unwrap();
    assert_eq!(proof.proof_consumer_header_in_epoch, None);
    assert!(proof.proof_epoch_sealed.is_some());
    assert_eq!(proof.proof_epoch_submitted.len(), 2);

    // nothing was sent on the channel before: the 7 header window grows by
    // the 7 headers the consumer is missing
    let btc_headers = &timestamp.btc_headers.as_ref().unwrap().headers;
    assert_eq!(heights(btc_headers), (17..=30).collect::<Vec<_>>());
    assert_eq!(suite.last_sent_heights(C1), (17..=30).collect::<Vec<_>>());
}

#[test]
fn finalized_genesis_epoch_sends_no_timestamp() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(30)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");
    suite.submit_header(C1, 10);

    // epoch 0 has no checkpoint, assembling its timestamp would panic
    suite.next_block(|k, ctx| k.after_raw_checkpoint_finalized(ctx, 0));
    assert!(suite.sent_packets("channel-0").is_empty());
    assert!(suite.last_sent_heights(C1).is_empty());
}

#[test]
fn timestamp_reaches_every_consumer() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(30)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");
    suite.add_consumer(C2, "channel-1");
    suite.app.channels.fail_sends_on("channel-1");

    suite.set_epoch(3);
    suite.submit_header(C1, 7);
    suite.submit_header(C2, 9);
    suite.end_epoch(3);
    suite.seal_epoch(3);
    suite.finalize_epoch(3);

    // a failing consumer does not hold back the others
    assert_eq!(suite.sent_btc_timestamps("channel-0").len(), 1);
    assert!(suite.sent_btc_timestamps("channel-1").is_empty());
    assert!(suite.last_sent_heights(C2).is_empty());
}

#[test]
fn fork_headers_follow_the_highest_fork() {
    let mut suite = SuiteBuilder::new().build();
    suite.add_consumer(C1, "channel-0");

    suite.submit_header(C1, 100);
    suite.app.freeze_client(C1);

    suite.submit_header(C1, 100);
    let info = suite.query_chain_info(C1);
    assert_eq!(info.latest_header.as_ref().unwrap().height, 100);
    assert_eq!(info.timestamped_headers_count, 1);
    let fork_heights: Vec<u64> = info.latest_forks.headers.iter().map(|h| h.height).collect();
    assert_eq!(fork_heights, vec![100]);

    suite.submit_header(C1, 101);
    let info = suite.query_chain_info(C1);
    let fork_heights: Vec<u64> = info.latest_forks.headers.iter().map(|h| h.height).collect();
    assert_eq!(fork_heights, vec![101]);

    suite.submit_header(C1, 99);
    let info = suite.query_chain_info(C1);
    let fork_heights: Vec<u64> = info.latest_forks.headers.iter().map(|h| h.height).collect();
    assert_eq!(fork_heights, vec![101]);
    assert_eq!(info.latest_header.unwrap().height, 100);
}

#[test]
fn unregistered_client_updates_are_ignored() {
    let mut suite = SuiteBuilder::new().build();
    suite.submit_header(C2, 5);
    assert!(crate::state::get_chain_info(&suite.storage, C2).is_err());
}

#[test]
fn staking_events_follow_header_broadcast() {
    let mut suite = SuiteBuilder::new()
        .with_btc_headers(20)
        .with_finalization_depth(6)
        .build();
    suite.add_consumer(C1, "channel-0");
    suite
        .app
        .queue_staking_events(C1, BtcStakingIbcPacket::default());

    suite.connect("channel-0");
    let packets = suite.sent_packets("channel-0");
    assert_eq!(packets.len(), 2);
    assert!(matches!(packets[0], OutboundPacketType::BtcHeaders(_)));
    assert!(matches!(packets[1], OutboundPacketType::BtcStaking(_)));
    assert!(suite.app.staking_event_batches().is_empty());
}
