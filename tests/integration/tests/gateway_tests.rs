//! End-to-end gateway tests
//!
//! Each test runs a full event path: JSON frame, event routing, relay
//! services, presence registry, pushed events. Only the transport and
//! the SQL store are simulated.

use integration_tests::{build_state, TestClient};
use kollab_core::{DeliveryState, PushEvent};
use uuid::Uuid;

#[tokio::test]
async fn message_to_online_receiver_is_delivered() {
    let (state, store) = build_state();

    let mut creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();
    let mut brand = TestClient::connect(&state);
    brand.join("brand_1").await.unwrap();

    creator
        .send_message("creator_1", "brand_1", "Interested in the campaign?")
        .await
        .unwrap();

    // Receiver gets the message push
    let PushEvent::ReceiveMessage(message) = brand.recv().await else {
        panic!("expected receiveMessage");
    };
    assert_eq!(message.sender_id, "creator_1");
    assert_eq!(message.content, "Interested in the campaign?");

    // Sender gets the delivery ack
    let PushEvent::MessageDelivered(ack) = creator.recv().await else {
        panic!("expected messageDelivered");
    };
    assert_eq!(ack.message_id, message.id);

    // Persisted record advanced past sent
    assert_eq!(store.state_of(message.id), Some(DeliveryState::Delivered));
}

#[tokio::test]
async fn message_to_offline_receiver_stays_sent() {
    let (state, store) = build_state();

    let mut creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();

    creator
        .send_message("creator_1", "brand_1", "hello?")
        .await
        .unwrap();

    // Sender still gets the accepted-by-relay ack
    let PushEvent::MessageDelivered(ack) = creator.recv().await else {
        panic!("expected messageDelivered");
    };

    assert_eq!(store.state_of(ack.message_id), Some(DeliveryState::Sent));
}

#[tokio::test]
async fn mark_seen_notifies_original_sender() {
    let (state, store) = build_state();

    let mut creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();
    let mut brand = TestClient::connect(&state);
    brand.join("brand_1").await.unwrap();

    creator
        .send_message("creator_1", "brand_1", "hi")
        .await
        .unwrap();

    let PushEvent::ReceiveMessage(message) = brand.recv().await else {
        panic!("expected receiveMessage");
    };
    creator.drain();

    brand.mark_seen(message.id).await.unwrap();

    let PushEvent::MessageSeenUpdate(update) = creator.recv().await else {
        panic!("expected messageSeenUpdate");
    };
    assert_eq!(update.message_id, message.id);
    assert_eq!(store.state_of(message.id), Some(DeliveryState::Seen));
}

#[tokio::test]
async fn mark_seen_by_non_receiver_is_rejected() {
    let (state, store) = build_state();

    let mut creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();
    let intruder = TestClient::connect(&state);
    intruder.join("intruder").await.unwrap();

    creator
        .send_message("creator_1", "brand_1", "private")
        .await
        .unwrap();

    let PushEvent::MessageDelivered(ack) = creator.recv().await else {
        panic!("expected messageDelivered");
    };

    let err = intruder.mark_seen(ack.message_id).await.unwrap_err();
    let PushEvent::Error(payload) = err.to_push_event() else {
        panic!("expected error event");
    };
    assert_eq!(payload.code, "NOT_RECEIVER");

    // No mutation happened
    assert_eq!(store.state_of(ack.message_id), Some(DeliveryState::Sent));
}

#[tokio::test]
async fn mark_seen_before_join_is_rejected() {
    let (state, _store) = build_state();

    let unbound = TestClient::connect(&state);
    let err = unbound.mark_seen(Uuid::new_v4()).await.unwrap_err();

    let PushEvent::Error(payload) = err.to_push_event() else {
        panic!("expected error event");
    };
    assert_eq!(payload.code, "NOT_JOINED");
}

#[tokio::test]
async fn mark_seen_unknown_message_is_an_error() {
    let (state, _store) = build_state();

    let brand = TestClient::connect(&state);
    brand.join("brand_1").await.unwrap();

    let err = brand.mark_seen(Uuid::new_v4()).await.unwrap_err();
    let PushEvent::Error(payload) = err.to_push_event() else {
        panic!("expected error event");
    };
    assert_eq!(payload.code, "UNKNOWN_MESSAGE");
}

#[tokio::test]
async fn blank_message_is_rejected_without_persisting() {
    let (state, store) = build_state();

    let creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();

    let err = creator
        .send_message("creator_1", "brand_1", "   ")
        .await
        .unwrap_err();

    let PushEvent::Error(payload) = err.to_push_event() else {
        panic!("expected error event");
    };
    assert_eq!(payload.code, "EMPTY_CONTENT");
    assert!(store.is_empty());
}

#[tokio::test]
async fn reconnect_supersedes_older_handle() {
    let (state, _store) = build_state();

    let mut old = TestClient::connect(&state);
    old.join("brand_1").await.unwrap();
    let mut new = TestClient::connect(&state);
    new.join("brand_1").await.unwrap();

    // Pushes for the user land on the newest handle only
    let creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();
    creator
        .send_message("creator_1", "brand_1", "which tab are you on")
        .await
        .unwrap();

    assert!(matches!(new.recv().await, PushEvent::ReceiveMessage(_)));
    assert!(old.try_recv().is_none());
}

#[tokio::test]
async fn stale_disconnect_does_not_take_user_offline() {
    let (state, _store) = build_state();

    let old = TestClient::connect(&state);
    old.join("brand_1").await.unwrap();
    let new = TestClient::connect(&state);
    new.join("brand_1").await.unwrap();

    // Old socket finally times out after the reconnect
    old.disconnect().await;

    assert!(state.registry().is_online("brand_1"));

    // Still reachable through the newer handle
    let mut new = new;
    let creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();
    creator
        .send_message("creator_1", "brand_1", "still there?")
        .await
        .unwrap();
    assert!(matches!(new.recv().await, PushEvent::ReceiveMessage(_)));
}

#[tokio::test]
async fn disconnect_broadcasts_updated_online_set() {
    let (state, _store) = build_state();

    let brand = TestClient::connect(&state);
    brand.join("brand_1").await.unwrap();
    let mut creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();

    brand.disconnect().await;

    let PushEvent::UpdateUserStatus(status) = creator.recv().await else {
        panic!("expected updateUserStatus");
    };
    assert_eq!(status.online, vec!["creator_1".to_string()]);
    assert!(!state.registry().is_online("brand_1"));
}

#[tokio::test]
async fn typing_signal_reaches_receiver() {
    let (state, _store) = build_state();

    let creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();
    let mut brand = TestClient::connect(&state);
    brand.join("brand_1").await.unwrap();

    creator.typing("creator_1", "brand_1").await.unwrap();
    let PushEvent::Typing(payload) = brand.recv().await else {
        panic!("expected typing");
    };
    assert_eq!(payload.sender_id, "creator_1");

    creator.stop_typing("creator_1", "brand_1").await.unwrap();
    assert!(matches!(brand.recv().await, PushEvent::StopTyping(_)));
}

#[tokio::test]
async fn typing_to_offline_receiver_is_silently_dropped() {
    let (state, _store) = build_state();

    let creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();

    // No error even though nobody is listening
    creator.typing("creator_1", "brand_1").await.unwrap();
}

#[tokio::test]
async fn blank_join_leaves_handle_unbound() {
    let (state, _store) = build_state();

    let client = TestClient::connect(&state);
    client.join("   ").await.unwrap();

    assert!(!client.connection().is_bound().await);
    assert_eq!(state.registry().online_count(), 0);
}

#[tokio::test]
async fn malformed_frame_is_rejected() {
    let (state, _store) = build_state();

    let client = TestClient::connect(&state);
    let err = client.send_frame("{\"event\":\"launchMissiles\"}").await;
    assert!(err.is_err());

    // Registry untouched
    assert_eq!(state.registry().online_count(), 0);
}

#[tokio::test]
async fn conversation_history_is_oldest_first() {
    let (state, _store) = build_state();

    let creator = TestClient::connect(&state);
    creator.join("creator_1").await.unwrap();

    creator
        .send_message("creator_1", "brand_1", "first")
        .await
        .unwrap();
    creator
        .send_message("creator_1", "brand_1", "second")
        .await
        .unwrap();

    let history = state
        .message_relay()
        .history("brand_1", "creator_1")
        .await
        .unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].content, "first");
    assert_eq!(history[1].content, "second");
}
