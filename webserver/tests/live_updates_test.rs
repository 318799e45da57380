//! Tests for pushing new views to browsers
//!
//! Covers the path from an update loop tick to the WebSocket client channels,
//! with both the real manager and mocked services.

mod helpers;

use std::time::Duration;

use fixtures::*;
use freelancer_forum::traits::{MockPresenter, MockWebSocketManager};
use freelancer_forum::{HtmlPresenter, RealWebSocketManager, WebSocketManager};
use helpers::*;
use shared::ClientMessage;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Row counts of every render queued so far, in delivery order
fn queued_render_rows(rx: &mut mpsc::Receiver<ClientMessage>) -> Vec<usize> {
    let mut rows = Vec::new();
    while let Ok(message) = rx.try_recv() {
        if let ClientMessage::Render { view } = message {
            rows.push(view.row_count());
        }
    }
    rows
}

async fn next_render(rx: &mut mpsc::Receiver<ClientMessage>) -> shared::ForumView {
    loop {
        let message = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for render")
            .expect("client channel closed");
        if let ClientMessage::Render { view } = message {
            return view;
        }
    }
}

#[tokio::test]
async fn test_tick_reaches_connected_client() {
    let (server, mut update_loop) = create_test_server();
    let (tx, mut rx) = mpsc::channel(16);
    server.websocket_manager().add_client(Uuid::new_v4(), tx).await.unwrap();

    let broadcaster = server.spawn_view_broadcaster();

    update_loop.tick();
    let view = next_render(&mut rx).await;
    assert_eq!(view.row_count(), 6);

    update_loop.tick();
    let view = next_render(&mut rx).await;
    assert_eq!(view.row_count(), 7);
    assert_eq!(view, server.current_view());

    broadcaster.abort();
}

#[tokio::test]
async fn test_closed_client_is_dropped_after_tick() {
    let (server, mut update_loop) = create_test_server();

    let (open_tx, mut open_rx) = mpsc::channel(16);
    server.websocket_manager().add_client(Uuid::new_v4(), open_tx).await.unwrap();
    let (closed_tx, closed_rx) = mpsc::channel(16);
    server.websocket_manager().add_client(Uuid::new_v4(), closed_tx).await.unwrap();
    drop(closed_rx);

    let broadcaster = server.spawn_view_broadcaster();
    update_loop.tick();

    assert_eq!(next_render(&mut open_rx).await.row_count(), 6);
    let manager = server.websocket_manager().clone();
    assert!(wait_for_condition(|| { let m = manager.clone(); async move { m.client_count().await == 1 } }, 1_000).await);

    broadcaster.abort();
}

#[tokio::test]
async fn test_registering_after_pending_tick_ends_on_latest_view() {
    let (server, mut update_loop) = create_test_server();
    let broadcaster = server.spawn_view_broadcaster();

    // The broadcaster has not run yet, so the tick is still pending for it
    update_loop.tick();
    let (tx, mut rx) = mpsc::channel(16);
    server.register_client(Uuid::new_v4(), tx).await.unwrap();

    // Give the broadcaster its turn
    tokio::time::sleep(Duration::from_millis(50)).await;

    let rows = queued_render_rows(&mut rx);
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|&count| count == 6), "renders out of date: {rows:?}");

    broadcaster.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_clients_registering_during_ticks_never_end_stale() {
    let (server, mut update_loop) = create_test_server();
    let broadcaster = server.spawn_view_broadcaster();

    let ticker = tokio::spawn(async move {
        for _ in 0..40 {
            update_loop.tick();
            tokio::task::yield_now().await;
        }
        update_loop
    });

    let mut registrations = Vec::new();
    for _ in 0..16 {
        let server = server.clone();
        registrations.push(tokio::spawn(async move {
            let (tx, rx) = mpsc::channel(128);
            server.register_client(Uuid::new_v4(), tx).await.unwrap();
            rx
        }));
    }

    let mut receivers = Vec::new();
    for registration in registrations {
        receivers.push(registration.await.unwrap());
    }
    let update_loop = ticker.await.unwrap();
    let final_rows = update_loop.state().len();
    assert_eq!(server.current_view().row_count(), final_rows);

    // Let the broadcaster push the last view
    tokio::time::sleep(Duration::from_millis(200)).await;

    for rx in receivers.iter_mut() {
        let rows = queued_render_rows(rx);
        assert!(rows.windows(2).all(|pair| pair[0] <= pair[1]), "renders out of order: {rows:?}");
        assert_eq!(rows.last().copied(), Some(final_rows));
    }

    broadcaster.abort();
}

#[tokio::test]
async fn test_register_client_queues_ack_then_current_view() {
    let (server, mut update_loop) = create_test_server();
    update_loop.tick();

    let (tx, mut rx) = mpsc::channel(16);
    let client_id = Uuid::new_v4();
    server.register_client(client_id, tx).await.unwrap();

    match rx.try_recv() {
        Ok(ClientMessage::ConnectionAck { session_id, .. }) => assert_eq!(session_id, client_id),
        other => panic!("expected connection ack, got {other:?}"),
    }
    assert_eq!(queued_render_rows(&mut rx), vec![6]);
}

#[tokio::test]
async fn test_broadcaster_uses_injected_manager() {
    let (seen_tx, mut seen_rx) = mpsc::channel(4);

    let mut manager = MockWebSocketManager::new();
    manager.expect_broadcast().times(1).returning(move |message| {
        let _ = seen_tx.try_send(message);
        Ok(3)
    });

    let (server, mut update_loop) = create_test_server_with(HtmlPresenter::new(), manager);
    let broadcaster = server.spawn_view_broadcaster();

    update_loop.tick();

    let message = tokio::time::timeout(Duration::from_secs(2), seen_rx.recv())
        .await
        .unwrap()
        .unwrap();
    match message {
        ClientMessage::Render { view } => assert_eq!(view.row_count(), 6),
        other => panic!("expected render, got {other:?}"),
    }

    broadcaster.abort();
}

#[tokio::test]
async fn test_index_uses_injected_presenter() {
    let mut presenter = MockPresenter::new();
    presenter.expect_content_type().return_const("text/x-forum");
    presenter
        .expect_present()
        .times(1)
        .returning(|view| format!("{} rows", view.row_count()));

    let (server, _update_loop) = create_test_server_with(presenter, RealWebSocketManager::new());

    let response = get(server.build_router(), "/").await;

    assert_eq!(response.content_type.as_deref(), Some("text/x-forum"));
    assert_eq!(response.body, "5 rows");
}

#[tokio::test]
async fn test_health_reports_clients() {
    let mut manager = MockWebSocketManager::new();
    manager.expect_client_count().returning(|| 2);

    let (server, _update_loop) = create_test_server_with(HtmlPresenter::new(), manager);
    let response = get(server.build_router(), "/health").await;
    let health: serde_json::Value = serde_json::from_str(&response.body).unwrap();

    assert_eq!(health["clients"], 2);
}
