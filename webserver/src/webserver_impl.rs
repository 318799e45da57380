//! Main webserver implementation
//!
//! `ForumServer` serves the forum page and pushes every new view to connected
//! browsers. Presentation and client management are injected, so the router
//! can be driven with mocks in tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::header,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use futures_util::{SinkExt, StreamExt};
use rand::Rng;
use serde_json::json;
use shared::{ClientMessage, Component, ForumView, forum_debug, forum_error, forum_info, forum_warn, logging};
use tokio::sync::{Mutex, mpsc, watch};
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::error::{ForumError, ForumResult};
use crate::services::{TextPresenter, UpdateLoop};
use crate::traits::{Presenter, WebSocketManager};

const FORUM_SCRIPT: &str = include_str!("../static/forum.js");
const FORUM_STYLESHEET: &str = include_str!("../static/forum.css");

/// Outgoing message buffer per browser
const CLIENT_CHANNEL_CAPACITY: usize = 32;

/// Forum webserver with dependency injection
pub struct ForumServer<P, W> {
    view_rx: watch::Receiver<ForumView>,
    presenter: Arc<P>,
    websocket_manager: Arc<W>,
    /// Held while a view is queued to clients so every client sees views in publish order
    view_gate: Arc<Mutex<()>>,
}

impl<P, W> Clone for ForumServer<P, W> {
    fn clone(&self) -> Self {
        Self {
            view_rx: self.view_rx.clone(),
            presenter: self.presenter.clone(),
            websocket_manager: self.websocket_manager.clone(),
            view_gate: self.view_gate.clone(),
        }
    }
}

impl<P, W> ForumServer<P, W>
where
    P: Presenter + 'static,
    W: WebSocketManager + 'static,
{
    pub fn new(view_rx: watch::Receiver<ForumView>, presenter: P, websocket_manager: W) -> Self {
        Self {
            view_rx,
            presenter: Arc::new(presenter),
            websocket_manager: Arc::new(websocket_manager),
            view_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Snapshot of the latest published view
    pub fn current_view(&self) -> ForumView {
        self.view_rx.borrow().clone()
    }

    pub fn websocket_manager(&self) -> &Arc<W> {
        &self.websocket_manager
    }

    /// Register a browser and queue the latest view for it
    ///
    /// The view is read under the same gate the broadcaster holds, so no older
    /// view can be queued behind a newer broadcast.
    pub async fn register_client(&self, client_id: Uuid, sender: mpsc::Sender<ClientMessage>) -> ForumResult<()> {
        let _gate = self.view_gate.lock().await;

        self.websocket_manager.add_client(client_id, sender).await?;
        let view = self.current_view();
        self.websocket_manager.send_to_client(client_id, ClientMessage::render(view)).await
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(serve_index::<P, W>))
            .route("/plain", get(serve_plain::<P, W>))
            .route("/api/view", get(view_handler::<P, W>))
            .route("/ws", get(websocket_handler::<P, W>))
            .route("/static/forum.js", get(serve_script))
            .route("/static/forum.css", get(serve_stylesheet))
            .route("/health", get(health_check::<P, W>))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Forward every newly published view to all connected browsers
    pub fn spawn_view_broadcaster(&self) -> JoinHandle<()> {
        let mut views = self.view_rx.clone();
        let websocket_manager = self.websocket_manager.clone();
        let view_gate = self.view_gate.clone();

        tokio::spawn(async move {
            while views.changed().await.is_ok() {
                let _gate = view_gate.lock().await;
                let view = views.borrow_and_update().clone();
                match websocket_manager.broadcast(ClientMessage::render(view)).await {
                    Ok(delivered) => {
                        forum_debug!(Component::WebServer, "🔄 Pushed new view to {} clients", delivered);
                    }
                    Err(e) => {
                        logging::log_error(Component::WebServer, "View broadcast", &e);
                    }
                }
            }
            forum_debug!(Component::WebServer, "View channel closed, broadcaster stopping");
        })
    }

    /// Run the update loop and serve HTTP until `shutdown` resolves
    pub async fn run<R, F>(&self, addr: SocketAddr, update_loop: UpdateLoop<R>, shutdown: F) -> ForumResult<()>
    where
        R: Rng + Send + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ForumError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        logging::log_startup(Component::UpdateLoop, &format!("update loop every {:?}", update_loop.period()));
        let update_task = tokio::spawn(update_loop.run());
        let broadcast_task = self.spawn_view_broadcaster();

        forum_info!(Component::WebServer, "🌐 Freelancer forum listening on http://{}", addr);

        let result = axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await;

        update_task.abort();
        broadcast_task.abort();

        result.map_err(|e| ForumError::ServerStartup(format!("Server error: {e}")))
    }
}

// HTTP Handlers

/// Serve the forum page
async fn serve_index<P, W>(State(server): State<ForumServer<P, W>>) -> Response
where
    P: Presenter + 'static,
    W: WebSocketManager + 'static,
{
    let view = server.current_view();
    (
        [(header::CONTENT_TYPE, server.presenter.content_type())],
        server.presenter.present(&view),
    )
        .into_response()
}

/// Serve the forum as a plain text table
async fn serve_plain<P, W>(State(server): State<ForumServer<P, W>>) -> Response
where
    P: Presenter + 'static,
    W: WebSocketManager + 'static,
{
    let presenter = TextPresenter::new();
    let view = server.current_view();
    ([(header::CONTENT_TYPE, presenter.content_type())], presenter.present(&view)).into_response()
}

/// Current view model as JSON
async fn view_handler<P, W>(State(server): State<ForumServer<P, W>>) -> Json<ForumView>
where
    P: Presenter + 'static,
    W: WebSocketManager + 'static,
{
    Json(server.current_view())
}

async fn serve_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], FORUM_SCRIPT)
}

async fn serve_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], FORUM_STYLESHEET)
}

/// Health check endpoint
async fn health_check<P, W>(State(server): State<ForumServer<P, W>>) -> Json<serde_json::Value>
where
    P: Presenter + 'static,
    W: WebSocketManager + 'static,
{
    let records = server.view_rx.borrow().summary.count;
    let clients = server.websocket_manager.client_count().await;

    Json(json!({
        "status": "healthy",
        "records": records,
        "clients": clients,
    }))
}

/// Handle WebSocket connections
async fn websocket_handler<P, W>(ws: WebSocketUpgrade, State(server): State<ForumServer<P, W>>) -> Response
where
    P: Presenter + 'static,
    W: WebSocketManager + 'static,
{
    ws.on_upgrade(move |socket| handle_websocket(socket, server))
}

/// Handle individual WebSocket connection
async fn handle_websocket<P, W>(socket: WebSocket, server: ForumServer<P, W>)
where
    P: Presenter + 'static,
    W: WebSocketManager + 'static,
{
    let client_id = Uuid::new_v4();
    forum_info!(Component::WebSocket, "🔗 New WebSocket connection: {}", client_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ClientMessage>(CLIENT_CHANNEL_CAPACITY);

    // The page may have been served before the latest tick
    if let Err(e) = server.register_client(client_id, tx).await {
        forum_error!(Component::WebSocket, "Failed to register WebSocket client {}: {}", client_id, e);
        let _ = server.websocket_manager.remove_client(client_id).await;
        return;
    }

    let outgoing_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let json_msg = match message.to_json() {
                Ok(json) => json,
                Err(e) => {
                    forum_error!(Component::WebSocket, "Failed to serialize client message: {}", e);
                    continue;
                }
            };

            if let Err(e) = sender.send(Message::Text(json_msg)).await {
                forum_warn!(Component::WebSocket, "Failed to send message to client {}: {}", client_id, e);
                break;
            }
        }
    });

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Close(_)) => break,
            Ok(Message::Text(text)) => {
                forum_debug!(Component::WebSocket, "📨 Ignoring message from client {}: {}", client_id, text);
            }
            Ok(_) => {}
            Err(e) => {
                forum_warn!(Component::WebSocket, "WebSocket error for client {}: {}", client_id, e);
                break;
            }
        }
    }

    outgoing_task.abort();
    if let Err(e) = server.websocket_manager.remove_client(client_id).await {
        forum_error!(Component::WebSocket, "Failed to unregister client {}: {}", client_id, e);
    }

    forum_info!(Component::WebSocket, "🔌 WebSocket connection ended for client: {}", client_id);
}
