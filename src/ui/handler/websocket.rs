//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionIdFactory, SessionBinding},
    infrastructure::dto::websocket::IncomingMessage,
    ui::state::{AppState, ConnectQuery},
    usecase::{ConnectMemberUseCase, DisconnectMemberUseCase, SendMessageUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> impl IntoResponse {
    // Resolve the session binding once; every later operation takes it
    // explicitly. An absent or invalid binding still upgrades — the
    // connection just never gains presence (silent no-op policy).
    let binding = query.into_binding();
    if binding.is_none() {
        tracing::debug!("websocket upgrade without a usable session binding");
    }

    ws.on_upgrade(move |socket| handle_socket(socket, state, binding))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, binding: Option<SessionBinding>) {
    let (mut sender, mut receiver) = socket.split();

    let conn_id = ConnectionIdFactory::generate();
    // Events for this connection flow through this channel; `tx` stays
    // alive here so an unbound connection idles instead of closing.
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    if let Some(binding) = &binding {
        let connect_usecase =
            ConnectMemberUseCase::new(state.store.clone(), state.delivery.clone());
        if let Err(e) = connect_usecase.execute(binding, &conn_id, tx.clone()).await {
            tracing::warn!("presence setup failed for '{}': {}", binding.name, e);
        }
    }

    let state_clone = state.clone();
    let binding_clone = binding.clone();

    // Task: pump inbound frames from this client into the message router
    let mut recv_task = tokio::spawn(async move {
        let send_usecase =
            SendMessageUseCase::new(state_clone.store.clone(), state_clone.delivery.clone());

        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let incoming = match serde_json::from_str::<IncomingMessage>(&text) {
                        Ok(incoming) => incoming,
                        Err(e) => {
                            tracing::warn!("failed to parse inbound frame: {}", e);
                            continue;
                        }
                    };

                    let Some(binding) = &binding_clone else {
                        tracing::debug!("message from unbound connection dropped");
                        continue;
                    };

                    if let Err(e) = send_usecase.execute(binding, incoming.data).await {
                        tracing::warn!("failed to route message from '{}': {}", binding.name, e);
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::debug!("client requested close");
                    break;
                }
                _ => {}
            }
        }
    });

    // Task: forward events enqueued for this connection to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if sender.send(Message::Text(event.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // The connection leaves the delivery group first, so the member-list
    // broadcast below only reaches the remaining members.
    state.delivery.leave(&conn_id).await;

    if let Some(binding) = &binding {
        let disconnect_usecase =
            DisconnectMemberUseCase::new(state.store.clone(), state.delivery.clone());
        if let Err(e) = disconnect_usecase.execute(binding).await {
            tracing::warn!("presence teardown failed for '{}': {}", binding.name, e);
        }
    }
}
