//! Open SSE sessions.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::protocol::JsonRpcResponse;

/// Sending half of a session's outbound message queue.
pub(crate) type MessageSender = UnboundedSender<JsonRpcResponse>;

/// Registry of SSE sessions keyed by session id.
///
/// Each session owns an unbounded queue; responses pushed to it are written
/// to the client's event stream.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, MessageSender>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session, returning its id and the receiving half of its queue.
    pub(crate) async fn open(&self) -> (Uuid, UnboundedReceiver<JsonRpcResponse>) {
        let id = Uuid::new_v4();
        let (tx, rx) = unbounded();
        self.sessions.write().await.insert(id, tx);
        (id, rx)
    }

    /// Returns the queue of an open session.
    pub(crate) async fn sender(&self, id: Uuid) -> Option<MessageSender> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Closes a session. Returns false if it was not open.
    pub async fn close(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Returns the number of open sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if no session is open.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Closes its session when the event stream holding it is dropped.
#[derive(Debug)]
pub(crate) struct SessionGuard {
    id: Uuid,
    registry: SessionRegistry,
}

impl SessionGuard {
    pub(crate) const fn new(id: Uuid, registry: SessionRegistry) -> Self {
        Self { id, registry }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let id = self.id;
        let registry = self.registry.clone();
        // No runtime means the server is shutting down and the map goes with it.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                if registry.close(id).await {
                    info!(session_id = %id, "SSE session closed");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_open_send_close() {
        let registry = SessionRegistry::new();
        let (id, mut rx) = registry.open().await;
        assert_eq!(registry.len().await, 1);

        let sender = registry.sender(id).await.unwrap();
        sender
            .unbounded_send(JsonRpcResponse::success(json!(1), json!({})))
            .unwrap();
        assert_eq!(rx.next().await.unwrap().id, json!(1));

        assert!(registry.close(id).await);
        assert!(!registry.close(id).await);
        assert!(registry.is_empty().await);
        assert!(registry.sender(id).await.is_none());
    }

    #[tokio::test]
    async fn test_guard_closes_session() {
        let registry = SessionRegistry::new();
        let (id, _rx) = registry.open().await;

        drop(SessionGuard::new(id, registry.clone()));

        for _ in 0..50 {
            if registry.is_empty().await {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("session {id} was not closed");
    }
}
