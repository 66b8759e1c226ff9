use serde_json::Value as JsonValue;

/// Server-side handle for one object addressable by the remote peer.
///
/// All operations are fire-and-forget: delivery, ordering across objects and
/// session lifecycle belong to the transport, and a failed transmission is
/// not retried at this layer. Implementations must not block.
pub trait RemoteObject: Send + Sync {
    /// Toggles delivery of the named notification channel.
    fn listen(&self, event: &str, enabled: bool);

    /// Invokes a named operation on the peer.
    fn call(&self, method: &str, parameters: Option<JsonValue>);

    /// Updates a named property on the peer.
    fn set_property(&self, name: &str, value: JsonValue);
}
