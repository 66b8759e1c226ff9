/// Errors surfaced by the bridge layer.
///
/// Stale identifiers are deliberately absent: a call addressing a widget
/// that was disposed moments earlier is the dominant race in the protocol
/// and is handled as a silent no-op, not an error. All variants are local
/// and synchronous; cross-process failure recovery belongs to the transport.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// Input rejected before any outbound effect was attempted.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The peer issued an operation name this side does not speak.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },
}

impl BridgeError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }
}
