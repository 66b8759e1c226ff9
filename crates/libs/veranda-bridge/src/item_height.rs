use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::BridgeError;
use crate::registry::{WidgetEntry, WidgetRegistry};

/// Operation name under which the peer pushes a measured row height.
pub const SET_ITEM_HEIGHT: &str = "setItemHeight";

#[derive(Debug, Deserialize)]
struct SetItemHeightParams {
    target: String,
    #[serde(rename = "itemHeight")]
    item_height: i32,
}

/// Handles inbound `setItemHeight` calls from the peer.
///
/// The client measures row heights per device and pushes them back to the
/// server; by the time a call arrives the addressed widget may already be
/// disposed, so an unresolved target completes silently. An unknown
/// operation name is a protocol mismatch and is rejected instead.
pub struct ItemHeightService {
    registry: Arc<WidgetRegistry>,
}

impl ItemHeightService {
    pub fn new(registry: Arc<WidgetRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatches one inbound call addressed to this service.
    pub fn handle_call(&self, operation: &str, parameters: JsonValue) -> Result<(), BridgeError> {
        if operation != SET_ITEM_HEIGHT {
            log::warn!("item height service received unsupported operation {operation:?}");
            return Err(BridgeError::unsupported_operation(operation));
        }
        let params: SetItemHeightParams = serde_json::from_value(parameters)
            .map_err(|err| BridgeError::invalid_input(err.to_string()))?;
        match self.registry.resolve(&params.target) {
            Some(entry) => entry.widget().set_custom_item_height(params.item_height),
            None => log::debug!(
                "item height target {:?} is gone, ignoring",
                params.target
            ),
        }
        Ok(())
    }

    /// Resolves an identifier to its live widget, or `None` when the widget
    /// is unknown or already disposed.
    pub fn find_object(&self, id: &str) -> Option<WidgetEntry> {
        self.registry.resolve(id)
    }
}
