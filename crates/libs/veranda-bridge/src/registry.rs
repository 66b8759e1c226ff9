use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Widget kinds addressable through the registry.
///
/// `Grid` is the flat, table-like item container; `Outline` the hierarchical
/// one. The two are mutually exclusive, but both carry the custom item
/// height capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Grid,
    Outline,
}

/// Capability shared by every widget whose rows can take a custom height.
pub trait ItemHeightSupport: Send + Sync {
    /// Overrides the toolkit's measured row height, in pixels.
    fn set_custom_item_height(&self, height: i32);
}

/// One live registration: the widget's kind plus its capability handle,
/// both bound when the widget is created.
#[derive(Clone)]
pub struct WidgetEntry {
    kind: WidgetKind,
    widget: Arc<dyn ItemHeightSupport>,
}

impl WidgetEntry {
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn widget(&self) -> &dyn ItemHeightSupport {
        self.widget.as_ref()
    }
}

/// Process-wide map from opaque remote identifiers to live widgets.
///
/// The rendering layer assigns an identifier when a widget is created and
/// removes the binding on dispose, so a lookup for an identifier the peer
/// still holds may legitimately find nothing. Registration and removal are
/// atomic with respect to lookup.
///
/// Owned and injected explicitly — consumers hold an `Arc` rather than
/// reaching for process globals, so tests get isolated instances.
#[derive(Default)]
pub struct WidgetRegistry {
    entries: Mutex<HashMap<String, WidgetEntry>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `id` to a widget. A stale binding under the same identifier is
    /// replaced.
    pub fn register(
        &self,
        id: impl Into<String>,
        kind: WidgetKind,
        widget: Arc<dyn ItemHeightSupport>,
    ) {
        let entry = WidgetEntry { kind, widget };
        self.entries
            .lock()
            .expect("registry mutex poisoned")
            .insert(id.into(), entry);
    }

    /// Drops the binding for `id`, if any. Called when the widget is
    /// disposed.
    pub fn unregister(&self, id: &str) {
        self.entries
            .lock()
            .expect("registry mutex poisoned")
            .remove(id);
    }

    /// Looks up the live widget for `id`. Unknown and stale identifiers
    /// resolve to `None`, never an error.
    pub fn resolve(&self, id: &str) -> Option<WidgetEntry> {
        self.entries
            .lock()
            .expect("registry mutex poisoned")
            .get(id)
            .cloned()
    }
}
