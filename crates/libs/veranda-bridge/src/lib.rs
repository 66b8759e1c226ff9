//! Server-side remote-object event bridge for web-rendered UI clients.
//!
//! Application code registers plain Rust listeners; the bridge keeps the
//! peer's notification channels enabled exactly while at least one listener
//! is registered, decodes inbound notifications into typed events, and fans
//! them out in registration order. Inbound property-setter calls address
//! widgets through the opaque identifiers the rendering layer assigned, and
//! tolerate widgets that were disposed while the call was in flight.
//!
//! Entry points:
//!
//! - [`App`] — lifecycle events, back navigation, inactivity timer, screen
//!   protection
//! - [`Location`] — position tracking with once/continuous modes
//! - [`ItemHeightService`] — the `setItemHeight` call handler
//! - [`WidgetRegistry`] — identifier → live widget resolution
//!
//! Outbound traffic goes through the [`veranda_remote::RemoteObject`] seam;
//! nothing in this crate performs I/O or blocks.

pub mod app;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod item_height;
pub mod location;
pub mod registry;

pub use app::App;
pub use dispatch::EventDispatcher;
pub use error::BridgeError;
pub use event::{
    AppEvent, AppEventType, AppListener, BackNavigationChannel, BackNavigationListener,
    EventChannel,
};
pub use item_height::ItemHeightService;
pub use location::{
    Location, LocationCallback, LocationOptions, Position, PositionError, PositionErrorCode,
    TrackingMode,
};
pub use registry::{ItemHeightSupport, WidgetEntry, WidgetKind, WidgetRegistry};
