use std::sync::Arc;

use serde_json::{json, Value as JsonValue};

use veranda_remote::RemoteObject;

use crate::dispatch::EventDispatcher;
use crate::error::BridgeError;
use crate::event::{
    AppEvent, AppEventType, AppListener, BackNavigationChannel, BackNavigationListener,
    EventChannel,
};

const START_INACTIVITY_TIMER: &str = "startInactivityTimer";
const STOP_INACTIVITY_TIMER: &str = "stopInactivityTimer";
const SCREEN_PROTECTED: &str = "screenProtected";

/// Application-level facade over the client shell's service object.
///
/// Owns one remote channel, the lifecycle and back-navigation listener
/// bookkeeping, and the local shadow of the screen-protection flag. One
/// instance per client session.
pub struct App {
    remote: Arc<dyn RemoteObject>,
    event_listeners: EventDispatcher<AppEventType, dyn AppListener>,
    back_navigation_listeners: EventDispatcher<BackNavigationChannel, dyn BackNavigationListener>,
    screen_protected: Option<bool>,
}

impl App {
    pub fn new(remote: Arc<dyn RemoteObject>) -> Self {
        Self {
            event_listeners: EventDispatcher::new(remote.clone()),
            back_navigation_listeners: EventDispatcher::new(remote.clone()),
            remote,
            screen_protected: None,
        }
    }

    pub fn add_event_listener(&mut self, event_type: AppEventType, listener: Arc<dyn AppListener>) {
        self.event_listeners.add(event_type, listener);
    }

    pub fn remove_event_listener(
        &mut self,
        event_type: AppEventType,
        listener: &Arc<dyn AppListener>,
    ) {
        self.event_listeners.remove(event_type, listener);
    }

    pub fn add_back_navigation_listener(&mut self, listener: Arc<dyn BackNavigationListener>) {
        self.back_navigation_listeners.add(BackNavigationChannel, listener);
    }

    pub fn remove_back_navigation_listener(&mut self, listener: &Arc<dyn BackNavigationListener>) {
        self.back_navigation_listeners.remove(BackNavigationChannel, listener);
    }

    /// Asks the client to raise an inactivity notification after `seconds`
    /// of idle time. Validated locally: nothing is transmitted for a
    /// negative duration.
    pub fn start_inactivity_timer(&self, seconds: i32) -> Result<(), BridgeError> {
        if seconds < 0 {
            return Err(BridgeError::invalid_input(format!(
                "inactivity time must be non-negative, got {seconds}"
            )));
        }
        self.remote.call(
            START_INACTIVITY_TIMER,
            Some(json!({ "inactivityTime": seconds })),
        );
        Ok(())
    }

    /// Cancels a previously started inactivity timer on the client.
    pub fn stop_inactivity_timer(&self) {
        self.remote.call(STOP_INACTIVITY_TIMER, None);
    }

    /// Toggles client-side screen protection (e.g. obscuring the app in the
    /// task switcher). The flag is shadowed locally and only transmitted
    /// when it actually changes.
    pub fn set_screen_protected(&mut self, protected: bool) {
        if self.screen_protected == Some(protected) {
            return;
        }
        self.screen_protected = Some(protected);
        self.remote
            .set_property(SCREEN_PROTECTED, JsonValue::Bool(protected));
    }

    /// Last value handed to [`set_screen_protected`](Self::set_screen_protected);
    /// `false` before any set. Never queries the peer.
    pub fn is_screen_protected(&self) -> bool {
        self.screen_protected.unwrap_or(false)
    }

    /// Inbound entry point for notifications addressed to this facade.
    ///
    /// Unknown channel names are dropped with a warning; they indicate a
    /// peer speaking a newer protocol, not a local fault.
    pub fn notify(&self, event: &str, properties: Option<&JsonValue>) {
        if event == BackNavigationChannel.channel_name() {
            self.back_navigation_listeners
                .dispatch(BackNavigationChannel, |listener| listener.navigated_back());
            return;
        }
        match AppEventType::from_channel_name(event) {
            Some(event_type) => {
                let decoded = AppEvent::new(event_type, properties);
                self.event_listeners
                    .dispatch(event_type, |listener| listener.handle_event(&decoded));
            }
            None => log::warn!("dropping notification for unknown channel {event:?}"),
        }
    }
}
