use std::collections::HashMap;
use std::sync::Arc;

use veranda_remote::RemoteObject;

use crate::event::EventChannel;

/// Listener bookkeeping for one kind-family on one remote channel.
///
/// Listener sequences are ordered multisets: the same listener registered
/// twice is invoked twice per notification, and a removal drops only the
/// first pointer match. The remote listen toggle is transmitted exactly on
/// the empty→non-empty and non-empty→empty transitions of a kind's
/// sequence; every other add or remove leaves the channel state untouched.
pub struct EventDispatcher<K: EventChannel, L: ?Sized> {
    remote: Arc<dyn RemoteObject>,
    listeners: HashMap<K, Vec<Arc<L>>>,
}

impl<K: EventChannel, L: ?Sized> EventDispatcher<K, L> {
    pub fn new(remote: Arc<dyn RemoteObject>) -> Self {
        Self {
            remote,
            listeners: HashMap::new(),
        }
    }

    /// Appends `listener` to `kind`'s sequence, enabling the channel on the
    /// peer when the sequence was empty.
    pub fn add(&mut self, kind: K, listener: Arc<L>) {
        let sequence = self.listeners.entry(kind).or_default();
        if sequence.is_empty() {
            self.remote.listen(kind.channel_name(), true);
        }
        sequence.push(listener);
    }

    /// Removes the first registration matching `listener`, disabling the
    /// channel on the peer when the sequence drains. Removing a listener
    /// that was never registered is a silent no-op.
    pub fn remove(&mut self, kind: K, listener: &Arc<L>) {
        let Some(sequence) = self.listeners.get_mut(&kind) else {
            return;
        };
        let Some(position) = sequence
            .iter()
            .position(|registered| Arc::ptr_eq(registered, listener))
        else {
            return;
        };
        sequence.remove(position);
        if sequence.is_empty() {
            self.remote.listen(kind.channel_name(), false);
        }
    }

    /// Number of registrations currently held for `kind`.
    pub fn listener_count(&self, kind: K) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Invokes `notify` once per listener registered at the moment of the
    /// call, in registration order. The fan-out iterates a snapshot of the
    /// sequence, so the set for the current cycle is fixed when it starts.
    /// A kind with no listeners dispatches to nobody.
    pub fn dispatch(&self, kind: K, mut notify: impl FnMut(&L)) {
        let Some(sequence) = self.listeners.get(&kind) else {
            return;
        };
        let snapshot: Vec<Arc<L>> = sequence.clone();
        for listener in &snapshot {
            notify(listener);
        }
    }
}
