//! Connection registry.
//!
//! Not synchronized: only the hub coordinator task touches it.

use std::collections::{HashMap, hash_map::Entry};

use super::connection::{Connection, ConnectionId};

#[derive(Default)]
pub struct Registry {
    connections: HashMap<ConnectionId, Box<dyn Connection>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a connection. Returns `false` and leaves the registry untouched
    /// when `id` is already registered.
    pub fn add(&mut self, id: ConnectionId, connection: Box<dyn Connection>) -> bool {
        match self.connections.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(connection);
                true
            }
        }
    }

    /// Stop tracking a connection, handing it back to the caller.
    pub fn remove(&mut self, id: &ConnectionId) -> Option<Box<dyn Connection>> {
        self.connections.remove(id)
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Visit every registered connection, in no particular order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&ConnectionId, &mut Box<dyn Connection>)> {
        self.connections.iter_mut()
    }

    /// Remove every connection.
    pub fn drain(&mut self) -> impl Iterator<Item = (ConnectionId, Box<dyn Connection>)> {
        self.connections.drain()
    }
}
