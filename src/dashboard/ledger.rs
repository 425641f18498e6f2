//! Request bookkeeping
//!
//! Every load is tagged with a monotonically increasing id. Only the most
//! recently issued id of a slot may write into that slot; anything older is
//! a stale response and gets dropped.

use std::collections::HashMap;

/// A container that loads render into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum Slot {
    UsersTable,
    OwnerList,
    WheelList,
    Statistics,
    Modal,
}

/// Handle for one issued request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ticket {
    pub slot: Slot,
    pub id: u64,
}

#[derive(Debug, Default)]
pub struct RequestLedger {
    last_id: u64,
    latest: HashMap<Slot, u64>,
    in_flight: usize,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request for `slot`, superseding any earlier one.
    pub fn issue(&mut self, slot: Slot) -> Ticket {
        self.last_id += 1;
        self.latest.insert(slot, self.last_id);
        self.in_flight += 1;
        Ticket {
            slot,
            id: self.last_id,
        }
    }

    /// Record that the request behind `ticket` finished.
    ///
    /// Returns whether its response may be applied.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.is_current(ticket)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get(&ticket.slot) == Some(&ticket.id)
    }

    /// Make every outstanding request of `slot` stale.
    pub fn invalidate(&mut self, slot: Slot) {
        self.latest.remove(&slot);
    }

    /// Requests issued but not yet settled, stale ones included.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
