// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use room_desk::{AppState, Command, apply, sweep};
use room_desk_persistence::Persistence;
use std::sync::Arc;
use time::PrimitiveDateTime;
use tracing::{debug, warn};

/// The store owns the aggregate.
///
/// Every other component either reads a snapshot or requests a named
/// transition through `dispatch`; nothing else holds a second copy that
/// could diverge. Transitions run synchronously to completion: apply the
/// reducer, then mirror the new state to persistence.
///
/// A failed persistence write is logged and swallowed: the in-memory
/// state stays authoritative and the application keeps running on its
/// last-good blob.
pub struct Store {
    state: AppState,
    persistence: Persistence,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Creates a store, rehydrating the aggregate from persistence.
    #[must_use]
    pub fn new(persistence: Persistence, clock: Arc<dyn Clock>) -> Self {
        let state: AppState = persistence.load();
        Self {
            state,
            persistence,
            clock,
        }
    }

    /// Returns the current aggregate.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Clones the aggregate for read-side consumers.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    /// Returns the instant the store's clock currently reads.
    #[must_use]
    pub fn now(&self) -> PrimitiveDateTime {
        self.clock.now()
    }

    /// Applies a command and mirrors the result to persistence.
    pub fn dispatch(&mut self, command: Command) {
        let now: PrimitiveDateTime = self.clock.now();
        self.state = apply(&self.state, command, now);
        self.persist();
    }

    /// Runs one synchronous re-evaluation pass over the settled state:
    /// expired moments complete, room flags realign with derived
    /// occupancy.
    pub fn sweep_once(&mut self) {
        let now: PrimitiveDateTime = self.clock.now();
        let next: AppState = sweep(&self.state, now);
        if next == self.state {
            return;
        }
        debug!("Re-evaluation sweep changed state");
        self.state = next;
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(err) = self.persistence.save(&self.state) {
            warn!(error = %err, "Failed to persist state, keeping in-memory state authoritative");
        }
    }
}
