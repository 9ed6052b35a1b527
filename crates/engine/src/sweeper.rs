// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The periodic re-evaluator.
//!
//! Two independent timers, both owned by the `Sweeper` so teardown is a
//! method call rather than a leaked interval:
//!
//! - **Display tick** (1s): publishes "now" on a watch channel for
//!   countdown and elapsed-time rendering. Never mutates booking state.
//! - **Sweep tick** (60s): takes the store lock and runs one synchronous
//!   re-evaluation pass, so bookings that expire while the console sits
//!   idle still flip their room status. Derived flags can therefore lag
//!   reality by up to one sweep interval; that staleness is an accepted
//!   bound of the design.

use crate::clock::Clock;
use crate::store::Store;
use std::sync::Arc;
use std::time::Duration;
use time::PrimitiveDateTime;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::debug;

/// Default cadence of the display tick.
pub const DISPLAY_TICK: Duration = Duration::from_secs(1);

/// Default cadence of the re-evaluation sweep.
pub const SWEEP_TICK: Duration = Duration::from_secs(60);

/// Owns the two re-evaluation timers.
///
/// Dropping the sweeper (or calling `stop`) aborts both tasks; no tick
/// outlives it.
pub struct Sweeper {
    now_rx: watch::Receiver<PrimitiveDateTime>,
    display_handle: JoinHandle<()>,
    sweep_handle: JoinHandle<()>,
}

impl Sweeper {
    /// Starts both timers against a shared store.
    ///
    /// # Arguments
    ///
    /// * `store` - The store the sweep tick re-evaluates
    /// * `clock` - The clock both ticks read from
    /// * `display_tick` - Cadence of the display "now" publication
    /// * `sweep_tick` - Cadence of the full re-evaluation pass
    #[must_use]
    pub fn start(
        store: Arc<Mutex<Store>>,
        clock: Arc<dyn Clock>,
        display_tick: Duration,
        sweep_tick: Duration,
    ) -> Self {
        let (now_tx, now_rx) = watch::channel(clock.now());

        let display_clock: Arc<dyn Clock> = Arc::clone(&clock);
        let display_handle: JoinHandle<()> = tokio::spawn(async move {
            let mut interval = tokio::time::interval(display_tick);
            // the first tick completes immediately; skip it so the channel
            // starts from the value seeded above
            interval.tick().await;
            loop {
                interval.tick().await;
                now_tx.send_replace(display_clock.now());
            }
        });

        let sweep_handle: JoinHandle<()> = tokio::spawn(async move {
            let mut interval = tokio::time::interval(sweep_tick);
            interval.tick().await;
            loop {
                interval.tick().await;
                store.lock().await.sweep_once();
            }
        });

        Self {
            now_rx,
            display_handle,
            sweep_handle,
        }
    }

    /// Subscribes to the display tick's "now" publication.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PrimitiveDateTime> {
        self.now_rx.clone()
    }

    /// Stops both timers.
    pub fn stop(&self) {
        debug!("Stopping re-evaluation timers");
        self.display_handle.abort();
        self.sweep_handle.abort();
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.stop();
    }
}
