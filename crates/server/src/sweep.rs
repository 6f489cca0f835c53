// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Auto-checkout sweep worker.
//!
//! A background task that closes out expired bookings: every active
//! booking whose check-out time has passed is marked completed and its
//! room set back to available. Runs once at startup and then on a
//! fixed five-minute interval. The update predicate re-checks
//! `status = 'active'`, so the sweep is idempotent and safe against
//! concurrent manual edits.
//!
//! Failure semantics: any error aborts the pass and is logged, never
//! surfaced to a user and never retried early. A transient failure is
//! naturally retried at the next tick; a partial failure within a pass
//! (bookings completed, rooms not yet freed) is possible and is left
//! for a later pass or a manual edit.

use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use frontdesk_persistence::Persistence;

/// Interval between sweep passes.
const SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Runs the sweep loop forever.
///
/// The first tick fires immediately, so one pass runs at application
/// start before the interval cadence begins.
pub async fn run(persistence: Arc<Mutex<Persistence>>) {
    info!(
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Auto-checkout sweep started"
    );

    let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
    loop {
        ticker.tick().await;
        sweep_once(&persistence).await;
    }
}

/// Executes a single sweep pass.
pub async fn sweep_once(persistence: &Arc<Mutex<Persistence>>) {
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let mut guard = persistence.lock().await;
    match guard.complete_expired_bookings(now) {
        Ok(outcome) if outcome.completed_bookings > 0 => {
            info!(
                completed_bookings = outcome.completed_bookings,
                freed_rooms = outcome.freed_rooms,
                "Auto-checkout sweep closed out expired bookings"
            );
        }
        Ok(_) => {
            debug!("Auto-checkout sweep found nothing to do");
        }
        Err(e) => {
            // Logged only; the next tick is the retry.
            error!(error = %e, "Auto-checkout sweep failed");
        }
    }
}
