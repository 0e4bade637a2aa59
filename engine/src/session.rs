//! Simulated loading sequence for one query.
//!
//! A session walks through [`LOADING_STAGES`] on a repeating timer, waits one
//! more fixed delay after the last stage, then pulls results from the
//! [`OpportunitySource`]. Timers live inside the session, so dropping the
//! session cancels them: nothing can mutate a results view after its session
//! is gone.

use std::time::Duration;

use finder_types::ui::{DelayTimer, IntervalTimer};
use finder_types::{LOADING_STAGES, LoadingStage, Opportunity, Query, SessionId};

use crate::source::OpportunitySource;

const DEFAULT_STAGE_INTERVAL: Duration = Duration::from_millis(1500);
const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Pacing of a loading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTimings {
    /// Period of the stage timer.
    pub stage_interval: Duration,
    /// One-shot delay armed once the stage timer fires on the last stage.
    pub settle_delay: Duration,
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            stage_interval: DEFAULT_STAGE_INTERVAL,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl LoadingTimings {
    /// Total time from session start until results appear.
    #[must_use]
    pub fn time_to_results(&self) -> Duration {
        let interval = IntervalTimer::new(self.stage_interval).period();
        interval * LOADING_STAGES.len() as u32 + self.settle_delay
    }
}

#[derive(Debug)]
enum Phase {
    /// Stage timer armed.
    Staging(IntervalTimer),
    /// Stage timer cleared, settle delay armed.
    Settling(DelayTimer),
    Loaded,
}

/// One run of the loading simulation, keyed on a query value.
#[derive(Debug)]
pub struct LoadingSession {
    id: SessionId,
    query: Query,
    stage: usize,
    phase: Phase,
    results: Vec<Opportunity>,
    timings: LoadingTimings,
}

impl LoadingSession {
    #[must_use]
    pub fn new(id: SessionId, query: Query, timings: LoadingTimings) -> Self {
        tracing::debug!(session = %id, query = %query, "Loading session started");
        Self {
            id,
            query,
            stage: 0,
            phase: Phase::Staging(IntervalTimer::new(timings.stage_interval)),
            results: Vec::new(),
            timings,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Index into [`LOADING_STAGES`]. Stays on the last stage once reached.
    #[must_use]
    pub fn stage(&self) -> usize {
        self.stage
    }

    #[must_use]
    pub fn current_stage(&self) -> LoadingStage {
        LOADING_STAGES[self.stage]
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        !matches!(self.phase, Phase::Loaded)
    }

    /// Empty until the session is loaded.
    #[must_use]
    pub fn results(&self) -> &[Opportunity] {
        &self.results
    }

    /// Whether the stage timer is still armed.
    #[must_use]
    pub fn stage_timer_active(&self) -> bool {
        matches!(self.phase, Phase::Staging(_))
    }

    /// Whether the settle delay is armed.
    #[must_use]
    pub fn settle_timer_active(&self) -> bool {
        matches!(self.phase, Phase::Settling(_))
    }

    /// Feed elapsed time to whichever timer is armed.
    ///
    /// Every firing that falls inside `delta` is applied in order, and time
    /// left over after the stage timer is cleared carries into the settle
    /// delay. Returns `true` if anything visible changed.
    pub fn advance(&mut self, delta: Duration, source: &dyn OpportunitySource) -> bool {
        let mut changed = false;
        let mut carry = delta;

        loop {
            match &mut self.phase {
                Phase::Staging(interval) => {
                    interval.advance(carry);
                    carry = Duration::ZERO;
                    let Some(since_fire) = interval.fire() else {
                        break;
                    };
                    if self.stage + 1 < LOADING_STAGES.len() {
                        self.stage += 1;
                        changed = true;
                        tracing::trace!(session = %self.id, stage = self.stage, "Loading stage advanced");
                    } else {
                        self.phase = Phase::Settling(DelayTimer::new(self.timings.settle_delay));
                        carry = since_fire;
                    }
                }
                Phase::Settling(delay) => {
                    delay.advance(carry);
                    if !delay.is_due() {
                        break;
                    }
                    self.results = source.opportunities(&self.query);
                    self.phase = Phase::Loaded;
                    changed = true;
                    tracing::info!(
                        session = %self.id,
                        query = %self.query,
                        results = self.results.len(),
                        "Results loaded"
                    );
                    break;
                }
                Phase::Loaded => break,
            }
        }

        changed
    }
}

impl Drop for LoadingSession {
    fn drop(&mut self) {
        if self.is_loading() {
            tracing::debug!(session = %self.id, stage = self.stage, "Loading session cancelled");
        }
    }
}
