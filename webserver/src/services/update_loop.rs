//! Periodic forum updates
//!
//! The loop is the single writer of `ForumState`. Readers only ever see the
//! rendered `ForumView` snapshots it publishes on a watch channel.

use rand::Rng;
use shared::{Component, ForumView, Freelancer, forum_debug, forum_info};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::core::{ForumState, render};

pub struct UpdateLoop<R> {
    state: ForumState,
    rng: R,
    period: Duration,
    view_tx: watch::Sender<ForumView>,
}

impl<R: Rng + Send + 'static> UpdateLoop<R> {
    /// Create the loop and a receiver already holding the initial render
    pub fn new(state: ForumState, rng: R, period: Duration) -> (Self, watch::Receiver<ForumView>) {
        let (view_tx, view_rx) = watch::channel(render(&state));
        let update_loop = Self {
            state,
            rng,
            period,
            view_tx,
        };
        (update_loop, view_rx)
    }

    pub fn state(&self) -> &ForumState {
        &self.state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Append one freelancer and publish the new view
    pub fn tick(&mut self) -> Freelancer {
        let freelancer = self.state.append_generated(&mut self.rng).clone();
        let view = render(&self.state);

        forum_info!(
            Component::UpdateLoop,
            "➕ Added {} ({}, ${}/hr); {} freelancers, average ${}/hr",
            freelancer.name,
            freelancer.occupation,
            freelancer.rate,
            view.summary.count,
            view.summary.average
        );

        self.view_tx.send_replace(view);
        freelancer
    }

    /// Tick forever, first tick one full period after start
    pub async fn run(mut self) {
        forum_debug!(Component::UpdateLoop, "⏱️ Update loop running every {:?}", self.period);

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.tick();
        }
    }
}
