//! Background refresh loop.
//!
//! Two independent tokio tasks keep the repository current: one for the
//! people collection, one for the station position. Dropping the
//! [`Poller`] aborts both.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::client::PeopleInSpaceApi;
use crate::repository::PeopleInSpaceRepository;

/// Refresh periods for the two feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    /// How often the people collection is fetched.
    pub people: Duration,
    /// How often the station position is fetched.
    pub position: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            people: Duration::from_secs(60),
            position: Duration::from_secs(10),
        }
    }
}

/// Handle to the running refresh tasks.
#[derive(Debug)]
pub struct Poller {
    handles: Vec<JoinHandle<()>>,
}

impl Poller {
    /// Start refreshing `repo` from `api`. The first fetch of each feed
    /// happens immediately.
    pub fn spawn(
        repo: Arc<PeopleInSpaceRepository>,
        api: PeopleInSpaceApi,
        intervals: PollIntervals,
    ) -> Self {
        let people_task = {
            let repo = Arc::clone(&repo);
            let api = api.clone();
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(intervals.people);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    debug!("refreshing people in space");
                    repo.refresh_people(&api).await;
                }
            })
        };

        let position_task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(intervals.position);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                repo.refresh_position(&api).await;
            }
        });

        Self {
            handles: vec![people_task, position_task],
        }
    }

    /// Stop both tasks.
    pub fn stop(&self) {
        for handle in &self.handles {
            handle.abort();
        }
    }

    /// Whether every task has ended.
    pub fn is_finished(&self) -> bool {
        self.handles.iter().all(JoinHandle::is_finished)
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
