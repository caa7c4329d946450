use crate::dashboard::Dashboard;
use crate::models::DashboardData;
use chrono::{DateTime, Local};
use ractor::{Actor, ActorProcessingErr, ActorRef, SpawnErr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Refreshes the dashboard on a timer and on request, one fetch at a time
pub struct DashboardWatcher;

/// State for the dashboard watcher
pub struct DashboardWatcherState {
    dashboard: Arc<Dashboard>,
    username: String,
    updates: mpsc::Sender<WatchUpdate>,
    ticker: JoinHandle<()>,
    refreshes: u64,
    failures: u64,
}

/// Messages the watcher can handle.
///
/// Stop it with `ActorRef::stop`, which jumps ahead of queued refreshes.
#[derive(Debug)]
pub enum WatcherMessage {
    /// Fetch fresh dashboard data and publish the outcome
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatcherStats {
    /// Successful refreshes
    pub refreshes: u64,
    pub failures: u64,
}

/// What the renderer should show next
#[derive(Debug, Clone)]
pub enum WatchUpdate {
    Loading,
    Loaded {
        data: DashboardData,
        refreshed_at: DateTime<Local>,
    },
    Failed(String),
    /// Final counters, published once the watcher has stopped
    Stopped(WatcherStats),
}

/// Arguments for starting the watcher
pub struct DashboardWatcherArgs {
    pub dashboard: Arc<Dashboard>,
    pub username: String,
    pub refresh_interval: Duration,
    pub updates: mpsc::Sender<WatchUpdate>,
}

impl DashboardWatcher {
    pub async fn spawn(
        args: DashboardWatcherArgs,
    ) -> Result<(ActorRef<WatcherMessage>, JoinHandle<()>), SpawnErr> {
        let (actor_ref, handle) = Actor::spawn(None, DashboardWatcher, args).await?;
        info!("Dashboard watcher started");
        Ok((actor_ref, handle))
    }
}

#[ractor::async_trait]
impl Actor for DashboardWatcher {
    type Msg = WatcherMessage;
    type State = DashboardWatcherState;
    type Arguments = DashboardWatcherArgs;

    async fn pre_start(
        &self,
        myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(
            username = %args.username,
            interval_secs = args.refresh_interval.as_secs(),
            "Starting dashboard watcher"
        );

        // The timer only enqueues refreshes; fetching stays inside the actor
        let myself_clone = myself.clone();
        let period = args.refresh_interval;
        let ticker = tokio::spawn(async move {
            let mut refresh_interval = tokio::time::interval(period);
            refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            refresh_interval.tick().await; // Skip first immediate tick

            loop {
                refresh_interval.tick().await;
                if let Err(e) = myself_clone.send_message(WatcherMessage::Refresh) {
                    debug!("Watcher timer stopping: {}", e);
                    break;
                }
            }
        });

        Ok(DashboardWatcherState {
            dashboard: args.dashboard,
            username: args.username,
            updates: args.updates,
            ticker,
            refreshes: 0,
            failures: 0,
        })
    }

    async fn post_start(
        &self,
        myself: ActorRef<Self::Msg>,
        _state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        myself
            .send_message(WatcherMessage::Refresh)
            .map_err(|e| {
                ActorProcessingErr::from(format!("Failed to queue initial refresh: {}", e))
            })
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            WatcherMessage::Refresh => {
                if state.updates.send(WatchUpdate::Loading).await.is_err() {
                    info!("Renderer gone, stopping watcher");
                    myself.stop(Some("Renderer closed".to_string()));
                    return Ok(());
                }

                let update = match state.dashboard.get_dashboard_data(&state.username).await {
                    Ok(data) => {
                        state.refreshes += 1;
                        info!(
                            commits = data.commits.len(),
                            repositories = data.repositories.len(),
                            "Dashboard refreshed"
                        );
                        WatchUpdate::Loaded {
                            data,
                            refreshed_at: Local::now(),
                        }
                    }
                    Err(e) => {
                        state.failures += 1;
                        warn!("Dashboard refresh failed: {}", e);
                        WatchUpdate::Failed(e.to_string())
                    }
                };

                if state.updates.send(update).await.is_err() {
                    info!("Renderer gone, stopping watcher");
                    myself.stop(Some("Renderer closed".to_string()));
                }
            }
        }

        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.ticker.abort();

        let stats = WatcherStats {
            refreshes: state.refreshes,
            failures: state.failures,
        };
        info!(
            refreshes = stats.refreshes,
            failures = stats.failures,
            "Dashboard watcher stopped"
        );

        // The renderer may already be gone
        let _ = state.updates.send(WatchUpdate::Stopped(stats)).await;
        Ok(())
    }
}
