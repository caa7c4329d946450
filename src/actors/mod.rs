pub mod dashboard_watcher;

pub use dashboard_watcher::{
    DashboardWatcher, DashboardWatcherArgs, WatchUpdate, WatcherMessage, WatcherStats,
};
