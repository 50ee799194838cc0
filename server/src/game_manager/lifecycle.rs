use crate::game_manager::AppState;
use cowbull_core::GameSession;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use uuid::Uuid;

impl AppState {
    pub fn start_game(&self) -> String {
        let game_id = Uuid::new_v4().to_string();
        let secret = self.draw_secret();

        tracing::info!(game_id = %game_id, "Created new game session");
        tracing::debug!(game_id = %game_id, secret = %secret, "Secret word drawn");

        self.games.insert(game_id.clone(), GameSession::new(secret));
        game_id
    }

    /// Removes games with no accepted guess for longer than `ttl`.
    pub fn sweep_idle_games(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        self.games.retain(|game_id, game| {
            let idle = now.duration_since(game.last_activity());
            if idle > ttl {
                tracing::info!(game_id = %game_id, idle_secs = idle.as_secs(), "Cleaning up inactive game");
                removed += 1;
                false
            } else {
                true
            }
        });

        removed
    }

    pub fn spawn_cleanup_task(self: Arc<Self>, ttl: Duration, every: Duration) -> JoinHandle<()> {
        tracing::info!(ttl_secs = ttl.as_secs(), every_secs = every.as_secs(), "Idle game cleanup enabled");
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let removed = self.sweep_idle_games(ttl);
                if removed > 0 {
                    tracing::info!(removed, active = self.active_games(), "Idle game sweep finished");
                }
            }
        })
    }
}
