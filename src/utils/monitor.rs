use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SessionStats {
    pub elapsed_time: Duration,
}

/// Wall-clock stopwatch for a practice session. Phase logging is a no-op
/// unless monitoring was requested.
pub struct SessionMonitor {
    start_time: Instant,
    enabled: bool,
}

impl SessionMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            enabled,
        }
    }

    pub fn get_stats(&self) -> Option<SessionStats> {
        if !self.enabled {
            return None;
        }
        Some(SessionStats {
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!("📊 {} - Time: {:?}", phase, stats.elapsed_time);
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.get_stats() {
            tracing::info!("📊 Final Stats - Total Time: {:?}", stats.elapsed_time);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
