// arena_bot_engine/src/operational/monitoring/metrics.rs
use crate::entities::bot::BotState;
use anyhow::{Context, Result};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Facade over the `metrics` macros. Without an installed recorder every call is a no-op.
pub struct BotMetrics;

impl BotMetrics {
    pub fn describe() {
        describe_gauge!("bots_active", "Number of bots in the roster");
        describe_counter!("bot_shots_total", "Shoot actions emitted by bots");
        describe_counter!("bot_unstick_total", "Forced stuck-recovery jumps");
        describe_counter!("bot_state_transitions_total", "State machine transitions by destination state");
        describe_histogram!("bot_roster_update_seconds", "Time spent in one roster update");
    }

    /// Installs the Prometheus exporter on `0.0.0.0:port`. Needs a Tokio runtime.
    pub fn install_prometheus(port: u16) -> Result<()> {
        PrometheusBuilder::new()
            .with_http_listener(([0, 0, 0, 0], port))
            .install()
            .context("Failed to install Prometheus exporter")?;
        Self::describe();
        Ok(())
    }

    pub fn record_roster_update(duration_secs: f64, active_bots: usize, shots: usize) {
        histogram!("bot_roster_update_seconds").record(duration_secs);
        gauge!("bots_active").set(active_bots as f64);
        if shots > 0 {
            counter!("bot_shots_total").increment(shots as u64);
        }
    }

    pub fn update_bot_count(count: usize) {
        gauge!("bots_active").set(count as f64);
    }

    pub fn record_state_transition(state: BotState) {
        counter!("bot_state_transitions_total", "state" => state.as_str()).increment(1);
    }

    pub fn record_unstick() {
        counter!("bot_unstick_total").increment(1);
    }
}

// Logging setup
pub fn init_logging() -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_bot_engine=info,arena_bots=info,warn".into()),
        )
        .with(fmt::layer())
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
