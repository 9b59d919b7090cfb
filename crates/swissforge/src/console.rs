//! Colorful console output for round events.
//!
//! Provides a custom `tracing` layer that formats pairing events with colors.

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "swissforge_solver=info";

/// Initializes the pairing console output.
///
/// Safe to call multiple times - only the first call has effect. Without
/// `RUST_LOG` the filter is `swissforge_solver=info`; set
/// `RUST_LOG=swissforge_solver=debug` to also see each committed pairing.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RoundConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats round events with colors.
pub struct RoundConsoleLayer;

impl<S: Subscriber> Layer<S> for RoundConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("swissforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_round_event(event.metadata().level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    error: Option<String>,
    pool_size: Option<u64>,
    history_size: Option<u64>,
    pairings: Option<u64>,
    steps: Option<u64>,
    forced_moves: Option<u64>,
    duration_ms: Option<u64>,
    nodes: Option<u64>,
    node_limit: Option<u64>,
    found: Option<bool>,
    player1: Option<u64>,
    player2: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "error" => self.error = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "pool_size" => self.pool_size = Some(value),
            "history_size" => self.history_size = Some(value),
            "pairings" => self.pairings = Some(value),
            "steps" => self.steps = Some(value),
            "forced_moves" => self.forced_moves = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "nodes" => self.nodes = Some(value),
            "node_limit" => self.node_limit = Some(value),
            "player1" => self.player1 = Some(value),
            "player2" => self.player2 = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "found" {
            self.found = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn level_label(level: &Level) -> String {
    match *level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => "WARN".bright_yellow().to_string(),
        Level::INFO => "INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        _ => "TRACE".dimmed().to_string(),
    }
}

fn format_round_event(level: &Level, v: &EventVisitor) -> String {
    let label = level_label(level);
    match v.event.as_deref().unwrap_or("") {
        "round_start" => format!(
            "{} {} pool size ({}), known pairs ({})",
            label,
            "[Round]".bright_cyan(),
            v.pool_size.unwrap_or(0).bright_yellow(),
            v.history_size.unwrap_or(0).bright_yellow(),
        ),
        "pairing_committed" => format!(
            "{} {} #{} vs #{}",
            label,
            "[Round]".bright_cyan(),
            v.player1.unwrap_or(0),
            v.player2.unwrap_or(0),
        ),
        "dead_end" => format!(
            "{} {} {}",
            label,
            "[Round]".bright_cyan(),
            v.error.as_deref().unwrap_or("dead end").red(),
        ),
        "fallback_start" => format!(
            "{} {} exhaustive fallback started, node limit ({})",
            label,
            "[Fallback]".bright_cyan(),
            v.node_limit.unwrap_or(0).bright_yellow(),
        ),
        "fallback_end" => {
            let outcome = if v.found.unwrap_or(false) {
                "round completed".green().to_string()
            } else {
                "no pairing found".red().to_string()
            };
            format!(
                "{} {} {} after ({}) nodes",
                label,
                "[Fallback]".bright_cyan(),
                outcome,
                v.nodes.unwrap_or(0).bright_yellow(),
            )
        }
        "round_end" => format!(
            "{} {} paired ({}) matches in ({} ms), forced moves ({}), steps ({})",
            label,
            "[Round]".bright_cyan(),
            v.pairings.unwrap_or(0).bright_yellow(),
            v.duration_ms.unwrap_or(0),
            v.forced_moves.unwrap_or(0).bright_magenta(),
            v.steps.unwrap_or(0),
        ),
        "round_failed" => format!(
            "{} {} {}",
            label,
            "[Round]".bright_cyan(),
            v.error.as_deref().unwrap_or("round failed").red(),
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("degrees".to_string()),
            ..Default::default()
        };
        assert!(format_round_event(&Level::TRACE, &visitor).is_empty());
    }

    #[test]
    fn test_round_end_mentions_counts() {
        let visitor = EventVisitor {
            event: Some("round_end".to_string()),
            pairings: Some(4),
            forced_moves: Some(1),
            ..Default::default()
        };
        let line = format_round_event(&Level::INFO, &visitor);
        assert!(line.contains("[Round]"));
        assert!(line.contains('4'));
    }

    #[test]
    fn test_label_follows_event_level() {
        let visitor = EventVisitor {
            event: Some("dead_end".to_string()),
            error: Some("Dead end".to_string()),
            ..Default::default()
        };
        let line = format_round_event(&Level::INFO, &visitor);
        assert!(line.contains("INFO"));
        assert!(!line.contains("WARN"));

        let visitor = EventVisitor {
            event: Some("pairing_committed".to_string()),
            player1: Some(1),
            player2: Some(3),
            ..Default::default()
        };
        let line = format_round_event(&Level::DEBUG, &visitor);
        assert!(line.contains("DEBUG"));
        assert!(line.contains("#1 vs #3"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
