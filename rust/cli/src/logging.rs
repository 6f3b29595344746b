//! Tracing subscriber setup for the `blackjack` binary.
//!
//! Diagnostics go to stderr so command output on stdout stays parseable.
//! `RUST_LOG` selects the filter; without it only warnings are shown.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::dealer::DealerPolicy;
    use blackjack_engine::game::Game;
    use blackjack_engine::player::PlayerAction;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

    struct MessageVisitor(String);

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    #[test]
    fn engine_emits_round_events() {
        let captured = Captured::default();
        let registry = Registry::default().with(captured.clone());

        tracing::subscriber::with_default(registry, || {
            let mut game = Game::new(DealerPolicy::reach17(), Some(5));
            game.next_round().unwrap();
            game.act(PlayerAction::Stand).unwrap();
        });

        let entries = captured.0.lock().unwrap();
        assert!(entries.iter().all(|(level, _)| *level == Level::DEBUG));
        assert!(entries.iter().any(|(_, m)| m == "round started"));
        assert!(entries.iter().any(|(_, m)| m == "dealer turn finished"));
    }
}
