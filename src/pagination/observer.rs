//! Fallback reporting.
//!
//! The resolver never fails a request; it substitutes defaults instead.
//! Observers make those substitutions visible without touching the result.

use crate::pagination::resolver::{Field, Outcome};

/// A field that did not take the value supplied in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback<'a> {
    pub field: Field,
    pub outcome: Outcome,
    /// Raw query value, if the key was present.
    pub raw: Option<&'a str>,
    /// Value written to the request context instead.
    pub applied: i64,
}

/// Receives one call per substituted field.
pub trait PaginationObserver: Send + Sync + std::fmt::Debug {
    fn on_fallback(&self, fallback: &Fallback<'_>);
}

/// Reports fallbacks as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PaginationObserver for TracingObserver {
    fn on_fallback(&self, fallback: &Fallback<'_>) {
        let field = fallback.field.as_str();
        let value = fallback.raw.unwrap_or_default();
        let applied = fallback.applied;

        match (fallback.field, fallback.outcome) {
            (Field::Limit, Outcome::Missing) => {
                tracing::info!(
                    field,
                    applied,
                    "No pagination limit in request, using default limit"
                );
            }
            (Field::Limit, Outcome::NotAnInteger) => {
                tracing::warn!(
                    field,
                    value,
                    applied,
                    "Pagination limit is not an integer, using default limit"
                );
            }
            (Field::Limit, Outcome::OutOfBounds) => {
                tracing::info!(
                    field,
                    value,
                    applied,
                    "Pagination limit out of bound, using default limit"
                );
            }
            (Field::Offset, Outcome::NotAnInteger) => {
                tracing::warn!(
                    field,
                    value,
                    "Pagination offset is not an integer, setting it to 0"
                );
            }
            (Field::Offset, Outcome::Clamped) => {
                tracing::info!(field, value, "Negative pagination offset, setting it to 0");
            }
            // A missing offset is the common case and not worth an event.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Records the level of every event it sees.
    #[derive(Clone, Default)]
    struct LevelCapture {
        levels: Arc<Mutex<Vec<Level>>>,
    }

    impl<S: Subscriber> Layer<S> for LevelCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.levels.lock().unwrap().push(*event.metadata().level());
        }
    }

    fn levels_for(field: Field, outcome: Outcome) -> Vec<Level> {
        let capture = LevelCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            TracingObserver.on_fallback(&Fallback {
                field,
                outcome,
                raw: Some("x"),
                applied: 0,
            });
        });

        let levels = capture.levels.lock().unwrap().clone();
        levels
    }

    #[test]
    fn test_event_level_per_fallback() {
        let cases = [
            (Field::Limit, Outcome::Missing, vec![Level::INFO]),
            (Field::Limit, Outcome::NotAnInteger, vec![Level::WARN]),
            (Field::Limit, Outcome::OutOfBounds, vec![Level::INFO]),
            (Field::Offset, Outcome::NotAnInteger, vec![Level::WARN]),
            (Field::Offset, Outcome::Clamped, vec![Level::INFO]),
            (Field::Offset, Outcome::Missing, vec![]),
        ];

        for (field, outcome, expected) in cases {
            assert_eq!(
                levels_for(field, outcome),
                expected,
                "field={:?} outcome={:?}",
                field,
                outcome
            );
        }
    }
}
