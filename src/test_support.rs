//! Helpers shared by unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts events at or above `min_level` seen while installed
#[derive(Clone)]
struct EventCounter {
    min_level: Level,
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Levels order by verbosity: TRACE > DEBUG > ... > ERROR
        if *event.metadata().level() <= self.min_level {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` with a thread-local subscriber, returning how many events at
/// `min_level` or more severe it logged
pub fn count_events(min_level: Level, f: impl FnOnce()) -> usize {
    let counter = EventCounter {
        min_level,
        count: Arc::default(),
    };
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f);
    counter.count.load(Ordering::SeqCst)
}

/// WARN and ERROR events logged by `f`
pub fn count_warnings(f: impl FnOnce()) -> usize {
    count_events(Level::WARN, f)
}
