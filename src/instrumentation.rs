//! Span timing for search and move generation.
//!
//! Compiled only with `--features instrumentation`. `choose_move` and
//! `all_legal_moves` open a span per call; this layer sums their wall time.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Span name -> (calls, total nanoseconds).
static TIMINGS: Lazy<Mutex<HashMap<&'static str, (u64, u64)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = span.extensions_mut().remove::<Instant>();
        if let Some(start) = started {
            let nanos = start.elapsed().as_nanos() as u64;
            let mut timings = TIMINGS.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = timings.entry(span.name()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += nanos;
        }
    }
}

/// Installs the timing layer. With `RUST_LOG` unset or `off` spans are only
/// timed; otherwise span events are printed as well.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = std::env::var("RUST_LOG").unwrap_or_default();
    let result = if filter.is_empty() || filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(e) = result {
        log::warn!("tracing subscriber already installed: {}", e);
    }
}

/// Prints the collected timings to stderr, slowest first.
pub fn print_timing_statistics() {
    let timings = TIMINGS.lock().unwrap_or_else(PoisonError::into_inner);
    if timings.is_empty() {
        eprintln!("no timing data collected");
        return;
    }

    let mut entries: Vec<_> = timings.iter().collect();
    entries.sort_by_key(|(_, (_, total))| std::cmp::Reverse(*total));

    eprintln!("{:<32} {:>10} {:>12} {:>12}", "span", "calls", "total ms", "avg µs");
    for (name, (calls, total)) in entries {
        eprintln!(
            "{:<32} {:>10} {:>12.2} {:>12.2}",
            name,
            calls,
            *total as f64 / 1_000_000.0,
            *total as f64 / *calls as f64 / 1_000.0
        );
    }
}
