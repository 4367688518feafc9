use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::system::sampler::Sampler;
use crate::system::snapshot::MetricSnapshot;
use crate::system::source::MetricsSource;

/// Consumer of snapshots. Receives each one by value and owns it from then on.
pub trait PresentationSink {
    fn render(&mut self, snapshot: MetricSnapshot);
}

/// Fixed-period timer. A slow poll pushes the next tick back instead of
/// causing a burst of catch-up ticks.
pub struct Ticker {
    interval: Interval,
    period: Duration,
}

impl Ticker {
    /// The first tick completes immediately.
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval_at(Instant::now(), period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }

    /// Restart the period from now, e.g. after an out-of-band poll.
    pub fn reset(&mut self) {
        self.interval.reset();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Rendered,
    Skipped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    pub attempts: u64,
    pub rendered: u64,
    pub skipped: u64,
}

pub struct PollDriver<S> {
    sampler: Sampler<S>,
    ticker: Ticker,
    stats: PollStats,
}

impl<S: MetricsSource> PollDriver<S> {
    pub fn new(sampler: Sampler<S>, period: Duration) -> Self {
        Self {
            sampler,
            ticker: Ticker::new(period),
            stats: PollStats::default(),
        }
    }

    pub fn sampler(&self) -> &Sampler<S> {
        &self.sampler
    }

    pub fn stats(&self) -> PollStats {
        self.stats
    }

    pub fn period(&self) -> Duration {
        self.ticker.period()
    }

    pub async fn tick(&mut self) {
        self.ticker.tick().await;
    }

    pub fn reset_schedule(&mut self) {
        self.ticker.reset();
    }

    /// Poll once and hand the snapshot to `sink`. A failed poll is logged and
    /// the sink is left untouched.
    pub fn poll_once<K: PresentationSink>(&mut self, sink: &mut K) -> PollOutcome {
        self.stats.attempts += 1;
        match self.sampler.poll() {
            Ok(snapshot) => {
                sink.render(snapshot);
                self.stats.rendered += 1;
                PollOutcome::Rendered
            }
            Err(err) => {
                self.stats.skipped += 1;
                tracing::warn!(error = %err, attempt = self.stats.attempts, "poll failed, skipping render");
                PollOutcome::Skipped
            }
        }
    }

    /// Poll on every tick until `shutdown` resolves or `max_polls` attempts have run.
    pub async fn run<K, F>(&mut self, sink: &mut K, max_polls: Option<u64>, shutdown: F)
    where
        K: PresentationSink,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            if let Some(limit) = max_polls
                && self.stats.attempts >= limit
            {
                break;
            }
            tokio::select! {
                _ = &mut shutdown => break,
                _ = self.ticker.tick() => {
                    self.poll_once(sink);
                }
            }
        }
        tracing::info!(
            attempts = self.stats.attempts,
            skipped = self.stats.skipped,
            "poll driver stopped"
        );
    }
}

/// Headless sink: one JSON object per snapshot, newline-terminated.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PresentationSink for JsonLinesSink<W> {
    fn render(&mut self, snapshot: MetricSnapshot) {
        let result = serde_json::to_writer(&mut self.writer, &snapshot)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"))
            .and_then(|()| self.writer.flush());
        if let Err(err) = result {
            tracing::error!(error = %err, sequence = snapshot.sequence, "failed to write snapshot");
        }
    }
}
