use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;
use crate::types::Sample;
/// Receiver side of a sample source.
///
/// Only `on_sample` and `required_history` carry meaning for a sweep panel. The
/// remaining hooks are part of the source's callback contract and default to no-ops;
/// a listener overrides them only if it reacts to that event.
pub trait SampleListener: Send + Sync {
    fn name(&self) -> &str;
    fn on_sample(&self, sample: &Sample);
    /// How much history the source must keep to backfill this listener on attach.
    fn required_history(&self) -> Duration;
    /// No-op by default: sweep panels do not depend on the acquisition rate.
    fn on_sample_rate_change(&self, _sample_rate_hz: f32, _notify: bool) {}
    /// No-op by default.
    fn on_settings_changed(&self) {}
    /// No-op by default: the scan cursor, not the master clock, positions samples.
    fn on_master_clock_update(&self, _milliseconds: i64, _sample_number: u64) {}
    /// No-op by default. Sent when the source itself goes away.
    fn on_source_removed(&self) {}
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);
/// Something listeners can register with.
///
/// `detach` is synchronous: once it returns, the listener receives no further
/// callbacks, and no callback to it is still running.
pub trait SampleSource: Send + Sync {
    fn attach(&self, listener: Arc<dyn SampleListener>) -> ListenerId;
    /// Returns `false` when `id` was not attached.
    fn detach(&self, id: ListenerId) -> bool;
}
/// Recent samples, all within the retention window of the newest timestamp seen.
#[derive(Default)]
struct History {
    samples: VecDeque<Sample>,
    newest_ms: Option<i64>,
}
/// In-process fan-out source that keeps enough recent samples to backfill new
/// listeners.
pub struct SampleHub {
    listeners: RwLock<Vec<(ListenerId, Arc<dyn SampleListener>)>>,
    history: Mutex<History>,
    min_history: Duration,
    next_id: AtomicU64,
}
impl Default for SampleHub {
    fn default() -> Self {
        Self::new()
    }
}
impl SampleHub {
    pub fn new() -> Self {
        Self::with_min_history(Duration::ZERO)
    }
    /// Keeps at least `min_history` of samples even with no listener asking for it.
    pub fn with_min_history(min_history: Duration) -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            history: Mutex::new(History::default()),
            min_history,
            next_id: AtomicU64::new(1),
        }
    }
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
    pub fn retained(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .samples
            .len()
    }
    /// Largest history any listener (or the hub's own floor) asks for.
    pub fn required_history(&self) -> Duration {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| l.required_history())
            .fold(self.min_history, Duration::max)
    }
    pub fn publish(&self, sample: Sample) {
        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        let keep = listeners
            .iter()
            .map(|(_, l)| l.required_history())
            .fold(self.min_history, Duration::max);
        self.retain(sample, keep);
        for (_, listener) in listeners.iter() {
            listener.on_sample(&sample);
        }
    }
    pub fn set_sample_rate(&self, sample_rate_hz: f32, notify: bool) {
        for (_, listener) in self.read_listeners().iter() {
            listener.on_sample_rate_change(sample_rate_hz, notify);
        }
    }
    pub fn notify_settings_changed(&self) {
        for (_, listener) in self.read_listeners().iter() {
            listener.on_settings_changed();
        }
    }
    pub fn master_clock_update(&self, milliseconds: i64, sample_number: u64) {
        for (_, listener) in self.read_listeners().iter() {
            listener.on_master_clock_update(milliseconds, sample_number);
        }
    }
    /// Detaches everyone, telling each listener the source is gone.
    pub fn shutdown(&self) {
        let drained: Vec<_> = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        for (_, listener) in drained {
            listener.on_source_removed();
        }
        *self.history.lock().unwrap_or_else(PoisonError::into_inner) = History::default();
    }
    fn read_listeners(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, Vec<(ListenerId, Arc<dyn SampleListener>)>> {
        self.listeners.read().unwrap_or_else(PoisonError::into_inner)
    }
    /// Stores `sample` and prunes against the newest timestamp seen, so late or
    /// reordered samples cannot keep old ones alive.
    fn retain(&self, sample: Sample, keep: Duration) {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        let newest = history
            .newest_ms
            .map_or(sample.timestamp_ms, |newest| newest.max(sample.timestamp_ms));
        history.newest_ms = Some(newest);
        let keep_ms = keep.as_millis().min(i64::MAX as u128) as i64;
        let oldest = newest.saturating_sub(keep_ms);
        if sample.timestamp_ms >= oldest {
            history.samples.push_back(sample);
        }
        history.samples.retain(|s| s.timestamp_ms >= oldest);
    }
}
impl SampleSource for SampleHub {
    fn attach(&self, listener: Arc<dyn SampleListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        // Hold the write lock through the replay so live samples queue up behind it
        // and reach the new listener in order.
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let backfill: Vec<Sample> = {
            let history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            let window_ms = listener.required_history().as_millis().min(i64::MAX as u128) as i64;
            match history.newest_ms {
                Some(newest) => {
                    let oldest = newest.saturating_sub(window_ms);
                    history
                        .samples
                        .iter()
                        .filter(|s| s.timestamp_ms >= oldest)
                        .copied()
                        .collect()
                }
                None => Vec::new(),
            }
        };
        log::debug!(
            "attaching {} (backfill {} samples)",
            listener.name(),
            backfill.len()
        );
        for sample in &backfill {
            listener.on_sample(sample);
        }
        listeners.push((id, listener));
        id
    }
    fn detach(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(candidate, _)| *candidate != id);
        let removed = listeners.len() != before;
        if removed {
            log::debug!("detached listener {id:?}");
        }
        removed
    }
}
