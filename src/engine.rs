// src/engine.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::drivers::ScanHost;

/// Dedicated thread that fires a scan-clock callback at a fixed period until stopped.
pub struct ScanClock {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ScanClock {
    pub fn spawn(period: Duration, mut on_tick: impl FnMut() + Send + 'static) -> Self {
        let (stop_tx, stop_rx) = channel::<()>();
        let handle = thread::spawn(move || {
            log::debug!("scan clock started ({period:?})");
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => on_tick(),
                    // Explicit stop or the clock handle was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            log::debug!("scan clock stopped");
        });
        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stops the thread and waits for the tick in progress, if any, to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            tx.send(()).ok();
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("scan clock thread panicked");
            }
        }
    }
}

impl Drop for ScanClock {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Free-running sweep driven by the wall clock: the cursor crosses `width` pixels
/// every `window_ms`, then starts over at the left edge.
pub struct SimulatedSweep {
    width: u32,
    height: u32,
    window_ms: f64,
    started: Instant,
    // (cursor pixel, time the cursor got there)
    cursor: Mutex<(i32, i64)>,
    repaints: AtomicU64,
}

impl SimulatedSweep {
    pub fn new(width: u32, height: u32, window: Duration) -> Self {
        Self {
            width,
            height,
            window_ms: window.as_secs_f64() * 1_000.0,
            started: Instant::now(),
            cursor: Mutex::new((0, 0)),
            repaints: AtomicU64::new(0),
        }
    }

    /// Milliseconds since the sweep started; the time base for samples.
    pub fn now_ms(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }

    /// Moves the cursor to where it should be at `now_ms`.
    pub fn advance_to(&self, now_ms: i64) {
        let into_window = (now_ms as f64).rem_euclid(self.window_ms);
        let pixel = ((into_window * self.width as f64 / self.window_ms) as i32)
            .min(self.width as i32 - 1);
        *self.cursor.lock().unwrap_or_else(PoisonError::into_inner) = (pixel, now_ms);
    }

    pub fn advance(&self) {
        self.advance_to(self.now_ms());
    }

    pub fn repaints(&self) -> u64 {
        self.repaints.load(Ordering::Relaxed)
    }
}

impl ScanHost for SimulatedSweep {
    fn current_scan_pixel(&self) -> i32 {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner).0
    }

    fn current_scan_window_time_ms(&self) -> i64 {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner).1
    }

    fn scan_window_duration_ms(&self) -> f64 {
        self.window_ms
    }

    fn inner_width(&self) -> u32 {
        self.width
    }

    fn inner_height(&self) -> u32 {
        self.height
    }

    fn request_repaint(&self) {
        self.repaints.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn clock_ticks_until_stopped() {
        let count = Arc::new(AtomicU64::new(0));
        let clock = {
            let count = Arc::clone(&count);
            ScanClock::spawn(Duration::from_millis(2), move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        while count.load(Ordering::SeqCst) < 3 {
            thread::sleep(Duration::from_millis(1));
        }
        clock.stop();
        let after_stop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn sweep_cursor_wraps_each_window() {
        let sweep = SimulatedSweep::new(1000, 100, Duration::from_secs(10));
        sweep.advance_to(2_500);
        assert_eq!(sweep.current_scan_pixel(), 250);
        assert_eq!(sweep.current_scan_window_time_ms(), 2_500);
        sweep.advance_to(10_010);
        assert_eq!(sweep.current_scan_pixel(), 1);
        assert_eq!(sweep.scan_window_duration_ms(), 10_000.0);
    }
}
