//! Timing instrumentation for input dispatch.
//!
//! Pointer moves and touch moves arrive at display rate, so dispatch and hit
//! testing are the hot paths worth watching.
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! slotgrid = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use slotgrid::profile_scope;
//!
//! fn touch_move() {
//!     profile_scope!("touch_move");
//!     // ... dispatch ...
//! }
//! ```

use std::collections::HashMap;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Budget for handling one input event (one frame at 60 FPS)
pub const EVENT_BUDGET_MS: f64 = 16.67;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Logs how long a scope took when it exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer for profiling builds (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

/// Per-event-kind dispatch counters, for diagnosing dropped or slow gestures.
#[derive(Debug, Default, Clone)]
pub struct DispatchStats {
    counts: HashMap<&'static str, u64>,
    slow: HashMap<&'static str, u64>,
}

impl DispatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dispatch of `kind` that took `elapsed_ms`.
    pub fn record(&mut self, kind: &'static str, elapsed_ms: f64) {
        *self.counts.entry(kind).or_default() += 1;
        if elapsed_ms > EVENT_BUDGET_MS {
            *self.slow.entry(kind).or_default() += 1;
            warn!(
                kind,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Event dispatch over budget"
            );
        }
    }

    pub fn count(&self, kind: &str) -> u64 {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    pub fn slow_count(&self, kind: &str) -> u64 {
        self.slow.get(kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
