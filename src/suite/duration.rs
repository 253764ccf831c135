use chrono::TimeDelta;

// ============================================================================
// Elapsed-time formatting
// ============================================================================

/// Whole units of one elapsed value. Negative input is clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    hours: i64,
    minutes: i64,
    seconds: i64,
    millis: i64,
}

impl Parts {
    fn of(elapsed: TimeDelta) -> Self {
        let total_ms = elapsed.num_milliseconds().max(0);
        Self {
            hours: total_ms / 3_600_000,
            minutes: total_ms / 60_000 % 60,
            seconds: total_ms / 1000 % 60,
            millis: total_ms % 1000,
        }
    }

    /// Hours and minutes, dropping zero-valued leading units.
    fn leading(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if self.hours > 0 {
            parts.push(format!("{}hr", self.hours));
        }
        if self.hours > 0 || self.minutes > 0 {
            parts.push(format!("{}min", self.minutes));
        }
        parts
    }
}

/// Suite-level duration: `"1hr 2min 3s"`, `"10min 0s"`, `"42s"`.
pub fn format_coarse(elapsed: TimeDelta) -> String {
    let p = Parts::of(elapsed);
    let mut parts = p.leading();
    parts.push(format!("{}s", p.seconds));
    parts.join(" ")
}

/// Per-case duration, down to milliseconds: `"1min 3s 7ms"`, `"2s 500ms"`.
pub fn format_fine(elapsed: TimeDelta) -> String {
    let p = Parts::of(elapsed);
    let mut parts = p.leading();
    parts.push(format!("{}s", p.seconds));
    parts.push(format!("{}ms", p.millis));
    parts.join(" ")
}
