/// Source of "now" for submission timestamps
pub trait Clock {
    /// Current instant in `Date.prototype.toISOString` form
    fn now_iso(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(target_arch = "wasm32")]
impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        self.0.clone()
    }
}
