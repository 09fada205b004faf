//! Step stopwatch for `PerfStats`
//!
//! Browser builds read `js_sys::Date`; native builds use `Instant`.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[inline]
fn now() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

#[inline]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        to - from
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        to.duration_since(from).as_secs_f64() * 1000.0
    }
}

/// Times a whole step and each phase inside it
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Stamp,
    lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let t = now();
        Self { start: t, lap: t }
    }

    /// Milliseconds since the previous lap (or the start); begins the next lap
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let t = now();
        let ms = ms_between(self.lap, t);
        self.lap = t;
        ms
    }

    pub(crate) fn total_ms(&self) -> f64 {
        ms_between(self.start, now())
    }
}
