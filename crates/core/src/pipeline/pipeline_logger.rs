use std::time::Instant;

/// Observer for frame-loop events.
///
/// The session reports stage timings and per-frame counts here instead of
/// writing to a fixed sink, so the binary and the tests can each decide
/// what to do with them.
pub trait PipelineLogger {
    /// Report that `current` frames have been processed. `total` is 0 for
    /// live sources with no known length.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named stage took for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a per-frame value (e.g. detection count).
    fn metric(&mut self, name: &str, value: f64);

    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards every event.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Running aggregate of one series of per-frame samples.
///
/// Samples are folded in as they arrive, so a live camera session holds
/// the same few numbers per stage however long it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesStats {
    pub count: usize,
    pub total: f64,
    pub max: f64,
}

impl SeriesStats {
    fn add(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
        self.max = self.max.max(value);
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

#[derive(Debug)]
struct Series {
    name: String,
    stats: SeriesStats,
}

/// Folds `value` into the series called `name`, creating it on first use.
/// Series keep first-seen order, which for stages is loop order.
fn record(series: &mut Vec<Series>, name: &str, value: f64) {
    match series.iter_mut().find(|s| s.name == name) {
        Some(existing) => existing.stats.add(value),
        None => {
            let mut stats = SeriesStats::default();
            stats.add(value);
            series.push(Series {
                name: name.to_string(),
                stats,
            });
        }
    }
}

/// Logger for the binary: forwards status messages to `log`, keeps
/// per-stage timings and metrics, and prints a summary when the run ends.
///
/// Progress lines are throttled to one every `throttle_frames` frames.
pub struct StdoutPipelineLogger {
    throttle_frames: usize,
    timings: Vec<Series>,
    metrics: Vec<Series>,
    start_time: Instant,
    frames_seen: usize,
    messages: Vec<String>,
}

impl StdoutPipelineLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            timings: Vec::new(),
            metrics: Vec::new(),
            start_time: Instant::now(),
            frames_seen: 0,
            messages: Vec::new(),
        }
    }

    /// Returns the formatted summary, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_s = self.start_time.elapsed().as_secs_f64();
        let frames = self.frames_seen;
        let mut lines = vec![format!(
            "Session summary ({frames} frames, {elapsed_s:.1}s total):"
        )];

        let stage_total: f64 = self.timings.iter().map(|s| s.stats.total).sum();
        for Series { name, stats } in &self.timings {
            let share = if stage_total > 0.0 {
                stats.total / stage_total * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {name:12}: avg {:6.1}ms  max {:6.1}ms  ({share:4.1}% of frame time)",
                stats.mean(),
                stats.max
            ));
        }

        for Series { name, stats } in &self.metrics {
            lines.push(format!(
                "  {name}: avg {:.1}  max {:.0}  total {:.0}",
                stats.mean(),
                stats.max,
                stats.total
            ));
        }

        if frames > 0 && elapsed_s > 0.0 {
            lines.push(format!("  Throughput: {:.1} fps", frames as f64 / elapsed_s));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<SeriesStats> {
        self.timings
            .iter()
            .find(|s| s.name == stage)
            .map(|s| s.stats)
    }

    pub fn metrics_for(&self, name: &str) -> Option<SeriesStats> {
        self.metrics
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.stats)
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(100)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.frames_seen = self.frames_seen.max(current);
        if current % self.throttle_frames != 0 && current != total {
            return;
        }
        if total > 0 {
            let pct = current as f64 / total as f64 * 100.0;
            log::info!("Processing: {current}/{total} frames ({pct:.1}%)");
        } else {
            log::info!("Processing: {current} frames");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        record(&mut self.timings, stage, duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        record(&mut self.metrics, name, value);
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── NullPipelineLogger ───────────────────────────────────────────

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 0);
        logger.timing("detect", 5.0);
        logger.metric("detections", 3.0);
        logger.info("hello");
        logger.summary();
    }

    // ── StdoutPipelineLogger ─────────────────────────────────────────

    #[test]
    fn test_timing_aggregates_per_stage() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.timing("detect", 20.0);
        logger.timing("detect", 30.0);
        logger.timing("display", 5.0);

        let detect = logger.timings_for("detect").unwrap();
        assert_eq!(detect.count, 2);
        assert_relative_eq!(detect.total, 50.0);
        assert_relative_eq!(detect.max, 30.0);
        assert_relative_eq!(detect.mean(), 25.0);

        let display = logger.timings_for("display").unwrap();
        assert_eq!(display.count, 1);
        assert!(logger.timings_for("capture").is_none());
    }

    #[test]
    fn test_metric_aggregates_values() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.metric("detections", 3.0);
        logger.metric("detections", 4.0);

        let stats = logger.metrics_for("detections").unwrap();
        assert_eq!(
            stats,
            SeriesStats {
                count: 2,
                total: 7.0,
                max: 4.0
            }
        );
    }

    #[test]
    fn test_long_live_session_keeps_fixed_state() {
        let mut logger = StdoutPipelineLogger::new(1000);
        for i in 1..=100_000 {
            for stage in ["capture", "preprocess", "detect", "display"] {
                logger.timing(stage, 1.0);
            }
            logger.metric("detections", (i % 3) as f64);
            logger.progress(i, 0);
        }

        assert_eq!(logger.timings.len(), 4);
        assert_eq!(logger.metrics.len(), 1);
        assert_eq!(logger.timings_for("capture").unwrap().count, 100_000);
        assert_relative_eq!(logger.metrics_for("detections").unwrap().max, 2.0);
        assert_eq!(logger.frames_seen, 100_000);
    }

    #[test]
    fn test_summary_lists_stages_in_loop_order() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.progress(5, 0);
        for _ in 0..2 {
            logger.timing("capture", 1.0);
            logger.timing("preprocess", 2.0);
            logger.timing("detect", 20.0);
            logger.timing("display", 1.0);
        }
        logger.metric("detections", 1.0);
        logger.metric("detections", 2.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.starts_with("Session summary (5 frames"));
        let capture = summary.find("capture").unwrap();
        let preprocess = summary.find("preprocess").unwrap();
        let display = summary.find("display").unwrap();
        assert!(capture < preprocess && preprocess < display);
        assert!(summary.contains("detections: avg 1.5  max 2  total 3"));
        assert!(summary.contains("fps"));
    }

    #[test]
    fn test_stage_share_of_frame_time() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.timing("preprocess", 25.0);
        logger.timing("detect", 75.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("(25.0% of frame time)"));
        assert!(summary.contains("(75.0% of frame time)"));
    }

    #[test]
    fn test_series_statistics() {
        let mut stats = SeriesStats::default();
        assert_relative_eq!(stats.mean(), 0.0);
        for value in [10.0, 30.0, 20.0] {
            stats.add(value);
        }
        assert_eq!(stats.count, 3);
        assert_relative_eq!(stats.total, 60.0);
        assert_relative_eq!(stats.mean(), 20.0);
        assert_relative_eq!(stats.max, 30.0);
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutPipelineLogger::new(10);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_progress_tracks_frames_for_live_source() {
        let mut logger = StdoutPipelineLogger::new(10);
        for i in 1..=25 {
            logger.progress(i, 0);
        }
        assert_eq!(logger.frames_seen, 25);
    }

    #[test]
    fn test_progress_tracks_frames_for_finite_source() {
        let mut logger = StdoutPipelineLogger::new(10);
        for i in 1..=7 {
            logger.progress(i, 7);
        }
        assert_eq!(logger.frames_seen, 7);
    }

    #[test]
    fn test_info_stores_messages() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.info("Loaded classifier haarcascade_frontalface_default.xml");
        assert_eq!(
            logger.messages,
            vec!["Loaded classifier haarcascade_frontalface_default.xml"]
        );
    }

    #[test]
    fn test_zero_throttle_is_clamped() {
        let logger = StdoutPipelineLogger::new(0);
        assert_eq!(logger.throttle_frames, 1);
    }

    #[test]
    fn test_default_throttle() {
        let logger = StdoutPipelineLogger::default();
        assert_eq!(logger.throttle_frames, 100);
    }
}
