//! Stage reports
//!
//! One report per user action: the verbatim result text, the measured
//! latency, and the verdict, plus the derived labels the panel surface
//! shows. The complexity labels are fixed text inherited from the original
//! surface, not computed.

use std::time::Duration;

use cxplay_module::Stage;

use crate::classify::Verdict;

/// Fixed time-complexity label of the panel surface
pub const TIME_COMPLEXITY: &str = "O(n)";
/// Fixed space-complexity label of the panel surface
pub const SPACE_COMPLEXITY: &str = "O(n)";

/// Outcome of one stage action
#[derive(Debug, Clone)]
pub struct StageReport {
    /// The action that was triggered
    pub stage: Stage,
    /// Result text, exactly as the module returned it
    pub text: String,
    /// Wall-clock time of the composed computation
    pub elapsed: Duration,
    /// Heuristic verdict over `text`
    pub verdict: Verdict,
}

impl StageReport {
    pub fn is_success(&self) -> bool {
        self.verdict.is_success()
    }

    /// "Success" or "Error"
    pub fn status_label(&self) -> &'static str {
        match self.verdict {
            Verdict::Success => "Success",
            Verdict::Error => "Error",
        }
    }

    /// The fixed success-rate label: "100%" on success, "0%" otherwise
    pub fn success_rate(&self) -> &'static str {
        match self.verdict {
            Verdict::Success => "100%",
            Verdict::Error => "0%",
        }
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(verdict: Verdict) -> StageReport {
        StageReport {
            stage: Stage::Lex,
            text: "tok".to_string(),
            elapsed: Duration::from_micros(1500),
            verdict,
        }
    }

    #[test]
    fn test_success_labels() {
        let r = report(Verdict::Success);
        assert_eq!(r.status_label(), "Success");
        assert_eq!(r.success_rate(), "100%");
        assert!(r.is_success());
    }

    #[test]
    fn test_error_labels() {
        let r = report(Verdict::Error);
        assert_eq!(r.status_label(), "Error");
        assert_eq!(r.success_rate(), "0%");
    }

    #[test]
    fn test_elapsed_ms() {
        assert!((report(Verdict::Success).elapsed_ms() - 1.5).abs() < 1e-9);
    }
}
