//! Outcome classification
//!
//! The external module reports nothing structured — stage results are bare
//! C strings — so success vs failure is decided by a substring scan. The
//! heuristic is quarantined here: nothing else in the workspace inspects
//! result text, and a module that grows real diagnostics only needs this
//! one function replaced.

/// Two-way outcome of a stage result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Error,
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }
}

/// Classify a stage result string.
///
/// Failure iff the lowercase text contains `"error"`. Legitimate output
/// containing that word is misclassified; that is the specified behavior of
/// the original surface, kept until the module offers something better.
pub fn classify(text: &str) -> Verdict {
    if text.to_lowercase().contains("error") {
        Verdict::Error
    } else {
        Verdict::Success
    }
}
