use std::fmt::Display;

/// a single leg of a multimodal journey, parsed from its textual
/// `mode(duration)` form. the raw duration text is retained so that legs
/// which pass through unchanged (the first and last walking legs during
/// simplification) reproduce their input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// travel method token, taken verbatim from the input
    pub mode: String,
    /// raw duration text inside the parentheses, e.g. "1시간 8분"
    pub duration_text: String,
    /// duration in whole minutes, fractional part truncated
    pub duration_minutes: i64,
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.mode, self.duration_text)
    }
}
