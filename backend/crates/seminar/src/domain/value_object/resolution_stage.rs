//! Resolution Stage
//!
//! Stages of the per-request detail pipeline:
//! `Idle -> Decoding -> Validating -> Fetching -> {Displayed | Failed}`.
//! There are no back edges; a failure ends the request.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStage {
    Idle,
    Decoding,
    Validating,
    Fetching,
    Displayed,
    Failed,
}

impl ResolutionStage {
    /// Next stage on success; terminal stages return themselves.
    pub const fn advance(self) -> Self {
        use ResolutionStage::*;
        match self {
            Idle => Decoding,
            Decoding => Validating,
            Validating => Fetching,
            Fetching => Displayed,
            Displayed => Displayed,
            Failed => Failed,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, ResolutionStage::Displayed | ResolutionStage::Failed)
    }
}
