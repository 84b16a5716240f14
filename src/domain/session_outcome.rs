/// Terminal result of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Authenticated { subject_id: Option<String> },
    Unauthenticated { reason: ExpulsionReason },
}

/// Why a session was concluded unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpulsionReason {
    /// No token on the URL and none persisted.
    MissingToken,
    /// The token's own `exp` claim was already in the past.
    ExpiredToken,
    /// Both remote probes refused the token.
    RejectedToken,
}
