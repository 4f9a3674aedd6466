//! Wire dialect resolution for local inference servers.
//!
//! Two URL conventions are supported: the native local-server shape, where
//! verbs live under an `/api` segment, and the OpenAI-compatible shape, where
//! the base URL already carries a versioned path and verbs are appended
//! directly. Resolution is a substring heuristic on the configured base URL,
//! not a negotiation.

/// One of the two request/path conventions a local server may speak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// Verbs under `/api`, e.g. `http://localhost:11434/api/generate`.
    Native,
    /// Versioned base URL, verb appended directly, e.g. `.../v1/generate`.
    Compatible,
}

impl Dialect {
    /// Resolve the dialect from a base URL.
    pub fn detect(base: &str) -> Self {
        if base.contains("/v1") {
            Dialect::Compatible
        } else {
            Dialect::Native
        }
    }

    /// Build the generation URL for this dialect.
    pub fn generate_url(self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Dialect::Native => format!("{base}/api/generate"),
            Dialect::Compatible => format!("{base}/generate"),
        }
    }
}
