use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    /// A downstream service answered with a non-2xx status. Status, raw body
    /// and content type are carried verbatim so the caller sees exactly what
    /// the service produced.
    #[error("downstream service returned {status}: {body}")]
    Downstream {
        status: u16,
        body: String,
        content_type: Option<String>,
    },

    #[error("downstream service unreachable: {0}")]
    Transport(String),

    #[error("could not extract identity from token")]
    IdentityExtraction,

    /// A step after credentials creation failed and the credentials were
    /// rolled back. Wraps the triggering error; rollback failures themselves
    /// are only logged, never surfaced.
    #[error("{step} failed. Credentials rolled back. {source}")]
    RolledBack {
        step: &'static str,
        #[source]
        source: Box<GatewayError>,
    },
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn rolled_back(step: &'static str, source: GatewayError) -> Self {
        Self::RolledBack {
            step,
            source: Box::new(source),
        }
    }
}
