use crate::render::ShaderError;

/// Failure while bringing up a window session. Always fatal for the session.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Window, surface, adapter or device could not be created.
    #[error("unable to initialize the rendering context: {0}")]
    ContextUnavailable(String),

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

impl SetupError {
    /// Wraps an `anyhow` chain, keeping every cause in the message.
    pub fn context_unavailable(err: &anyhow::Error) -> Self {
        SetupError::ContextUnavailable(format!("{err:#}"))
    }
}
