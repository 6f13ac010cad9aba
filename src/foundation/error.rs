pub type GlyphResult<T> = Result<T, GlyphError>;

/// Boxed cause attached to a [`GlyphError::Render`].
pub type RenderCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum GlyphError {
    /// The source image is absent or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration rejected before any pixel was processed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Font bytes could not be parsed or lack the reference glyph.
    #[error("font error: {0}")]
    Font(String),

    /// Drawing a glyph failed mid-frame. The whole frame is discarded.
    #[error("render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<RenderCause>,
    },

    /// `ffmpeg`/`ffprobe` could not be run or reported a failure.
    #[error("media error: {0}")]
    Media(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    pub fn render_caused_by(msg: impl Into<String>, cause: impl Into<RenderCause>) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(cause.into()),
        }
    }

    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
