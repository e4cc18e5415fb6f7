use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("Invalid font {font:?}: {reason}")]
    InvalidFont { font: String, reason: String },

    #[error("Step interval must be greater than zero")]
    ZeroInterval,

    #[error("Pixel step must be greater than zero, got {0}")]
    NonPositiveStep(f64),

    #[error("Marquee is already playing")]
    AlreadyPlaying,

    #[error("Invalid colour: {0}")]
    InvalidColour(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
