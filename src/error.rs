//! Error type for the few operations that touch the outside world.

#[derive(thiserror::Error, Debug)]
pub enum InvadersError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A high-score line that is not `<name> <score>`.
    #[error("malformed score on line {line}: {content:?}")]
    ScoreFormat { line: usize, content: String },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
