use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("remapping \"{0}\" events onto themselves would fire without end")]
    SelfRemap(String),

    #[error("event \"{0}\" needs an interval longer than zero")]
    ZeroInterval(String),
}

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("failed to draw the board: {0}")]
    Render(#[from] std::io::Error),

    #[error("render task stopped unexpectedly: {0}")]
    Join(#[from] tokio::task::JoinError),
}
