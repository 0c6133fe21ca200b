/// Fatal host-environment failures. The simulation itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Raw mode, alternate screen or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// No usable audio output
    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    #[error("Audio device error: {0}")]
    AudioDevice(String),
}
