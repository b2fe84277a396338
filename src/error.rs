//! Error Types

use thiserror::Error;

/// Main error type
#[derive(Debug, Clone, Error)]
pub enum WavPadError {
    #[error("Config error: {message}")]
    Config { message: String },
    #[error("IO error: {message}")]
    Io { message: String },
    #[error("Tool error: {message}")]
    Tool { message: String },
    #[error("Audio error: {message}")]
    Audio { message: String },
}

impl WavPadError {
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }
    pub fn tool<S: Into<String>>(msg: S) -> Self { Self::Tool { message: msg.into() } }
    pub fn audio<S: Into<String>>(msg: S) -> Self { Self::Audio { message: msg.into() } }
}

pub type Result<T> = std::result::Result<T, WavPadError>;

impl From<std::io::Error> for WavPadError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}

impl From<hound::Error> for WavPadError {
    fn from(err: hound::Error) -> Self { Self::audio(format!("WAV: {}", err)) }
}
