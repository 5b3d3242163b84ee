use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// Configuration errors
    #[error("Config Error: {0}")]
    Config(String),

    /// Store unreachable, connection lost, or a bad URL
    #[error("Connection Error: {0}")]
    Connection(redis::RedisError),

    /// The store answered with an error reply, e.g. WRONGTYPE
    #[error("Store Error: {0}")]
    Store(redis::RedisError),

    /// Cached bytes are not valid UTF-8
    #[error("Decode Error: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Cached text is not a JSON value
    #[error("Parse Error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing the rendering to the console failed
    #[error("Output Error: {0}")]
    Output(#[from] std::io::Error),
}

// Split transport failures from error replies sent back by the server
impl From<redis::RedisError> for ViewerError {
    fn from(err: redis::RedisError) -> Self {
        let is_transport = err.kind() == redis::ErrorKind::InvalidClientConfig
            || err.is_io_error()
            || err.is_connection_refusal()
            || err.is_connection_dropped()
            || err.is_timeout();
        if is_transport {
            ViewerError::Connection(err)
        } else {
            ViewerError::Store(err)
        }
    }
}

impl ViewerError {
    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ViewerError::Config(_) => "config",
            ViewerError::Connection(_) => "connection",
            ViewerError::Store(_) => "store",
            ViewerError::Decode(_) => "decode",
            ViewerError::Parse(_) => "parse",
            ViewerError::Output(_) => "output",
        }
    }
}
