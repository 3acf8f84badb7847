//! Client error definitions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// WebSocket connect or transport failure
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Event could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal input could not be read
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::error::ReadlineError;

    #[test]
    fn test_readline_error_converts() {
        // テスト項目: 入力エラーは ClientError::Readline に変換される
        // given (前提条件):
        let source = ReadlineError::Io(std::io::Error::other("terminal gone"));

        // when (操作):
        let error = ClientError::from(source);

        // then (期待する結果):
        assert!(matches!(error, ClientError::Readline(_)));
        assert_eq!(error.to_string(), "Input error: terminal gone");
    }
}
