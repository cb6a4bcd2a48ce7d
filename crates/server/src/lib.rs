//! Line-delimited JSON transport for the session runtime.
//!
//! Each input line is one [`GameRequest`]; each reply is one JSON line. Lines
//! that do not decode get `{"ok":false,"error":"invalid request"}` and the
//! loop keeps going.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use runtime::{GameRequest, GameResponse, SessionStore, dispatch};

/// Decode and dispatch a single request line.
pub async fn handle_line(store: &SessionStore, line: &str) -> GameResponse {
    match serde_json::from_str::<GameRequest>(line) {
        Ok(request) => {
            tracing::debug!(op = request.as_str(), "request received");
            dispatch(store, request).await
        }
        Err(error) => {
            tracing::debug!(%error, "malformed request line");
            GameResponse::invalid_request()
        }
    }
}

/// Serve requests until `reader` reaches end of input.
pub async fn serve<R, W>(store: &SessionStore, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(store, line).await;
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    Ok(())
}
