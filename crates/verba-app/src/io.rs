use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use verba_types::{Request, Response};

use crate::controller::RequestClient;

/// Serve one JSON request per stdin line, one JSON response per stdout line
pub async fn stdio_server(client: RequestClient, cancel: CancellationToken) -> anyhow::Result<()> {
    tracing::info!("Serving requests on stdin");
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve_lines(stdin, stdout, client, cancel).await
}

pub async fn serve_lines<R, W>(
    reader: R,
    mut writer: W,
    client: RequestClient,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Stdio transport stopping");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::info!("Stdin closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => client.send(request).await?,
            Err(e) => {
                tracing::warn!("Malformed request line: {}", e);
                Response::error(format!("Malformed request: {e}"))
            }
        };

        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}
