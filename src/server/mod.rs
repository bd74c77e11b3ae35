//! JSON-lines validation service.
//!
//! Front-ends that cannot link the crate talk to it over stdin/stdout: one
//! request object per line in, one response object per line out.

pub mod handlers;

pub use handlers::{Request, Response, ValidationService};

use crate::error::ServiceResult;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Serve requests from `reader` until EOF, writing one response line per request.
///
/// Blank lines are skipped. Malformed lines, including ones that are not
/// UTF-8, produce an error response and do not stop the loop; only transport
/// failures do.
pub async fn serve<R, W>(service: &ValidationService, mut reader: R, mut writer: W) -> ServiceResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let response = service.handle_bytes(&line);
        writer.write_all(response.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Run the service over stdin/stdout.
///
/// # Returns
/// An error if reading stdin or writing stdout fails
pub async fn run_stdio(service: ValidationService) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    serve(&service, stdin, stdout).await?;

    service.metrics().log_summary();
    Ok(())
}
