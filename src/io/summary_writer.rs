use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::domain::RunSummary;

/// Write the run summary as pretty-printed JSON followed by a newline
pub async fn write_summary<W>(summary: &RunSummary, mut writer: W) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let json = serde_json::to_vec_pretty(summary)?;
    writer.write_all(&json).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
