//! Line-by-line normalization of a text stream into JSON lines.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::normalizer::{ContentNormalizer, NormalizationOutcome};

/// Write one outcome as a JSON line and flush it.
pub async fn write_outcome<W>(writer: &mut W, outcome: &NormalizationOutcome) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(outcome).context("Failed to serialize outcome")?;
    line.push('\n');
    writer
        .write_all(line.as_bytes())
        .await
        .context("Failed to write outcome")?;
    writer.flush().await.context("Failed to flush output")?;
    Ok(())
}

/// Normalize every non-blank line of `reader` as its own content.
///
/// Each outcome is written as soon as its line is processed, so an input that
/// stays open (a pipe from `tail -f`) produces output as lines arrive.
/// Returns the number of contents processed.
pub async fn normalize_lines<R, W>(
    normalizer: &ContentNormalizer,
    reader: R,
    mut writer: W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut processed = 0;

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        if line.trim().is_empty() {
            continue;
        }
        let outcome = normalizer.translate_content(&line).await;
        write_outcome(&mut writer, &outcome).await?;
        processed += 1;
    }

    Ok(processed)
}
