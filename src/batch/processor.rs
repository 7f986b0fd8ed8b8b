//! Per-line batch transformation with ordered reassembly
//!
//! Applies a caller-supplied async transformation to every line of a
//! document, either sequentially or as independent concurrent tasks. In
//! both modes the output order is the input order: concurrency affects
//! interleaving and wall-clock time only, never the observable result.
//!
//! There is no cancellation. Once a concurrent batch is launched every task
//! is awaited to completion, and any single failure fails the batch as a
//! whole; no partial results are returned. The transformation closures are
//! expected not to touch shared mutable state, but that contract is the
//! caller's to keep.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info};

use crate::model::{CsvFile, CsvLine};
use crate::{Error, Result};

/// Execution strategy for a batch of per-line transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Strict input order; one transformation completes before the next starts
    Sequential,
    /// All transformations run as independent tasks; results are reassembled
    /// into input order before returning
    Concurrent,
}

/// Transform every line, returning the results in input order
///
/// The handler receives each line by value and produces a transformed line
/// or an error. In [`BatchMode::Concurrent`] each line is spawned as its
/// own tokio task carrying its input index, and completions are collected
/// into an index-addressed slot vector, so completion order never leaks
/// into the result.
///
/// # Errors
///
/// Any single handler failure (or task panic) fails the whole batch with
/// [`Error::BatchTask`] naming the first failing line index.
///
/// # Example
///
/// ```rust
/// use csvdoc::{BatchMode, CsvLine, process_lines};
///
/// # async fn example(lines: Vec<CsvLine>) -> csvdoc::Result<()> {
/// let processed = process_lines(lines, BatchMode::Concurrent, |mut line| async move {
///     line.set(0, "processed");
///     Ok(line)
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn process_lines<F, Fut>(
    lines: Vec<CsvLine>,
    mode: BatchMode,
    handler: F,
) -> Result<Vec<CsvLine>>
where
    F: Fn(CsvLine) -> Fut,
    Fut: Future<Output = Result<CsvLine>> + Send + 'static,
{
    info!("Processing batch of {} lines ({:?})", lines.len(), mode);

    match mode {
        BatchMode::Sequential => {
            let mut processed = Vec::with_capacity(lines.len());
            for (index, line) in lines.into_iter().enumerate() {
                let transformed = handler(line)
                    .await
                    .map_err(|e| Error::batch_task(index, e.to_string()))?;
                processed.push(transformed);
            }
            Ok(processed)
        }
        BatchMode::Concurrent => {
            let total = lines.len();

            // Spawn every line as its own task, tagged with its input index
            let mut tasks: FuturesUnordered<_> = lines
                .into_iter()
                .enumerate()
                .map(|(index, line)| {
                    let fut = handler(line);
                    tokio::spawn(async move { (index, fut.await) })
                })
                .collect();

            // Drain completions into index-addressed slots. Every task is
            // awaited even after a failure; only the first error is kept.
            let mut slots: Vec<Option<CsvLine>> = (0..total).map(|_| None).collect();
            let mut first_error: Option<Error> = None;

            while let Some(joined) = tasks.next().await {
                match joined {
                    Ok((index, Ok(line))) => slots[index] = Some(line),
                    Ok((index, Err(e))) => {
                        debug!("Line {} failed: {}", index, e);
                        if first_error.is_none() {
                            first_error = Some(Error::batch_task(index, e.to_string()));
                        }
                    }
                    Err(join_error) => {
                        if first_error.is_none() {
                            first_error =
                                Some(Error::batch_task(total, join_error.to_string()));
                        }
                    }
                }
            }

            if let Some(error) = first_error {
                return Err(error);
            }

            // All tasks completed without error, so every slot is filled
            let processed = slots
                .into_iter()
                .enumerate()
                .map(|(index, slot)| {
                    slot.ok_or_else(|| Error::batch_task(index, "missing result slot"))
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(processed)
        }
    }
}

/// Transform every line of a document, preserving its origin path
///
/// Convenience wrapper over [`process_lines`] that rebuilds a [`CsvFile`]
/// from the transformed lines.
pub async fn process_file<F, Fut>(mut file: CsvFile, mode: BatchMode, handler: F) -> Result<CsvFile>
where
    F: Fn(CsvLine) -> Fut,
    Fut: Future<Output = Result<CsvLine>> + Send + 'static,
{
    let lines = std::mem::take(&mut file.lines);
    file.lines = process_lines(lines, mode, handler).await?;
    Ok(file)
}
