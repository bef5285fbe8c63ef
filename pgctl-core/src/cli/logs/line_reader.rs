use crate::cli::logs::constants::INITIAL_LINE_CAPACITY;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Error)]
pub enum LineError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line too long (limit is {limit} bytes)")]
    TooLong { limit: usize },
}

/// Newline-delimited reader whose buffer grows up to `max_line_size`.
///
/// A line longer than the limit is consumed up to its terminating newline and
/// reported as [`LineError::TooLong`], so the caller can keep reading after it.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    max_line_size: usize,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R, max_line_size: usize) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(INITIAL_LINE_CAPACITY.min(max_line_size)),
            max_line_size,
        }
    }

    /// Returns the next line without its trailing `\n`, or `None` at end of input.
    pub async fn next_line(&mut self) -> Result<Option<&[u8]>, LineError> {
        self.buf.clear();
        let mut too_long = false;

        loop {
            let (found_newline, used) = {
                let available = self.inner.fill_buf().await?;
                if available.is_empty() {
                    // EOF
                    if too_long {
                        return Err(LineError::TooLong {
                            limit: self.max_line_size,
                        });
                    }
                    if self.buf.is_empty() {
                        return Ok(None);
                    }
                    return Ok(Some(&self.buf));
                }

                let newline = available.iter().position(|b| *b == b'\n');
                let chunk = &available[..newline.unwrap_or(available.len())];

                if !too_long {
                    if self.buf.len() + chunk.len() > self.max_line_size {
                        too_long = true;
                        self.buf.clear();
                    } else {
                        self.buf.extend_from_slice(chunk);
                    }
                }

                match newline {
                    Some(i) => (true, i + 1),
                    None => (false, available.len()),
                }
            };

            self.inner.consume(used);

            if found_newline {
                if too_long {
                    return Err(LineError::TooLong {
                        limit: self.max_line_size,
                    });
                }
                return Ok(Some(&self.buf));
            }
        }
    }
}
