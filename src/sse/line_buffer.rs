//! Line accumulation for the SSE byte stream.

/// Accumulates decoded text and yields complete `\n`-terminated lines.
///
/// The trailing piece after the last `\n` is kept for the next call. Lines are
/// returned without the `\n`; a trailing `\r` is left in place for the frame
/// parser to trim.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fragment` and return every line it completed, in order.
    pub fn feed(&mut self, fragment: &str) -> Vec<String> {
        self.pending.push_str(fragment);

        let Some(last_newline) = self.pending.rfind('\n') else {
            return Vec::new();
        };

        let rest = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, rest);
        complete[..last_newline]
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    /// End of stream. An un-terminated final line is discarded; its content
    /// is returned so the caller can log it.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }

    /// The buffered partial line.
    pub fn pending(&self) -> &str {
        &self.pending
    }
}
