//! Trailing scan buffer.

/// Text window bounded to a maximum number of characters.
///
/// Bytes are decoded leniently on the way in: invalid UTF-8 sequences are
/// dropped and the valid text around them is kept.
#[derive(Debug)]
pub(crate) struct ScanBuffer {
    text: String,
    chars: usize,
    window: usize,
}

impl ScanBuffer {
    pub(crate) fn new(window: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            window,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Append raw bytes, skipping any invalid UTF-8.
    pub(crate) fn push_bytes(&mut self, mut bytes: &[u8]) {
        loop {
            match std::str::from_utf8(bytes) {
                Ok(valid) => {
                    self.push_str(valid);
                    return;
                }
                Err(err) => {
                    let (valid, rest) = bytes.split_at(err.valid_up_to());
                    if let Ok(valid) = std::str::from_utf8(valid) {
                        self.push_str(valid);
                    }
                    match err.error_len() {
                        Some(len) => bytes = &rest[len..],
                        // Truncated sequence at the end of input.
                        None => return,
                    }
                }
            }
        }
    }

    fn push_str(&mut self, text: &str) {
        self.chars += text.chars().count();
        self.text.push_str(text);
    }

    /// Drop leading characters until at most `window` remain.
    pub(crate) fn truncate_front(&mut self) -> bool {
        if self.chars <= self.window {
            return false;
        }
        let excess = self.chars - self.window;
        let cut = self
            .text
            .char_indices()
            .nth(excess)
            .map_or(self.text.len(), |(index, _)| index);
        self.text.drain(..cut);
        self.chars = self.window;
        true
    }

    #[cfg(test)]
    fn char_len(&self) -> usize {
        self.chars
    }
}
