use crate::constants::{LINE_TERMINATOR, MAX_LINE_LENGTH};
use std::collections::VecDeque;

/// Accumulates raw serial bytes and hands out complete text lines.
pub(crate) struct LineBuffer {
    buffer: VecDeque<u8>,
}

impl LineBuffer {
    pub(crate) fn new() -> LineBuffer {
        LineBuffer {
            buffer: VecDeque::new(),
        }
    }

    pub(crate) fn extend(&mut self, data: &[u8]) {
        self.buffer.extend(data);
        if self.buffer.len() > MAX_LINE_LENGTH && find_terminator(&self.buffer).is_none() {
            log::trace!("Dropping {} bytes without a line terminator", self.buffer.len());
            self.buffer.clear();
        }
    }

    /// Next non-empty complete line, or `None` when only a partial line remains.
    pub(crate) fn next_line(&mut self) -> Option<String> {
        while let Some(end_index) = find_terminator(&self.buffer) {
            let raw = self.buffer.drain(..=end_index).collect::<Vec<_>>();
            let line = decode(&raw);
            if !line.is_empty() {
                return Some(line);
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.buffer.len()
    }
}

fn find_terminator(buffer: &VecDeque<u8>) -> Option<usize> {
    buffer.iter().position(|b| *b == LINE_TERMINATOR)
}

/// UTF-8 decode that drops invalid bytes, then trims whitespace and `\r`.
pub(crate) fn decode(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"10,20\r\n30,40\n");
        assert_eq!(buffer.next_line(), Some("10,20".to_string()));
        assert_eq!(buffer.next_line(), Some("30,40".to_string()));
        assert_eq!(buffer.next_line(), None);
        assert_eq!(buffer.pending(), 0);
    }

    #[test]
    fn test_partial_line_is_held() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"90,1");
        assert_eq!(buffer.next_line(), None);
        assert_eq!(buffer.pending(), 4);

        buffer.extend(b"2.5\n91,");
        assert_eq!(buffer.next_line(), Some("90,12.5".to_string()));
        assert_eq!(buffer.next_line(), None);
        assert_eq!(buffer.pending(), 3);
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let mut buffer = LineBuffer::new();
        buffer.extend(b"\n\r\n  \n5,6\n");
        assert_eq!(buffer.next_line(), Some("5,6".to_string()));
        assert_eq!(buffer.next_line(), None);
    }

    #[test]
    fn test_decode_ignores_invalid_bytes() {
        assert_eq!(decode(&[b'4', 0xFF, b'5', b',', b'1', b'0', b'\n']), "45,10");
        assert_eq!(decode(b"  7,8 \r\n"), "7,8");
    }

    #[test]
    fn test_overlong_garbage_is_dropped() {
        let mut buffer = LineBuffer::new();
        buffer.extend(&[b'x'; MAX_LINE_LENGTH + 1]);
        assert_eq!(buffer.pending(), 0);

        buffer.extend(b"1,2\n");
        assert_eq!(buffer.next_line(), Some("1,2".to_string()));
    }
}
