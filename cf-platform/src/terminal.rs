//! Terminal helpers for single-line progress output.

use std::io::{self, Write};

/// ANSI "erase to end of line".
pub const ERASE_TO_END_OF_LINE: &str = "\x1b[K";

/// Erase the rest of the line and return the cursor to column zero.
///
/// Write errors are ignored; progress output is cosmetic.
pub fn clear_progress_line<W: Write>(out: &mut W) {
    let _ = write_clear(out);
}

fn write_clear<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(ERASE_TO_END_OF_LINE.as_bytes())?;
    out.write_all(b"\r")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_writes_erase_then_carriage_return() {
        let mut out = Vec::new();
        clear_progress_line(&mut out);
        assert_eq!(out, b"\x1b[K\r");
    }

    #[test]
    fn test_write_failure_is_ignored() {
        clear_progress_line(&mut FailingWriter);
    }
}
