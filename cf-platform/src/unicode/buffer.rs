//! Grow-and-retry buffer protocol shared by the conversion stages.

use super::UnicodeError;

/// Run `op` against a buffer of `initial` elements, growing it once if needed.
///
/// `op` fills the buffer and returns how many elements it wrote, or reports
/// [`UnicodeError::BufferOverflow`] with the size it actually needs. That
/// size is authoritative, so the buffer is resized to it and `op` runs
/// exactly one more time. Any other error, including a second overflow, is
/// returned unchanged.
pub fn grow_and_retry<T, F>(initial: usize, mut op: F) -> Result<Vec<T>, UnicodeError>
where
    T: Copy + Default,
    F: FnMut(&mut [T]) -> Result<usize, UnicodeError>,
{
    let mut buf = vec![T::default(); initial];

    let written = match op(&mut buf) {
        Ok(written) => written,
        Err(UnicodeError::BufferOverflow { required }) => {
            buf.resize(required, T::default());
            op(&mut buf)?
        }
        Err(e) => return Err(e),
    };

    buf.truncate(written);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_first_time() {
        let mut calls = 0;
        let out: Vec<u16> = grow_and_retry(4, |buf| {
            calls += 1;
            buf[..2].copy_from_slice(&[1, 2]);
            Ok(2)
        })
        .unwrap();

        assert_eq!(out, vec![1, 2]);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_grows_to_reported_size_once() {
        let mut capacities = Vec::new();
        let out: Vec<u16> = grow_and_retry(2, |buf| {
            capacities.push(buf.len());
            if buf.len() < 5 {
                return Err(UnicodeError::BufferOverflow { required: 5 });
            }
            buf.copy_from_slice(&[9; 5]);
            Ok(5)
        })
        .unwrap();

        assert_eq!(out, vec![9; 5]);
        assert_eq!(capacities, vec![2, 5]);
    }

    #[test]
    fn test_second_overflow_is_an_error() {
        let mut calls = 0;
        let result: Result<Vec<u16>, _> = grow_and_retry(1, |buf| {
            calls += 1;
            Err(UnicodeError::BufferOverflow {
                required: buf.len() + 1,
            })
        });

        assert!(matches!(result, Err(UnicodeError::BufferOverflow { required: 3 })));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_hard_error_is_not_retried() {
        let mut calls = 0;
        let result: Result<Vec<u16>, _> = grow_and_retry(8, |_| {
            calls += 1;
            Err(UnicodeError::InvalidInput { offset: 3 })
        });

        assert!(matches!(result, Err(UnicodeError::InvalidInput { offset: 3 })));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_empty_input() {
        let out: Vec<u16> = grow_and_retry(0, |_| Ok(0)).unwrap();
        assert!(out.is_empty());
    }
}
