//! Buffer sizing and fallible allocation for path matrices.

use diffusion_core::types::{SimulationError, SimulationResult};
use tracing::{trace, warn};

/// Maximum number of `f64` cells in a single path matrix (800 MB).
pub const MAX_MATRIX_ELEMENTS: usize = 100_000_000;

/// Checked dimensions of a `path_count × (step_count + 1)` value matrix and
/// its `path_count × step_count` variate matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixLayout {
    path_count: usize,
    step_count: usize,
    value_len: usize,
    variate_len: usize,
}

impl MatrixLayout {
    /// Computes buffer lengths, rejecting overflow and sizes above
    /// [`MAX_MATRIX_ELEMENTS`].
    ///
    /// # Errors
    ///
    /// `SimulationError::ResourceExhausted` when the matrix is too large.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use diffusion_engine::mc::MatrixLayout;
    ///
    /// let layout = MatrixLayout::new(10, 100).unwrap();
    /// assert_eq!(layout.value_len(), 10 * 101);
    /// assert!(MatrixLayout::new(usize::MAX, 2).is_err());
    /// ```
    pub fn new(path_count: usize, step_count: usize) -> SimulationResult<Self> {
        let exhausted = SimulationError::ResourceExhausted {
            path_count,
            step_count,
        };

        let value_len = step_count
            .checked_add(1)
            .and_then(|columns| columns.checked_mul(path_count))
            .filter(|&len| len <= MAX_MATRIX_ELEMENTS);

        match value_len {
            Some(value_len) => Ok(Self {
                path_count,
                step_count,
                value_len,
                // Strictly smaller than value_len, cannot overflow
                variate_len: path_count * step_count,
            }),
            None => {
                warn!(
                    path_count,
                    step_count,
                    limit = MAX_MATRIX_ELEMENTS,
                    "path matrix request refused"
                );
                Err(exhausted)
            }
        }
    }

    /// Number of paths (rows).
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Number of steps; rows hold `step_count + 1` values.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Length of the value matrix, `path_count × (step_count + 1)`.
    #[inline]
    pub fn value_len(&self) -> usize {
        self.value_len
    }

    /// Length of the variate matrix, `path_count × step_count`.
    #[inline]
    pub fn variate_len(&self) -> usize {
        self.variate_len
    }

    /// Allocates a zeroed buffer of `len` cells, reporting allocator failure
    /// as `ResourceExhausted` instead of aborting.
    pub(crate) fn zeroed(&self, len: usize) -> SimulationResult<Vec<f64>> {
        trace!(len, "reserving simulation buffer");
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| {
            warn!(len, "allocation failed");
            SimulationError::ResourceExhausted {
                path_count: self.path_count,
                step_count: self.step_count,
            }
        })?;
        buffer.resize(len, 0.0);
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_lengths() {
        let layout = MatrixLayout::new(3, 4).unwrap();
        assert_eq!(layout.path_count(), 3);
        assert_eq!(layout.step_count(), 4);
        assert_eq!(layout.value_len(), 15);
        assert_eq!(layout.variate_len(), 12);
    }

    #[test]
    fn test_layout_at_limit() {
        // 1_000 × 100_000 = MAX_MATRIX_ELEMENTS exactly
        let layout = MatrixLayout::new(1_000, 99_999).unwrap();
        assert_eq!(layout.value_len(), MAX_MATRIX_ELEMENTS);
    }

    #[test]
    fn test_layout_above_limit() {
        let err = MatrixLayout::new(1_000, 100_000).unwrap_err();
        assert_eq!(
            err,
            SimulationError::ResourceExhausted {
                path_count: 1_000,
                step_count: 100_000,
            }
        );
    }

    #[test]
    fn test_layout_overflow() {
        assert!(MatrixLayout::new(2, usize::MAX).is_err());
        assert!(MatrixLayout::new(usize::MAX, usize::MAX / 2).is_err());
    }

    #[test]
    fn test_zeroed_buffer() {
        let layout = MatrixLayout::new(2, 2).unwrap();
        let buffer = layout.zeroed(layout.value_len()).unwrap();
        assert_eq!(buffer, vec![0.0; 6]);
    }
}
