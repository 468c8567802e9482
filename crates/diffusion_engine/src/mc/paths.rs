//! Arithmetic Brownian motion path generation.
//!
//! Each path evolves on the grid `t_k = k·dt`, `k = 0..=n`, as
//! ```text
//! S(t_k) = S₀ + Σ_{j<k} (μ dt + σ √dt Z_j)
//! ```
//! which is the exact solution of `dS = μ dt + σ dW` sampled on the grid.
//!
//! # Reproducibility
//!
//! The `path_count × n` normal matrix is drawn in one row-major pass from a
//! single [`SimRng`] before the parallel stage. Rows are then prefix-summed
//! independently with Rayon, each carrying only its own running total, so
//! seeded output does not depend on the number of worker threads.

use diffusion_core::types::{SimulationParameters, SimulationResult};
use rayon::prelude::*;
use tracing::debug;

use super::layout::MatrixLayout;
use crate::rng::SimRng;

/// Immutable batch of simulated paths on a shared time grid.
///
/// # Examples
///
/// ```rust
/// use diffusion_core::types::SimulationParameters;
/// use diffusion_engine::mc::simulate;
///
/// let params = SimulationParameters::builder()
///     .path_count(4)
///     .step_size(0.25)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let batch = simulate(&params).unwrap();
/// assert_eq!(batch.time_grid(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// for path in batch.paths() {
///     assert_eq!(path[0], 100.0);
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathBatch {
    time_grid: Vec<f64>,
    values: Vec<f64>,
    path_count: usize,
    step_count: usize,
    seed: Option<u64>,
}

impl PathBatch {
    /// Number of paths (rows).
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Number of time intervals; every path holds `step_count + 1` values.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Seed that reproduces this batch through [`simulate`].
    ///
    /// `None` when the batch was drawn by [`simulate_with_rng`] from a
    /// generator that had already produced variates, since the batch then
    /// starts mid-stream.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Time grid `[0, dt, 2dt, ..., n·dt]`.
    #[inline]
    pub fn time_grid(&self) -> &[f64] {
        &self.time_grid
    }

    /// Row-major value matrix of shape `(path_count, step_count + 1)`.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Values of path `index`, or `None` when out of range.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        self.values.chunks_exact(self.step_count + 1).nth(index)
    }

    /// Iterator over all paths.
    #[inline]
    pub fn paths(&self) -> std::slice::ChunksExact<'_, f64> {
        self.values.chunks_exact(self.step_count + 1)
    }

    /// Value of path `path` at grid index `step`.
    #[inline]
    pub fn value(&self, path: usize, step: usize) -> Option<f64> {
        if path < self.path_count && step <= self.step_count {
            Some(self.values[path * (self.step_count + 1) + step])
        } else {
            None
        }
    }

    /// Cross-section of every path at grid index `step`.
    pub fn column(&self, step: usize) -> Option<Vec<f64>> {
        if step > self.step_count {
            return None;
        }
        Some(self.column_at(step))
    }

    /// Realised values at the final grid point, one per path.
    pub fn terminal_values(&self) -> Vec<f64> {
        self.column_at(self.step_count)
    }

    /// One `(t, values of every path)` row per grid point, in time order.
    ///
    /// This is the tabular export layout: rows are time steps, columns are paths.
    pub fn rows_by_time(&self) -> impl Iterator<Item = (f64, Vec<f64>)> + '_ {
        self.time_grid
            .iter()
            .enumerate()
            .map(move |(step, &t)| (t, self.column_at(step)))
    }

    #[inline]
    fn column_at(&self, step: usize) -> Vec<f64> {
        self.paths().map(|path| path[step]).collect()
    }
}

/// Simulates a batch of paths, seeding from `params.seed` or OS entropy.
///
/// # Errors
///
/// - `InvalidParameter` for parameters failing validation; nothing is allocated
/// - `ResourceExhausted` when the path matrix is too large
///
/// # Examples
///
/// ```rust
/// use diffusion_core::types::SimulationParameters;
/// use diffusion_engine::mc::simulate;
///
/// let params = SimulationParameters::builder().path_count(10).seed(42).build().unwrap();
/// let a = simulate(&params).unwrap();
/// let b = simulate(&params).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn simulate(params: &SimulationParameters) -> SimulationResult<PathBatch> {
    params.validate()?;
    let mut rng = SimRng::from_optional_seed(params.seed);
    simulate_with_rng(params, &mut rng)
}

/// Simulates a batch of paths drawing variates from a caller-owned generator.
///
/// `params.seed` is ignored; the generator's stream is consumed by exactly
/// `path_count × step_count` normal draws. The batch records the generator's
/// seed only when the generator was fresh; see [`PathBatch::seed`].
///
/// # Errors
///
/// As for [`simulate`].
pub fn simulate_with_rng(
    params: &SimulationParameters,
    rng: &mut SimRng,
) -> SimulationResult<PathBatch> {
    params.validate()?;

    let n_paths = params.path_count;
    let n_steps = params.step_count();
    let layout = MatrixLayout::new(n_paths, n_steps)?;

    debug!(
        paths = n_paths,
        steps = n_steps,
        seed = rng.seed(),
        offset = rng.draw_count(),
        "simulating arithmetic Brownian motion"
    );

    let replay_seed = rng.is_fresh().then(|| rng.seed());

    let dt = params.step_size;
    let drift_dt = params.drift * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();
    let initial_value = params.initial_value;

    let mut randoms = layout.zeroed(layout.variate_len())?;
    rng.fill_normal(&mut randoms);

    let mut values = layout.zeroed(layout.value_len())?;
    values
        .par_chunks_mut(n_steps + 1)
        .zip(randoms.par_chunks(n_steps))
        .for_each(|(path, shocks)| {
            accumulate_path(path, shocks, initial_value, drift_dt, vol_sqrt_dt)
        });

    let time_grid = (0..=n_steps).map(|k| k as f64 * dt).collect();

    debug!(paths = n_paths, steps = n_steps, "simulation complete");

    Ok(PathBatch {
        time_grid,
        values,
        path_count: n_paths,
        step_count: n_steps,
        seed: replay_seed,
    })
}

/// Writes `S₀ + cumsum(increments)` into `path`; `path[0] = S₀`.
#[inline]
fn accumulate_path(
    path: &mut [f64],
    shocks: &[f64],
    initial_value: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
) {
    debug_assert_eq!(path.len(), shocks.len() + 1);

    path[0] = initial_value;
    let mut cumulative = 0.0;
    for (slot, &z) in path[1..].iter_mut().zip(shocks) {
        cumulative += drift_dt + vol_sqrt_dt * z;
        *slot = initial_value + cumulative;
    }
}
