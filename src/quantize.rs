//! K-means clustering of a color population in RGB space.
//!
//! Samples are clustered on the unit scale (channels ÷ 256) with k-means++
//! seeding. Each call performs `runs` independent restarts and keeps the one
//! with the lowest score. Every restart stops when the centroids move less
//! than `converge` or after `max_iter` iterations, whichever comes first.
//!
//! Seeding is random unless [`QuantizeOptions::seed`] is set, so two unseeded
//! calls on ambiguous input may disagree on centroid values and order.

use std::collections::HashSet;

use kmeans_colors::{Kmeans, get_kmeans};
use palette::Srgb;
use tracing::debug;

use crate::color::{down_scale, up_scale};
use crate::error::{ColorzError, Result};

pub const DEFAULT_MAX_ITER: usize = 20;
pub const DEFAULT_CONVERGE: f32 = 1e-5;
pub const DEFAULT_RUNS: usize = 20;

/// Cluster membership is tracked in a `u8`.
pub const MAX_CLUSTERS: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantizeOptions {
    /// Hard cap on iterations per restart.
    pub max_iter: usize,
    /// Stop a restart once total centroid movement drops to this.
    pub converge: f32,
    /// Independent restarts; the lowest-scoring one wins.
    pub runs: usize,
    /// Seed of the first restart. Restart `i` uses `seed + i`.
    pub seed: Option<u64>,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            converge: DEFAULT_CONVERGE,
            runs: DEFAULT_RUNS,
            seed: None,
        }
    }
}

pub(crate) fn check_cluster_count(n: usize) -> Result<()> {
    if n == 0 || n > MAX_CLUSTERS {
        return Err(ColorzError::InvalidParameter(format!(
            "number of colors must be within 1..={MAX_CLUSTERS}, got {n}"
        )));
    }
    Ok(())
}

/// Cluster `samples` into exactly `n` centroids.
///
/// Repeated samples weigh their color accordingly. Fails with
/// [`ColorzError::ConvergenceFailure`] when there are fewer distinct samples
/// than clusters instead of returning a short palette.
pub fn quantize(samples: &[Srgb<u8>], n: usize, options: &QuantizeOptions) -> Result<Vec<Srgb<u8>>> {
    check_cluster_count(n)?;
    if options.runs == 0 || options.max_iter == 0 {
        return Err(ColorzError::InvalidParameter(
            "k-means needs at least one run and one iteration".to_string(),
        ));
    }

    let distinct = samples
        .iter()
        .map(|c| c.into_components())
        .collect::<HashSet<_>>()
        .len();
    if distinct < n {
        return Err(ColorzError::ConvergenceFailure { requested: n, distinct });
    }

    let buf: Vec<Srgb> = samples
        .iter()
        .map(|c| {
            Srgb::new(
                down_scale(f32::from(c.red)),
                down_scale(f32::from(c.green)),
                down_scale(f32::from(c.blue)),
            )
        })
        .collect();

    let seed = match options.seed {
        Some(seed) => seed,
        None => getrandom::u64().map_err(|e| ColorzError::Entropy(e.to_string()))?,
    };

    let mut best: Option<Kmeans<Srgb>> = None;
    for run in 0..options.runs {
        let run_seed = seed.wrapping_add(run as u64);
        let result = get_kmeans(n, options.max_iter, options.converge, false, &buf, run_seed);
        debug!(run, seed = run_seed, score = result.score, "k-means run finished");
        if best.as_ref().is_none_or(|b| result.score < b.score) {
            best = Some(result);
        }
    }
    let best = best.ok_or(ColorzError::ConvergenceFailure { requested: n, distinct })?;
    debug!(score = best.score, samples = buf.len(), clusters = n, "selected k-means run");

    Ok(best
        .centroids
        .iter()
        .map(|c| Srgb::new(up_scale(c.red), up_scale(c.green), up_scale(c.blue)))
        .collect())
}
