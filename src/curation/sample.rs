use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

use super::classify::Classification;
use crate::models::Category;

/// Sampled row indices per category, in sample order.
pub type Samples = BTreeMap<Category, Vec<usize>>;

/// Draws `n` distinct indices uniformly at random.
pub fn sample_indices<R: Rng + ?Sized>(indices: &[usize], n: usize, rng: &mut R) -> Result<Vec<usize>> {
    if indices.len() < n {
        bail!(
            "Not enough indices to sample: requested {}, but only {} available.",
            n,
            indices.len()
        );
    }
    Ok(indices.choose_multiple(rng, n).copied().collect())
}

/// Samples every category in [`Category`] order from one random stream.
pub fn sample_categories<R: Rng + ?Sized>(
    classification: &Classification,
    n: usize,
    rng: &mut R,
) -> Result<Samples> {
    let mut samples = Samples::new();
    for category in Category::iter() {
        let sampled = sample_indices(classification.indices(category), n, &mut *rng)
            .with_context(|| format!("Error for category '{}'", category))?;
        samples.insert(category, sampled);
    }
    Ok(samples)
}
