use ndarray::Array2;
use num_traits::Float;
use rand::Rng;

use crate::affinity_propagation::ApConfig;

/// Build the similarity matrix for `n` items: `S[i][j] = -distance(i, j)`,
/// each entry optionally perturbed by an independent uniform draw from
/// `[0, noise_scale)` to break exact ties. The configured preference policy is
/// resolved against every constructed value (collected before the diagonal is
/// overwritten, since the diagonal is about to be set by that very policy) and
/// written onto the whole diagonal.
///
/// Entries are filled, and noise draws consumed, in row-major order, so a
/// seeded run is reproducible entry for entry.
pub(crate) fn build<F, D>(n: usize, distance: &D, config: &ApConfig<F>) -> Array2<F>
where
    F: Float,
    D: Fn(usize, usize) -> F,
{
    let mut rng = config.rng();
    let mut similarity = Array2::<F>::zeros((n, n));
    let mut values = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let mut s = -distance(i, j);
            if let Some(rng) = rng.as_mut() {
                s = s - F::from(rng.gen::<f64>()).unwrap() * config.noise_scale;
            }
            similarity[[i, j]] = s;
            values.push(s);
        }
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let preference = config.preference.resolve(&values);
    similarity.diag_mut().map_inplace(|v| *v = preference);
    similarity
}
