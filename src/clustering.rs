use ndarray::Array2;
use num_traits::Float;

/// Partition `n` items into clusters given only a pairwise dissimilarity
/// measure: `labels[i]` holds the item index of the exemplar chosen for item
/// `i` (not a compacted cluster id).
///
/// The distance measure is a caller contract: it is never checked for
/// symmetry, the triangle inequality, or finiteness. An asymmetric measure
/// yields an asymmetric similarity matrix and well-defined, if nonstandard,
/// behavior; NaN distances propagate arithmetically.
pub trait Clustering<F>
where
    F: Float,
{
    /// Cluster by item count and an index-pair distance oracle. The other
    /// entry points reduce to this form.
    fn cluster_with<D>(&self, n: usize, distance: D) -> Vec<usize>
    where
        D: Fn(usize, usize) -> F;

    /// Cluster from a materialized n x n distance matrix.
    fn cluster_matrix(&self, distances: &Array2<F>) -> Vec<usize> {
        self.cluster_with(distances.nrows(), |i, j| distances[[i, j]])
    }

    /// Cluster an ordered collection of items under an item-pair distance.
    fn cluster_items<T, D>(&self, items: &[T], distance: D) -> Vec<usize>
    where
        D: Fn(&T, &T) -> F,
    {
        self.cluster_with(items.len(), |i, j| distance(&items[i], &items[j]))
    }
}
