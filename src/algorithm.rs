use ndarray::{Array1, Array2};
use num_traits::Float;

/// Message-passing state: the similarity matrix plus the responsibility and
/// availability matrices it drives. Runs a fixed number of damped update
/// rounds, then resolves exemplars and labels from the final diagonals.
pub(crate) struct Messages<F> {
    similarity: Array2<F>,
    responsibility: Array2<F>,
    availability: Array2<F>,
    damping: F,
}

impl<F> Messages<F>
where
    F: Float,
{
    pub(crate) fn new(similarity: Array2<F>, damping: F) -> Self {
        let dim = similarity.dim();
        Self {
            similarity,
            responsibility: Array2::zeros(dim),
            availability: Array2::zeros(dim),
            damping,
        }
    }

    /// One full round: every responsibility row, then fresh positive column
    /// sums, then every availability entry. The ordering is load-bearing; the
    /// availability update reads the responsibilities written this round.
    pub(crate) fn update(&mut self) {
        self.update_responsibility();
        self.update_availability();
    }

    /// `R[i][k] <- damping * R[i][k] + (1 - damping) * (S[i][k] - competing)`,
    /// where `competing` is the best `A[i][.] + S[i][.]` over the rest of the
    /// row. One max/second-max pass per row stands in for excluding each k
    /// from its own competition.
    fn update_responsibility(&mut self) {
        let n = self.similarity.nrows();
        let damping = self.damping;
        let blend = F::one() - damping;
        for i in 0..n {
            let mut max = F::neg_infinity();
            let mut second = F::neg_infinity();
            let mut argmax = 0;
            for k in 0..n {
                let candidate = self.availability[[i, k]] + self.similarity[[i, k]];
                if candidate > max {
                    second = max;
                    max = candidate;
                    argmax = k;
                } else if candidate > second {
                    second = candidate;
                }
            }
            for k in 0..n {
                let competing = if k == argmax { second } else { max };
                self.responsibility[[i, k]] = damping * self.responsibility[[i, k]]
                    + blend * (self.similarity[[i, k]] - competing);
            }
        }
    }

    fn update_availability(&mut self) {
        let n = self.similarity.nrows();
        let zero = F::zero();
        let damping = self.damping;
        let blend = F::one() - damping;

        // Column sums of positive responsibilities, recomputed from the
        // responsibilities just written.
        let mut positive_sums = Array1::<F>::zeros(n);
        for k in 0..n {
            let mut sum = zero;
            for i in 0..n {
                let r = self.responsibility[[i, k]];
                if r > zero {
                    sum = sum + r;
                }
            }
            positive_sums[k] = sum;
        }

        for i in 0..n {
            for k in 0..n {
                let self_support = self.responsibility[[k, k]].max(zero);
                let candidate = if i == k {
                    positive_sums[k] - self_support
                } else {
                    let own_support = self.responsibility[[i, k]].max(zero);
                    (self.responsibility[[k, k]] + positive_sums[k] - own_support - self_support)
                        .min(zero)
                };
                self.availability[[i, k]] =
                    damping * self.availability[[i, k]] + blend * candidate;
            }
        }
    }

    /// Indices whose diagonal responsibility + availability is positive.
    /// May be empty for degenerate configurations.
    pub(crate) fn exemplars(&self) -> Vec<usize> {
        let zero = F::zero();
        (0..self.similarity.nrows())
            .filter(|&i| self.responsibility[[i, i]] + self.availability[[i, i]] > zero)
            .collect()
    }

    /// Assign each point the exemplar with the highest raw similarity, first
    /// encountered winning ties. An empty exemplar set leaves every point at
    /// the default label 0.
    pub(crate) fn labels(&self) -> Vec<usize> {
        let exemplars = self.exemplars();
        (0..self.similarity.nrows())
            .map(|i| {
                let mut best = F::neg_infinity();
                let mut label = 0;
                for &exemplar in exemplars.iter() {
                    let s = self.similarity[[i, exemplar]];
                    if s > best {
                        best = s;
                        label = exemplar;
                    }
                }
                label
            })
            .collect()
    }
}
