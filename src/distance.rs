use ndarray::ArrayView1;
use num_traits::Float;

/// A pairwise distance between two data rows.
pub trait Distance<F>
where
    F: Float,
{
    fn distance(&self, a: &ArrayView1<F>, b: &ArrayView1<F>) -> F;
}

/// Euclidean distance `sqrt(sum((a_i - b_i)^2))`
///
///     use ndarray::arr1;
///     use apclust::{Distance, Euclidean};
///
///     let a = arr1(&[0., 3.]);
///     let b = arr1(&[4., 0.]);
///     let d: f64 = Euclidean::default().distance(&a.view(), &b.view());
///     assert!((d - 5.).abs() < 1e-12);
#[derive(Debug, Default, Clone)]
pub struct Euclidean;

impl<F> Distance<F> for Euclidean
where
    F: Float,
{
    fn distance(&self, a: &ArrayView1<F>, b: &ArrayView1<F>) -> F {
        a.iter()
            .zip(b.iter())
            .fold(F::zero(), |acc, (&x, &y)| acc + (x - y).powi(2))
            .sqrt()
    }
}

/// Cosine distance `1 - (a . b)/(|a|*|b|)`
///
///     use ndarray::arr1;
///     use apclust::{Cosine, Distance};
///
///     let a = arr1(&[1., 0.]);
///     let b = arr1(&[0., 1.]);
///     let d: f64 = Cosine::default().distance(&a.view(), &b.view());
///     assert!((d - 1.).abs() < 1e-12);
#[derive(Debug, Default, Clone)]
pub struct Cosine;

impl<F> Distance<F> for Cosine
where
    F: Float,
{
    fn distance(&self, a: &ArrayView1<F>, b: &ArrayView1<F>) -> F {
        let dot = a
            .iter()
            .zip(b.iter())
            .fold(F::zero(), |acc, (&x, &y)| acc + x * y);
        let a_magnitude = a.iter().fold(F::zero(), |acc, &x| acc + x * x).sqrt();
        let b_magnitude = b.iter().fold(F::zero(), |acc, &y| acc + y * y).sqrt();
        F::one() - dot / a_magnitude / b_magnitude
    }
}
