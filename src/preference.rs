use num_traits::Float;

use crate::error::{Error, Result};

/// Preference is the self-similarity value written onto the diagonal of the
/// similarity matrix. Higher values bias each point toward acting as its own
/// exemplar, yielding more clusters; lower values yield fewer.
///
/// - Median/Min/Max/Average: computed from the full similarity value list
/// - Constant: use the supplied value directly
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preference<F>
where
    F: Float,
{
    Median,
    Min,
    Max,
    Average,
    Constant(F),
}

impl<F> Preference<F>
where
    F: Float,
{
    /// Map a policy name to a preference, using `constant` as the payload for
    /// the `constant` policy. Names outside the supported set are rejected
    /// before any matrix work happens.
    pub fn parse(name: &str, constant: F) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "median" => Ok(Preference::Median),
            "min" => Ok(Preference::Min),
            "max" => Ok(Preference::Max),
            "average" => Ok(Preference::Average),
            "constant" => Ok(Preference::Constant(constant)),
            other => Err(Error::InvalidPreference(other.to_string())),
        }
    }

    /// Resolve the policy against an ascending-sorted similarity value list.
    ///
    /// The even-count median averages the two middle elements; the odd-count
    /// median is the single middle element.
    pub(crate) fn resolve(&self, sorted_values: &[F]) -> F {
        match self {
            Preference::Constant(value) => *value,
            Preference::Min => sorted_values[0],
            Preference::Max => sorted_values[sorted_values.len() - 1],
            Preference::Median => {
                let count = sorted_values.len();
                if count & 1 == 0 {
                    let half = F::from(0.5).unwrap();
                    half * (sorted_values[count >> 1] + sorted_values[(count - 1) >> 1])
                } else {
                    sorted_values[count >> 1]
                }
            }
            Preference::Average => {
                let total = sorted_values
                    .iter()
                    .fold(F::zero(), |acc, &value| acc + value);
                total / F::from(sorted_values.len()).unwrap()
            }
        }
    }
}

impl<F> Default for Preference<F>
where
    F: Float,
{
    fn default() -> Self {
        Preference::Median
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::preference::Preference;

    #[test]
    fn median_even_count() {
        let values = [-4., -3., -1., 0.];
        assert_eq!(-2., Preference::Median.resolve(&values));
    }

    #[test]
    fn median_odd_count() {
        let values = [-4., -3., -1.];
        assert_eq!(-3., Preference::Median.resolve(&values));
    }

    #[test]
    fn min_max_average() {
        let values = [-4., -3., -1., 0.];
        assert_eq!(-4., Preference::Min.resolve(&values));
        assert_eq!(0., Preference::Max.resolve(&values));
        assert_eq!(-2., Preference::Average.resolve(&values));
    }

    #[test]
    fn constant_ignores_values() {
        let values = [-4., -3., -1., 0.];
        assert_eq!(-7.5, Preference::Constant(-7.5).resolve(&values));
    }

    #[test]
    fn parse_policy_names() {
        assert_eq!(
            Preference::Median,
            Preference::<f64>::parse("median", -1.).unwrap()
        );
        assert_eq!(
            Preference::Max,
            Preference::<f64>::parse("MAX", -1.).unwrap()
        );
        assert_eq!(
            Preference::Constant(-1.),
            Preference::parse("constant", -1.).unwrap()
        );
    }

    #[test]
    fn parse_rejects_unknown_policy() {
        assert_eq!(
            Err(Error::InvalidPreference("centroid".to_string())),
            Preference::<f64>::parse("centroid", -1.)
        );
    }
}
