pub use affinity_propagation::{AffinityPropagation, ApConfig};
pub use clustering::Clustering;
pub use distance::{Cosine, Distance, Euclidean};
pub use error::{Error, Result};
pub use preference::Preference;
pub use priority_queue::PriorityQueue;

mod affinity_propagation;
mod algorithm;
mod clustering;
mod distance;
mod error;
mod preference;
mod priority_queue;
mod similarity;
