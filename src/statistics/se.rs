use num_traits::{Float, FromPrimitive};
use super::{Mean, Statistic};

/// Jackknife dispersion of a set of leave-one-out values:
/// ```text
/// sqrt( (n - 1) / n · Σ (vᵢ - v̄)² )
/// ```
/// NaN for empty input; zero for a single value.
pub fn jackknife_spread<T: Float + FromPrimitive>(values: &[T]) -> T {
    if values.is_empty() {
        return T::nan();
    }

    let n = T::from_usize(values.len()).expect("usize-to-float conversion failed");
    let mean: T = Mean.compute(values);
    let sq_sum = values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));

    ((n - T::one()) / n * sq_sum).sqrt()
}
