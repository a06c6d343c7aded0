use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Computes the arithmetic mean using **Kahan summation** to
/// minimize floating-point error accumulation. This is critical when:
/// - Summing >10⁴ values
/// - Values have large dynamic range
/// - High precision required for downstream statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]> + ?Sized,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();

        // Empty input yields 0 * inf = NaN.

        // Kahan summation: compensates for floating-point rounding errors
        let mut sum = T::zero();
        let mut c = T::zero();

        for &x in slice {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        // Length conversion is exact for practical dataset sizes
        // (f32: exact ≤ 16M elements; f64: exact ≤ 9 quadrillion)
        sum * T::from_usize(slice.len())
            .expect("usize-to-float conversion failed")
            .recip()
    }
}
