use num_traits::{Float, FromPrimitive};
use super::{Mean, Statistic};

/// Variance with a degrees-of-freedom adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variance {
    /// Subtracted from `n` in the denominator.
    pub ddof: usize,
}

impl Variance {
    /// Creates a new `Variance` estimator with the given degrees of freedom adjustment.
    ///
    /// - `ddof = 0`: population variance (biased)
    /// - `ddof = 1`: sample variance (unbiased, Bessel's correction), the default
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }

    /// Population variance (`ddof = 0`).
    pub fn population() -> Self {
        Variance { ddof: 0 }
    }
}

impl Default for Variance {
    /// Returns a `Variance` estimator with `ddof = 1` (unbiased sample variance).
    fn default() -> Self {
        Variance { ddof: 1 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]> + ?Sized,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        // Sample variance is undefined for n < 2; in general for n <= ddof
        if slice.len() < 2 || slice.len() <= self.ddof {
            return T::nan();
        }

        let mean: T = Mean.compute(slice);

        // Kahan summation for squared deviations
        let mut sq_sum = T::zero();
        let mut c2 = T::zero();
        for &x in slice {
            let dev = x - mean;
            let y = dev * dev - c2;
            let t = sq_sum + y;
            c2 = (t - sq_sum) - y;
            sq_sum = t;
        }

        let dof = T::from_usize(slice.len() - self.ddof).expect("usize fits in float");
        sq_sum / dof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sample_variance_uses_bessel_correction() {
        let data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(Variance::default().compute(&data), 32.0 / 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Variance::population().compute(&data), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn too_few_observations_is_nan() {
        let v: f64 = Variance::default().compute(&[1.0_f64][..]);
        assert!(v.is_nan());
        let v: f32 = Variance::new(3).compute(&[1.0_f32, 2.0, 3.0][..]);
        assert!(v.is_nan());
    }

    #[test]
    fn constant_data_has_zero_variance() {
        let v: f32 = Variance::default().compute(&vec![1.5_f32; 64]);
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-7);
    }
}
