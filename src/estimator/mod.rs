//! Bootstrap distribution of a statistic with an optional
//! jackknife-after-bootstrap standard error of a summary of that distribution.
//!
//! For a sample of size `n` and `nboot` replicates:
//! ```text
//! θ*ᵢ      = statistic(replicate i)                      i = 1..nboot
//! s(θ*)    = summary(θ*)
//! s₍ⱼ₎     = summary({ θ*ᵢ : replicate i lacks observation j })
//! SE_jack  = sqrt( (n - 1) / n · Σⱼ (s₍ⱼ₎ - mean(s₍.₎))² )
//! ```
//! The jackknife values reuse the bootstrap replicates; no second round of
//! resampling is needed (Efron, 1992).

use num_traits::{Float, FromPrimitive};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BoxError, ResampleError};
use std::convert::Infallible;

use crate::statistics::{jackknife_spread, Statistic, TryStatistic};
use crate::ReplicateMatrix;

mod membership;
mod result;

pub use membership::{Membership, MembershipMatrix};
pub use result::{BootstrapResult, CallParameters, Diagnostic};

/// Tuning of a resampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of bootstrap replicates; must be positive.
    pub nboot: usize,
    /// Membership rule for the jackknife-after-bootstrap.
    pub membership: Membership,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            nboot: 1000,
            membership: Membership::ByValue,
        }
    }
}

/// Placeholder summary type of an [`Estimator`] without a summary function.
///
/// Uninhabited: it can never be supplied.
#[derive(Debug, Clone, Copy)]
pub enum NoSummary {}

impl<D: ?Sized, T> Statistic<D, T> for NoSummary {
    fn compute(&self, _data: &D) -> T {
        match *self {}
    }
}

impl<D: ?Sized, T> TryStatistic<D, T> for NoSummary {
    type Error = Infallible;

    fn try_compute(&self, _data: &D) -> Result<T, Infallible> {
        match *self {}
    }
}

/// Bootstrap estimator of a statistic, optionally summarised with a
/// jackknife standard error.
///
/// The estimator holds no per-call state; randomness is borrowed on each
/// [`run`](Estimator::run), so one estimator can serve many samples.
///
/// ```ignore
/// let result = Estimator::new(Mean)
///     .nboot(500)
///     .summary(Mean)
///     .run(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut rng)?;
/// ```
#[derive(Debug, Clone)]
pub struct Estimator<Stat, Sum = NoSummary> {
    statistic: Stat,
    summary: Option<Sum>,
    config: BootstrapConfig,
}

impl<Stat> Estimator<Stat> {
    /// Estimator of `statistic` with the default configuration and no summary.
    pub fn new(statistic: Stat) -> Self {
        Self::with_config(statistic, BootstrapConfig::default())
    }

    /// Estimator of `statistic` with an explicit configuration and no summary.
    pub fn with_config(statistic: Stat, config: BootstrapConfig) -> Self {
        Self {
            statistic,
            summary: None,
            config,
        }
    }
}

impl<Stat, Sum> Estimator<Stat, Sum> {
    /// Sets the number of bootstrap replicates.
    #[must_use]
    pub fn nboot(mut self, nboot: usize) -> Self {
        self.config.nboot = nboot;
        self
    }

    /// Sets the membership rule.
    #[must_use]
    pub fn membership(mut self, membership: Membership) -> Self {
        self.config.membership = membership;
        self
    }

    /// Adds a summary of the bootstrap distribution and requests its
    /// jackknife standard error.
    pub fn summary<S>(self, summary: S) -> Estimator<Stat, S> {
        Estimator {
            statistic: self.statistic,
            summary: Some(summary),
            config: self.config,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Draws the replicates, evaluates the statistic on each and, when a
    /// summary was given, computes the jackknife-after-bootstrap values.
    ///
    /// # Errors
    /// - [`ResampleError::EmptySample`] / [`ResampleError::ZeroReplicates`]
    ///   before any draw.
    /// - [`ResampleError::Statistic`] / [`ResampleError::Summary`] carrying the
    ///   caller's own error.
    ///
    /// NaN influence values are not an error: the result then carries a
    /// [`Diagnostic`] and no standard error.
    ///
    /// # Panics
    /// Only if a drawn index falls outside the sample, which `ReplicateMatrix::draw`
    /// rules out.
    pub fn run<T, S, R>(&self, sample: &S, rng: &mut R) -> Result<BootstrapResult<T>, ResampleError>
    where
        T: Float + FromPrimitive,
        S: AsRef<[T]> + ?Sized,
        R: Rng + ?Sized,
        Stat: TryStatistic<[T], T>,
        Stat::Error: Into<BoxError>,
        Sum: TryStatistic<[T], T>,
        Sum::Error: Into<BoxError>,
    {
        let sample = sample.as_ref();
        let n = sample.len();
        let nboot = self.config.nboot;

        if n == 0 {
            return Err(ResampleError::EmptySample);
        }
        if nboot == 0 {
            return Err(ResampleError::ZeroReplicates);
        }

        debug!(n, nboot, summary = self.summary.is_some(), "drawing bootstrap replicates");

        let matrix = ReplicateMatrix::draw(n, nboot, rng);
        let pool = matrix
            .gather(sample)
            .expect("replicate indices are drawn from 0..n");

        let mut theta_star = Vec::with_capacity(nboot);
        for (replicate, row) in pool.chunks_exact(n).enumerate() {
            let theta = self
                .statistic
                .try_compute(row)
                .map_err(|e| ResampleError::Statistic { replicate, source: e.into() })?;
            theta_star.push(theta);
        }

        let parameters = CallParameters {
            sample: sample.to_vec(),
            n,
            nboot,
            membership: self.config.membership,
            summary: self.summary.is_some(),
        };

        let Some(summary) = &self.summary else {
            return Ok(BootstrapResult::distribution_only(parameters, theta_star));
        };

        let func_theta_star = summarize(summary, &theta_star)?;

        let members = MembershipMatrix::build(&matrix, sample, self.config.membership);
        let mut jack_boot_val = Vec::with_capacity(n);
        let mut kept = Vec::with_capacity(nboot);
        for j in 0..n {
            kept.clear();
            kept.extend(
                theta_star
                    .iter()
                    .zip(members.column(j))
                    .filter_map(|(&theta, inside)| (!inside).then_some(theta)),
            );
            jack_boot_val.push(summarize(summary, &kept)?);
        }

        let undefined = jack_boot_val.iter().filter(|v| v.is_nan()).count();
        let (jackknife_se, diagnostic) = match jack_boot_val.iter().position(|v| v.is_nan()) {
            Some(first) => {
                let diagnostic = Diagnostic::UndefinedInfluence { count: undefined, n, first };
                warn!(undefined, n, nboot, "{diagnostic}");
                (None, Some(diagnostic))
            }
            None => (Some(jackknife_spread(&jack_boot_val)), None),
        };

        debug!(nboot, jackknife_se = jackknife_se.is_some(), "resampling finished");

        Ok(BootstrapResult {
            parameters,
            theta_star,
            func_theta_star: Some(func_theta_star),
            jack_boot_val: Some(jack_boot_val),
            jackknife_se,
            diagnostic,
        })
    }
}

fn summarize<T, Sum>(summary: &Sum, values: &[T]) -> Result<T, ResampleError>
where
    Sum: TryStatistic<[T], T>,
    Sum::Error: Into<BoxError>,
{
    summary
        .try_compute(values)
        .map_err(|e| ResampleError::Summary { source: e.into() })
}

/// Bootstrap distribution of `statistic` over `nboot` replicates of `sample`.
///
/// # Errors
/// See [`Estimator::run`].
pub fn resample<T, S, Stat, R>(
    sample: &S,
    nboot: usize,
    statistic: Stat,
    rng: &mut R,
) -> Result<BootstrapResult<T>, ResampleError>
where
    T: Float + FromPrimitive,
    S: AsRef<[T]> + ?Sized,
    R: Rng + ?Sized,
    Stat: TryStatistic<[T], T>,
    Stat::Error: Into<BoxError>,
{
    Estimator::new(statistic).nboot(nboot).run(sample, rng)
}

/// [`resample`] plus `summary` of the distribution and its jackknife
/// standard error.
///
/// # Errors
/// See [`Estimator::run`].
pub fn resample_with_summary<T, S, Stat, Sum, R>(
    sample: &S,
    nboot: usize,
    statistic: Stat,
    summary: Sum,
    rng: &mut R,
) -> Result<BootstrapResult<T>, ResampleError>
where
    T: Float + FromPrimitive,
    S: AsRef<[T]> + ?Sized,
    R: Rng + ?Sized,
    Stat: TryStatistic<[T], T>,
    Stat::Error: Into<BoxError>,
    Sum: TryStatistic<[T], T>,
    Sum::Error: Into<BoxError>,
{
    Estimator::new(statistic).nboot(nboot).summary(summary).run(sample, rng)
}
