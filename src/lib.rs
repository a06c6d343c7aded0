//! Bootstrap distributions of arbitrary statistics, with jackknife-after-bootstrap
//! standard errors of summaries of those distributions.
//!
//! The entry points are [`resample`], [`resample_with_summary`] and the
//! [`Estimator`] builder. Randomness is always supplied by the caller, so any
//! seeded [`rand::Rng`] makes a run reproducible.

mod error;
mod sample;
mod resample;
mod statistics;
mod estimator;
mod display;

pub use crate::error::{BoxError, ResampleError, SampleError};
pub use crate::sample::Sample;
pub use crate::resample::*;
pub use crate::statistics::*;
pub use crate::estimator::*;
pub use rand;
