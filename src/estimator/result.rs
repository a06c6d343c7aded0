use std::io;

use serde::Serialize;
use thiserror::Error;

use super::Membership;

/// Echo of the inputs of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallParameters<T> {
    /// The original sample.
    pub sample: Vec<T>,
    /// Observations per replicate (`sample.len()`).
    pub n: usize,
    /// Number of bootstrap replicates.
    pub nboot: usize,
    /// Membership rule used for the jackknife-after-bootstrap.
    pub membership: Membership,
    /// Whether a summary function was supplied.
    pub summary: bool,
}

/// Non-fatal conditions detected during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
pub enum Diagnostic {
    /// Some jackknife influence values are NaN, so no standard error was computed.
    #[error(
        "{count} of {n} jackknife influence values are undefined (first at observation {first}); \
         increase nboot and retry"
    )]
    UndefinedInfluence {
        /// Number of NaN influence values.
        count: usize,
        /// Number of observations.
        n: usize,
        /// Index of the first NaN influence value.
        first: usize,
    },
}

/// Everything a resampling run produces.
///
/// The summary-related fields are `None` when no summary function was given;
/// `jackknife_se` is also `None` when [`Diagnostic::UndefinedInfluence`] fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootstrapResult<T> {
    /// Inputs of the run.
    pub parameters: CallParameters<T>,
    /// Statistic of each replicate, in replicate order.
    pub theta_star: Vec<T>,
    /// Summary of `theta_star`.
    pub func_theta_star: Option<T>,
    /// Summary of `theta_star` over the replicates lacking each observation.
    pub jack_boot_val: Option<Vec<T>>,
    /// Jackknife standard error of the summary.
    pub jackknife_se: Option<T>,
    /// Set when the standard error had to be withheld.
    pub diagnostic: Option<Diagnostic>,
}

impl<T> BootstrapResult<T> {
    pub(crate) fn distribution_only(parameters: CallParameters<T>, theta_star: Vec<T>) -> Self {
        Self {
            parameters,
            theta_star,
            func_theta_star: None,
            jack_boot_val: None,
            jackknife_se: None,
            diagnostic: None,
        }
    }

    /// Number of bootstrap replicates.
    pub fn replicates(&self) -> usize {
        self.theta_star.len()
    }

    /// Writes the bootstrap distribution as `replicate,theta_star` CSV rows.
    pub fn write_theta_star<W: io::Write>(&self, writer: W) -> Result<(), csv::Error>
    where
        T: Serialize,
    {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["replicate", "theta_star"])?;
        for (replicate, theta) in self.theta_star.iter().enumerate() {
            wtr.serialize((replicate, theta))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
