use thiserror::Error;

/// Boxed caller error, kept intact so it can be downcast back to its concrete type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of a resampling run.
///
/// Undefined jackknife influence values are not an error: they surface as
/// [`Diagnostic`](crate::Diagnostic) on an otherwise valid result.
#[derive(Debug, Error)]
pub enum ResampleError {
    /// The sample has no observations.
    #[error("sample must contain at least one observation")]
    EmptySample,

    /// Zero bootstrap replicates were requested.
    #[error("number of bootstrap replicates must be positive")]
    ZeroReplicates,

    /// The statistic failed on a replicate row.
    #[error("statistic failed on bootstrap replicate {replicate}")]
    Statistic {
        /// Zero-based row of the replicate matrix.
        replicate: usize,
        /// Error returned by the statistic.
        #[source]
        source: BoxError,
    },

    /// The summary function failed.
    #[error("summary function failed")]
    Summary {
        /// Error returned by the summary function.
        #[source]
        source: BoxError,
    },
}

/// Failures while loading a [`Sample`](crate::Sample) from CSV.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Reading the underlying file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested column is not in the header row.
    #[error("column `{0}` not found in CSV header")]
    MissingColumn(String),

    /// A field of the requested column is not a number.
    #[error("record {record}: cannot parse `{value}` as a number")]
    InvalidNumber {
        /// One-based data record (header excluded).
        record: usize,
        /// Raw field text.
        value: String,
    },

    /// The file has a header but no data records.
    #[error("CSV file contains no data records")]
    EmptyFile,
}
