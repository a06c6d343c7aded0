use std::slice::ChunksExact;
use rand::Rng;

/// `nboot × n` bootstrap replicate matrix, stored as a flat row-major pool of
/// drawn observation indices.
///
/// Row `i` is the `i`-th replicate; entry `(i, k)` is the index into the
/// original sample of its `k`-th draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicateMatrix {
    indices: Vec<usize>,
    n: usize,
    nboot: usize,
}

impl ReplicateMatrix {
    /// Draws `n · nboot` indices uniformly with replacement from `0..n`,
    /// filling rows in order.
    ///
    /// Either dimension being zero gives an empty matrix without touching `rng`.
    pub fn draw<R: Rng + ?Sized>(n: usize, nboot: usize, rng: &mut R) -> Self {
        let indices = if n == 0 || nboot == 0 {
            Vec::new()
        } else {
            (0..n * nboot).map(|_| rng.gen_range(0..n)).collect()
        };

        Self { indices, n, nboot }
    }

    /// Observations per replicate.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of replicates.
    pub fn nboot(&self) -> usize {
        self.nboot
    }

    /// Indices drawn for replicate `i`.
    pub fn row(&self, i: usize) -> Option<&[usize]> {
        self.rows().nth(i)
    }

    /// All replicate rows in order.
    pub fn rows(&self) -> ChunksExact<'_, usize> {
        self.indices.chunks_exact(self.n.max(1))
    }

    /// Whether observation `j` was drawn at least once in replicate `i`.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.row(i).is_some_and(|row| row.contains(&j))
    }

    /// Flat row-major pool of drawn values, or `None` if some drawn index
    /// falls outside `sample`.
    pub fn gather<T: Copy>(&self, sample: &[T]) -> Option<Vec<T>> {
        self.indices.iter().map(|&idx| sample.get(idx).copied()).collect()
    }
}
