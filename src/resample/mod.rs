pub use rand::Rng;

mod matrix;

pub use matrix::ReplicateMatrix;
