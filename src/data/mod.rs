//! Compile-time-embedded artifacts: the model blob and one sample input.

pub mod model;
pub mod sample;

pub use model::{MNIST_MODEL_DATA, MODEL_SCHEMA_VERSION};
pub use sample::{NUMBER_2_DATA, SAMPLE_LEN};
