//! Digit Classifier Demo
//!
//! Glue code that binds a pre-trained MNIST digit-classifier model into an
//! external inference runtime, feeds it one embedded sample image, and logs
//! the resulting class probabilities. The interpreter, operator kernels, and
//! tensor allocator all live behind the [`runtime`] contract; this crate owns
//! only operator registration, model mapping, the input copy, one forward
//! pass per call, and reporting.

pub mod arena;
pub mod classifier;
pub mod config;
pub mod data;
pub mod logging;
pub mod metrics;
pub mod ops;
pub mod runtime;
pub mod testing;

pub use arena::TensorArena;
pub use classifier::{ClassifierError, DigitClassifier, Scores, DIGIT_LABELS};
pub use config::AppConfig;
pub use metrics::InferenceMetrics;
pub use ops::{BuiltinOp, OpRegistry, OpSpec};
pub use runtime::{InferenceRuntime, Interpreter, ModelGraph, RuntimeError};
