//! Digit classifier glue over the external inference runtime.
//!
//! One [`DigitClassifier`] is created at process start and reused for every
//! inference call. Initialization binds the embedded model, the operator
//! registry, and the tensor arena into one interpreter; each call to
//! [`classify`](DigitClassifier::classify) then copies a sample into the
//! input tensor, runs one forward pass, and logs the ten class
//! probabilities. Single-threaded and non-reentrant by construction.

use crate::config::ModelConfig;
use crate::data::sample::{NUMBER_2_DATA, SAMPLE_LEN};
use crate::metrics::InferenceMetrics;
use crate::ops::{OpRegistry, OpRegistryError};
use crate::arena::TensorArena;
use crate::runtime::{InferenceRuntime, Interpreter, ModelGraph, RuntimeError};
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, info};

/// Number of scalar values the model's input tensor holds (28x28 image).
pub const INPUT_LEN: usize = SAMPLE_LEN;

/// Number of output classes.
pub const NUM_CLASSES: usize = 10;

/// Output labels, in output-tensor order.
pub const DIGIT_LABELS: [&str; NUM_CLASSES] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Failures of the two owned operations.
///
/// Configuration errors (everything initialization can report) are fatal to
/// initialization and never retried here. Execution errors are fatal to one
/// call only; the classifier stays initialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// The blob declares a schema version the runtime does not support.
    #[error("model schema version {model} not equal to supported version {supported}")]
    SchemaMismatch {
        /// Version declared by the model blob.
        model: u32,
        /// Version the runtime supports.
        supported: u32,
    },

    /// The configured operator list failed validation.
    #[error("operator registry rejected: {0}")]
    Registry(#[from] OpRegistryError),

    /// The runtime could not map the model blob.
    #[error("model load failed: {0}")]
    ModelLoad(#[source] RuntimeError),

    /// Interpreter construction or tensor allocation failed.
    #[error("tensor allocation failed: {0}")]
    Allocation(#[source] RuntimeError),

    /// The interpreter did not expose the expected input/output tensors.
    #[error("model exposes no {0} tensor at index 0")]
    MissingTensor(&'static str),

    /// A tensor has a different size than this model requires.
    #[error("{tensor} tensor holds {actual} values, expected {expected}")]
    TensorShape {
        tensor: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A sample of the wrong length was passed to `classify`.
    #[error("input sample holds {actual} values, model expects {expected}")]
    InputLength { expected: usize, actual: usize },

    /// The forward pass failed.
    #[error("invoke failed: {0}")]
    Invoke(#[source] RuntimeError),
}

/// Class-probability scores from one forward pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores(pub [f32; NUM_CLASSES]);

impl Scores {
    /// Label and probability of the most likely digit.
    pub fn top_digit(&self) -> (&'static str, f32) {
        let mut best = 0;
        for (i, &p) in self.0.iter().enumerate() {
            if p > self.0[best] {
                best = i;
            }
        }
        (DIGIT_LABELS[best], self.0[best])
    }
}

/// Process-wide classifier context: one interpreter, reused for every call.
pub struct DigitClassifier<R: InferenceRuntime> {
    interpreter: R::Interpreter,
    metrics: InferenceMetrics,
}

impl<R: InferenceRuntime> fmt::Debug for DigitClassifier<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The interpreter is an opaque runtime handle with no Debug surface.
        f.debug_struct("DigitClassifier")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl<R: InferenceRuntime> DigitClassifier<R> {
    /// Bind `model_blob` into `runtime` and produce a ready-to-run classifier.
    ///
    /// Performs the schema version check, builds the operator registry from
    /// configuration, hands the tensor arena to the interpreter by exclusive
    /// ownership, allocates tensors, and verifies the input/output tensor
    /// shapes. Any failure is logged and returned; nothing is retried.
    pub fn initialize(
        runtime: &R,
        config: &ModelConfig,
        model_blob: &[u8],
    ) -> Result<Self, ClassifierError> {
        debug!("Initializing classifier");
        let start = Instant::now();

        debug!("Loading model");
        let model = runtime.load_model(model_blob).map_err(|e| {
            error!(error = %e, "Model load failed");
            ClassifierError::ModelLoad(e)
        })?;

        let supported = runtime.schema_version();
        if model.version() != supported {
            error!(
                model_version = model.version(),
                supported_version = supported,
                "Model provided is schema version {} not equal to supported version {}",
                model.version(),
                supported
            );
            return Err(ClassifierError::SchemaMismatch {
                model: model.version(),
                supported,
            });
        }

        let registry = OpRegistry::from_specs(&config.ops)?;
        debug!(operators = registry.len(), "Operator registry built");

        let arena = TensorArena::new(config.arena_size);
        let arena_capacity = arena.capacity();

        let mut interpreter = runtime
            .build_interpreter(&model, &registry, arena)
            .map_err(|e| {
                error!(error = %e, "Interpreter construction failed");
                ClassifierError::Allocation(e)
            })?;

        interpreter.allocate_tensors().map_err(|e| {
            error!(error = %e, arena_capacity, "AllocateTensors() failed");
            ClassifierError::Allocation(e)
        })?;

        // Obtain the input/output tensors and pin down their shapes now, so
        // inference never has to re-validate the model's geometry.
        let input_len = interpreter
            .input_mut(0)
            .ok_or(ClassifierError::MissingTensor("input"))?
            .len();
        if input_len != INPUT_LEN {
            return Err(ClassifierError::TensorShape {
                tensor: "input",
                expected: INPUT_LEN,
                actual: input_len,
            });
        }

        let output_len = interpreter
            .output(0)
            .ok_or(ClassifierError::MissingTensor("output"))?
            .len();
        if output_len != NUM_CLASSES {
            return Err(ClassifierError::TensorShape {
                tensor: "output",
                expected: NUM_CLASSES,
                actual: output_len,
            });
        }

        let elapsed = start.elapsed();
        let mut metrics = InferenceMetrics::new();
        metrics.record_init(elapsed);
        info!(
            elapsed_ms = elapsed.as_millis() as u64,
            arena_capacity, "Initialize DONE"
        );

        Ok(Self {
            interpreter,
            metrics,
        })
    }

    /// Run one forward pass over the embedded sample digit "2".
    pub fn run(&mut self) -> Result<Scores, ClassifierError> {
        debug!("Loading number data");
        self.classify(&NUMBER_2_DATA)
    }

    /// Run one forward pass over `sample` and log the class probabilities.
    ///
    /// All-or-nothing: on failure no output values are logged or returned,
    /// and the classifier remains usable for the next call.
    pub fn classify(&mut self, sample: &[f32]) -> Result<Scores, ClassifierError> {
        if sample.len() != INPUT_LEN {
            return Err(ClassifierError::InputLength {
                expected: INPUT_LEN,
                actual: sample.len(),
            });
        }

        debug!("Inference Start");
        let start = Instant::now();

        // Shape was verified at initialization; index 0 cannot vanish.
        let input = self
            .interpreter
            .input_mut(0)
            .ok_or(ClassifierError::MissingTensor("input"))?;
        input.copy_from_slice(sample);

        if let Err(e) = self.interpreter.invoke() {
            error!(error = %e, "Invoke failed");
            self.metrics.record_failure();
            return Err(ClassifierError::Invoke(e));
        }

        let output = self
            .interpreter
            .output(0)
            .ok_or(ClassifierError::MissingTensor("output"))?;
        let mut scores = [0.0f32; NUM_CLASSES];
        scores.copy_from_slice(output);

        for (label, prob) in DIGIT_LABELS.iter().zip(scores.iter()) {
            info!(probability = prob, "Prob. of '{}'\t: {:.6}", label, prob);
        }

        let elapsed = start.elapsed();
        self.metrics.record_inference(elapsed);
        info!(elapsed_ms = elapsed.as_millis() as u64, "Inference End");

        Ok(Scores(scores))
    }

    /// Timing and invocation statistics.
    pub fn metrics(&self) -> &InferenceMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_digit_picks_argmax() {
        let mut probs = [0.01f32; NUM_CLASSES];
        probs[2] = 0.91;
        let (label, prob) = Scores(probs).top_digit();
        assert_eq!(label, "2");
        assert!((prob - 0.91).abs() < f32::EPSILON);
    }

    #[test]
    fn labels_are_the_ten_digits_in_order() {
        for (i, label) in DIGIT_LABELS.iter().enumerate() {
            assert_eq!(*label, i.to_string());
        }
    }
}
