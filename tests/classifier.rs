//! End-to-end tests of the classifier glue over the scripted runtime.

use digit_classifier::classifier::{ClassifierError, DigitClassifier, NUM_CLASSES};
use digit_classifier::config::ModelConfig;
use digit_classifier::data::{MNIST_MODEL_DATA, NUMBER_2_DATA};
use digit_classifier::runtime::RuntimeError;
use digit_classifier::testing::{model_blob, FakeRuntime};

#[test]
fn embedded_model_initializes_with_matching_schema() {
    let runtime = FakeRuntime::new();
    let classifier = DigitClassifier::initialize(&runtime, &ModelConfig::default(), MNIST_MODEL_DATA);
    assert!(classifier.is_ok());
}

#[test]
fn schema_mismatch_fails_initialization_naming_both_versions() {
    let runtime = FakeRuntime::new().with_schema_version(3);
    let blob = model_blob(99);

    let err = DigitClassifier::initialize(&runtime, &ModelConfig::default(), &blob).unwrap_err();

    assert_eq!(
        err,
        ClassifierError::SchemaMismatch {
            model: 99,
            supported: 3
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("99"));
    assert!(msg.contains('3'));
}

#[test]
fn sample_inference_produces_ten_scores() {
    let runtime = FakeRuntime::new();
    let mut classifier =
        DigitClassifier::initialize(&runtime, &ModelConfig::default(), MNIST_MODEL_DATA).unwrap();

    let scores = classifier.run().unwrap();

    assert_eq!(scores.0.len(), NUM_CLASSES);
    let (label, prob) = scores.top_digit();
    assert_eq!(label, "2");
    assert!(prob > 0.9);
}

#[test]
fn consecutive_runs_are_deterministic() {
    let runtime = FakeRuntime::new();
    let mut classifier =
        DigitClassifier::initialize(&runtime, &ModelConfig::default(), MNIST_MODEL_DATA).unwrap();

    let first = classifier.run().unwrap();
    let second = classifier.run().unwrap();

    assert_eq!(first, second);
    assert_eq!(classifier.metrics().inferences_run(), 2);
}

#[test]
fn invoke_failure_yields_no_scores_and_classifier_survives() {
    let runtime = FakeRuntime::new().with_invoke_failure();
    let mut classifier =
        DigitClassifier::initialize(&runtime, &ModelConfig::default(), MNIST_MODEL_DATA).unwrap();

    let err = classifier.run().unwrap_err();
    assert!(matches!(err, ClassifierError::Invoke(_)));
    assert_eq!(classifier.metrics().inferences_run(), 0);
    assert_eq!(classifier.metrics().inferences_failed(), 1);

    // A failed pass must not wedge the context; the next call is accepted.
    let err = classifier.classify(&NUMBER_2_DATA).unwrap_err();
    assert!(matches!(err, ClassifierError::Invoke(_)));
}

#[test]
fn undersized_arena_fails_initialization_deterministically() {
    let runtime = FakeRuntime::new().with_arena_requirement(64 * 1024);
    let config = ModelConfig {
        arena_size: 16 * 1024,
        ..ModelConfig::default()
    };

    for _ in 0..2 {
        let err =
            DigitClassifier::initialize(&runtime, &config, MNIST_MODEL_DATA).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::Allocation(RuntimeError::ArenaExhausted {
                requested: 64 * 1024,
                capacity: 16 * 1024,
            })
        );
    }
}

#[test]
fn wrong_sample_length_is_rejected_before_the_runtime() {
    let runtime = FakeRuntime::new();
    let mut classifier =
        DigitClassifier::initialize(&runtime, &ModelConfig::default(), MNIST_MODEL_DATA).unwrap();

    let short = vec![0.0f32; 100];
    let err = classifier.classify(&short).unwrap_err();
    assert_eq!(
        err,
        ClassifierError::InputLength {
            expected: 784,
            actual: 100
        }
    );
}

#[test]
fn classifier_result_is_debuggable() {
    let runtime = FakeRuntime::new();
    let result = DigitClassifier::initialize(&runtime, &ModelConfig::default(), MNIST_MODEL_DATA);

    // Failure paths unwrap through the Ok side, so the context itself must
    // format; the interpreter handle is elided.
    let rendered = format!("{:?}", result.unwrap());
    assert!(rendered.contains("DigitClassifier"));
    assert!(rendered.contains("metrics"));
}

#[test]
fn model_with_unexpected_input_shape_is_rejected_at_init() {
    let runtime = FakeRuntime::new().with_input_len(196);
    let err = DigitClassifier::initialize(&runtime, &ModelConfig::default(), MNIST_MODEL_DATA)
        .unwrap_err();
    assert_eq!(
        err,
        ClassifierError::TensorShape {
            tensor: "input",
            expected: 784,
            actual: 196
        }
    );
}
