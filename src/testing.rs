//! Scripted runtime implementation for tests.
//!
//! The real inference engine lives outside this repository, so the test
//! suite exercises the glue against a [`FakeRuntime`] that honors the same
//! contract: a schema version read from the blob header, a fixed arena
//! requirement checked at tensor allocation, and a deterministic output
//! vector produced by every successful invoke. Knobs cover each failure the
//! contract can report.

use crate::arena::TensorArena;
use crate::ops::OpRegistry;
use crate::runtime::{InferenceRuntime, Interpreter, ModelGraph, RuntimeError};

/// Serialize a fake model blob declaring `version` in its header.
///
/// Matches the layout of the embedded blob in [`crate::data::model`]: a
/// little-endian `u32` schema version followed by opaque graph bytes.
pub fn model_blob(version: u32) -> Vec<u8> {
    let mut blob = version.to_le_bytes().to_vec();
    blob.extend_from_slice(&[0xAA; 60]);
    blob
}

/// Scripted stand-in for the external inference runtime.
pub struct FakeRuntime {
    schema_version: u32,
    arena_required: usize,
    input_len: usize,
    output: Vec<f32>,
    fail_invoke: bool,
}

impl FakeRuntime {
    /// Runtime supporting schema version 3 with a model that needs 64 KiB
    /// of arena, takes a 784-value input, and scores the digit "2" highest.
    pub fn new() -> Self {
        let mut output = vec![0.002f32; 10];
        output[2] = 0.974;
        output[3] = 0.01;
        Self {
            schema_version: 3,
            arena_required: 64 * 1024,
            input_len: 784,
            output,
            fail_invoke: false,
        }
    }

    /// Override the schema version the runtime supports.
    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    /// Override how much arena the model's tensor plan requires.
    pub fn with_arena_requirement(mut self, bytes: usize) -> Self {
        self.arena_required = bytes;
        self
    }

    /// Override the model's input tensor length.
    pub fn with_input_len(mut self, len: usize) -> Self {
        self.input_len = len;
        self
    }

    /// Override the scores every successful invoke produces.
    pub fn with_output(mut self, output: Vec<f32>) -> Self {
        self.output = output;
        self
    }

    /// Make every forward pass fail.
    pub fn with_invoke_failure(mut self) -> Self {
        self.fail_invoke = true;
        self
    }
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Model handle produced by [`FakeRuntime::load_model`].
pub struct FakeModel {
    version: u32,
}

impl ModelGraph for FakeModel {
    fn version(&self) -> u32 {
        self.version
    }
}

/// Interpreter produced by [`FakeRuntime::build_interpreter`].
pub struct FakeInterpreter {
    arena: TensorArena,
    arena_required: usize,
    allocated: bool,
    input: Vec<f32>,
    output: Vec<f32>,
    scripted_output: Vec<f32>,
    fail_invoke: bool,
}

impl Interpreter for FakeInterpreter {
    fn allocate_tensors(&mut self) -> Result<(), RuntimeError> {
        if self.arena.capacity() < self.arena_required {
            return Err(RuntimeError::ArenaExhausted {
                requested: self.arena_required,
                capacity: self.arena.capacity(),
            });
        }
        self.allocated = true;
        Ok(())
    }

    fn invoke(&mut self) -> Result<(), RuntimeError> {
        if !self.allocated {
            return Err(RuntimeError::InvokeFailed("tensors not allocated".into()));
        }
        if self.fail_invoke {
            return Err(RuntimeError::InvokeFailed("kernel error".into()));
        }
        self.output.copy_from_slice(&self.scripted_output);
        Ok(())
    }

    fn input_mut(&mut self, index: usize) -> Option<&mut [f32]> {
        if !self.allocated || index != 0 {
            return None;
        }
        Some(&mut self.input)
    }

    fn output(&self, index: usize) -> Option<&[f32]> {
        if !self.allocated || index != 0 {
            return None;
        }
        Some(&self.output)
    }
}

impl InferenceRuntime for FakeRuntime {
    type Model = FakeModel;
    type Interpreter = FakeInterpreter;

    fn schema_version(&self) -> u32 {
        self.schema_version
    }

    fn load_model(&self, blob: &[u8]) -> Result<Self::Model, RuntimeError> {
        let header: [u8; 4] = blob
            .get(..4)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| RuntimeError::MalformedModel("blob shorter than header".into()))?;
        Ok(FakeModel {
            version: u32::from_le_bytes(header),
        })
    }

    fn build_interpreter(
        &self,
        _model: &Self::Model,
        _registry: &OpRegistry,
        arena: TensorArena,
    ) -> Result<Self::Interpreter, RuntimeError> {
        Ok(FakeInterpreter {
            arena,
            arena_required: self.arena_required,
            allocated: false,
            input: vec![0.0; self.input_len],
            output: vec![0.0; self.output.len()],
            scripted_output: self.output.clone(),
            fail_invoke: self.fail_invoke,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::default_op_table;

    #[test]
    fn load_model_reads_version_from_header() {
        let runtime = FakeRuntime::new();
        let model = runtime.load_model(&model_blob(7)).unwrap();
        assert_eq!(model.version(), 7);
    }

    #[test]
    fn truncated_blob_is_malformed() {
        let runtime = FakeRuntime::new();
        assert!(matches!(
            runtime.load_model(&[0x03, 0x00]),
            Err(RuntimeError::MalformedModel(_))
        ));
    }

    #[test]
    fn invoke_before_allocate_fails() {
        let runtime = FakeRuntime::new();
        let model = runtime.load_model(&model_blob(3)).unwrap();
        let registry = OpRegistry::from_specs(&default_op_table()).unwrap();
        let mut interp = runtime
            .build_interpreter(&model, &registry, TensorArena::new(80 * 1024))
            .unwrap();
        assert!(interp.invoke().is_err());
        assert!(interp.input_mut(0).is_none());
    }
}
