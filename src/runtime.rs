//! Contract with the external inference runtime.
//!
//! The interpreter, operator kernels, and arena-backed tensor allocator are
//! a pre-existing library outside this repository. These traits capture the
//! exact surface this crate consumes from it: load a model blob into a
//! versioned graph handle, build an interpreter from {graph, operator
//! registry, scratch arena}, then `allocate_tensors` / `invoke` / tensor
//! access by index. A firmware build links a concrete implementation; tests
//! use [`crate::testing::FakeRuntime`].

use crate::arena::TensorArena;
use crate::ops::OpRegistry;
use thiserror::Error;

/// Failures reported by the runtime across the contract boundary.
///
/// These map the runtime's status codes into typed errors. The glue layer
/// never retries any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The model blob could not be parsed as a serialized graph.
    #[error("malformed model blob: {0}")]
    MalformedModel(String),

    /// Tensor allocation needed more scratch memory than the arena holds.
    #[error("tensor arena exhausted: model needs {requested} bytes, arena holds {capacity}")]
    ArenaExhausted {
        /// Bytes the model's tensor plan requires.
        requested: usize,
        /// Capacity of the arena that was handed over.
        capacity: usize,
    },

    /// The graph references an operator the registry does not cover.
    #[error("operator {0} is not registered")]
    UnsupportedOperator(String),

    /// A forward pass failed partway through the graph.
    #[error("invoke failed: {0}")]
    InvokeFailed(String),
}

/// A model blob mapped into the runtime.
///
/// Mapping is a lightweight operation over the embedded bytes; no copying
/// or eager parsing is implied.
pub trait ModelGraph {
    /// Schema version declared inside the serialized blob.
    fn version(&self) -> u32;
}

/// A ready-to-run interpreter over one model graph.
///
/// The interpreter exclusively owns the [`TensorArena`] it was built with
/// and carves all input, output, and intermediate tensors out of it.
pub trait Interpreter {
    /// Plan and allocate all tensors from the arena.
    ///
    /// Must be called once before the first [`invoke`](Interpreter::invoke).
    /// Fails with [`RuntimeError::ArenaExhausted`] when the arena is too
    /// small for the model; the runtime must detect this deterministically
    /// rather than write out of bounds.
    fn allocate_tensors(&mut self) -> Result<(), RuntimeError>;

    /// Run one forward pass over the current input tensor contents.
    fn invoke(&mut self) -> Result<(), RuntimeError>;

    /// Mutable view of input tensor `index`, or `None` if out of range.
    fn input_mut(&mut self, index: usize) -> Option<&mut [f32]>;

    /// View of output tensor `index`, or `None` if out of range.
    fn output(&self, index: usize) -> Option<&[f32]>;
}

/// Entry points of the external inference runtime.
pub trait InferenceRuntime {
    /// Graph handle type produced by [`load_model`](InferenceRuntime::load_model).
    type Model: ModelGraph;
    /// Interpreter type produced by [`build_interpreter`](InferenceRuntime::build_interpreter).
    type Interpreter: Interpreter;

    /// The schema version this runtime supports.
    fn schema_version(&self) -> u32;

    /// Map a serialized model blob into a graph handle.
    fn load_model(&self, blob: &[u8]) -> Result<Self::Model, RuntimeError>;

    /// Build an interpreter from a graph, an operator registry, and a
    /// scratch arena. The arena moves in by value and is owned by the
    /// interpreter from here on; the caller must never alias it again.
    fn build_interpreter(
        &self,
        model: &Self::Model,
        registry: &OpRegistry,
        arena: TensorArena,
    ) -> Result<Self::Interpreter, RuntimeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_exhausted_message_names_both_sizes() {
        let err = RuntimeError::ArenaExhausted {
            requested: 96 * 1024,
            capacity: 80 * 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("98304"));
        assert!(msg.contains("81920"));
    }
}
