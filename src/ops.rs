//! Declarative operator registry for the inference runtime.
//!
//! The runtime ships every kernel it knows about, but an embedded build only
//! registers the handful its model actually uses. Instead of a hard-coded
//! sequence of registration calls, the set is data: a list of
//! [`OpSpec`] entries (operator plus accepted version range) that can come
//! from configuration or from [`default_op_table`], validated once into an
//! [`OpRegistry`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Builtin operators the digit-classifier model graph uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinOp {
    Quantize,
    DepthwiseConv2d,
    MaxPool2d,
    Conv2d,
    FullyConnected,
    Softmax,
    Dequantize,
}

impl fmt::Display for BuiltinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuiltinOp::Quantize => "quantize",
            BuiltinOp::DepthwiseConv2d => "depthwise_conv_2d",
            BuiltinOp::MaxPool2d => "max_pool_2d",
            BuiltinOp::Conv2d => "conv_2d",
            BuiltinOp::FullyConnected => "fully_connected",
            BuiltinOp::Softmax => "softmax",
            BuiltinOp::Dequantize => "dequantize",
        };
        f.write_str(name)
    }
}

/// One operator registration: which kernel, and which versions of it the
/// runtime may accept from the model graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpSpec {
    /// Operator to register.
    pub op: BuiltinOp,
    /// Lowest accepted operator version.
    #[serde(default = "default_version")]
    pub min_version: u32,
    /// Highest accepted operator version.
    #[serde(default = "default_version")]
    pub max_version: u32,
}

fn default_version() -> u32 {
    1
}

impl OpSpec {
    /// Spec accepting exactly version 1 of `op`.
    pub fn new(op: BuiltinOp) -> Self {
        Self {
            op,
            min_version: 1,
            max_version: 1,
        }
    }

    /// Spec accepting versions `min..=max` of `op`.
    pub fn versions(op: BuiltinOp, min: u32, max: u32) -> Self {
        Self {
            op,
            min_version: min,
            max_version: max,
        }
    }
}

/// Invalid registry configurations, rejected before the runtime sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpRegistryError {
    /// `min_version`..`max_version` is empty or starts below 1.
    #[error("invalid version range {min}..={max} for operator {op}")]
    InvalidVersionRange {
        op: BuiltinOp,
        min: u32,
        max: u32,
    },

    /// The same operator appears twice in the spec list.
    #[error("operator {0} registered twice")]
    DuplicateOp(BuiltinOp),
}

/// Validated operator table handed to the interpreter constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpRegistry {
    specs: Vec<OpSpec>,
}

impl OpRegistry {
    /// Build a registry from a spec list, validating version ranges and
    /// rejecting duplicate operators.
    pub fn from_specs(specs: &[OpSpec]) -> Result<Self, OpRegistryError> {
        let mut seen: Vec<BuiltinOp> = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.min_version < 1 || spec.min_version > spec.max_version {
                return Err(OpRegistryError::InvalidVersionRange {
                    op: spec.op,
                    min: spec.min_version,
                    max: spec.max_version,
                });
            }
            if seen.contains(&spec.op) {
                return Err(OpRegistryError::DuplicateOp(spec.op));
            }
            seen.push(spec.op);
        }
        Ok(Self {
            specs: specs.to_vec(),
        })
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when no operators are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Whether `op` at `version` is covered by a registration.
    pub fn supports(&self, op: BuiltinOp, version: u32) -> bool {
        self.specs
            .iter()
            .any(|s| s.op == op && (s.min_version..=s.max_version).contains(&version))
    }

    /// Iterate the registered specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &OpSpec> {
        self.specs.iter()
    }
}

/// The registration set for the quantized MNIST classifier, with the
/// version ranges its graph requires.
pub fn default_op_table() -> Vec<OpSpec> {
    vec![
        OpSpec::new(BuiltinOp::Quantize),
        OpSpec::versions(BuiltinOp::DepthwiseConv2d, 1, 3),
        OpSpec::versions(BuiltinOp::MaxPool2d, 1, 2),
        OpSpec::versions(BuiltinOp::Conv2d, 1, 3),
        OpSpec::versions(BuiltinOp::FullyConnected, 1, 4),
        OpSpec::versions(BuiltinOp::Softmax, 1, 2),
        OpSpec::versions(BuiltinOp::Dequantize, 1, 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_builds_a_registry() {
        let registry = OpRegistry::from_specs(&default_op_table()).unwrap();
        assert_eq!(registry.len(), 7);
        assert!(registry.supports(BuiltinOp::FullyConnected, 4));
        assert!(registry.supports(BuiltinOp::Softmax, 1));
    }

    #[test]
    fn version_outside_range_is_unsupported() {
        let registry = OpRegistry::from_specs(&default_op_table()).unwrap();
        assert!(!registry.supports(BuiltinOp::Quantize, 2));
        assert!(!registry.supports(BuiltinOp::MaxPool2d, 3));
    }

    #[test]
    fn duplicate_operator_is_rejected() {
        let specs = [
            OpSpec::new(BuiltinOp::Softmax),
            OpSpec::versions(BuiltinOp::Softmax, 1, 2),
        ];
        let err = OpRegistry::from_specs(&specs).unwrap_err();
        assert_eq!(err, OpRegistryError::DuplicateOp(BuiltinOp::Softmax));
    }

    #[test]
    fn inverted_version_range_is_rejected() {
        let specs = [OpSpec::versions(BuiltinOp::Conv2d, 3, 1)];
        assert!(matches!(
            OpRegistry::from_specs(&specs),
            Err(OpRegistryError::InvalidVersionRange { .. })
        ));
    }

    #[test]
    fn zero_min_version_is_rejected() {
        let specs = [OpSpec::versions(BuiltinOp::Conv2d, 0, 1)];
        assert!(matches!(
            OpRegistry::from_specs(&specs),
            Err(OpRegistryError::InvalidVersionRange { .. })
        ));
    }

    #[test]
    fn op_spec_roundtrips_through_serde_names() {
        let spec = OpSpec::versions(BuiltinOp::DepthwiseConv2d, 1, 3);
        assert_eq!(spec.op.to_string(), "depthwise_conv_2d");
    }
}
