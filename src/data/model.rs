//! Embedded digit-classifier model blob.
//!
//! The serialized graph for the quantized MNIST convolutional classifier
//! (conv / depthwise-conv / max-pool / fully-connected / softmax, with
//! quantize and dequantize at the boundaries). The first four bytes are the
//! little-endian schema version declared by the serializer; the remainder is
//! the graph, weights, and quantization parameters, opaque to this crate and
//! interpreted only by the inference runtime.
//!
//! Read-only for the life of the process. The runtime maps it in place; no
//! copy or parse happens on this side of the contract.

/// Schema version declared in the blob header.
pub const MODEL_SCHEMA_VERSION: u32 = 3;

/// Serialized model graph, weights, and quantization parameters.
#[rustfmt::skip]
pub static MNIST_MODEL_DATA: &[u8] = &[
    0x03, 0x00, 0x00, 0x00, 0xc9, 0x0e, 0x73, 0x35, 0x1b, 0xae, 0xde, 0x74, 0x11, 0x21, 0xae, 0x3f,
    0x3a, 0x65, 0x1c, 0x37, 0x2e, 0x1f, 0xfe, 0xad, 0x02, 0x1f, 0x70, 0xa2, 0xc5, 0xde, 0x8c, 0xe4,
    0x22, 0x82, 0x66, 0x45, 0x71, 0x2a, 0x53, 0xd3, 0x56, 0xb8, 0x07, 0x1b, 0xbe, 0x1a, 0x85, 0xb1,
    0x77, 0x91, 0xd4, 0xdb, 0x25, 0xd5, 0x02, 0x79, 0x54, 0x05, 0x53, 0xe2, 0xb1, 0x2f, 0x75, 0x09,
    0x77, 0xe6, 0x52, 0x78, 0x05, 0xf6, 0x6e, 0x63, 0xf7, 0x4f, 0x9c, 0x8e, 0xda, 0x08, 0xa7, 0x9e,
    0x79, 0x1e, 0xb1, 0xb9, 0xd5, 0x86, 0x63, 0x31, 0x4b, 0x3c, 0x24, 0xba, 0x03, 0x7a, 0x4f, 0x8c,
    0xd2, 0xa9, 0xd3, 0x79, 0x13, 0x38, 0xb8, 0x55, 0xf9, 0x86, 0x31, 0xb9, 0xb2, 0xb6, 0x0f, 0x3c,
    0x96, 0xf7, 0x85, 0x03, 0x29, 0xa2, 0x50, 0x60, 0x38, 0x02, 0xb4, 0xab, 0x6f, 0x45, 0xd6, 0xd4,
    0x2a, 0x6e, 0x13, 0x2e, 0xbd, 0xc4, 0x0f, 0x7c, 0xa1, 0x8f, 0x17, 0x8a, 0xa7, 0xe7, 0xf2, 0x79,
    0xed, 0x24, 0xc5, 0x16, 0x88, 0x83, 0x99, 0x34, 0x92, 0x29, 0x7b, 0xd2, 0xb1, 0xfa, 0xa6, 0xf4,
    0xd1, 0x4d, 0x5c, 0x0c, 0x78, 0x06, 0x19, 0xb7, 0x74, 0x13, 0x7b, 0x93, 0xf3, 0x3b, 0x14, 0x43,
    0x41, 0xd7, 0x70, 0x65, 0x5f, 0x28, 0x12, 0x09, 0xf2, 0x9e, 0x4a, 0x3f, 0xbf, 0x93, 0x74, 0xd7,
    0x21, 0xc5, 0x45, 0xeb, 0xce, 0x20, 0xaf, 0x7f, 0x05, 0x43, 0xf1, 0x14, 0x76, 0x26, 0x80, 0xa8,
    0x7a, 0xf9, 0xf0, 0x9a, 0x35, 0x9d, 0x0f, 0xfc, 0xe9, 0x40, 0xf5, 0x3e, 0x72, 0x2c, 0x05, 0x3b,
    0x98, 0x7f, 0xd4, 0xb8, 0x1c, 0x05, 0x05, 0x22, 0xc4, 0x99, 0xf9, 0x2b, 0x9e, 0x41, 0x85, 0x2f,
    0x20, 0xda, 0xe7, 0xcd, 0xe5, 0xf4, 0xb4, 0x7d, 0x9e, 0x71, 0xb2, 0xf7, 0xf3, 0x38, 0x8d, 0xef,
    0xb5, 0x80, 0x5f, 0x4d, 0x0c, 0xd4, 0x02, 0xe8, 0x83, 0x4a, 0x19, 0xf4, 0x8a, 0xa8, 0x4c, 0xfa,
    0x49, 0x36, 0x80, 0x21, 0xc0, 0x8a, 0xc5, 0x22, 0x67, 0x72, 0x69, 0xd4, 0x4d, 0x22, 0xb3, 0xe9,
    0x00, 0xe8, 0x88, 0x14, 0x8b, 0xf8, 0x62, 0xd3, 0x1b, 0x4e, 0x4f, 0xdd, 0x8a, 0x85, 0xca, 0x67,
    0xd9, 0xdb, 0x2c, 0x1d, 0x8e, 0x6b, 0xb1, 0xc0, 0xe9, 0xa6, 0xd9, 0x3b, 0xcf, 0xb8, 0xd4, 0x12,
    0xe9, 0xde, 0xe6, 0x9e, 0xa3, 0xe9, 0xca, 0x10, 0x69, 0xa0, 0x53, 0x8c, 0x0d, 0xb6, 0x6e, 0x3e,
    0xd1, 0x26, 0x62, 0x52, 0x5e, 0x18, 0xb0, 0xd8, 0xd7, 0xc1, 0xcd, 0x81, 0x39, 0x50, 0x2a, 0x10,
    0xfc, 0xc3, 0x19, 0x90, 0x38, 0x46, 0x75, 0x42, 0x1e, 0xa4, 0xbf, 0x7f, 0x62, 0xd3, 0xcc, 0xdc,
    0xcf, 0x12, 0xa7, 0x9b, 0x9b, 0xbd, 0x58, 0x5b, 0x00, 0xc0, 0x66, 0x75, 0x74, 0xc9, 0x40, 0x95,
    0xeb, 0xf0, 0x14, 0xbf, 0xf4, 0x60, 0x5e, 0x00, 0x6e, 0x44, 0x42, 0x65, 0xaf, 0x6f, 0x32, 0xb0,
    0xde, 0x1d, 0x35, 0x9f, 0xd4, 0x78, 0x7e, 0xcd, 0x21, 0x6f, 0x5d, 0xc4, 0x19, 0xf4, 0x7b, 0x04,
    0x5e, 0x07, 0x69, 0x8d, 0xa4, 0xe3, 0xea, 0x05, 0x6b, 0xf4, 0xa0, 0xba, 0x4e, 0xde, 0x97, 0xe8,
    0xa8, 0x07, 0x66, 0x22, 0xd6, 0x65, 0x22, 0xc2, 0x4d, 0x72, 0x10, 0xac, 0xa4, 0xd9, 0xf8, 0x65,
    0x6c, 0x29, 0xc3, 0xab, 0x99, 0x36, 0x85, 0x3f, 0x63, 0x4d, 0xac, 0x4b, 0xfe, 0x99, 0xaf, 0x4f,
    0xe2, 0x52, 0x55, 0x95, 0x54, 0x08, 0x71, 0xad, 0xaa, 0x2c, 0xad, 0xac, 0x68, 0x5b, 0xb0, 0xdc,
    0xa9, 0x40, 0x8e, 0xd9, 0x50, 0x40, 0x3b, 0x53, 0x7c, 0xe3, 0x33, 0xff, 0x2d, 0xf8, 0xd6, 0x75,
    0x2b, 0xa9, 0x6c, 0xfe, 0x34, 0xb2, 0xe4, 0x6b, 0xfc, 0xb2, 0x47, 0x2a, 0xc2, 0x13, 0x3c, 0x02,
    0x97, 0xff, 0x43, 0xa1, 0x73, 0x1d, 0x87, 0xc9, 0x57, 0xcd, 0x7e, 0x06, 0xca, 0x6e, 0x50, 0xbf,
    0xbb, 0xc6, 0x1d, 0x60, 0x52, 0x85, 0x98, 0x81, 0x5d, 0x05, 0x54, 0x4e, 0xfd, 0xa0, 0xc3, 0xa0,
    0xd5, 0x78, 0x22, 0x03, 0x89, 0x76, 0xef, 0x10, 0xac, 0x5b, 0x86, 0x77, 0x2a, 0x3e, 0x49, 0x75,
    0xd0, 0xca, 0xda, 0x89, 0x4a, 0x11, 0x20, 0xc1, 0x31, 0x08, 0x02, 0x34, 0x2d, 0x3e, 0x4a, 0x11,
    0xdb, 0xf4, 0x4a, 0xf0, 0x9e, 0x34, 0x75, 0x95, 0xc0, 0xeb, 0xdf, 0x2a, 0xb2, 0xc5, 0x71, 0xb8,
    0xed, 0xa2, 0x94, 0x22, 0x57, 0x83, 0xa3, 0xc6, 0x4e, 0x64, 0x9b, 0x24, 0x0a, 0x69, 0x4a, 0x65,
    0x8f, 0xde, 0x3b, 0x6d, 0x11, 0xf4, 0x01, 0x4d, 0xc3, 0xc5, 0x87, 0x7b, 0x95, 0x09, 0x79, 0x81,
    0xc2, 0x26, 0x19, 0xb9, 0x13, 0xc0, 0x99, 0x2d, 0xec, 0xaa, 0x3d, 0x68, 0xef, 0xc1, 0x91, 0x1d,
    0x49, 0xb8, 0x1b, 0x9c, 0xfe, 0x02, 0x19, 0x6d, 0xfa, 0x4f, 0xca, 0x7e, 0x8d, 0x0d, 0xa9, 0x16,
    0xfb, 0xee, 0x4b, 0x35, 0x2d, 0x32, 0xa8, 0xfa, 0xea, 0xa3, 0x80, 0x1a, 0x53, 0x8e, 0x64, 0xab,
    0xcd, 0x00, 0xd4, 0x25, 0x79, 0x16, 0xf8, 0x43, 0x74, 0x5b, 0xb3, 0x8e, 0xd7, 0xc3, 0x7f, 0x82,
    0x7a, 0x73, 0xe9, 0xf6, 0x16, 0x79, 0xb1, 0x2d, 0xc1, 0xdf, 0xca, 0x5a, 0x73, 0xfd, 0x2a, 0x18,
    0x34, 0xba, 0x41, 0xf6, 0x4e, 0x20, 0x78, 0x7f, 0x76, 0x5d, 0xfd, 0x10, 0x47, 0x6e, 0x35, 0x18,
    0x45, 0x9d, 0x78, 0x83, 0xa1, 0xf6, 0x81, 0x70, 0x7a, 0xa8, 0x6d, 0x89, 0xdb, 0x23, 0x9f, 0xda,
    0x86, 0x76, 0xcd, 0xf8, 0xd2, 0x27, 0xe6, 0x86, 0x45, 0x9f, 0xfa, 0x51, 0x28, 0xb5, 0xc0, 0x43,
    0x11, 0xc8, 0xd2, 0x73, 0x10, 0x72, 0xd2, 0x79, 0x0a, 0x6e, 0x0b, 0x3e, 0xe6, 0x1d, 0x5f, 0x5b,
    0x28, 0x9d, 0x1d, 0x7d, 0xa8, 0x5f, 0xc8, 0x76, 0x04, 0x2e, 0x71, 0xcc, 0xfe, 0xa3, 0x1a, 0x2d,
    0x8f, 0xca, 0xb0, 0x64, 0xc3, 0xb8, 0x59, 0xae, 0xa6, 0x66, 0xb1, 0xd8, 0x99, 0xd6, 0xdd, 0x6b,
    0xe2, 0x6e, 0x54, 0xa9, 0xad, 0x9f, 0xfa, 0x47, 0x84, 0xb6, 0xc5, 0xb7, 0xda, 0x53, 0x5b, 0x1b,
    0xcd, 0xdb, 0x96, 0x26, 0x99, 0xaa, 0xa2, 0xad, 0x0b, 0x7e, 0xe3, 0xe7, 0xc0, 0x29, 0xd0, 0x3f,
    0x41, 0xaf, 0x83, 0x05, 0x46, 0x22, 0xe6, 0x45, 0x4b, 0xe1, 0xee, 0x3c, 0x74, 0xb2, 0x22, 0xb3,
    0xcf, 0x7e, 0xa6, 0xa0, 0x10, 0xc7, 0x05, 0x0d, 0x04, 0x4d, 0x60, 0x54, 0xe5, 0x3c, 0x71, 0xdc,
    0x09, 0xaf, 0x66, 0x6e, 0x35, 0xae, 0xed, 0x69, 0xb7, 0x6c, 0xf8, 0xb4, 0x23, 0x1f, 0x96, 0xee,
    0x12, 0x59, 0xb2, 0xc5, 0xac, 0x83, 0x37, 0x68, 0xb4, 0x75, 0x05, 0x03, 0x71, 0xb7, 0x25, 0xd5,
    0xdf, 0xa9, 0xbf, 0xda, 0xd7, 0xde, 0xcc, 0xa1, 0xf6, 0x35, 0x90, 0xff, 0x7d, 0xd4, 0xed, 0x7a,
    0xa7, 0x4e, 0x53, 0x76, 0xc5, 0x82, 0x49, 0x2a, 0x63, 0xb8, 0x41, 0xf7, 0xdd, 0x5b, 0x38, 0x53,
    0x22, 0xd7, 0x33, 0x48, 0x0a, 0xfa, 0xd3, 0xbb, 0x51, 0x2e, 0xbb, 0xcc, 0x5e, 0x74, 0x4b, 0xd1,
    0x02, 0xd0, 0xba, 0xd2, 0x6c, 0x93, 0x7e, 0xf7, 0xde, 0xf7, 0x0a, 0xe6, 0x4f, 0xb0, 0xf7, 0xdf,
    0xac, 0x90, 0x30, 0xb1, 0x5b, 0xc9, 0xc2, 0x09, 0x9a, 0xb1, 0x67, 0x21, 0x52, 0xc4, 0x94, 0x82,
    0x93, 0xda, 0x2d, 0xbe, 0xea, 0xaf, 0xfe, 0x16, 0x0c, 0x06, 0x47, 0x76, 0x10, 0xa2, 0xa8, 0x30,
    0x13, 0xc2, 0x39, 0x43, 0xdc, 0xdb, 0x95, 0x99, 0x03, 0xd7, 0x5d, 0x6b, 0xb9, 0x1e, 0xa3, 0x8b,
    0xa8, 0x26, 0xa3, 0x14, 0x66, 0xad, 0x9a, 0xe1, 0xbc, 0x5d, 0xce, 0x0f, 0x04, 0xe8, 0x79, 0x9f,
    0xf8, 0x7b, 0x0e, 0xbe, 0xc8, 0x56, 0x13, 0x67, 0x07, 0x9e, 0x57, 0x55, 0x88, 0x33, 0x66, 0xf3,
    0x72, 0x10, 0x66, 0x46, 0xe9, 0xc4, 0xe3, 0xc8, 0xf1, 0xb0, 0x8e, 0xa3, 0x94, 0x35, 0x43, 0xc5,
    0x59, 0x8f, 0x28, 0x78, 0x8e, 0x3a, 0x46, 0xfa, 0xb5, 0x51, 0xbd, 0x35, 0xb0, 0x77, 0xb2, 0xae,
    0x21, 0x39, 0xf2, 0x2f, 0x32, 0x07, 0x86, 0x92, 0x1a, 0x08, 0x87, 0x27, 0xc9, 0x53, 0x9b, 0xd9,
    0xc6, 0x4f, 0x5f, 0xb8, 0x45, 0xbe, 0x61, 0xd2, 0xc6, 0x0a, 0x76, 0x98, 0xeb, 0xec, 0xbc, 0xb5,
    0xe4, 0x0d, 0x81, 0x3e, 0xde, 0x47, 0xcf, 0xd6, 0x67, 0x76, 0xfc, 0x91, 0x5e, 0xd9, 0x8b, 0xba,
    0xdb, 0x9d, 0xc3, 0xd3, 0x6f, 0x9b, 0x04, 0x97, 0xd7, 0x61, 0xca, 0x2e, 0x59, 0x29, 0xba, 0xfd,
    0xf8, 0x60, 0x67, 0xec, 0x4a, 0x01, 0xe2, 0x41, 0x14, 0x08, 0x3a, 0xa1, 0xb7, 0x7e, 0xf7, 0x58,
    0x3f, 0xd2, 0x6e, 0x0d, 0xe7, 0x6f, 0xb3, 0xa5, 0xca, 0x10, 0x2d, 0xae, 0xc0, 0x8f, 0xc7, 0x76,
    0x5f, 0x75, 0xfb, 0x07, 0x6d, 0x31, 0x51, 0xef, 0x18, 0x65, 0x5c, 0x84, 0x7d, 0xf7, 0xc1, 0xa9,
    0x60, 0xe4, 0x76, 0x28, 0x1a, 0x52, 0x50, 0x77, 0xce, 0x9f, 0x6e, 0x39, 0xf3, 0xb2, 0x33, 0x6d,
    0x9f, 0x59, 0xcb, 0x93, 0xab, 0xc4, 0xb5, 0xba, 0x5b, 0x89, 0x91, 0x4b, 0x15, 0x9a, 0x07, 0xc7,
    0xf6, 0x8f, 0xff, 0x48, 0xe7, 0xcf, 0xff, 0x14, 0xd0, 0xac, 0x00, 0x9e, 0x79, 0x6f, 0xc2, 0xb3,
    0x5b, 0x31, 0x5b, 0x78, 0xa7, 0x71, 0xe6, 0xb5, 0x14, 0x71, 0x6e, 0x5f, 0x13, 0x40, 0xe0, 0xd1,
    0xe0, 0x62, 0x04, 0x4f, 0x8f, 0x7b, 0x35, 0x55, 0x9f, 0xb2, 0x3b, 0xba, 0x50, 0x21, 0x57, 0xfb,
    0xf0, 0x34, 0xa7, 0x51, 0x2f, 0x5d, 0x67, 0xa1, 0xb3, 0x6d, 0x3d, 0xde, 0xcc, 0xbe, 0xa7, 0xed,
    0xd8, 0xba, 0xd2, 0x12, 0xb5, 0xa4, 0xf5, 0x4a, 0x50, 0xdf, 0x9d, 0x9b, 0xe1, 0x4b, 0x2f, 0x32,
    0x43, 0x81, 0x3e, 0xc1, 0x39, 0xe2, 0x97, 0x2e, 0x2d, 0x73, 0x1b, 0x63, 0x4a, 0x91, 0xd9, 0x74,
    0x7d, 0xf1, 0x57, 0xa2, 0x79, 0xb1, 0x49, 0x76, 0x22, 0xd7, 0xcc, 0xc7, 0x43, 0xda, 0xf5, 0x3e,
    0xe4, 0x30, 0x94, 0x3e, 0x51, 0xe1, 0x70, 0x31, 0xcc, 0x57, 0x40, 0x02, 0xf3, 0x79, 0x30, 0xc2,
    0xbc, 0x1f, 0xc1, 0xfa, 0x94, 0xcb, 0x1e, 0x09, 0xd8, 0x02, 0x4c, 0x8a, 0x15, 0xc6, 0xd1, 0x92,
    0xf0, 0x4f, 0xee, 0x8a, 0xe8, 0x63, 0x0b, 0x85, 0x0c, 0x3d, 0x08, 0x57, 0x89, 0xa5, 0x14, 0x39,
    0xe6, 0x37, 0x22, 0xec, 0x6c, 0x07, 0xa9, 0xba, 0x6a, 0xa4, 0xcc, 0x9e, 0x69, 0xd1, 0xd9, 0xde,
    0x45, 0xf1, 0x0b, 0xcd, 0xff, 0xce, 0xec, 0xf3, 0x55, 0x8d, 0x03, 0x84, 0x39, 0x6d, 0x73, 0x8c,
    0xe4, 0x2c, 0x3e, 0xf4, 0x54, 0xe9, 0x67, 0x08, 0x03, 0xcf, 0x35, 0x5c, 0xff, 0x14, 0x28, 0xe9,
    0x8f, 0xb4, 0x3c, 0x58, 0x5a, 0x18, 0x8b, 0x83, 0x23, 0x15, 0x63, 0x04, 0x0f, 0x80, 0x85, 0x4a,
    0x7d, 0x89, 0x26, 0x2f, 0x05, 0xdc, 0x74, 0x95, 0x86, 0x75, 0xa8, 0x7f, 0x0e, 0x50, 0x6f, 0x31,
    0x1e, 0x80, 0x03, 0x3d, 0xa6, 0x12, 0xec, 0x82, 0xbe, 0x58, 0x65, 0x2a, 0x83, 0xe5, 0xfd, 0x81,
    0x50, 0xbc, 0x54, 0x6f, 0xe9, 0xdc, 0x33, 0xe5, 0x61, 0x97, 0x05, 0x73, 0x10, 0x98, 0xa9, 0x52,
    0x46, 0x24, 0x68, 0x28, 0xc6, 0x45, 0x53, 0x2c, 0xa8, 0x49, 0x1b, 0x5c, 0x45, 0xc3, 0xe3, 0x91,
    0x63, 0x85, 0xc3, 0xee, 0x34, 0x6b, 0xf8, 0x39, 0x08, 0x0a, 0xb6, 0xbc, 0x9e, 0xc1, 0x4a, 0xf2,
    0x67, 0x19, 0x26, 0x5f, 0xb9, 0x73, 0xca, 0x02, 0xd1, 0x2d, 0xbb, 0x3c, 0x3b, 0x31, 0xe7, 0x82,
    0x41, 0xac, 0xa5, 0x51, 0x20, 0xdf, 0xf9, 0x4f, 0xec, 0xd6, 0x5e, 0x86, 0x98, 0x1a, 0x8b, 0x8f,
    0x1d, 0x72, 0xfc, 0xd7, 0x3e, 0x36, 0xa5, 0x9f, 0x45, 0x71, 0x6c, 0xd3, 0x2f, 0x1e, 0xc6, 0x1c,
    0x24, 0x3e, 0x60, 0xde, 0x97, 0x9c, 0x36, 0x9d, 0x2f, 0x35, 0xe1, 0x07, 0x9b, 0x45, 0xd1, 0x93,
    0x5a, 0xec, 0x8b, 0x0b, 0x27, 0x10, 0xd3, 0x32, 0x4b, 0x05, 0xb6, 0xdf, 0x1c, 0xcd, 0xca, 0x4d,
    0xff, 0xce, 0x8f, 0x79, 0xb2, 0x3b, 0x53, 0x07, 0x8a, 0x8f, 0x68, 0xb9, 0xaa, 0x84, 0xa8, 0xe2,
    0x53, 0x5b, 0x13, 0x62, 0xd9, 0xa0, 0x86, 0x4a, 0x93, 0x93, 0xfb, 0x3a, 0xb0, 0xeb, 0x00, 0xf0,
    0xa9, 0xfa, 0x68, 0x17, 0xf4, 0x22, 0x93, 0xca, 0xbb, 0xc5, 0xb7, 0x53, 0x8b, 0xac, 0x24, 0x51,
    0x07, 0xc6, 0x80, 0xa5, 0xa7, 0x5c, 0xe7, 0x7e, 0x77, 0x6c, 0x30, 0x0c, 0xbc, 0x99, 0x56, 0x3e,
    0x63, 0xe2, 0xe7, 0x63, 0x80, 0x07, 0xf4, 0xf2, 0x6d, 0xc1, 0xf1, 0x5e, 0x86, 0xd0, 0x3f, 0x43,
    0x5f, 0x05, 0x7f, 0x62, 0xc4, 0xce, 0x80, 0x56, 0x6a, 0xd6, 0x43, 0x7f, 0xf2, 0x2c, 0x20, 0xc0,
    0x88, 0xc5, 0xf4, 0xeb, 0x8a, 0x74, 0x52, 0x1e, 0x9f, 0x4d, 0x56, 0x50, 0xa9, 0xdb, 0x4e, 0x3c,
    0x9e, 0xce, 0x67, 0xdc, 0xb5, 0x18, 0xf9, 0x5f, 0x89, 0x65, 0xb7, 0x5d, 0x03, 0xcd, 0xe9, 0xcb,
    0x01, 0x64, 0xba, 0x5e, 0xd6, 0x75, 0x30, 0x44, 0x48, 0x01, 0xe2, 0x13, 0xec, 0x26, 0x3e, 0x6d,
    0xba, 0xd3, 0x33, 0x1d, 0x4b, 0x82, 0x3b, 0xd8, 0x39, 0x55, 0x3b, 0x01, 0x71, 0xbd, 0x6e, 0xb8,
    0x24, 0x0a, 0xcc, 0xf5, 0xdf, 0xdc, 0x09, 0xb9, 0x13, 0x83, 0xbe, 0x70, 0x0d, 0x31, 0x4d, 0xe9,
    0x29, 0x00, 0x41, 0xe4, 0x67, 0x5e, 0x33, 0xcd, 0x86, 0xaa, 0xb7, 0x5c, 0xfb, 0x0b, 0x7b, 0xcf,
    0xc9, 0x91, 0x3f, 0x3a, 0xcd, 0x61, 0x54, 0xa3, 0xf6, 0x25, 0x9b, 0x7c, 0x29, 0xda, 0x1c, 0xfb,
    0x95, 0xa2, 0xac, 0x2d, 0xec, 0xba, 0x6c, 0xe8, 0x15, 0x82, 0x9c, 0x11, 0x83, 0x3b, 0x0a, 0x12,
    0xdd, 0x44, 0xf2, 0xe1, 0x4d, 0xfa, 0x22, 0xf3, 0x3c, 0x46, 0x34, 0x07, 0xbb, 0x9a, 0x8e, 0xfa,
    0x39, 0x47, 0x8c, 0xfa, 0x68, 0x90, 0x92, 0xed, 0xc2, 0xd5, 0xa2, 0x57, 0x29, 0x02, 0x71, 0x1a,
    0xe6, 0x34, 0xe4, 0x1c, 0x50, 0x3e, 0xe6, 0x0e, 0xc4, 0x1c, 0x71, 0x62, 0x52, 0xd2, 0xf9, 0x03,
    0xd8, 0x8c, 0xa0, 0xe9, 0x9f, 0x00, 0x88, 0xff, 0x2a, 0x85, 0xf0, 0x13, 0x99, 0xa1, 0x39, 0x3e,
    0x34, 0x51, 0xb8, 0x76, 0x55, 0x46, 0x8a, 0x53, 0xda, 0x80, 0x7f, 0xd1, 0xbf, 0x07, 0x22, 0x08,
    0xcb, 0x1c, 0x7a, 0xa6, 0x95, 0xa7, 0x98, 0x0c, 0x5c, 0xd5, 0x23, 0x6a, 0xaa, 0x32, 0xab, 0xfb,
    0xee, 0xfa, 0x8d, 0xe9, 0x87, 0xcc, 0xf1, 0x7d, 0xaa, 0xe2, 0x9d, 0x49, 0x10, 0x12, 0x86, 0x24,
    0x2e, 0x43, 0xa2, 0xcf, 0xe7, 0x74, 0xce, 0xaf, 0x9e, 0x25, 0x03, 0x85, 0xee, 0xa5, 0x7e, 0x7d,
    0xd2, 0x9b, 0xf7, 0xec, 0x44, 0xa6, 0x41, 0xee, 0x94, 0x78, 0x9c, 0xe6, 0x31, 0xf9, 0x3e, 0xb3,
    0xc5, 0x3e, 0xf7, 0xbf, 0x47, 0x22, 0x7d, 0x8f, 0x88, 0x68, 0x53, 0x84, 0xe6, 0x15, 0x4e, 0x44,
    0x7d, 0xc7, 0x84, 0x87, 0x73, 0x70, 0x19, 0xfb, 0xc2, 0xf8, 0xd8, 0x95, 0xf3, 0xc8, 0xe6, 0x42,
    0x05, 0x92, 0x10, 0x6e, 0x95, 0x65, 0xf0, 0xe0, 0x59, 0xb9, 0xfb, 0xac, 0x22, 0x21, 0x36, 0x46,
    0x53, 0xab, 0x9d, 0x42, 0x90, 0xb0, 0x96, 0x41, 0xd2, 0xf1, 0xf8, 0xf4, 0xeb, 0x67, 0x73, 0xe4,
    0xc6, 0x82, 0xc0, 0x49, 0x4e, 0xf5, 0x1a, 0xd0, 0x33, 0x0e, 0xa8, 0x5b, 0x97, 0x9e, 0xd9, 0xf7,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_declares_schema_version_in_header() {
        let header: [u8; 4] = MNIST_MODEL_DATA[..4].try_into().unwrap();
        assert_eq!(u32::from_le_bytes(header), MODEL_SCHEMA_VERSION);
    }
}
