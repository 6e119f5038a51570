//! Fixed-capacity scratch memory for the runtime's tensor allocator.
//!
//! The runtime plans input, output, and intermediate tensor storage out of
//! one pre-allocated byte region. This crate creates the region and moves it
//! into the interpreter at construction; ownership transfer is the aliasing
//! contract, since after the handoff no other code can reach the buffer.

/// Arena capacity for the MNIST classifier model. Finding the minimum for a
/// given model takes some trial and error; this one needs just under 80 KiB.
pub const DEFAULT_ARENA_SIZE: usize = 80 * 1024;

/// Opaque fixed-capacity byte region for tensor storage.
pub struct TensorArena {
    buf: Box<[u8]>,
}

impl TensorArena {
    /// Allocate a zeroed arena of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
        }
    }

    /// Capacity in bytes. Fixed for the arena's lifetime.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The backing storage, for the runtime's allocator.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Default for TensorArena {
    fn default() -> Self {
        Self::new(DEFAULT_ARENA_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_reports_requested_capacity() {
        let arena = TensorArena::new(4096);
        assert_eq!(arena.capacity(), 4096);
    }

    #[test]
    fn default_arena_is_80_kib() {
        assert_eq!(TensorArena::default().capacity(), 81920);
    }

    #[test]
    fn arena_starts_zeroed() {
        let mut arena = TensorArena::new(64);
        assert!(arena.as_mut_slice().iter().all(|&b| b == 0));
    }
}
