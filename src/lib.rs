#![no_std]
#![warn(missing_docs)]

//! A growable contiguous vector that manages its own uninitialized memory.
//!
//! The crate is split into two layers:
//!
//! * [`RawBuf`](storage::RawBuf) owns a block of uninitialized memory with
//!   room for a fixed number of values. It allocates and frees that block, and
//!   nothing else; it never constructs or drops the values living inside it.
//! * [`Vector`](vec::Vector) pairs a `RawBuf` with a length, and is
//!   responsible for the lifetimes of the values in `[0, len)`.
//!
//! Every operation that grows the vector builds the new state on the side
//! before committing it. If a user-supplied constructor panics (be it
//! [`Default::default`], [`Clone::clone`], or an emplace closure), the panic
//! propagates with the vector exactly as it was before the call, and nothing
//! that was constructed in the meantime is leaked.
//!
//! # Examples
//! ```
//! use advec::Vector;
//!
//! let mut vec = Vector::new();
//! vec.push(1);
//! vec.push(2);
//! vec.push(3);
//! assert_eq!(vec.capacity(), 4);
//!
//! vec.insert(1, 99);
//! assert_eq!(vec, [1, 99, 2, 3]);
//!
//! vec.erase(2);
//! assert_eq!(vec, [1, 99, 3]);
//!
//! vec.resize(5);
//! assert_eq!(vec, [1, 99, 3, 0, 0]);
//! ```
//!
//! # Features
//! * `unstable`: enables the `#[bench]` benchmarks, which require a nightly
//!   toolchain.

extern crate alloc;

#[cfg(test)]
extern crate std;

use core::alloc::Layout;
use core::fmt::{self, Display, Formatter};

pub mod storage;
pub mod vec;

#[cfg(test)]
mod test_utils;

pub use crate::storage::RawBuf;
pub use crate::vec::Vector;

/// The error type for fallible allocations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested number of slots does not fit into `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator could not provide a block of the given layout.
    OutOfMemory {
        /// The layout of the rejected allocation request.
        layout: Layout,
    },
}

impl Display for AllocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::CapacityOverflow => f.write_str("capacity overflow"),
            AllocError::OutOfMemory { layout } => {
                write!(f, "memory allocation of {} bytes failed", layout.size())
            }
        }
    }
}

impl core::error::Error for AllocError {}

/// A specialized [`Result`](core::result::Result) type for fallible allocations.
pub type Result<T> = core::result::Result<T, AllocError>;
