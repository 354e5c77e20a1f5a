#![no_std]

//! `GrowVec`: a growable vector built on an explicit owning storage handle.
//!
//! The crate splits the container into two cooperating pieces. [`ArrayHandle`]
//! is the sole owner of one fixed-length heap block: it can allocate, adopt a
//! caller-supplied block, hand its block out with `release`, and swap blocks
//! in O(1), but it cannot be copied and knows nothing about how much of the
//! block is in use. [`GrowVec`] owns exactly one handle and layers a logical
//! length and capacity on top of it, providing amortized-constant append,
//! positional insertion and removal, explicit capacity reservation, and value
//! semantics.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut numbers = GrowVec::from([1, 2, 3]);
//! numbers.push_back(4);
//! numbers.insert(0, 0);
//!
//! assert_eq!(numbers.as_slice(), &[0, 1, 2, 3, 4]);
//! assert_eq!(numbers.len(), 5);
//! ```
//!
//! Capacity can be reserved up front through a [`CapacityHint`], which
//! pre-allocates without creating live elements:
//!
//! ```
//! use growvec::{CapacityHint, GrowVec};
//!
//! let mut log: GrowVec<u64> = GrowVec::from(CapacityHint::new(16));
//! assert_eq!(log.len(), 0);
//! assert_eq!(log.capacity(), 16);
//!
//! log.push_back(7);
//! assert_eq!(log.capacity(), 16); // no reallocation
//! ```
//!
//! # Storage model
//!
//! Every allocated slot holds an initialized value: allocation default-fills
//! the block, and removal operations (`clear`, `pop_back`, `erase`, shrinking
//! `resize`) only move the length fence. Displaced values stay in the backing
//! block until it is replaced or dropped. Because of this, operations that
//! allocate or expose new slots require `T: Default`.
//!
//! # Access tiers
//!
//! - `Index`/`IndexMut` panic on an out-of-range index, treating it as a
//!   caller-contract violation.
//! - [`GrowVec::get`]/[`GrowVec::get_mut`] return `Option`.
//! - [`GrowVec::try_get`]/[`GrowVec::try_get_mut`] report the out-of-range
//!   index through [`GrowVecError`], the one recoverable failure in the API.
//! - [`GrowVec::get_unchecked`]/[`GrowVec::get_unchecked_mut`] are `unsafe`
//!   fast paths that skip the bounds check entirely.
//!
//! # Performance characteristics
//!
//! - `push_back`: amortized O(1); a full vector doubles its capacity (to 1
//!   from empty), so N appends perform O(log N) reallocations.
//! - `insert`/`erase`: O(n) shifts within the block.
//! - `swap`, `clear`, `pop_back`: O(1), no element moves.
//! - `clone`: allocates exactly `len` slots, dropping spare capacity.
//!
//! # `no_std` compatibility
//!
//! The crate is `no_std` and requires only `core` and `alloc`. Enable the
//! optional `std` feature to get `std::error::Error` integration through
//! `thiserror`:
//!
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod handle;

// Re-export public types
pub use crate::core::{CapacityHint, GrowVec};
pub use crate::error::GrowVecError;
pub use crate::handle::ArrayHandle;
