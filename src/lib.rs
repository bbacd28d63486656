//! Memoized matrix inversion.
//!
//! A [`CacheCell`](prelude::CacheCell) holds a matrix and lazily caches its inverse.
//! [`cached_inverse`](prelude::cached_inverse) solves the inverse on first request
//! and serves the stored value until the matrix is replaced.

mod cache;
mod error;
mod misc;
mod solve;

pub mod prelude {
    pub use crate::cache::*;
    pub use crate::error::*;
    pub use crate::misc::*;
    pub use crate::solve::*;
}
