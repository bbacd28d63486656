pub mod cache_cell;
pub mod cache_status;
pub mod cached_inverse;
pub use cache_cell::*;
pub use cache_status::*;
pub use cached_inverse::*;
