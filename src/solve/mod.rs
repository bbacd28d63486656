pub mod linear_solve;
pub mod solve_options;
pub use linear_solve::*;
pub use solve_options::*;
