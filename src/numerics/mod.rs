// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod arithmetic;
    pub mod determinant;
    pub mod matrix;
    pub mod ordering;
    pub mod traits;
}
