//! Shipped examples, one module per topic
//!
//! Each module exposes `register`, which adds its examples to a registry
//! in a fixed order. `register_all` walks the modules in curriculum order
//! so registration order is stable from run to run.

use crate::catalog::Registry;
use crate::Result;

pub mod advanced;
pub mod collections;
pub mod concurrency;
pub mod control_flow;
pub mod data_structures;
pub mod design_patterns;
pub mod error_handling;
pub mod file_operations;
pub mod functional;
pub mod loops;
pub mod modern;
pub mod practical_patterns;
pub mod stdlib_tools;
pub mod strings;
pub mod traits;

type RegisterFn = fn(&mut Registry) -> Result<()>;

const MODULES: &[RegisterFn] = &[
    data_structures::register,
    control_flow::register,
    strings::register,
    loops::register,
    functional::register,
    traits::register,
    error_handling::register,
    collections::register,
    file_operations::register,
    advanced::register,
    modern::register,
    stdlib_tools::register,
    design_patterns::register,
    practical_patterns::register,
    concurrency::register,
];

/// Register every shipped example. Stops at the first duplicate name.
pub fn register_all(registry: &mut Registry) -> Result<()> {
    for register in MODULES {
        register(registry)?;
    }
    Ok(())
}
