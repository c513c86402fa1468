pub mod address_finders;
pub mod instruction_builders;

pub use address_finders::*;
pub use instruction_builders::*;
