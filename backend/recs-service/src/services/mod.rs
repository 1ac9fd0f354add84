pub mod assembler;

pub use assembler::{assemble_brands, assemble_products, assemble_recent};
