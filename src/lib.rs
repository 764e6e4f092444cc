pub mod ast;
pub mod constants;
pub mod convert;
pub mod error;
pub mod export;
pub mod render;

pub use ast::{Number, Value};
pub use constants::{evaluate, Constant, ConstantsStore};
pub use error::SigilError;
pub use render::render;
