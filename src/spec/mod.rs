mod build;
mod document;
mod load;
mod types;

pub use build::*;
pub use document::*;
pub use load::*;
pub use types::*;
