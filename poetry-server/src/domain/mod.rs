pub mod error;
pub mod poem;
