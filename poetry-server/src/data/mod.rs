#[cfg(test)]
pub mod memory_repository;
pub mod poem_repository;
