#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;
pub mod processor;
pub mod state;
