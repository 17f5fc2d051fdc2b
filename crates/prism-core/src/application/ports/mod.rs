//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by services, implemented in
//!   `prism-adapters`
//!   - `CatalogSource`: hands out the current catalog index
//!
//! - **Driving (Input) Ports**: the service methods themselves, called by the
//!   CLI and by docs generators

pub mod output;

pub use output::CatalogSource;

#[cfg(test)]
pub use output::MockCatalogSource;
