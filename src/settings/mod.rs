//! Configuration loading and resolution utilities.
//!
//! `load` layers the default configuration files, explicit `--config` files,
//! `TIKSEEK__` environment variables and CLI flags, then validates the result
//! into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
