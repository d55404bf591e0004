//! CLI command implementations.
//!
//! - **process**: score a photo over the attacker categories
//! - **simulate**: emit one violent and one calm dataset response
//! - **init**: initialize a new `.emoscore.toml` configuration file

pub mod init;
pub mod process;
pub mod simulate;

pub use init::init_config;
pub use process::{handle_process, ProcessConfig};
pub use simulate::{handle_simulate, SimulateConfig};
