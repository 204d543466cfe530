//! Command-line demo for unified air-quality sensors.
//!
//! The `airq` binary pairs a fleet of simulated air-quality sensors from two
//! incompatible vendors and prints their readings through one renderer.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `report` | Pair the fleet and print every sensor once |
//! | `watch` | Pair once, then refresh the report on an interval |
//! | `config` | Show, locate or initialize the configuration file |
//! | `completions` | Generate shell completions |
//!
//! # Configuration
//!
//! The CLI reads `~/.config/airq/config.toml` (or platform equivalent), or
//! the file given by `--config` / `AIRQ_CONFIG`:
//!
//! ```toml
//! show_details = true
//! no_color = false
//! seed = 42
//!
//! [thresholds]
//! good_max = 50
//! moderate_max = 150
//!
//! [[sensors]]
//! room = "LivingRoom"
//! kind = "index"
//!
//! [[sensors]]
//! room = "OfficeRoom"
//! kind = "structured"
//! connection_data = "00:11:22:33:44:10pwd123"
//! ```
//!
//! # Environment Variables
//!
//! - `AIRQ_CONFIG`: Config file path (overridden by `--config`)
//! - `NO_COLOR`: Disable colored output when set
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is given
//!
//! # Examples
//!
//! ```bash
//! airq report --seed 7
//! airq watch --interval 10 --count 3
//! ```

pub mod config;
pub mod fleet;

// Re-export core dependencies for convenience
pub use airq_core;
pub use airq_types;
