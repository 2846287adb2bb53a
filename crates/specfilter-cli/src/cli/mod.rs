//! # CLI Behavior
//!
//! This is **one possible client** of the specfilter library. It is the only
//! place that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Commands
//!
//! - `specfilter filter -w size=large -w color=blue` — Filter the catalog.
//!   Every `-w` condition and the optional `--spec FILE` are joined by AND.
//! - `specfilter attrs` — List the attributes conditions can test.
//! - `specfilter demo` — Run the classic three filters on the sample
//!   catalog; `--save FILE` also writes that catalog out. Running
//!   `specfilter` with no subcommand runs the demo.
//!
//! Without `--catalog` (or a `catalog` entry in the config), the built-in
//! sample catalog of Apple, Tree and Room is used.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
