//! External tool plumbing: locating the binaries, checking readiness, and
//! running commands with captured output.

mod locator;
mod runner;

pub use locator::{find_in_path, is_executable, is_ready};
pub use runner::{run_command, ToolOutput};
