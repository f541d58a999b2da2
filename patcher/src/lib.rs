//! In-place literal patching of generated source files.
//!
//! The binary applies [`GENESIS_BLOCK_RULE`] to the file named on its command
//! line. The library pieces are exposed so other build steps can run the same
//! substitution without spawning a process.

mod error;
mod patch;
mod rule;

pub use error::PatchError;
pub use patch::patch_file;
pub use rule::{Patched, Rule, GENESIS_BLOCK_RULE};
