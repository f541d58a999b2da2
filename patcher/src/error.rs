use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
	#[error("failed to read {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to write {}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl PatchError {
	pub fn path(&self) -> &Path {
		match self {
			PatchError::Read { path, .. } | PatchError::Write { path, .. } => path,
		}
	}

	pub fn io_error(&self) -> &io::Error {
		match self {
			PatchError::Read { source, .. } | PatchError::Write { source, .. } => source,
		}
	}
}
