use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{PatchError, Rule};

/// Applies `rule` to the file at `path` and writes the result back over it.
///
/// The file is rewritten even when nothing matched. Returns the number of
/// replacements made. A missing file fails on read, so nothing gets created.
pub fn patch_file(path: impl AsRef<Path>, rule: &Rule) -> Result<usize, PatchError> {
	let path = path.as_ref();

	let content = fs::read(path).map_err(|source| PatchError::Read {
		path: path.to_owned(),
		source,
	})?;
	debug!(path = %path.display(), bytes = content.len(), "read target");

	let patched = rule.apply(&content);

	fs::write(path, &patched.content).map_err(|source| PatchError::Write {
		path: path.to_owned(),
		source,
	})?;
	debug!(
		path = %path.display(),
		replacements = patched.replacements,
		"wrote target"
	);

	Ok(patched.replacements)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GENESIS_BLOCK_RULE;
	use pretty_assertions::assert_eq;
	use std::io::ErrorKind;

	#[test]
	fn patches_in_place() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("constants.ts");
		fs::write(
			&path,
			"// generated\nexport const BRC20_GENESIS_BLOCK = 779832;\nexport const OTHER = 1;\n",
		)
		.unwrap();

		assert_eq!(patch_file(&path, &GENESIS_BLOCK_RULE).unwrap(), 1);
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"// generated\nexport const BRC20_GENESIS_BLOCK = 0;\nexport const OTHER = 1;\n"
		);
	}

	#[test]
	fn second_run_changes_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("constants.ts");
		fs::write(&path, "export const BRC20_GENESIS_BLOCK = 779832;\n").unwrap();

		assert_eq!(patch_file(&path, &GENESIS_BLOCK_RULE).unwrap(), 1);
		let once = fs::read(&path).unwrap();
		assert_eq!(patch_file(&path, &GENESIS_BLOCK_RULE).unwrap(), 0);
		assert_eq!(fs::read(&path).unwrap(), once);
	}

	#[test]
	fn missing_file_is_a_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.ts");

		let err = patch_file(&path, &GENESIS_BLOCK_RULE).unwrap_err();
		assert!(matches!(err, PatchError::Read { .. }));
		assert_eq!(err.path(), path.as_path());
		assert_eq!(err.io_error().kind(), ErrorKind::NotFound);
		assert!(!path.exists());
	}

	#[test]
	fn directory_is_a_read_error() {
		let dir = tempfile::tempdir().unwrap();

		let err = patch_file(dir.path(), &GENESIS_BLOCK_RULE).unwrap_err();
		assert!(matches!(err, PatchError::Read { .. }));
	}
}
