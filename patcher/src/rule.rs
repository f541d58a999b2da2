use std::borrow::Cow;

use memchr::memmem::find_iter;

/// Lowers the BRC-20 indexer's genesis height so a fresh regtest chain is indexed from block 0.
pub const GENESIS_BLOCK_RULE: Rule = Rule::new(
	b"export const BRC20_GENESIS_BLOCK = 779832;",
	b"export const BRC20_GENESIS_BLOCK = 0;",
);

/// A fixed literal substitution.
///
/// Matching is exact and byte-wise; there is no pattern syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
	search: &'static [u8],
	replacement: &'static [u8],
}

/// Result of [`Rule::apply`].
#[derive(Debug, PartialEq, Eq)]
pub struct Patched<'a> {
	pub content: Cow<'a, [u8]>,
	pub replacements: usize,
}

impl Rule {
	pub const fn new(search: &'static [u8], replacement: &'static [u8]) -> Self {
		assert!(!search.is_empty(), "search literal must not be empty");
		Self { search, replacement }
	}

	pub fn search(&self) -> &'static [u8] {
		self.search
	}

	pub fn replacement(&self) -> &'static [u8] {
		self.replacement
	}

	/// Replaces every non-overlapping occurrence of the search literal, scanning left to right.
	///
	/// Content without a match is handed back borrowed.
	pub fn apply<'a>(&self, content: &'a [u8]) -> Patched<'a> {
		let indices = find_iter(content, self.search).collect::<Vec<_>>();
		if indices.is_empty() {
			return Patched {
				content: Cow::Borrowed(content),
				replacements: 0,
			};
		}

		let mut patched = Vec::with_capacity(
			content.len() - indices.len() * self.search.len()
				+ indices.len() * self.replacement.len(),
		);
		let mut copied_up_to = 0;
		for &index in &indices {
			patched.extend_from_slice(&content[copied_up_to..index]);
			patched.extend_from_slice(self.replacement);
			copied_up_to = index + self.search.len();
		}
		patched.extend_from_slice(&content[copied_up_to..]);

		Patched {
			content: Cow::Owned(patched),
			replacements: indices.len(),
		}
	}
}
