//! Directory listing entries returned by the remote source

use serde::{Deserialize, Serialize};

/// Kind of a directory listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
	File,
	Dir,
	Symlink,
	Submodule,
}

/// One entry of a remote directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
	pub name: String,
	#[serde(rename = "type")]
	pub kind: EntryKind,
}

impl DirectoryEntry {
	pub fn file(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: EntryKind::File,
		}
	}

	pub fn dir(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: EntryKind::Dir,
		}
	}

	pub fn is_dir(&self) -> bool {
		self.kind == EntryKind::Dir
	}

	pub fn is_file(&self) -> bool {
		self.kind == EntryKind::File
	}
}
