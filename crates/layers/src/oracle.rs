//! Path existence checks.
//!
//! The resolver never touches the filesystem directly; every existence check
//! goes through a [`PathOracle`] so callers can swap in a cached listing or
//! an in-memory set.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Answers whether a path exists.
pub trait PathOracle {
	/// Returns true when `path` names an existing file or directory.
	fn exists(&self, path: &Path) -> bool;
}

/// Checks paths against the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOracle;

impl PathOracle for FsOracle {
	fn exists(&self, path: &Path) -> bool {
		path.exists()
	}
}

impl PathOracle for HashSet<PathBuf> {
	fn exists(&self, path: &Path) -> bool {
		self.contains(path)
	}
}

impl PathOracle for BTreeSet<PathBuf> {
	fn exists(&self, path: &Path) -> bool {
		self.contains(path)
	}
}

impl<T: PathOracle + ?Sized> PathOracle for &T {
	fn exists(&self, path: &Path) -> bool {
		(**self).exists(path)
	}
}

/// Adapts a closure into a [`PathOracle`].
#[derive(Debug, Clone, Copy)]
pub struct FnOracle<F>(pub F);

impl<F: Fn(&Path) -> bool> PathOracle for FnOracle<F> {
	fn exists(&self, path: &Path) -> bool {
		(self.0)(path)
	}
}
