//! Default data and image locations.
//!
//! Lookup order for the data directory:
//!
//! 1. `$MILSYM_DATA`
//! 2. `Data/` next to the running executable
//!
//! The image root defaults to `2525D_SVG_Images/` inside the data directory.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MILSYM_DATA";
/// Data directory name next to the executable.
pub const DATA_DIR_NAME: &str = "Data";
/// Image root directory name inside the data directory.
pub const IMAGES_DIR_NAME: &str = "2525D_SVG_Images";

/// Directory holding the running executable, or the working directory when
/// that cannot be determined.
pub fn exe_dir() -> PathBuf {
	std::env::current_exe()
		.ok()
		.and_then(|exe| exe.parent().map(Path::to_path_buf))
		.unwrap_or_else(|| PathBuf::from("."))
}

/// Default data directory.
pub fn default_data_dir() -> PathBuf {
	data_dir_from(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

/// Default image root.
pub fn default_image_root() -> PathBuf {
	default_data_dir().join(IMAGES_DIR_NAME)
}

fn data_dir_from(env_override: Option<PathBuf>) -> PathBuf {
	match env_override.filter(|dir| !dir.as_os_str().is_empty()) {
		Some(dir) => dir,
		None => exe_dir().join(DATA_DIR_NAME),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_env_override_wins() {
		assert_eq!(
			data_dir_from(Some(PathBuf::from("/opt/2525d"))),
			PathBuf::from("/opt/2525d")
		);
	}

	#[test]
	fn test_falls_back_to_exe_dir() {
		assert_eq!(data_dir_from(None), exe_dir().join(DATA_DIR_NAME));
		assert_eq!(data_dir_from(Some(PathBuf::new())), exe_dir().join(DATA_DIR_NAME));
	}
}
