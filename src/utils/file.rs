use std::path::{Path, PathBuf};

/// Resolves `path` against `base` unless it is already absolute.
///
/// # Arguments
/// * `path` - Path as given on the command line.
/// * `base` - Directory relative paths are anchored to.
///
/// # Returns
/// Absolute form of `path`.
pub fn file_path_manipulator(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_is_untouched() {
        let resolved = file_path_manipulator(Path::new("/data/a.bam"), Path::new("/work"));
        assert_eq!(resolved, PathBuf::from("/data/a.bam"));
    }

    #[test]
    fn relative_path_is_anchored_to_base() {
        let resolved = file_path_manipulator(Path::new("runs/a.bam"), Path::new("/work"));
        assert_eq!(resolved, PathBuf::from("/work/runs/a.bam"));
    }
}
