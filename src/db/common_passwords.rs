use std::fs;
use std::path::{Path, PathBuf};

///
/// A line-delimited list of known-weak passwords on disk.
///
/// The list is optional - if the file is missing (or unreadable) every lookup
/// answers 'not common'. The file is re-read on each lookup so an updated list
/// takes effect without a restart.
///
#[derive(Clone, Debug)]
pub struct CommonPasswordList {
    path: PathBuf,
}

impl CommonPasswordList {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CommonPasswordList { path: path.as_ref().to_path_buf() }
    }

    ///
    /// Return true if the candidate password exactly matches a line in the list.
    ///
    pub fn is_common(&self, password: &str) -> bool {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!("No common password list at {}: {}", self.path.display(), err);
                return false;
            },
        };

        contents.lines().any(|line| line == password)
    }
}
