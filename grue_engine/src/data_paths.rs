use std::env;
use std::path::PathBuf;

/// Environment variable that points the launcher at an extra packs directory.
pub const PACKS_DIR_ENV: &str = "GRUE_PACKS_DIR";

/// Resolve the directory to scan for additional content packs.
///
/// `GRUE_PACKS_DIR` wins when set. Otherwise the first existing directory among
/// the usual layouts is used; `None` means only built-in packs are offered.
pub fn packs_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(PACKS_DIR_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    first_existing_dir(candidate_dirs())
}

fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Common layouts: workspace root and flattened `packs/`.
    candidates.push(PathBuf::from("grue_engine/packs"));
    candidates.push(PathBuf::from("packs"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("packs"));
    }
    candidates
}

fn first_existing_dir(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|candidate| candidate.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_existing_dir_skips_missing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("packs");
        std::fs::create_dir(&present).unwrap();
        let found = first_existing_dir([dir.path().join("absent"), present.clone()]);
        assert_eq!(found, Some(present));
        assert_eq!(first_existing_dir([dir.path().join("absent")]), None);
    }
}
