//! Small path helpers shared by the UI and startup code.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Util function to shorten the home directory to ~.
/// Used by the header path in the render function.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

pub fn readable_path(path: &Path) -> String {
    #[cfg(windows)]
    {
        let display = path.display().to_string();
        display
            .strip_prefix(r"\\?\")
            .unwrap_or(&display)
            .to_string()
    }
    #[cfg(not(windows))]
    {
        path.display().to_string()
    }
}

/// Resolves the directory the app starts in: an explicit argument wins,
/// otherwise the process working directory.
pub fn resolve_initial_dir(arg: Option<&str>) -> std::io::Result<PathBuf> {
    match arg {
        Some(raw) => {
            let path = PathBuf::from(raw);
            if path.is_dir() {
                Ok(path)
            } else {
                Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("not a directory: {}", readable_path(&path)),
                ))
            }
        }
        None => std::env::current_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_shortened_to_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(shorten_home_path(&home), "~");
            assert_eq!(
                shorten_home_path(home.join("projects")),
                format!("~{}projects", MAIN_SEPARATOR)
            );
        }
        assert_eq!(shorten_home_path("/definitely/not/home"), "/definitely/not/home");
    }

    #[test]
    fn initial_dir_rejects_files() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let file = tmp.path().join("f.txt");
        std::fs::write(&file, "")?;

        assert!(resolve_initial_dir(Some(tmp.path().to_str().unwrap())).is_ok());
        assert!(resolve_initial_dir(Some(file.to_str().unwrap())).is_err());
        Ok(())
    }
}
