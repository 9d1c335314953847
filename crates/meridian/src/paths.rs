//! Path resolution for the Meridian installer.
//!
//! Simple resolution with sensible defaults; everything lives under
//! ~/.meridian unless MERIDIAN_HOME overrides it.

use meridian_answers::SectionName;
use std::path::{Path, PathBuf};

/// Resolve the Meridian home directory.
///
/// Priority:
/// 1) MERIDIAN_HOME
/// 2) HOME/USERPROFILE
/// 3) ./.meridian
pub fn meridian_home() -> PathBuf {
    if let Ok(override_path) = std::env::var("MERIDIAN_HOME") {
        return PathBuf::from(override_path);
    }
    if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
        return PathBuf::from(home).join(".meridian");
    }
    PathBuf::from(".").join(".meridian")
}

/// Component configuration directory: ~/.meridian/conf
pub fn conf_dir() -> PathBuf {
    meridian_home().join("conf")
}

/// Logs directory: ~/.meridian/logs
pub fn logs_dir() -> PathBuf {
    meridian_home().join("logs")
}

/// Configuration file for one component, e.g. conf/engine.conf.
pub fn component_conf_path(conf_dir: &Path, name: SectionName) -> PathBuf {
    conf_dir.join(format!("{}.conf", name.as_str()))
}

/// Ensure the home directory exists.
pub fn ensure_meridian_home() -> std::io::Result<PathBuf> {
    let home = meridian_home();
    std::fs::create_dir_all(&home)?;
    Ok(home)
}

/// Ensure the configuration directory exists.
pub fn ensure_conf_dir() -> std::io::Result<PathBuf> {
    let dir = conf_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = logs_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_conf_paths_use_section_names() {
        let dir = Path::new("/tmp/conf");
        assert_eq!(
            component_conf_path(dir, SectionName::Engine),
            Path::new("/tmp/conf/engine.conf")
        );
        assert_eq!(
            component_conf_path(dir, SectionName::Socket),
            Path::new("/tmp/conf/socket.conf")
        );
    }
}
