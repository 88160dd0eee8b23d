use std::fmt;
use std::path::{Path, PathBuf};

/// The three Java generations BuildTools needs across server versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaRuntime {
    /// JDK 8, for everything up to 1.17.
    Legacy,
    /// JDK 16, for the 1.17.1 line.
    Intermediate,
    /// JDK 17 and newer.
    Modern,
}

impl fmt::Display for JavaRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JavaRuntime::Legacy => "jdk8",
            JavaRuntime::Intermediate => "jdk16",
            JavaRuntime::Modern => "jdk17",
        };
        f.write_str(name)
    }
}

/// Hand-maintained runtime -> java executable table. Not auto-discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaRuntimes {
    pub legacy: PathBuf,
    pub intermediate: PathBuf,
    pub modern: PathBuf,
}

impl JavaRuntimes {
    /// Uses the same executable for every runtime.
    pub fn uniform(java: impl Into<PathBuf>) -> Self {
        let java = java.into();
        Self {
            legacy: java.clone(),
            intermediate: java.clone(),
            modern: java,
        }
    }

    pub fn path_for(&self, runtime: JavaRuntime) -> &Path {
        match runtime {
            JavaRuntime::Legacy => &self.legacy,
            JavaRuntime::Intermediate => &self.intermediate,
            JavaRuntime::Modern => &self.modern,
        }
    }
}

impl Default for JavaRuntimes {
    fn default() -> Self {
        Self::uniform("java")
    }
}
