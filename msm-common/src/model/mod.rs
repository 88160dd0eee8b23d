// msm-common/src/model/mod.rs
pub mod kind;
pub mod runtime;
pub mod script;
pub mod version;

pub use self::kind::ServerKind;
pub use self::runtime::{JavaRuntime, JavaRuntimes};
pub use self::script::{LaunchScript, ScriptPlatform};
pub use self::version::{
    validate_version_id, ManifestEntry, VersionManifest, VersionMetadata, VersionRequest, LATEST,
};

/// Jar suffix every server executable name is forced to carry.
pub const JAR_SUFFIX: &str = ".jar";

/// Knobs for a single install, with the defaults an operator gets from the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Heap size in MiB, used for both `-Xmx` and `-Xms`.
    pub ram_mb: u32,
    pub executable_name: String,
    pub accept_eula: bool,
}

impl InstallOptions {
    /// Executable name with the `.jar` suffix appended when missing.
    pub fn jar_name(&self) -> String {
        if self.executable_name.ends_with(JAR_SUFFIX) {
            self.executable_name.clone()
        } else {
            format!("{}{}", self.executable_name, JAR_SUFFIX)
        }
    }
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            ram_mb: 1024,
            executable_name: "server.jar".to_string(),
            accept_eula: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jar_suffix_is_appended_once() {
        let mut opts = InstallOptions::default();
        assert_eq!(opts.jar_name(), "server.jar");
        opts.executable_name = "spigot".to_string();
        assert_eq!(opts.jar_name(), "spigot.jar");
    }
}
