//! Test scaffolding: a temp root, a mocked launcher/BuildTools backend and a
//! stand-in `java` executable.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use msm_common::model::{JavaRuntimes, ScriptPlatform};
use msm_common::Config;
use msm_core::InstallationManager;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MANIFEST_PATH: &str = "/mc/game/version_manifest_v2.json";
pub const BUILDTOOLS_PATH: &str = "/BuildTools.jar";
pub const FAKE_BUILDTOOLS: &[u8] = b"PK\x03\x04 fake buildtools";

pub fn jar_bytes(id: &str) -> Vec<u8> {
    format!("server jar for {id}").into_bytes()
}

pub struct TestEnv {
    pub root: TempDir,
    pub server: MockServer,
    pub config: Config,
}

impl TestEnv {
    pub async fn new() -> Self {
        let root = TempDir::new().unwrap();
        let server = MockServer::start().await;
        let mut config = Config::for_root(root.path());
        config.manifest_url = format!("{}{}", server.uri(), MANIFEST_PATH);
        config.buildtools_url = format!("{}{}", server.uri(), BUILDTOOLS_PATH);
        config.script_platform = ScriptPlatform::Unix;
        Self {
            root,
            server,
            config,
        }
    }

    pub fn manager(&self) -> InstallationManager {
        InstallationManager::new(self.config.clone()).unwrap()
    }

    /// Serves a manifest listing `ids`, plus metadata and a jar for each.
    pub async fn serve_versions(&self, latest: &str, ids: &[&str]) {
        let versions: Vec<_> = ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "type": "release",
                    "url": format!("{}/v1/packages/{id}.json", self.server.uri()),
                })
            })
            .collect();
        Mock::given(method("GET"))
            .and(path(MANIFEST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "latest": { "release": latest, "snapshot": latest },
                "versions": versions
            })))
            .mount(&self.server)
            .await;

        for id in ids {
            let jar_path = format!("/objects/{id}/server.jar");
            Mock::given(method("GET"))
                .and(path(format!("/v1/packages/{id}.json")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "id": id,
                    "downloads": { "server": { "url": format!("{}{jar_path}", self.server.uri()) } }
                })))
                .mount(&self.server)
                .await;
            Mock::given(method("GET"))
                .and(path(jar_path))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(jar_bytes(id)))
                .mount(&self.server)
                .await;
        }
    }

    pub async fn serve_buildtools(&self) {
        Mock::given(method("GET"))
            .and(path(BUILDTOOLS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(FAKE_BUILDTOOLS.to_vec()))
            .mount(&self.server)
            .await;
    }

    /// Installs `script` as the java executable for every runtime.
    pub fn use_fake_java(&mut self, script: &str) -> PathBuf {
        let java = write_fake_java(self.root.path(), script);
        self.config.java = JavaRuntimes::uniform(&java);
        java
    }

    pub fn with_build_timeout(&mut self, timeout: Duration) {
        self.config.build_timeout = timeout;
    }

    pub fn current(&self) -> PathBuf {
        self.config.current_dir()
    }

    pub fn read_current(&self, name: &str) -> String {
        fs::read_to_string(self.current().join(name)).unwrap()
    }

    pub fn history_names(&self) -> Vec<String> {
        let previous = self.config.previous_dir();
        if !previous.is_dir() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(previous)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn build_log_names(&self) -> Vec<String> {
        let builds = self.config.build_logs_dir();
        if !builds.is_dir() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(builds)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[cfg(unix)]
pub fn write_fake_java(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.join("fake-jdk").join("bin");
    fs::create_dir_all(&bin).unwrap();
    let java = bin.join("java");
    fs::write(&java, script).unwrap();
    fs::set_permissions(&java, fs::Permissions::from_mode(0o755)).unwrap();
    java
}

/// Prints its arguments, then drops `spigot-<rev>.jar` into the working directory.
pub const JAVA_BUILDS_SPIGOT: &str = "#!/bin/sh\n\
echo \"fake java $*\"\n\
echo \"compiling\" >&2\n\
touch \"spigot-$5.jar\"\n";

/// Exits cleanly without producing anything.
pub const JAVA_BUILDS_NOTHING: &str = "#!/bin/sh\necho \"nothing to do\"\nexit 0\n";

/// Never finishes on its own.
pub const JAVA_HANGS: &str = "#!/bin/sh\nexec sleep 30\n";
