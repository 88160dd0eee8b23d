// msm-common/src/model/script.rs
//! Launch-script rendering per target platform.

use std::str::FromStr;

use crate::error::MsmError;

/// Platform a launch script is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPlatform {
    /// `run.bat` for cmd.exe.
    Windows,
    /// `run.sh` for a POSIX shell.
    Unix,
}

/// A rendered launch script, ready to be written next to the server jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchScript {
    pub file_name: &'static str,
    pub contents: String,
    pub executable: bool,
}

impl ScriptPlatform {
    pub fn host() -> Self {
        if cfg!(windows) {
            ScriptPlatform::Windows
        } else {
            ScriptPlatform::Unix
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ScriptPlatform::Windows => "run.bat",
            ScriptPlatform::Unix => "run.sh",
        }
    }

    pub fn render(&self, ram_mb: u32, jar_name: &str) -> LaunchScript {
        let java_line = format!("java -Xmx{ram_mb}M -Xms{ram_mb}M -jar {jar_name} nogui");
        match self {
            ScriptPlatform::Windows => LaunchScript {
                file_name: self.file_name(),
                contents: format!("@echo off\r\n{java_line}\r\n"),
                executable: false,
            },
            ScriptPlatform::Unix => LaunchScript {
                file_name: self.file_name(),
                contents: format!("#!/bin/sh\ncd \"$(dirname \"$0\")\"\nexec {java_line}\n"),
                executable: true,
            },
        }
    }
}

impl Default for ScriptPlatform {
    fn default() -> Self {
        Self::host()
    }
}

impl FromStr for ScriptPlatform {
    type Err = MsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bat" | "windows" => Ok(ScriptPlatform::Windows),
            "sh" | "unix" => Ok(ScriptPlatform::Unix),
            other => Err(MsmError::Config(format!(
                "Unknown launch script platform '{other}' (expected 'bat' or 'sh')"
            ))),
        }
    }
}
