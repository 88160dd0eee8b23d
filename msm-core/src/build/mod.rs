// msm-core/src/build/mod.rs
// Spigot builds: runtime selection, working-directory handling and the BuildTools run.

pub mod buildtools;
pub mod cwd;
pub mod runtime;

pub use buildtools::{log_paths, run_buildtools};
pub use cwd::WorkingDirGuard;
pub use runtime::{java_executable, select_runtime};
