//! Build target value object - the platforms bundles are compiled for

use serde::{Deserialize, Serialize};

/// Platform a bundle is built for.
///
/// The set is fixed; which members are built is decided by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildTarget {
    /// 64-bit Windows standalone player
    Windows,
    /// 64-bit Linux standalone player
    Linux,
}

impl BuildTarget {
    /// All known targets, in build order
    pub const ALL: [BuildTarget; 2] = [BuildTarget::Windows, BuildTarget::Linux];

    /// Targets selected for a build. Windows is always built.
    pub fn selected(build_linux: bool) -> Vec<BuildTarget> {
        Self::ALL
            .into_iter()
            .filter(|t| *t == BuildTarget::Windows || build_linux)
            .collect()
    }

    /// Human-readable name, also used in bundle file names
    pub fn name(&self) -> &'static str {
        match self {
            BuildTarget::Windows => "Windows",
            BuildTarget::Linux => "Linux",
        }
    }

    /// Platform identifier handed to the bundler
    pub fn platform(&self) -> &'static str {
        match self {
            BuildTarget::Windows => "StandaloneWindows64",
            BuildTarget::Linux => "StandaloneLinux64",
        }
    }

    /// Platform group handed to the bundler
    pub fn group(&self) -> &'static str {
        "Standalone"
    }

    /// File name of the bundle produced for `mod_name` on this target
    pub fn bundle_name(&self, mod_name: &str) -> String {
        format!("{}_{}.assetbundle", mod_name, self.name())
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
