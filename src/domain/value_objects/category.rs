//! Asset categories, in routing order

use std::fmt;

/// Category an asset is routed into.
///
/// Routing runs in the order of [`AssetCategory::ROUTING_ORDER`]; an asset
/// claimed by one category is never seen by the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// `Conf/**/*.json`, copied as-is
    Config,
    /// `Localization/**/*.csv`, copied as-is
    Localization,
    /// `*.cs` outside Editor/CodeGen, copied under `Scripts/`
    Script,
    /// `*.dll` outside Editor/CodeGen, copied flat under `Libraries/`
    Library,
    /// Everything else outside Editor/CodeGen, handed to the bundler
    Bundle,
}

impl AssetCategory {
    pub const ROUTING_ORDER: [AssetCategory; 5] = [
        AssetCategory::Config,
        AssetCategory::Localization,
        AssetCategory::Script,
        AssetCategory::Library,
        AssetCategory::Bundle,
    ];

    /// Reserved source subtree the category is restricted to, if any
    pub fn source_dir(&self) -> Option<&'static str> {
        match self {
            AssetCategory::Config => Some("Conf"),
            AssetCategory::Localization => Some("Localization"),
            _ => None,
        }
    }

    /// Extension the category matches, if it matches by extension
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            AssetCategory::Config => Some("json"),
            AssetCategory::Localization => Some("csv"),
            AssetCategory::Script => Some("cs"),
            AssetCategory::Library => Some("dll"),
            AssetCategory::Bundle => None,
        }
    }

    /// Output subdirectory the category writes into, if not the install root
    pub fn output_dir(&self) -> Option<&'static str> {
        match self {
            AssetCategory::Script => Some("Scripts"),
            AssetCategory::Library => Some("Libraries"),
            AssetCategory::Bundle => Some("Bundles"),
            _ => None,
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetCategory::Config => "config",
            AssetCategory::Localization => "localization",
            AssetCategory::Script => "script",
            AssetCategory::Library => "library",
            AssetCategory::Bundle => "bundle",
        };
        f.write_str(name)
    }
}
