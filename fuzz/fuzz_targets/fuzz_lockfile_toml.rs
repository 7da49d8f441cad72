#![no_main]

use libfuzzer_sys::fuzz_target;
use modpack::domain::entities::HashLedger;
use modpack::domain::value_objects::ContentHash;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Mirror of the lockfile layout (private in main crate)
#[derive(Deserialize)]
struct TomlLockfile {
    #[allow(dead_code)]
    version: u32,
    #[serde(default)]
    assets: BTreeMap<String, String>,
    #[serde(default)]
    bundles: BTreeMap<String, String>,
}

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Lockfile parsing and ledger rebuilding must never panic
        if let Ok(lockfile) = toml::from_str::<TomlLockfile>(content) {
            let mut ledger = HashLedger::new();
            for (path, hash) in lockfile.assets.iter().chain(lockfile.bundles.iter()) {
                let hash = ContentHash::new(hash);
                let _ = hash.hex();
                ledger.insert(Path::new(path), hash);
            }
        }
    }
});
