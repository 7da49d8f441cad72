//! Property tests for asset routing.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use modpack::domain::entities::AssetList;
use modpack::domain::services::{claims, route};
use modpack::domain::value_objects::AssetCategory;

const ROOT: &str = "/project/Assets/Mod";

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::string::string_regex("[A-Za-z0-9_-]{1,10}").unwrap(),
        1 => Just("Editor".to_string()),
        1 => Just("CodeGen".to_string()),
        1 => Just("Conf".to_string()),
        1 => Just("Localization".to_string()),
    ]
}

fn file_name() -> impl Strategy<Value = String> {
    let stem = proptest::string::string_regex("[A-Za-z0-9_]{1,10}").unwrap();
    let ext = prop_oneof![
        Just("json"),
        Just("csv"),
        Just("cs"),
        Just("dll"),
        Just("png"),
        Just("prefab"),
        Just("asmdef"),
    ];
    (stem, ext).prop_map(|(stem, ext)| format!("{}.{}", stem, ext))
}

fn asset_path() -> impl Strategy<Value = PathBuf> {
    (proptest::collection::vec(segment(), 0..=3), file_name()).prop_map(|(dirs, name)| {
        let mut path = PathBuf::from(ROOT);
        for dir in dirs {
            path.push(dir);
        }
        path.push(name);
        path
    })
}

fn under_excluded_dir(asset: &Path) -> bool {
    asset
        .strip_prefix(ROOT)
        .ok()
        .and_then(Path::parent)
        .is_some_and(|dirs| {
            dirs.components()
                .any(|c| c.as_os_str() == "Editor" || c.as_os_str() == "CodeGen")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Script, Library and Bundle never claim an asset below Editor/ or CodeGen/.
    #[test]
    fn property_excluded_dirs_never_ship(asset in asset_path()) {
        let root = Path::new(ROOT);
        if under_excluded_dir(&asset) {
            for category in [AssetCategory::Script, AssetCategory::Library, AssetCategory::Bundle] {
                prop_assert!(
                    !claims(category, &asset, root),
                    "{:?} claimed {}",
                    category,
                    asset.display()
                );
            }
        }
    }

    /// PROPERTY: Routing in order places each asset in at most one category
    /// and leaves only excluded assets behind.
    #[test]
    fn property_routing_partitions_assets(
        paths in proptest::collection::btree_set(asset_path(), 0..24)
    ) {
        let root = Path::new(ROOT);
        let total = paths.len();
        let mut assets = AssetList::new(paths.into_iter().collect());

        let mut routed = 0;
        for category in AssetCategory::ROUTING_ORDER {
            routed += route(category, &mut assets, root).len();
        }

        prop_assert_eq!(routed + assets.len(), total);
        for leftover in assets.iter() {
            prop_assert!(
                under_excluded_dir(leftover),
                "{} was not routed",
                leftover.display()
            );
        }
    }

    /// PROPERTY: Config only ever takes JSON files inside Conf/.
    #[test]
    fn property_config_is_confined_to_conf(asset in asset_path()) {
        let root = Path::new(ROOT);
        if claims(AssetCategory::Config, &asset, root) {
            prop_assert!(asset.starts_with(root.join("Conf")));
            prop_assert_eq!(asset.extension().and_then(|e| e.to_str()), Some("json"));
        }
    }
}
