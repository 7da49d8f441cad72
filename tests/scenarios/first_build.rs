//! Scenario: a mod author builds a fresh project for the first time.

use std::path::Path;

use modpack::domain::entities::{BuildSettings, ModMetadata};
use modpack::infrastructure::LocalFs;
use modpack::ModBuilder;

use crate::common::{FakeBundler, TestEnv, CONFIG_NO_BUNDLES};

fn settings(env: &TestEnv) -> BuildSettings {
    let mut settings = BuildSettings::new(env.source_root(), ModMetadata::new("guid", "MyMod"));
    settings.cache_bundles = false;
    settings
}

#[test]
fn scenario_first_build_produces_five_manifest_entries() {
    let env = TestEnv::with_config(CONFIG_NO_BUNDLES);
    let bundler = FakeBundler::default();
    let mut settings = settings(&env);

    let ok = ModBuilder::new(LocalFs::new())
        .with_bundler(bundler.clone())
        .build(&mut settings, &env.project_path("Build"), true);

    assert!(ok);
    assert_eq!(
        env.manifest_files(),
        vec![
            "Conf/a.json",
            "Localization/b.csv",
            "Scripts/Scripts/c.cs",
            "Libraries/d.dll",
            "Bundles/MyMod_Windows.assetbundle",
        ]
    );
    assert_eq!(bundler.calls.get(), 1);
}

#[test]
fn scenario_ledger_tracks_only_hashable_sources() {
    let env = TestEnv::with_config(CONFIG_NO_BUNDLES);
    let mut settings = settings(&env);

    ModBuilder::new(LocalFs::new())
        .with_bundler(FakeBundler::default())
        .try_build(&mut settings, &env.project_path("Build"), true)
        .unwrap();

    let keys: Vec<&str> = settings.state.assets.keys().collect();
    assert_eq!(keys, vec!["Art/e.png", "Conf/a.json", "Localization/b.csv"]);
    for (_, hash) in settings.state.assets.entries() {
        assert!(hash.as_str().starts_with("sha256:"));
        assert_eq!(hash.hex().len(), 64);
    }
}

#[test]
fn scenario_every_manifest_entry_exists_on_disk() {
    let env = TestEnv::with_config(CONFIG_NO_BUNDLES);
    env.write_source_file("Conf/nested/deep.json", "{}");
    env.write_source_file("Editor/Inspector.cs", "class Inspector {}");
    let mut settings = settings(&env);

    let report = ModBuilder::new(LocalFs::new())
        .with_bundler(FakeBundler::default())
        .try_build(&mut settings, &env.project_path("Build"), true)
        .unwrap();

    for file in env.manifest_files() {
        assert!(
            report.install_dir.join(Path::new(&file)).is_file(),
            "{} listed but missing",
            file
        );
    }
    assert!(env.manifest_files().contains(&"Conf/nested/deep.json".to_string()));
    assert_eq!(report.excluded_count, 1);
}
