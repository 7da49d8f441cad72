//! Scenario: repeated builds reuse bundles until a bundle input changes.

use std::fs;

use modpack::domain::entities::{BuildSettings, ModMetadata};
use modpack::domain::services::{CacheDecision, StaleReason};
use modpack::infrastructure::LocalFs;
use modpack::ModBuilder;

use crate::common::{FakeBundler, TestEnv, CONFIG_NO_BUNDLES};

struct Session {
    env: TestEnv,
    bundler: FakeBundler,
    builder: ModBuilder<LocalFs>,
    settings: BuildSettings,
}

impl Session {
    fn start() -> Self {
        let env = TestEnv::with_config(CONFIG_NO_BUNDLES);
        let bundler = FakeBundler::default();
        let builder = ModBuilder::new(LocalFs::new()).with_bundler(bundler.clone());
        let settings = BuildSettings::new(env.source_root(), ModMetadata::new("guid", "MyMod"));
        Self {
            env,
            bundler,
            builder,
            settings,
        }
    }

    fn build(&mut self) -> CacheDecision {
        self.builder
            .try_build(&mut self.settings, &self.env.project_path("Build"), true)
            .unwrap()
            .decision
    }

    fn manifest_bytes(&self) -> Vec<u8> {
        fs::read(self.env.install_dir().join("ModManifest.json")).unwrap()
    }
}

#[test]
fn scenario_unchanged_rebuild_is_idempotent() {
    let mut session = Session::start();
    session.build();
    let first = session.manifest_bytes();

    assert_eq!(session.build(), CacheDecision::Reuse);
    assert_eq!(session.build(), CacheDecision::Reuse);

    assert_eq!(session.bundler.calls.get(), 1);
    assert_eq!(session.manifest_bytes(), first);
}

#[test]
fn scenario_one_byte_change_rebuilds() {
    let mut session = Session::start();
    session.build();

    session.env.write_source_file("Art/e.png", "pixelZ");

    assert_eq!(
        session.build(),
        CacheDecision::Rebuild(StaleReason::Modified("Art/e.png".into()))
    );
    assert_eq!(session.bundler.calls.get(), 2);
    assert_eq!(session.build(), CacheDecision::Reuse);
}

#[test]
fn scenario_new_texture_rebuilds() {
    let mut session = Session::start();
    session.build();

    session.env.write_source_file("Art/f.png", "more pixels");

    assert!(session.build().is_stale());
    let bundle =
        fs::read_to_string(session.env.install_dir().join("Bundles/MyMod_Windows.assetbundle"))
            .unwrap();
    assert!(bundle.contains("f.png"));
}

#[test]
fn scenario_script_only_change_keeps_bundles() {
    let mut session = Session::start();
    session.build();

    session.env.write_source_file("Scripts/c.cs", "public class C { int hp; }");
    session.env.write_source_file("Scripts/New.cs", "public class New {}");

    assert_eq!(session.build(), CacheDecision::Reuse);
    assert!(session
        .env
        .manifest_files()
        .contains(&"Scripts/Scripts/New.cs".to_string()));
}
