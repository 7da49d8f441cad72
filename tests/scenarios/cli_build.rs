//! Scenario: building through the CLI with an external bundler script.

use crate::common::{TestEnv, BUNDLER_SCRIPT, CONFIG_NO_BUNDLES, CONFIG_WITH_BUNDLER};

#[test]
fn scenario_cli_build_without_bundles() {
    let env = TestEnv::with_config(CONFIG_NO_BUNDLES);

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.manifest_files().len(), 4);
    let lockfile = env.read_lockfile();
    assert!(lockfile.contains("version = 1"));
    assert!(lockfile.contains("\"Art/e.png\" = \"sha256:"));
}

#[test]
fn scenario_cli_missing_source_fails_without_lockfile() {
    let env = TestEnv::new();
    env.write_project_file("modpack.toml", CONFIG_NO_BUNDLES);

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("directory not found"));
    assert!(!env.project_path("modpack.lock").exists());
}

#[test]
fn scenario_cli_invalid_config_fails() {
    let env = TestEnv::new();
    env.write_project_file("modpack.toml", "[mod]\nname = \"NoGuid\"\n");

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert!(result.stderr.contains("guid is required"));
}

#[cfg(unix)]
#[test]
fn scenario_cli_second_build_reuses_bundles() {
    let env = TestEnv::with_config(CONFIG_WITH_BUNDLER);
    env.write_project_file("tools/bundle.sh", BUNDLER_SCRIPT);

    let first = env.run(&["build"]);
    assert!(first.success, "{}", first.combined_output());
    assert_eq!(env.bundler_calls(), 1);
    assert!(env
        .manifest_files()
        .contains(&"Bundles/MyMod_Windows.assetbundle".to_string()));
    assert!(!env.install_dir().join("Bundles/buildlogtep.json").exists());

    let second = env.run(&["build"]);
    assert!(second.success, "{}", second.combined_output());
    assert_eq!(env.bundler_calls(), 1);

    env.write_source_file("Art/e.png", "changed");
    let third = env.run(&["build", "--linux"]);
    assert!(third.success, "{}", third.combined_output());
    assert_eq!(env.bundler_calls(), 3);
    assert!(env
        .manifest_files()
        .contains(&"Bundles/MyMod_Linux.assetbundle".to_string()));
}

#[cfg(unix)]
#[test]
fn scenario_cli_failing_bundler_keeps_previous_lockfile() {
    let env = TestEnv::with_config(CONFIG_WITH_BUNDLER);
    env.write_project_file("tools/bundle.sh", BUNDLER_SCRIPT);
    assert!(env.run(&["build"]).success);
    let before = env.read_lockfile();

    env.write_project_file("tools/bundle.sh", "#!/bin/sh\nexit 3\n");
    env.write_source_file("Art/e.png", "changed");
    let result = env.run(&["build"]);

    assert!(!result.success);
    assert!(result.stderr.contains("bundle build failed"));
    assert_eq!(env.read_lockfile(), before);
}

#[test]
fn scenario_cli_flat_install() {
    let env = TestEnv::with_config(CONFIG_NO_BUNDLES);

    let result = env.run(&["build", "--flat", "--export", "Out"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("Out/ModManifest.json").is_file());
    assert!(env.project_path("Out/Conf/a.json").is_file());
}

#[cfg(unix)]
#[test]
fn scenario_cli_bundler_listing_its_log_keeps_manifest_on_disk() {
    let env = TestEnv::with_config(CONFIG_WITH_BUNDLER);
    let script = BUNDLER_SCRIPT.replace(
        "echo \"$name\"\n",
        "echo \"$name\"\necho buildlogtep.json\n",
    );
    env.write_project_file("tools/bundle.sh", &script);

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    let files = env.manifest_files();
    assert!(!files.contains(&"Bundles/buildlogtep.json".to_string()));
    for file in &files {
        assert!(env.install_dir().join(file).is_file(), "{} listed but missing", file);
    }
}

#[test]
fn scenario_cli_enabling_bundles_later_never_reuses_missing_bundles() {
    let env = TestEnv::with_config(CONFIG_NO_BUNDLES);
    assert!(env.run(&["build"]).success);

    env.write_project_file(
        "modpack.toml",
        &CONFIG_NO_BUNDLES.replace("build_bundles = false", "build_bundles = true"),
    );
    let result = env.run(&["build"]);

    // no bundler configured, so the build must fail rather than reuse nothing
    assert!(!result.success);
    assert!(result.stderr.contains("no bundler configured"), "{}", result.stderr);
}
