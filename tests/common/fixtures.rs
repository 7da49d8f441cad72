//! Test fixtures - reusable content constants for tests.

/// Minimal project configuration with bundling switched off
pub const CONFIG_NO_BUNDLES: &str = r#"[mod]
guid = "11111111-2222-4333-8444-555555555555"
name = "MyMod"

[build]
build_bundles = false
"#;

/// Project configuration driving the shell bundler in `BUNDLER_SCRIPT`
pub const CONFIG_WITH_BUNDLER: &str = r#"[mod]
guid = "11111111-2222-4333-8444-555555555555"
name = "MyMod"
version = "1.0.0"

[bundler]
command = "sh"
args = ["tools/bundle.sh"]
"#;

/// Writes the asset list into `<output>/<bundle>`, logs the call and prints
/// the bundle name
pub const BUNDLER_SCRIPT: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    --target) target="$2"; shift ;;
    --output) out="$2"; shift ;;
    --bundle) name="$2"; shift ;;
    --assets) list="$2"; shift ;;
  esac
  shift
done
echo "$target" >> bundler-calls.log
cat "$list" > "$out/$name"
echo '{}' > "$out/buildlogtep.json"
echo "$name"
"#;

/// The canonical five-file source tree: (path below the mod root, content)
pub const SOURCE_TREE: &[(&str, &str)] = &[
    ("Conf/a.json", "{\"hp\": 10}"),
    ("Localization/b.csv", "key,en\nhello,Hello\n"),
    ("Scripts/c.cs", "public class C {}"),
    ("lib/d.dll", "MZ"),
    ("Art/e.png", "pixels"),
];
