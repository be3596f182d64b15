use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{BUNDLE_DIR, CliTest};

#[test]
fn test_quiet_hides_discovered_keys() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"title": "Title"}"#)?;
    test.write_file("src/app.ts", "t(\"common:title\");\n")?;

    assert_cmd_snapshot!(test.command().args(["--quiet", "src/app.ts"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    ");

    Ok(())
}

#[test]
fn test_root_option() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"title": "Title"}"#)?;
    test.write_file("src/app.ts", "t(\"common:title\");\nt(\"foo:bar\");\n")?;

    let _guard = test.settings().bind_to_scope();
    let root = test.root().to_string_lossy().into_owned();

    assert_cmd_snapshot!(
        test.command()
            .current_dir(std::env::temp_dir())
            .args(["--root", root.as_str(), "src/app.ts"]),
        @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/app.ts:1  common:title
    src/app.ts:2  foo:bar

    ----- stderr -----
    ERROR no bundle file for namespace 'foo' in [ROOT]/modules/i18n/dist/bundle/en-US
    error: "foo:bar"  broken-key
      --> src/app.ts:2:1
      |
    2 | t("foo:bar");
      | ^
      = note: no bundle found for namespace 'foo'

    ✘ 1 broken key (0 warnings)
    "#
    );

    Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["--root", "does/not/exist", "src/app.ts"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Root directory does not exist: "does/not/exist"
    "#);

    Ok(())
}

#[test]
fn test_locale_option() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"title": "Title"}"#)?;
    test.write_file(
        "modules/i18n/dist/bundle/de-DE/common.91ab.json",
        r#"{"titel": "Titel"}"#,
    )?;
    test.write_file("src/app.ts", "t(\"common:titel\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/app.ts:1  common:titel

    ----- stderr -----
    error: "common:titel"  broken-key
      --> src/app.ts:1:1
      |
    1 | t("common:titel");
      | ^
      = note: path not found in 'common' bundle

    ✘ 1 broken key (0 warnings)
    "#);

    assert_cmd_snapshot!(test.command().args(["--locale", "de-DE", "src/app.ts"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/app.ts:1  common:titel

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    ");

    Ok(())
}

#[test]
fn test_broken_when_option() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"empty": ""}"#)?;
    test.write_file("src/app.ts", "t(\"common:empty\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/app.ts:1  common:empty

    ----- stderr -----
    error: "common:empty"  broken-key
      --> src/app.ts:1:1
      |
    1 | t("common:empty");
      | ^
      = note: value in 'common' bundle is empty

    ✘ 1 broken key (0 warnings)
    "#);

    assert_cmd_snapshot!(
        test.command().args(["--broken-when", "missing", "src/app.ts"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/app.ts:1  common:empty

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    "
    );

    Ok(())
}

#[test]
fn test_function_option() -> Result<()> {
    let test = CliTest::with_bundle(r#"{"title": "Title"}"#)?;
    test.write_file(
        "src/app.ts",
        "i18n.t(\"common:nope\");\ntranslate(\"common:title\");\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    ");

    assert_cmd_snapshot!(
        test.command().args([
            "--function",
            "i18n.t",
            "--function",
            "translate",
            "src/app.ts",
        ]),
        @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/app.ts:1  common:nope
    src/app.ts:2  common:title

    ----- stderr -----
    error: "common:nope"  broken-key
      --> src/app.ts:1:1
      |
    1 | i18n.t("common:nope");
      | ^
      = note: path not found in 'common' bundle

    ✘ 1 broken key (0 warnings)
    "#
    );

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nauditrc.json",
        r#"{
            "bundleRoot": "i18n/bundles",
            "canonicalLocale": "en",
            "defaultNamespace": "app",
            "ignores": ["**/*.test.ts"]
        }"#,
    )?;
    test.write_file("i18n/bundles/en/app.0a1b.json", r#"{"title": "Title"}"#)?;
    test.write_file("src/app.ts", "t(\"title\");\n")?;
    test.write_file("src/app.test.ts", "t(\"nope\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts src/app.test.ts"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/app.ts:1  title

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    ");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nauditrc.json", r#"{ "ignores": ["[invalid"] }"#)?;
    test.write_file("src/app.ts", "t(\"common:title\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern in 'ignores': "[invalid": Pattern syntax error near position 0: invalid range pattern
    "#);

    Ok(())
}

#[test]
fn test_default_export_bundle() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        &format!("{BUNDLE_DIR}/common.77aa.json"),
        r#"{"default": {"buttons": {"save": "Save"}}}"#,
    )?;
    test.write_file("src/app.ts", "t(\"common:buttons.save\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/app.ts:1  common:buttons.save

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    ");

    Ok(())
}
