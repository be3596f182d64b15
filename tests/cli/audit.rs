use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const COMMON_BUNDLE: &str = r#"{"buttons": {"save": "Save", "cancel": "Cancel"}}"#;

#[test]
fn test_resolved_key() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file(
        "src/Save.tsx",
        r#"
export function Save() {
    return <button>{t("common:buttons.save")}</button>;
}
"#,
    )?;

    assert_cmd_snapshot!(test.command().arg("src/Save.tsx"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/Save.tsx:3  common:buttons.save

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    ");

    Ok(())
}

#[test]
fn test_missing_key() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file("src/form.ts", "export const label = t(\"common:buttons.missing\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/form.ts"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/form.ts:1  common:buttons.missing

    ----- stderr -----
    error: "common:buttons.missing"  broken-key
      --> src/form.ts:1:22
      |
    1 | export const label = t("common:buttons.missing");
      |                      ^
      = note: path not found in 'common' bundle

    ✘ 1 broken key (0 warnings)
    "#);

    Ok(())
}

#[test]
fn test_dynamic_key() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file(
        "src/label.ts",
        "const key = pick();\nexport const label = t(key);\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("src/label.ts"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    warning: "key"  manual-review
      --> src/label.ts:2:22
      |
    2 | export const label = t(key);
      |                      ^
      = note: key passed to `t` is not a string literal
      = hint: key cannot be determined statically, check it manually

    ✓ Checked 1 source file - no broken keys found (1 warning)
    "#);

    Ok(())
}

#[test]
fn test_no_arguments() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: no input files were given

    Usage: i18n-audit [OPTIONS] [FILES]...
    ");

    Ok(())
}

#[test]
fn test_blank_argument_counts_as_no_arguments() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;

    assert_cmd_snapshot!(test.command().arg("   "), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: no input files were given

    Usage: i18n-audit [OPTIONS] [FILES]...
    ");

    Ok(())
}

#[test]
fn test_unknown_namespace() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file("src/app.ts", "t(\"foo:bar\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/app.ts:1  foo:bar

    ----- stderr -----
    ERROR no bundle file for namespace 'foo' in ./modules/i18n/dist/bundle/en-US
    error: "foo:bar"  broken-key
      --> src/app.ts:1:1
      |
    1 | t("foo:bar");
      | ^
      = note: no bundle found for namespace 'foo'

    ✘ 1 broken key (0 warnings)
    "#);

    Ok(())
}

#[test]
fn test_key_without_namespace() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file("src/app.ts", "t(\"buttons.save\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/app.ts:1  buttons.save

    ----- stderr -----
    error: "buttons.save"  broken-key
      --> src/app.ts:1:1
      |
    1 | t("buttons.save");
      | ^
      = note: key has no namespace
      = hint: prefix the key with its namespace, e.g. "common:key.path"

    ✘ 1 broken key (0 warnings)
    "#);

    Ok(())
}

#[test]
fn test_space_separated_file_list() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file("src/a.ts", "t(\"common:buttons.save\");\n")?;
    test.write_file("src/b.ts", "t(\"common:buttons.cancel\");\n")?;

    assert_cmd_snapshot!(test.command().arg("src/a.ts src/b.ts"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/a.ts:1  common:buttons.save
    src/b.ts:1  common:buttons.cancel

    ----- stderr -----
    ✓ Checked 2 source files - no broken keys found
    ");

    Ok(())
}

#[test]
fn test_warnings_before_errors() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file("src/a.ts", "t(\"common:nope\");\n")?;
    test.write_file("src/b.ts", "t(`common:${name}`);\n")?;

    assert_cmd_snapshot!(test.command().args(["src/a.ts", "src/b.ts"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/a.ts:1  common:nope

    ----- stderr -----
    warning: "`common:${name}`"  manual-review
      --> src/b.ts:1:1
      |
    1 | t(`common:${name}`);
      | ^
      = note: key passed to `t` is not a string literal
      = hint: key cannot be determined statically, check it manually

    error: "common:nope"  broken-key
      --> src/a.ts:1:1
      |
    1 | t("common:nope");
      | ^
      = note: path not found in 'common' bundle

    ✘ 1 broken key (1 warning)
    "#);

    Ok(())
}

#[test]
fn test_gutter_fits_widest_line_number() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file(
        "src/app.ts",
        &format!(
            "t(\"common:nope\");\n{}t(\"common:gone\");\n",
            "\n".repeat(8)
        ),
    )?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    src/app.ts:1  common:nope
    src/app.ts:10  common:gone

    ----- stderr -----
    error: "common:nope"  broken-key
      --> src/app.ts:1:1
       |
     1 | t("common:nope");
       | ^
       = note: path not found in 'common' bundle

    error: "common:gone"  broken-key
      --> src/app.ts:10:1
       |
    10 | t("common:gone");
       | ^
       = note: path not found in 'common' bundle

    ✘ 2 broken keys (0 warnings)
    "#);

    Ok(())
}

#[test]
fn test_unsupported_and_unparsable_files_are_skipped() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file("src/legacy.js", "t(\"common:nope\");\n")?;
    test.write_file("src/broken.ts", "t(\"common:nope\"\n")?;
    test.write_file("src/ok.ts", "t(\"common:buttons.save\");\n")?;

    let mut settings = test.settings();
    settings.add_filter(r"line \d+: .+  parse-error", "[syntax error]  parse-error");
    let _guard = settings.bind_to_scope();

    assert_cmd_snapshot!(
        test.command().arg("src/legacy.js src/broken.ts src/gone.ts src/ok.ts"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/ok.ts:1  common:buttons.save

    ----- stderr -----
    warning: unsupported file kind 'js' (expected .ts or .tsx)  unsupported-file
      --> src/legacy.js

    warning: [syntax error]  parse-error
      --> src/broken.ts
      = note: file skipped

    warning: failed to read file: No such file or directory (os error 2)  parse-error
      --> src/gone.ts
      = note: file skipped

    ✓ Checked 1 source file - no broken keys found (3 warnings)
    "
    );

    Ok(())
}

#[test]
fn test_decorated_class() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file(
        "src/dec.ts",
        "@Component({})\nclass A {}\nt(\"common:buttons.save\");\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("src/dec.ts"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/dec.ts:3  common:buttons.save

    ----- stderr -----
    ✓ Checked 1 source file - no broken keys found
    ");

    Ok(())
}

#[test]
fn test_suppression_comments() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file(
        "src/app.ts",
        r#"
// i18n-audit-disable-next-line broken-key
t("common:legacy.title");
// i18n-audit-disable manual-review
t(first);
t(second);
// i18n-audit-enable manual-review
t(third);
"#,
    )?;

    assert_cmd_snapshot!(test.command().arg("src/app.ts"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    src/app.ts:3  common:legacy.title

    ----- stderr -----
    warning: "third"  manual-review
      --> src/app.ts:8:1
      |
    8 | t(third);
      | ^
      = note: key passed to `t` is not a string literal
      = hint: key cannot be determined statically, check it manually

    ✓ Checked 1 source file - no broken keys found (1 warning)
    "#);

    Ok(())
}

#[test]
fn test_directory_input() -> Result<()> {
    let test = CliTest::with_bundle(COMMON_BUNDLE)?;
    test.write_file("src/pages/home.tsx", "t(\"common:buttons.save\");\n")?;
    test.write_file("src/main.ts", "t(\"common:buttons.cancel\");\n")?;
    test.write_file("src/notes.md", "t(\"common:nope\")\n")?;

    assert_cmd_snapshot!(test.command().arg("src"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/main.ts:1  common:buttons.cancel
    src/pages/home.tsx:1  common:buttons.save

    ----- stderr -----
    ✓ Checked 2 source files - no broken keys found
    ");

    Ok(())
}
