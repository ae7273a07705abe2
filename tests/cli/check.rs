use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN: &str = r#"{
    "NAME": "English",
    "APP": {
        "NAME": "Apache Guacamole",
        "VERSION": "1.5.0",
        "ACTION_SAVE": "Save",
        "ACTION_CANCEL": "Cancel"
    },
    "HOME": {
        "TITLE": "Home",
        "PORT": "5900"
    },
    "PROTOCOL_VNC": {
        "NAME": "VNC"
    }
}"#;

#[test]
fn test_complete_translation() -> Result<()> {
    let test = CliTest::with_file("translations/en.json", EN)?;
    test.write_file(
        "translations/fr.json",
        r#"{
            "NAME": "Français",
            "APP": { "ACTION_SAVE": "Enregistrer", "ACTION_CANCEL": "Annuler" },
            "HOME": { "TITLE": "Accueil", "PORT": "5900" },
            "PROTOCOL_VNC": { "NAME": "VNC" }
        }"#,
    )?;

    assert_cmd_snapshot!(
        test.compare_command(&["translations/en.json", "translations/fr.json"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Original language: en (English)
    Translation language: fr (Français)

    Check completed successfully. No errors.

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_missing_and_unused() -> Result<()> {
    let test = CliTest::with_file("translations/en.json", EN)?;
    test.write_file(
        "translations/de.json",
        r#"{
            "APP": { "NAME": "Guacamole", "ACTION_SAVE": "Speichern" },
            "HOME": { "TITLE": "Startseite", "PORT": "5900", "OLD": "Alt" },
            "PROTOCOL_VNC": { "NAME": "VNC" }
        }"#,
    )?;

    assert_cmd_snapshot!(
        test.compare_command(&["translations/en.json", "translations/de.json"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Original language: en (English)
    Translation language: de (unknown)

    The following strings are missing from the translation and should be added:

        APP.ACTION_CANCEL
        NAME

    The following strings are either NOT defined for the original language or are expected to be inherited from the original language and should be removed:

        APP.NAME
        HOME.OLD

    4 error(s) total.

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_default_original_path() -> Result<()> {
    let test = CliTest::with_file("translations/en.json", EN)?;
    test.write_file(
        "translations/es.json",
        r#"{
            "NAME": "Español",
            "APP": { "ACTION_SAVE": "Guardar" },
            "HOME": { "TITLE": "Inicio", "PORT": "5900" },
            "PROTOCOL_VNC": { "NAME": "VNC" }
        }"#,
    )?;

    let mut cmd = test.command();
    cmd.arg(test.root().join("translations/es.json"));

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Original language: en (English)
    Translation language: es (Español)

    The following strings are missing from the translation and should be added:

        APP.ACTION_CANCEL

    1 error(s) total.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_copied() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;
    test.write_file(
        "nl.json",
        r#"{
            "NAME": "Nederlands",
            "APP": { "ACTION_SAVE": "Save", "ACTION_CANCEL": "Annuleren" },
            "HOME": { "TITLE": "Home", "PORT": "5900" },
            "PROTOCOL_VNC": { "NAME": "VNC" }
        }"#,
    )?;

    assert_cmd_snapshot!(test.compare_command(&["--check-copied", "nl.json"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Original language: en (English)
    Translation language: nl (Nederlands)

    The following strings are identical to the original language and MIGHT be untranslated:

        APP.ACTION_SAVE
        HOME.TITLE

    2 error(s) total.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_checks_disabled() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;
    test.write_file("it.json", r#"{ "EXTRA": "Extra" }"#)?;

    assert_cmd_snapshot!(
        test.compare_command(&["--no-missing", "--no-unused", "it.json"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Original language: en (English)
    Translation language: it (unknown)

    Check completed successfully. No errors.

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{ "NAME": "English", "A": "1", "B": "2" }"#)?;
    test.write_file("fr.json", r#"{ "A": "1", "C": "3" }"#)?;

    assert_cmd_snapshot!(test.compare_command(&["--format", "json", "fr.json"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    {
      "original": {
        "languageKey": "en",
        "languageName": "English",
        "stringCount": 3
      },
      "translated": {
        "languageKey": "fr",
        "languageName": null,
        "stringCount": 2
      },
      "missingKeys": [
        "B",
        "NAME"
      ],
      "unusedKeys": [
        "C"
      ],
      "copiedKeys": [],
      "errorCount": 3
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_file(
        "en.json",
        r#"{ "APP": { "NAME": "X", "OK": "OK" }, "B": "Hello" }"#,
    )?;
    test.write_file(
        "pl.json",
        r#"{ "APP": { "NAME": "X", "OK": "OK" }, "B": "Cześć" }"#,
    )?;
    test.write_file(
        "transcheck.json",
        r#"{ "expectedMissing": [], "expectedCopied": ["OK"] }"#,
    )?;

    // APP.NAME is no longer expected to be missing, so it is compared normally
    assert_cmd_snapshot!(
        test.compare_command(&["--check-copied", "--config", "transcheck.json", "pl.json"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Original language: en (unknown)
    Translation language: pl (unknown)

    The following strings are identical to the original language and MIGHT be untranslated:

        APP.NAME

    1 error(s) total.

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_verbose_diagnostics() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;
    test.write_file("fr.json", EN)?;

    assert_cmd_snapshot!(test.compare_command(&["-v", "en.json", "fr.json"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Original language: en (English)
    Translation language: fr (English)

    The following strings are either NOT defined for the original language or are expected to be inherited from the original language and should be removed:

        APP.NAME
        APP.VERSION

    2 error(s) total.

    ----- stderr -----
    info: loaded 8 string(s) from en.json
    info: loaded 8 string(s) from fr.json
    info: ignoring 2 string(s) inherited from the base translation
    ");

    Ok(())
}

#[test]
fn test_missing_translated_file() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;

    insta::with_settings!({filters => vec![(r"\(os error \d+\)", "(os error [CODE])")]}, {
        assert_cmd_snapshot!(test.compare_command(&["fr.json"]), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: failed to read translation file "fr.json": No such file or directory (os error [CODE])
        "#);
    });

    Ok(())
}

#[test]
fn test_invalid_original_file() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{ "HOME": "#)?;
    test.write_file("fr.json", "{}")?;

    insta::with_settings!({filters => vec![(r"at line \d+ column \d+", "at [POSITION]")]}, {
        assert_cmd_snapshot!(test.compare_command(&["fr.json"]), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: failed to parse translation file "en.json": EOF while parsing a value at [POSITION]
        "#);
    });

    Ok(())
}

#[test]
fn test_unsupported_value() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{ "HOME": { "COUNT": 3 } }"#)?;
    test.write_file("fr.json", "{}")?;

    assert_cmd_snapshot!(test.compare_command(&["fr.json"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: unsupported value in translation file "en.json": number found at "HOME.COUNT", expected a string or an object
    "#);

    Ok(())
}

#[test]
fn test_deeply_nested_catalog() -> Result<()> {
    let depth = 200;
    let deep = format!("{}\"x\"{}", "{\"N\":".repeat(depth), "}".repeat(depth));
    let test = CliTest::with_file("en.json", &deep)?;
    test.write_file("fr.json", &deep)?;

    assert_cmd_snapshot!(test.compare_command(&["fr.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Original language: en (unknown)
    Translation language: fr (unknown)

    Check completed successfully. No errors.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.compare_command(&["--version"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    transcheck 0.1.0

    ----- stderr -----
    ");

    Ok(())
}
