// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests against the `convert` subcommand.

use approx::assert_abs_diff_eq;
use indoc::indoc;
use tempfile::TempDir;

use super::*;
use altaz2hadec::Conversion;

#[test]
fn test_convert_to_stdout() {
    let cmd = altaz2hadec()
        .args(["convert", "--alt", "59:05:10", "--az", "133:18:29", "--lat=43.07833"])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(&cmd));
    let (stdout, stderr) = get_cmd_output(&cmd);

    // Logs don't pollute the coordinates.
    assert!(stderr.contains("altaz2hadec convert"), "{stderr}");
    assert!(stdout.starts_with("# alt\taz\tlat\tha\tdec\n"), "{stdout}");
    let rows = parse_tsv(&stdout);
    assert_eq!(rows.len(), 1);
    let [alt, az, lat, ha, dec] = rows[0];
    assert_abs_diff_eq!(alt, 59.0 + 5.0 / 60.0 + 10.0 / 3600.0, epsilon = 1e-12);
    assert_abs_diff_eq!(az, 133.0 + 18.0 / 60.0 + 29.0 / 3600.0, epsilon = 1e-12);
    assert_abs_diff_eq!(lat, 43.07833);
    assert_abs_diff_eq!(ha, 336.68286, epsilon = 1e-5);
    assert_abs_diff_eq!(dec, 19.18245, epsilon = 1e-5);
}

#[test]
fn test_convert_alias_and_broadcast() {
    let cmd = altaz2hadec()
        .args([
            "altaz-to-hadec",
            "--alt",
            "0,45",
            "--az",
            "90,30",
            "--lat=0",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(&cmd));
    let (stdout, _) = get_cmd_output(&cmd);
    let rows = parse_tsv(&stdout);
    assert_eq!(rows.len(), 2);
    assert_abs_diff_eq!(rows[0][3], 270.0, epsilon = 1e-10);
    assert_abs_diff_eq!(rows[0][4], 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(rows[1][2], 0.0);
}

#[test]
fn test_convert_to_json() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("hadec.json");
    let cmd = altaz2hadec()
        .args([
            "convert",
            "--alt",
            "45",
            "--az",
            "30",
            "--lat",
            "90",
            "-o",
            &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(&cmd));
    let (stdout, _) = get_cmd_output(&cmd);
    assert!(stdout.is_empty(), "{stdout}");

    let conversions: Vec<Conversion> =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(conversions.len(), 1);
    assert_abs_diff_eq!(conversions[0].ha, 210.0, epsilon = 1e-10);
    assert_abs_diff_eq!(conversions[0].dec, 45.0, epsilon = 1e-10);
}

#[test]
fn test_convert_with_arg_file_and_save_toml() {
    let tmp_dir = TempDir::new().unwrap();
    let args_file = make_file_in_dir(
        "args.toml",
        tmp_dir.path(),
        indoc! {r#"
            alt = ["45", "0.7854rad"]
            az = ["30", "30"]
            lat = ["-90"]
        "#},
    );
    let saved = tmp_dir.path().join("saved.toml");

    let cmd = altaz2hadec()
        .args([
            "convert",
            &format!("{}", args_file.display()),
            "--lat=90",
            "--save-toml",
            &format!("{}", saved.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(&cmd));
    let (stdout, _) = get_cmd_output(&cmd);
    let rows = parse_tsv(&stdout);
    assert_eq!(rows.len(), 2);
    // The latitude on the command line overrides the file.
    assert_abs_diff_eq!(rows[0][2], 90.0);
    assert_abs_diff_eq!(rows[0][3], 210.0, epsilon = 1e-10);
    assert_abs_diff_eq!(rows[0][4], 45.0, epsilon = 1e-10);

    // The saved arguments reproduce the run.
    let saved_contents: toml::Value =
        toml::from_str(&std::fs::read_to_string(&saved).unwrap()).unwrap();
    assert_eq!(
        saved_contents["lat"],
        toml::Value::Array(vec![toml::Value::String("90".to_string())])
    );
    assert!(saved_contents.get("args_file").is_none());
    let cmd = altaz2hadec()
        .args(["convert", &format!("{}", saved.display())])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(&cmd));
    let (stdout2, _) = get_cmd_output(&cmd);
    assert_eq!(stdout, stdout2);
}

#[test]
fn test_convert_input_file() {
    let tmp_dir = TempDir::new().unwrap();
    let input = make_file_in_dir(
        "coords.txt",
        tmp_dir.path(),
        indoc! {"
            # alt az
            45 30
            0 90
        "},
    );
    let cmd = altaz2hadec()
        .args([
            "convert",
            "-i",
            &format!("{}", input.display()),
            "--lat=0",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(&cmd));
    let (stdout, _) = get_cmd_output(&cmd);
    let rows = parse_tsv(&stdout);
    assert_eq!(rows.len(), 2);
    assert_abs_diff_eq!(rows[1][3], 270.0, epsilon = 1e-10);
    assert_abs_diff_eq!(rows[1][4], 0.0, epsilon = 1e-10);
}

#[test]
fn test_convert_length_mismatch_fails() {
    let cmd = altaz2hadec()
        .args(["convert", "--alt", "10,20,30", "--az", "100,200", "--lat=-27"])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(&cmd);
    assert!(stdout.is_empty(), "{stdout}");
    assert!(stderr.contains("Error"), "{stderr}");
    assert!(stderr.contains("same length"), "{stderr}");
}

#[test]
fn test_convert_bad_angle_fails() {
    let cmd = altaz2hadec()
        .args(["convert", "--alt", "ten", "--az", "100", "--lat=-27"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(&cmd);
    assert!(stderr.contains("Angles may be decimal degrees"), "{stderr}");
}

#[test]
fn test_convert_dry_run() {
    let cmd = altaz2hadec()
        .args([
            "convert",
            "--alt",
            "10",
            "--az",
            "100",
            "--lat=-27",
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(&cmd));
    let (stdout, stderr) = get_cmd_output(&cmd);
    assert!(stdout.is_empty(), "{stdout}");
    assert!(stderr.contains("Dry run -- exiting now."), "{stderr}");
}
