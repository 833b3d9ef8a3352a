// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod convert;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};

fn altaz2hadec() -> Command {
    Command::cargo_bin("altaz2hadec").unwrap()
}

fn get_cmd_output(result: &Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn make_file_in_dir<T: AsRef<Path>, U: AsRef<Path>>(
    filename: T,
    dir: U,
    contents: &str,
) -> PathBuf {
    let path = dir.as_ref().join(filename);
    let mut f = File::create(&path).expect("couldn't make file");
    f.write_all(contents.as_bytes()).unwrap();
    path
}

/// Parse tab-separated values printed by altaz2hadec, ignoring the header.
fn parse_tsv(s: &str) -> Vec<[f64; 5]> {
    s.lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| {
            let values: Vec<f64> = l.split('\t').map(|v| v.parse().unwrap()).collect();
            assert_eq!(values.len(), 5, "{l}");
            [values[0], values[1], values[2], values[3], values[4]]
        })
        .collect()
}
