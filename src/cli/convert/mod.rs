// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The `convert` subcommand: horizon coordinates in, hour angles and
//! declinations out.


use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{
    display_warnings, InfoPrinter, OutputType, Warn, ARG_FILE_HELP, OUTPUT_HELP,
    OUTPUT_TYPES_COMMA_SEPARATED,
};
use crate::{
    coord::{alt_az_to_hour_angle_dec_broadcast, AngleValues, Conversion},
    unit_parsing::{parse_angle, parse_angles, UnitParseError},
    Altaz2HadecError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ConvertArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The altitudes of the objects [degrees]. Multiple values are separated by
    /// commas. A single value is used with every azimuth and latitude. All
    /// angles may be decimal degrees, a number with a unit (deg, rad) or
    /// sexagesimal (e.g. 59:05:10, -27d30m00s).
    #[clap(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help_heading = "COORDINATES"
    )]
    pub(super) alt: Option<Vec<String>>,

    /// The azimuths of the objects, measured eastward from north [degrees].
    /// Multiple values are separated by commas. A single value is used with
    /// every altitude and latitude.
    #[clap(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help_heading = "COORDINATES"
    )]
    pub(super) az: Option<Vec<String>>,

    /// The latitudes of the observer [degrees]. Multiple values are separated
    /// by commas. A single value is used with every altitude and azimuth.
    #[clap(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help_heading = "COORDINATES"
    )]
    pub(super) lat: Option<Vec<String>>,

    /// A text file of horizon coordinates. Each line has an altitude, an
    /// azimuth and optionally a latitude, separated by whitespace. If the
    /// latitude is absent, a single --lat value is used. Lines starting with #
    /// are ignored.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT FILES")]
    pub(super) input: Option<PathBuf>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,
}

impl ConvertArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<ConvertArgs, Altaz2HadecError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let ConvertArgs {
                args_file: _,
                alt,
                az,
                lat,
                input,
                output,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(ConvertArgs {
                args_file: None,
                alt: cli_args.alt.or(alt),
                az: cli_args.az.or(az),
                lat: cli_args.lat.or(lat),
                input: cli_args.input.or(input),
                output: cli_args.output.or(output),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<ConvertParams, ConvertArgsError> {
        debug!("{:#?}", self);

        // Expose all the struct fields to ensure they're all used.
        let ConvertArgs {
            args_file: _,
            alt,
            az,
            lat,
            input,
            output,
        } = self;

        let lats = parse_angles(&lat.unwrap_or_default())?;

        let mut printer = InfoPrinter::new("Horizon coordinates".into());
        let (alt, az, lat) = match input {
            Some(input) => {
                if alt.is_some() || az.is_some() {
                    return Err(ConvertArgsError::InputAndCoordinates);
                }
                let rows = read_horizon_file(&input, &lats)?;
                printer.push_line(format!("From {}", input.display()).into());
                rows
            }

            None => {
                let alt = parse_angles(&alt.unwrap_or_default())?;
                if alt.is_empty() {
                    return Err(ConvertArgsError::NoAltitudes);
                }
                let az = parse_angles(&az.unwrap_or_default())?;
                if az.is_empty() {
                    return Err(ConvertArgsError::NoAzimuths);
                }
                if lats.is_empty() {
                    return Err(ConvertArgsError::NoLatitudes);
                }
                printer.push_line("From the command line".into());
                (alt, az, lats)
            }
        };
        printer.push_block(vec![
            format!("{} altitude(s)", alt.len()).into(),
            format!("{} azimuth(s)", az.len()).into(),
            format!("{} latitude(s)", lat.len()).into(),
        ]);

        let output = match output {
            Some(path) => match OutputType::from_path(&path) {
                Some(output_type) => {
                    printer.push_line(format!("Writing {output_type} to {}", path.display()).into());
                    Some((path, output_type))
                }
                None => return Err(ConvertArgsError::OutputFileExtension(path.into_boxed_path())),
            },
            None => {
                printer.push_line("Writing tsv to stdout".into());
                None
            }
        };
        printer.display();

        warn_unconventional("altitude", &alt, |a| (-90.0..=90.0).contains(&a), "[-90°, 90°]");
        warn_unconventional("azimuth", &az, |a| (0.0..360.0).contains(&a), "[0°, 360°)");
        warn_unconventional("latitude", &lat, |a| (-90.0..=90.0).contains(&a), "[-90°, 90°]");

        Ok(ConvertParams {
            alt,
            az,
            lat,
            output,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), Altaz2HadecError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;
        display_warnings();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

/// Nothing stops a user from converting an altitude of 120°, but they probably
/// want to know about it.
fn warn_unconventional(
    what: &'static str,
    values: &[f64],
    conventional: impl Fn(f64) -> bool,
    range: &'static str,
) {
    let num_unconventional = values.iter().filter(|&&v| !conventional(v)).count();
    if num_unconventional > 0 {
        vec![
            Cow::from(format!(
                "{num_unconventional} {what} value(s) are outside {range}"
            )),
            "These are converted anyway; check that the results are meaningful".into(),
        ]
        .warn();
    }
}

/// Read a whitespace-separated file of horizon coordinates. Each row is an
/// altitude, an azimuth and optionally a latitude. Rows without a latitude use
/// `lats`, which must then have exactly one value.
fn read_horizon_file(
    file: &Path,
    lats: &[f64],
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), ConvertArgsError> {
    debug!("Reading horizon coordinates from {}", file.display());
    let reader = BufReader::new(File::open(file)?);

    let mut alt = vec![];
    let mut az = vec![];
    let mut lat = vec![];
    let mut used_file_lat = false;
    for (i_line, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = i_line + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse = |s: &str| {
            parse_angle(s)
                .map(|(angle, _)| angle)
                .map_err(|err| ConvertArgsError::RowAngle {
                    file: file.to_path_buf().into_boxed_path(),
                    line_num,
                    err,
                })
        };
        let columns: Vec<&str> = line.split_whitespace().collect();
        match columns[..] {
            [row_alt, row_az] => {
                if lats.len() != 1 {
                    return Err(ConvertArgsError::RowNeedsLatitude {
                        file: file.to_path_buf().into_boxed_path(),
                        line_num,
                        num_lats: lats.len(),
                    });
                }
                alt.push(parse(row_alt)?);
                az.push(parse(row_az)?);
                lat.push(lats[0]);
            }

            [row_alt, row_az, row_lat] => {
                alt.push(parse(row_alt)?);
                az.push(parse(row_az)?);
                lat.push(parse(row_lat)?);
                used_file_lat = true;
            }

            _ => {
                return Err(ConvertArgsError::BadRow {
                    file: file.to_path_buf().into_boxed_path(),
                    line_num,
                    num_columns: columns.len(),
                })
            }
        }
    }

    if alt.is_empty() {
        return Err(ConvertArgsError::EmptyInput(file.to_path_buf().into_boxed_path()));
    }
    if used_file_lat && !lats.is_empty() {
        "Latitudes in the input file take precedence over --lat".warn();
    }
    trace!("Read {} rows from {}", alt.len(), file.display());

    Ok((alt, az, lat))
}

/// A single value is broadcast; anything else is used as is.
fn angle_values(v: &[f64]) -> AngleValues<'_> {
    match v {
        [scalar] => AngleValues::Scalar(*scalar),
        _ => AngleValues::Array(v),
    }
}

/// Get the value used for index `i` of a (possibly broadcast) input.
fn broadcast_value(v: &[f64], i: usize) -> f64 {
    match v {
        [scalar] => *scalar,
        _ => v[i],
    }
}

/// Parameters for converting coordinates. Unlike [`ConvertArgs`], everything
/// in here has been parsed and checked.
#[derive(Debug)]
pub(super) struct ConvertParams {
    pub(super) alt: Vec<f64>,
    pub(super) az: Vec<f64>,
    pub(super) lat: Vec<f64>,
    pub(super) output: Option<(PathBuf, OutputType)>,
}

impl ConvertParams {
    /// Do the conversion, returning a record for each set of inputs.
    pub(super) fn convert(&self) -> Result<Vec<Conversion>, Altaz2HadecError> {
        let (ha, dec) = alt_az_to_hour_angle_dec_broadcast(
            angle_values(&self.alt),
            angle_values(&self.az),
            angle_values(&self.lat),
        )?;

        let conversions = ha
            .into_iter()
            .zip(dec)
            .enumerate()
            .map(|(i, (ha, dec))| Conversion {
                alt: broadcast_value(&self.alt, i),
                az: broadcast_value(&self.az, i),
                lat: broadcast_value(&self.lat, i),
                ha,
                dec,
            })
            .collect();
        Ok(conversions)
    }

    pub(super) fn run(&self) -> Result<(), Altaz2HadecError> {
        let conversions = self.convert()?;
        info!("Converted {} coordinate(s)", conversions.len());

        match &self.output {
            Some((path, OutputType::Tsv)) => {
                let mut f = BufWriter::new(File::create(path)?);
                write_tsv(&mut f, &conversions)?;
                f.flush()?;
                info!("Wrote {}", path.display());
            }

            Some((path, OutputType::Json)) => {
                let mut f = BufWriter::new(File::create(path)?);
                serde_json::to_writer_pretty(&mut f, &conversions)?;
                writeln!(&mut f)?;
                f.flush()?;
                info!("Wrote {}", path.display());
            }

            None => {
                let stdout = std::io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                write_tsv(&mut out, &conversions)?;
                out.flush()?;
            }
        }

        Ok(())
    }
}

/// Write tab-separated values with a commented header. All values are in
/// degrees.
pub(super) fn write_tsv<W: Write>(out: &mut W, conversions: &[Conversion]) -> std::io::Result<()> {
    writeln!(out, "# alt\taz\tlat\tha\tdec")?;
    for c in conversions {
        writeln!(out, "{}\t{}\t{}\t{}\t{}", c.alt, c.az, c.lat, c.ha, c.dec)?;
    }
    Ok(())
}

#[derive(Error, Debug)]
pub(super) enum ConvertArgsError {
    #[error("No altitudes were supplied")]
    NoAltitudes,

    #[error("No azimuths were supplied")]
    NoAzimuths,

    #[error("No latitudes were supplied")]
    NoLatitudes,

    #[error("Coordinates were given with --input as well as --alt/--az, but only one source of coordinates is allowed")]
    InputAndCoordinates,

    #[error("Input file '{}' doesn't contain any coordinates", .0.display())]
    EmptyInput(Box<Path>),

    #[error("Line {line_num} of '{}' has {num_columns} columns, but 2 (alt az) or 3 (alt az lat) are expected", .file.display())]
    BadRow {
        file: Box<Path>,
        line_num: usize,
        num_columns: usize,
    },

    #[error("Line {line_num} of '{}' has no latitude column, so exactly one --lat value is required, but {num_lats} were supplied", .file.display())]
    RowNeedsLatitude {
        file: Box<Path>,
        line_num: usize,
        num_lats: usize,
    },

    #[error("Line {line_num} of '{}': {err}", .file.display())]
    RowAngle {
        file: Box<Path>,
        line_num: usize,
        err: UnitParseError,
    },

    #[error("Output file '{}' doesn't have a recognised file extension! Valid extensions are: {}", .0.display(), *OUTPUT_TYPES_COMMA_SEPARATED)]
    OutputFileExtension(Box<Path>),

    #[error(transparent)]
    Parse(#[from] UnitParseError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
