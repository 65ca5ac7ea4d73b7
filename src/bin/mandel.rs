// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::process;
use std::str::FromStr;

use clap::{App, Arg, ArgMatches, ErrorKind};
use num::Complex;
use tracing::Level;

use mandel::config::{
    DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_OUTPUT,
    DEFAULT_SCALE, DEFAULT_WIDTH, DEFAULT_WORKERS,
};
use mandel::{render_image, PartitionPolicy, RenderConfig};

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_float(s: &str, positive: bool, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() && (!positive || f > 0.0) => Ok(()),
        _ => Err(err.to_string()),
    }
}

/// Validators have already vetted every value, so a failed parse can
/// only mean the option was absent.
fn parsed<T: FromStr>(matches: &ArgMatches, name: &str, default: T) -> T {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .unwrap_or(default)
}

const MAX: &str = "max";
const XCENTER: &str = "x";
const YCENTER: &str = "y";
const SCALE: &str = "scale";
const THREADS: &str = "threads";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const OUTPUT: &str = "output";
const PARTITION: &str = "partition";
const VERBOSE: &str = "verbose";

const EXAMPLES: &str = "Some examples are:
    mandel -x -0.5 -y -0.5 -s 0.2
    mandel -x -.38 -y -.665 -s .05 -m 100
    mandel -x 0.286932 -y 0.014287 -s .0005 -m 1000";

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Multi-threaded Mandelbrot renderer")
        .after_help(EXAMPLES)
        .arg(
            Arg::with_name(MAX)
                .short("m")
                .long(MAX)
                .takes_value(true)
                .value_name("max")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u32::max_value(),
                        "Could not parse iteration count",
                        "Iteration count must be at least 1",
                    )
                })
                .help("The maximum number of iterations per point. (default=1000)"),
        )
        .arg(
            Arg::with_name(XCENTER)
                .short("x")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("coord")
                .validator(|s| validate_float(&s, false, "Could not parse x coordinate"))
                .help("X coordinate of image center point. (default=0)"),
        )
        .arg(
            Arg::with_name(YCENTER)
                .short("y")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("coord")
                .validator(|s| validate_float(&s, false, "Could not parse y coordinate"))
                .help("Y coordinate of image center point. (default=0)"),
        )
        .arg(
            Arg::with_name(SCALE)
                .short("s")
                .long(SCALE)
                .takes_value(true)
                .value_name("scale")
                .validator(|s| validate_float(&s, true, "Scale must be a positive number"))
                .help("Scale of the image in Mandelbrot coordinates. (default=4)"),
        )
        .arg(
            Arg::with_name(THREADS)
                .short("n")
                .long(THREADS)
                .takes_value(true)
                .value_name("threads")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse thread count",
                        "Thread count must be at least 1",
                    )
                })
                .help("Number of threads. (default=1)"),
        )
        .arg(
            Arg::with_name(WIDTH)
                .short("W")
                .long(WIDTH)
                .takes_value(true)
                .value_name("pixels")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u32::max_value(),
                        "Could not parse image width",
                        "Image width must be at least 1",
                    )
                })
                .help("Width of the image in pixels. (default=500)"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .short("H")
                .long(HEIGHT)
                .takes_value(true)
                .value_name("pixels")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u32::max_value(),
                        "Could not parse image height",
                        "Image height must be at least 1",
                    )
                })
                .help("Height of the image in pixels. (default=500)"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .short("o")
                .long(OUTPUT)
                .takes_value(true)
                .value_name("file")
                .help("Set output file. (default=mandel.bmp)"),
        )
        .arg(
            Arg::with_name(PARTITION)
                .long(PARTITION)
                .takes_value(true)
                .possible_values(&["truncate", "absorb"])
                .help("Who renders the rows left over when the height is not a multiple of the thread count. (default=absorb)"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .short("v")
                .long(VERBOSE)
                .help("Log each band as it is dispatched and finished"),
        )
}

/// Parse the command line.  Unlike clap's default, asking for help
/// renders nothing and exits with a failure status.
fn args<'a>() -> ArgMatches<'a> {
    match app().get_matches_safe() {
        Ok(matches) => matches,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed => {
                println!("{}", e.message);
                process::exit(1);
            }
            _ => e.exit(),
        },
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let max = parsed(matches, MAX, DEFAULT_MAX_ITERATIONS);
    let xcenter = parsed(matches, XCENTER, DEFAULT_CENTER_X);
    let ycenter = parsed(matches, YCENTER, DEFAULT_CENTER_Y);
    let scale = parsed(matches, SCALE, DEFAULT_SCALE);
    let threads = parsed(matches, THREADS, DEFAULT_WORKERS);
    let width = parsed(matches, WIDTH, DEFAULT_WIDTH);
    let height = parsed(matches, HEIGHT, DEFAULT_HEIGHT);
    let partition = parsed(matches, PARTITION, PartitionPolicy::default());
    let outfile = matches.value_of(OUTPUT).unwrap_or(DEFAULT_OUTPUT);

    let config = RenderConfig::from_center(
        Complex::new(xcenter, ycenter),
        scale,
        width,
        height,
        max,
        threads,
    )?
    .with_partition(partition);

    println!(
        "mandel: x={:.6} y={:.6} scale={:.6} threads={} max={} outfile={}",
        xcenter, ycenter, scale, threads, max, outfile
    );

    let (canvas, stats) = render_image(&config)?;
    println!(
        "This code took {} microseconds to execute",
        stats.elapsed.as_micros()
    );

    canvas.save(outfile)?;
    Ok(())
}

fn main() {
    let matches = args();
    init_logging(matches.is_present(VERBOSE));
    if let Err(e) = run(&matches) {
        eprintln!("mandel: {}", e);
        process::exit(1);
    }
}
