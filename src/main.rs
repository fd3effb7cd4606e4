use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use svgicon::{convert_file, ConvertError, ConvertOptions, DEFAULT_CANVAS_SIZE};

#[derive(Parser, Debug)]
#[command(name = "svg2icon", version, about = "Converts the <path> elements of an SVG file into an icon command script")]
struct Args {
    ///SVG file to convert
    input: PathBuf,

    ///Multiplier applied to every coordinate and stroke width
    #[arg(default_value_t = 1.0)]
    scale: f64,

    ///Where to write the script (stdout if omitted)
    output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    canvas_size: u32,

    ///Drop paths with malformed data instead of failing
    #[arg(long)]
    skip_malformed: bool,

    ///Fill every path, ignoring stroke attributes
    #[arg(long)]
    fill_only: bool,

    ///Log every parsed command
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let options = ConvertOptions {
	scale: args.scale,
	canvas_size: args.canvas_size,
	isolate_paths: args.skip_malformed,
	fill_only: args.fill_only,
    };

    let script = convert_file(&args.input, &options)?;
    if !script.warnings.is_empty() {
	info!("{} path(s) truncated at unsupported commands", script.warnings.len());
    }

    match &args.output {
	Some(output) => fs::write(output, script.to_string())?,
	None => println!("{}", script),
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&args) {
	error!("{}: {}", args.input.display(), err);
	process::exit(1);
    }
}
