use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use iniconf::Document;
use iniconf::query::{all_keys, compile_pattern, find_keys};

#[derive(Parser)]
#[command(name = "iniconf")]
#[command(author, version, about = "Inspect and query INI configuration files")]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Log parser activity to stderr (overrides RUST_LOG)
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the value at a key path ("section::key" or a default-section key)
	Get {
		file: PathBuf,
		key: String,

		/// Type to convert the value to before printing
		#[arg(long = "as", value_enum, default_value_t = ValueKind::String)]
		kind: ValueKind,
	},
	/// Check INI files for errors without printing their contents
	Validate {
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},
	/// List key paths, optionally filtered by a regex
	Keys {
		file: PathBuf,

		/// Only list paths matching this regex
		#[arg(long = "match", value_name = "REGEX")]
		pattern: Option<String>,
	},
	/// Dump the parsed document as TOML
	Show {
		file: PathBuf,

		/// Only show this section
		#[arg(long)]
		section: Option<String>,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum ValueKind {
	String,
	Int,
	Int32,
	Int64,
	Uint32,
	Uint64,
	Float,
	Bool,
	List,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli.command) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("iniconf=trace")
	} else {
		EnvFilter::from_default_env()
	};

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_ansi(std::io::stderr().is_terminal()),
		)
		.with(filter)
		.init();
}

fn run(command: Commands) -> Result<ExitCode> {
	match command {
		Commands::Get { file, key, kind } => handle_get(&file, &key, kind),
		Commands::Validate { files } => handle_validate(&files),
		Commands::Keys { file, pattern } => handle_keys(&file, pattern.as_deref()),
		Commands::Show { file, section } => handle_show(&file, section.as_deref()),
	}
}

fn load(file: &Path) -> Result<Document> {
	Document::load(file).with_context(|| format!("Failed to load {}", file.display()))
}

fn handle_get(file: &Path, key: &str, kind: ValueKind) -> Result<ExitCode> {
	let doc = load(file)?;

	match kind {
		ValueKind::String => println!("{}", doc.string(key)),
		ValueKind::Int => println!("{}", doc.int(key)?),
		ValueKind::Int32 => println!("{}", doc.int32(key)?),
		ValueKind::Int64 => println!("{}", doc.int64(key)?),
		ValueKind::Uint32 => println!("{}", doc.uint32(key)?),
		ValueKind::Uint64 => println!("{}", doc.uint64(key)?),
		ValueKind::Float => println!("{}", doc.float(key)?),
		ValueKind::Bool => println!("{}", doc.bool(key)?),
		ValueKind::List => {
			for item in doc.strings(key) {
				println!("{}", item);
			}
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_validate(files: &[PathBuf]) -> Result<ExitCode> {
	let mut failed = false;

	for file in files {
		match Document::load(file) {
			Ok(doc) => println!(
				"{}: valid ({} sections, {} keys)",
				file.display(),
				doc.section_count(),
				doc.entry_count()
			),
			Err(e) => {
				eprintln!("{}: {:#}", file.display(), anyhow::Error::from(e));
				failed = true;
			}
		}
	}

	Ok(if failed {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	})
}

fn handle_keys(file: &Path, pattern: Option<&str>) -> Result<ExitCode> {
	let doc = load(file)?;

	let matches = match pattern {
		Some(pattern) => {
			let regex = compile_pattern(pattern)?;
			find_keys(&doc, &regex)
		}
		None => all_keys(&doc),
	};

	for m in &matches {
		println!("{}", m.path());
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_show(file: &Path, section: Option<&str>) -> Result<ExitCode> {
	let doc = load(file)?;

	let rendered = match section {
		Some(name) => {
			let section = doc
				.section(name)
				.ok_or_else(|| anyhow::anyhow!("Section not found: {}", name))?;
			toml::to_string(section)
		}
		None => toml::to_string(&doc),
	}
	.context("Failed to render document as TOML")?;

	print!("{}", rendered);
	Ok(ExitCode::SUCCESS)
}
