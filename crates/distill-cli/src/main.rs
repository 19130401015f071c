use clap::{Args, Parser, Subcommand};
use distill_extract::{ExtractOptions, Extractor};
use distill_model::ExtractionResult;
use distill_store::{FileKey, Store};
use serde_json::Value;
use std::fmt::Display;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FIGMA_DISTILL_LOG";

#[derive(Parser)]
#[command(name = "figma-distill")]
#[command(about = "Distill Figma file JSON into a compact, LLM-ready design tree")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a file and print the compact JSON
    Extract {
        /// Figma file JSON, or - for stdin
        input: String,

        /// Print the full result, pretty-printed, without compaction
        #[arg(long)]
        pretty: bool,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print node counts for a file
    Summary {
        /// Figma file JSON, or - for stdin
        input: String,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the HTML-generation prompt for a file
    Prompt {
        /// Figma file JSON, or - for stdin
        input: String,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the file key of a Figma URL
    Key {
        /// Share URL or bare key
        url: String,
    },

    /// Save the raw and extracted JSON of a file under a store root
    Store {
        /// Figma file JSON, or - for stdin
        input: String,

        /// Share URL or bare key naming the stored files
        #[arg(long)]
        key: String,

        /// Store root directory
        #[arg(long, default_value = "output")]
        root: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Args, Debug)]
struct OptionArgs {
    /// Deepest tree level to emit (pages are level 0)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Number of leading pages to extract
    #[arg(long)]
    max_pages: Option<usize>,

    /// Also skip nodes of this type (repeatable)
    #[arg(long = "skip", value_name = "TYPE")]
    skip: Vec<String>,

    /// Keep nodes of this type even if skipped by default (repeatable)
    #[arg(long = "keep", value_name = "TYPE")]
    keep: Vec<String>,

    /// Extraction options as a JSON object, applied before the flags above
    #[arg(long = "options", value_name = "JSON")]
    json: Option<String>,
}

impl OptionArgs {
    fn resolve(&self) -> Result<ExtractOptions, serde_json::Error> {
        let mut options = match &self.json {
            Some(json) => serde_json::from_str(json)?,
            None => ExtractOptions::default(),
        };
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(max_pages) = self.max_pages {
            options.max_pages = max_pages;
        }
        for node_type in &self.skip {
            options.skip = options.skip.with_type(node_type.as_str());
        }
        for node_type in &self.keep {
            options.skip = options.skip.without_type(node_type);
        }
        Ok(options)
    }

    fn extractor(&self) -> Extractor {
        match self.resolve() {
            Ok(options) => Extractor::new(options),
            Err(e) => fail(format!("Invalid --options: {e}")),
        }
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            input,
            pretty,
            output,
            options,
        } => cmd_extract(&input, pretty, output.as_deref(), &options),
        Command::Summary { input, options } => cmd_summary(&input, &options),
        Command::Prompt { input, options } => cmd_prompt(&input, &options),
        Command::Key { url } => cmd_key(&url),
        Command::Store {
            input,
            key,
            root,
            options,
        } => cmd_store(&input, &key, root, &options),
    }
}

/// Log to stderr, filtered by `FIGMA_DISTILL_LOG`, then `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            fail(format!("reading stdin: {e}"));
        }
        return source;
    }

    let p = Path::new(path);
    if !p.exists() {
        fail(format!("file not found: {path}"));
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => fail(format!("reading {path}: {e}")),
    }
}

fn read_file_json(path: &str) -> Value {
    match serde_json::from_str(&read_source(path)) {
        Ok(value) => value,
        Err(e) => fail(format!("invalid JSON in {path}: {e}")),
    }
}

fn extract(path: &str, options: &OptionArgs) -> (Value, ExtractionResult) {
    let raw = read_file_json(path);
    let result = options.extractor().extract_essential_data(&raw);
    if result.pages.is_empty() {
        warn!(input = path, "no pages extracted; the file has no usable content");
    }
    (raw, result)
}

fn compact(result: &ExtractionResult) -> String {
    match distill_extract::to_compact_json(result) {
        Ok(json) => json,
        Err(e) => fail(e),
    }
}

fn cmd_extract(path: &str, pretty: bool, output: Option<&Path>, options: &OptionArgs) {
    let (_, result) = extract(path, options);

    let text = if pretty {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(e) => fail(format!("serializing result: {e}")),
        }
    } else {
        compact(&result)
    };

    match output {
        Some(out) => {
            if let Err(e) = std::fs::write(out, format!("{text}\n")) {
                fail(format!("writing {}: {e}", out.display()));
            }
            eprintln!("Wrote: {} ({})", out.display(), result.summary);
        }
        None => println!("{text}"),
    }
}

fn cmd_summary(path: &str, options: &OptionArgs) {
    let (_, result) = extract(path, options);
    println!("{}: {}", result.file_name, result.summary);
}

fn cmd_prompt(path: &str, options: &OptionArgs) {
    let (_, result) = extract(path, options);
    print!("{}", distill_extract::build_prompt(&compact(&result)));
}

fn cmd_key(url: &str) {
    match FileKey::parse(url) {
        Ok(key) => println!("{key}"),
        Err(e) => fail(e),
    }
}

fn cmd_store(path: &str, key: &str, root: PathBuf, options: &OptionArgs) {
    let key = FileKey::parse(key).unwrap_or_else(|e| fail(e));
    let store = Store::open(root).unwrap_or_else(|e| fail(e));
    let (raw, result) = extract(path, options);

    let complete = store.save_complete(&raw, &key).unwrap_or_else(|e| fail(e));
    let minimized = store
        .save_minimized(&result, &key)
        .unwrap_or_else(|e| fail(e));

    eprintln!("Saved: {}", complete.display());
    eprintln!("Saved: {} ({})", minimized.display(), result.summary);
}
