// Thu Aug 27 2026 - Alex

use clap::Parser;
use colored::Colorize;
use register_layout_generator::{
    accessors::{AccessorOptions, Accessors},
    config::Config,
    diagram::{self, DiagramStyle},
    model::Field,
    resolve::resolve,
    schema::load_file,
    ui::banner::Banner,
    utils::logging,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Register layout diagram and accessor generator", long_about = None)]
struct Args {
    model: PathBuf,

    #[arg(short, long, default_value = "comment")]
    style: String,

    #[arg(long)]
    no_diagram: bool,

    #[arg(long)]
    no_accessors: bool,

    #[arg(long)]
    honor_access: bool,

    #[arg(long)]
    dump_model: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        logging::init_logger(args.verbose);
    }

    let style = match DiagramStyle::from_name(&args.style) {
        Some(s) => s,
        None => {
            eprintln!(
                "{} Unknown style {:?}, expected comment or markdown",
                "[!]".red(),
                args.style
            );
            std::process::exit(1);
        }
    };

    let mut config = Config::new().with_model_file(args.model).with_style(style);
    config.emit_diagram = !args.no_diagram;
    config.emit_accessors = !args.no_accessors;
    config.honor_access = args.honor_access;
    config.dump_model = args.dump_model;
    config.output_file = args.output;
    config.enable_verbose_output = args.verbose;

    if let Err(e) = config.validate() {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }

    if !args.no_banner {
        Banner::new("Register Layout Generator")
            .with_subtitle("Bit diagrams and C accessors from layout descriptions")
            .with_version(env!("CARGO_PKG_VERSION"))
            .print();
    }

    eprintln!(
        "{} Loading model: {}",
        "[*]".blue(),
        config.model_file.display()
    );

    let raw = match load_file(&config.model_file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} Failed to load model: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let model = match resolve(&raw) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{} Invalid layout: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "{} Model resolved: {} ({} bytes)",
        "[+]".green(),
        model.fqn(),
        model.size_bytes()
    );

    if let Some(path) = &config.dump_model {
        if let Err(e) = dump_model(&model, path) {
            eprintln!("{} Failed to dump model: {}", "[!]".red(), e);
            std::process::exit(1);
        }
        eprintln!("{} Resolved model saved to: {}", "[+]".green(), path.display());
    }

    let mut sink: Box<dyn Write> = match &config.output_file {
        Some(path) => match File::create(path) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!(
                    "{} Failed to create {}: {}",
                    "[!]".red(),
                    path.display(),
                    e
                );
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdout()),
    };

    if let Err(e) = emit(&mut sink, &model, &config) {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }

    if let Some(path) = &config.output_file {
        eprintln!("{} Output written to: {}", "[+]".green(), path.display());
    }
}

fn emit<W: Write>(out: &mut W, model: &Field, config: &Config) -> anyhow::Result<()> {
    if config.emit_diagram {
        let layout = diagram::layout(model)?;
        diagram::render(out, model, &layout, config.style)?;
    }
    if config.emit_accessors {
        let opts = AccessorOptions {
            honor_access: config.honor_access,
        };
        let accessors = Accessors::build(model, &opts)?;
        accessors.write_to(out)?;
    }
    Ok(())
}

fn dump_model(model: &Field, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(model)?;
    std::fs::write(path, json)?;
    Ok(())
}
