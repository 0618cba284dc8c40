//! registry-gen: CLI tool for compiling effective-TLD rule lists into registry tables.

use clap::{Parser, Subcommand};
use domain_registry::binary::{TableReader, TableWriter};
use domain_registry::builder::{codegen, test_entries, RuleList, TableBuilder};
use domain_registry::{DomainRegistry, LookupMode, RegistryTables};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "registry-gen")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Compile effective-TLD rule lists into registry tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a rule list into a binary table file
    Compile {
        /// Input rule list (publicsuffix.org .dat format)
        #[arg(short, long)]
        input: PathBuf,

        /// Output table file
        #[arg(short, long)]
        output: PathBuf,

        /// Do not add the parent rules deep rules need
        #[arg(long)]
        no_synthesize: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compile a rule list into the Rust source for the compiled-in tables
    Rust {
        /// Input rule list (publicsuffix.org .dat format)
        #[arg(short, long)]
        input: PathBuf,

        /// Output Rust file
        #[arg(short, long, default_value = "src/tables/builtin.rs")]
        output: PathBuf,

        /// Do not add the parent rules deep rules need
        #[arg(long)]
        no_synthesize: bool,
    },

    /// Print the registry length of each hostname
    Lookup {
        /// Hostnames to look up
        #[arg(required = true)]
        hostnames: Vec<String>,

        /// Binary table file to use instead of the compiled-in tables
        #[arg(short, long, conflicts_with = "rules")]
        tables: Option<PathBuf>,

        /// Rule list to compile and use instead of the compiled-in tables
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Treat an unknown rightmost label as the registry
        #[arg(short, long)]
        allow_unknown: bool,

        /// Print one JSON object per hostname
        #[arg(long)]
        json: bool,
    },

    /// Compile a rule list and check a lookup for every rule
    Check {
        /// Input rule list (publicsuffix.org .dat format)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Serialize)]
struct LookupResult<'a> {
    hostname: &'a str,
    registry_length: usize,
    registry: &'a str,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            input,
            output,
            no_synthesize,
            verbose,
        } => compile_file(&input, &output, !no_synthesize, verbose),
        Commands::Rust {
            input,
            output,
            no_synthesize,
        } => generate_rust(&input, &output, !no_synthesize),
        Commands::Lookup {
            hostnames,
            tables,
            rules,
            allow_unknown,
            json,
        } => lookup(&hostnames, tables.as_deref(), rules.as_deref(), allow_unknown, json),
        Commands::Check { input, verbose } => check_rules(&input, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_rules(input: &Path, synthesize: bool) -> Result<RuleList, Box<dyn std::error::Error>> {
    let file = fs::File::open(input)?;
    let mut rules = RuleList::from_reader(file)?;
    if synthesize {
        let added = rules.synthesize_wildcard_parents();
        if added > 0 {
            log::info!("Synthesized {} parent rules", added);
        }
    }
    Ok(rules)
}

fn build(input: &Path, synthesize: bool) -> Result<(RuleList, RegistryTables), Box<dyn std::error::Error>> {
    let rules = read_rules(input, synthesize)?;
    let tables = TableBuilder::new().build(&rules)?;
    Ok((rules, tables))
}

fn compile_file(
    input: &Path,
    output: &Path,
    synthesize: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        println!("Reading input file: {:?}", input);
    }

    let (rules, tables) = build(input, synthesize)?;

    if verbose {
        println!(
            "Compiled {} rules: {} string bytes, {} nodes, {} leaves",
            rules.len(),
            tables.strings().len(),
            tables.nodes().len(),
            tables.leaves().len()
        );
    }

    let mut writer = TableWriter::new();
    let data = writer.write(&tables)?;

    if verbose {
        println!("Writing output file: {:?} ({} bytes)", output, data.len());
    }

    let mut file = fs::File::create(output)?;
    file.write_all(&data)?;

    println!("Successfully compiled {:?} -> {:?}", input, output);
    Ok(())
}

fn generate_rust(input: &Path, output: &Path, synthesize: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (rules, tables) = build(input, synthesize)?;
    fs::write(output, codegen::rust_source(&tables))?;
    println!("Generated {:?} from {} rules", output, rules.len());
    Ok(())
}

fn lookup(
    hostnames: &[String],
    tables: Option<&Path>,
    rules: Option<&Path>,
    allow_unknown: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = match (tables, rules) {
        (Some(path), _) => TableReader::open(path)?.into_registry(),
        (None, Some(path)) => DomainRegistry::new(build(path, true)?.1),
        (None, None) => DomainRegistry::builtin()?,
    };
    let mode = if allow_unknown {
        LookupMode::AllowUnknown
    } else {
        LookupMode::KnownOnly
    };

    for hostname in hostnames {
        let len = registry.lookup(hostname, mode)?;
        let result = LookupResult {
            hostname,
            registry_length: len,
            registry: &hostname[hostname.len() - len..],
        };
        if json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            println!("{}\t{}\t{}", result.hostname, result.registry_length, result.registry);
        }
    }
    Ok(())
}

fn check_rules(input: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (rules, tables) = build(input, true)?;
    let registry = DomainRegistry::new(tables);
    let entries = test_entries(&rules);

    let mut failures = 0;
    for entry in &entries {
        let actual = registry.registry_length(&entry.hostname);
        if actual != entry.registry_len {
            failures += 1;
            eprintln!(
                "FAIL {}: expected {}, got {}",
                entry.hostname, entry.registry_len, actual
            );
        } else if verbose {
            println!("ok   {} -> {}", entry.hostname, entry.registry());
        }
    }

    println!("Checked {} entries from {} rules", entries.len(), rules.len());
    if failures > 0 {
        return Err(format!("{} entries failed", failures).into());
    }
    Ok(())
}
