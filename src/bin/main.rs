use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hierc::decl::{DeclarationKind, TypeDeclaration, TypeId};
use hierc::{resolve_decls, Resolution};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "hierc")]
#[command(about = "Type hierarchy resolver for Java-style declarations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every class satisfies its inherited obligations
    Check {
        /// Input file, or directory scanned for .java files
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Fail on any signature conflict
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the resolved obligation set of each type
    Obligations {
        /// Input file, or directory scanned for .java files
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Only print the named type
        #[arg(long = "type", value_name = "NAME")]
        type_name: Option<String>,
    },

    /// Print signature conflicts per type
    Conflicts {
        /// Input file, or directory scanned for .java files
        #[arg(value_name = "PATH")]
        input: PathBuf,
    },

    /// Parse declarations and print them
    Parse {
        /// Input file, or directory scanned for .java files
        #[arg(value_name = "PATH")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { input, strict } => check(input, *strict),
        Commands::Obligations { input, type_name } => obligations(input, type_name.as_deref()),
        Commands::Conflicts { input } => conflicts(input),
        Commands::Parse { input } => parse(input),
    }
}

/// Gather declarations from a single file or every .java file under a
/// directory; all files contribute to one closed-world declaration set.
fn load_decls(input: &Path) -> Result<Vec<TypeDeclaration>> {
    let mut decls = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension().map(|e| e == "java").unwrap_or(false)
            {
                decls.extend(parse_file(entry.path())?);
            }
        }
        if decls.is_empty() {
            bail!("no .java files found under {}", input.display());
        }
    } else {
        decls = parse_file(input)?;
    }
    Ok(decls)
}

fn parse_file(path: &Path) -> Result<Vec<TypeDeclaration>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    hierc::parse_decls(&source).with_context(|| format!("failed to parse {}", path.display()))
}

fn resolve_input(input: &Path) -> Result<Resolution> {
    let decls = load_decls(input)?;
    Ok(resolve_decls(decls)?)
}

fn check(input: &Path, strict: bool) -> Result<()> {
    let mut resolution = resolve_input(input)?;
    let types: Vec<(TypeId, DeclarationKind)> = resolution
        .store()
        .iter()
        .map(|d| (d.id.clone(), d.kind))
        .collect();

    let mut conflict_count = 0;
    let mut unmet = 0;
    for (id, kind) in types {
        for conflict in resolution.conflicts(&id)? {
            conflict_count += 1;
            println!("{}: {}", id, conflict);
        }
        if kind == DeclarationKind::Class {
            let report = resolution.check(&id)?;
            println!("{}", report);
            for obligation in &report.missing {
                unmet += 1;
                println!("  missing {}  [required by {}]", obligation.signature, join_ids(&obligation.sources));
            }
        }
    }

    if unmet > 0 {
        bail!("{} unmet obligation(s)", unmet);
    }
    if strict && conflict_count > 0 {
        bail!("{} signature conflict(s) in strict mode", conflict_count);
    }
    Ok(())
}

fn obligations(input: &Path, type_name: Option<&str>) -> Result<()> {
    let resolution = resolve_input(input)?;
    let ids: Vec<TypeId> = match type_name {
        Some(name) => vec![TypeId::new(name)],
        None => resolution.store().iter().map(|d| d.id.clone()).collect(),
    };

    for id in ids {
        let set = resolution.obligations_of(&id)?;
        println!("{} ({} obligation(s)):", id, set.len());
        for obligation in set {
            println!("  {}  [from {}]", obligation.signature, join_ids(&obligation.sources));
        }
    }
    Ok(())
}

fn conflicts(input: &Path) -> Result<()> {
    let resolution = resolve_input(input)?;
    let ids: Vec<TypeId> = resolution.store().iter().map(|d| d.id.clone()).collect();

    let mut total = 0;
    for id in ids {
        for conflict in resolution.conflicts(&id)? {
            total += 1;
            println!("{}: {}", id, conflict);
            for variant in &conflict.variants {
                println!("  {}  [from {}]", variant.signature, join_ids(&variant.sources));
            }
        }
    }
    println!("{} conflict(s)", total);
    Ok(())
}

fn parse(input: &Path) -> Result<()> {
    for decl in load_decls(input)? {
        println!("{}", decl);
        for signature in &decl.methods {
            println!("  {}", signature);
        }
    }
    Ok(())
}

fn join_ids(ids: &[TypeId]) -> String {
    ids.iter()
        .map(TypeId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
