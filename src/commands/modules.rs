//! Modules command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::ModulesArgs;
use crate::error::{Result, module};
use crate::modules::{Attribute, Module, ModulesPool, Structure};
use crate::ui::Reporter;

/// Run modules command
pub fn run(root: Option<PathBuf>, verbose: bool, args: &ModulesArgs) -> Result<()> {
    let reporter = Reporter::new(verbose);
    let package = super::open_package(root)?;

    let pool = if args.files.is_empty() {
        let directory = package.root().join(&args.dir);
        reporter.detail("Modules directory:", directory.display());
        let pool = ModulesPool::from_dir(&directory)?;
        if pool.is_empty() {
            println!("No modules found in {}", directory.display());
            return Ok(());
        }
        pool
    } else {
        let files: Vec<PathBuf> = args.files.iter().map(|f| package.root().join(f)).collect();
        let mut pool = ModulesPool::new();
        let created = pool.create(files)?;
        reporter.detail("Created module:", created);
        pool
    };

    match &args.name {
        Some(name) => {
            let found = pool
                .load(name)
                .ok_or_else(|| module::not_found(name, &pool.names()))?;
            display_module(found);
            if let Some(structure) = found.structure() {
                display_structure(structure, 1);
            }
        }
        None => {
            for found in pool.modules() {
                display_module(found);
            }
        }
    }

    reporter.success(&format!("Loaded {} modules", pool.len()));
    Ok(())
}

fn display_module(found: &Module) {
    println!("{}", Style::new().bold().yellow().apply_to(found.name()));
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Paths:"),
        found.paths_as_string()
    );
    let attributes = found.structure().map_or(0, Structure::attribute_count);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Attributes:"),
        attributes
    );
}

fn display_structure(structure: &Structure, depth: usize) {
    let indent = "  ".repeat(depth);
    for attribute in structure.attributes.values() {
        match attribute {
            Attribute::Struct(nested) => {
                println!("{indent}{} (struct)", Style::new().cyan().apply_to(&nested.name));
                display_structure(nested, depth + 1);
            }
            Attribute::Function(function) => {
                for overload in &function.overloads {
                    let params: Vec<String> =
                        overload.iter().map(|t| format!("{t:?}").to_lowercase()).collect();
                    println!("{indent}{}({})", function.name, params.join(", "));
                }
            }
            Attribute::Value(value) => {
                let kind = format!("{:?}", value.value_type).to_lowercase();
                match &value.documentation {
                    Some(doc) => println!(
                        "{indent}{}: {kind}  {}",
                        value.name,
                        Style::new().dim().apply_to(doc)
                    ),
                    None => println!("{indent}{}: {kind}", value.name),
                }
            }
        }
    }
}
