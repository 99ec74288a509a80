//! Command-line interface for the lectex precompiler.
//!
//! Usage:
//!   lectex `<path>` --template `<file>` [--assets `<dir>`] [--config `<file>`]
//!
//! Reads a lecture source, runs the precompilation pipeline and writes the
//! result to stdout or `--output`. Diagnostics go to stderr, either as text
//! lines or as JSON with `--format json`.

use clap::{Arg, Command};
use lectex::config::Loader;
use lectex::lecture_info::LectureInfo;
use lectex::precompile::full_precompile;
use lectex::template::Template;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("lectex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Precompile a standalone LaTeX lecture into a book chapter")
        .arg(
            Arg::new("path")
                .help("Path to the lecture .tex file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .short('t')
                .help("LaTeX template containing the {{content}} placeholder")
                .required(true),
        )
        .arg(
            Arg::new("assets")
                .long("assets")
                .short('a')
                .help("Directory holding the lecture's figure assets"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Course configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the precompiled document here instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Diagnostic output format: text or json")
                .default_value("text"),
        )
        .get_matches();

    let path = PathBuf::from(matches.get_one::<String>("path").expect("path is required"));
    let latex = read_file(&path);

    let template_path = matches
        .get_one::<String>("template")
        .expect("template is required");
    let template = Template::new(read_file(template_path.as_ref())).unwrap_or_else(|e| {
        eprintln!("Invalid template {}: {}", template_path, e);
        std::process::exit(1);
    });

    let mut loader = Loader::new();
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let asset_paths = matches
        .get_one::<String>("assets")
        .map(|dir| collect_assets(dir))
        .unwrap_or_default();

    let lecture_info = LectureInfo::from_latex(&latex);

    let output = full_precompile(
        &latex,
        &path,
        &asset_paths,
        lecture_info.as_ref(),
        &template,
        &config,
    )
    .unwrap_or_else(|e| {
        eprintln!("Precompilation error: {}", e);
        std::process::exit(1);
    });

    let format = matches.get_one::<String>("format").expect("has a default");
    report_diagnostics(&output.diagnostics, format);

    match matches.get_one::<String>("output") {
        Some(out_path) => {
            std::fs::write(out_path, output.document.as_str()).unwrap_or_else(|e| {
                eprintln!("Cannot write {}: {}", out_path, e);
                std::process::exit(1);
            });
        }
        None => println!("{}", output.document),
    }
}

fn read_file(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path.display(), e);
        std::process::exit(1);
    })
}

/// List the files of the asset directory, sorted for deterministic output.
fn collect_assets(dir: &str) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Cannot list assets in {}: {}", dir, e);
            return Vec::new();
        }
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    paths
}

fn report_diagnostics(diagnostics: &lectex::diagnostics::Diagnostics, format: &str) {
    if format == "json" {
        match serde_json::to_string_pretty(diagnostics) {
            Ok(json) => eprintln!("{}", json),
            Err(e) => eprintln!("Error formatting diagnostics: {}", e),
        }
        return;
    }
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic);
    }
}
