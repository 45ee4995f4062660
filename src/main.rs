use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ikon::{
    Diagnostics, Library, LIBRARY_FILE, Options, SvgFile, Template, generate_with_options,
};

#[derive(Parser)]
#[command(name = "ikon")]
#[command(about = "Compiles SVG icons into code components", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one component module per icon
    Generate {
        /// Input .svg file or a directory of icons
        input: PathBuf,

        /// Output directory
        #[arg(short = 'd', long, default_value = "dist")]
        out_dir: PathBuf,

        /// Built-in template name or path to a custom template
        #[arg(short, long)]
        template: Option<String>,

        /// Include an index barrel module
        #[arg(short, long)]
        index: bool,

        /// Include a wrapper Icon component
        #[arg(short = 'c', long)]
        icon_component: bool,
    },

    /// Create an empty icon library file
    Init {
        /// Library name
        #[arg(long)]
        name: Option<String>,
    },

    /// Add an icon file (or every icon in a directory) to the library
    Add { path: PathBuf },

    /// List library icons
    Ls,

    /// Remove an icon from the library
    Remove { name: String },

    /// Export library icons as SVG files
    Export { dir: PathBuf },
}

fn main() -> Result<(), Box<dyn Error>> {
    match Cli::parse().command {
        Command::Generate {
            input,
            out_dir,
            template,
            index,
            icon_component,
        } => cmd_generate(&input, &out_dir, template.as_deref(), index, icon_component),
        Command::Init { name } => cmd_init(name),
        Command::Add { path } => cmd_add(&path),
        Command::Ls => cmd_ls(),
        Command::Remove { name } => cmd_remove(&name),
        Command::Export { dir } => cmd_export(&dir),
    }
}

fn cmd_generate(
    input: &Path,
    out_dir: &Path,
    template: Option<&str>,
    index: bool,
    icon_component: bool,
) -> Result<(), Box<dyn Error>> {
    let template = match template {
        None => Template::Default,
        Some(name) => match Template::builtin(name) {
            Some(template) => template,
            // not a registry name, treat it as a path to a custom template
            None => Template::Custom(fs::read_to_string(name)?),
        },
    };
    let options = Options {
        template,
        index,
        icon_component,
    };

    let files = collect_svg_files(input)?;
    let generated = generate_with_options(&files, &options)?;

    for warning in generated.diagnostics.warnings() {
        eprintln!("warning: {}", warning);
    }
    for (name, err) in &generated.failures {
        eprintln!("error: {}: {}", name, err);
    }

    fs::create_dir_all(out_dir)?;
    for component in &generated.components {
        let filename = out_dir.join(format!("{}.js", component.name));
        fs::write(filename, &component.content)?;
    }
    eprintln!(
        "{} components written to {}",
        generated.components.len(),
        out_dir.display()
    );

    if generated.failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} icon(s) failed", generated.failures.len()).into())
    }
}

fn cmd_init(name: Option<String>) -> Result<(), Box<dyn Error>> {
    let library = match name {
        Some(name) => Library::new(name),
        None => Library::default(),
    };
    library.save(Path::new(LIBRARY_FILE))?;
    eprintln!("Created {}", LIBRARY_FILE);
    Ok(())
}

fn cmd_add(path: &Path) -> Result<(), Box<dyn Error>> {
    let mut library = load_library()?;
    let mut diag = Diagnostics::default();

    if path.is_file() {
        let name = file_stem(path);
        let svg = fs::read_to_string(path)?;
        if library.add(&name, &svg, &mut diag)? {
            println!("SVG added to library: {}", name);
        } else {
            println!("Icon already exists with the name '{}'", name);
        }
    } else {
        let mut added = 0;
        for file in svg_paths(path)? {
            let name = file_stem(&file);
            let svg = fs::read_to_string(&file)?;
            if library.add(&name, &svg, &mut diag)? {
                added += 1;
            }
        }
        println!("{} icons added", added);
    }

    for warning in diag.warnings() {
        eprintln!("warning: {}", warning);
    }
    library.save(Path::new(LIBRARY_FILE))?;
    Ok(())
}

fn cmd_ls() -> Result<(), Box<dyn Error>> {
    let library = load_library()?;
    println!("{} icons", library.icons.len());
    for icon in &library.icons {
        println!("{}", icon.name);
    }
    Ok(())
}

fn cmd_remove(name: &str) -> Result<(), Box<dyn Error>> {
    let mut library = load_library()?;
    if library.remove(name) {
        library.save(Path::new(LIBRARY_FILE))?;
        println!("Removed {} icon", name);
    } else {
        println!("No icon found with the name '{}'", name);
    }
    Ok(())
}

fn cmd_export(dir: &Path) -> Result<(), Box<dyn Error>> {
    let library = load_library()?;
    fs::create_dir_all(dir)?;
    for (name, svg) in library.export_all() {
        let base = format!("{}.svg", name);
        fs::write(dir.join(&base), svg)?;
        println!("Exported {}", base);
    }
    Ok(())
}

fn load_library() -> Result<Library, Box<dyn Error>> {
    let path = Path::new(LIBRARY_FILE);
    if !path.exists() {
        return Err(format!("No {} found. Run `ikon init` first.", LIBRARY_FILE).into());
    }
    Ok(Library::load(path)?)
}

/// Collect the input files: one file, or every .svg in a directory sorted
/// by name so the generated index order is deterministic.
fn collect_svg_files(input: &Path) -> Result<Vec<SvgFile>, Box<dyn Error>> {
    let paths = if input.is_file() {
        vec![input.to_path_buf()]
    } else {
        svg_paths(input)?
    };

    let mut files = Vec::new();
    for path in paths {
        files.push(SvgFile {
            name: pascal_case(&file_stem(&path)),
            content: fs::read_to_string(&path)?,
        });
    }
    Ok(files)
}

fn svg_paths(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "svg"))
        .collect();
    paths.sort();
    Ok(paths)
}

fn file_stem(path: &Path) -> String {
    path.file_stem().unwrap_or_default().to_string_lossy().into_owned()
}

/// PascalCase a file stem: alphabetic runs only, each capitalized.
fn pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("arrow-left"), "ArrowLeft");
        assert_eq!(pascal_case("menu"), "Menu");
        assert_eq!(pascal_case("chevron_down_24"), "ChevronDown");
        assert_eq!(pascal_case("HOME"), "Home");
    }
}
