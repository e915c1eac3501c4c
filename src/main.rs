use clap::{Parser, Subcommand};
use pattern_pages::config::{self, SiteConfig};
use pattern_pages::content::{self, Content};
use pattern_pages::page::Landing;
use pattern_pages::render::{Format, PageRenderer};
use pattern_pages::shell::AppShell;
use pattern_pages::{generate, output};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pattern-pages")]
#[command(about = "Browse and publish software design pattern pages")]
#[command(long_about = "\
Browse and publish software design pattern pages

Each page explains one pattern: a title, a short summary, explanatory
paragraphs, and a verbatim code listing. A built-in catalog ships with the
binary; more pages can be added as TOML files in the content directory.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Copied as-is into the built site
  ├── 010-singleton.toml           # Page \"singleton\" (numbered = ordered)
  └── decorator.toml               # Unnumbered pages follow numbered ones

Unknown page ids never fail: 'show' falls back to the landing page.

Run 'pattern-pages gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered pages in navigation order
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render one page (or the landing page) to stdout
    Show {
        /// Page id; omit for the landing page
        id: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Write the static HTML site
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Validate config and every page without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Config, registry and renderer for one content directory.
struct Site {
    config: SiteConfig,
    content: Content,
    landing: Landing,
    renderer: PageRenderer,
}

fn load_site(source: &Path) -> Result<Site, Box<dyn std::error::Error>> {
    let config = config::load_config(source)?;
    let content = content::load_content(source, &config)?;
    Ok(Site {
        landing: config.landing(),
        renderer: PageRenderer::new(&config),
        config,
        content,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { json } => {
            let site = load_site(&cli.source)?;
            if json {
                let entries = output::list_entries(&site.content.registry);
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                output::print_list_output(&site.content.registry, &site.content.sources);
            }
        }
        Command::Show { id, format } => {
            let site = load_site(&cli.source)?;
            let shell = AppShell::new(&site.content.registry, &site.landing, &site.renderer);
            let view = shell.run(id.as_deref(), format);
            if let Some(requested) = view.unresolved() {
                eprintln!("{}", output::format_fallback_notice(requested));
            }
            print!("{}", view.into_output().body);
        }
        Command::Build { output: out } => {
            let site = load_site(&cli.source)?;
            println!("==> Building {} \u{2192} {}", cli.source.display(), out.display());
            let assets = config::assets_path(&cli.source, &site.config);
            let report = generate::generate(
                &site.content.registry,
                &site.landing,
                &site.renderer,
                &out,
                assets.as_deref(),
            )?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", out.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = load_site(&cli.source)?;
            output::print_list_output(&site.content.registry, &site.content.sources);
            let assets = config::assets_path(&cli.source, &site.config);
            output::print_config_output(&cli.source, assets.as_deref());
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
