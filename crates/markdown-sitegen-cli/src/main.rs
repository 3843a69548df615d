use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{
    MarkdownOptions, copy_static, generate_pages_recursive, io::read_file, markdown_to_html_with,
};

#[derive(Parser)]
#[command(
    name = "markdown-sitegen",
    version,
    about = "Static site generator for markdown pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and render every page into the public directory
    Build(BuildArgs),

    /// Print one markdown file as HTML
    Render(RenderArgs),

    /// Write a site.toml with default settings
    Init(InitArgs),
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Site config file; defaults are used when it doesn't exist
    #[arg(short, long, default_value = SiteConfig::DEFAULT_FILE)]
    config: PathBuf,

    /// Directory of assets copied verbatim
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Directory of markdown pages
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory (deleted and recreated)
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// Escape HTML-special characters in page text
    #[arg(long)]
    escape_html: bool,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Markdown file to convert
    file: PathBuf,

    /// Escape HTML-special characters in the text
    #[arg(long)]
    escape_html: bool,
}

#[derive(clap::Args)]
struct InitArgs {
    /// Where to write the config
    #[arg(short, long, default_value = SiteConfig::DEFAULT_FILE)]
    config: PathBuf,

    /// Overwrite an existing config
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => build(args),
        Command::Render(args) => render(args),
        Command::Init(args) => init(args),
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let config = SiteConfig {
        static_dir: args.static_dir.unwrap_or(config.static_dir),
        content_dir: args.content_dir.unwrap_or(config.content_dir),
        template_path: args.template.unwrap_or(config.template_path),
        public_dir: args.public_dir.unwrap_or(config.public_dir),
        escape_html: args.escape_html || config.escape_html,
    };
    let options = MarkdownOptions {
        escape_html: config.escape_html,
    };

    copy_static(&config.static_dir, &config.public_dir).with_context(|| {
        format!(
            "Failed to copy static files from '{}' to '{}'",
            config.static_dir.display(),
            config.public_dir.display()
        )
    })?;

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
        &options,
    )
    .with_context(|| {
        format!(
            "Failed to generate pages from '{}'",
            config.content_dir.display()
        )
    })?;

    log::info!(
        "Built {} page(s) into {}",
        pages.len(),
        config.public_dir.display()
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<SiteConfig> {
    let loaded = SiteConfig::load_from_path(path)
        .with_context(|| format!("Failed to load config file '{}'", path.display()))?;

    match loaded {
        Some(config) => {
            log::info!("Using config file {}", path.display());
            Ok(config)
        }
        None => {
            log::info!("No config file at {}, using defaults", path.display());
            Ok(SiteConfig::default())
        }
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let markdown = read_file(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file.display()))?;
    let options = MarkdownOptions {
        escape_html: args.escape_html,
    };
    let html = markdown_to_html_with(&markdown, &options)
        .with_context(|| format!("Failed to convert '{}'", args.file.display()))?;

    println!("{html}");
    Ok(())
}

fn init(args: InitArgs) -> Result<()> {
    if args.config.exists() && !args.force {
        bail!(
            "Config file '{}' already exists (use --force to overwrite)",
            args.config.display()
        );
    }

    SiteConfig::default()
        .save_to_path(&args.config)
        .with_context(|| format!("Failed to write config file '{}'", args.config.display()))?;

    log::info!("Wrote default config to {}", args.config.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_flags_parse() {
        let cli = Cli::try_parse_from([
            "markdown-sitegen",
            "build",
            "--content-dir",
            "pages",
            "--escape-html",
        ])
        .unwrap();

        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.config, PathBuf::from("site.toml"));
                assert_eq!(args.content_dir, Some(PathBuf::from("pages")));
                assert_eq!(args.static_dir, None);
                assert!(args.escape_html);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn render_requires_file() {
        assert!(Cli::try_parse_from(["markdown-sitegen", "render"]).is_err());
    }

    #[test]
    fn build_uses_overrides_over_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("assets")).unwrap();
        std::fs::write(root.join("assets/site.css"), "p {}").unwrap();
        std::fs::create_dir_all(root.join("pages")).unwrap();
        std::fs::write(root.join("pages/index.md"), "# Home\n\nHi & bye").unwrap();
        std::fs::write(root.join("layout.html"), "<h1>{{ Title }}</h1>{{ Content }}").unwrap();

        build(BuildArgs {
            config: root.join("missing.toml"),
            static_dir: Some(root.join("assets")),
            content_dir: Some(root.join("pages")),
            template: Some(root.join("layout.html")),
            public_dir: Some(root.join("out")),
            escape_html: true,
        })
        .unwrap();

        assert!(root.join("out/site.css").is_file());
        assert_eq!(
            std::fs::read_to_string(root.join("out/index.html")).unwrap(),
            "<h1>Home</h1><div><h1>Home</h1><p>Hi &amp; bye</p></div>"
        );
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = temp_dir.path().join("site.toml");

        init(InitArgs {
            config: config.clone(),
            force: false,
        })
        .unwrap();
        assert_eq!(
            SiteConfig::load_from_path(&config).unwrap().unwrap().public_dir,
            temp_dir.path().join("public")
        );

        assert!(
            init(InitArgs {
                config: config.clone(),
                force: false,
            })
            .is_err()
        );
        assert!(init(InitArgs { config, force: true }).is_ok());
    }
}
