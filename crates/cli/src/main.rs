mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jcb-site")]
#[command(version, about = "Static site generator for the JCB booking website", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create site.toml and public/ in a directory
    Init {
        /// Path to the site directory
        path: PathBuf,
    },

    /// Validate catalog, business profile and static assets
    Validate {
        /// Path to the site directory
        path: PathBuf,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to the site directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Render every page, the sitemap and robots.txt
    Build {
        /// Path to the site directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List every route the build will render
    Routes {
        /// Path to the site directory
        path: PathBuf,

        /// Print sitemap entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Init { path } => commands::init::run(path).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Routes { path, json } => commands::routes::run(path, json).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "jcb-site", &mut io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_with_verbose() {
        let cli = Cli::try_parse_from(["jcb-site", "build", "site", "-o", "dist", "--verbose"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Build { path, output } => {
                assert_eq!(path, PathBuf::from("site"));
                assert_eq!(output, PathBuf::from("dist"));
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_preview_default_port() {
        let cli = Cli::try_parse_from(["jcb-site", "preview", "."]).unwrap();
        match cli.command {
            Command::Preview { port, .. } => assert_eq!(port, 8080),
            _ => panic!("expected preview"),
        }
    }
}
