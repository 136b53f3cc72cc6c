use anyhow::Context;
use capif_profile_view::{Result, input, logging, render};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "capif-profile-view")]
#[command(about = "Render published CAPIF service APIs as an HTML table", long_about = None)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON profile document (service API list or AEF profile list).
    Report {
        #[arg(long)]
        input: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Write only the table rows, for embedding in an existing page.
        #[arg(long)]
        fragment: bool,

        #[arg(long, default_value = "CAPIF API Profiles")]
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd {
        Commands::Report {
            input,
            out,
            fragment,
            title,
        } => {
            let doc = input::load_document(&input)?;

            let html = if fragment {
                render::render_rows(&doc)
            } else {
                render::render_page(&doc, &render::PageOptions { title })
            };

            std::fs::write(&out, html).with_context(|| format!("write report {}", out))?;
            info!("wrote {}", out);
        }
    }

    Ok(())
}
