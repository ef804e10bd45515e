mod scene;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdfdraw::{Document, DrawingHelper, Page};
use scene::Scene;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pdfdraw",
    about = "Draw vector shapes into PDF files",
    version,
    author
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a demo PDF with a few shapes
    Demo {
        /// Output file path
        #[arg(short, long, default_value = "demo.pdf")]
        output: PathBuf,
    },

    /// Render a JSON scene file into a PDF
    Render {
        /// Scene file
        scene: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "out.pdf")]
        output: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pdfdraw=debug,pdfdraw_cli=debug"
    } else {
        "pdfdraw=info,pdfdraw_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { output } => {
            let mut doc = demo_document();
            save(&mut doc, &output)?;
            println!("Demo PDF created successfully!");
        }

        Commands::Render { scene, output } => {
            let scene = Scene::from_path(&scene)?;
            let mut doc = scene.render();
            save(&mut doc, &output)?;
            println!("PDF rendered successfully!");
        }
    }

    Ok(())
}

fn demo_document() -> Document {
    let mut doc = Document::new();
    doc.set_title("pdfdraw Demo");
    doc.set_author("pdfdraw CLI");
    doc.add_page(Page::a4());

    if let Some(mut helper) = DrawingHelper::from_handle(Some(&mut doc)) {
        helper.set_fill_color(0, 102, 204);
        helper.draw_rect(50.0, 650.0, 200.0, 100.0, "F");

        helper.set_draw_color(200, 0, 0);
        helper.draw_line(50.0, 600.0, 545.0, 600.0);

        helper.set_fill_color(255, 204, 0);
        helper.draw_circle(400.0, 700.0, 50.0, "DF");

        helper.set_draw_color(0, 128, 0);
        helper.draw_polygon(&[[100.0, 300.0], [300.0, 300.0], [200.0, 480.0]], "D");
    }

    doc
}

fn save(doc: &mut Document, output: &Path) -> Result<()> {
    doc.save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        path = %output.display(),
        pages = doc.page_count(),
        "PDF saved"
    );
    Ok(())
}
