//! Beat by Beat card generator - command line entry point

use beat_cards::{
    config::GeneratorConfig,
    html::{HtmlDocument, HtmlGenerator},
    layout::{PrintRun, SheetGrid, SpriteLayout},
    loader::CardSet,
    logger::{BuildLogger, VerbosityLevel},
    pdf::PdfConverter,
    sprite::SpriteGenerator,
    stats::PoolStats,
    tts::TtsGenerator,
    Result,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bbb")]
#[command(about = "Beat by Beat - card sheet and Tabletop Simulator generator", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory containing moves.csv, rhythm-cards.csv and judge-cards.csv
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Root output directory (html/, pdf/ and tts/ are created below it)
    #[arg(long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Verbosity level (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, short = 'v', global = true, default_value = "normal")]
    verbosity: VerbosityLevel,
}

#[derive(Args)]
struct GitHubArgs {
    /// GitHub user hosting the sprite sheets (default: from git remote)
    #[arg(long)]
    github_user: Option<String>,

    /// GitHub repository hosting the sprite sheets (default: from git remote)
    #[arg(long)]
    github_repo: Option<String>,

    /// Branch the sprite sheets are published on
    #[arg(long)]
    branch: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate printable HTML card sheets
    Html,

    /// Generate HTML sheets and convert them to PDF with headless Chromium
    Pdf {
        /// Browser executable (default: chromium, chromium-browser or google-chrome on PATH)
        #[arg(long, value_name = "PATH")]
        browser: Option<PathBuf>,
    },

    /// Generate Tabletop Simulator sprite sheets
    Sprites {
        /// TrueType font used for card text (default: a system sans-serif font)
        #[arg(long, value_name = "FILE")]
        font: Option<PathBuf>,
    },

    /// Generate the Tabletop Simulator save file
    TtsJson {
        #[command(flatten)]
        github: GitHubArgs,
    },

    /// Print the move type distribution of the pool deck
    Stats,

    /// Run every generator
    All {
        /// Skip PDF conversion
        #[arg(long)]
        skip_pdf: bool,

        /// Skip the TTS save file
        #[arg(long)]
        skip_tts_json: bool,

        #[command(flatten)]
        github: GitHubArgs,
    },
}

impl GlobalArgs {
    fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

impl GitHubArgs {
    fn apply(self, config: &mut GeneratorConfig) {
        if let Some(user) = self.github_user {
            config.tts.github_user = Some(user);
        }
        if let Some(repo) = self.github_repo {
            config.tts.github_repo = Some(repo);
        }
        if let Some(branch) = self.branch {
            config.tts.branch = branch;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = cli.global.load_config()?;
    let logger = BuildLogger::with_verbosity(cli.global.verbosity);
    let cards = CardSet::load(&config.data_dir)?;
    logger.verbose(&format!(
        "Loaded {} moves, {} rhythm cards, {} judges from {}",
        cards.moves.len(),
        cards.rhythms.len(),
        cards.judges.len(),
        config.data_dir.display()
    ));

    match cli.command {
        Commands::Html => {
            run_html(&config, &cards, &logger)?;
        }
        Commands::Pdf { browser } => {
            if browser.is_some() {
                config.pdf.browser = browser;
            }
            let docs = run_html(&config, &cards, &logger)?;
            run_pdf(&config, &docs, &logger).await?;
        }
        Commands::Sprites { font } => {
            if font.is_some() {
                config.sprite.font_path = font;
            }
            run_sprites(&config, &cards, &logger)?;
        }
        Commands::TtsJson { github } => {
            github.apply(&mut config);
            run_tts_json(&config, &cards, &logger).await?;
        }
        Commands::Stats => print!("{}", PoolStats::from_cards(&cards)),
        Commands::All {
            skip_pdf,
            skip_tts_json,
            github,
        } => {
            github.apply(&mut config);
            let docs = run_html(&config, &cards, &logger)?;
            if !skip_pdf {
                run_pdf(&config, &docs, &logger).await?;
            }
            run_sprites(&config, &cards, &logger)?;
            if !skip_tts_json {
                run_tts_json(&config, &cards, &logger).await?;
            }
        }
    }

    Ok(())
}

fn run_html(
    config: &GeneratorConfig,
    cards: &CardSet,
    logger: &BuildLogger,
) -> Result<Vec<HtmlDocument>> {
    let run = PrintRun::new(cards, config.starter_copies, config.stumble_count);
    let html_dir = config.html_dir();
    let docs = HtmlGenerator::new(&html_dir, logger).generate(&run)?;
    logger.minimal(&format!(
        "HTML: {} files written to {}",
        docs.len(),
        html_dir.display()
    ));
    Ok(docs)
}

async fn run_pdf(
    config: &GeneratorConfig,
    docs: &[HtmlDocument],
    logger: &BuildLogger,
) -> Result<()> {
    let pdf_dir = config.pdf_dir();
    let written = PdfConverter::new(&config.pdf, &pdf_dir, logger)?
        .convert(docs)
        .await?;
    logger.minimal(&format!(
        "PDF: {} files written to {}",
        written.len(),
        pdf_dir.display()
    ));
    Ok(())
}

fn sprite_layout<'a>(config: &GeneratorConfig, run: &PrintRun<'a>) -> SpriteLayout<'a> {
    let grid = SheetGrid::new(config.sprite.columns, config.sprite.rows);
    SpriteLayout::new(run, grid)
}

fn run_sprites(config: &GeneratorConfig, cards: &CardSet, logger: &BuildLogger) -> Result<()> {
    let run = PrintRun::new(cards, config.starter_copies, config.stumble_count);
    let layout = sprite_layout(config, &run);
    let tts_dir = config.tts_dir();
    let written = SpriteGenerator::new(&tts_dir, &config.sprite, logger)?.generate(&layout)?;
    logger.minimal(&format!(
        "Sprites: {} images written to {}",
        written.len(),
        tts_dir.display()
    ));
    Ok(())
}

async fn run_tts_json(
    config: &GeneratorConfig,
    cards: &CardSet,
    logger: &BuildLogger,
) -> Result<()> {
    let run = PrintRun::new(cards, config.starter_copies, config.stumble_count);
    let layout = sprite_layout(config, &run);
    let tts_dir = config.tts_dir();
    let path = TtsGenerator::new(&tts_dir, &config.tts, logger)
        .generate(&layout)
        .await?;
    logger.minimal(&format!("TTS save written to {}", path.display()));
    Ok(())
}
