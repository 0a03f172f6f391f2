use std::fs::File;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, WriteLogger};

use fmdb::core::config::{self, CliOverrides, FmdbConfig, ResolvedConfig};
use fmdb::core::controller::{DetailController, ListController};
use fmdb::core::fetch_state::ScreenView;
use fmdb::core::strings::{RELEASE_DATE_LABEL, RUNTIME_LABEL, SYNOPSIS_HEADING, VOTES};
use fmdb::core::view::{DetailLayout, MovieCard};
use fmdb::tmdb::PosterSize;
use fmdb::tui;

#[derive(Parser)]
#[command(name = "fmdb", about = "Popular movies from TMDB, in the terminal")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Locale sent to the API (e.g. pt-BR, en-US)
    #[arg(short, long)]
    language: Option<String>,

    /// Poster size used in image URLs
    #[arg(long, value_enum)]
    poster_size: Option<PosterSize>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the popular movies and exit
    Popular,
    /// Print one movie's details and exit
    Movie {
        /// TMDB movie id
        id: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (FmdbConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        language: args.language.as_deref(),
        poster_size: args.poster_size,
    };
    let config = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to fmdb.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("fmdb.log") {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
    if let Some(e) = config_error {
        log::warn!("Config error, using defaults: {}", e);
        eprintln!("warning: {e}; using default settings");
    }

    log::info!(
        "FMDB starting up (language={}, poster_size={})",
        config.language,
        config.poster_size.token()
    );

    match args.command {
        None => match tui::run(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("terminal error: {e}");
                ExitCode::FAILURE
            }
        },
        Some(Command::Popular) => print_popular(&config).await,
        Some(Command::Movie { id }) => print_movie(&config, id).await,
    }
}

async fn print_popular(config: &ResolvedConfig) -> ExitCode {
    let source = tui::build_source(config);
    let mut list = ListController::new();
    list.load(source.as_ref()).await;

    match list.view() {
        ScreenView::Content(movies) => {
            for movie in movies {
                let card = MovieCard::from_summary(movie, config.poster_size.token());
                println!(
                    "{:>8}  {:<5} ★ {:<4} {}",
                    card.id, card.year, card.rating, card.title
                );
            }
            ExitCode::SUCCESS
        }
        ScreenView::Failed { message } => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        ScreenView::Spinner => ExitCode::FAILURE,
    }
}

async fn print_movie(config: &ResolvedConfig, id: u64) -> ExitCode {
    let source = tui::build_source(config);
    let mut detail = DetailController::new(id);
    detail.load(source.as_ref()).await;

    match detail.view() {
        ScreenView::Content(movie) => {
            let layout = DetailLayout::from_detail(movie, config.poster_size.token());
            println!("{}", layout.title);
            if let Some(tagline) = &layout.tagline {
                println!("{tagline}");
            }
            println!();
            println!("{RELEASE_DATE_LABEL}: {}", layout.release_date);
            println!("★ {} ({} {VOTES})", layout.rating, layout.vote_count);
            if let Some(runtime) = &layout.runtime {
                println!("{RUNTIME_LABEL}: {runtime}");
            }
            if !layout.genres.is_empty() {
                println!("{}", layout.genres.join(", "));
            }
            println!();
            println!("{SYNOPSIS_HEADING}");
            println!("{}", layout.overview);
            println!();
            println!("Poster: {}", layout.poster_url);
            println!("Backdrop: {}", layout.backdrop_url);
            ExitCode::SUCCESS
        }
        ScreenView::Failed { message } => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        ScreenView::Spinner => ExitCode::FAILURE,
    }
}
