use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use noticeboard::{
    config::Settings,
    data_source::{self, DataSource, FileDataSource},
    domain::{AnnouncementFeed, FeedSection, FeedSelection, SortMode},
    error::AppError,
    render::{self, HtmlListRenderer, Renderer, TextListRenderer},
    ListController, ListViewModel,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SectionArg {
    All,
    Important,
    Upcoming,
    Milestones,
}

impl SectionArg {
    fn selection(self, guest: bool) -> FeedSelection {
        let selection = match self {
            SectionArg::All => FeedSelection::all(),
            SectionArg::Important => FeedSelection::section(FeedSection::Important),
            SectionArg::Upcoming => FeedSelection::section(FeedSection::Upcoming),
            SectionArg::Milestones => FeedSelection::section(FeedSection::Milestones),
        };
        if guest {
            selection.guests_only()
        } else {
            selection
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "noticeboard", about = "Search, sort and page through an announcements feed")]
struct Args {
    /// Feed URL or file path (overrides the configured source)
    #[arg(long)]
    source: Option<String>,

    #[arg(long, value_enum, default_value_t = SectionArg::All)]
    section: SectionArg,

    /// Only list items visible to guests
    #[arg(long)]
    guest: bool,

    #[arg(long)]
    search: Option<String>,

    /// default, nearest or farthest
    #[arg(long, default_value = "default")]
    sort: SortMode,

    #[arg(long, default_value_t = 1)]
    page: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the homepage (carousels and section previews) instead of a listing
    #[arg(long, conflicts_with = "archive_to")]
    homepage: bool,

    /// Move expired announcements from the source file into this archive file
    #[arg(long, value_name = "PATH")]
    archive_to: Option<PathBuf>,
}

async fn print_homepage(args: &Args, settings: &Settings) -> anyhow::Result<()> {
    let source = data_source::from_config(&settings.feed)?;
    let feed = source.load().await?;
    let html = render::homepage(&feed, &args.section.selection(args.guest), &settings.render)?;
    println!("{}", html);
    Ok(())
}

async fn archive_expired(archive_path: PathBuf, settings: &Settings) -> anyhow::Result<()> {
    if settings.feed.source.starts_with("http://") || settings.feed.source.starts_with("https://") {
        anyhow::bail!("Archiving needs a feed file, not {}", settings.feed.source);
    }

    let current_source = FileDataSource::new(&settings.feed.source);
    let archive_source = FileDataSource::new(archive_path);

    let mut current = current_source.load().await?;
    let mut archive = match archive_source.load().await {
        Ok(feed) => feed,
        Err(AppError::Io(e)) => {
            tracing::warn!("Starting a new archive at {}: {}", archive_source.path().display(), e);
            AnnouncementFeed::default()
        }
        Err(e) => return Err(e.into()),
    };

    let today = chrono::Local::now().date_naive();
    let moved = current.archive_expired(&mut archive, today);
    if moved == 0 {
        tracing::info!("Nothing to archive in {}", current_source.path().display());
        return Ok(());
    }

    archive_source.store(&archive).await?;
    current_source.store(&current).await?;
    Ok(())
}

async fn run<R: Renderer>(
    renderer: R,
    args: &Args,
    settings: &Settings,
) -> anyhow::Result<R> {
    let source = data_source::from_config(&settings.feed)?;
    let selection = args.section.selection(args.guest);

    let view_model = ListViewModel::with_page_size(settings.listing.page_size);
    let mut controller = ListController::new(view_model, renderer)
        .with_max_visible_buttons(settings.listing.max_visible_buttons);

    controller.load(source.as_ref(), &selection).await?;

    // Search resets the sort, so apply it first.
    if let Some(query) = args.search.as_deref() {
        controller.set_search_query(query);
    }
    if args.sort != SortMode::Default {
        controller.set_sort_mode(args.sort);
    }
    if args.page != 1 {
        controller.go_to_page(args.page);
    }

    Ok(controller.into_renderer())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noticeboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Load configuration
    let mut settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    if let Some(source) = args.source.clone() {
        settings.feed.source = source;
    }

    tracing::info!("Reading announcements from {}", settings.feed.source);

    if let Some(archive_path) = args.archive_to.clone() {
        return archive_expired(archive_path, &settings).await;
    }
    if args.homepage {
        return print_homepage(&args, &settings).await;
    }

    match args.format {
        OutputFormat::Html => {
            let renderer = run(HtmlListRenderer::new(settings.render.clone()), &args, &settings).await?;
            println!("{}", renderer.output());
        }
        OutputFormat::Text => {
            let renderer = run(
                TextListRenderer::new(settings.render.description_preview_chars),
                &args,
                &settings,
            )
            .await?;
            print!("{}", renderer.output());
        }
    }

    Ok(())
}
