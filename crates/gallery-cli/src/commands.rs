use anyhow::{Result, anyhow};
use tracing::{info, info_span};

use gallery_ingest::{LoadState, Loader, source_for};
use gallery_page::PageCursor;
use gallery_store::CollectionStore;

use gallery_cli::cli::{EditArgs, ListArgs, SourceArgs};
use gallery_cli::config::GalleryConfig;
use gallery_cli::render::print_page;
use gallery_cli::script::{StepReport, format_reports, read_script, replay};

/// Build the store and run the one-shot initial load.
fn load_gallery(config: &GalleryConfig) -> Result<CollectionStore> {
    let source = source_for(&config.source, config.request_timeout())?;
    let mut store = CollectionStore::new();
    let mut loader = Loader::new();
    match loader.load(source.as_ref(), &mut store) {
        LoadState::Loaded { count } => {
            info!(count, source = %config.source, "gallery ready");
            Ok(store)
        }
        state => Err(anyhow!(
            "{}",
            state.error().unwrap_or("load did not complete")
        )),
    }
}

pub fn run_list(args: &ListArgs, config: GalleryConfig) -> Result<()> {
    let config = config.with_overrides(&args.source)?;
    let store = load_gallery(&config)?;
    let mut cursor = PageCursor::new(config.page_size);
    cursor.jump(args.page, store.len());
    print_page(store.items(), &cursor);
    Ok(())
}

pub fn run_pages(args: &SourceArgs, config: GalleryConfig) -> Result<()> {
    let config = config.with_overrides(args)?;
    let store = load_gallery(&config)?;
    let cursor = PageCursor::new(config.page_size);
    println!("{}", cursor.page_count(store.len()));
    Ok(())
}

/// Returns the step reports so the caller can pick the exit code.
pub fn run_edit(args: &EditArgs, config: GalleryConfig) -> Result<Vec<StepReport>> {
    let config = config.with_overrides(&args.source)?;
    let steps = read_script(&args.script)?;
    let mut store = load_gallery(&config)?;

    let span = info_span!("edit", script = %args.script.display());
    let reports = span.in_scope(|| replay(&mut store, steps));

    println!("{}", format_reports(&reports));
    let mut cursor = PageCursor::new(config.page_size);
    cursor.jump(args.page, store.len());
    print_page(store.items(), &cursor);
    Ok(reports)
}
