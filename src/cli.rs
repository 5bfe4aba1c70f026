// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};

use crate::{
    config::options::{ AnalysisOptions, AppOptions, OutputFormat, PageKind, resolve_data_path },
    file,
    filter::{ Dimension, FilterSpec },
    metrics::HomeAdvantageMode,
    pages::router,
    store::RecordStore,
};

/// Render one dashboard page from the command line.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Data file (CSV, or TSV by extension). Defaults to $IPL_DATA, then ipl_data.csv
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = PageKind::Overview)]
    pub page: PageKind,

    /// Repeat to select several; none means all
    #[arg(long = "season", value_name = "SEASON")]
    pub seasons: Vec<String>,

    /// Matches either side (home or away)
    #[arg(long = "team", value_name = "TEAM")]
    pub teams: Vec<String>,

    #[arg(long = "venue", value_name = "VENUE")]
    pub venues: Vec<String>,

    #[arg(long = "role", value_name = "ROLE")]
    pub roles: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write every table of the page as CSV into DIR
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = HomeAdvantageMode::FirstFixture)]
    pub home_advantage: HomeAdvantageMode,

    #[arg(long)]
    pub list_pages: bool,

    /// Also log to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::new()
            .with(Dimension::Season, self.seasons.iter().cloned())
            .with(Dimension::Team, self.teams.iter().cloned())
            .with(Dimension::Venue, self.venues.iter().cloned())
            .with(Dimension::Role, self.roles.iter().cloned())
    }

    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions {
            data_path: resolve_data_path(self.data.as_deref()),
            page: self.page,
            analysis: AnalysisOptions { home_advantage: self.home_advantage },
            format: self.format,
            ..AppOptions::default()
        };
        if let Some(dir) = &self.export {
            opts.export_dir = dir.clone();
        }
        opts
    }
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::init(args.verbose);

    if args.list_pages {
        for p in router::all_pages() {
            println!("{}\t{}", p.kind().slug(), p.title());
        }
        return Ok(());
    }

    let opts = args.options();
    let loaded = RecordStore::load_or_empty(&opts.data_path);
    if let Some(msg) = &loaded.error {
        warn!("{msg}");
        eprintln!("{msg}");
    }

    let page = router::page_for(opts.page);
    let spec = args.filter_spec();
    info!("CLI: render {:?} with {:?}", opts.page, spec);
    let out = page.render_with(&loaded.store, &spec, &opts.analysis);

    match opts.format {
        OutputFormat::Text => print!("{}", out.to_text()),
        OutputFormat::Json => println!("{}", out.to_json().wrap_err("serializing page output")?),
    }

    if args.export.is_some() {
        let written = file::export_tables(&opts.export_dir, &out)
            .wrap_err_with(|| format!("exporting to {}", opts.export_dir.display()))?;
        for p in written {
            eprintln!("Wrote {}", p.display());
        }
    }
    Ok(())
}
