use crate::reports;
use clap::Args;
use roadwatch::classify::ConditionBand;
use roadwatch::config::Config;
use roadwatch::error::RwResult;
use roadwatch::roads::{load_roads_from_file, RoadQuery, SortKey};

#[derive(Args, Debug, Clone)]
pub struct RoadsArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON array of road records.
    pub file: String,

    /// Case-insensitive match on id, name or location.
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub band: Option<ConditionBand>,

    /// `name` or `vci`.
    #[arg(long, default_value = "name")]
    pub sort: SortKey,

    #[arg(long, default_value_t = false)]
    pub descending: bool,

    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

pub fn run(args: RoadsArgs, config: Config) -> RwResult<()> {
    let roads = load_roads_from_file(&args.file)?;

    let query = RoadQuery {
        search: args.search,
        band: args.band,
        sort: args.sort,
        descending: args.descending,
        page: args.page,
        page_size: config.display.page_size,
    };

    let page = query.apply(&roads);
    reports::print_roads_page(&page);
    Ok(())
}
