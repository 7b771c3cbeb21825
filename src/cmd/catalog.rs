use crate::reports;
use clap::Args;
use roadwatch::catalog::{get_all_catalogs, SurfaceType};
use roadwatch::error::RwResult;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Only print this surface's catalog.
    #[arg(short, long)]
    pub surface: Option<SurfaceType>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct CatalogOut {
    surface: SurfaceType,
    distresses: &'static [roadwatch::catalog::DistressTemplate],
}

pub fn run(args: CatalogArgs) -> RwResult<()> {
    let catalogs: Vec<CatalogOut> = get_all_catalogs()
        .into_iter()
        .filter(|(surface, _)| args.surface.is_none() || args.surface == Some(*surface))
        .map(|(surface, distresses)| CatalogOut {
            surface,
            distresses,
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalogs)?);
        return Ok(());
    }

    for c in &catalogs {
        reports::print_catalog(c.surface, c.distresses);
    }
    Ok(())
}
