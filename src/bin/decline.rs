use clap::Parser;
use declension::catalog::{self, CatalogOptions};
use std::path::PathBuf;

/// Expands a catalog of nominative German nouns with definite article into all cases,
/// with definite and indefinite article, singular and plural.
#[derive(Parser)]
#[clap(
    version = "1.0",
    author = "Benjamin Minixhofer <bminixhofer@gmail.com>"
)]
struct Opts {
    /// The input catalog.
    #[clap(value_parser)]
    input: PathBuf,
    /// Where to write the declined catalog.
    #[clap(long, short, default_value = "out.po", value_parser)]
    output: PathBuf,
    /// A JSON file with catalog options.
    #[clap(long, short, value_parser)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), declension::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let options = match &opts.config {
        Some(path) => CatalogOptions::from_file(path)?,
        None => CatalogOptions::default(),
    };

    catalog::transform_file(&opts.input, &opts.output, &options)?;
    Ok(())
}
