use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

use crate::config::SitemapperConfig;

pub fn add_generate_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .value_name("FILE")
                .help("Route manifest written by the framework's build step [default: ./manifest.json]"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Absolute base URL of the site, without a trailing slash"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file [default: ./sitemapper.toml]"),
        )
}

pub fn make_subcommand() -> Command {
    add_generate_args(Command::new("generate"))
        .about("Generate sitemap.xml from a route manifest")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file, or - for stdout [default: ./sitemap.xml]"),
        )
}

pub async fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = SitemapperConfig::load(args)?;

    let builder = super::build_sitemap(&config).await?;
    let xml = builder.generate();

    if config.build.output == "-" {
        print!("{xml}");
    } else {
        std::fs::write(&config.build.output, &xml)
            .with_context(|| format!("Failed to write {}", config.build.output))?;
        println!("Sitemap written to {}", config.build.output);
    }

    Ok(())
}
