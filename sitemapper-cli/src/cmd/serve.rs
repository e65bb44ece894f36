use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use sitemapper_server::{ServerConfig, SitemapServer};

use crate::cmd::generate::add_generate_args;
use crate::config::SitemapperConfig;

pub fn make_subcommand() -> Command {
    add_generate_args(Command::new("serve"))
        .about("Serve sitemap.xml over HTTP")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to serve on [default: 3000]"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Host to bind to [default: 127.0.0.1]"),
        )
}

pub async fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = SitemapperConfig::load(args)?;

    // Register everything before the server shares the builder
    let builder = super::build_sitemap(&config).await?;

    let server_config = ServerConfig {
        host: config.build.host.clone(),
        port: config.build.port,
    };

    SitemapServer::new(server_config).run(builder).await
}
