use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("sitemapper")
        .about("Generate and serve sitemap.xml from a route manifest")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::generate::make_subcommand())
        .subcommand(cmd::serve::make_subcommand())
        .get_matches();

    match matches.subcommand() {
        Some(("generate", args)) => cmd::generate::execute(args).await,
        Some(("serve", args)) => cmd::serve::execute(args).await,
        _ => unreachable!(),
    }
}
