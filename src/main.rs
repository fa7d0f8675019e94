use clap::{Parser, Subcommand};
use rok_lib::core::feed::FeedClient;
use rok_lib::core::storage::cache::CacheStore;
use rok_lib::{describe_job, init_tracing, list_jobs, Config};

#[derive(Parser, Debug)]
#[command(name = "rok")]
#[command(about = "Browse remote dev jobs from the command line")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the feed, print one line per job and refresh the cache
    List,
    /// Print the cached description of one job
    Description {
        /// A guid, or a whole line printed by `list`
        token: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = Config::from_env()?;
    let cache = CacheStore::new(&config.cache_path);
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::List => {
            let feed = FeedClient::new(config.feed_url);
            list_jobs(&feed, &cache, &mut out).await?;
        }
        Command::Description { token } => {
            describe_job(&cache, &token, &mut out)?;
        }
    }
    Ok(())
}
