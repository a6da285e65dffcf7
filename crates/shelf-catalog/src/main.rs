use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use shelf_catalog::{load_log, replay, CatalogStore};
use shelf_store::{NotFoundPolicy, StoreConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let log_arg = || {
        Arg::new("log")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("JSON action log to replay")
    };
    let config_arg = || {
        Arg::new("config")
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .help("TOML store configuration")
    };
    let strict_arg = || {
        Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Reject update/remove of unknown ids")
    };

    let cli = Command::new("shelf-replay")
        .version(shelf_catalog::VERSION)
        .about("Replay storefront catalog actions against the client-side store")
        .subcommand_required(true)
        .subcommand(
            Command::new("replay")
                .about("Replay a log and print the resulting catalog")
                .arg(log_arg())
                .arg(config_arg())
                .arg(strict_arg())
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Indent JSON output"),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Replay a log and check every slice for rank drift")
                .arg(log_arg())
                .arg(config_arg())
                .arg(strict_arg()),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("replay", args)) => {
            let store = run(args)?;
            let view = store.view();
            let json = if args.get_flag("pretty") {
                serde_json::to_string_pretty(&view)?
            } else {
                serde_json::to_string(&view)?
            };
            println!("{json}");
        }
        Some(("verify", args)) => {
            let store = run(args)?;
            let report = [
                ("categories", store.categories().verify()),
                ("subcategories", store.subcategories().verify()),
                ("heroSections", store.hero_sections().verify()),
                ("featuredSections", store.featured_sections().verify()),
                ("clientLogos", store.client_logos().verify()),
            ];

            let mut failed = false;
            for (slice, result) in report {
                match result {
                    Ok(()) => println!("  {slice}: OK"),
                    Err(err) => {
                        failed = true;
                        println!("  {slice}: {err}");
                    }
                }
            }

            std::process::exit(i32::from(failed));
        }
        _ => unreachable!("subcommand required"),
    }

    Ok(())
}

fn run(args: &ArgMatches) -> Result<CatalogStore> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => StoreConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StoreConfig::new(),
    };
    if args.get_flag("strict") {
        config = config.with_not_found(NotFoundPolicy::Reject);
    }

    let path = args
        .get_one::<PathBuf>("log")
        .context("missing action log path")?;
    let actions = load_log(path).with_context(|| format!("reading {}", path.display()))?;

    let (store, stats) = replay(actions, config).context("replay aborted")?;
    eprintln!("applied {}, ignored {}", stats.applied, stats.ignored);
    Ok(store)
}
