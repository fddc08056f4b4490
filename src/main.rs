use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use color_eyre::eyre::{eyre, Result};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use theme_store::app::App;
use theme_store::commands::{open_document, open_storage, run, OneShot};
use theme_store::config::AppConfig;
use theme_store::logger::{setup_cli_logger, setup_tui_logger};
use theme_store::start_ui;
use theme_store::theme::ThemeStore;

fn cli() -> Command {
    command!()
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (default: ~/.config/theme-store/config.yml)"),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .action(ArgAction::SetTrue)
                .help("Keep the theme in memory only, nothing is read or persisted"),
        )
        .subcommand(Command::new("preview").about("Interactive preview (default)"))
        .subcommand(Command::new("show").about("Print the current theme and accent color"))
        .subcommand(Command::new("toggle").about("Switch between light and dark"))
        .subcommand(
            Command::new("accent")
                .about("Set the accent color")
                .arg(
                    Arg::new("color")
                        .required(true)
                        .help("HSL triple without the hsl() wrapper, e.g. \"221.2 83.2% 53.3%\""),
                ),
        )
        .subcommand(Command::new("css").about("Print the CSS applied for the persisted theme"))
}

fn load_config(matches: &ArgMatches) -> Result<AppConfig> {
    let path = match matches.get_one::<PathBuf>("config") {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };
    AppConfig::load(&path)
}

fn one_shot(matches: &ArgMatches) -> Result<Option<OneShot>> {
    let command = match matches.subcommand() {
        Some(("show", _)) => OneShot::Show,
        Some(("toggle", _)) => OneShot::Toggle,
        Some(("css", _)) => OneShot::Css,
        Some(("accent", sub)) => {
            let color = sub
                .get_one::<String>("color")
                .ok_or_else(|| eyre!("Missing accent color"))?;
            OneShot::Accent(color.clone())
        }
        _ => return Ok(None),
    };
    Ok(Some(command))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = cli().get_matches();

    let config = load_config(&matches)?;
    let ephemeral = matches.get_flag("ephemeral");

    if let Some(command) = one_shot(&matches)? {
        setup_cli_logger(config.log_level_or(LevelFilter::Warn)?)?;
        let storage = open_storage(&config, ephemeral)?;
        return run(&command, storage, open_document(&config), &mut io::stdout());
    }

    setup_tui_logger(config.log_level_or(LevelFilter::Debug)?, &config.log_path()?)?;
    let mut store =
        ThemeStore::with_capabilities(open_storage(&config, ephemeral)?, open_document(&config));
    store.initialize();
    let app = App::new(store)?;
    start_ui(app).await
}
