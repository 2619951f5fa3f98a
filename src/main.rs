use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use mindful_tui::app::App;
use mindful_tui::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("mindful-tui")
        .version(crate_version!())
        .about("Browse mental health resources from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("page")
                .short("p")
                .long("page")
                .value_name("PAGE")
                .help("Page to open on start")
                .possible_values(&["home", "videos", "articles", "myths", "settings", "chat"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-animations")
                .long("no-animations")
                .help("Switch pages without transitions"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    config.apply_overrides(
        matches.value_of("page"),
        matches.is_present("no-animations"),
    )?;

    App::start(config).await
}
