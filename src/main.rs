// SPDX-License-Identifier: MPL-2.0
use imgv::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
imgv - shuffled photo slideshow

USAGE:
  imgv [OPTIONS] [DIRECTORY]...

OPTIONS:
  -h, --help                Print this help
  --lang <LOCALE>           UI language (e.g. en-US, fr)
  --interval <MS>           Delay between slides for this session, in milliseconds
  --config-dir <PATH>       Directory holding settings.toml

ARGS:
  [DIRECTORY]...            Folders added as sources at startup
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|error| {
        log::warn!("ignoring --lang: {error}");
        None
    });
    let interval_ms: Option<u64> = args
        .opt_value_from_str("--interval")
        .unwrap_or_else(|error| {
            log::warn!("ignoring --interval: {error}");
            None
        });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|error| {
            log::warn!("ignoring --config-dir: {error}");
            None
        });

    let sources: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        interval_ms,
        config_dir,
        sources,
    })
}
