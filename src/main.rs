// SPDX-License-Identifier: MPL-2.0
use flightscry::app::{self, paths, Flags};
use flightscry::logging::{self, Verbosity};
use flightscry::ui::theming::ThemeMode;
use std::process::ExitCode;

const HELP: &str = "\
Flightscry - flight status and boarding pass display

USAGE:
    flightscry [OPTIONS]

OPTIONS:
    --lang <LOCALE>          Interface language (e.g. en-US, fr)
    --config-dir <DIR>       Directory containing settings.toml
    --theme <MODE>           light, dark or system
    -v, --verbose            More logging (repeat for trace)
    -q, --quiet              Errors only
    -h, --help               Print this help

ENVIRONMENT:
    FLIGHTSCRY_CONFIG_DIR    Config directory when --config-dir is absent
    RUST_LOG                 Log filter, overrides -v and -q
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    verbosity: Verbosity,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let quiet = args.contains(["-q", "--quiet"]);
    let mut verbose_count = 0;
    while args.contains(["-v", "--verbose"]) {
        verbose_count += 1;
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let theme = args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?;

    let remaining = args.finish();
    if let Some(arg) = remaining.into_iter().next() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", arg.to_string_lossy()),
        });
    }

    Ok(Some(Args {
        flags: Flags { lang, theme },
        config_dir,
        verbosity: Verbosity::from_flags(quiet, verbose_count),
    }))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init_logging(args.verbosity);
    paths::init_cli_override(args.config_dir);

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
