// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::logging;
use std::process::ExitCode;

const HELP: &str = "\
iced_toasts

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --log-level <LEVEL>  Log filter (overrides RUST_LOG)
  --theme <MODE>       light, dark or system
  -h, --help           Print help
";

struct Args {
    flags: Flags,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        log_level: args.opt_value_from_str("--log-level")?,
        flags: Flags {
            theme: args.opt_value_from_str("--theme")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        },
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.log_level.as_deref());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("toast-timers")
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start timer runtime");
            return ExitCode::FAILURE;
        }
    };

    match app::run(args.flags, runtime.handle().clone()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
