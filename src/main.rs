use clap::Parser;
use kvpeek::cli::{commands, output, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Completions need neither credentials nor config.
    if let Some(shell) = cli.completions {
        commands::completions::execute(shell);
        return;
    }

    // Resolve credentials before anything touches the network.
    let credentials = match cli.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            output::fatal(&e.to_string());
            std::process::exit(1);
        }
    };

    let result = cli.settings().and_then(|settings| {
        if cli.list {
            commands::list::execute(credentials, &settings)
        } else {
            commands::get::execute(credentials, &settings, &cli.target())
        }
    });

    exit_on_error(result);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("kvpeek=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn exit_on_error(result: kvpeek::errors::Result<()>) {
    if let Err(e) = result {
        output::fatal(&e.to_string());
        std::process::exit(1);
    }
}
