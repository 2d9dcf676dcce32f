use gtd::commands::Cli;
use gtd::libs::{error::GtdError, messages::Message};
use gtd::msg_error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = Cli::menu() {
        // a rejected write is reported, not propagated as a crash
        if let Some(err @ GtdError::StorageWrite { .. }) = e.downcast_ref::<GtdError>() {
            msg_error!(Message::StorageWriteFailed(err.to_string()));
            std::process::exit(1);
        }
        return Err(e);
    }

    Ok(())
}
