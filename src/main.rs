use clap::Parser;
use env_logger::Env;
use arcdesk::config::config_manager::ConfigManager;
use arcdesk::errors::ErrorHandler;
use arcdesk::structs::cli::Cli;
use arcdesk::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let verbose = ConfigManager::load().map(|config| config.output.verbose).unwrap_or(false);
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
    Ok(())
}
