use clap::Parser;
use fractal_curves::{CliArgs, CliCommand, CliRenderController, EngineConfig, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = CliArgs::parse().into_command();
    let controller = CliRenderController::new(PpmFilePresenter::new(), EngineConfig::default());

    match command {
        CliCommand::List => {
            for line in controller.list() {
                println!("{}", line);
            }
        }
        CliCommand::Render(args) => {
            controller.run(&args)?;
        }
    }

    Ok(())
}
