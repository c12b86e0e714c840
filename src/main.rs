use clap::Parser;
use env_logger::Env;
use fatou_explorer::{MapKinds, PpmFilePresenter, RenderArgs, RenderImageController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = RenderArgs::parse();
    let state = args.engine.engine_state()?;
    let time_limit = args.time_limit()?;
    let mut controller = RenderImageController::new(PpmFilePresenter::new());

    controller.render(&state, MapKinds::from(args.engine.map), !args.serial, time_limit)?;
    controller.write(&args.output)?;

    Ok(())
}
