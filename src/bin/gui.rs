use clap::Parser;
use env_logger::Env;
use fatou_explorer::{GuiArgs, MapKinds, PixelsPresenter, run_gui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = GuiArgs::parse();
    let state = args.engine.engine_state()?;

    run_gui::<PixelsPresenter>(state, MapKinds::from(args.engine.map));

    Ok(())
}
