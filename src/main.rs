use std::path::PathBuf;

use clap::Parser;
use isopolis::input::run_elevation_benchmark;
use isopolis::settings::Settings;
use isopolis::world::World;
use isopolis::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file (RON)
    #[arg(long, default_value = "settings.ron")]
    settings: PathBuf,

    /// Run the elevation benchmark without opening a window, then exit
    #[arg(long)]
    benchmark: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = Settings::load_or_default(&args.settings);

    if args.benchmark {
        let mut world = World::new(&settings);
        run_elevation_benchmark(&mut world, &settings);
        return Ok(());
    }

    log::info!("Starting Isopolis");
    let app = App::new(settings)?;
    app.run()
}
