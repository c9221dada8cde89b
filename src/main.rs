mod cli;
mod config;
mod dataset;
mod geocoding;
mod map;
mod output;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}
