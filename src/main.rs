use localcast::config::LocalcastConfig;
use localcast::{logging, pipeline};

fn main() {
    let config = match LocalcastConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            std::process::exit(1);
        }
    };

    logging::init(&config.logging);
    tracing::info!("Starting localcast {}", localcast::VERSION);

    match pipeline::run(&config) {
        Ok(forecast_text) => {
            print!("{forecast_text}");
        }
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
