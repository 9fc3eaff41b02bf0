mod app;
mod config;
mod notice;
mod session;

use quadclick_engine::logging::{init_logging, LoggingConfig};
use quadclick_engine::window::Runtime;

use crate::app::QuadApp;
use crate::config::AppConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = AppConfig::default();
    log::info!("starting {}", config.title);

    // The runtime has already logged the error.
    if let Err(err) = Runtime::run(config.runtime(), config.gpu(), QuadApp::new(config)) {
        notice::show_setup_error(&err);
        std::process::exit(1);
    }
}
