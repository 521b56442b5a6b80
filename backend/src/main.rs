mod assets;
mod config;

use crate::config::Config;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if !assets::has_index() {
        warn!("Frontend bundle not embedded; build it with `trunk build` in frontend/ and rebuild the server");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open browser at {}: {}", url, e);
            }
        });
    }

    info!("Comment box running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(assets::serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
