use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

mod config;
mod routes;

use crate::config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, everything has a default
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let site = SiteConfig::from_env()?;
    log::info!(
        "serving {} (assets: {}) on http://{}:{}",
        site.dist_dir.display(),
        site.assets_dir.display(),
        site.host,
        site.port
    );
    if !site.index_file().is_file() {
        log::warn!(
            "{} not found, run `trunk build` in ui/ first",
            site.index_file().display()
        );
    }

    let addr = (site.host.clone(), site.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| routes::configure(cfg, &site))
    })
    .bind(addr.clone())
    .with_context(|| format!("binding {}:{}", addr.0, addr.1))?
    .run()
    .await
    .context("http server")?;

    Ok(())
}
