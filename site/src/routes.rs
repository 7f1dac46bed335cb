use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::SiteConfig;

/// Mounts the static surface: `/assets/*`, the Trunk bundle at `/`, and
/// `index.html` for every path the bundle does not contain.
pub fn configure(cfg: &mut web::ServiceConfig, site: &SiteConfig) {
    let index = site.index_file();

    cfg.service(Files::new("/assets", site.assets_dir.clone()))
        .service(
            Files::new("/", site.dist_dir.clone())
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use std::fs;
    use tempfile::TempDir;

    const INDEX: &str = "<!DOCTYPE html><html><body>ICDAIC'24</body></html>";

    fn fixture() -> (TempDir, SiteConfig) {
        let root = tempfile::tempdir().unwrap();
        let dist = root.path().join("dist");
        let assets = root.path().join("assets");
        fs::create_dir_all(&dist).unwrap();
        fs::create_dir_all(&assets).unwrap();
        fs::write(dist.join("index.html"), INDEX).unwrap();
        fs::write(dist.join("ui.js"), "export default 1;").unwrap();
        fs::write(assets.join("brochure.pdf"), b"%PDF-1.4").unwrap();

        let cfg = SiteConfig {
            host: "127.0.0.1".into(),
            port: 0,
            dist_dir: dist,
            assets_dir: assets,
        };
        (root, cfg)
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let (_root, cfg) = fixture();
        let app = test::init_service(App::new().configure(|c| configure(c, &cfg))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, INDEX.as_bytes());
    }

    #[actix_web::test]
    async fn bundle_files_are_served_as_is() {
        let (_root, cfg) = fixture();
        let app = test::init_service(App::new().configure(|c| configure(c, &cfg))).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/ui.js").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "export default 1;".as_bytes());
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let (_root, cfg) = fixture();
        let app = test::init_service(App::new().configure(|c| configure(c, &cfg))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/registration").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, INDEX.as_bytes());
    }

    #[actix_web::test]
    async fn assets_are_mounted_separately() {
        let (_root, cfg) = fixture();
        let app = test::init_service(App::new().configure(|c| configure(c, &cfg))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/assets/brochure.pdf").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, b"%PDF-1.4".as_slice());
    }
}
