use anyhow::Context;
use std::{env, path::PathBuf};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Where the static host binds and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output (`index.html`, wasm, js glue).
    pub dist_dir: PathBuf,
    /// Brochure and other downloadable files, mounted at `/assets`.
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".."); // = site/..

        let host = get("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match get("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SITE_PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let dist_dir = get("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace.join("dist"));
        let assets_dir = get("SITE_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| workspace.join("assets"));

        Ok(Self {
            host,
            port,
            dist_dir,
            assets_dir,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.dist_dir.ends_with("dist"));
        assert!(cfg.assets_dir.ends_with("assets"));
    }

    #[test]
    fn overrides_are_taken_verbatim() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST_DIR", "/srv/icdaic/dist"),
            ("SITE_ASSETS_DIR", "/srv/icdaic/assets"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/icdaic/dist"));
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/icdaic/assets"));
        assert_eq!(cfg.index_file(), PathBuf::from("/srv/icdaic/dist/index.html"));
    }

    #[test]
    fn bad_port_is_reported() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
