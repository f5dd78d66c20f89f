//! Tests for the sync subcommand and its config overrides.

use super::parse;
use crate::cli::commands::SyncOverrides;
use crate::cli::CliCommand;
use champsync_core::config::ChampsyncConfig;
use std::path::PathBuf;

#[test]
fn cli_parse_sync_defaults() {
    match parse(&["champsync", "sync"]) {
        CliCommand::Sync {
            output_dir,
            manifest_url,
            asset_base_url,
        } => {
            assert!(output_dir.is_none());
            assert!(manifest_url.is_none());
            assert!(asset_base_url.is_none());
        }
        _ => panic!("expected Sync"),
    }
}

#[test]
fn cli_parse_sync_overrides() {
    match parse(&[
        "champsync",
        "sync",
        "-o",
        "/tmp/icons",
        "--manifest-url",
        "http://127.0.0.1:9000/summary.json",
        "--asset-base-url",
        "http://127.0.0.1:9000/icons/",
    ]) {
        CliCommand::Sync {
            output_dir,
            manifest_url,
            asset_base_url,
        } => {
            assert_eq!(output_dir, Some(PathBuf::from("/tmp/icons")));
            assert_eq!(
                manifest_url.as_deref(),
                Some("http://127.0.0.1:9000/summary.json")
            );
            assert_eq!(
                asset_base_url.as_deref(),
                Some("http://127.0.0.1:9000/icons/")
            );
        }
        _ => panic!("expected Sync with overrides"),
    }
}

#[test]
fn overrides_replace_config_values() {
    let cfg = ChampsyncConfig::default();
    let merged = crate::cli::commands::sync_effective_config(
        &cfg,
        SyncOverrides {
            output_dir: Some(PathBuf::from("icons")),
            manifest_url: Some("http://localhost/summary.json".to_string()),
            asset_base_url: None,
        },
    )
    .unwrap();
    assert_eq!(merged.output_dir, PathBuf::from("icons"));
    assert_eq!(merged.manifest_url, "http://localhost/summary.json");
    assert_eq!(merged.asset_base_url, cfg.asset_base_url);
}

#[test]
fn invalid_override_url_is_rejected() {
    let cfg = ChampsyncConfig::default();
    let res = crate::cli::commands::sync_effective_config(
        &cfg,
        SyncOverrides {
            manifest_url: Some("not a url".to_string()),
            ..SyncOverrides::default()
        },
    );
    assert!(res.is_err());
}

mod run {
    use crate::cli::commands::run_sync_with;
    use champsync_core::config::ChampsyncConfig;
    use champsync_core::fetch::{FetchError, HttpFetcher, HttpResponse};
    use champsync_core::sync::{ManifestFailure, SyncError};
    use std::collections::HashMap;
    use std::path::Path;

    const MANIFEST_URL: &str = "http://assets.test/champion-summary.json";
    const BASE: &str = "http://assets.test/champion-icons/";

    /// Fixed answers per URL; `None` means the connection fails.
    struct TableFetcher(HashMap<String, Option<(u32, Vec<u8>)>>);

    impl TableFetcher {
        fn new(routes: &[(&str, Option<(u32, &str)>)]) -> Self {
            TableFetcher(
                routes
                    .iter()
                    .map(|(url, r)| {
                        (
                            url.to_string(),
                            r.map(|(status, body)| (status, body.as_bytes().to_vec())),
                        )
                    })
                    .collect(),
            )
        }
    }

    impl HttpFetcher for TableFetcher {
        fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            match self.0.get(url) {
                Some(Some((status, body))) => Ok(HttpResponse {
                    status: *status,
                    body: body.clone(),
                }),
                Some(None) => Err(FetchError::Other("connection reset".to_string())),
                None => Ok(HttpResponse {
                    status: 404,
                    body: Vec::new(),
                }),
            }
        }
    }

    fn config(dir: &Path) -> ChampsyncConfig {
        ChampsyncConfig {
            manifest_url: MANIFEST_URL.to_string(),
            asset_base_url: BASE.to_string(),
            output_dir: dir.to_path_buf(),
            ..ChampsyncConfig::default()
        }
    }

    #[tokio::test]
    async fn per_icon_failures_still_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("champion_icons");
        let fetcher = TableFetcher::new(&[
            (
                MANIFEST_URL,
                Some((
                    200,
                    r#"[{"id": -1, "name": "None"}, {"id": 103, "name": "Ahri"},
                        {"id": 145, "name": "Kai'Sa"}, {"id": 36, "name": "Dr. Mundo"}]"#,
                )),
            ),
            ("http://assets.test/champion-icons/103.png", Some((200, "ahri"))),
            ("http://assets.test/champion-icons/36.png", None),
        ]);

        run_sync_with(fetcher, config(&icons)).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(&icons)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Ahri.png".to_string()]);
    }

    #[tokio::test]
    async fn unavailable_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TableFetcher::new(&[(MANIFEST_URL, Some((503, "busy")))]);

        let err = run_sync_with(fetcher, config(dir.path())).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SyncError>(),
            Some(SyncError::ManifestUnavailable {
                reason: ManifestFailure::Status(503),
                ..
            })
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn manifest_connection_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TableFetcher::new(&[(MANIFEST_URL, None)]);

        let err = run_sync_with(fetcher, config(dir.path())).await.unwrap_err();

        assert!(err.downcast_ref::<SyncError>().is_some());
    }
}
