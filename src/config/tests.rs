use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

pub(crate) struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

pub(crate) fn clear_catalog_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::remove("SONGLIST__CATALOG__SOURCE_DIR"),
        EnvGuard::remove("SONGLIST__CATALOG__OUTPUT_DIR"),
        EnvGuard::remove("SONGLIST__CATALOG__INDEX_FILE"),
        EnvGuard::remove("SONGLIST__CATALOG__EXTENSIONS"),
    ]
}

#[test]
fn resolve_config_path_prefers_songlist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SONGLIST_CONFIG_PATH", "/tmp/songlist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/songlist-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        PathBuf::from("/tmp/xdg-config-home")
            .join("songlist")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("songlist")
            .join("config.toml")
    );
}

#[test]
fn defaults_use_same_staging_dir_for_source_and_output() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("HOME", "/tmp/home-dir");

    let s = CatalogSettings::default();
    let staging = PathBuf::from("/tmp/home-dir").join("Music").join("to_SD");
    assert_eq!(s.source_dir, staging);
    assert_eq!(s.output_dir, staging);
    assert_eq!(s.index_file, PathBuf::from("songs.txt"));
    assert_eq!(s.extensions, vec!["mp3", "m4a", "wav"]);
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();
    let _env = clear_catalog_env();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[catalog]
source_dir = "/srv/incoming"
output_dir = "/srv/sd-card"
index_file = "/srv/sd-card/songs.txt"
extensions = ["mp3", ".flac"]
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONGLIST_CONFIG_PATH", cfg_path.to_str().unwrap());

    let s = Settings::load().unwrap();
    assert_eq!(s.catalog.source_dir, PathBuf::from("/srv/incoming"));
    assert_eq!(s.catalog.output_dir, PathBuf::from("/srv/sd-card"));
    assert_eq!(s.catalog.index_file, PathBuf::from("/srv/sd-card/songs.txt"));
    assert_eq!(s.catalog.normalized_extensions(), vec!["mp3", "flac"]);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_missing_config_file_uses_defaults() {
    let _lock = env_lock();
    let _env = clear_catalog_env();

    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "SONGLIST_CONFIG_PATH",
        dir.path().join("absent.toml").to_str().unwrap(),
    );

    let s = Settings::load().unwrap();
    assert_eq!(s.catalog.index_file, PathBuf::from("songs.txt"));
    assert_eq!(s.catalog.extensions, vec!["mp3", "m4a", "wav"]);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();
    let _env = clear_catalog_env();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[catalog]
output_dir = "/from/file"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONGLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SONGLIST__CATALOG__OUTPUT_DIR", "/from/env");
    let _g3 = EnvGuard::set("SONGLIST__CATALOG__EXTENSIONS", "mp3,ogg");

    let s = Settings::load().unwrap();
    assert_eq!(s.catalog.output_dir, PathBuf::from("/from/env"));
    assert_eq!(s.catalog.extensions, vec!["mp3", "ogg"]);
}

#[test]
fn validate_rejects_empty_and_dotted_extensions() {
    let _lock = env_lock();
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.catalog.extensions = vec![];
    assert!(s.validate().is_err());

    s.catalog.extensions = vec!["mp3".into(), " ".into()];
    assert!(s.validate().is_err());

    s.catalog.extensions = vec!["tar.gz".into()];
    assert!(s.validate().is_err());

    s.catalog.extensions = vec![".wav".into()];
    assert!(s.validate().is_ok());
}

#[test]
fn settings_round_trip_through_toml() {
    let _lock = env_lock();
    let s = Settings {
        catalog: CatalogSettings {
            source_dir: PathBuf::from("/music/in"),
            output_dir: PathBuf::from("/music/out"),
            index_file: PathBuf::from("songs.txt"),
            extensions: vec!["mp3".into(), "wav".into()],
        },
    };

    let text = toml::to_string_pretty(&s).unwrap();
    assert!(text.contains("[catalog]"));

    let back: Settings = toml::from_str(&text).unwrap();
    assert_eq!(back.catalog.source_dir, s.catalog.source_dir);
    assert_eq!(back.catalog.output_dir, s.catalog.output_dir);
    assert_eq!(back.catalog.index_file, s.catalog.index_file);
    assert_eq!(back.catalog.extensions, s.catalog.extensions);
}

#[test]
fn default_settings_render_as_toml() {
    let _lock = env_lock();
    let text = toml::to_string_pretty(&Settings::default()).unwrap();
    let back: Settings = toml::from_str(&text).unwrap();
    assert_eq!(back.catalog.extensions, vec!["mp3", "m4a", "wav"]);
    assert_eq!(back.catalog.index_file, PathBuf::from("songs.txt"));
}
