//! The settings singleton is process-wide, so its lifecycle is exercised in
//! one test binary of its own.

use std::fs;

use sx_engine::settings::{self, SettingsError};
use sx_engine::{Filter, TrieFilter};

#[test]
fn custom_settings_install_once() {
    let dir = tempfile::tempdir().unwrap();

    let missing = settings::init_custom_file(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(missing, SettingsError::Io(_)));

    let invalid = settings::init_custom("[filter]\nreplacement = \"ab\"\n".to_string()).unwrap_err();
    assert!(matches!(invalid, SettingsError::InvalidValue { .. }));

    let path = dir.path().join("settings.toml");
    fs::write(&path, "[filter]\nskip = \"._\"\nreplacement = \"#\"\n").unwrap();
    settings::init_custom_file(&path).unwrap();

    let again = settings::init_custom(settings::default_toml().to_string()).unwrap_err();
    assert!(matches!(again, SettingsError::AlreadyInitialized));

    let s = settings::settings();
    assert_eq!(s.filter.skip, "._");
    assert_eq!(s.filter.replacement_char(), '#');

    let mut filter = TrieFilter::from_words(["wtf"]);
    filter.configure(&s.filter);
    assert_eq!(
        filter.replace("w.t_f", s.filter.replacement_char()),
        "#####"
    );
}
