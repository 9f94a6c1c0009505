// Environment variables are process-wide, so these tests live in their own
// binary and take turns through ENV_LOCK.
use std::sync::Mutex;

use chronotext::converters::register_configured;
use chronotext::datatype::TemporalKind;
use chronotext::registry::Registry;
use chronotext::settings::Settings;
use chronotext::CodecError;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const KINDS: &str = "CHRONOTEXT_KINDS";

fn with_kinds<T>(value: &str, run: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    // SAFETY: every test touching the environment holds ENV_LOCK
    unsafe { std::env::set_var(KINDS, value) };
    let result = run();
    unsafe { std::env::remove_var(KINDS) };
    result
}

#[test]
fn environment_overrides_the_file() {
    let path = std::env::temp_dir().join(format!("chronotext-env-{}.toml", std::process::id()));
    std::fs::write(&path, "kinds = [\"YearMonth\"]\n").expect("write settings");
    let settings = with_kinds("CalendarDate,Instant", || Settings::load(Some(path.as_path())));
    let _ = std::fs::remove_file(&path);

    let settings = settings.expect("load");
    assert_eq!(settings.kinds, vec![TemporalKind::CalendarDate, TemporalKind::Instant]);

    let mut registry = Registry::new();
    register_configured(&mut registry, &settings).expect("register");
    assert_eq!(registry.kinds(), vec![TemporalKind::CalendarDate, TemporalKind::Instant]);
}

#[test]
fn environment_alone_is_enough() {
    let settings = with_kinds("Duration", || Settings::load(None)).expect("load");
    assert_eq!(settings.kinds, vec![TemporalKind::Duration]);
}

#[test]
fn unknown_kind_in_the_environment_is_a_config_error() {
    let settings = with_kinds("CalendarDate,Fortnight", || Settings::load(None));
    assert!(matches!(settings, Err(CodecError::Config(_))));
}

#[test]
fn no_environment_means_every_kind() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    assert_eq!(Settings::load(None).expect("load"), Settings::default());
}
