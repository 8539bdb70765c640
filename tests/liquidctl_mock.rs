use liquid_ui::apply;
use liquid_ui::device::{Device, Status};
use liquid_ui::error::Error;
use liquid_ui::liquidctl::Adapter;
use liquid_ui::profile::{self, CurvePoint, Profile, ProfileStore};
use liquid_ui::runner::{CommandRunner, Liquidctl};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Install a shell script standing in for liquidctl.
///
/// It answers `list` and `status` with canned text and appends every
/// invocation's arguments to `calls.log` next to itself. `set` fails with a
/// stderr message when the device index is 9.
#[cfg(unix)]
fn create_liquidctl_fixture(root: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = root.join("liquidctl");
    let log = root.join("calls.log");
    let body = format!(
        r#"#!/bin/sh
echo "$*" >> '{log}'
case "$1" in
  list)
    echo "Device #0: NZXT Smart Device V2"
    echo "some banner"
    echo "Device #1: NZXT Kraken X (X53, X63 or X73)"
    ;;
  status)
    echo "NZXT Kraken X (X53, X63 or X73)"
    echo "  Temperature: 32.0 °C"
    echo "  Fan speed: 1200 rpm"
    echo "  Pump speed: 2000 rpm"
    ;;
  set)
    if [ "$5" = "9" ]; then
      echo "ERROR: no device matches filters" >&2
      exit 1
    fi
    ;;
  *)
    echo "unknown command $1" >&2
    exit 2
    ;;
esac
"#,
        log = log.display()
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

fn read_calls(root: &Path) -> Vec<String> {
    fs::read_to_string(root.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// In-process runner that records argv and never touches a real process.
#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<Vec<String>>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, args: &[String]) -> liquid_ui::error::Result<String> {
        self.calls.lock().unwrap().push(args.to_vec());
        Ok(String::new())
    }
}

fn silent() -> Profile {
    Profile::new(
        "Silent",
        vec![
            CurvePoint {
                temperature: 20.0,
                speed: 20,
            },
            CurvePoint {
                temperature: 40.0,
                speed: 60,
            },
        ],
    )
}

#[cfg(unix)]
#[test]
fn test_discover_through_real_process() {
    let tmp = TempDir::new().unwrap();
    let adapter = Adapter::new(Liquidctl::new(create_liquidctl_fixture(tmp.path())));

    let devices = adapter.discover().unwrap();
    assert_eq!(
        devices,
        vec![
            Device::new(0, "NZXT Smart Device V2"),
            Device::new(1, "NZXT Kraken X (X53, X63 or X73)"),
        ]
    );
    assert_eq!(read_calls(tmp.path()), vec!["list"]);
}

#[cfg(unix)]
#[test]
fn test_status_through_real_process() {
    let tmp = TempDir::new().unwrap();
    let adapter = Adapter::new(Liquidctl::new(create_liquidctl_fixture(tmp.path())));

    let status = adapter.query_status(1).unwrap();
    assert_eq!(
        status,
        Status {
            temperature: 32.0,
            fan_rpm: 1200,
            pump_rpm: 2000,
        }
    );
    assert_eq!(read_calls(tmp.path()), vec!["status --device 1"]);
}

#[cfg(unix)]
#[test]
fn test_apply_curve_argv_and_failure() {
    let tmp = TempDir::new().unwrap();
    let adapter = Adapter::new(Liquidctl::new(create_liquidctl_fixture(tmp.path())));

    adapter.apply_fan_curve(0, &silent().points).unwrap();

    let err = adapter.apply_fan_curve(9, &silent().points).unwrap_err();
    match err {
        Error::Adapter { detail, .. } => assert_eq!(detail, "ERROR: no device matches filters\n"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(
        read_calls(tmp.path()),
        vec![
            "set fan speed --device 0 20 20 40 60",
            "set fan speed --device 9 20 20 40 60",
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_adapter_shared_across_threads() {
    let tmp = TempDir::new().unwrap();
    let adapter = Adapter::new(Liquidctl::new(create_liquidctl_fixture(tmp.path())));

    let adapter = &adapter;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| s.spawn(move || adapter.query_status(i).map(|st| st.pump_rpm)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().unwrap(), 2000);
        }
    });

    assert_eq!(read_calls(tmp.path()).len(), 4);
}

#[test]
fn test_store_roundtrip_preserves_order_and_points() {
    let tmp = TempDir::new().unwrap();
    let store = ProfileStore::new(tmp.path().join("liquid-ui/profiles.json"));

    let profiles = vec![
        silent(),
        Profile::new(
            "Performance",
            vec![
                CurvePoint {
                    temperature: 25.0,
                    speed: 50,
                },
                CurvePoint {
                    temperature: 35.5,
                    speed: 100,
                },
            ],
        ),
    ];
    store.save(&profiles).unwrap();

    assert_eq!(store.load().unwrap(), profiles);
}

#[test]
fn test_store_file_format() {
    let tmp = TempDir::new().unwrap();
    let store = ProfileStore::new(tmp.path().join("profiles.json"));
    store.save(&[silent()]).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {
                "name": "Silent",
                "points": [
                    {"temperature": 20.0, "speed": 20},
                    {"temperature": 40.0, "speed": 60}
                ]
            }
        ])
    );
}

#[test]
fn test_apply_profile_by_name() {
    let tmp = TempDir::new().unwrap();
    let store = ProfileStore::new(tmp.path().join("profiles.json"));
    store.update(|p| profile::upsert_profile(p, silent())).unwrap();

    let adapter = Adapter::new(RecordingRunner::default());
    let applied = apply::apply_profile(&adapter, &store, 2, "Silent").unwrap();

    assert_eq!(applied, silent());
    let calls = adapter.runner().calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        ["set", "fan", "speed", "--device", "2", "20", "20", "40", "60"]
    );
}

#[test]
fn test_apply_unknown_profile_runs_nothing() {
    let tmp = TempDir::new().unwrap();
    let store = ProfileStore::new(tmp.path().join("profiles.json"));

    let adapter = Adapter::new(RecordingRunner::default());
    let err = apply::apply_profile(&adapter, &store, 0, "Missing").unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert!(adapter.runner().calls.lock().unwrap().is_empty());
}

#[test]
fn test_apply_empty_profile_is_validation_error() {
    let tmp = TempDir::new().unwrap();
    let store = ProfileStore::new(tmp.path().join("profiles.json"));
    store.save(&[Profile::new("Empty", Vec::new())]).unwrap();

    let adapter = Adapter::new(RecordingRunner::default());
    let err = apply::apply_profile(&adapter, &store, 0, "Empty").unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(adapter.runner().calls.lock().unwrap().is_empty());
}

#[test]
fn test_apply_with_corrupt_store_is_persistence_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("profiles.json");
    fs::write(&path, "not json").unwrap();

    let adapter = Adapter::new(RecordingRunner::default());
    let err = apply::apply_profile(&adapter, &ProfileStore::new(&path), 0, "Silent").unwrap_err();
    assert!(matches!(err, Error::Persistence { .. }));
}

#[test]
fn test_save_delete_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let store = ProfileStore::new(tmp.path().join("profiles.json"));

    store.update(|p| profile::upsert_profile(p, silent())).unwrap();
    store
        .update(|p| profile::upsert_profile(p, Profile::new("Loud", vec![])))
        .unwrap();

    let mut quieter = silent();
    quieter.points[1].speed = 45;
    store.update(|p| profile::upsert_profile(p, quieter.clone())).unwrap();

    let names: Vec<_> = store.load().unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Silent", "Loud"]);

    let loaded = store.load().unwrap();
    assert_eq!(profile::find_profile(&loaded, "Silent").unwrap(), &quieter);

    store.update(|p| profile::delete_profile(p, "Silent")).unwrap();
    store.update(|p| profile::delete_profile(p, "missing")).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, vec![Profile::new("Loud", vec![])]);
}
