use std::path::Path;
use timetracker::core::build_script::{BuildScriptLogic, ScriptFlavor, source_dir};

#[test]
fn test_shell_script_template() {
    let script = BuildScriptLogic::render(
        ScriptFlavor::Shell,
        Path::new("/home/dev/src/timetracker"),
        Path::new("/usr/local/bin/timetracker"),
    );

    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(lines[0], "#!/bin/sh");
    // The release build and the copy both resolve against the source root.
    assert_eq!(lines[1], "cd \"/home/dev/src/timetracker\" || exit 1");
    assert_eq!(lines[2], "cargo build --release || exit 1");
    assert_eq!(
        lines[3],
        "cp \"target/release/timetracker\" \"/usr/local/bin/timetracker\""
    );
}

#[test]
fn test_batch_script_template() {
    let script = BuildScriptLogic::render(
        ScriptFlavor::Batch,
        Path::new("C:\\src\\timetracker"),
        Path::new("C:\\Tools\\timetracker.exe"),
    );

    assert!(script.starts_with("@echo off\r\n"));
    assert!(script.contains("cd /d \"C:\\src\\timetracker\""));
    assert!(script.contains("\"C:\\Tools\\timetracker.exe\""));
    assert!(script.contains("copy /Y \"target\\release\\timetracker.exe\""));
    assert!(
        script
            .split('\n')
            .filter(|l| !l.is_empty())
            .all(|l| l.ends_with('\r'))
    );
}

#[test]
fn test_native_flavor_file_name() {
    let name = ScriptFlavor::native().file_name();
    if cfg!(target_os = "windows") {
        assert_eq!(name, "build.bat");
    } else {
        assert_eq!(name, "build.sh");
    }
}

#[test]
fn test_source_dir_holds_the_manifest() {
    let root = source_dir();
    assert_eq!(root, Path::new(env!("CARGO_MANIFEST_DIR")));
    assert!(root.join("Cargo.toml").is_file());
}
