use super::*;

#[test]
fn missing_program_is_spawn_error() {
    let err = SystemRunner
        .run("zbrowse-no-such-program", &["list"])
        .unwrap_err();
    match err {
        CommandError::Spawn { program, .. } => assert_eq!(program, "zbrowse-no-such-program"),
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn non_zero_exit_is_failed_with_trimmed_stderr() {
    let err = SystemRunner
        .run("sh", &["-c", "echo err >&2; exit 3"])
        .unwrap_err();
    match &err {
        CommandError::Failed { program, stderr, .. } => {
            assert_eq!(program, "sh");
            assert_eq!(stderr, "err");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().ends_with(": err"));
}

#[cfg(unix)]
#[test]
fn stdout_is_decoded_lossily() {
    let out = SystemRunner
        .run("sh", &["-c", "printf 'ok\\377'"])
        .expect("run sh");
    assert_eq!(out, "ok\u{FFFD}");
}

#[test]
fn failed_without_stderr_has_no_dangling_separator() {
    let err = CommandError::Failed {
        program: "zpool".to_string(),
        args: "list -Hp -o name,health".to_string(),
        status: "exit status: 2".to_string(),
        stderr: String::new(),
    };
    assert_eq!(
        err.to_string(),
        "zpool list -Hp -o name,health exited with exit status: 2"
    );
}

#[test]
fn snapshot_listing_recurses_under_dataset() {
    struct Echo;
    impl CommandRunner for Echo {
        fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
            Ok(format!("{} {}", program, args.join(" ")))
        }
    }

    let line = list_snapshots(&Echo, "tank").expect("echo");
    assert_eq!(line, "zfs list -t snapshot -r -Hp -o name,used,creation tank");
}
