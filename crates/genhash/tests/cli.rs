use std::{
    ffi::OsStr,
    process::{Command, Output},
};

fn genhash<I, S>(args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_genhash"));
    cmd.args(args).env_remove("LOG_LEVEL");
    cmd
}

fn run<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    genhash(args).output().expect("failed to spawn genhash")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn prints_one_hash_line() {
    let output = run(["hunter2", "abc"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("$6$abc$"));
    assert!(out.ends_with('\n'));
    assert_eq!(out.lines().count(), 1);
    assert!(out.trim_end().len() > "$6$abc$".len());
}

#[test]
fn matches_reference_vector() {
    let output = run(["Hello world!", "saltstring"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1\n"
    );
}

#[test]
fn invalid_salt_chars_become_dots() {
    let output = run(["hunter2", "!!@@##"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("$6$......$"));
}

#[test]
fn long_salt_is_truncated_to_sixteen() {
    let output = run(["hunter2", "abcdefghijklmnop!r"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("$6$abcdefghijklmnop$"));
}

#[test]
fn repeated_runs_are_identical() {
    let first = run(["hunter2", "abc"]);
    let second = run(["hunter2", "abc"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn different_passwords_give_different_hashes() {
    let a = run(["hunter2", "abc"]);
    let b = run(["hunter3", "abc"]);
    assert_ne!(a.stdout, b.stdout);
}

#[test]
fn missing_arguments_print_usage() {
    for args in [&[][..], &["hunter2"][..]] {
        let output = run(args);
        assert_eq!(output.status.code(), Some(2));

        let out = stdout(&output);
        assert!(out.starts_with("Usage: "));
        assert!(out.trim_end().ends_with(" [password] [salt]"));
        assert!(!out.contains("$6$"));
    }
}

#[test]
fn extra_arguments_print_usage() {
    let output = run(["a", "b", "c"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).starts_with("Usage: "));
}

#[test]
fn empty_password_and_salt_hash_with_empty_salt() {
    let output = run(["", ""]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "$6$$/chiBau24cE26QQVW3IfIe68Xu5.JQ4E8Ie7lcRLwqxO5cxGuBhqF2HmTL.zWJ9zjChg3yJYFXeGBQ2y3Ba1d1\n"
    );
}

#[test]
fn ignores_dotenv_in_working_directory() {
    let dir = std::env::temp_dir().join(format!("genhash-dotenv-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(".env"), "GENHASH_ROUNDS=1000\nLOG_LEVEL=debug\n").unwrap();

    let plain = run(["hunter2", "abc"]);
    let output = genhash(["hunter2", "abc"])
        .current_dir(&dir)
        .output()
        .expect("failed to spawn genhash");
    std::fs::remove_dir_all(&dir).ok();

    assert!(output.status.success());
    assert_eq!(output.stdout, plain.stdout);
    assert!(stdout(&output).starts_with("$6$abc$"));
    assert!(output.stderr.is_empty());
}

#[test]
fn environment_does_not_change_the_hash() {
    let plain = run(["hunter2", "abc"]);
    let output = genhash(["hunter2", "abc"])
        .env("GENHASH_ROUNDS", "10000")
        .output()
        .expect("failed to spawn genhash");
    assert!(output.status.success());
    assert_eq!(output.stdout, plain.stdout);
}

#[test]
fn logs_stay_off_stdout() {
    let output = genhash(["hunter2", "abc"])
        .env("LOG_LEVEL", "debug")
        .output()
        .expect("failed to spawn genhash");
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(!output.stderr.is_empty());
}

#[cfg(unix)]
#[test]
fn non_utf8_salt_is_sanitized() {
    use std::os::unix::ffi::OsStrExt;

    let salt = OsStr::from_bytes(&[b'a', b'b', 0xff, 0xfe]);
    let output = run([OsStr::new("hunter2"), salt]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("$6$ab..$"));
}
