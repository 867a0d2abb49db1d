#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

fn run_cli<'a>(args: impl IntoIterator<Item = &'a str>) -> Output {
    let cli = PathBuf::from(env!("CARGO_BIN_EXE_cxplain-solver"));

    Command::new(cli)
        .args(args)
        .output()
        .expect("failed to run the cxplain-solver binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn explains_the_car_configuration() {
    let output = run_cli([
        "explain",
        "--knowledge-base",
        "car",
        "--requirement",
        "biz-park=y,rec-park=y",
        "--configuration",
        "biz-park=y,rec-park=y,video=y,sensor=n,GSM-radio=y,easy-parking=y,free-com=y",
        "--sub-configuration",
        "easy-parking=y",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "explanation: [rec-park=y [copied], (video or sensor) <-> easy-parking, rec-park <-> video]"
    );
}

#[test]
fn reads_assignments_from_files() {
    let directory = std::env::temp_dir().join(format!("cxplain-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&directory).expect("failed to create a temporary directory");
    let configuration_file = directory.join("configuration.txt");
    std::fs::write(
        &configuration_file,
        "survey=true,pay=true,license=true,nonlicense=false\n\
         ABtesting=true,statistics=true\n\
         qa=true,multiplechoice=true,multiplemedia=false\n",
    )
    .expect("failed to write the configuration");

    let output = run_cli([
        "explain",
        "--requirement",
        "ABtesting=true",
        "--configuration-file",
        configuration_file.to_str().expect("valid path"),
        "--sub-configuration",
        "multiplemedia=false",
    ]);

    std::fs::remove_dir_all(&directory).expect("failed to clean up");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "explanation: [multiplemedia=false]");
}

#[test]
fn statistics_are_logged_when_requested() {
    let output = run_cli([
        "explain",
        "--log-statistics",
        "--requirement",
        "ABtesting=true",
        "--configuration",
        "survey=true,pay=true,license=true,nonlicense=false,ABtesting=true,statistics=true,\
         qa=true,multiplechoice=true,multiplemedia=false",
        "--sub-configuration",
        "multiplemedia=false",
    ]);
    let stdout = stdout(&output);

    assert!(output.status.success());
    assert!(stdout.contains("%%%cxplain-stat: cxplainNumConsistencyChecks=7"));
    assert!(stdout.contains("%%%cxplain-stat: satOracleNumSolverCalls=7"));
    assert!(stdout.trim_end().ends_with("%%%cxplain-stat-end"));
}

#[test]
fn exhausted_oracle_call_budget_gives_unknown() {
    let output = run_cli([
        "explain",
        "--knowledge-base",
        "car",
        "--configuration",
        "biz-park=y,rec-park=y,video=y,sensor=n,GSM-radio=y,easy-parking=y,free-com=y",
        "--sub-configuration",
        "easy-parking=y",
        "--oracle-call-budget",
        "1",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "explanation unknown");
}

#[test]
fn invalid_values_fail_the_run() {
    let output = run_cli([
        "explain",
        "--knowledge-base",
        "car",
        "--configuration",
        "biz-park=true",
        "--sub-configuration",
        "biz-park=true",
    ]);

    assert!(!output.status.success());
}

#[test]
fn generates_all_sub_configurations_of_a_small_configuration() {
    let output = run_cli([
        "generate-sub-configurations",
        "--knowledge-base",
        "car",
        "--configuration",
        "biz-park=y,rec-park=y,video=y",
        "--size",
        "2",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        vec![
            "biz-park=y,rec-park=y",
            "biz-park=y,video=y",
            "rec-park=y,video=y"
        ]
    );
}
