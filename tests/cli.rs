use std::process::Command;

fn herm_coefs(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_herm_coefs"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_no_argument_prints_usage() {
    let out = herm_coefs(&[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Missing argument : you must specify the maximum quadrature order N\n"
    );
}

#[test]
fn test_invalid_order_leaves_stdout_empty() {
    for arg in ["abc", "18446744073709551615", "301"] {
        let out = herm_coefs(&[arg]);
        assert_eq!(out.status.code(), Some(2), "argument {arg}");
        assert!(out.stdout.is_empty(), "argument {arg}");
        assert!(!out.stderr.is_empty(), "argument {arg}");
    }
}

#[test]
fn test_order_five_header() {
    let out = herm_coefs(&["5"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "#ifndef SOLVER_HERM_COEFS");
    assert_eq!(lines[2], "#define HERM_QUADRA_N_MAX 5");
    assert_eq!(lines[3].matches("arma::mat").count(), 6);
    assert_eq!(lines[4], "#endif");
}
