mod common;

use common::{fixture, numbered_values, spawn_command, stderr_of, stdout_of};

fn run_bounds(config: &str, table: &str, extra: &[&str]) -> std::process::Output {
    let config = fixture(config);
    let table = fixture(table);
    let mut args: Vec<&str> = vec![
        "--quiet",
        "bounds",
        "--config",
        config.as_str(),
        "--table",
        table.as_str(),
    ];
    args.extend_from_slice(extra);
    spawn_command(&args)
}

/// Returns the body of the section introduced by `header:`.
fn section(text: &str, header: &str) -> String {
    let title = format!("{header}:");
    let mut lines = text.lines();
    assert!(
        lines.any(|line| line == title),
        "missing section {header}:\n{text}"
    );
    lines
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn bounds_labels_and_intervals() {
    let output = run_bounds("phases.yaml", "animation.csv", &[]);
    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);

    assert_eq!(section(&stdout, "h"), "0: 0.1\n1: 0.09999999999999998");
    assert_eq!(section(&stdout, "nshoot"), "0: 2\n1: 2");
    assert_eq!(
        section(&stdout, "state_names"),
        "0: pelvis_tx\n1: hip_flexion\n2: knee_angle"
    );
    assert_eq!(
        section(&stdout, "state_names_dot"),
        "3: pelvis_tx_dot\n4: hip_flexion_dot\n5: knee_angle_dot"
    );
    assert_eq!(
        section(&stdout, "control_names"),
        "0: hip_flexion_torque\n1: knee_angle_torque"
    );
}

#[test]
fn bounds_cover_active_rows_with_margin() {
    let stdout = stdout_of(&run_bounds("phases.yaml", "animation.csv", &[]));

    let lower = numbered_values(&section(&stdout, "xlb"));
    let upper = numbered_values(&section(&stdout, "xub"));
    let scale = numbered_values(&section(&stdout, "xscale"));
    assert_eq!(lower.len(), 3);

    // pelvis_tx spans 0.2..0.6 over rows 10..=30
    assert!((lower[0].1 - 0.14).abs() < 1e-12);
    assert!((upper[0].1 - 0.66).abs() < 1e-12);
    assert!((scale[0].1 - 0.4).abs() < 1e-12);

    // constant column: no margin
    assert!((lower[1].1 - 0.25).abs() < 1e-15);
    assert!((upper[1].1 - 0.25).abs() < 1e-15);

    // knee peaks at 2.0 inside the window and bottoms at 1.0 on its edges
    assert!((lower[2].1 - 0.85).abs() < 1e-12);
    assert!((upper[2].1 - 2.15).abs() < 1e-12);
    assert!((scale[2].1 - 31.0 / 21.0).abs() < 1e-12);
}

#[test]
fn bounds_section_order() {
    let stdout = stdout_of(&run_bounds("phases.yaml", "animation.csv", &[]));
    let order = [
        "h:", "nshoot:", "state_names:", "state_names_dot:", "control_names:", "xlb:", "xub:",
        "xscale:",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|h| {
            stdout
                .lines()
                .position(|line| line == *h)
                .unwrap_or_else(|| panic!("missing {h}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn bounds_default_labels_and_unactuated_offset() {
    let stdout = stdout_of(&run_bounds("phases_warnings.yaml", "animation.csv", &[]));

    assert_eq!(
        section(&stdout, "state_names"),
        "0: dof_0\n1: dof_1\n2: dof_2"
    );
    // the default of six unactuated DOFs leaves no controls for three columns
    assert_eq!(section(&stdout, "control_names"), "");
}

#[test]
fn bounds_json_form() {
    let output = run_bounds("phases.yaml", "animation.csv", &["--format", "json"]);
    assert!(output.status.success(), "{}", stderr_of(&output));

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("bounds JSON should be valid");
    assert_eq!(parsed["shooting_intervals"], serde_json::json!([2, 2]));
    assert_eq!(parsed["control_names"][0], "hip_flexion_torque");
    assert_eq!(parsed["bounds"].as_array().map(Vec::len), Some(3));
    assert_eq!(parsed["bounds"][1]["scale"], 0.25);
}

#[test]
fn bounds_rows_outside_table_fail() {
    let output = run_bounds("phases.yaml", "animation_short.csv", &[]);
    assert_eq!(output.status.code(), Some(5));
    assert!(output.stdout.is_empty());
}
