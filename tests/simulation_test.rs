use std::process::Command;

fn run_simulation(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_elevator_sim"))
        .args(args)
        .env("RUST_LOG", "warn,elevator_sim=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that a short seeded run completes and logs its summary
#[test]
fn test_headless_simulation_runs() {
    let output = run_simulation(&["--ticks", "40", "--delay-ms", "0", "--seed", "7", "--quiet"]);

    assert!(
        output.status.success(),
        "Simulation failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
    for statistic in [
        "Ticks: 40",
        "Hall calls routed:",
        "Guests picked up:",
        "Guests dropped off:",
        "Guests deferred:",
    ] {
        assert!(stderr.contains(statistic), "Missing '{}' statistic", statistic);
    }
}

/// Test that guests actually move during a run
#[test]
fn test_guests_are_picked_up() {
    let output = run_simulation(&["--ticks", "40", "--delay-ms", "0", "--seed", "3", "--quiet"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let picked_line = stderr
        .lines()
        .find(|line| line.contains("Guests picked up:"))
        .expect("Could not find 'Guests picked up' line");

    let parts: Vec<&str> = picked_line.split("Guests picked up:").collect();
    let picked: u64 = parts
        .get(1)
        .and_then(|s| s.trim().parse().ok())
        .expect("Could not parse picked up count");

    assert!(picked > 0, "No guests were picked up");
}

/// Test that state is printed each tick unless quiet
#[test]
fn test_state_rendering() {
    let output = run_simulation(&["--ticks", "2", "--delay-ms", "0", "--seed", "1"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- Tick 2 ---"));
    assert!(stdout.contains("Car 0 State:"));
    assert!(stdout.contains("Dispatcher Request Queue:"));
}

/// Test that an impossible building is rejected
#[test]
fn test_invalid_config_fails() {
    let output = run_simulation(&["--floors", "0", "--ticks", "1", "--delay-ms", "0"]);
    assert!(!output.status.success());
}
