//! Random workload, console prompt and building configuration

use std::collections::HashSet;

use elevator_sim::simulation::{
    BuildingConfig, Car, CarId, ConsolePrompt, Demand, DemandSource, RandomWorkload,
};

fn assert_unique_floors(calls: &[Demand]) {
    let floors: HashSet<u32> = calls.iter().map(|call| call.floor).collect();
    assert_eq!(floors.len(), calls.len(), "duplicate floor in {:?}", calls);
}

#[test]
fn test_config_defaults_and_derived_values() {
    let config = BuildingConfig::default();
    assert_eq!(config.floors, 30);
    assert_eq!(config.capacity, 30);
    assert_eq!(config.max_generated_guests, 40);
    assert_eq!(config.home_floor(), 15);
    assert_eq!(config.fleet_size(), 3);
    assert!(config.validate().is_ok());

    assert_eq!(BuildingConfig::new(1, 5).home_floor(), 1);
    assert!(config.contains(30));
    assert!(!config.contains(0));
    assert!(!config.contains(31));
}

#[test]
fn test_config_rejects_empty_values() {
    assert!(BuildingConfig::new(0, 10).validate().is_err());
    assert!(BuildingConfig::new(10, 0).validate().is_err());
    let config = BuildingConfig {
        max_generated_guests: 0,
        ..BuildingConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_generated_hall_calls_stay_in_bounds() {
    let config = BuildingConfig::default();
    let mut workload = RandomWorkload::with_seed(42);

    for _ in 0..100 {
        let calls = workload.hall_calls(&config).expect("hall calls");
        assert!(calls.len() <= config.floors as usize);
        assert_unique_floors(&calls);
        for call in &calls {
            assert!(config.contains(call.floor));
            assert!((1..=config.max_generated_guests).contains(&call.guests));
        }
    }
}

#[test]
fn test_generated_car_calls_never_exceed_load() {
    let config = BuildingConfig::default();
    let mut workload = RandomWorkload::with_seed(7);

    let empty = Car::new(CarId(0), &config);
    for _ in 0..20 {
        assert!(workload.car_calls(&empty, &config).expect("car calls").is_empty());
    }

    let loaded = Car::new(CarId(0), &config).with_load(7);
    for _ in 0..100 {
        let calls = workload.car_calls(&loaded, &config).expect("car calls");
        assert_unique_floors(&calls);
        let total: u32 = calls.iter().map(|call| call.guests).sum();
        assert!(total <= 7);
        assert!(calls.iter().all(|call| call.guests >= 1 && config.contains(call.floor)));
    }
}

#[test]
fn test_seeded_workloads_repeat() {
    let config = BuildingConfig::default();
    let mut first = RandomWorkload::with_seed(99);
    let mut second = RandomWorkload::with_seed(99);

    for _ in 0..10 {
        assert_eq!(
            first.hall_calls(&config).expect("hall calls"),
            second.hall_calls(&config).expect("hall calls")
        );
    }
}

#[test]
fn test_prompt_reads_valid_sequence() {
    let mut prompt = ConsolePrompt::new("3 7 12\n".as_bytes(), Vec::new());
    let values = prompt.prompt_sequence("Floors?", 1, 30).expect("valid input");
    assert_eq!(values, vec![3, 7, 12]);

    let output = String::from_utf8(prompt.into_output()).expect("utf8");
    assert!(output.contains("Floors?"));
}

#[test]
fn test_prompt_accepts_empty_line() {
    let mut prompt = ConsolePrompt::new("\n".as_bytes(), Vec::new());
    let values = prompt.prompt_sequence("Floors?", 1, 30).expect("valid input");
    assert!(values.is_empty());
}

#[test]
fn test_prompt_asks_again_after_invalid_input() {
    let mut prompt = ConsolePrompt::new("0 5\nabc\n4 5\n".as_bytes(), Vec::new());
    let values = prompt.prompt_sequence("Floors?", 1, 10).expect("third line is valid");
    assert_eq!(values, vec![4, 5]);

    let output = String::from_utf8(prompt.into_output()).expect("utf8");
    assert_eq!(output.matches("Floors?").count(), 3);
    assert_eq!(output.matches("Invalid input").count(), 2);
}

#[test]
fn test_prompt_gives_empty_sequence_after_max_attempts() {
    let mut prompt =
        ConsolePrompt::new("0\n0\n5\n".as_bytes(), Vec::new()).with_max_attempts(2);
    let values = prompt.prompt_sequence("Floors?", 1, 10).expect("not fatal");
    assert!(values.is_empty());

    let output = String::from_utf8(prompt.into_output()).expect("utf8");
    assert_eq!(output.matches("Floors?").count(), 2);
    assert!(output.contains("skipping"));
}

#[test]
fn test_prompt_fails_on_end_of_input() {
    let mut prompt = ConsolePrompt::new("".as_bytes(), Vec::new());
    assert!(prompt.prompt_sequence("Floors?", 1, 10).is_err());
}

#[test]
fn test_hall_calls_retry_on_length_mismatch() {
    let config = BuildingConfig::default();
    let mut prompt = ConsolePrompt::new("3 5\n2\n3 5\n2 4\n".as_bytes(), Vec::new());

    let calls = prompt.hall_calls(&config).expect("second attempt matches");
    assert_eq!(calls, vec![Demand::new(3, 2), Demand::new(5, 4)]);

    let output = String::from_utf8(prompt.into_output()).expect("utf8");
    assert!(output.contains("Input lengths don't match"));
}

#[test]
fn test_hall_calls_give_nothing_after_repeated_mismatches() {
    let config = BuildingConfig::default();
    let input = "3 5\n2\n".repeat(5);
    let mut prompt = ConsolePrompt::new(input.as_bytes(), Vec::new());

    let calls = prompt.hall_calls(&config).expect("mismatches are not fatal");
    assert!(calls.is_empty());

    let output = String::from_utf8(prompt.into_output()).expect("utf8");
    assert_eq!(output.matches("Input lengths don't match").count(), 5);
}

#[test]
fn test_car_calls_skip_empty_car() {
    let config = BuildingConfig::default();
    let car = Car::new(CarId(1), &config);
    let mut prompt = ConsolePrompt::new("".as_bytes(), Vec::new());

    let calls = prompt.car_calls(&car, &config).expect("nothing to ask");
    assert!(calls.is_empty());
}

#[test]
fn test_car_calls_reject_more_guests_than_aboard() {
    let config = BuildingConfig::default();
    let car = Car::new(CarId(1), &config).with_load(5);
    let mut prompt = ConsolePrompt::new("4 6\n3 3\n4 6\n3 2\n".as_bytes(), Vec::new());

    let calls = prompt.car_calls(&car, &config).expect("second attempt fits");
    assert_eq!(calls, vec![Demand::new(4, 3), Demand::new(6, 2)]);

    let output = String::from_utf8(prompt.into_output()).expect("utf8");
    assert!(output.contains("Car 1 State:"));
    assert!(output.contains("exceeds the 5 guests aboard"));
}
