// Exercise scenario: built-in seed driven through the whole roster lifecycle

use chrono::NaiveDate;
use roster_core::application::RosterService;
use roster_core::domain::Role;
use roster_core::port::FixedTimeProvider;
use roster_core::RosterError;
use roster_infra_seed::StaticSeedSource;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service() -> RosterService {
    RosterService::new(
        Arc::new(StaticSeedSource::new()),
        Arc::new(FixedTimeProvider(date(2026, 10, 16))),
    )
}

#[test]
fn test_exercise_sequence() {
    let mut service = service();

    // 1. Load
    assert_eq!(service.load().unwrap(), 10);

    // 2. Remove João
    service.remove("João").unwrap();
    assert_eq!(service.len(), 9);
    assert!(service
        .list_all()
        .unwrap()
        .iter()
        .all(|e| e.name() != "João"));

    // 3. Raise 10%
    service.apply_raise(dec!(10)).unwrap();
    let caio = service
        .list_all()
        .unwrap()
        .iter()
        .find(|e| e.name() == "Caio")
        .cloned()
        .unwrap();
    assert_eq!(caio.salary(), dec!(10819.75));

    // 4. Group and list
    service.group_by_role().unwrap();
    let lines = service.list_grouped().unwrap().lines();
    let roles: Vec<Role> = lines.iter().map(|line| line.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Operator,
            Role::Coordinator,
            Role::Director,
            Role::Receptionist,
            Role::Accountant,
            Role::Manager,
            Role::Electrician,
        ]
    );
    assert_eq!(lines[0].names, vec!["Maria", "Heitor"]);
    assert_eq!(lines[5].names, vec!["Laura", "Helena"]);

    // 5. October / December birthdays: João was removed
    let birthdays = service.list_birthdays_in_months(&[10, 12]).unwrap();
    let names: Vec<&str> = birthdays.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Maria", "Miguel"]);
    assert_eq!(birthdays[1].birth_date, date(1988, 10, 14));

    // 6. Oldest
    let oldest = service.oldest_employee().unwrap();
    assert_eq!(oldest.name, "Caio");
    assert_eq!(oldest.age, 65);

    // 7. Alphabetical
    let sorted: Vec<String> = service
        .list_alphabetical()
        .unwrap()
        .iter()
        .map(|e| e.name().to_string())
        .collect();
    assert_eq!(
        sorted,
        vec!["Alice", "Arthur", "Caio", "Heitor", "Helena", "Heloísa", "Laura", "Maria", "Miguel"]
    );

    // 8. Total (each salary rounded before summing)
    assert_eq!(service.total_salary().unwrap(), dec!(50906.82));

    // 9. Minimum wages
    let wages = service.salary_in_minimum_wages(dec!(1212.00)).unwrap();
    assert_eq!(wages.len(), 9);
    let miguel = wages.iter().find(|w| w.name == "Miguel").unwrap();
    assert_eq!(miguel.salary, dec!(21031.87));
    assert_eq!(miguel.multiple, dec!(17.35));
}

#[test]
fn test_birthdays_before_removal() {
    let mut service = service();
    service.load().unwrap();

    let names: Vec<String> = service
        .list_birthdays_in_months(&[10, 12])
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Maria", "Miguel"]);

    // João is May-born in the seed table
    let may: Vec<String> = service
        .list_birthdays_in_months(&[5])
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(may, vec!["João", "Caio", "Heloísa"]);
}

#[test]
fn test_load_twice_fails() {
    let mut service = service();
    service.load().unwrap();
    assert_eq!(service.load().unwrap_err(), RosterError::AlreadyLoaded);
}

#[test]
fn test_remove_everyone_then_reload_is_not_supported() {
    let mut service = service();
    service.load().unwrap();

    let names: Vec<String> = service
        .list_all()
        .unwrap()
        .iter()
        .map(|e| e.name().to_string())
        .collect();
    for name in names {
        service.remove(&name).unwrap();
    }

    assert_eq!(service.list_all().unwrap_err(), RosterError::EmptyRoster);
    assert_eq!(service.load().unwrap_err(), RosterError::AlreadyLoaded);

    service.reset();
    assert_eq!(service.load().unwrap(), 10);
}
