//! Tests for the 'db-dump' command
//!
//! The command validates database names, asks for confirmation when
//! interactive and dumps each database in the order given.

use rstest::rstest;
use test_utils::{
    BackupRequest, ConfigBuilder, DumpError, DumpManager, DumpOutcome, MockDumpGenerator,
    ScriptedConfirmation,
};

fn manager(
    generator: &MockDumpGenerator,
    confirmation: &ScriptedConfirmation,
) -> DumpManager<MockDumpGenerator, ScriptedConfirmation> {
    let config = ConfigBuilder::standard().build();
    DumpManager::new(config.databases, generator.clone(), confirmation.clone())
}

#[rstest]
#[case(vec!["bogus"])]
#[case(vec!["bogus", "main"])]
#[case(vec!["main", "bogus"])]
#[case(vec!["main", "quote", "sales", "bogus"])]
#[case(vec!["MAIN"])]
fn test_unknown_name_anywhere_blocks_every_dump(#[case] names: Vec<&str>) {
    let generator = MockDumpGenerator::new();
    let confirmation = ScriptedConfirmation::answering(true);

    let outcome = manager(&generator, &confirmation)
        .run(&BackupRequest::new(names, false), true)
        .unwrap();

    assert!(matches!(outcome, DumpOutcome::Rejected { .. }));
    assert!(generator.get_calls().is_empty());
    assert_eq!(confirmation.times_asked(), 0);
}

#[test]
fn test_rejection_lists_every_invalid_name() {
    let generator = MockDumpGenerator::new();
    let confirmation = ScriptedConfirmation::answering(true);

    let outcome = manager(&generator, &confirmation)
        .run(&BackupRequest::new(["x", "main", "y"], false), false)
        .unwrap();

    assert_eq!(
        outcome,
        DumpOutcome::Rejected {
            invalid: vec!["x".to_string(), "y".to_string()]
        }
    );
}

#[rstest]
#[case(vec!["main"])]
#[case(vec!["main", "quote"])]
#[case(vec!["sales", "quote", "main"])]
fn test_dumps_follow_input_order(#[case] names: Vec<&str>) {
    let generator = MockDumpGenerator::new();
    let confirmation = ScriptedConfirmation::answering(true);

    let outcome = manager(&generator, &confirmation)
        .run(&BackupRequest::new(names.clone(), false), false)
        .unwrap();

    assert_eq!(outcome, DumpOutcome::Completed { databases: names.len() });
    assert_eq!(generator.dumped(), names);
}

#[test]
fn test_declined_confirmation_dumps_nothing() {
    let generator = MockDumpGenerator::new();
    let confirmation = ScriptedConfirmation::answering(false);

    let outcome = manager(&generator, &confirmation)
        .run(&BackupRequest::new(["main", "quote"], true), true)
        .unwrap();

    assert_eq!(outcome, DumpOutcome::Declined);
    assert!(generator.get_calls().is_empty());
}

#[test]
fn test_accepted_confirmation_asks_once() {
    let generator = MockDumpGenerator::new();
    let confirmation = ScriptedConfirmation::answering(true);

    manager(&generator, &confirmation)
        .run(&BackupRequest::new(["main", "quote"], false), true)
        .unwrap();

    assert_eq!(confirmation.times_asked(), 1);
    let asked = confirmation.asked.lock().unwrap().clone();
    assert!(asked[0].contains("maintenance mode"));
    assert_eq!(generator.dumped(), vec!["main", "quote"]);
}

#[test]
fn test_non_interactive_proceeds_without_prompt() {
    let generator = MockDumpGenerator::new();
    // Would decline if asked
    let confirmation = ScriptedConfirmation::answering(false);

    let outcome = manager(&generator, &confirmation)
        .run(&BackupRequest::new(["quote"], false), false)
        .unwrap();

    assert_eq!(outcome, DumpOutcome::Completed { databases: 1 });
    assert_eq!(confirmation.times_asked(), 0);
}

#[test]
fn test_remove_definers_passed_to_every_dump() {
    let generator = MockDumpGenerator::new();
    let confirmation = ScriptedConfirmation::answering(true);

    manager(&generator, &confirmation)
        .run(&BackupRequest::new(["main", "sales"], true), false)
        .unwrap();

    assert!(generator.get_calls().iter().all(|c| c.remove_definers));
}

#[rstest]
#[case("main", vec!["main"])]
#[case("quote", vec!["main", "quote"])]
#[case("sales", vec!["main", "quote", "sales"])]
fn test_failure_stops_at_failing_database(#[case] failing: &str, #[case] attempted: Vec<&str>) {
    let generator = MockDumpGenerator::new().failing_on(failing);
    let confirmation = ScriptedConfirmation::answering(true);

    let err = manager(&generator, &confirmation)
        .run(&BackupRequest::new(["main", "quote", "sales"], false), false)
        .unwrap_err();

    match &err {
        DumpError::Execution { database, .. } => assert_eq!(database, failing),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("Access denied"));
    assert_eq!(generator.dumped(), attempted);
}

#[test]
fn test_all_request_covers_configured_databases() {
    let config = ConfigBuilder::new()
        .add_database("main", "default")
        .add_database("archive", "archive")
        .build();

    let request = BackupRequest::all(&config.databases, false);
    assert_eq!(request.databases, vec!["archive", "main"]);
}
