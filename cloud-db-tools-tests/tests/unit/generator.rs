//! Tests for the shell dump generator

use cloud_db_tools::generators::{DumpGenerator, ShellDumpGenerator};
use rstest::rstest;
use test_utils::{ConfigBuilder, DatabaseEntry, MockExecutor};

#[rstest]
#[case("main", false, "dump default")]
#[case("quote", false, "dump checkout")]
#[case("sales", true, "dump sales | strip")]
fn test_generator_commands(
    #[case] database: &str,
    #[case] remove_definers: bool,
    #[case] expected: &str,
) {
    let (config, _temp) = ConfigBuilder::standard()
        .with_dump_command("dump {connection}{definer_filter}")
        .persist();
    let mut dump = config.dump.clone();
    dump.definer_filter = "strip".to_string();

    let executor = MockExecutor::new();
    let generator = ShellDumpGenerator::with_executor(dump, config.databases.clone(), executor.clone());

    generator.create(database, remove_definers).unwrap();

    assert_eq!(executor.command_lines(), vec![expected.to_string()]);
}

#[test]
fn test_generator_creates_output_dir() {
    let builder = ConfigBuilder::standard().with_dump_command("true");
    let dump_dir = builder.dump_dir();
    let (config, _temp) = builder.persist();
    assert!(!dump_dir.exists());

    let generator =
        ShellDumpGenerator::with_executor(config.dump, config.databases, MockExecutor::new());
    generator.create("main", false).unwrap();

    assert!(dump_dir.is_dir());
}

#[test]
fn test_generator_timestamp_placeholder() {
    let (config, _temp) = ConfigBuilder::standard().persist();
    let generator =
        ShellDumpGenerator::with_executor(config.dump, config.databases, MockExecutor::new());

    let entry = DatabaseEntry::new("default", "default");
    let rendered = generator.render_command("main", &entry, false, "2025_01_31_235959");

    assert!(rendered.contains("main_dump_2025_01_31_235959.sql.gz"));
    assert!(rendered.contains("--defaults-group-suffix=_default"));
    assert!(!rendered.contains("DEFINER"));
}

#[cfg(unix)]
#[test]
fn test_real_shell_generator_writes_dump() {
    let builder = ConfigBuilder::standard()
        .with_dump_command("echo '/*!50017 DEFINER=`root`@`%`*/ TRIGGER t'{definer_filter} > {output_dir}/{database}.sql");
    let dump_dir = builder.dump_dir();
    let (config, _temp) = builder.persist();

    let generator = ShellDumpGenerator::new(config.dump, config.databases);
    generator.create("quote", true).unwrap();

    let dump = std::fs::read_to_string(dump_dir.join("quote.sql")).unwrap();
    assert!(!dump.contains("DEFINER"));
    assert!(dump.contains("TRIGGER t"));
}
