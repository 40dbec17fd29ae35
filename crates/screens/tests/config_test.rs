use gobarber_screens::{config::parse_log_level, screens::create_appointment::Platform};
use rstest::rstest;
use tracing::Level;

#[rstest]
#[case("trace", Level::TRACE)]
#[case("debug", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}

#[rstest]
#[case("android", Some(Platform::Android))]
#[case(" iOS ", Some(Platform::Ios))]
#[case("windows", None)]
fn test_platform(#[case] value: &str, #[case] expected: Option<Platform>) {
    assert_eq!(Platform::parse(value), expected);
}
