//! Configuration loading from `TMS_*` environment variables.

use anyhow::Result;
use tms_lists::{Config, ListName};

#[test]
fn test_load_from_environment() -> Result<()> {
    // Only this test touches TMS_* variables.
    std::env::set_var("TMS_API_URL", "https://tms.example.com/sites/tms/_api");
    std::env::set_var("TMS_REQUEST_TIMEOUT_SECS", "5");
    std::env::set_var("TMS_LISTS__COURSES", "c0ffee00-0000-0000-0000-000000000001");
    std::env::set_var("TMS_LISTS__GRADESHEET_TEMPLATES", "7e3a0000-0000-0000-0000-000000000002");

    let config = Config::load()?;

    assert_eq!(config.api_url, "https://tms.example.com/sites/tms/_api");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, 10);
    assert_eq!(
        config.lists.resolve(ListName::Courses)?.as_str(),
        "c0ffee00-0000-0000-0000-000000000001"
    );
    assert_eq!(
        config.lists.lookup("gradesheet-templates")?.as_str(),
        "7e3a0000-0000-0000-0000-000000000002"
    );
    assert!(config.lists.resolve(ListName::Personnel).is_err());

    // The client joins onto the root with a trailing slash.
    let client = tms_lists::ListClient::new(&config)?;
    assert_eq!(
        client.root().as_str(),
        "https://tms.example.com/sites/tms/_api/"
    );
    Ok(())
}
