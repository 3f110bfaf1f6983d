use edu_cms_client::utils::config::{get_env_or_default, get_env_or_none, get_first_env};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("EDU_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("EDU_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("EDU_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_trims_and_parses() {
    unsafe {
        env::set_var("EDU_TEST_VAR_INT", " 42 ");
        let result: u64 = get_env_or_default("EDU_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("EDU_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("EDU_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("EDU_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("EDU_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_treats_blank_as_missing() {
    unsafe {
        env::set_var("EDU_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("EDU_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("EDU_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_first_env_picks_first_present() {
    unsafe {
        env::remove_var("EDU_TEST_FIRST_A");
        env::set_var("EDU_TEST_FIRST_B", "http://b/api");
        env::set_var("EDU_TEST_FIRST_C", "http://c/api");
        let result = get_first_env(&["EDU_TEST_FIRST_A", "EDU_TEST_FIRST_B", "EDU_TEST_FIRST_C"]);
        assert_eq!(result.as_deref(), Some("http://b/api"));
        env::remove_var("EDU_TEST_FIRST_B");
        env::remove_var("EDU_TEST_FIRST_C");
    }
}
