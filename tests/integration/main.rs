mod auth_tests;
mod common;
mod content_tests;
mod pipeline_tests;
