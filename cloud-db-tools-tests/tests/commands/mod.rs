//! Command tests for cloud-db-tools
//!
//! These tests verify command behavior using mocked dependencies.

mod db_dump;
mod validate;
