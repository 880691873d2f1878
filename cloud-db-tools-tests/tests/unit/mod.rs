//! Unit tests for cloud-db-tools building blocks

mod generator;
