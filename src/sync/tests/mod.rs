//! Unit and service tests for task reconciliation.

mod domain_tests;
