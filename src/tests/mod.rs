// Test modules for ai302-node crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

// Core unit tests (template compliant)
pub mod chat;
pub mod config;

// NOTE: HTTP-level tests live in the tests/ directory. They use wiremock's
// MockServer and are slow, so they don't belong in unit tests.
