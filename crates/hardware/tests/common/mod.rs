//! Shared test infrastructure: program builders and the execution harness.
