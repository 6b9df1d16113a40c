//! Test helpers for BDD tests
