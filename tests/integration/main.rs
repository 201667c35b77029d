//! Integration tests for the library client

mod api_tests;
