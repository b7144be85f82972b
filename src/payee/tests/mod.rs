//! Unit tests for the payee bounded context.

mod document_tests;
