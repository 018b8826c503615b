mod document_rules_tests;
mod utils;
