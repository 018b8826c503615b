mod graphql_parser_error_tests;
mod graphql_parser_location_tests;
mod graphql_parser_value_tests;
mod source_tests;
mod utils;
