mod literal_tests;
mod utils;
