mod completion_tests;
mod execute_tests;
mod utils;
