mod scalars_tests;
mod utils;
