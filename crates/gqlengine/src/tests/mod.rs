mod subscription_tests;
mod utils;
