mod pages_tests;
mod signup_flow_tests;
mod submit_api_tests;
