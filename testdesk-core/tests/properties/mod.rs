mod location_tests;
mod pattern_tests;
mod route_table_tests;
