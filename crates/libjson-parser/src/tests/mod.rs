mod json_parser_tests;
mod property_tests;
mod scan_literal_tests;
