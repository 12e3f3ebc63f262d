mod keywords_tests;
mod lexer_tests;
mod rules_tests;
