mod cli_test;
mod race_test;
