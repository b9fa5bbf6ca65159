mod chain_test;
mod ccd_test;
