#[cfg(test)]
mod credentials_tests;
