pub mod people;

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;
