mod people;

pub use people::People;
