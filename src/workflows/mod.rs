pub mod matchers;
pub mod pairing;
pub mod renamer;
