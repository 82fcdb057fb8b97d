pub mod vocabulary;

pub use vocabulary::{Vocabulary, DEFAULT_WORDS};
