pub mod types;

pub use types::{Article, Comment, NewComment};
