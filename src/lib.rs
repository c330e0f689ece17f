pub mod article;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use article::{Article, Comment, NewComment};
pub use config::Config;
pub use error::RestError;
pub use store::ArticleStore;
