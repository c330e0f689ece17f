//! Demo articles the blog front-end ships with.

use crate::article::{Article, Comment};

pub fn demo_articles() -> Vec<(String, Article)> {
    vec![
        (
            "learn-react".to_string(),
            Article::new(
                42,
                vec![
                    Comment::new("John Doe", "Great article!"),
                    Comment::new("Jane Smith", "Very helpful, thanks!"),
                ],
            ),
        ),
        (
            "learn-node".to_string(),
            Article::new(15, vec![Comment::new("Mike Johnson", "Excellent tutorial")]),
        ),
        ("my-thoughts-on-resumes".to_string(), Article::new(8, Vec::new())),
    ]
}
