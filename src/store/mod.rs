pub mod seed;

use std::collections::{hash_map::Entry as MapEntry, HashMap};

use tokio::sync::Mutex;
use tracing::debug;

use crate::article::{Article, Comment};

/// In-memory article store keyed by the identifier taken from the request path.
///
/// A single lock guards the whole map, so every operation is one atomic
/// read-modify-write. Writes to an unseen identifier create the article;
/// reads never do.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Mutex<HashMap<String, Article>>,
}

/// Whether a write landed on an existing article or created a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Existing,
    Created,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo articles from [`seed::demo_articles`].
    pub fn with_demo_articles() -> Self {
        Self::from_articles(seed::demo_articles())
    }

    pub fn from_articles(articles: impl IntoIterator<Item = (String, Article)>) -> Self {
        Self {
            articles: Mutex::new(articles.into_iter().collect()),
        }
    }

    /// Returns the stored article, or a zero-value article without inserting it.
    pub async fn get(&self, id: &str) -> Article {
        let articles = self.articles.lock().await;
        articles.get(id).cloned().unwrap_or_default()
    }

    pub async fn upvote(&self, id: &str) -> Article {
        self.upvote_entry(id).await.0
    }

    pub async fn add_comment(&self, id: &str, comment: Comment) -> Article {
        self.add_comment_entry(id, comment).await.0
    }

    /// Upvote, also reporting whether the article was created by this call.
    ///
    /// A newly created article starts at zero and is upvoted once, so it
    /// comes back with a single upvote.
    pub async fn upvote_entry(&self, id: &str) -> (Article, Entry) {
        let mut articles = self.articles.lock().await;
        let (article, entry) = get_or_insert(&mut articles, id);
        article.upvote();

        debug!("upvoted {id:?} ({entry:?}), now {} upvotes", article.upvotes);
        (article.clone(), entry)
    }

    /// Append a comment, also reporting whether the article was created by this call.
    pub async fn add_comment_entry(&self, id: &str, comment: Comment) -> (Article, Entry) {
        let mut articles = self.articles.lock().await;
        let (article, entry) = get_or_insert(&mut articles, id);
        article.push_comment(comment);

        debug!(
            "comment added to {id:?} ({entry:?}), now {} comments",
            article.comment_count()
        );
        (article.clone(), entry)
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.articles.lock().await.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.articles.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.lock().await.is_empty()
    }
}

fn get_or_insert<'a>(
    articles: &'a mut HashMap<String, Article>,
    id: &str,
) -> (&'a mut Article, Entry) {
    match articles.entry(id.to_string()) {
        MapEntry::Occupied(occupied) => (occupied.into_mut(), Entry::Existing),
        MapEntry::Vacant(vacant) => (vacant.insert(Article::default()), Entry::Created),
    }
}
