use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "blog-api")]
#[command(about = "In-memory REST API for blog article upvotes and comments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Config {
    #[arg(long, env = "BLOG_API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "BLOG_API_PORT", default_value = "8000")]
    pub port: u16,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, env = "BLOG_API_DEBUG")]
    pub debug: bool,

    /// Start with the demo articles instead of an empty store
    #[arg(long, env = "BLOG_API_SEED_DEMO")]
    pub seed_demo: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_filter(&self) -> String {
        let level = if self.debug { "debug" } else { "info" };
        format!("blog_api={level},tower_http=info")
    }
}
