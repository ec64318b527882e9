pub mod client;
pub mod context;
pub mod refresher;
pub mod store;

pub use client::{ArticleSource, BackendClient};
pub use context::{build_context, NO_ARTICLES};
pub use refresher::Refresher;
pub use store::ContextStore;

pub mod prelude {
    pub use crate::{build_context, ArticleSource, BackendClient, ContextStore, Refresher};
    pub use nc_core::{Article, Error, Result};
}
