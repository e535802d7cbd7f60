pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, ArticleWithAuthor, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
