pub mod articles;
pub mod authors;

pub use articles::{ArticleDto, ArticleSummaryDto};
pub use authors::{AuthorDetailDto, AuthorDto};
