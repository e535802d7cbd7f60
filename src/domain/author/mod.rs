pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Author, AuthorUpdate, AuthorWithArticles, NewAuthor};
pub use repository::{AuthorReadRepository, AuthorWriteRepository};
pub use value_objects::{AuthorEmail, AuthorId, AuthorName};
