mod create;
mod delete;
mod service;
mod update;

pub use create::CreateAuthorCommand;
pub use delete::DeleteAuthorCommand;
pub use service::AuthorCommandService;
pub use update::UpdateAuthorCommand;
