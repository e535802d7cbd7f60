use crate::domain::errors::DomainError;

const CNT_AUTHOR_EMAIL: &str = "authors_email_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";

/// Translates driver errors into the domain taxonomy. Known constraints map
/// to precise outcomes; everything else stays a persistence failure so the
/// transport layer can answer with a generic 500.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_AUTHOR_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
