// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_APPLICATION_USER_VACANCY: &str = "applications_user_vacancy_key";
const CNT_APPLICATION_VACANCY: &str = "applications_vacancy_id_fkey";
const CNT_APPLICATION_RESUME: &str = "applications_resume_id_fkey";

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            match db_err.constraint() {
                Some(CNT_USER_EMAIL) => return DomainError::conflict("email already registered"),
                Some(CNT_APPLICATION_USER_VACANCY) => {
                    return DomainError::conflict("application for this vacancy already exists");
                }
                Some(CNT_APPLICATION_VACANCY) => return DomainError::not_found("vacancy not found"),
                Some(CNT_APPLICATION_RESUME) => return DomainError::not_found("resume not found"),
                _ => {}
            }

            // Unnamed constraints are classified by SQLSTATE.
            match db_err.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    DomainError::not_found("referenced record not found")
                }
                Some(UNIQUE_VIOLATION) => DomainError::conflict("unique constraint violated"),
                Some(CHECK_VIOLATION) => DomainError::validation("check constraint violated"),
                _ => match db_err.constraint() {
                    Some(other) => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                    None => DomainError::Persistence(db_err.message().to_string()),
                },
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Shared guard for `DELETE`/`UPDATE` statements that must hit exactly one row.
pub(super) fn expect_affected(rows: u64, what: &str) -> Result<(), DomainError> {
    if rows == 0 {
        Err(DomainError::NotFound(format!("{what} not found")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{borrow::Cow, error::Error as StdError, fmt};

    #[derive(Debug)]
    struct FakeDbError {
        code: &'static str,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "database error {}", self.code)
        }
    }

    impl StdError for FakeDbError {}

    impl sqlx::error::DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn db_error(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code, constraint }))
    }

    #[test]
    fn every_foreign_key_violation_is_not_found() {
        for constraint in [
            "vacancies_employer_id_fkey",
            "resumes_user_id_fkey",
            "applications_user_id_fkey",
            CNT_APPLICATION_VACANCY,
        ] {
            let mapped = map_sqlx(db_error(FOREIGN_KEY_VIOLATION, Some(constraint)));
            assert!(matches!(mapped, DomainError::NotFound(_)), "{constraint}");
        }
    }

    #[test]
    fn named_unique_constraints_are_conflicts() {
        let mapped = map_sqlx(db_error(UNIQUE_VIOLATION, Some(CNT_APPLICATION_USER_VACANCY)));
        assert!(matches!(mapped, DomainError::Conflict(_)));
    }

    #[test]
    fn unknown_failures_stay_persistence_errors() {
        let mapped = map_sqlx(db_error("40001", None));
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }
}
