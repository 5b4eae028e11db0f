//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Identifiers arriving from the domain are arbitrary strings; anything that
//! does not parse as a UUID cannot match a row, so lookups short-circuit to
//! `None` and deletes to zero without touching the database.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{UniqueUserField, UserPersistenceError, UserRepository};
use crate::domain::{Email, NewUser, User, UserId, Username};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Resolve which unique column a violation refers to.
///
/// Postgres names the default constraints `users_username_key` and
/// `users_email_key`; anything unrecognised is attributed to the username,
/// which is checked first on the way in.
fn unique_field_for(info: &dyn DatabaseErrorInformation) -> UniqueUserField {
    let constraint = info.constraint_name().or(info.column_name()).unwrap_or_default();
    if constraint.contains("email") {
        UniqueUserField::Email
    } else {
        UniqueUserField::Username
    }
}

fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            UserPersistenceError::unique_violation(unique_field_for(&*info))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_strings(row.id.to_string(), row.username, row.email).map_err(|err| {
        UserPersistenceError::query(format!("stored user {} is invalid: {err}", row.id))
    })
}

fn parse_id(id: &UserId) -> Option<Uuid> {
    Uuid::parse_str(id.as_ref()).ok()
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let Some(uuid) = parse_id(id) else {
            return Ok(None);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .filter(users::id.eq(uuid))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let username: &str = username.as_ref();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let email: &str = email.as_ref();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            username: user.username.as_ref(),
            email: user.email.as_ref(),
        };
        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(row)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<u64, UserPersistenceError> {
        let Some(uuid) = parse_id(id) else {
            return Ok(0);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(users::table.filter(users::id.eq(uuid)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(deleted).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping and row conversion; queries need a live database.

    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct StubInfo {
        constraint: Option<&'static str>,
        column: Option<&'static str>,
    }

    impl DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("users")
        }

        fn column_name(&self) -> Option<&str> {
            self.column
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, info: StubInfo) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(info))
    }

    #[rstest]
    #[case(Some("users_username_key"), None, UniqueUserField::Username)]
    #[case(Some("users_email_key"), None, UniqueUserField::Email)]
    #[case(None, Some("email"), UniqueUserField::Email)]
    #[case(None, None, UniqueUserField::Username)]
    fn unique_violation_maps_to_field(
        #[case] constraint: Option<&'static str>,
        #[case] column: Option<&'static str>,
        #[case] expected: UniqueUserField,
    ) {
        let error = map_diesel_error(database_error(
            DatabaseErrorKind::UniqueViolation,
            StubInfo { constraint, column },
        ));

        assert_eq!(error, UserPersistenceError::unique_violation(expected));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let error = map_diesel_error(database_error(
            DatabaseErrorKind::ClosedConnection,
            StubInfo {
                constraint: None,
                column: None,
            },
        ));

        assert!(matches!(error, UserPersistenceError::Connection { .. }));
    }

    #[rstest]
    #[case(DieselError::NotFound)]
    #[case(DieselError::RollbackTransaction)]
    fn other_errors_map_to_query_error(#[case] error: DieselError) {
        assert!(matches!(
            map_diesel_error(error),
            UserPersistenceError::Query { .. }
        ));
    }

    #[rstest]
    fn pool_errors_map_to_connection_error() {
        let error = map_pool_error(PoolError::checkout("timed out"));

        assert_eq!(error, UserPersistenceError::connection("timed out"));
    }

    #[rstest]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", true)]
    #[case("not-a-uuid", false)]
    #[case("42", false)]
    fn only_uuid_identifiers_reach_the_database(#[case] raw: &str, #[case] parses: bool) {
        let id = UserId::new(raw).expect("non-empty id");

        assert_eq!(parse_id(&id).is_some(), parses);
    }

    #[rstest]
    fn row_converts_to_domain_user() {
        let id = Uuid::new_v4();
        let user = row_to_user(UserRow {
            id,
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
        })
        .expect("valid row");

        assert_eq!(user.id().as_ref(), id.to_string());
        assert_eq!(user.username().as_ref(), "ada");
        assert_eq!(user.email().as_ref(), "ada@example.com");
    }

    #[rstest]
    fn blank_stored_username_is_a_query_error() {
        let error = row_to_user(UserRow {
            id: Uuid::new_v4(),
            username: "   ".to_owned(),
            email: "ada@example.com".to_owned(),
        })
        .expect_err("blank username rejected");

        assert!(matches!(error, UserPersistenceError::Query { .. }));
    }
}
