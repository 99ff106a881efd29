use axum::extract::State;
use futures::TryStreamExt;
use usersvc_core::error::Result;

use crate::{models::User, AppState};

/// List every row of the `users` table as plain text
///
/// Consumes the row cursor incrementally. Any failure, whether a row
/// decode error or one surfacing only at end-of-stream (e.g. a dropped
/// connection mid-scan), aborts the request: the error propagates, is
/// logged, and the client receives an opaque 500 with no partial rows.
/// Ordering is whatever the database returns; there is no ORDER BY.
pub async fn list_users(State(state): State<AppState>) -> Result<String> {
    let mut rows =
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users").fetch(&state.db);

    let mut users = Vec::new();
    while let Some(user) = rows.try_next().await? {
        users.push(user);
    }

    tracing::debug!("Listed {} user(s)", users.len());

    Ok(render_users(&users))
}

/// Render users as newline-terminated lines, or the fixed no-users message
pub fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found in the database.\n".to_string();
    }

    let mut body = String::new();
    for user in users {
        body.push_str(&user.to_string());
        body.push('\n');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_in_result_order() {
        let users = vec![
            User {
                id: 1,
                name: "Ann".to_string(),
                email: "ann@x.com".to_string(),
            },
            User {
                id: 2,
                name: "Bo".to_string(),
                email: "bo@x.com".to_string(),
            },
        ];
        assert_eq!(
            render_users(&users),
            "ID: 1, Name: Ann, Email: ann@x.com\nID: 2, Name: Bo, Email: bo@x.com\n"
        );
    }

    #[test]
    fn empty_table_yields_fixed_message() {
        assert_eq!(render_users(&[]), "No users found in the database.\n");
    }

    #[test]
    fn single_row_has_trailing_newline() {
        let users = vec![User {
            id: 7,
            name: "Cy".to_string(),
            email: "cy@x.com".to_string(),
        }];
        assert_eq!(render_users(&users), "ID: 7, Name: Cy, Email: cy@x.com\n");
    }
}
