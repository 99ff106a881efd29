use std::fmt;

use sqlx::FromRow;

/// A row from the externally provisioned `users` table
///
/// Read-only: this service holds request-scoped copies only, discarded
/// once the response is written.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Email: {}", self.id, self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_line_format() {
        let user = User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        };
        assert_eq!(user.to_string(), "ID: 1, Name: Ann, Email: ann@x.com");
    }
}
