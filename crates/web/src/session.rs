use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

/// Cookie carrying the user identifier between requests.
pub const USER_COOKIE: &str = "userId";

/// Derive the storage user id from a display name: lowercased, with all
/// whitespace stripped. "Anna Lindh" and "annalindh" are the same user.
pub fn derive_user_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// The already-validated user identifier for this request, if any.
///
/// Absence is not a rejection: unauthenticated requests reach the façade,
/// which answers with empty reads or a failure result. Redirecting to a
/// login page is the frontend's job.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<String>);

impl CurrentUser {
    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let user = jar
            .get(USER_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|id| !id.is_empty());

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_user_id_lowercases_and_strips_whitespace() {
        assert_eq!(derive_user_id("Anna Lindh"), "annalindh");
        assert_eq!(derive_user_id("  Bob\tSmith "), "bobsmith");
        assert_eq!(derive_user_id("carol"), "carol");
    }
}
