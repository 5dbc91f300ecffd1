//! Post lookup.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, DomainResult};

/// Fixture posts served by the demo. Lookups outside this table fail with
/// [`DomainError::NotFound`].
const SEED_POSTS: &[(&str, &str)] = &[("1", "Hello World")];

/// A published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Post identifier.
    #[schema(example = "1")]
    pub id: String,
    /// Post title.
    #[schema(example = "Hello World")]
    pub title: String,
}

/// Fetch the post with the given identifier.
///
/// # Errors
/// Returns [`DomainError::NotFound`] when no post has that identifier.
///
/// # Examples
/// ```
/// use postboard::domain::posts::get_post;
///
/// let post = get_post("1")?;
/// assert_eq!(post.title, "Hello World");
/// # Ok::<(), postboard::domain::DomainError>(())
/// ```
pub fn get_post(id: &str) -> DomainResult<Post> {
    SEED_POSTS
        .iter()
        .find(|(post_id, _)| *post_id == id)
        .map(|(post_id, title)| Post {
            id: (*post_id).to_owned(),
            title: (*title).to_owned(),
        })
        .ok_or_else(DomainError::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_returns_the_post() {
        let post = get_post("1").expect("post 1 exists");
        assert_eq!(
            post,
            Post {
                id: "1".to_owned(),
                title: "Hello World".to_owned(),
            }
        );
    }

    #[test]
    fn unknown_id_fails_with_not_found() {
        let error = get_post("2").expect_err("post 2 does not exist");
        assert_eq!(error, DomainError::not_found());
        assert_eq!(error.status(), 404);
    }

    #[test]
    fn empty_id_fails_with_not_found() {
        assert_eq!(get_post("").expect_err("no empty id").status(), 404);
    }
}
