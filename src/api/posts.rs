//! Posts API handlers.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::{ApiResult, ErrorBody};
use crate::domain::posts::Post;

/// Query parameters for [`get_post`].
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostsQuery {
    /// Identifier of the post to fetch.
    #[param(example = "1")]
    pub id: String,
}

/// Response envelope wrapping the fetched post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    /// The requested post.
    pub post: Post,
}

/// Fetch a post by identifier.
#[utoipa::path(
    get,
    path = "/posts",
    params(PostsQuery),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 404, description = "No post with that identifier", body = ErrorBody)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts")]
pub async fn get_post(query: web::Query<PostsQuery>) -> ApiResult<web::Json<PostResponse>> {
    let post = crate::domain::posts::get_post(&query.id)?;
    Ok(web::Json(PostResponse { post }))
}
