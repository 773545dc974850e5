//! Post handlers.

use actix_web::{HttpResponse, web};

use cryptoblog_shared::dto::{AddPostRequest, PostDto};
use cryptoblog_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostDto> = posts.into_iter().map(PostDto::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/posts
pub async fn add_post(
    state: web::Data<AppState>,
    body: web::Json<AddPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(
            missing
                .into_iter()
                .map(|field| format!("{field} is required"))
                .collect(),
        ));
    }

    state
        .posts
        .append(&req.title, &req.body, &req.author)
        .await?;

    tracing::info!(author = %req.author, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message((), "Post created")))
}
