//! Blog post handlers.

use actix_web::{HttpRequest, HttpResponse, http::header, web};

use blogpost_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::validation::ValidatedJson;
use crate::state::AppState;

/// Route name used to build the `Location` of a created post.
pub const GET_POST_ROUTE: &str = "get_blog_post_by_id";

/// GET /blogPosts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Fetching all blog posts");

    let posts = state
        .posts
        .list()
        .await
        .map_err(|e| AppError::service(e, "Failed to fetch blog posts."))?;

    tracing::info!(count = posts.len(), "Fetched blog posts");
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blogPosts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(id, "Fetching blog post");

    let post = state
        .posts
        .get(id)
        .await
        .map_err(|e| AppError::service(e, format!("Failed to fetch blog post with ID {id}.")))?;

    match post {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => {
            tracing::warn!(id, "Blog post not found");
            Err(AppError::post_not_found(id))
        }
    }
}

/// POST /blogPosts
pub async fn create_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: ValidatedJson<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    tracing::info!("Creating a new blog post");

    let post = state
        .posts
        .add(body.into_inner())
        .await
        .map_err(|e| AppError::service(e, "Failed to create a new blog post."))?;

    let location = req
        .url_for(GET_POST_ROUTE, [post.id.to_string()])
        .map_err(|e| AppError::Internal(format!("Failed to build post location: {e}")))?;

    tracing::info!(id = post.id, "Blog post created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .json(PostResponse::from(post)))
}

/// PUT /blogPosts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: ValidatedJson<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(id, "Updating blog post");

    state
        .posts
        .update(id, body.into_inner())
        .await
        .map_err(|e| AppError::service(e, format!("Failed to update blog post with ID {id}.")))?;

    tracing::info!(id, "Blog post updated");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blogPosts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(id, "Deleting blog post");

    let deleted = state
        .posts
        .delete(id)
        .await
        .map_err(|e| AppError::service(e, format!("Failed to delete blog post with ID {id}.")))?;

    if !deleted {
        tracing::warn!(id, "Blog post not found");
        return Err(AppError::post_not_found(id));
    }

    tracing::info!(id, "Blog post deleted");
    Ok(HttpResponse::NoContent().finish())
}
