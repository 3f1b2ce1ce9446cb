//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_shared::dto::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::validation;

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let data = validation::new_post(body.into_inner())?;
    let post = state.posts.create(data).await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// GET /posts?page&searchKey&sortBy&sortOrder
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let filter = validation::list_filter(query.into_inner())?;
    let page = state.posts.get_all(filter).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let changes = validation::post_changes(body.into_inner())?;
    let post = state.posts.update(path.into_inner(), changes).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.delete(path.into_inner()).await?;

    tracing::info!(post_id = %post.id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use quill_core::domain::NewPost;
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    use super::*;

    async fn seed(state: &AppState, title: &str, content: &str) -> Uuid {
        state
            .posts
            .create(NewPost {
                title: title.into(),
                content: content.into(),
            })
            .await
            .unwrap()
            .id
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_post() {
        let state = AppState::in_memory();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": "Post 1", "content": "Post 1 content"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Post 1");
        assert_eq!(body["content"], "Post 1 content");
        assert!(body["createdAt"].is_string());
        assert!(body["updatedAt"].is_string());

        let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
        let fetched = state.posts.get(id).await.unwrap();
        assert_eq!(fetched.title, "Post 1");
    }

    #[actix_web::test]
    async fn test_create_post_missing_title_persists_nothing() {
        let state = AppState::in_memory();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"content": "This is the content without a title."}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"details": [{"field": "title", "message": "Title is required"}]})
        );

        let page = state.posts.get_all(Default::default()).await.unwrap();
        assert_eq!(page.pagination.total, 0);
    }

    #[actix_web::test]
    async fn test_create_post_malformed_body() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"title": 5, "content": "x"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["field"], "body");
    }

    #[actix_web::test]
    async fn test_list_posts_empty() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::get().uri("/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"], json!([]));
        assert_eq!(
            body["pagination"],
            json!({"total": 0, "totalPages": 0, "currentPage": 1})
        );
    }

    #[actix_web::test]
    async fn test_list_posts_second_page() {
        let state = AppState::in_memory();
        for i in 1..=11 {
            seed(&state, &format!("Post {i}"), &format!("Post {i} content")).await;
        }
        let app = app!(state);

        let req = test::TestRequest::get().uri("/posts?page=2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(
            body["pagination"],
            json!({"total": 11, "totalPages": 2, "currentPage": 2})
        );
    }

    #[actix_web::test]
    async fn test_list_posts_search() {
        let state = AppState::in_memory();
        seed(&state, "Post_1", "Post 1 content").await;
        seed(&state, "Post_2", "Post 2 content").await;
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/posts?searchKey=Post_1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["title"], "Post_1");
        assert_eq!(body["pagination"]["total"], 1);
    }

    #[actix_web::test]
    async fn test_list_posts_sorted_by_title() {
        let state = AppState::in_memory();
        for title in ["Post 2", "Post 3", "Post 1"] {
            seed(&state, title, "content").await;
        }
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/posts?sortBy=title&sortOrder=desc")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let titles: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Post 3", "Post 2", "Post 1"]);
    }

    #[actix_web::test]
    async fn test_list_posts_invalid_sort_by() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::get()
            .uri("/posts?sortBy=invalidColumn")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"details": [{"field": "sortBy", "message": "sortBy is not valid"}]})
        );
    }

    #[actix_web::test]
    async fn test_list_posts_huge_page_is_rejected() {
        let state = AppState::in_memory();
        seed(&state, "Post 1", "Post 1 content").await;
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/posts?page=18446744073709551615")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"details": [{"field": "page", "message": "page must be a positive integer"}]})
        );
    }

    #[actix_web::test]
    async fn test_create_post_empty_body_reports_title_first() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"details": [
                {"field": "title", "message": "Title is required"},
                {"field": "content", "message": "Content is required"}
            ]})
        );
    }

    #[actix_web::test]
    async fn test_get_post() {
        let state = AppState::in_memory();
        let id = seed(&state, "Post 1", "Post 1 content").await;
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["title"], "Post 1");
        assert_eq!(body["content"], "Post 1 content");
    }

    #[actix_web::test]
    async fn test_get_post_not_found() {
        let app = app!(AppState::in_memory());

        for uri in [
            "/posts/example-non-existent-id".to_string(),
            format!("/posts/{}", Uuid::now_v7()),
        ] {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"message": "Resource not found"}));
        }
    }

    #[actix_web::test]
    async fn test_update_post() {
        let state = AppState::in_memory();
        let id = seed(&state, "Post 1", "Post 1 content").await;
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/posts/{id}"))
            .set_json(json!({"title": "Post 1 updated", "content": "Post 1 content updated"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = state.posts.get(id).await.unwrap();
        assert_eq!(stored.title, "Post 1 updated");
        assert_eq!(stored.content, "Post 1 content updated");
    }

    #[actix_web::test]
    async fn test_update_post_partial() {
        let state = AppState::in_memory();
        let id = seed(&state, "Post 1", "Post 1 content").await;
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/posts/{id}"))
            .set_json(json!({"content": "only the content"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["title"], "Post 1");
        assert_eq!(body["content"], "only the content");
    }

    #[actix_web::test]
    async fn test_update_post_not_found() {
        let state = AppState::in_memory();
        let existing = seed(&state, "Post 1", "Post 1 content").await;
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/posts/{}", Uuid::now_v7()))
            .set_json(json!({"title": "Non Existent", "content": "Post"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let stored = state.posts.get(existing).await.unwrap();
        assert_eq!(stored.title, "Post 1");
    }

    #[actix_web::test]
    async fn test_update_post_invalid_data() {
        let state = AppState::in_memory();
        let id = seed(&state, "Valid Post Title", "Valid Content").await;
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/posts/{id}"))
            .set_json(json!({"title": "Invalid Post Title", "content": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let stored = state.posts.get(id).await.unwrap();
        assert_eq!(stored.title, "Valid Post Title");
        assert_eq!(stored.content, "Valid Content");
    }

    #[actix_web::test]
    async fn test_delete_post_then_get() {
        let state = AppState::in_memory();
        let id = seed(&state, "Post to Delete", "Content to delete").await;
        let app = app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/posts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_post_not_found() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::delete()
            .uri("/posts/example-non-existent-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Resource not found");
    }
}
