//! Router-level tests against the in-memory store.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use folio_site::{
    config::AppConfig,
    db::models::{Blog, Certificate, Portfolio, Testimonial},
    db::{Fixtures, MemoryStore},
    routes::build_router,
    state::AppState,
};

fn portfolio(id: i64, is_active: bool) -> Portfolio {
    Portfolio {
        id,
        date: None,
        name: format!("Project {:02}", id),
        description: Some(format!("Summary of project {:02}", id)),
        body: Some("<p>Case study</p>".to_string()),
        image: None,
        slug: Some(format!("project-{}", id)),
        is_active,
    }
}

fn blog(id: i64, is_active: bool) -> Blog {
    Blog {
        id,
        timestamp: Some("2024-03-05T10:00:00Z".parse().unwrap()),
        author: Some("Ada".to_string()),
        name: format!("Post {:02}", id),
        description: None,
        body: None,
        slug: Some(format!("post-{}", id)),
        image: None,
        is_active,
    }
}

fn app_with(fixtures: Fixtures) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(fixtures));
    let state = AppState::new(store.clone(), AppConfig::default()).unwrap();
    (build_router(state), store)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_shows_only_active_content() {
    let (app, _) = app_with(Fixtures {
        testimonials: vec![
            Testimonial {
                id: 1,
                name: "Grace".to_string(),
                role: Some("CTO".to_string()),
                quote: "Shipped on time".to_string(),
                thumbnail: None,
                is_active: true,
            },
            Testimonial {
                id: 2,
                name: "Hidden Client".to_string(),
                role: None,
                quote: "Should not appear".to_string(),
                thumbnail: None,
                is_active: false,
            },
        ],
        certificates: vec![Certificate {
            id: 1,
            date: None,
            name: "Cloud Academy".to_string(),
            title: "Solutions Architect".to_string(),
            description: None,
            is_active: true,
        }],
        blogs: vec![blog(1, true), blog(2, false)],
        portfolio: vec![portfolio(1, true), portfolio(2, false)],
        ..Default::default()
    });

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("Shipped on time"));
    assert!(!html.contains("Should not appear"));
    assert!(html.contains("Solutions Architect"));
    assert!(html.contains("Post 01"));
    assert!(!html.contains("Post 02"));
    assert!(html.contains("Project 01"));
    assert!(!html.contains("Project 02"));
}

#[tokio::test]
async fn index_renders_with_empty_store() {
    let (app, _) = app_with(Fixtures::default());
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No projects yet."));
}

#[tokio::test]
async fn portfolio_listing_contains_exactly_the_active_rows() {
    let (app, _) = app_with(Fixtures {
        portfolio: vec![portfolio(1, true), portfolio(2, false), portfolio(3, true)],
        ..Default::default()
    });

    let html = body_text(get(&app, "/portfolio").await).await;
    assert!(html.contains("data-id=\"1\""));
    assert!(!html.contains("data-id=\"2\""));
    assert!(html.contains("data-id=\"3\""));
    assert!(!html.contains("class=\"pagination\""));
}

#[tokio::test]
async fn portfolio_listing_paginates_by_ten() {
    let (app, _) = app_with(Fixtures {
        portfolio: (1..=25).map(|id| portfolio(id, true)).collect(),
        ..Default::default()
    });

    let first = body_text(get(&app, "/portfolio").await).await;
    assert_eq!(first.matches("class=\"card\"").count(), 10);
    assert!(first.contains("Project 01"));
    assert!(first.contains("Page 1 of 3"));

    let second = body_text(get(&app, "/portfolio?page=2").await).await;
    assert_eq!(second.matches("class=\"card\"").count(), 10);
    assert!(second.contains("Project 11"));
    assert!(second.contains("Project 20"));
    assert!(!second.contains("Project 10"));
    assert!(!second.contains("Project 21"));

    let last = body_text(get(&app, "/portfolio?page=last").await).await;
    assert_eq!(last.matches("class=\"card\"").count(), 5);
    assert!(last.contains("Page 3 of 3"));
}

#[tokio::test]
async fn listing_page_out_of_range_is_not_found() {
    let (app, _) = app_with(Fixtures {
        blogs: (1..=3).map(|id| blog(id, true)).collect(),
        ..Default::default()
    });

    assert_eq!(get(&app, "/blog?page=2").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/blog?page=0").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/blog?page=abc").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/blog?page=1").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn blog_listing_hides_inactive_posts() {
    let (app, _) = app_with(Fixtures {
        blogs: vec![blog(1, true), blog(2, false), blog(3, true)],
        ..Default::default()
    });

    let html = body_text(get(&app, "/blog").await).await;
    assert!(html.contains("data-id=\"1\""));
    assert!(!html.contains("data-id=\"2\""));
    assert!(html.contains("data-id=\"3\""));
    assert!(!html.contains("Post 02"));
}

#[tokio::test]
async fn empty_listing_has_a_first_page() {
    let (app, _) = app_with(Fixtures::default());
    let response = get(&app, "/blog").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No posts yet."));
}

#[tokio::test]
async fn detail_by_id_and_slug() {
    let (app, _) = app_with(Fixtures {
        blogs: vec![blog(4, true)],
        portfolio: vec![portfolio(9, true)],
        ..Default::default()
    });

    let response = get(&app, "/blog/4").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Post 04"));

    let response = get(&app, "/portfolio/project-9").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Project 09"));
    assert!(html.contains("<p>Case study</p>"));
}

#[tokio::test]
async fn detail_shows_inactive_rows() {
    let (app, _) = app_with(Fixtures {
        portfolio: vec![portfolio(2, false)],
        ..Default::default()
    });

    assert_eq!(get(&app, "/portfolio/2").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_detail_is_not_found() {
    let (app, _) = app_with(Fixtures::default());

    let response = get(&app, "/portfolio/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));

    assert_eq!(get(&app, "/blog/no-such-post").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_renders_404_page() {
    let (app, _) = app_with(Fixtures::default());
    let response = get(&app, "/about-us").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}

#[tokio::test]
async fn contact_form_renders() {
    let (app, _) = app_with(Fixtures::default());
    let response = get(&app, "/contact").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"email\""));
    assert!(!html.contains("field-error"));
}

#[tokio::test]
async fn valid_contact_submission_stores_once_and_redirects() {
    let (app, store) = app_with(Fixtures::default());

    let response = post_form(
        &app,
        "/contact",
        "name=Ada+Lovelace&email=ada%40example.com&message=Let%27s+talk",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let contacts = store.contacts().await;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ada Lovelace");
    assert_eq!(contacts[0].message, "Let's talk");

    // The redirect target shows the notice once and clears it.
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let home = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let cleared = home.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(cleared.contains("Max-Age=0"));
    assert!(body_text(home)
        .await
        .contains("Thank you. We will be in touch soon."));
}

#[tokio::test]
async fn invalid_contact_submission_stores_nothing() {
    let (app, store) = app_with(Fixtures::default());

    let response = post_form(&app, "/contact", "name=Ada&email=not-an-email&message=").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let html = body_text(response).await;
    assert!(html.contains("Enter a valid email address."));
    assert!(html.contains("This field is required."));
    assert!(html.contains("value=\"Ada\""));
    assert!(store.contacts().await.is_empty());
}

#[tokio::test]
async fn undecodable_flash_cookie_is_cleared() {
    let (app, _) = app_with(Fixtures::default());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/blog")
                .header(header::COOKIE, "folio_flash=%%%garbage")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cleared.starts_with("folio_flash=;"));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn health_endpoints() {
    let (app, _) = app_with(Fixtures::default());

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("\"ok\""));

    let response = get(&app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("\"memory\""));
}
