use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    api::models::books::{
        BookResponse, BookSummaryQuery, BookSummaryResponse, RecommendationsQuery, ScrapeReport,
    },
    catalogue,
    db::handlers::{books::BookFilter, Books, Repository},
    errors::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/scrape-books",
    tag = "books",
    summary = "Scrape the whole catalogue",
    responses(
        (status = 200, description = "Catalogue scraped and persisted", body = ScrapeReport),
        (status = 500, description = "Scrape failed; nothing was persisted")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn scrape_books(State(state): State<AppState>) -> Result<Json<ScrapeReport>> {
    // The walk buffers everything; a failure on any page surfaces here and
    // nothing reaches the database.
    let records =
        catalogue::scrape::scrape_catalogue(&state.http, &state.config.catalogue.base_url).await?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Books::new(&mut conn);
    let inserted = repo.insert_many(&records).await?;

    Ok(Json(ScrapeReport { inserted }))
}

#[utoipa::path(
    get,
    path = "/recommendations",
    tag = "books",
    summary = "List recommended books",
    params(RecommendationsQuery),
    responses(
        (status = 200, description = "Books matching the filters", body = Vec<BookResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<Vec<BookResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Books::new(&mut conn);

    let filter = BookFilter {
        category: query.category,
        price_min: query.price_min,
        price_max: query.price_max,
    };
    let books = repo.list(&filter).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/books/summary",
    tag = "books",
    summary = "Summarize one catalogue book",
    params(BookSummaryQuery),
    responses(
        (status = 200, description = "Generated summary", body = BookSummaryResponse),
        (status = 400, description = "URL is outside the catalogue"),
        (status = 404, description = "Book page unreachable"),
        (status = 500, description = "Extraction or summarization failed")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_book_summary(
    State(state): State<AppState>,
    Query(query): Query<BookSummaryQuery>,
) -> Result<Json<BookSummaryResponse>> {
    let summary = catalogue::summary::summarize_book(
        &state.http,
        &state.config.catalogue.base_url,
        &state.config.summarizer,
        &query.book_url,
    )
    .await?;

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, create_test_app_with_config, create_test_config};
    use serde_json::json;
    use sqlx::SqlitePool;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Render a catalogue listing page with `count` products, optionally
    /// linking to a next page.
    fn listing_page(count: usize, first_index: usize, next: Option<&str>) -> String {
        let mut items = String::new();
        for i in 0..count {
            let n = first_index + i;
            items.push_str(&format!(
                r#"<li><article class="product_pod">
                    <h3><a href="book-{n}_1/index.html" title="Book {n}">Book {n}...</a></h3>
                    <div class="product_price">
                      <p class="price_color">£{}.99</p>
                      <p class="instock availability"><i class="icon-ok"></i> In stock </p>
                    </div>
                   </article></li>"#,
                10 + n
            ));
        }
        let pager = match next {
            Some(href) => format!(r#"<ul class="pager"><li class="next"><a href="{href}">next</a></li></ul>"#),
            None => String::new(),
        };
        format!("<html><body><ol class=\"row\">{items}</ol>{pager}</body></html>")
    }

    async fn app_against(pool: SqlitePool, catalogue: &MockServer, summarizer: Option<&MockServer>) -> axum_test::TestServer {
        let mut config = create_test_config();
        config.catalogue.base_url = Url::parse(&catalogue.uri()).expect("mock server URL");
        if let Some(summarizer) = summarizer {
            config.summarizer.api_base = Url::parse(&summarizer.uri()).expect("mock server URL");
        }
        create_test_app_with_config(pool, config).await
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_scrape_books_walks_all_pages(pool: SqlitePool) {
        let catalogue = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalogue/page-1.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(20, 0, Some("page-2.html"))))
            .mount(&catalogue)
            .await;
        Mock::given(method("GET"))
            .and(path("/catalogue/page-2.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(20, 20, None)))
            .mount(&catalogue)
            .await;

        let app = app_against(pool, &catalogue, None).await;

        let response = app.post("/scrape-books").await;
        response.assert_status_ok();
        let report: ScrapeReport = response.json();
        assert_eq!(report.inserted, 40);

        let books: Vec<BookResponse> = app.get("/recommendations").await.json();
        assert_eq!(books.len(), 40);
        assert!(books.iter().all(|b| b.category == "Unknown"));
        assert!(books.iter().all(|b| b.availability == "In stock"));
    }

    // All-or-nothing buffering: a failing page aborts the walk and nothing
    // already scraped is persisted.
    #[sqlx::test]
    #[test_log::test]
    async fn test_scrape_failure_discards_partial_progress(pool: SqlitePool) {
        let catalogue = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalogue/page-1.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(20, 0, Some("page-2.html"))))
            .mount(&catalogue)
            .await;
        Mock::given(method("GET"))
            .and(path("/catalogue/page-2.html"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&catalogue)
            .await;

        let app = app_against(pool, &catalogue, None).await;

        let response = app.post("/scrape-books").await;
        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        let books: Vec<BookResponse> = app.get("/recommendations").await.json();
        assert!(books.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_recommendation_filters(pool: SqlitePool) {
        {
            let mut conn = pool.acquire().await.unwrap();
            let mut repo = Books::new(&mut conn);
            for (title, price, category) in [
                ("cheap", 5.0, "Unknown"),
                ("edge-low", 10.0, "Unknown"),
                ("edge-high", 20.0, "Poetry"),
                ("expensive", 42.0, "Poetry"),
            ] {
                repo.create(&crate::db::models::books::BookCreateDBRequest {
                    title: title.to_string(),
                    price,
                    category: category.to_string(),
                    availability: "In stock".to_string(),
                })
                .await
                .unwrap();
            }
        }
        let app = create_test_app(pool).await;

        // Inclusive on both price bounds
        let books: Vec<BookResponse> = app
            .get("/recommendations")
            .add_query_param("price_min", 10.0)
            .add_query_param("price_max", 20.0)
            .await
            .json();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["edge-low", "edge-high"]);

        // Category is an equality filter, combinable with price
        let books: Vec<BookResponse> = app
            .get("/recommendations")
            .add_query_param("category", "Poetry")
            .add_query_param("price_max", 30.0)
            .await
            .json();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "edge-high");
    }

    const BOOK_PAGE: &str = r#"
        <html><body>
        <div class="product_main"><h1>Sapiens</h1></div>
        <div id="product_description"><h2>Product Description</h2></div>
        <p>A brief history of humankind.</p>
        </body></html>
    "#;

    fn chat_completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1677652288,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop",
                "logprobs": null
            }],
            "usage": {"prompt_tokens": 57, "completion_tokens": 40, "total_tokens": 97}
        })
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_book_summary_happy_path(pool: SqlitePool) {
        let catalogue = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalogue/sapiens_1/index.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BOOK_PAGE))
            .mount(&catalogue)
            .await;

        let summarizer = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_completion_body("  Une fresque de l'humanité.  ")),
            )
            .expect(1)
            .mount(&summarizer)
            .await;

        let app = app_against(pool, &catalogue, Some(&summarizer)).await;
        let book_url = format!("{}/catalogue/sapiens_1/index.html", catalogue.uri());

        let response = app
            .get("/books/summary")
            .add_query_param("book_url", &book_url)
            .await;
        response.assert_status_ok();
        let body: BookSummaryResponse = response.json();
        assert_eq!(body.source_url, book_url);
        // Generated text comes back trimmed
        assert_eq!(body.summary, "Une fresque de l'humanité.");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_book_summary_rejects_foreign_url_before_any_fetch(pool: SqlitePool) {
        let catalogue = MockServer::start().await;
        // Nothing may be fetched for a rejected URL
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&catalogue)
            .await;

        let app = app_against(pool, &catalogue, None).await;

        let response = app
            .get("/books/summary")
            .add_query_param("book_url", "https://evil.example.com/x")
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_book_summary_unreachable_page_is_404(pool: SqlitePool) {
        let catalogue = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalogue/missing_1/index.html"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&catalogue)
            .await;

        let app = app_against(pool, &catalogue, None).await;
        let book_url = format!("{}/catalogue/missing_1/index.html", catalogue.uri());

        let response = app
            .get("/books/summary")
            .add_query_param("book_url", &book_url)
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_summarizer_failure_surfaces_as_internal_error(pool: SqlitePool) {
        let catalogue = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/catalogue/sapiens_1/index.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BOOK_PAGE))
            .mount(&catalogue)
            .await;

        let summarizer = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&summarizer)
            .await;

        let app = app_against(pool, &catalogue, Some(&summarizer)).await;
        let book_url = format!("{}/catalogue/sapiens_1/index.html", catalogue.uri());

        let response = app
            .get("/books/summary")
            .add_query_param("book_url", &book_url)
            .await;
        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
