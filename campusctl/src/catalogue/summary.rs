//! Book summary pipeline: fetch one catalogue page, extract its title and
//! description, and ask the summarization endpoint for prose.

use async_openai::types::chat::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::api::models::books::BookSummaryResponse;
use crate::config::SummarizerConfig;
use crate::errors::Error;

/// Shown in the prompt when a book page carries no description block.
const NO_DESCRIPTION_PLACEHOLDER: &str = "Pas de description disponible.";

/// Run the full pipeline for one book URL.
#[tracing::instrument(skip(http, base_url, summarizer), err)]
pub async fn summarize_book(
    http: &Client,
    base_url: &Url,
    summarizer: &SummarizerConfig,
    book_url: &str,
) -> Result<BookSummaryResponse, Error> {
    // 1. Reject anything outside the catalogue before touching the network.
    validate_book_url(book_url, base_url)?;

    // 2. Fetch the page.
    let response = http.get(book_url).send().await.map_err(|e| Error::Internal {
        operation: format!("fetch book page {book_url}: {e}"),
    })?;
    if !response.status().is_success() {
        return Err(Error::NotFound {
            resource: "Book page".to_string(),
            id: book_url.to_string(),
        });
    }
    let body = response.text().await.map_err(|e| Error::Internal {
        operation: format!("read book page {book_url}: {e}"),
    })?;

    // 3. Extract title + description (sync: the DOM is not Send).
    let content = extract_book_content(&body)?;

    // 4. Generate and 5. return the trimmed text with its source.
    let summary = generate_summary(http, summarizer, &content).await?;

    Ok(BookSummaryResponse {
        source_url: book_url.to_string(),
        summary,
    })
}

/// The URL must point inside the catalogue; everything else is a client
/// error, checked before any network call.
pub fn validate_book_url(book_url: &str, base_url: &Url) -> Result<(), Error> {
    let prefix = format!("{}catalogue/", ensure_trailing_slash(base_url.as_str()));
    if !book_url.starts_with(&prefix) {
        return Err(Error::BadRequest {
            message: format!("book_url must start with {prefix}"),
        });
    }
    Ok(())
}

/// Build the prompt content from a book page: the `h1` title plus the
/// paragraph following the description anchor, with a placeholder when the
/// page has no description block.
pub fn extract_book_content(html: &str) -> Result<String, Error> {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse(".product_main h1").unwrap();
    let description_selector = Selector::parse("#product_description + p").unwrap();

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_else(|| Error::Internal {
            operation: "extract book title".to_string(),
        })?;

    let description = document
        .select(&description_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NO_DESCRIPTION_PLACEHOLDER.to_string());

    Ok(format!("Titre : {title}\nDescription : {description}"))
}

/// Send the extracted content to the chat-completions endpoint and return
/// the trimmed generated text.
async fn generate_summary(
    http: &Client,
    summarizer: &SummarizerConfig,
    content: &str,
) -> Result<String, Error> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(summarizer.model.clone())
        .temperature(summarizer.temperature)
        .max_tokens(summarizer.max_tokens)
        .messages([
            ChatCompletionRequestSystemMessageArgs::default()
                .content(summarizer.system_prompt.clone())
                .build()
                .map_err(|e| Error::Internal {
                    operation: format!("build system message: {e}"),
                })?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(format!("Fais un résumé de ce livre :\n\n{content}"))
                .build()
                .map_err(|e| Error::Internal {
                    operation: format!("build user message: {e}"),
                })?
                .into(),
        ])
        .build()
        .map_err(|e| Error::Internal {
            operation: format!("build summarization request: {e}"),
        })?;

    let endpoint = format!(
        "{}chat/completions",
        ensure_trailing_slash(summarizer.api_base.as_str())
    );
    let response = http
        .post(&endpoint)
        .bearer_auth(&summarizer.api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| Error::Internal {
            operation: format!("call summarization endpoint: {e}"),
        })?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(Error::Internal {
            operation: format!("call summarization endpoint: status {status}: {detail}"),
        });
    }

    let completion: CreateChatCompletionResponse =
        response.json().await.map_err(|e| Error::Internal {
            operation: format!("decode summarization response: {e}"),
        })?;

    let summary = completion
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .ok_or_else(|| Error::Internal {
            operation: "summarization returned no content".to_string(),
        })?;

    Ok(summary.trim().to_string())
}

fn ensure_trailing_slash(s: &str) -> String {
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}
