//! Paginated catalogue walk.
//!
//! Starts at `catalogue/page-1.html` under the configured base URL and
//! follows the "next" link until it disappears. Every product on the way is
//! buffered in memory; persistence happens in one bulk insert after the walk,
//! so a failure on any page discards all partial progress.

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::db::models::books::BookCreateDBRequest;
use crate::errors::Error;

/// The scraper never visits per-product pages, so the real category is
/// unknown to it.
const DEFAULT_CATEGORY: &str = "Unknown";

/// Records extracted from one listing page, plus the relative href of the
/// next page if there is one.
#[derive(Debug)]
struct PageExtract {
    books: Vec<BookCreateDBRequest>,
    next_href: Option<String>,
}

/// Walk the whole catalogue and return the buffered records.
#[tracing::instrument(skip(http, base_url), err)]
pub async fn scrape_catalogue(
    http: &Client,
    base_url: &Url,
) -> Result<Vec<BookCreateDBRequest>, Error> {
    let mut page_url = base_url
        .join("catalogue/page-1.html")
        .map_err(|e| Error::Internal {
            operation: format!("build catalogue start URL: {e}"),
        })?;
    let mut books = Vec::new();

    loop {
        tracing::debug!(url = %page_url, "fetching catalogue page");
        let response = http.get(page_url.clone()).send().await.map_err(|e| Error::Internal {
            operation: format!("fetch catalogue page {page_url}: {e}"),
        })?;
        if !response.status().is_success() {
            return Err(Error::Internal {
                operation: format!(
                    "fetch catalogue page {page_url}: status {}",
                    response.status()
                ),
            });
        }
        let body = response.text().await.map_err(|e| Error::Internal {
            operation: format!("read catalogue page {page_url}: {e}"),
        })?;

        // Parsing is scoped to a sync helper: scraper's DOM is not Send and
        // must not be held across an await point.
        let extract = extract_listing(&body)?;
        books.extend(extract.books);

        match extract.next_href {
            Some(href) => {
                page_url = page_url.join(&href).map_err(|e| Error::Internal {
                    operation: format!("resolve next page link {href:?}: {e}"),
                })?;
            }
            None => break,
        }
    }

    tracing::info!(count = books.len(), "catalogue walk finished");
    Ok(books)
}

/// Extract all product records and the "next" link from one listing page.
fn extract_listing(html: &str) -> Result<PageExtract, Error> {
    let document = Html::parse_document(html);

    let product_selector = Selector::parse(".product_pod").unwrap();
    let title_selector = Selector::parse("h3 a").unwrap();
    let price_selector = Selector::parse(".price_color").unwrap();
    let availability_selector = Selector::parse(".instock.availability").unwrap();
    let next_selector = Selector::parse("li.next a").unwrap();

    let mut books = Vec::new();
    for product in document.select(&product_selector) {
        let title = product
            .select(&title_selector)
            .next()
            .and_then(|a| a.value().attr("title"))
            .ok_or_else(|| Error::Internal {
                operation: "extract product title".to_string(),
            })?
            .to_string();

        let price_text: String = product
            .select(&price_selector)
            .next()
            .ok_or_else(|| Error::Internal {
                operation: format!("extract price for {title:?}"),
            })?
            .text()
            .collect();
        let price = parse_price(&price_text).ok_or_else(|| Error::Internal {
            operation: format!("parse price {price_text:?} for {title:?}"),
        })?;

        let availability: String = product
            .select(&availability_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        books.push(BookCreateDBRequest {
            title,
            price,
            category: DEFAULT_CATEGORY.to_string(),
            availability,
        });
    }

    let next_href = document
        .select(&next_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);

    Ok(PageExtract { books, next_href })
}

/// Strip the leading currency symbol and parse the remainder as a price.
fn parse_price(text: &str) -> Option<f64> {
    text.trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
        <ol class="row">
          <li>
            <article class="product_pod">
              <h3><a href="a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in the ...</a></h3>
              <div class="product_price">
                <p class="price_color">£51.77</p>
                <p class="instock availability">
                  <i class="icon-ok"></i>
                  In stock
                </p>
              </div>
            </article>
          </li>
          <li>
            <article class="product_pod">
              <h3><a href="tipping-the-velvet_999/index.html" title="Tipping the Velvet">Tipping the ...</a></h3>
              <div class="product_price">
                <p class="price_color">£53.74</p>
                <p class="instock availability">
                  <i class="icon-ok"></i>
                  In stock
                </p>
              </div>
            </article>
          </li>
        </ol>
        <ul class="pager">
          <li class="next"><a href="page-2.html">next</a></li>
        </ul>
        </body></html>
    "#;

    #[test]
    fn extracts_products_and_next_link() {
        let extract = extract_listing(LISTING).unwrap();

        assert_eq!(extract.books.len(), 2);
        assert_eq!(extract.books[0].title, "A Light in the Attic");
        assert_eq!(extract.books[0].price, 51.77);
        assert_eq!(extract.books[0].category, "Unknown");
        assert_eq!(extract.books[0].availability, "In stock");
        assert_eq!(extract.next_href.as_deref(), Some("page-2.html"));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let html = LISTING.replace(r#"<li class="next"><a href="page-2.html">next</a></li>"#, "");
        let extract = extract_listing(&html).unwrap();

        assert_eq!(extract.books.len(), 2);
        assert!(extract.next_href.is_none());
    }

    #[test]
    fn unparseable_price_fails_the_whole_page() {
        let html = LISTING.replace("£53.74", "gratuit");
        assert!(extract_listing(&html).is_err());
    }

    #[test]
    fn parse_price_strips_currency_symbol() {
        assert_eq!(parse_price("£51.77"), Some(51.77));
        assert_eq!(parse_price("  £0.99 "), Some(0.99));
        // Mojibake from mis-decoded pages still parses
        assert_eq!(parse_price("Â£12.50"), Some(12.5));
        assert_eq!(parse_price("free"), None);
    }
}
