use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::types::{Listing, ListingInfo};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to parse URL: {0}")]
    UrlParse(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn first_text(element: ElementRef, selector: &Selector, field: &str) -> Result<String, ParseError> {
    element
        .select(selector)
        .next()
        .map(elem_text)
        .ok_or_else(|| ParseError::MissingField(field.to_string()))
}

fn resolve_url(base: &Url, href: &str) -> Result<String, ParseError> {
    base.join(href)
        .map(|u| u.to_string())
        .map_err(|e| ParseError::UrlParse(format!("{href}: {e}")))
}

/// Extracts every product card of a catalog page.
///
/// Cards are the `article` elements under `#us_grid_1`. Each card must have a
/// heading, an image and a `bdi` price; the info table is built from the
/// `.progress_text` labels paired in order with the `.progress_info` values,
/// stopping at the shorter of the two lists.
pub fn parse_listings(html: &str, page_url: &str) -> Result<Vec<Listing>, ParseError> {
    let base = Url::parse(page_url).map_err(|e| ParseError::UrlParse(format!("{page_url}: {e}")))?;
    let document = Html::parse_document(html);

    let grid_sel = Selector::parse("#us_grid_1").unwrap();
    let article_sel = Selector::parse("article").unwrap();
    let title_sel = Selector::parse("h2").unwrap();
    let img_sel = Selector::parse("img").unwrap();
    let price_sel = Selector::parse("bdi").unwrap();
    let label_sel = Selector::parse(".progress_text").unwrap();
    let value_sel = Selector::parse(".progress_info").unwrap();

    let grid = document
        .select(&grid_sel)
        .next()
        .ok_or_else(|| ParseError::MissingField("#us_grid_1".to_string()))?;

    grid.select(&article_sel)
        .enumerate()
        .map(|(idx, article)| -> Result<Listing, ParseError> {
            let title = first_text(article, &title_sel, &format!("listing {idx}: h2"))?;

            let img = article
                .select(&img_sel)
                .next()
                .ok_or_else(|| ParseError::MissingField(format!("listing {idx}: img")))?;
            // an image without `src` reads as an empty URL
            let image = match img.value().attr("src") {
                Some(src) => resolve_url(&base, src)?,
                None => String::new(),
            };

            let price = first_text(article, &price_sel, &format!("listing {idx}: bdi"))?;

            let infos = article
                .select(&label_sel)
                .zip(article.select(&value_sel))
                .map(|(label, value)| ListingInfo {
                    label: elem_text(label),
                    value: elem_text(value),
                })
                .collect();

            Ok(Listing {
                title,
                image,
                price,
                infos,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PAGE_URL: &str = "https://laptopwithlinux.com/linux-laptops/";

    #[test]
    fn test_parse_listings_from_fixture() {
        let html = fs::read_to_string("fixtures/linux_laptops.html").expect("Failed to read fixture");

        let listings = parse_listings(&html, PAGE_URL).expect("Failed to parse listings");
        assert_eq!(listings.len(), 3);

        let first = &listings[0];
        assert_eq!(first.title, "Linux Laptop Pro 14");
        assert_eq!(
            first.image,
            "https://laptopwithlinux.com/wp-content/uploads/pro-14.jpg"
        );
        assert_eq!(first.price, "€1,299.00");
        assert_eq!(
            first.infos,
            vec![
                ListingInfo {
                    label: "CPU".to_string(),
                    value: "Intel Core i7".to_string()
                },
                ListingInfo {
                    label: "RAM".to_string(),
                    value: "16 GB".to_string()
                },
            ]
        );
        println!("First listing:\n{}", first);
    }

    #[test]
    fn test_relative_image_is_resolved_against_page() {
        let html = fs::read_to_string("fixtures/linux_laptops.html").expect("Failed to read fixture");

        let listings = parse_listings(&html, PAGE_URL).expect("Failed to parse listings");
        assert_eq!(
            listings[1].image,
            "https://laptopwithlinux.com/linux-laptops/img/slim-13.png"
        );
    }

    #[test]
    fn test_unbalanced_infos_use_shorter_list() {
        let html = fs::read_to_string("fixtures/linux_laptops.html").expect("Failed to read fixture");

        let listings = parse_listings(&html, PAGE_URL).expect("Failed to parse listings");

        // one label, two values
        assert_eq!(listings[1].infos.len(), 1);
        assert_eq!(listings[1].infos[0].label, "CPU");
        assert_eq!(listings[1].infos[0].value, "AMD Ryzen 5");

        // three labels, no values
        assert!(listings[2].infos.is_empty());
    }

    #[test]
    fn test_text_content_is_kept_raw() {
        let html = r#"
            <div id="us_grid_1">
              <article>
                <h2> Spaced <span>Title</span> </h2>
                <img src="/a.jpg">
                <span><bdi><span>€</span>10.00</bdi></span>
              </article>
            </div>"#;

        let listings = parse_listings(html, PAGE_URL).expect("Failed to parse listings");
        assert_eq!(listings[0].title, " Spaced Title ");
        assert_eq!(listings[0].price, "€10.00");
        assert_eq!(listings[0].image, "https://laptopwithlinux.com/a.jpg");
    }

    #[test]
    fn test_empty_grid_yields_no_listings() {
        let html = r#"<div id="us_grid_1"></div>"#;
        let listings = parse_listings(html, PAGE_URL).expect("Failed to parse listings");
        assert!(listings.is_empty());
    }

    #[test]
    fn test_missing_grid_is_an_error() {
        let html = "<html><body><article><h2>x</h2></article></body></html>";
        let err = parse_listings(html, PAGE_URL).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "#us_grid_1"));
    }

    #[test]
    fn test_missing_heading_is_an_error() {
        let html = r#"
            <div id="us_grid_1">
              <article><img src="/a.jpg"><bdi>1</bdi></article>
            </div>"#;
        let err = parse_listings(html, PAGE_URL).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f.contains("h2")));
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let html = r#"
            <div id="us_grid_1">
              <article><h2>x</h2><bdi>1</bdi></article>
            </div>"#;
        let err = parse_listings(html, PAGE_URL).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f.contains("img")));
    }

    #[test]
    fn test_image_without_src_is_empty() {
        let html = r#"
            <div id="us_grid_1">
              <article><h2>x</h2><img alt="lazy" data-src="/a.jpg"><bdi>1</bdi></article>
            </div>"#;
        let listings = parse_listings(html, PAGE_URL).expect("Failed to parse listings");
        assert_eq!(listings[0].image, "");
        assert_eq!(listings[0].title, "x");
    }

    #[test]
    fn test_invalid_page_url_is_an_error() {
        let err = parse_listings("<div id=\"us_grid_1\"></div>", "not a url").unwrap_err();
        assert!(matches!(err, ParseError::UrlParse(_)));
    }
}
