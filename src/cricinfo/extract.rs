use crate::error::{TableError, TableResult};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// `id` of the script element in which Next.js pages serialize their data.
pub const PAYLOAD_SCRIPT_ID: &str = "__NEXT_DATA__";

static PAYLOAD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!(r#"script[id="{PAYLOAD_SCRIPT_ID}"]"#))
        .expect("payload selector is a valid CSS selector")
});

/// Text content of the first payload script of the page, in document order.
pub fn embedded_payload(markup: &str) -> TableResult<String> {
    let document = Html::parse_document(markup);

    document
        .select(&PAYLOAD_SELECTOR)
        .next()
        .map(|script| script.text().collect::<String>())
        .ok_or(TableError::PayloadNotFound)
}
