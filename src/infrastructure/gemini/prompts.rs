//! Prompts and response schemas for each catalog request.

use serde_json::{Value, json};

use crate::domain::entities::Book;
use crate::domain::i18n::Language;

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn object(properties: &Value, required: &[&str]) -> Value {
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

fn array_of(items: Value) -> Value {
    json!({ "type": "ARRAY", "items": items })
}

pub fn categories(language: Language) -> (String, Value) {
    let prompt = format!(
        "List the main categories of biomedical engineering equipment found in hospitals. \
         For each category give a one-sentence description and between 3 and 8 representative \
         devices, each with a publicly reachable illustrative image URL. \
         Write every name and description in {}.",
        language.english_name()
    );
    let device = object(
        &json!({ "name": string(), "imageUrl": string() }),
        &["name", "imageUrl"],
    );
    let category = object(
        &json!({
            "name": string(),
            "description": string(),
            "devices": array_of(device),
        }),
        &["name", "description", "devices"],
    );
    let schema = object(&json!({ "categories": array_of(category) }), &["categories"]);
    (prompt, schema)
}

pub fn device_details(device_name: &str, language: Language) -> (String, Value) {
    let prompt = format!(
        "Explain the principle of operation of the medical device \"{device_name}\" for a \
         biomedical engineering student in two or three paragraphs, then list its most common \
         malfunctions, each with a practical solution. Answer in {}.",
        language.english_name()
    );
    let malfunction = object(
        &json!({ "fault": string(), "solution": string() }),
        &["fault", "solution"],
    );
    let schema = object(
        &json!({
            "name": string(),
            "principle": string(),
            "malfunctions": array_of(malfunction),
        }),
        &["name", "principle", "malfunctions"],
    );
    (prompt, schema)
}

pub fn books(language: Language) -> (String, Value) {
    let prompt = format!(
        "Recommend 10 well-known reference books for biomedical engineering students. \
         Keep titles and authors as published; write the description in {}.",
        language.english_name()
    );
    let book = object(
        &json!({ "title": string(), "author": string(), "description": string() }),
        &["title", "author", "description"],
    );
    let schema = object(&json!({ "books": array_of(book) }), &["books"]);
    (prompt, schema)
}

pub fn book_details(book: &Book, language: Language) -> (String, Value) {
    let prompt = format!(
        "Write a detailed summary of the book \"{}\" by {}, covering its main topics and who \
         should read it. Answer in {}.",
        book.title,
        book.author,
        language.english_name()
    );
    let schema = object(&json!({ "summary": string() }), &["summary"]);
    (prompt, schema)
}

pub fn articles(language: Language) -> (String, Value) {
    let prompt = format!(
        "List 8 recent, notable journal articles in biomedical engineering with their authors, \
         journal, a short summary and a link. Write the summaries in {}.",
        language.english_name()
    );
    let article = object(
        &json!({
            "title": string(),
            "authors": string(),
            "journal": string(),
            "summary": string(),
            "url": string(),
        }),
        &["title", "authors", "journal", "summary", "url"],
    );
    let schema = object(&json!({ "articles": array_of(article) }), &["articles"]);
    (prompt, schema)
}

pub fn conferences(language: Language) -> (String, Value) {
    let prompt = format!(
        "List 8 upcoming international conferences and exhibitions on biomedical engineering \
         and medical devices with location, date, a short description and the official website. \
         Write the descriptions in {}.",
        language.english_name()
    );
    let conference = object(
        &json!({
            "name": string(),
            "location": string(),
            "date": string(),
            "description": string(),
            "url": string(),
        }),
        &["name", "location", "date", "description", "url"],
    );
    let schema = object(
        &json!({ "conferences": array_of(conference) }),
        &["conferences"],
    );
    (prompt, schema)
}

pub fn translation(text: &str) -> String {
    format!(
        "Translate the following biomedical engineering lecture text from English into Arabic. \
         Reply with the translation only.\n\n{text}"
    )
}
