use crate::domain::model::WordList;
use crate::utils::error::Result;
use reqwest::Client;

/// Downloads the newline-delimited word list at `url`.
///
/// A non-success status is an error; there is no retry.
pub async fn fetch_word_list(client: &Client, url: &str) -> Result<WordList> {
    tracing::debug!("Requesting word list from: {}", url);
    let response = client.get(url).send().await?;

    tracing::debug!("Word source response status: {}", response.status());
    let body = response.error_for_status()?.text().await?;

    let words = WordList::from_body(&body, url)?;
    tracing::debug!("Word list has {} entries ({} bytes)", words.len(), body.len());
    Ok(words)
}
