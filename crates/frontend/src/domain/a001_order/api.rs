//! Клиент API заказов.
//!
//! Один запрос на страницу, без повторов и таймаутов: ошибка транспорта
//! возвращается вызывающему коду как есть.

use crate::shared::api_utils::{basic_auth_header, with_query};
use crate::shared::config::ApiConfig;
use contracts::domain::a001_order::{OrderPageQuery, OrderPageResponse};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// URL страницы заказов: `<base_url>?pageIndex=N`
pub fn build_page_url(config: &ApiConfig, page_index: u32) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&OrderPageQuery { page_index })
        .map_err(|e| ApiError::Request(format!("Failed to encode query: {}", e)))?;
    Ok(with_query(&config.base_url, &query))
}

/// Заголовки запроса: `Accept` и, если заданы учётные данные, Basic-авторизация
pub fn request_headers(config: &ApiConfig) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Accept", "application/json".to_string())];
    if let Some((username, password)) = config.credentials() {
        headers.push(("Authorization", basic_auth_header(username, password)));
    }
    headers
}

/// Разбор ответа сервера; тело возвращается без изменений
pub fn decode_page(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<OrderPageResponse, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            status_text: status_text.to_string(),
        });
    }

    serde_json::from_str::<OrderPageResponse>(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Получить страницу заказов
pub async fn get_page(config: &ApiConfig, page_index: u32) -> Result<OrderPageResponse, ApiError> {
    let url = build_page_url(config, page_index)?;

    let mut request = Request::get(&url);
    for (name, value) in request_headers(config) {
        request = request.header(name, &value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    decode_page(response.status(), &response.status_text(), &body)
}
