//! HTTP request handlers

use super::state::AppState;
use crate::chat::QUESTION_SUGGESTIONS;
use crate::errors::ContentError;
use crate::locales::{self, Locale, LOCALE_COOKIE};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tera::Context;

/// Query parameters for search boxes and locale overrides
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub lang: Option<String>,
}

/// Locale override alone
#[derive(Debug, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

/// Parameters for the language switcher
#[derive(Debug, Deserialize)]
pub struct SetLanguageParams {
    pub code: String,
    pub next: Option<String>,
}

/// Parameters for the random hadith endpoint
#[derive(Debug, Deserialize)]
pub struct RandomParams {
    pub count: Option<usize>,
}

/// Chat question body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Resolve the active locale: explicit query param, then the persisted
/// cookie, then Accept-Language, then the configured default.
fn resolve_locale(state: &AppState, explicit: Option<&str>, headers: &HeaderMap) -> Locale {
    let from_cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name == LOCALE_COOKIE).then(|| value.to_string())
            })
        });

    let from_header = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(locales::parse_accept_language);

    explicit
        .and_then(locales::get_locale)
        .or_else(|| from_cookie.as_deref().and_then(locales::get_locale))
        .or_else(|| from_header.as_deref().and_then(locales::get_locale))
        .or_else(|| locales::get_locale(&state.settings.ui.default_locale))
        .unwrap_or_else(|| {
            locales::get_locale(locales::DEFAULT_LOCALE).expect("default locale in registry")
        })
}

/// Base template context shared by every page
fn page_context(state: &AppState, locale: &Locale, path: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("lang", &locale.code);
    ctx.insert("dir", locale.direction.as_str());
    ctx.insert("t", &state.translations.table(&locale.code));
    ctx.insert("locales", &locales::list_locales());
    ctx.insert("path", path);
    ctx.insert("chat_enabled", &state.chat.is_enabled());
    ctx
}

fn render(state: &AppState, template: &str, ctx: &Context) -> Response {
    match state.templates.render(template, ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Render the error page with the status matching the failure class
fn error_page(state: &AppState, locale: &Locale, path: &str, err: &ContentError) -> Response {
    let (status, message_key) = match err {
        ContentError::Validation(_) => (StatusCode::BAD_REQUEST, "fetch_error"),
        ContentError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        _ => (StatusCode::BAD_GATEWAY, "fetch_error"),
    };

    let mut ctx = page_context(state, locale, path);
    ctx.insert("message", state.translations.resolve(&locale.code, message_key));
    ctx.insert("retryable", &err.is_retryable());

    match state.templates.render("error.html", &ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (status, "Error").into_response()
        }
    }
}

/// Map a service error to a JSON API response
fn api_error(err: ContentError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        ContentError::Validation(_) => StatusCode::BAD_REQUEST,
        ContentError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

// ---------------------------------------------------------------- pages --

/// Home page
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_page_request();
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);

    let mut ctx = page_context(&state, &locale, "/");
    if let Ok(hadiths) = state.hadith.random_hadiths(1).await {
        if let Some(featured) = hadiths.first() {
            ctx.insert("featured_hadith", featured);
        }
    }

    render(&state, "index.html", &ctx)
}

/// Surah listing with optional full-text search
pub async fn quran_index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_page_request();
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);

    let surahs = match state.quran.list_surahs().await {
        Ok(surahs) => surahs,
        Err(err) => return error_page(&state, &locale, "/quran", &err),
    };

    let mut ctx = page_context(&state, &locale, "/quran");
    ctx.insert("surahs", &surahs);

    if let Some(query) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        match state.quran.search(query, &locale.code).await {
            Ok(matches) => {
                ctx.insert("query", query);
                ctx.insert("results", &matches);
            }
            Err(err) => return error_page(&state, &locale, "/quran", &err),
        }
    }

    render(&state, "quran.html", &ctx)
}

/// Bilingual surah reader
pub async fn surah_page(
    State(state): State<AppState>,
    Path(number): Path<u32>,
    Query(params): Query<LangParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_page_request();
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);
    let path = format!("/quran/{}", number);

    match state.quran.get_surah_bilingual(number, &locale.code).await {
        Ok(bilingual) => {
            let mut ctx = page_context(&state, &locale, &path);
            ctx.insert("surah", &bilingual.surah);
            ctx.insert("untranslated", &bilingual.untranslated);
            ctx.insert("arabic_only", &(locale.code == "ar"));
            render(&state, "surah.html", &ctx)
        }
        Err(err) => error_page(&state, &locale, &path, &err),
    }
}

/// Chapter listing with optional substring search
pub async fn hadith_index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_page_request();
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);

    let chapters = state.hadith.list_chapters().await;

    let mut ctx = page_context(&state, &locale, "/hadith");
    ctx.insert("chapters", &*chapters);

    if let Some(query) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        match state.hadith.search(query).await {
            Ok(results) => {
                ctx.insert("query", query);
                ctx.insert("results", &results);
            }
            Err(err) => return error_page(&state, &locale, "/hadith", &err),
        }
    }

    render(&state, "hadith.html", &ctx)
}

/// Hadith chapter reader
pub async fn chapter_page(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(params): Query<LangParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_page_request();
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);
    let path = format!("/hadith/{}", id);

    let chapter = match state.hadith.get_chapter(id).await {
        Some(chapter) => chapter,
        None => {
            let err = ContentError::NotFound(format!("chapter {}", id));
            return error_page(&state, &locale, &path, &err);
        }
    };

    match state.hadith.get_chapter_hadiths(id).await {
        Ok(hadiths) => {
            let mut ctx = page_context(&state, &locale, &path);
            ctx.insert("chapter", &chapter);
            ctx.insert("hadiths", &*hadiths);
            render(&state, "chapter.html", &ctx)
        }
        Err(err) => error_page(&state, &locale, &path, &err),
    }
}

/// Chat assistant page
pub async fn chat_page(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_page_request();
    if !state.chat.is_enabled() {
        return Redirect::to("/").into_response();
    }

    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);
    let mut ctx = page_context(&state, &locale, "/chat");
    ctx.insert("suggestions", QUESTION_SUGGESTIONS);

    render(&state, "chat.html", &ctx)
}

/// Stats page
pub async fn stats_page(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_page_request();
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);

    let mut ctx = page_context(&state, &locale, "/stats");
    ctx.insert("hadith_stats", &state.hadith.statistics().await);
    ctx.insert("metrics", &state.metrics.snapshot());
    ctx.insert("quran_cache_entries", &state.quran.cache_size());
    ctx.insert("cached_answers", &state.chat.cached_answers());
    ctx.insert("version", crate::VERSION);

    render(&state, "stats.html", &ctx)
}

/// Persist the chosen locale in a cookie and bounce back
pub async fn set_language(Query(params): Query<SetLanguageParams>) -> Response {
    let next = params
        .next
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    match locales::get_locale(&params.code) {
        Some(locale) => {
            let cookie = format!(
                "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
                LOCALE_COOKIE, locale.code
            );
            (
                AppendHeaders([(header::SET_COOKIE, cookie)]),
                Redirect::to(&next),
            )
                .into_response()
        }
        None => Redirect::to(&next).into_response(),
    }
}

// ------------------------------------------------------------- JSON API --

/// Surah listing
pub async fn api_surahs(State(state): State<AppState>) -> Response {
    state.metrics.inc_api_request();
    match state.quran.list_surahs().await {
        Ok(surahs) => Json(surahs).into_response(),
        Err(err) => api_error(err).into_response(),
    }
}

/// Reject an explicit-but-unsupported locale on the JSON API. Pages fall
/// back silently instead; API callers get the validation error.
fn check_api_locale(lang: Option<&str>) -> Result<(), ContentError> {
    match lang {
        Some(code) if locales::get_locale(code).is_none() => Err(ContentError::Validation(
            format!("unsupported locale: {}", code),
        )),
        _ => Ok(()),
    }
}

/// One surah, bilingual for the resolved locale
pub async fn api_surah(
    State(state): State<AppState>,
    Path(number): Path<u32>,
    Query(params): Query<LangParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_api_request();
    if let Err(err) = check_api_locale(params.lang.as_deref()) {
        return api_error(err).into_response();
    }
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);

    match state.quran.get_surah_bilingual(number, &locale.code).await {
        Ok(bilingual) => Json(bilingual).into_response(),
        Err(err) => api_error(err).into_response(),
    }
}

/// Quran full-text search
pub async fn api_quran_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_api_request();
    if let Err(err) = check_api_locale(params.lang.as_deref()) {
        return api_error(err).into_response();
    }
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);
    let query = params.q.unwrap_or_default();

    match state.quran.search(&query, &locale.code).await {
        Ok(matches) => Json(matches).into_response(),
        Err(err) => api_error(err).into_response(),
    }
}

/// Text editions available for a language
pub async fn api_quran_editions(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
    headers: HeaderMap,
) -> Response {
    state.metrics.inc_api_request();
    if let Err(err) = check_api_locale(params.lang.as_deref()) {
        return api_error(err).into_response();
    }
    let locale = resolve_locale(&state, params.lang.as_deref(), &headers);

    match state.quran.editions_for_language(&locale.code).await {
        Ok(editions) => Json(editions).into_response(),
        Err(err) => api_error(err).into_response(),
    }
}

/// Hadith chapter index
pub async fn api_hadith_chapters(State(state): State<AppState>) -> Response {
    state.metrics.inc_api_request();
    let chapters = state.hadith.list_chapters().await;
    Json(&*chapters).into_response()
}

/// Hadiths of one chapter
pub async fn api_chapter_hadiths(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Response {
    state.metrics.inc_api_request();
    match state.hadith.get_chapter_hadiths(id).await {
        Ok(hadiths) => Json(&*hadiths).into_response(),
        Err(err) => api_error(err).into_response(),
    }
}

/// Hadith substring search
pub async fn api_hadith_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    state.metrics.inc_api_request();
    let query = params.q.unwrap_or_default();

    match state.hadith.search(&query).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => api_error(err).into_response(),
    }
}

/// Random hadith sample
pub async fn api_random_hadiths(
    State(state): State<AppState>,
    Query(params): Query<RandomParams>,
) -> Response {
    state.metrics.inc_api_request();
    let count = params.count.unwrap_or(5).min(20);

    match state.hadith.random_hadiths(count).await {
        Ok(hadiths) => Json(hadiths).into_response(),
        Err(err) => api_error(err).into_response(),
    }
}

/// Ask the assistant one question
pub async fn api_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    state.metrics.inc_api_request();
    if !state.chat.is_enabled() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "assistant disabled" })),
        )
            .into_response();
    }

    let answer = state.chat.ask(&request.question).await;
    Json(answer).into_response()
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Robots.txt handler
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let content = if state.is_public() {
        "User-agent: *\nAllow: /\nDisallow: /api\n"
    } else {
        "User-agent: *\nDisallow: /\n"
    };
    ([(header::CONTENT_TYPE, "text/plain")], content)
}

/// Favicon handler
pub async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::network::HttpClient;

    fn test_state() -> AppState {
        let mut settings = Settings::default();
        settings.hadith.data_dir = std::path::PathBuf::from("/nonexistent");
        AppState::new(settings, HttpClient::new().unwrap()).unwrap()
    }

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_locale_resolution_order() {
        let state = test_state();

        // Explicit query param wins
        let headers = headers_with(header::COOKIE, "islamweb-language=ru");
        let locale = resolve_locale(&state, Some("ar"), &headers);
        assert_eq!(locale.code, "ar");

        // Cookie beats Accept-Language
        let mut headers = headers_with(header::COOKIE, "theme=dark; islamweb-language=ru");
        headers.insert(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9".parse().unwrap());
        let locale = resolve_locale(&state, None, &headers);
        assert_eq!(locale.code, "ru");

        // Accept-Language beats the default
        let headers = headers_with(header::ACCEPT_LANGUAGE, "ur-PK,ur;q=0.9");
        let locale = resolve_locale(&state, None, &headers);
        assert_eq!(locale.code, "ur");

        // Nothing set: configured default
        let locale = resolve_locale(&state, None, &HeaderMap::new());
        assert_eq!(locale.code, "fr");

        // Unsupported values fall through
        let headers = headers_with(header::COOKIE, "islamweb-language=xx");
        let locale = resolve_locale(&state, Some("yy"), &headers);
        assert_eq!(locale.code, "fr");
    }

    #[test]
    fn test_api_locale_validation() {
        assert!(check_api_locale(None).is_ok());
        assert!(check_api_locale(Some("ur")).is_ok());
        assert!(matches!(
            check_api_locale(Some("xx")),
            Err(ContentError::Validation(_))
        ));
    }

    #[test]
    fn test_page_context_carries_direction() {
        let state = test_state();
        let locale = locales::get_locale("ar").unwrap();
        let ctx = page_context(&state, &locale, "/");

        assert_eq!(ctx.get("dir").unwrap().as_str().unwrap(), "rtl");
        assert_eq!(ctx.get("lang").unwrap().as_str().unwrap(), "ar");
    }

    #[tokio::test]
    async fn test_set_language_sets_cookie_and_redirects() {
        let response = set_language(Query(SetLanguageParams {
            code: "ar".to_string(),
            next: Some("/quran".to_string()),
        }))
        .await;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("islamweb-language=ar"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_set_language_rejects_unsupported_code() {
        let response = set_language(Query(SetLanguageParams {
            code: "xx".to_string(),
            next: None,
        }))
        .await;

        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_open_redirects_are_not_followed() {
        let response = set_language(Query(SetLanguageParams {
            code: "en".to_string(),
            next: Some("https://example.com".to_string()),
        }))
        .await;

        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location, "/");
    }
}
