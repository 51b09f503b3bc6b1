use crate::adapters::CategoryAdapter;
use crate::client::{ApiClient, FetchError, NearbyQuery, NearbyResponse};
use crate::config::AppConfig;
use crate::domain::{Category, ProviderRecord, ServiceFlow};
use crate::forms;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::components::card::provider_href;
use crate::templates::pages::{self, NearbyVm};
use crate::templates::{listing_card, CardOptions, CarouselState, GridSource};
use crate::utils::encode_component;
use astra::Request;
use percent_encoding::percent_decode_str;
use tracing::debug;

/// Everything a handler needs, shared by all server workers.
pub struct AppState {
    pub config: AppConfig,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, FetchError> {
        let api = ApiClient::new(&config)?;
        Ok(Self { config, api })
    }
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let segments = path_segments(req.uri().path());
    let params = parse_query(&req);

    debug!(method = method.as_str(), path = req.uri().path(), "request");

    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => html_response(pages::home_page(state.config.default_radius_km)),
        ("GET", ["search"]) => search(&params),
        ("GET", ["nearby", slug]) => nearby(state, category(slug)?, &params),
        ("GET", ["card", slug, id]) => card_fragment(state, category(slug)?, id, &params),
        ("GET", ["provider", slug, id]) => {
            let category = category(slug)?;
            let record = resolve_record(state, category, id)?;
            html_response(pages::provider_page(category, &record))
        }
        ("GET", ["category", id]) => category_by_id(id),
        ("GET", ["category", id, "new"]) => new_service_form(id, &params),
        ("GET", ["my", slug]) => user_services(state, category(slug)?, &params),
        ("POST", ["my", slug, "new"]) => add_service(state, category(slug)?, &mut req, &params),
        ("GET", ["my", slug, id, "edit"]) => {
            let category = category(slug)?;
            let user_id = require_user(&params)?;
            let record = resolve_record(state, category, id)?;
            html_response(pages::edit_service_page(category, &record, user_id))
        }
        ("POST", ["my", slug, id, "edit"]) => {
            update_service(state, category(slug)?, id, &mut req, &params)
        }
        ("POST", ["my", slug, id, "delete"]) => delete_service(state, category(slug)?, id, &params),
        _ => Err(ServerError::NotFound),
    }
}

fn category(slug: &str) -> Result<Category, ServerError> {
    Category::from_slug(slug).ok_or(ServerError::NotFound)
}

/// Backend numeric ids, as used in links from the API's own clients.
fn flow_by_id(raw: &str) -> Result<(Category, ServiceFlow), ServerError> {
    let id: u32 = raw.parse().map_err(|_| ServerError::NotFound)?;
    let flow = ServiceFlow::for_category_id(id).ok_or(ServerError::NotFound)?;
    let category = Category::from_id(id).ok_or(ServerError::NotFound)?;
    Ok((category, flow))
}

fn category_by_id(raw: &str) -> ResultResp {
    let (category, _) = flow_by_id(raw)?;
    redirect(&format!("/nearby/{}", category.slug()))
}

fn require_user(params: &[(String, String)]) -> Result<&str, ServerError> {
    param(params, "userId").ok_or_else(|| ServerError::BadRequest("userId is required".into()))
}

fn my_services_href(category: Category, user_id: &str) -> String {
    format!("/my/{}?userId={}", category.slug(), encode_component(user_id))
}

/// Home page form: pick a category, then hand off to its nearby page.
fn search(params: &[(String, String)]) -> ResultResp {
    let slug = param(params, "category")
        .ok_or_else(|| ServerError::BadRequest("category is required".into()))?;
    let category = category(slug)?;

    let query: Vec<String> = ["latitude", "longitude", "distance"]
        .iter()
        .filter_map(|key| param(params, key).map(|v| format!("{key}={}", encode_component(v))))
        .collect();

    redirect(&format!("/nearby/{}?{}", category.slug(), query.join("&")))
}

fn nearby(state: &AppState, category: Category, params: &[(String, String)]) -> ResultResp {
    let adapter = CategoryAdapter::for_category(category);

    let latitude = parse_f64(params, "latitude")?;
    let longitude = parse_f64(params, "longitude")?;

    let (query, records) = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            let distance = parse_f64(params, "distance")?.unwrap_or(state.config.default_radius_km);
            let query = NearbyQuery::new(latitude, longitude, distance)?;
            let response: NearbyResponse = state
                .api
                .fetch_nearby(category, latitude, longitude, distance)?;
            (Some(query), adapter.adapt_all(&response.data))
        }
        (None, None) => (None, Vec::new()),
        _ => {
            return Err(ServerError::BadRequest(
                "latitude and longitude must be given together".into(),
            ))
        }
    };

    html_response(pages::nearby_page(&NearbyVm {
        category,
        query,
        source: GridSource::Live(&records),
        default_radius_km: state.config.default_radius_km,
    }))
}

/// One card re-rendered at another photo; the target of the carousel buttons.
fn card_fragment(
    state: &AppState,
    category: Category,
    id: &str,
    params: &[(String, String)],
) -> ResultResp {
    let record = resolve_record(state, category, id)?;
    let photo = match param(params, "photo") {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ServerError::BadRequest(format!("invalid photo index: {raw}")))?,
        None => 0,
    };

    let opts = CardOptions::for_category(category).with_detail(&provider_href);
    let carousel = CarouselState::at(record.photos.len(), photo);

    html_response(listing_card(&record, carousel, &opts))
}

fn user_services(state: &AppState, category: Category, params: &[(String, String)]) -> ResultResp {
    let user_id = require_user(params)?;

    let filters: Vec<(&str, &str)> = params
        .iter()
        .filter(|(k, _)| k != "userId")
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let raws = state.api.list_user_services(category, user_id, &filters)?;
    let records = CategoryAdapter::for_category(category).adapt_all(&raws);

    html_response(pages::user_services_page(category, user_id, &records))
}

fn delete_service(
    state: &AppState,
    category: Category,
    id: &str,
    params: &[(String, String)],
) -> ResultResp {
    let user_id = require_user(params)?;

    state.api.delete_service(category, id)?;

    redirect(&my_services_href(category, user_id))
}

/// The new-listing form for the category's flow.
fn new_service_form(raw_id: &str, params: &[(String, String)]) -> ResultResp {
    let (category, flow) = flow_by_id(raw_id)?;
    let user_id = require_user(params)?;
    html_response(pages::new_service_page(category, flow, user_id))
}

fn add_service(
    state: &AppState,
    category: Category,
    req: &mut Request,
    params: &[(String, String)],
) -> ResultResp {
    let user_id = require_user(params)?;
    let boundary = forms::multipart_boundary(req)?;
    let body = forms::read_body(req)?;

    let form = forms::service_form(body, &boundary)?;
    if !form.fields.iter().any(|(name, _)| name == "title") {
        return Err(ServerError::BadRequest("title is required".into()));
    }

    let form = form
        .field("userId", user_id)
        .field("categoryId", category.id().to_string());
    state.api.add_service(category, form)?;

    redirect(&my_services_href(category, user_id))
}

fn update_service(
    state: &AppState,
    category: Category,
    id: &str,
    req: &mut Request,
    params: &[(String, String)],
) -> ResultResp {
    let user_id = require_user(params)?;
    let patch = forms::update_body(&forms::read_body(req)?);

    state.api.update_service(category, id, &patch)?;

    redirect(&my_services_href(category, user_id))
}

/// Fallback samples first, then the API's by-id endpoint.
fn resolve_record(state: &AppState, category: Category, id: &str) -> Result<ProviderRecord, ServerError> {
    let adapter = CategoryAdapter::for_category(category);
    if let Some(record) = adapter.sample_record(id) {
        return Ok(record);
    }

    let raw = state.api.get_by_id(category, id)?;
    if raw.is_null() {
        return Err(ServerError::NotFound);
    }

    adapter
        .adapt(&raw)
        .map_err(|e| ServerError::Upstream(format!("unusable {category} record {id}: {e}")))
}

fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
        .collect()
}

fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, v)| k == key && !v.trim().is_empty())
        .map(|(_, v)| v.trim())
}

fn parse_f64(params: &[(String, String)], key: &str) -> Result<Option<f64>, ServerError> {
    param(params, key)
        .map(|raw| {
            raw.parse::<f64>()
                .map_err(|_| ServerError::BadRequest(format!("{key} is not a number: {raw}")))
        })
        .transpose()
}
