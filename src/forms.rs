//! Request bodies posted by the listing forms.
//!
//! The new-listing form is `multipart/form-data` because it carries photos.
//! The edit form is plain `application/x-www-form-urlencoded`.

use std::io::{Cursor, Read};

use astra::Request;
use multipart::server::Multipart;
use serde_json::{Map, Value};

use crate::client::{ImageUpload, ServiceForm};
use crate::errors::ServerError;

/// Upper bound on a posted form, photos included.
const MAX_FORM_BYTES: u64 = 10 * 1024 * 1024;

/// Edit-form fields that hold comma separated lists upstream.
const LIST_FIELDS: [&str; 2] = ["services", "tags"];

pub fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    if bytes.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form is too large".into()));
    }
    Ok(bytes)
}

/// The boundary of a `multipart/form-data` request.
pub fn multipart_boundary(req: &Request) -> Result<String, ServerError> {
    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("missing Content-Type".into()))?;

    let parsed: mime::Mime = content_type
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("bad Content-Type: {content_type}")))?;

    if parsed.type_() != mime::MULTIPART || parsed.subtype() != mime::FORM_DATA {
        return Err(ServerError::BadRequest(format!(
            "expected multipart/form-data, got {}",
            parsed.essence_str()
        )));
    }

    parsed
        .get_param(mime::BOUNDARY)
        .map(|b| b.as_str().to_string())
        .ok_or_else(|| ServerError::BadRequest("multipart body without boundary".into()))
}

/// Text fields become form fields, file fields become image uploads.
/// Blank values and empty file inputs are dropped.
pub fn service_form(body: Vec<u8>, boundary: &str) -> Result<ServiceForm, ServerError> {
    let bad = |e: std::io::Error| ServerError::BadRequest(format!("malformed multipart body: {e}"));

    let mut multipart = Multipart::with_body(Cursor::new(body), boundary);
    let mut form = ServiceForm::default();

    while let Some(mut field) = multipart.read_entry().map_err(bad)? {
        let name = field.headers.name.to_string();
        match field.headers.filename.clone() {
            Some(file_name) => {
                let mut bytes = Vec::new();
                field.data.read_to_end(&mut bytes).map_err(bad)?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    form = form.image(ImageUpload { file_name, bytes });
                }
            }
            None => {
                let mut text = String::new();
                field.data.read_to_string(&mut text).map_err(bad)?;
                let text = text.trim();
                if !text.is_empty() {
                    form = form.field(name, text);
                }
            }
        }
    }

    Ok(form)
}

/// An edit form as the JSON body of an update call.
///
/// Only non-blank fields are sent, so the API keeps what the form left
/// empty.
pub fn update_body(body: &[u8]) -> Value {
    let mut map = Map::new();
    for (key, value) in url::form_urlencoded::parse(body) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let value = if LIST_FIELDS.iter().any(|field| *field == key) {
            Value::Array(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| Value::String(s.to_string()))
                    .collect(),
            )
        } else {
            Value::String(value.to_string())
        };
        map.insert(key.into_owned(), value);
    }
    Value::Object(map)
}
