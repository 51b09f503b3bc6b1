// src/client/services.rs
//
// CRUD wrappers, one per endpoint of a category's family:
//   POST   add<Category>Service        (multipart, images[])
//   GET    get<Category>ById/:id
//   PUT    update<Category>/:id
//   DELETE delete<Category>/:id
//   GET    getUser<Category>Services?userId=&...
//
// Field names inside bodies differ per category and pass through untouched.

use reqwest::blocking::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info};

use super::{require_id, ApiClient, FetchError};
use crate::domain::Category;
use crate::utils::encode_component;

/// One image attached to an `add<Category>Service` request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn mime(&self) -> mime::Mime {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "jpg" | "jpeg" => mime::IMAGE_JPEG,
            "png" => mime::IMAGE_PNG,
            "gif" => mime::IMAGE_GIF,
            "bmp" => mime::IMAGE_BMP,
            "svg" => mime::IMAGE_SVG,
            "webp" => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
            _ => mime::APPLICATION_OCTET_STREAM,
        }
    }
}

/// Text fields plus images for a new listing.
#[derive(Debug, Clone, Default)]
pub struct ServiceForm {
    pub fields: Vec<(String, String)>,
    pub images: Vec<ImageUpload>,
}

impl ServiceForm {
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn image(mut self, image: ImageUpload) -> Self {
        self.images.push(image);
        self
    }

    fn into_multipart(self) -> Result<Form, FetchError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for image in self.images {
            let mime = image.mime();
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(mime.as_ref())?;
            form = form.part("images[]", part);
        }
        Ok(form)
    }
}

impl ApiClient {
    pub fn add_service(&self, category: Category, form: ServiceForm) -> Result<Value, FetchError> {
        let endpoint = format!("add{}Service", category.endpoint_stem());
        let url = self.endpoint(&endpoint)?;
        let image_count = form.images.len();

        let response = self
            .client
            .post(url)
            .multipart(form.into_multipart()?)
            .send()?;
        let body = Self::read_json(response, &endpoint)?;

        info!(%category, image_count, "service added");
        Ok(body)
    }

    /// Fetch one record. A `{ data: {...} }` envelope is unwrapped.
    pub fn get_by_id(&self, category: Category, id: &str) -> Result<Value, FetchError> {
        let id = require_id(id)?;
        let endpoint = format!("get{}ById/{}", category.endpoint_stem(), encode_component(id));
        let url = self.endpoint(&endpoint)?;

        debug!(%category, id, "fetching record");
        let response = self.client.get(url).send()?;

        Ok(unwrap_data(Self::read_json(response, &endpoint)?))
    }

    pub fn update_service(
        &self,
        category: Category,
        id: &str,
        body: &Value,
    ) -> Result<Value, FetchError> {
        let id = require_id(id)?;
        let endpoint = format!("update{}/{}", category.endpoint_stem(), encode_component(id));
        let url = self.endpoint(&endpoint)?;

        let response = self.client.put(url).json(body).send()?;
        let updated = Self::read_json(response, &endpoint)?;

        info!(%category, id, "service updated");
        Ok(updated)
    }

    pub fn delete_service(&self, category: Category, id: &str) -> Result<(), FetchError> {
        let id = require_id(id)?;
        let endpoint = format!("delete{}/{}", category.endpoint_stem(), encode_component(id));
        let url = self.endpoint(&endpoint)?;

        let response = self.client.delete(url).send()?;
        Self::read_json(response, &endpoint)?;

        info!(%category, id, "service deleted");
        Ok(())
    }

    /// A user's own listings. `filters` are passed through as extra query pairs.
    pub fn list_user_services(
        &self,
        category: Category,
        user_id: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<Value>, FetchError> {
        let user_id = require_id(user_id)?;
        let endpoint = format!("getUser{}Services", category.endpoint_stem());
        let url = self.endpoint(&endpoint)?;

        let mut query = vec![("userId", user_id)];
        query.extend(filters.iter().copied());

        let response = self.client.get(url).query(&query).send()?;
        let body = Self::read_json(response, &endpoint)?;

        serde_json::from_value(unwrap_data(body)).map_err(|source| FetchError::Decode {
            endpoint,
            source,
        })
    }
}

fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
