// src/presentation/http/controllers/api.rs
//! `GET /api`: a catalogue of the available endpoints, read from the OpenAPI
//! document so it always matches the routes that are actually served.
use crate::presentation::http::openapi::ApiDoc;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{
    OpenApi, ToSchema,
    openapi::{
        self,
        path::{Operation, ParameterIn},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EndpointDescription {
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_parameters: Vec<String>,
    pub accepts_body: bool,
}

/// Describe every endpoint of the API.
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Endpoint catalogue keyed by `METHOD /path`.", body = BTreeMap<String, EndpointDescription>)
    ),
    tag = "System"
)]
pub async fn list_endpoints() -> Json<BTreeMap<String, EndpointDescription>> {
    Json(endpoint_catalogue(&ApiDoc::openapi()))
}

pub fn endpoint_catalogue(doc: &openapi::OpenApi) -> BTreeMap<String, EndpointDescription> {
    let mut catalogue = BTreeMap::new();

    for (path, item) in doc.paths.paths.iter() {
        let operations = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations
            .into_iter()
            .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
        {
            catalogue.insert(format!("{method} {path}"), describe(operation));
        }
    }

    catalogue
}

fn describe(operation: &Operation) -> EndpointDescription {
    let parameters = operation.parameters.as_deref().unwrap_or_default();
    let names_in = |location: fn(&ParameterIn) -> bool| {
        parameters
            .iter()
            .filter(|parameter| location(&parameter.parameter_in))
            .map(|parameter| parameter.name.clone())
            .collect::<Vec<_>>()
    };

    EndpointDescription {
        description: operation
            .summary
            .clone()
            .or_else(|| operation.description.clone())
            .unwrap_or_default(),
        queries: names_in(|location| matches!(location, ParameterIn::Query)),
        path_parameters: names_in(|location| matches!(location, ParameterIn::Path)),
        accepts_body: operation.request_body.is_some(),
    }
}
