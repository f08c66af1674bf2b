//! Store locator page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::catalog::{self, Store};

/// Store locations page template.
#[derive(Template, WebTemplate)]
#[template(path = "stores.html")]
pub struct StoresTemplate {
    pub stores: &'static [Store],
}

/// Display the three physical stores.
#[instrument]
pub async fn stores() -> impl IntoResponse {
    StoresTemplate {
        stores: catalog::stores(),
    }
}
