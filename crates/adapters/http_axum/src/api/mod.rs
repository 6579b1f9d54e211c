//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod location;
#[allow(clippy::missing_errors_doc)]
pub mod locations;

use axum::Router;
use axum::routing::{get, post};

use geotrack_app::ports::LocationRepository;

use crate::state::AppState;

/// Build the `/api/tracker` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        // Ingestion
        .route("/location", post(location::create::<R>))
        // Queries
        .route("/locations", get(locations::list::<R>))
        .route("/latest/{imei}", get(devices::latest::<R>))
        .route("/stats/{imei}", get(devices::stats::<R>))
}
