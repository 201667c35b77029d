//! Resource clients for the HZS library REST API
//!
//! One client per resource, each a thin typed wrapper over [`HttpClient`].

pub mod authors;
pub mod books;
pub mod customers;
pub mod events;
pub mod exhibitions;
pub mod invoices;
pub mod rentals;
pub mod reservations;
pub mod rooms;
pub mod seminars;
pub mod sponsors;

use std::future::Future;

use validator::Validate;

use crate::{
    error::{ApiError, ApiResult},
    http::HttpClient,
};

/// Container for all resource clients
#[derive(Clone)]
pub struct Api {
    pub books: books::BooksApi,
    pub authors: authors::AuthorsApi,
    pub rentals: rentals::RentalsApi,
    pub customers: customers::CustomersApi,
    pub events: events::EventsApi,
    pub exhibitions: exhibitions::ExhibitionsApi,
    pub seminars: seminars::SeminarsApi,
    pub sponsors: sponsors::SponsorsApi,
    pub rooms: rooms::RoomsApi,
    pub reservations: reservations::ReservationsApi,
    pub invoices: invoices::InvoicesApi,
}

impl Api {
    /// Create all resource clients on top of the given HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self {
            books: books::BooksApi::new(http.clone()),
            authors: authors::AuthorsApi::new(http.clone()),
            rentals: rentals::RentalsApi::new(http.clone()),
            customers: customers::CustomersApi::new(http.clone()),
            events: events::EventsApi::new(http.clone()),
            exhibitions: exhibitions::ExhibitionsApi::new(http.clone()),
            seminars: seminars::SeminarsApi::new(http.clone()),
            sponsors: sponsors::SponsorsApi::new(http.clone()),
            rooms: rooms::RoomsApi::new(http.clone()),
            reservations: reservations::ReservationsApi::new(http.clone()),
            invoices: invoices::InvoicesApi::new(http),
        }
    }
}

/// Required-field check run before a payload leaves the client
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> ApiResult<()> {
    payload.validate().map_err(|errors| {
        let err = ApiError::application(422, errors.to_string());
        tracing::warn!("Rejected invalid payload: {}", err.message);
        err
    })
}

/// Per-event entries accepted by `keep`, across all `events`.
///
/// Events whose entries cannot be read are logged and skipped; events left
/// with no accepted entry are dropped.
pub(crate) async fn collect_per_event<E, T, Fut>(
    events: Vec<E>,
    event_id: impl Fn(&E) -> i64,
    fetch: impl Fn(i64) -> Fut,
    keep: impl Fn(&T) -> bool,
) -> Vec<(E, Vec<T>)>
where
    Fut: Future<Output = ApiResult<Vec<T>>>,
{
    let mut collected = Vec::new();
    for event in events {
        let id = event_id(&event);
        match fetch(id).await {
            Ok(all) => {
                let matching: Vec<T> = all.into_iter().filter(|entry| keep(entry)).collect();
                if !matching.is_empty() {
                    collected.push((event, matching));
                }
            }
            Err(e) => tracing::warn!(event_id = id, "Failed to fetch event entries: {}", e),
        }
    }
    collected
}
