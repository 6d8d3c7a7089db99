mod error;
mod model;
mod parse;
mod query;
mod transport;

pub use error::FetchError;
pub use model::{AssociationPage, AssociationRow, CategoryScore};
pub use query::{ENDPOINT, target_link};
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
pub use model::TargetRef;
#[cfg(test)]
pub use transport::HttpReply;

use parse::decode_reply;
use query::request_body;
use tracing::{info, warn};

/// Issues the fixed association query once and decodes the reply.
pub fn fetch_associations<T: Transport + ?Sized>(
    transport: &T,
) -> Result<AssociationPage, FetchError> {
    info!(endpoint = ENDPOINT, "requesting disease associations");
    let result = transport
        .post_json(ENDPOINT, &request_body())
        .and_then(|reply| decode_reply(&reply));

    match &result {
        Ok(page) => info!(rows = page.row_count(), "association rows decoded"),
        Err(error) => warn!(%error, "association fetch failed"),
    }

    result
}
