/// Common error types: duplicate channel, missing channel.
pub mod error;
/// Pub/Sub: Station, Channel, Subscription, Payload.
pub mod pubsub;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Operation errors and result type.
pub use error::{StationError, StationResult};
/// Pub/Sub API.
pub use pubsub::{Channel, Payload, Station, Subscription};
