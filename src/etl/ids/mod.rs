mod party_id;
mod payment_id;

pub use party_id::PartyId;
pub use payment_id::PaymentId;
