mod dimensions;
mod fact;
mod party;

pub use dimensions::{CodeRow, TimeRow};
pub use fact::PaymentFact;
pub use party::{Party, PartyTables};
