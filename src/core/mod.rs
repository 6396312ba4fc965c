/// Core functionality modules
///
/// The review session that drives the UI, and the input checks every
/// action runs before touching storage.

pub mod input;
pub mod session;

pub use input::{validate_card, validate_deck_name, CardFields};
pub use session::{CardView, ReviewSession};
