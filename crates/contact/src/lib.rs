mod delivery;
mod draft;
mod error;
mod form;
mod state;
mod validation;

pub use delivery::*;
pub use draft::*;
pub use error::*;
pub use form::*;
pub use state::*;
pub use validation::*;
