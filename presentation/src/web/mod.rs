//! Web form front end
//!
//! A single page at `/`: `GET` renders the form, `POST` answers the
//! submitted question. Validation warnings survive the redirect in a signed
//! flash cookie.

pub mod flash;
mod handlers;
mod page;
mod router;

pub use flash::FlashSigner;
pub use router::{AppState, bind, create_router, serve};
