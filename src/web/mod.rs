//! Web form front end

pub mod form;
pub mod handler;
pub mod page;
mod server;

pub use form::FormFields;
pub use handler::{landing_page, projection_json, submit_form, PageResponse};
pub use page::{PageRenderer, PageView};
pub use server::{router, run_server};
