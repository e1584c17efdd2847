// Routed pages. Each owns its signals and fetches.

mod contact;
mod home;

pub use contact::{ContactPage, FormFeedback, FormStatus, OfficeList};
pub use home::HomePage;
