//! Record schemas and their collections.
//!
//! Every record kind is stored in its own collection, named after the type
//! in lowercase (`BlogPost` lives in `blogpost`).

pub mod content;
pub mod seed;
pub mod submission;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use content::{BlogPost, Project, Service, Testimonial};
pub use seed::SeedContent;
pub use submission::{ContactMessage, NewsletterSubscriber};

/// A record kind that is persisted in a named collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection records of this kind are stored in.
    const COLLECTION: &'static str;
}

impl Record for Service {
    const COLLECTION: &'static str = "service";
}

impl Record for Project {
    const COLLECTION: &'static str = "project";
}

impl Record for BlogPost {
    const COLLECTION: &'static str = "blogpost";
}

impl Record for Testimonial {
    const COLLECTION: &'static str = "testimonial";
}

impl Record for NewsletterSubscriber {
    const COLLECTION: &'static str = "newslettersubscriber";
}

impl Record for ContactMessage {
    const COLLECTION: &'static str = "contactmessage";
}
