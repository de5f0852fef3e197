//! Site content records.
//!
//! These are provisioned out-of-band and only ever read by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::WebUrl;

/// A service offering shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Icon name understood by the frontend (e.g. `Code`, `Shield`).
    pub icon: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: Option<String>,
    pub images: Option<Vec<WebUrl>>,
    pub tags: Option<Vec<String>>,
    /// Free-form key figures (e.g. `{"uptime": "99.99%"}`).
    pub metrics: Option<Map<String, Value>>,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Option<Vec<String>>,
    pub excerpt: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<WebUrl>,
    pub content: String,
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub avatar: Option<WebUrl>,
}
