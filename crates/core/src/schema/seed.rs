//! Default site content.
//!
//! Served by the API whenever a content collection is empty or the store
//! cannot be reached, and written to the store by `nexora-cli seed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{BlogPost, Project, Service, Testimonial};

/// A bundle of content records, one list per collection.
///
/// Also the shape of the YAML files accepted by `nexora-cli seed --file`;
/// omitted lists are empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeedContent {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl SeedContent {
    /// Build the default content set.
    ///
    /// `published_at` dates the default blog post; the API passes its
    /// startup time.
    #[must_use]
    pub fn defaults(published_at: DateTime<Utc>) -> Self {
        Self {
            services: default_services(),
            projects: default_projects(),
            posts: default_posts(published_at),
            testimonials: default_testimonials(),
        }
    }

    /// Total number of records across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len() + self.projects.len() + self.posts.len() + self.testimonials.len()
    }

    /// Returns true if the bundle holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn service(icon: &str, title: &str, slug: &str, summary: &str, featured: bool) -> Service {
    Service {
        icon: icon.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        summary: summary.to_string(),
        content: None,
        featured,
    }
}

fn project(title: &str, slug: &str, summary: &str, tags: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        slug: slug.to_string(),
        summary: summary.to_string(),
        content: None,
        images: None,
        tags: Some(tags.iter().map(ToString::to_string).collect()),
        metrics: None,
    }
}

fn testimonial(name: &str, role: &str, company: &str, quote: &str) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: Some(role.to_string()),
        company: Some(company.to_string()),
        quote: quote.to_string(),
        avatar: None,
    }
}

/// The five core service lines, featured first.
#[must_use]
pub fn default_services() -> Vec<Service> {
    vec![
        service(
            "Code",
            "Software & Web Development",
            "software-web-development",
            "Custom applications, modern web platforms, and scalable architectures.",
            true,
        ),
        service(
            "Shield",
            "Cybersecurity & Network Solutions",
            "cybersecurity-network",
            "Proactive defense, audits, and zero-trust strategies for resilient systems.",
            false,
        ),
        service(
            "GitBranch",
            "Digital Transformation & IT Consultancy",
            "digital-transformation",
            "Roadmaps, process automation, and change management for enterprise evolution.",
            false,
        ),
        service(
            "Cloud",
            "Cloud Services",
            "cloud-services",
            "Cloud-native design, infrastructure as code, and cost optimization.",
            false,
        ),
        service(
            "LineChart",
            "Data & Analytics",
            "data-analytics",
            "Dashboards, ML pipelines, and insights that move the business.",
            false,
        ),
    ]
}

/// Showcase projects.
#[must_use]
pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "Nebula Commerce Platform",
            "nebula-commerce",
            "Composable eCommerce with sub-second TTFB and 99.99% uptime.",
            &["Next.js", "Edge", "MongoDB"],
        ),
        project(
            "Aegis SOC Automation",
            "aegis-soc",
            "SOAR workflows cutting incident response time by 68%.",
            &["Python", "SIEM", "Playbooks"],
        ),
        project(
            "Stratus Cloud Migration",
            "stratus-migration",
            "Multi-cloud migration with 32% cost reduction.",
            &["Kubernetes", "IaC", "GCP/AWS"],
        ),
    ]
}

/// The launch blog post, dated `published_at`.
#[must_use]
pub fn default_posts(published_at: DateTime<Utc>) -> Vec<BlogPost> {
    vec![BlogPost {
        title: "Designing for Velocity and Safety".to_string(),
        slug: "velocity-and-safety".to_string(),
        author: "NEXORA Team".to_string(),
        date: published_at,
        tags: Some(vec!["Architecture".to_string(), "DX".to_string()]),
        excerpt: Some("How we deliver fast without compromising security.".to_string()),
        cover_image: None,
        content: "We balance platform engineering, guardrails, and automation to ship safely."
            .to_string(),
    }]
}

/// Sample client quotes.
#[must_use]
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "A. Rivera",
            "CTO",
            "Orbit Labs",
            "NEXORA accelerated our roadmap and hardened our security posture.",
        ),
        testimonial(
            "M. Chen",
            "Head of Data",
            "QuantumX",
            "From pipeline reliability to dashboards, they delivered.",
        ),
    ]
}
