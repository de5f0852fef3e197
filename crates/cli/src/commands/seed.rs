//! Provision content collections.
//!
//! Content kinds have no create endpoints; this command is how services,
//! projects, blog posts, and testimonials get into the store. Collections
//! that already hold records are left alone unless `--force` is given.

use std::path::Path;

use chrono::Utc;
use tracing::info;

use nexora_api::Store;
use nexora_api::db::StoreError;
use nexora_core::{Record, SeedContent};

use super::{CliError, open_store};

/// Records inserted per collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub services: usize,
    pub projects: usize,
    pub posts: usize,
    pub testimonials: usize,
}

impl SeedReport {
    /// Total records inserted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.services + self.projects + self.posts + self.testimonials
    }
}

/// Run the `seed` command.
///
/// # Errors
///
/// Returns an error if the bundle cannot be read or parsed, or if the store
/// is unavailable or rejects an insert.
pub async fn run(file: Option<&Path>, force: bool) -> Result<(), CliError> {
    let content = match file {
        Some(path) => load_bundle(path).await?,
        None => SeedContent::defaults(Utc::now()),
    };

    info!(records = content.len(), "Loaded content");

    let store = open_store()?;
    let report = seed_store(&store, &content, force).await?;

    info!(
        services = report.services,
        projects = report.projects,
        posts = report.posts,
        testimonials = report.testimonials,
        total = report.total(),
        "Seeding complete"
    );
    Ok(())
}

/// Read and validate a YAML content bundle.
async fn load_bundle(path: &Path) -> Result<SeedContent, CliError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
    parse_bundle(&text)
}

fn parse_bundle(text: &str) -> Result<SeedContent, CliError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Insert `content` into its collections.
///
/// # Errors
///
/// Returns the first store error encountered; records inserted before it
/// stay in the store.
pub async fn seed_store(
    store: &Store,
    content: &SeedContent,
    force: bool,
) -> Result<SeedReport, StoreError> {
    Ok(SeedReport {
        services: seed_collection(store, &content.services, force).await?,
        projects: seed_collection(store, &content.projects, force).await?,
        posts: seed_collection(store, &content.posts, force).await?,
        testimonials: seed_collection(store, &content.testimonials, force).await?,
    })
}

async fn seed_collection<R: Record>(
    store: &Store,
    records: &[R],
    force: bool,
) -> Result<usize, StoreError> {
    if records.is_empty() {
        return Ok(0);
    }

    if !force {
        let existing = store.fetch_all::<R>().await?.len();
        if existing > 0 {
            info!(
                collection = R::COLLECTION,
                existing, "Collection not empty, skipping"
            );
            return Ok(0);
        }
    }

    for record in records {
        store.create(record).await?;
    }

    info!(collection = R::COLLECTION, inserted = records.len(), "Collection seeded");
    Ok(records.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nexora_api::db::MemoryDocumentStore;
    use nexora_core::{Service, Testimonial};

    use super::*;

    fn memory_store() -> Store {
        Store::from_store(MemoryDocumentStore::new("test"))
    }

    #[tokio::test]
    async fn test_seed_defaults_into_empty_store() {
        let store = memory_store();
        let report = seed_store(&store, &SeedContent::defaults(Utc::now()), false)
            .await
            .unwrap();

        assert_eq!(
            report,
            SeedReport {
                services: 5,
                projects: 3,
                posts: 1,
                testimonials: 2,
            }
        );
        assert_eq!(store.fetch_all::<Service>().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_collections() {
        let store = memory_store();
        let content = SeedContent::defaults(Utc::now());
        seed_store(&store, &content, false).await.unwrap();

        let report = seed_store(&store, &content, false).await.unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(store.fetch_all::<Testimonial>().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_force_inserts_again() {
        let store = memory_store();
        let content = SeedContent::defaults(Utc::now());
        seed_store(&store, &content, false).await.unwrap();

        let report = seed_store(&store, &content, true).await.unwrap();
        assert_eq!(report.total(), 11);
        assert_eq!(store.fetch_all::<Service>().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_seed_unavailable_store_fails() {
        let store = Store::unavailable("DATABASE_URL is not set");
        let result = seed_store(&store, &SeedContent::defaults(Utc::now()), false).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_parse_bundle() {
        let bundle = parse_bundle(
            r"
testimonials:
  - name: J. Doe
    role: VP Engineering
    quote: Shipped on time.
    avatar: https://cdn.example.com/jdoe.png
",
        )
        .unwrap();
        assert_eq!(bundle.testimonials.len(), 1);
        assert!(bundle.services.is_empty());
    }

    #[test]
    fn test_parse_bundle_rejects_bad_url() {
        let err = parse_bundle(
            r"
testimonials:
  - name: J. Doe
    quote: Shipped on time.
    avatar: not-a-url
",
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Bundle(_)));
    }
}
