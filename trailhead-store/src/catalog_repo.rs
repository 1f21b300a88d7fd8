use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use trailhead_catalog::{CatalogError, CatalogRepository, Experience, TimeSlot};

/// Catalog backed by the dataset compiled into the binary
pub struct StaticCatalogRepository {
    experiences: Vec<Experience>,
}

impl StaticCatalogRepository {
    pub fn new() -> Self {
        Self { experiences: builtin_experiences() }
    }
}

impl Default for StaticCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn list_experiences(&self) -> Result<Vec<Experience>, CatalogError> {
        Ok(self.experiences.clone())
    }
}

/// Catalog read once from a JSON array of experiences
pub struct JsonCatalogRepository {
    experiences: Vec<Experience>,
}

impl JsonCatalogRepository {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", path.display(), e)))?;

        let repo = Self::from_json(&raw)?;
        tracing::info!("Loaded {} experiences from {}", repo.experiences.len(), path.display());
        Ok(repo)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let experiences: Vec<Experience> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for experience in &experiences {
            if !seen.insert(experience.id.as_str()) {
                return Err(CatalogError::DuplicateId(experience.id.clone()));
            }
        }

        Ok(Self { experiences })
    }
}

#[async_trait]
impl CatalogRepository for JsonCatalogRepository {
    async fn list_experiences(&self) -> Result<Vec<Experience>, CatalogError> {
        Ok(self.experiences.clone())
    }
}

fn slots(raw: &[(&str, u32, u32)]) -> Vec<TimeSlot> {
    raw.iter()
        .map(|(time, available, booked)| TimeSlot {
            time: time.to_string(),
            available_seats: *available,
            booked_seats: *booked,
        })
        .collect()
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

const SHORT_DESCRIPTION: &str =
    "Curated small-group experience. Certified guide. Safety first with gear included.";

/// The six launch experiences
pub fn builtin_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".to_string(),
            title: "Kayaking".to_string(),
            category: "Adventure".to_string(),
            location: "Udupi".to_string(),
            price: 999,
            rating: 4.8,
            review_count: 124,
            image: "/assets/kayaking-mangrove.jpg".to_string(),
            images: strings(&[
                "/assets/kayaking-mangrove.jpg",
                "/assets/kayaking-mangrove.jpg",
                "/assets/kayaking-mangrove.jpg",
            ]),
            description: format!(
                "{} Helmet and Life jackets along with an expert will accompany in kayaking.",
                SHORT_DESCRIPTION
            ),
            duration: "3 hours".to_string(),
            max_guests: 8,
            highlights: strings(&[
                "Scenic routes through mangroves",
                "Expert guide accompaniment",
                "Safety briefing included",
                "Minimum age 10",
            ]),
            inclusions: strings(&[
                "Kayaking equipment",
                "Life jackets and helmets",
                "Certified guide",
                "Safety briefing",
                "Refreshments",
            ]),
            host_name: "Shashwat Sharma".to_string(),
            host_avatar: "/placeholder.svg".to_string(),
            host_bio: "Adventure guide with 8+ years of experience in water sports".to_string(),
            verified: true,
            time_slots: slots(&[
                ("07:00 am", 8, 4),
                ("09:00 am", 8, 5),
                ("11:00 am", 8, 3),
                ("01:00 pm", 8, 8),
            ]),
        },
        Experience {
            id: "2".to_string(),
            title: "Kayaking".to_string(),
            category: "Adventure".to_string(),
            location: "Udupi, Karnataka".to_string(),
            price: 999,
            rating: 4.9,
            review_count: 89,
            image: "/assets/kayaking-lake.jpg".to_string(),
            images: strings(&["/assets/kayaking-lake.jpg"]),
            description: SHORT_DESCRIPTION.to_string(),
            duration: "3 hours".to_string(),
            max_guests: 10,
            highlights: strings(&["Scenic routes", "Trained guides", "Safety briefing"]),
            inclusions: strings(&["Equipment", "Guide", "Refreshments"]),
            host_name: "Partha Mitra".to_string(),
            host_avatar: "/placeholder.svg".to_string(),
            host_bio: "Water sports enthusiast and certified instructor".to_string(),
            verified: true,
            time_slots: slots(&[("08:00 am", 10, 3), ("10:00 am", 10, 6)]),
        },
        Experience {
            id: "3".to_string(),
            title: "Nandi Hills Sunrise".to_string(),
            category: "Nature".to_string(),
            location: "Bangalore".to_string(),
            price: 899,
            rating: 4.7,
            review_count: 256,
            image: "/assets/nandi-hills-sunrise.jpg".to_string(),
            images: strings(&["/assets/nandi-hills-sunrise.jpg"]),
            description: SHORT_DESCRIPTION.to_string(),
            duration: "4 hours".to_string(),
            max_guests: 15,
            highlights: strings(&["Sunrise viewpoint", "Photography spots", "Historical insights"]),
            inclusions: strings(&["Transportation", "Guide", "Breakfast"]),
            host_name: "Shashwat Sharma".to_string(),
            host_avatar: "/placeholder.svg".to_string(),
            host_bio: "Nature photographer and tour guide".to_string(),
            verified: true,
            time_slots: slots(&[("04:30 am", 15, 8), ("05:00 am", 15, 12)]),
        },
        Experience {
            id: "4".to_string(),
            title: "Coffee Trail".to_string(),
            category: "Nature".to_string(),
            location: "Coorg".to_string(),
            price: 1299,
            rating: 4.8,
            review_count: 178,
            image: "/assets/coffee-trail-coorg.jpg".to_string(),
            images: strings(&["/assets/coffee-trail-coorg.jpg"]),
            description: SHORT_DESCRIPTION.to_string(),
            duration: "5 hours".to_string(),
            max_guests: 12,
            highlights: strings(&["Coffee plantation tour", "Tasting session", "Local cuisine"]),
            inclusions: strings(&["Guide", "Coffee tasting", "Lunch"]),
            host_name: "Rajesh Kumar".to_string(),
            host_avatar: "/placeholder.svg".to_string(),
            host_bio: "Coffee plantation owner and guide".to_string(),
            verified: true,
            time_slots: slots(&[("09:00 am", 12, 5), ("02:00 pm", 12, 7)]),
        },
        Experience {
            id: "5".to_string(),
            title: "Boat Cruise".to_string(),
            category: "Adventure".to_string(),
            location: "Sunderban".to_string(),
            price: 999,
            rating: 4.6,
            review_count: 145,
            image: "/assets/boat-cruise.jpg".to_string(),
            images: strings(&["/assets/boat-cruise.jpg"]),
            description: SHORT_DESCRIPTION.to_string(),
            duration: "2 hours".to_string(),
            max_guests: 20,
            highlights: strings(&["Sunset views", "Wildlife spotting", "Refreshments onboard"]),
            inclusions: strings(&["Boat ride", "Guide", "Snacks"]),
            host_name: "Amit Das".to_string(),
            host_avatar: "/placeholder.svg".to_string(),
            host_bio: "Boat captain with 15 years experience".to_string(),
            verified: true,
            time_slots: slots(&[("05:00 pm", 20, 12), ("06:30 pm", 20, 15)]),
        },
        Experience {
            id: "6".to_string(),
            title: "Bunjee Jumping".to_string(),
            category: "Adventure".to_string(),
            location: "Manali".to_string(),
            price: 999,
            rating: 4.9,
            review_count: 312,
            image: "/assets/bungee-jumping.jpg".to_string(),
            images: strings(&["/assets/bungee-jumping.jpg"]),
            description: SHORT_DESCRIPTION.to_string(),
            duration: "1 hour".to_string(),
            max_guests: 5,
            highlights: strings(&["55m jump height", "Professional equipment", "Video recording"]),
            inclusions: strings(&["Safety equipment", "Instructor", "Jump video"]),
            host_name: "Vikram Singh".to_string(),
            host_avatar: "/placeholder.svg".to_string(),
            host_bio: "Certified bunjee instructor".to_string(),
            verified: true,
            time_slots: slots(&[("10:00 am", 5, 2), ("12:00 pm", 5, 4), ("02:00 pm", 5, 1)]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalog() {
        let repo = StaticCatalogRepository::new();
        let all = repo.list_experiences().await.unwrap();
        assert_eq!(all.len(), 6);

        let kayaking = repo.get_experience("1").await.unwrap().unwrap();
        assert_eq!(kayaking.time_slots.len(), 4);
        assert!(kayaking.slot("01:00 pm").unwrap().is_sold_out());

        assert!(repo.get_experience("7").await.unwrap().is_none());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let experiences = builtin_experiences();
        let ids: HashSet<&str> = experiences.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), experiences.len());
    }

    #[tokio::test]
    async fn test_json_catalog_round_trips_builtin_dataset() {
        let raw = serde_json::to_string(&builtin_experiences()).unwrap();
        let repo = JsonCatalogRepository::from_json(&raw).unwrap();
        assert_eq!(repo.list_experiences().await.unwrap(), builtin_experiences());
    }

    #[test]
    fn test_json_catalog_rejects_duplicates() {
        let mut experiences = builtin_experiences();
        experiences[1].id = "1".to_string();
        let raw = serde_json::to_string(&experiences).unwrap();

        assert!(matches!(
            JsonCatalogRepository::from_json(&raw),
            Err(CatalogError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_json_catalog_rejects_malformed_input() {
        assert!(matches!(
            JsonCatalogRepository::from_json("{\"not\": \"an array\"}"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let result = JsonCatalogRepository::load("does/not/exist.json").await;
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }
}
