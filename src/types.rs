use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// How hard a topic is to pick up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["Beginner", "Intermediate", "Advanced"],
            )),
        }
    }
}

/// Expanded content for a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    pub summary: String,
    pub key_points: Vec<String>,
    pub detailed_info: DetailedInfo,
    pub learning_path: LearningPath,
    #[serde(default)]
    pub practical_info: PracticalInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedInfo {
    pub definition: String,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub related_concepts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub time_estimate: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticalInfo {
    #[serde(default)]
    pub how_to_implement: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl NodeDetails {
    /// Minimum content the detail view relies on
    pub fn validate(&self) -> Result<(), String> {
        if self.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        if self.key_points.iter().all(|p| p.trim().is_empty()) {
            return Err("keyPoints is empty".to_string());
        }
        Ok(())
    }
}

/// Static FAQ entry
#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Static use-case card
#[derive(Debug, Clone, Serialize)]
pub struct UseCase {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub benefits: &'static [&'static str],
}

/// Liveness plus AI adapter status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `connected` when a provider is configured, `fallback mode` otherwise
    pub ai_status: String,
    /// Same value as `ai_status`, under the key older clients read
    pub gemini_status: String,
    pub ai_provider: Option<String>,
}

impl HealthReport {
    pub fn new(ai_status: &str, ai_provider: Option<&str>) -> Self {
        Self {
            status: "Server is running".to_string(),
            timestamp: Utc::now(),
            ai_status: ai_status.to_string(),
            gemini_status: ai_status.to_string(),
            ai_provider: ai_provider.map(str::to_string),
        }
    }
}

/// Stub identity (see [`crate::identity`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        }
    }
}
