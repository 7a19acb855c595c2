/// Application name
pub const APP_NAME: &str = "ErudioAI";

/// Default backend base URL (hosted deployment)
pub const DEFAULT_API_URL: &str = "https://erudioai-backend.onrender.com";

/// Scores at or above this percentage mark a topic as mastered
pub const MASTERY_THRESHOLD: u8 = 80;

/// Highest valid quiz score
pub const MAX_SCORE: u8 = 100;

/// Simulated latency of lesson-plan generation in milliseconds
pub const DEFAULT_PLAN_DELAY_MS: u64 = 1500;

/// Canned assistant reply used when chatting offline
pub const OFFLINE_ASSISTANT_REPLY: &str =
    "This is a simulated AI response to your query. In a real app, this would come from an LLM.";

/// Title of a chat session not tied to a topic
pub const DEFAULT_CHAT_TITLE: &str = "New AI Chat";

/// Day used for a revision when no weekday can be derived from the requested date
pub const FALLBACK_REVISION_DAY: &str = "Friday";

/// Persisted key-value storage keys
pub const KEY_USER: &str = "erudio_user";
pub const KEY_ACCESS_TOKEN: &str = "access_token";
pub const KEY_STUDY_SECONDS: &str = "study_time_seconds";
pub const KEY_QUIZ_HISTORY: &str = "quiz_history";
pub const KEY_TOPIC_CONTENT_PREFIX: &str = "topic_content_";
pub const KEY_TOPIC_NOTES_PREFIX: &str = "topic_notes_";

/// Dashboard list limits
pub const TODAYS_PLAN_LIMIT: usize = 3;
pub const PRIORITY_BANNER_LIMIT: usize = 2;
