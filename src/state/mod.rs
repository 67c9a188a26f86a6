use sqlx::PgPool;

/// The two values eligible to receive votes. Fixed for the process lifetime;
/// matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOptions {
    pub first: String,
    pub second: String,
}

impl VoteOptions {
    pub fn new(first: String, second: String) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, value: &str) -> bool {
        value == self.first || value == self.second
    }

    pub fn pair(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub options: VoteOptions,
}

impl AppState {
    pub fn new(db: PgPool, options: VoteOptions) -> Self {
        Self { db, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_exact_and_case_sensitive() {
        let options = VoteOptions::new("cats".to_string(), "dogs".to_string());
        assert!(options.contains("cats"));
        assert!(options.contains("dogs"));
        assert!(!options.contains("Cats"));
        assert!(!options.contains("birds"));
        assert!(!options.contains(""));
    }
}
