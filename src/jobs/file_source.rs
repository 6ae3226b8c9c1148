//! Offline job source backed by a JSON file of postings

use crate::jobs::{JobPosting, JobQuery, JobSource};
use crate::processing::normalizer::normalize;
use anyhow::{bail, Context};
use std::path::{Path, PathBuf};

const SOURCE_NAME: &str = "file";

/// Prefixes `JobQuery::search_terms` adds for weak and strong profiles
const SENIORITY_WORDS: &[&str] = &["junior", "senior"];

/// Reads a JSON array of postings on every search
#[derive(Debug, Clone)]
pub struct FileJobSource {
    path: PathBuf,
}

impl FileJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Like `new`, but fails up front when the file is missing
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if !path.is_file() {
            bail!("postings file not found: {}", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> anyhow::Result<Vec<JobPosting>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let mut postings: Vec<JobPosting> = serde_json::from_str(&content)
            .with_context(|| format!("invalid postings in {}", self.path.display()))?;

        for posting in &mut postings {
            if posting.source.is_empty() {
                posting.source = SOURCE_NAME.to_string();
            }
        }
        Ok(postings)
    }
}

impl JobSource for FileJobSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    /// Postings whose title contains every word of the query's search terms.
    ///
    /// A leading seniority word is a preference rather than a filter: titles
    /// carrying it are listed first. Postings outside the query location are
    /// dropped unless they are remote or list no location.
    fn search(&self, query: &JobQuery) -> anyhow::Result<Vec<JobPosting>> {
        let terms = normalize(&query.search_terms());
        let mut words: Vec<&str> = terms.split_whitespace().collect();
        let seniority = words.first().copied().filter(|word| SENIORITY_WORDS.contains(word));
        if seniority.is_some() {
            words.remove(0);
        }
        let location = normalize(&query.location);

        let (mut preferred, mut rest): (Vec<JobPosting>, Vec<JobPosting>) = self
            .load()?
            .into_iter()
            .filter(|posting| {
                let title = normalize(&posting.title);
                words.iter().all(|word| title.contains(word))
            })
            .filter(|posting| matches_location(posting, &location))
            .partition(|posting| {
                seniority.is_some_and(|level| normalize(&posting.title).contains(level))
            });

        preferred.append(&mut rest);
        preferred.truncate(query.max_results);
        Ok(preferred)
    }
}

fn matches_location(posting: &JobPosting, location: &str) -> bool {
    if location.is_empty() {
        return true;
    }
    let posting_location = normalize(&posting.location);
    posting_location.is_empty()
        || posting_location.contains(location)
        || posting_location.contains("remote")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const POSTINGS: &str = r#"[
        {"company": "Acme", "title": "Senior Data Analyst", "location": "Pune, India", "url": "https://acme.example/1", "salary": "12 LPA"},
        {"company": "Globex", "title": "Data-Analyst Intern", "location": "Remote", "url": "https://globex.example/2"},
        {"company": "Initech", "title": "Junior Data Analyst", "location": "Bengaluru, India", "url": "https://initech.example/3", "source": "referral"},
        {"company": "Hooli", "title": "Rust Engineer", "location": "Berlin, Germany", "url": "https://hooli.example/4"},
        {"company": "Umbrella", "title": "Software Developer", "location": "Chennai, India", "url": "https://umbrella.example/5"}
    ]"#;

    fn postings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn companies(postings: &[JobPosting]) -> Vec<&str> {
        postings.iter().map(|p| p.company.as_str()).collect()
    }

    #[test]
    fn test_filters_by_role() {
        let file = postings_file(POSTINGS);
        let source = FileJobSource::new(file.path());

        let results = source.search(&JobQuery::new("Data Analyst", Vec::new())).unwrap();
        assert_eq!(companies(&results), vec!["Acme", "Globex", "Initech"]);
        assert_eq!(results[0].salary.as_deref(), Some("12 LPA"));
        assert_eq!(results[0].source, "file");
        assert_eq!(results[2].source, "referral");
    }

    #[test]
    fn test_score_picks_seniority() {
        let file = postings_file(POSTINGS);
        let source = FileJobSource::new(file.path());
        let query = |score| JobQuery::new("Data Analyst", Vec::new()).with_score(score);

        let weak = source.search(&query(30)).unwrap();
        assert_eq!(companies(&weak), vec!["Initech", "Acme", "Globex"]);

        let strong = source.search(&query(90)).unwrap();
        assert_eq!(companies(&strong), vec!["Acme", "Globex", "Initech"]);

        let top_weak = source.search(&query(30).with_max_results(1)).unwrap();
        let top_strong = source.search(&query(90).with_max_results(1)).unwrap();
        assert_eq!(companies(&top_weak), vec!["Initech"]);
        assert_eq!(companies(&top_strong), vec!["Acme"]);
    }

    #[test]
    fn test_empty_role_searches_by_skills() {
        let file = postings_file(POSTINGS);
        let source = FileJobSource::new(file.path());

        let query = JobQuery::new("", vec!["rust".to_string()]).with_location("");
        assert_eq!(companies(&source.search(&query).unwrap()), vec!["Hooli"]);

        // Berlin is outside the default location
        let query = JobQuery::new("", vec!["rust".to_string()]);
        assert!(source.search(&query).unwrap().is_empty());

        let query = JobQuery::new("", Vec::new());
        assert_eq!(companies(&source.search(&query).unwrap()), vec!["Umbrella"]);
    }

    #[test]
    fn test_location_keeps_remote_postings() {
        let file = postings_file(POSTINGS);
        let source = FileJobSource::new(file.path());

        let query = JobQuery::new("data analyst", Vec::new()).with_location("pune");
        assert_eq!(companies(&source.search(&query).unwrap()), vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_errors() {
        let missing = FileJobSource::new("/nonexistent/postings.json");
        assert!(missing.search(&JobQuery::new("", Vec::new())).is_err());
        assert!(FileJobSource::open("/nonexistent/postings.json").is_err());

        let file = postings_file("{not json");
        let broken = FileJobSource::new(file.path());
        let err = broken.search(&JobQuery::new("", Vec::new())).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid postings"));
    }
}
