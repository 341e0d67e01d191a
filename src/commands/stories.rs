//! Story selection from fetched feeds

use crate::core::{SourceTag, StoryRecord};

/// Local stories taken per puzzle
pub const LOCAL_STORIES: usize = 4;

/// Syndicated stories taken per puzzle
pub const SYNDICATED_STORIES: usize = 1;

/// Pick the first local stories followed by the first syndicated ones
///
/// Feed order is preserved within each source.
#[must_use]
pub fn select_stories(feeds: &[StoryRecord]) -> Vec<StoryRecord> {
    let local = feeds
        .iter()
        .filter(|s| s.source == SourceTag::Local)
        .take(LOCAL_STORIES);
    let syndicated = feeds
        .iter()
        .filter(|s| s.source == SourceTag::Syndicated)
        .take(SYNDICATED_STORIES);

    local.chain(syndicated).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(title: &str, source: SourceTag) -> StoryRecord {
        StoryRecord::new(title, "", format!("https://feed.example/{title}"), source)
    }

    #[test]
    fn takes_four_local_then_one_syndicated() {
        let feeds: Vec<StoryRecord> = [
            ("n1", SourceTag::Syndicated),
            ("l1", SourceTag::Local),
            ("l2", SourceTag::Local),
            ("n2", SourceTag::Syndicated),
            ("l3", SourceTag::Local),
            ("l4", SourceTag::Local),
            ("l5", SourceTag::Local),
        ]
        .into_iter()
        .map(|(t, s)| feed(t, s))
        .collect();

        let titles: Vec<String> = select_stories(&feeds).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["l1", "l2", "l3", "l4", "n1"]);
    }

    #[test]
    fn missing_sources_are_skipped() {
        let feeds = vec![feed("n1", SourceTag::Syndicated)];
        assert_eq!(select_stories(&feeds).len(), 1);
        assert!(select_stories(&[]).is_empty());
    }
}
