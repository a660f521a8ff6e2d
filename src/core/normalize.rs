//! Topic normalization: matching view and display view.

/// The two views of a user topic used by the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTopic {
    /// Trimmed, whitespace-collapsed, lower-cased. Keyword rules match against this.
    pub lowered: String,
    /// Title-cased display form substituted into scenes, prompt and add-ons.
    pub title: String,
}

impl NormalizedTopic {
    /// Normalize a raw topic. Returns `None` when nothing but whitespace remains.
    pub fn new(raw: &str) -> Option<Self> {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            return None;
        }
        Some(Self {
            lowered: collapsed.to_lowercase(),
            title: title_case(&collapsed),
        })
    }

    /// Hashtag token: title with whitespace removed, lower-cased.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// Upper-case the first character of every whitespace-separated word and
/// leave the rest of the word untouched. Whitespace runs collapse to a
/// single space.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn slugify(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
