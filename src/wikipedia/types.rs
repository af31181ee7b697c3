use serde::Deserialize;

/// Plain-text article as returned by the encyclopedia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub url: String,
}

/// Outcome of looking a title up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleLookup {
    Found(Article),
    /// The title names a disambiguation page; these are the candidate titles.
    Disambiguation(Vec<String>),
    NotFound,
}

/// Lead section: everything before the first section header.
pub fn lead_section(content: &str) -> String {
    let end = content.find("\n==").unwrap_or(content.len());
    content[..end].trim().to_string()
}

// --- Action API wire format (formatversion=2) ---

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<Q> {
    pub query: Option<Q>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagesQuery {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    pub extract: Option<String>,
    pub fullurl: Option<String>,
    pub pageprops: Option<PageProps>,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageProps {
    pub disambiguation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageLink {
    pub title: String,
}

impl Page {
    pub(crate) fn into_lookup(self) -> ArticleLookup {
        if self.missing || self.invalid {
            return ArticleLookup::NotFound;
        }

        let is_disambiguation = self
            .pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some());
        if is_disambiguation {
            return ArticleLookup::Disambiguation(
                self.links.into_iter().map(|l| l.title).collect(),
            );
        }

        let content = self.extract.unwrap_or_default();
        let url = self.fullurl.unwrap_or_else(|| {
            format!("https://en.wikipedia.org/wiki/{}", self.title.replace(' ', "_"))
        });
        ArticleLookup::Found(Article {
            summary: lead_section(&content),
            title: self.title,
            content,
            url,
        })
    }
}
