use std::collections::{HashMap, HashSet};

use quiz_core::StudyNote;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteSectionVm {
    pub heading: String,
    pub points_html: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteCardVm {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub source: String,
    pub sections: Vec<NoteSectionVm>,
}

impl From<&StudyNote> for NoteCardVm {
    fn from(note: &StudyNote) -> Self {
        Self {
            icon: note.icon.clone(),
            title: note.title.clone(),
            subtitle: note.subtitle.clone(),
            source: note.source.clone(),
            sections: note
                .sections
                .iter()
                .map(|section| NoteSectionVm {
                    heading: section.heading.clone(),
                    points_html: section.points.iter().map(|p| markdown_to_html(p)).collect(),
                })
                .collect(),
        }
    }
}

#[must_use]
pub fn map_note_cards(notes: &[StudyNote]) -> Vec<NoteCardVm> {
    notes.iter().map(NoteCardVm::from).collect()
}

#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "span", "br", "em", "strong", "b", "i", "del", "code", "ul", "ol", "li", "a",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
