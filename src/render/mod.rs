//! Story rendering
//!
//! Turns a parsed story document into an ordered list of pages and blocks.
//! Typewriter blocks become the reveal targets that the scheduler animates;
//! everything else shows statically once its page reveals. Page visibility
//! is a coarse one-shot transition, independent of character typing, and
//! multiple pages may become visible at once.

use crate::scheduler::RevealTarget;
use crate::types::StoryRef;
use crate::types::story::{LegacyItem, ProjectEngine, StoryDocument};

/// One-shot page visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Hidden,
    Visible,
}

/// A content block inside a page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Shown as soon as the page is visible
    Static(String),
    /// Revealed character by character; `order` is the document position
    Typewriter { order: usize, text: String },
    Image { src: String, alt: String },
    /// An interactive component placeholder (rendered by the host)
    Component { name: String },
}

/// One scroll page of the story view
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub state: PageState,
    pub blocks: Vec<Block>,
}

impl Page {
    fn hidden() -> Self {
        Self {
            state: PageState::Hidden,
            blocks: Vec::new(),
        }
    }

    fn visible() -> Self {
        Self {
            state: PageState::Visible,
            blocks: Vec::new(),
        }
    }

    /// Reveal the page; once visible it never hides again
    pub fn reveal(&mut self) {
        self.state = PageState::Visible;
    }
}

/// A fully rendered story, ready for the scheduler
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStory {
    pub title: String,
    pub pages: Vec<Page>,
}

impl RenderedStory {
    /// Flatten the typewriter blocks into reveal targets, in document order
    pub fn reveal_targets(&self) -> Vec<RevealTarget> {
        self.pages
            .iter()
            .flat_map(|p| p.blocks.iter())
            .filter_map(|b| match b {
                Block::Typewriter { order, text } => Some(RevealTarget::new(*order, text.clone())),
                _ => None,
            })
            .collect()
    }
}

/// Assigns ascending document orders to typewriter blocks as they are laid
/// out
struct Layout {
    pages: Vec<Page>,
    next_order: usize,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            next_order: 0,
        }
    }

    fn page(&mut self, page: Page) -> &mut Page {
        self.pages.push(page);
        self.pages.last_mut().unwrap()
    }

    fn typewriter(&mut self, text: impl Into<String>) -> Block {
        let block = Block::Typewriter {
            order: self.next_order,
            text: text.into(),
        };
        self.next_order += 1;
        block
    }
}

/// Render a story document under its catalog metadata
pub fn render_story(doc: &StoryDocument, meta: &StoryRef) -> RenderedStory {
    match doc {
        StoryDocument::Modern(engine) => render_modern(engine, meta),
        StoryDocument::Legacy(legacy) => render_legacy(legacy, meta),
    }
}

fn project_banner(selection: &str, title: &str) -> String {
    format!("PROJECT: {:0>3} // {}", selection, title.to_uppercase())
}

fn render_modern(engine: &ProjectEngine, meta: &StoryRef) -> RenderedStory {
    let mut layout = Layout::new();

    if let Some(cover) = &engine.metadata.cover_image {
        let page = layout.page(Page::visible());
        page.blocks.push(Block::Image {
            src: cover.clone(),
            alt: format!("{} — cover", engine.metadata.title),
        });
    }

    {
        let banner = project_banner(&meta.selection, &engine.metadata.title);
        let author = format!("AUTHOR: {}", engine.metadata.author.to_uppercase());
        let version = format!("VERSION: {}", engine.metadata.version);
        let title = engine.metadata.title.clone();
        let page = layout.page(Page::visible());
        page.blocks.extend([
            Block::Static(banner),
            Block::Static(author),
            Block::Static(version),
            Block::Static(title),
        ]);
    }

    if !engine.timeline.is_empty() {
        let mut blocks = Vec::new();
        for entry in &engine.timeline {
            let badge = match &entry.region {
                Some(region) => format!("{} | {}", entry.year, region),
                None => entry.year.clone(),
            };
            blocks.push(Block::Static(badge));
            blocks.push(Block::Static(entry.title.clone()));
            if let Some(image) = &entry.image {
                blocks.push(Block::Image {
                    src: image.clone(),
                    alt: entry.title.clone(),
                });
            }
            blocks.push(layout.typewriter(entry.description.clone()));
            if let Some(connection) = &entry.connection {
                blocks.push(layout.typewriter(format!("CONNECTION: {connection}")));
            }
        }
        layout.page(Page::hidden()).blocks = blocks;
    }

    if let Some(logic) = &engine.sacred_logic {
        let concept = &logic.concept;
        let mut blocks = vec![
            Block::Static("Sacred Logic".to_string()),
            Block::Static(concept.name.clone()),
        ];
        if let Some(equation) = &concept.equation {
            blocks.push(Block::Static(equation.clone()));
        }
        if let Some(paradigm) = &concept.paradigm {
            blocks.push(Block::Static(paradigm.clone()));
        }
        blocks.push(layout.typewriter(concept.body().to_string()));
        layout.page(Page::hidden()).blocks = blocks;
    }

    if let Some(footer) = &engine.footer {
        let block = Block::Static(footer.clone());
        layout.page(Page::hidden()).blocks.push(block);
    }

    layout
        .page(Page::hidden())
        .blocks
        .push(Block::Static("RETURN TO TERMINAL".to_string()));

    RenderedStory {
        title: engine.metadata.title.clone(),
        pages: layout.pages,
    }
}

fn render_legacy(legacy: &crate::types::story::LegacyStory, meta: &StoryRef) -> RenderedStory {
    let mut layout = Layout::new();

    {
        let banner = project_banner(&meta.selection, &meta.title);
        let page = layout.page(Page::visible());
        page.blocks.extend([
            Block::Static(banner),
            Block::Static("AUTHOR: UNKNOWN".to_string()),
            Block::Static("VERSION: LEGACY".to_string()),
            Block::Static(meta.title.clone()),
            Block::Static("Decoding legacy archive format...".to_string()),
        ]);
    }

    let mut blocks = Vec::new();
    for item in &legacy.content {
        match item {
            LegacyItem::Text(text) => blocks.push(layout.typewriter(text.clone())),
            LegacyItem::Component { name, .. } => {
                blocks.push(Block::Component { name: name.clone() })
            }
        }
    }
    layout.page(Page::hidden()).blocks = blocks;

    layout
        .page(Page::hidden())
        .blocks
        .push(Block::Static("RETURN TO TERMINAL".to_string()));

    RenderedStory {
        title: meta.title.clone(),
        pages: layout.pages,
    }
}
