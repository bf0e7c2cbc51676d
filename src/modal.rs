use crate::content::{LoopVariant, SiteContent};

pub const SNIPPET_SCALE: f64 = 1.04;
pub const FALLBACK_BACKGROUND: &str = "#181717";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModalVisual {
    Snippet { variant: LoopVariant, scale: f64 },
    Fallback { background: &'static str },
}

impl ModalVisual {
    fn for_snippet(snippet: Option<LoopVariant>) -> Self {
        match snippet {
            Some(variant) => Self::Snippet {
                variant,
                scale: SNIPPET_SCALE,
            },
            None => Self::Fallback {
                background: FALLBACK_BACKGROUND,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    pub project_id: u32,
    pub title: String,
    pub subtitle: String,
    pub details: Vec<String>,
    pub visual: ModalVisual,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectModal {
    view: Option<ModalView>,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, content: &SiteContent, id: u32, snippet: Option<LoopVariant>) -> bool {
        let Some(project) = content.project(id) else {
            return false;
        };

        self.view = Some(ModalView {
            project_id: project.id,
            title: project.title.clone(),
            subtitle: project.subtitle.clone(),
            details: project.details.clone(),
            visual: ModalVisual::for_snippet(snippet),
        });
        true
    }

    pub fn close(&mut self) -> bool {
        self.view.take().is_some()
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            ""
        }
    }
}
