pub mod choice_renderer;
pub mod gap_renderer;
pub mod renderer;

pub use choice_renderer::ChoiceRenderer;
pub use gap_renderer::GapRenderer;
pub use renderer::{
    Condition, QuestionRenderer, RenderReport, RenderedQuestion, ScoringRule, SubItemKind,
};
