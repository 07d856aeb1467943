pub mod choice;
pub mod gap;
pub mod question;
pub mod score;

pub use choice::{ChoiceOption, ChoiceQuestion};
pub use gap::{GapSegment, GapText};
pub use question::{QuestionRecord, QuestionType, LINE_BREAK};
pub use score::ScoreAllocation;
