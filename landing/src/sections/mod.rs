// Page sections and shared chrome pieces.
// Sections take plain data as props; pages own the signals.

mod academic;
mod footer;
mod hero;
mod insights;
mod mission;
mod nav;
mod notice;
mod programs;
mod reveal;
mod skills;

pub use academic::AcademicRecognition;
pub use footer::Footer;
pub use hero::Hero;
pub use insights::{ArticleCard, ArticleGrid, Insights};
pub use mission::{Mission, StatsGrid};
pub use nav::{BrandMark, NavLinks, UtilityBar};
pub use notice::ErrorNotice;
pub use programs::ProgramHighlights;
pub use reveal::Reveal;
pub use skills::SkillDevelopment;
