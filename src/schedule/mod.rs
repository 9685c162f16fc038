pub mod next;
pub mod projector;

pub use next::next_prayer;
pub use projector::{
    FridayPolicy, project, project_daily, project_daily_with, project_jummah, project_week,
};
