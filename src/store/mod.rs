pub mod schedule_store;
pub mod state;

pub use schedule_store::ScheduleStore;
pub use state::StoreState;
