mod manager;

pub use manager::PlannerSession;
