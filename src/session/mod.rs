mod command;
mod dashboard_session;
mod errors;

pub use dashboard_session::DashboardSession;
