pub mod loading;
pub mod maintenance;
pub mod search;
