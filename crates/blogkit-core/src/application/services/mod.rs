//! Application services - orchestrate use cases.

pub mod layout_detector;
pub mod scaffold_service;

pub use layout_detector::LayoutDetector;
pub use scaffold_service::ScaffoldService;
