pub mod auth;

pub mod classes;

pub mod directory;

pub mod exams;

pub mod placement;

pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use directory::configure_directory_routes;
pub use exams::configure_exams_routes;
pub use placement::configure_placement_routes;
