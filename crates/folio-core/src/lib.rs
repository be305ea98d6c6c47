pub mod app_config;
pub mod config;
pub mod projector;
pub mod records;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use projector::{
    project_image, project_profile, project_project_list, project_resume_bytes,
    IMAGE_DATA_URI_PREFIX,
};
pub use records::{ImageColumn, ProfileRecord, ProfileView, ProjectRecord, ProjectView};
pub use view::{
    apply_filters, derive_tag_vocabulary, paginate, preview, split_tags, Page, ProjectBrowser,
    PAGE_SIZE, PREVIEW_SIZE,
};
