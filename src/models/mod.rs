//! Data models module
//!
//! Wire shapes exchanged with the backend API. All records are plain data:
//! the backend owns validation, nothing here enforces invariants.

pub mod article;
pub mod board;
pub mod bulletin;
pub mod event;
pub mod home;
pub mod image;
pub mod member;
pub mod pagination;
pub mod resource;

// Re-export commonly used models
pub use article::{Article, ArticlePage, ContentResponse, EditorData, HtmlData};
pub use board::{Cadence, CadenceMember, CadenceWithMembers, ExecutiveMember, Membership};
pub use bulletin::{LatestBulletin, LatestEvent};
pub use event::{Event, EventGroup, EventGroupResponse};
pub use home::{Achievement, AchievementImage, AchievementToUpload, CarouselPhoto, HomeText};
pub use image::PhotoUploadResponse;
pub use member::{Member, User};
pub use pagination::Paginated;
pub use resource::{Resource, ResourceCategory, ResourceGroup, ResourceLink};
