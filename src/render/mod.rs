pub mod escape;
pub mod i18n;
pub mod page;
pub mod projects;
pub mod resume;
