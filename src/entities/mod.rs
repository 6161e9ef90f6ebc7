pub mod prelude;

pub mod admins;
pub mod blog_posts;
pub mod contact_info;
pub mod experiences;
pub mod portfolio_content;
pub mod projects;
pub mod skills;
