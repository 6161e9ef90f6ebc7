pub use super::admins::Entity as Admins;
pub use super::blog_posts::Entity as BlogPosts;
pub use super::contact_info::Entity as ContactInfo;
pub use super::experiences::Entity as Experiences;
pub use super::portfolio_content::Entity as PortfolioContent;
pub use super::projects::Entity as Projects;
pub use super::skills::Entity as Skills;
