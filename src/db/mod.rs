use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::{blog_posts, contact_info, experiences, portfolio_content, projects, skills};

pub mod migrator;
pub mod repositories;

pub use repositories::admin::Admin;
pub use repositories::blog::{BlogPostPatch, NewBlogPost};
pub use repositories::contact::ContactInfoPatch;
pub use repositories::experience::{ExperiencePatch, NewExperience};
pub use repositories::portfolio::PortfolioSectionPatch;
pub use repositories::project::{NewProject, ProjectPatch};
pub use repositories::skill::{NewSkill, SkillPatch};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn admin_repo(&self) -> repositories::admin::AdminRepository {
        repositories::admin::AdminRepository::new(self.conn.clone())
    }

    fn portfolio_repo(&self) -> repositories::portfolio::PortfolioRepository {
        repositories::portfolio::PortfolioRepository::new(self.conn.clone())
    }

    fn skill_repo(&self) -> repositories::skill::SkillRepository {
        repositories::skill::SkillRepository::new(self.conn.clone())
    }

    fn project_repo(&self) -> repositories::project::ProjectRepository {
        repositories::project::ProjectRepository::new(self.conn.clone())
    }

    fn experience_repo(&self) -> repositories::experience::ExperienceRepository {
        repositories::experience::ExperienceRepository::new(self.conn.clone())
    }

    fn blog_repo(&self) -> repositories::blog::BlogRepository {
        repositories::blog::BlogRepository::new(self.conn.clone())
    }

    fn contact_repo(&self) -> repositories::contact::ContactRepository {
        repositories::contact::ContactRepository::new(self.conn.clone())
    }

    // --- Admins ---

    pub async fn find_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        self.admin_repo().find_by_username(username).await
    }

    pub async fn find_admin_by_id(&self, id: i32) -> Result<Option<Admin>> {
        self.admin_repo().find_by_id(id).await
    }

    pub async fn verify_admin_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Admin>> {
        self.admin_repo().verify_password(username, password).await
    }

    pub async fn replace_admin_credentials(
        &self,
        id: i32,
        new_username: &str,
        new_password_hash: &str,
    ) -> Result<Option<Admin>> {
        self.admin_repo()
            .replace_credentials(id, new_username, new_password_hash)
            .await
    }

    // --- Portfolio content ---

    pub async fn list_portfolio_content(&self) -> Result<Vec<portfolio_content::Model>> {
        self.portfolio_repo().list_all().await
    }

    pub async fn get_portfolio_section(
        &self,
        section: &str,
    ) -> Result<Option<portfolio_content::Model>> {
        self.portfolio_repo().get_by_section(section).await
    }

    pub async fn upsert_portfolio_section(
        &self,
        patch: PortfolioSectionPatch,
    ) -> Result<portfolio_content::Model> {
        self.portfolio_repo().upsert(patch).await
    }

    // --- Skills ---

    pub async fn list_skills(&self) -> Result<Vec<skills::Model>> {
        self.skill_repo().list_all().await
    }

    pub async fn list_skills_by_category(&self, category: &str) -> Result<Vec<skills::Model>> {
        self.skill_repo().list_by_category(category).await
    }

    pub async fn create_skill(&self, skill: NewSkill) -> Result<skills::Model> {
        self.skill_repo().create(skill).await
    }

    pub async fn update_skill(&self, id: i32, patch: SkillPatch) -> Result<Option<skills::Model>> {
        self.skill_repo().update(id, patch).await
    }

    pub async fn delete_skill(&self, id: i32) -> Result<bool> {
        self.skill_repo().delete(id).await
    }

    // --- Projects ---

    pub async fn list_projects(&self) -> Result<Vec<projects::Model>> {
        self.project_repo().list_all().await
    }

    pub async fn list_featured_projects(&self) -> Result<Vec<projects::Model>> {
        self.project_repo().list_featured().await
    }

    pub async fn get_project(&self, id: i32) -> Result<Option<projects::Model>> {
        self.project_repo().get(id).await
    }

    pub async fn create_project(&self, project: NewProject) -> Result<projects::Model> {
        self.project_repo().create(project).await
    }

    pub async fn update_project(
        &self,
        id: i32,
        patch: ProjectPatch,
    ) -> Result<Option<projects::Model>> {
        self.project_repo().update(id, patch).await
    }

    pub async fn delete_project(&self, id: i32) -> Result<bool> {
        self.project_repo().delete(id).await
    }

    // --- Experiences ---

    pub async fn list_experiences(&self) -> Result<Vec<experiences::Model>> {
        self.experience_repo().list_all().await
    }

    pub async fn create_experience(&self, experience: NewExperience) -> Result<experiences::Model> {
        self.experience_repo().create(experience).await
    }

    pub async fn update_experience(
        &self,
        id: i32,
        patch: ExperiencePatch,
    ) -> Result<Option<experiences::Model>> {
        self.experience_repo().update(id, patch).await
    }

    pub async fn delete_experience(&self, id: i32) -> Result<bool> {
        self.experience_repo().delete(id).await
    }

    // --- Blog posts ---

    pub async fn list_blog_posts(&self) -> Result<Vec<blog_posts::Model>> {
        self.blog_repo().list_all().await
    }

    pub async fn list_public_blog_posts(&self) -> Result<Vec<blog_posts::Model>> {
        self.blog_repo().list_public().await
    }

    pub async fn get_blog_post(&self, id: i32) -> Result<Option<blog_posts::Model>> {
        self.blog_repo().get(id).await
    }

    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<blog_posts::Model>> {
        self.blog_repo().get_by_slug(slug).await
    }

    pub async fn blog_slug_exists(&self, slug: &str, ignore_id: Option<i32>) -> Result<bool> {
        self.blog_repo().slug_exists(slug, ignore_id).await
    }

    pub async fn create_blog_post(&self, post: NewBlogPost) -> Result<blog_posts::Model> {
        self.blog_repo().create(post).await
    }

    pub async fn update_blog_post(
        &self,
        id: i32,
        patch: BlogPostPatch,
    ) -> Result<Option<blog_posts::Model>> {
        self.blog_repo().update(id, patch).await
    }

    pub async fn delete_blog_post(&self, id: i32) -> Result<bool> {
        self.blog_repo().delete(id).await
    }

    // --- Contact info ---

    pub async fn get_contact_info(&self) -> Result<Option<contact_info::Model>> {
        self.contact_repo().get().await
    }

    pub async fn upsert_contact_info(
        &self,
        patch: ContactInfoPatch,
    ) -> Result<contact_info::Model> {
        self.contact_repo().upsert(patch).await
    }
}
