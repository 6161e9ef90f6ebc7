use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Hash the seed password using Argon2id
fn hash_seed_password() -> String {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let password = b"admin123";
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password, &salt)
        .expect("Failed to hash seed password")
        .to_string()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        for mut stmt in [
            schema.create_table_from_entity(Admins),
            schema.create_table_from_entity(PortfolioContent),
            schema.create_table_from_entity(Skills),
            schema.create_table_from_entity(Projects),
            schema.create_table_from_entity(Experiences),
            schema.create_table_from_entity(BlogPosts),
            schema.create_table_from_entity(ContactInfo),
        ] {
            manager
                .create_table(stmt.if_not_exists().to_owned())
                .await?;
        }

        let now = chrono::Utc::now().to_rfc3339();

        // Seed the default admin identity (password: admin123)
        let insert_admin = sea_orm_migration::sea_query::Query::insert()
            .into_table(Admins)
            .columns([
                crate::entities::admins::Column::Username,
                crate::entities::admins::Column::PasswordHash,
                crate::entities::admins::Column::CredentialVersion,
                crate::entities::admins::Column::CreatedAt,
                crate::entities::admins::Column::UpdatedAt,
            ])
            .values_panic([
                "admin".into(),
                hash_seed_password().into(),
                1.into(),
                now.clone().into(),
                now.clone().into(),
            ])
            .to_owned();

        manager.exec_stmt(insert_admin).await?;

        // Seed starter page sections so a fresh install renders something
        for (section, title, subtitle, content) in [
            (
                "hero",
                "Cybersecurity Penetration Tester",
                "Securing Digital Assets Through Ethical Hacking",
                "Aspiring penetration tester specializing in identifying vulnerabilities \
                 and strengthening security postures for organizations.",
            ),
            (
                "about",
                "About Me",
                "Passionate About Cybersecurity",
                "I am an aspiring penetration tester with a passion for cybersecurity \
                 and ethical hacking. My goal is to help organizations identify and fix \
                 security vulnerabilities before malicious actors can exploit them.",
            ),
        ] {
            let insert = sea_orm_migration::sea_query::Query::insert()
                .into_table(PortfolioContent)
                .columns([
                    crate::entities::portfolio_content::Column::Section,
                    crate::entities::portfolio_content::Column::Title,
                    crate::entities::portfolio_content::Column::Subtitle,
                    crate::entities::portfolio_content::Column::Content,
                    crate::entities::portfolio_content::Column::UpdatedAt,
                ])
                .values_panic([
                    section.into(),
                    title.into(),
                    subtitle.into(),
                    content.into(),
                    now.clone().into(),
                ])
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        let default_skills: [(&str, &str, &str, &str); 8] = [
            (
                "technical",
                "Network Security",
                "intermediate",
                "Understanding of network protocols and security measures",
            ),
            (
                "technical",
                "Web Application Security",
                "intermediate",
                "OWASP Top 10 vulnerabilities and testing methodologies",
            ),
            (
                "technical",
                "Linux Administration",
                "advanced",
                "Command line proficiency and system administration",
            ),
            (
                "tools",
                "Burp Suite",
                "intermediate",
                "Web application security testing platform",
            ),
            ("tools", "Nmap", "advanced", "Network discovery and security auditing"),
            ("tools", "Metasploit", "beginner", "Penetration testing framework"),
            (
                "certifications",
                "CompTIA Security+",
                "planning",
                "Foundational cybersecurity certification",
            ),
            (
                "certifications",
                "CEH (Certified Ethical Hacker)",
                "planning",
                "Ethical hacking certification",
            ),
        ];

        for (order, (category, name, level, description)) in (1i32..).zip(default_skills) {
            let insert = sea_orm_migration::sea_query::Query::insert()
                .into_table(Skills)
                .columns([
                    crate::entities::skills::Column::Category,
                    crate::entities::skills::Column::Name,
                    crate::entities::skills::Column::Level,
                    crate::entities::skills::Column::Description,
                    crate::entities::skills::Column::SortOrder,
                ])
                .values_panic([
                    category.into(),
                    name.into(),
                    level.into(),
                    description.into(),
                    order.into(),
                ])
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        let insert_project = sea_orm_migration::sea_query::Query::insert()
            .into_table(Projects)
            .columns([
                crate::entities::projects::Column::Title,
                crate::entities::projects::Column::Description,
                crate::entities::projects::Column::ShortDescription,
                crate::entities::projects::Column::Technologies,
                crate::entities::projects::Column::Status,
                crate::entities::projects::Column::Featured,
                crate::entities::projects::Column::SortOrder,
                crate::entities::projects::Column::CreatedAt,
            ])
            .values_panic([
                "Home Network Security Assessment".into(),
                "Comprehensive security assessment of a home network environment, \
                 identifying vulnerabilities and implementing security measures."
                    .into(),
                "Security assessment and hardening of home network infrastructure".into(),
                r#"["Nmap","Wireshark","pfSense","Network Analysis"]"#.into(),
                "completed".into(),
                true.into(),
                1.into(),
                now.clone().into(),
            ])
            .to_owned();

        manager.exec_stmt(insert_project).await?;

        let insert_experience = sea_orm_migration::sea_query::Query::insert()
            .into_table(Experiences)
            .columns([
                crate::entities::experiences::Column::Company,
                crate::entities::experiences::Column::Position,
                crate::entities::experiences::Column::Location,
                crate::entities::experiences::Column::StartDate,
                crate::entities::experiences::Column::Description,
                crate::entities::experiences::Column::Achievements,
                crate::entities::experiences::Column::Technologies,
                crate::entities::experiences::Column::SortOrder,
            ])
            .values_panic([
                "Self-Study & Lab Environment".into(),
                "Cybersecurity Student".into(),
                "Remote".into(),
                "2024-01".into(),
                "Building hands-on experience through virtual labs, CTF challenges, \
                 and security research."
                    .into(),
                r#"["Completed 50+ TryHackMe rooms","Set up home penetration testing lab","Participated in local cybersecurity meetups"]"#.into(),
                r#"["Kali Linux","VirtualBox","Burp Suite","Nmap","John the Ripper"]"#.into(),
                1.into(),
            ])
            .to_owned();

        manager.exec_stmt(insert_experience).await?;

        let insert_contact = sea_orm_migration::sea_query::Query::insert()
            .into_table(ContactInfo)
            .columns([
                crate::entities::contact_info::Column::Email,
                crate::entities::contact_info::Column::Phone,
                crate::entities::contact_info::Column::Location,
                crate::entities::contact_info::Column::Linkedin,
                crate::entities::contact_info::Column::Github,
                crate::entities::contact_info::Column::Twitter,
                crate::entities::contact_info::Column::Website,
                crate::entities::contact_info::Column::UpdatedAt,
            ])
            .values_panic([
                "contact@yourname.com".into(),
                "+1 (555) 123-4567".into(),
                "Your City, Country".into(),
                "https://linkedin.com/in/yourprofile".into(),
                "https://github.com/yourusername".into(),
                "https://twitter.com/yourusername".into(),
                "https://yourportfolio.com".into(),
                now.into(),
            ])
            .to_owned();

        manager.exec_stmt(insert_contact).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactInfo).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioContent).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins).to_owned())
            .await?;

        Ok(())
    }
}
