//! 組み込みのポートフォリオ内容
//!
//! content.json が無い場合やCLIの `content` コマンドで使われる。

use crate::types::{
    About, Contact, Highlight, OpenGraph, PortfolioContent, Profile, Project, Resume,
    SiteMetadata, Skill, SocialKind, SocialLink,
};

/// スキル一覧（表示順）
pub fn skills() -> Vec<Skill> {
    vec![
        Skill::new("JavaScript", 95),
        Skill::new("React", 90),
        Skill::new("Node.js", 85),
        Skill::new("MongoDB", 80),
        Skill::new("Python", 88),
        Skill::new("Machine Learning", 75),
        Skill::new("TypeScript", 85),
        Skill::new("Next.js", 90),
    ]
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// プロジェクト一覧（表示順）
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "AI-Powered Task Manager".into(),
            description: "A smart task management application that uses machine learning to prioritize tasks and predict completion times.".into(),
            image: "/images/ai_task_manager_banner.jpg".into(),
            tech: tags(&["React", "Node.js", "Python", "TensorFlow", "MongoDB"]),
            github: "https://github.com".into(),
            demo: "https://demo.com".into(),
        },
        Project {
            title: "E-Commerce Platform".into(),
            description: "Full-stack e-commerce solution with real-time inventory management and payment processing.".into(),
            image: "/placeholder.svg?height=300&width=400".into(),
            tech: tags(&["Next.js", "Stripe", "PostgreSQL", "Redis", "Docker"]),
            github: "https://github.com".into(),
            demo: "https://demo.com".into(),
        },
        Project {
            title: "Real-Time Chat Application".into(),
            description: "Scalable chat application with WebSocket connections, file sharing, and group messaging features.".into(),
            image: "/placeholder.svg?height=300&width=400".into(),
            tech: tags(&["React", "Socket.io", "Express", "MongoDB", "AWS S3"]),
            github: "https://github.com".into(),
            demo: "https://demo.com".into(),
        },
    ]
}

pub fn metadata() -> SiteMetadata {
    SiteMetadata {
        title: "Bereket Fikadu - Software Engineer & AI/ML Enthusiast".into(),
        description: "Personal portfolio of Bereket Fikadu, a passionate software engineer specializing in full-stack development and artificial intelligence.".into(),
        keywords: tags(&[
            "software engineer",
            "full-stack developer",
            "AI",
            "machine learning",
            "React",
            "Node.js",
            "JavaScript",
            "portfolio",
        ]),
        authors: tags(&["Bereket Fikadu"]),
        open_graph: OpenGraph {
            title: "Bereket Fikadu - Software Engineer".into(),
            description: "Personal portfolio showcasing projects and skills in software engineering and AI/ML".into(),
            kind: "website".into(),
        },
        lang: "en".into(),
    }
}

pub fn profile() -> Profile {
    Profile {
        name: "Bereket Fikadu".into(),
        first_name: "Bereket".into(),
        tagline: "Software Engineer & AI/ML Enthusiast crafting innovative solutions with modern technologies".into(),
        photo: "/images/photo.jpg".into(),
        portrait: "/images/coding_lab_portrait.jpg".into(),
    }
}

pub fn about() -> About {
    About {
        paragraphs: tags(&[
            "I'm a passionate software engineer with over 5 years of experience in building scalable web applications and exploring the fascinating world of artificial intelligence and machine learning.",
            "My journey in technology started with a curiosity about how things work, which led me to pursue computer science and specialize in full-stack development. I love solving complex problems and turning innovative ideas into reality through code.",
            "When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, or sharing knowledge with the developer community through blog posts and mentoring.",
        ]),
        highlights: vec![
            Highlight { label: "Experience".into(), value: "5+ Years".into() },
            Highlight { label: "Projects".into(), value: "8+ Completed".into() },
        ],
    }
}

pub fn resume() -> Resume {
    Resume {
        title: "Bereket Fikadu - Resume".into(),
        summary: "Software Engineer with 5+ years of experience in full-stack development and AI/ML".into(),
        file: None,
    }
}

pub fn contact() -> Contact {
    Contact {
        email: "bereket.fikadu@email.com".into(),
        phone: "+1 (555) 123-4567".into(),
        location: "San Francisco, CA".into(),
        socials: vec![
            SocialLink {
                kind: SocialKind::LinkedIn,
                url: "https://linkedin.com/in/bereket-fikadu".into(),
            },
            SocialLink {
                kind: SocialKind::GitHub,
                url: "https://github.com/bereket-fikadu".into(),
            },
        ],
    }
}

/// ページ全体の組み込み内容
pub fn portfolio() -> PortfolioContent {
    PortfolioContent {
        metadata: metadata(),
        profile: profile(),
        about: about(),
        projects: projects(),
        skills: skills(),
        resume: resume(),
        contact: contact(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let content = portfolio();
        assert_eq!(content.skills.len(), 8);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.contact.socials.len(), 2);
    }

    #[test]
    fn test_skills_order_preserved() {
        let names: Vec<_> = skills().into_iter().map(|s| s.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("JavaScript"));
        assert_eq!(names.last().map(String::as_str), Some("Next.js"));
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(skills().iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_default_resume_has_no_file() {
        assert!(resume().file.is_none());
    }

    #[test]
    fn test_default_json_roundtrip() {
        let content = portfolio();
        let json = content.to_json_pretty().unwrap();
        let loaded = PortfolioContent::from_json(&json).unwrap();
        assert_eq!(loaded, content);
    }
}
