//! 静的HTMLの組み立て
//!
//! WASMが読み込まれる前でも読めるよう、全セクションをそのまま出力する。
//! テキスト・属性値はすべて `escape` を通すこと。

use portfolio_common::{PortfolioContent, Project, SectionId, Skill, SocialLink, Theme};
use std::fmt::Write;

/// レンダリング時の設定
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub site_url: Option<String>,
    /// フッターの著作権表示の年
    pub year: i32,
    /// WASMアプリのESモジュール（出力ディレクトリからの相対パス）
    ///
    /// 指定するとページ読み込み後にアプリが起動し、静的な本文と置き換わる。
    pub wasm_module: Option<String>,
}

/// HTML特殊文字のエスケープ
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    if !content.is_empty() {
        let _ = writeln!(out, r#"    <meta name="{}" content="{}">"#, name, escape(content));
    }
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    if !content.is_empty() {
        let _ = writeln!(out, r#"    <meta property="{}" content="{}">"#, property, escape(content));
    }
}

fn render_head(content: &PortfolioContent, options: &RenderOptions) -> String {
    let meta = &content.metadata;
    let mut out = String::new();
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(out, "    <title>{}</title>", escape(&meta.title));
    meta_name(&mut out, "description", &meta.description);
    meta_name(&mut out, "keywords", &meta.keywords.join(", "));
    for author in &meta.authors {
        meta_name(&mut out, "author", author);
    }
    meta_property(&mut out, "og:title", &meta.open_graph.title);
    meta_property(&mut out, "og:description", &meta.open_graph.description);
    meta_property(&mut out, "og:type", &meta.open_graph.kind);
    if let Some(url) = options.site_url.as_deref().map(|u| u.trim_end_matches('/')) {
        if !url.is_empty() {
            let canonical = format!("{}/", url);
            meta_property(&mut out, "og:url", &canonical);
            let _ = writeln!(out, r#"    <link rel="canonical" href="{}">"#, escape(&canonical));
        }
    }
    out.push_str("    <link rel=\"stylesheet\" href=\"styles.css\">\n");
    if let Some(module) = options.wasm_module.as_deref().filter(|m| !m.is_empty()) {
        render_bootstrap(&mut out, module);
    }
    out.push_str("</head>\n");
    out
}

/// WASMアプリの起動スクリプト
fn render_bootstrap(out: &mut String, module: &str) {
    let path = if module.starts_with("./") || module.starts_with('/') || module.contains("://") {
        module.to_string()
    } else {
        format!("./{}", module)
    };
    // スクリプト内ではHTMLエスケープが効かないのでJSON文字列にする
    let literal = serde_json::to_string(&path)
        .unwrap_or_else(|_| "\"\"".into())
        .replace("</", "<\\/");
    let _ = writeln!(
        out,
        "    <script type=\"module\">import init from {}; init();</script>",
        literal
    );
}

fn render_nav(content: &PortfolioContent) -> String {
    let mut out = String::new();
    out.push_str("<nav class=\"fixed top-0 w-full z-50\">\n");
    let _ = writeln!(out, "  <div class=\"text-2xl font-bold\">{}</div>", escape(&content.profile.name));
    out.push_str("  <div class=\"hidden md:flex space-x-8\">\n");
    for id in SectionId::ALL {
        let active = if id == SectionId::default() { " text-teal-600" } else { "" };
        let _ = writeln!(
            out,
            "    <a class=\"capitalize{}\" href=\"{}\">{}</a>",
            active,
            id.href(),
            id.as_str()
        );
    }
    out.push_str("  </div>\n");
    out.push_str("</nav>\n");
    out
}

fn section_heading(out: &mut String, title: &str, lead: Option<&str>) {
    out.push_str("  <div class=\"text-center mb-16\">\n");
    let _ = writeln!(out, "    <h2 class=\"text-4xl font-bold\">{}</h2>", escape(title));
    if let Some(lead) = lead {
        let _ = writeln!(out, "    <p class=\"text-lg\">{}</p>", escape(lead));
    }
    out.push_str("  </div>\n");
}

fn render_hero(content: &PortfolioContent) -> String {
    let profile = &content.profile;
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\" class=\"min-h-screen pt-20\">", SectionId::Home);
    let _ = writeln!(
        out,
        "  <img src=\"{}\" alt=\"{}\" width=\"128\" height=\"128\" class=\"rounded-full\">",
        escape(&profile.photo),
        escape(&profile.name)
    );
    let _ = writeln!(out, "  <h1>Hi, I&#39;m <span>{}</span></h1>", escape(&profile.first_name));
    let _ = writeln!(out, "  <p>{}</p>", escape(&profile.tagline));
    let _ = writeln!(out, "  <a class=\"btn btn-primary\" href=\"{}\">View My Work</a>", SectionId::Projects.href());
    let _ = writeln!(out, "  <a class=\"btn btn-outline\" href=\"{}\">Get In Touch</a>", SectionId::Contact.href());
    out.push_str("</section>\n");
    out
}

fn render_about(content: &PortfolioContent) -> String {
    let about = &content.about;
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\" class=\"py-20\">", SectionId::About);
    section_heading(&mut out, "About Me", None);
    for paragraph in &about.paragraphs {
        let _ = writeln!(out, "  <p class=\"text-lg leading-relaxed\">{}</p>", escape(paragraph));
    }
    out.push_str("  <div class=\"grid grid-cols-2 gap-4 pt-6\">\n");
    for h in &about.highlights {
        let _ = writeln!(
            out,
            "    <div><h4>{}</h4><p class=\"text-teal-600\">{}</p></div>",
            escape(&h.label),
            escape(&h.value)
        );
    }
    out.push_str("  </div>\n");
    let _ = writeln!(
        out,
        "  <img src=\"{}\" alt=\"{}\" width=\"400\" height=\"400\" class=\"rounded-2xl\">",
        escape(&content.profile.portrait),
        escape(&content.profile.name)
    );
    out.push_str("</section>\n");
    out
}

fn render_project_card(out: &mut String, project: &Project) {
    out.push_str("    <article class=\"card project-card\">\n");
    let _ = writeln!(
        out,
        "      <img src=\"{}\" alt=\"{}\" width=\"400\" height=\"300\">",
        escape(project.image_src()),
        escape(&project.title)
    );
    let _ = writeln!(
        out,
        "      <div class=\"card-links\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Code</a> <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Demo</a></div>",
        escape(&project.github),
        escape(&project.demo)
    );
    let _ = writeln!(out, "      <h3 class=\"card-title\">{}</h3>", escape(&project.title));
    let _ = writeln!(out, "      <p class=\"card-description\">{}</p>", escape(&project.description));
    out.push_str("      <div class=\"flex flex-wrap gap-2\">");
    for tech in &project.tech {
        let _ = write!(out, "<span class=\"badge\">{}</span>", escape(tech));
    }
    out.push_str("</div>\n");
    out.push_str("    </article>\n");
}

fn render_projects(content: &PortfolioContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\" class=\"py-20\">", SectionId::Projects);
    section_heading(
        &mut out,
        "Featured Projects",
        Some("Here are some of my recent projects that showcase my skills in full-stack development and AI/ML"),
    );
    out.push_str("  <div class=\"grid md:grid-cols-2 lg:grid-cols-3 gap-8\">\n");
    for project in &content.projects {
        render_project_card(&mut out, project);
    }
    out.push_str("  </div>\n");
    out.push_str("</section>\n");
    out
}

fn render_skill_row(out: &mut String, skill: &Skill) {
    let _ = writeln!(
        out,
        "    <div class=\"skill-row\"><span>{}</span><span>{}%</span><div class=\"bar\"><div class=\"bar-fill\" style=\"{}\"></div></div></div>",
        escape(&skill.name),
        skill.level,
        skill.bar_style()
    );
}

fn render_skills(content: &PortfolioContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\" class=\"py-20\">", SectionId::Skills);
    section_heading(
        &mut out,
        "Skills & Expertise",
        Some("Technologies and tools I work with to bring ideas to life"),
    );
    out.push_str("  <div class=\"grid md:grid-cols-2 gap-8\">\n");
    for skill in &content.skills {
        render_skill_row(&mut out, skill);
    }
    out.push_str("  </div>\n");
    out.push_str("</section>\n");
    out
}

fn render_resume(content: &PortfolioContent) -> String {
    let resume = &content.resume;
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\" class=\"py-20\">", SectionId::Resume);
    section_heading(
        &mut out,
        "Resume",
        Some("Download my resume to learn more about my experience, education, and achievements"),
    );
    out.push_str("  <div class=\"card\">\n");
    let _ = writeln!(out, "    <h3>{}</h3>", escape(&resume.title));
    let _ = writeln!(out, "    <p>{}</p>", escape(&resume.summary));
    match &resume.file {
        Some(file) => {
            let _ = writeln!(
                out,
                "    <a class=\"btn btn-primary\" href=\"{}\" download>Download Resume (PDF)</a>",
                escape(file)
            );
        }
        None => out.push_str("    <button class=\"btn btn-primary\" type=\"button\">Download Resume (PDF)</button>\n"),
    }
    out.push_str("  </div>\n");
    out.push_str("</section>\n");
    out
}

fn render_social(out: &mut String, link: &SocialLink) {
    let _ = writeln!(
        out,
        "      <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\"><i class=\"{}\"></i></a>",
        escape(&link.url),
        link.kind.label(),
        link.kind.icon_class()
    );
}

fn render_contact(content: &PortfolioContent) -> String {
    let contact = &content.contact;
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\" class=\"py-20\">", SectionId::Contact);
    section_heading(
        &mut out,
        "Get In Touch",
        Some("I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology"),
    );
    // 送信先は無い（表示のみ）
    out.push_str("  <form class=\"card contact-form\" onsubmit=\"return false\">\n");
    out.push_str("    <label for=\"contact-name\">Name</label><input type=\"text\" id=\"contact-name\" placeholder=\"Your name\">\n");
    out.push_str("    <label for=\"contact-email\">Email</label><input type=\"email\" id=\"contact-email\" placeholder=\"your.email@example.com\">\n");
    out.push_str("    <label for=\"contact-message\">Message</label><textarea id=\"contact-message\" rows=\"5\" placeholder=\"Tell me about your project or just say hello!\"></textarea>\n");
    out.push_str("    <button type=\"button\" class=\"btn btn-primary\">Send Message</button>\n");
    out.push_str("  </form>\n");
    out.push_str("  <div class=\"contact-info\">\n");
    for (label, value) in [
        ("Email", &contact.email),
        ("Phone", &contact.phone),
        ("Location", &contact.location),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "    <p><strong>{}</strong> {}</p>", label, escape(value));
        }
    }
    out.push_str("    <div class=\"flex space-x-4\">\n");
    for link in &contact.socials {
        render_social(&mut out, link);
    }
    out.push_str("    </div>\n");
    out.push_str("  </div>\n");
    out.push_str("</section>\n");
    out
}

fn render_footer(content: &PortfolioContent, year: i32) -> String {
    format!(
        "<footer class=\"py-8 text-center\">\n  <p>&copy; {} {}. All rights reserved.</p>\n  <p>Built with Rust, Leptos and Tailwind CSS</p>\n</footer>\n",
        year,
        escape(&content.profile.name)
    )
}

/// ドキュメント全体を組み立てる
pub fn render_document(content: &PortfolioContent, options: &RenderOptions) -> String {
    let lang = if content.metadata.lang.is_empty() {
        "en"
    } else {
        content.metadata.lang.as_str()
    };
    let html_class = options
        .theme
        .root_class()
        .map(|c| format!(" class=\"{}\"", c))
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, "<html lang=\"{}\"{}>", escape(lang), html_class);
    out.push_str(&render_head(content, options));
    out.push_str("<body>\n");
    out.push_str(&render_nav(content));
    out.push_str(&render_hero(content));
    out.push_str(&render_about(content));
    out.push_str(&render_projects(content));
    out.push_str(&render_skills(content));
    out.push_str(&render_resume(content));
    out.push_str(&render_contact(content));
    out.push_str(&render_footer(content, options.year));
    out.push_str("</body>\n</html>\n");
    out
}
