//! Static window content, one table per page language.

use crate::lang::Lang;

/// Definition of a window the desktop can open.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowContent {
    pub id: &'static str,
    pub title: &'static str,
    /// `None` falls back to the configured default size.
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Open straight into the maximized state.
    pub maximized: bool,
    pub html: &'static str,
}

macro_rules! video_html {
    ($video:literal) => {
        concat!(
            r#"<div class="video-window"><iframe src="https://www.youtube-nocookie.com/embed/"#,
            $video,
            r#"?rel=0&modestbranding=1" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" referrerpolicy="strict-origin-when-cross-origin" allowfullscreen></iframe></div>"#
        )
    };
}

macro_rules! browser_html {
    ($url:literal, $host:literal, $open_label:literal) => {
        concat!(
            r#"<div class="browser-window"><div class="browser-toolbar"><div class="browser-buttons"><span class="browser-btn red"></span><span class="browser-btn yellow"></span><span class="browser-btn green"></span></div><div class="browser-address-bar"><span class="browser-url">"#,
            $host,
            r#"</span></div><div class="browser-actions"><a href=""#,
            $url,
            r#"" target="_blank" class="browser-external" title=""#,
            $open_label,
            r#"">&#8599;</a></div></div><iframe src=""#,
            $url,
            r#"" class="browser-iframe"></iframe></div>"#
        )
    };
}

macro_rules! pdf_html {
    ($path:literal) => {
        concat!(r#"<div class="pdf-window"><iframe src=""#, $path, r#"" frameborder="0"></iframe></div>"#)
    };
}

const fn pane(id: &'static str, title: &'static str, html: &'static str) -> WindowContent {
    WindowContent { id, title, width: Some(650.0), height: Some(550.0), maximized: false, html }
}

const fn sized(
    id: &'static str,
    title: &'static str,
    width: f64,
    height: f64,
    maximized: bool,
    html: &'static str,
) -> WindowContent {
    WindowContent { id, title, width: Some(width), height: Some(height), maximized, html }
}

static PT: &[WindowContent] = &[
    pane(
        "about",
        "Sobre Mim",
        r#"<div class="profile-header"><img class="profile-photo" src="assets/photo.jpg" alt="Foto"><div class="profile-info"><h1>André Bassi</h1><p class="subtitle">Platform Engineer &amp; Cloud Architect</p></div></div>
<p>Mais de 20 anos construindo infraestruturas escaláveis, plataformas Kubernetes e sistemas distribuídos. Apaixonado por open source e por resolver desafios complexos.</p>
<h2>O que eu faço</h2>
<ul><li>Arquitetura de plataformas cloud-native</li><li>Kubernetes em produção (18+ clusters)</li><li>Infraestrutura como Código</li><li>CI/CD &amp; DevOps</li><li>Infraestrutura para IA/LLM</li></ul>
<h2>Links</h2>
<p><a href="https://github.com/andrebassi" target="_blank">GitHub</a> • <a href="https://linkedin.com/in/andrebassi" target="_blank">LinkedIn</a></p>"#,
    ),
    pane(
        "opensource",
        "Open Source",
        r#"<h1>Projetos Open Source</h1><p class="subtitle">Projetos que desenvolvo e mantenho.</p>
<div class="opensource-grid">
<div class="opensource-card" data-project="edgeproxy"><div class="opensource-info"><h3>edgeProxy</h3><p>TCP proxy distribuído em Rust para edge computing com routing geo-aware.</p><div class="opensource-tags"><span class="tag green">Rust</span><span class="tag">TCP Proxy</span><span class="tag">GeoIP</span></div></div></div>
<div class="opensource-card" data-project="infra-operator"><div class="opensource-info"><h3>infra-operator</h3><p>Kubernetes operator em Go para automação de infraestrutura AWS.</p><div class="opensource-tags"><span class="tag blue">Go</span><span class="tag">Kubernetes</span><span class="tag">AWS</span></div></div></div>
<div class="opensource-card" data-project="runner-codes"><div class="opensource-info"><h3>runner.codes</h3><p>Ambiente de execução LLM com Firecracker microVMs e suporte a 40+ linguagens.</p><div class="opensource-tags"><span class="tag cyan">Go</span><span class="tag">Firecracker</span><span class="tag">LLM</span></div></div></div>
</div>"#,
    ),
    sized(
        "edgeproxy",
        "edgeProxy",
        1000.0,
        700.0,
        true,
        browser_html!("https://edgeproxy-docs.runner.codes/", "edgeproxy-docs.runner.codes", "Abrir em nova aba"),
    ),
    sized(
        "infra-operator",
        "infra-operator",
        1000.0,
        700.0,
        true,
        browser_html!("https://github.com/andrebassi/infra-operator", "github.com/andrebassi/infra-operator", "Abrir em nova aba"),
    ),
    sized(
        "runner-codes",
        "runner.codes",
        1000.0,
        700.0,
        true,
        browser_html!("https://runner.codes/", "runner.codes", "Abrir em nova aba"),
    ),
    sized(
        "articles",
        "Artigos Técnicos",
        700.0,
        580.0,
        true,
        r#"<h1>Artigos Técnicos</h1><p class="subtitle">Conteúdo técnico que publico no Notion.</p>
<div class="articles-grid">
<a href="https://andrebassi.notion.site/" target="_blank" class="article-card"><div class="article-info"><h3>Runtime Seguro e Isolado para Código Gerado por IA</h3><p>Runner Codes: ambiente de execução seguro para código gerado por LLMs.</p></div></a>
<a href="https://andrebassi.notion.site/" target="_blank" class="article-card"><div class="article-info"><h3>Homelab com Proxmox, Talos Linux e Kubernetes</h3><p>Configurando um homelab completo com Cloudflare Tunnel.</p></div></a>
</div>"#,
    ),
    pane(
        "skills",
        "Skills",
        r#"<h1>Skills &amp; Tecnologias</h1>
<h3>Cloud &amp; Plataformas</h3><div class="tags"><span class="tag">AWS</span><span class="tag">GCP</span><span class="tag">Azure</span><span class="tag">OCI</span><span class="tag">Cloudflare</span></div>
<h3>Containers &amp; Orquestração</h3><div class="tags"><span class="tag">Kubernetes</span><span class="tag">Docker</span><span class="tag">Helm</span><span class="tag">Istio</span><span class="tag">ArgoCD</span></div>
<h3>IaC &amp; Automação</h3><div class="tags"><span class="tag">Terraform</span><span class="tag">Ansible</span><span class="tag">Pulumi</span><span class="tag">GitLab CI</span></div>
<h3>Linguagens</h3><div class="tags"><span class="tag">Go</span><span class="tag">Rust</span><span class="tag">Python</span><span class="tag">TypeScript</span><span class="tag">Bash</span></div>"#,
    ),
    pane(
        "experience",
        "Experiência",
        r#"<h1>Experiência</h1><p>Mais de 20 anos construindo sistemas de alta escala.</p>
<div class="stats-grid"><div class="stat-item"><div class="stat-value">20+</div><div class="stat-label">Anos de experiência</div></div><div class="stat-item"><div class="stat-value">18+</div><div class="stat-label">Clusters K8s em produção</div></div><div class="stat-item"><div class="stat-value">3</div><div class="stat-label">Projetos open source</div></div><div class="stat-item"><div class="stat-value">4</div><div class="stat-label">Cloud providers</div></div></div>
<h2>Áreas de Atuação</h2><ul><li>Staff Platform Engineer</li><li>Cloud Native Architect</li><li>SRE &amp; DevOps</li><li>Infraestrutura de IA/LLM</li></ul>"#,
    ),
    pane(
        "contact",
        "Contato",
        r#"<h1>Contato</h1><p>Vamos conversar! Estou sempre aberto a discutir novos projetos e oportunidades.</p>
<ul><li>Email: <a href="mailto:contato@andrebassi.com.br">contato@andrebassi.com.br</a></li><li>LinkedIn: <a href="https://linkedin.com/in/andrebassi" target="_blank">linkedin.com/in/andrebassi</a></li><li>GitHub: <a href="https://github.com/andrebassi" target="_blank">github.com/andrebassi</a></li></ul>"#,
    ),
    sized("video-edge-resiliente", "Edge Resiliente", 854.0, 520.0, false, video_html!("oVotf8lFOJ0")),
    sized(
        "video-edgeproxy-caos",
        "Do Caos ao Controle com o edgeProxy",
        854.0,
        520.0,
        false,
        video_html!("Qf6TmgFsq1o"),
    ),
    sized("video-runner-codes", "Runner Codes", 854.0, 520.0, false, video_html!("72ngZRru15Q")),
    sized("pdf-carta", "Carta de Apresentação", 800.0, 600.0, true, pdf_html!("docs/carta-apresentacao.pdf")),
    sized("pdf-curriculum", "Currículo", 800.0, 600.0, true, pdf_html!("docs/curriculo.pdf")),
    pane(
        "terminal",
        "Terminal",
        r#"<div class="terminal-window">
<div class="terminal-line"><span class="terminal-prompt">andrebassi@ubuntu:~$</span><span class="terminal-command"> neofetch</span></div>
<div class="terminal-output"><span style="color: #e95420;">OS:</span> Linux (Cloud Native)<br><span style="color: #e95420;">Kernel:</span> Platform Engineering<br><span style="color: #e95420;">Uptime:</span> 20+ anos<br><span style="color: #e95420;">Memory:</span> Go, Rust, Python</div>
<div class="terminal-line"><span class="terminal-prompt">andrebassi@ubuntu:~$</span><span class="terminal-command"> echo "Obrigado por visitar!"</span></div>
<div class="terminal-line terminal-success">Obrigado por visitar!</div>
<div class="terminal-line"><span class="terminal-prompt">andrebassi@ubuntu:~$</span><span class="terminal-command terminal-cursor">_</span></div>
</div>"#,
    ),
];

static EN: &[WindowContent] = &[
    pane(
        "about",
        "About Me",
        r#"<div class="profile-header"><img class="profile-photo" src="assets/photo.jpg" alt="Photo"><div class="profile-info"><h1>André Bassi</h1><p class="subtitle">Platform Engineer &amp; Cloud Architect</p></div></div>
<p>Over 20 years building scalable infrastructure, Kubernetes platforms and distributed systems. Passionate about open source and solving complex challenges.</p>
<h2>What I do</h2>
<ul><li>Cloud-native platform architecture</li><li>Kubernetes in production (18+ clusters)</li><li>Infrastructure as Code</li><li>CI/CD &amp; DevOps</li><li>AI/LLM infrastructure</li></ul>
<h2>Links</h2>
<p><a href="https://github.com/andrebassi" target="_blank">GitHub</a> • <a href="https://linkedin.com/in/andrebassi" target="_blank">LinkedIn</a></p>"#,
    ),
    pane(
        "opensource",
        "Open Source",
        r#"<h1>Open Source Projects</h1><p class="subtitle">Projects I build and maintain.</p>
<div class="opensource-grid">
<div class="opensource-card" data-project="edgeproxy"><div class="opensource-info"><h3>edgeProxy</h3><p>Distributed TCP proxy in Rust for edge computing with geo-aware routing.</p><div class="opensource-tags"><span class="tag green">Rust</span><span class="tag">TCP Proxy</span><span class="tag">GeoIP</span></div></div></div>
<div class="opensource-card" data-project="infra-operator"><div class="opensource-info"><h3>infra-operator</h3><p>Kubernetes operator in Go automating AWS infrastructure.</p><div class="opensource-tags"><span class="tag blue">Go</span><span class="tag">Kubernetes</span><span class="tag">AWS</span></div></div></div>
<div class="opensource-card" data-project="runner-codes"><div class="opensource-info"><h3>runner.codes</h3><p>LLM execution environment on Firecracker microVMs supporting 40+ languages.</p><div class="opensource-tags"><span class="tag cyan">Go</span><span class="tag">Firecracker</span><span class="tag">LLM</span></div></div></div>
</div>"#,
    ),
    sized(
        "edgeproxy",
        "edgeProxy",
        1000.0,
        700.0,
        true,
        browser_html!("https://edgeproxy-docs.runner.codes/", "edgeproxy-docs.runner.codes", "Open in new tab"),
    ),
    sized(
        "infra-operator",
        "infra-operator",
        1000.0,
        700.0,
        true,
        browser_html!("https://github.com/andrebassi/infra-operator", "github.com/andrebassi/infra-operator", "Open in new tab"),
    ),
    sized(
        "runner-codes",
        "runner.codes",
        1000.0,
        700.0,
        true,
        browser_html!("https://runner.codes/", "runner.codes", "Open in new tab"),
    ),
    sized(
        "articles",
        "Technical Articles",
        700.0,
        580.0,
        true,
        r#"<h1>Technical Articles</h1><p class="subtitle">Technical content I publish on Notion.</p>
<div class="articles-grid">
<a href="https://andrebassi.notion.site/" target="_blank" class="article-card"><div class="article-info"><h3>Secure and Isolated Runtime for AI-Generated Code</h3><p>Runner Codes: secure execution environment for LLM-generated code.</p></div></a>
<a href="https://andrebassi.notion.site/" target="_blank" class="article-card"><div class="article-info"><h3>Homelab with Proxmox, Talos Linux and Kubernetes</h3><p>Setting up a complete homelab with Cloudflare Tunnel.</p></div></a>
</div>"#,
    ),
    pane(
        "skills",
        "Skills",
        r#"<h1>Skills &amp; Technologies</h1>
<h3>Cloud &amp; Platforms</h3><div class="tags"><span class="tag">AWS</span><span class="tag">GCP</span><span class="tag">Azure</span><span class="tag">OCI</span><span class="tag">Cloudflare</span></div>
<h3>Containers &amp; Orchestration</h3><div class="tags"><span class="tag">Kubernetes</span><span class="tag">Docker</span><span class="tag">Helm</span><span class="tag">Istio</span><span class="tag">ArgoCD</span></div>
<h3>IaC &amp; Automation</h3><div class="tags"><span class="tag">Terraform</span><span class="tag">Ansible</span><span class="tag">Pulumi</span><span class="tag">GitLab CI</span></div>
<h3>Languages</h3><div class="tags"><span class="tag">Go</span><span class="tag">Rust</span><span class="tag">Python</span><span class="tag">TypeScript</span><span class="tag">Bash</span></div>"#,
    ),
    pane(
        "experience",
        "Experience",
        r#"<h1>Experience</h1><p>Over 20 years building high-scale systems.</p>
<div class="stats-grid"><div class="stat-item"><div class="stat-value">20+</div><div class="stat-label">Years of experience</div></div><div class="stat-item"><div class="stat-value">18+</div><div class="stat-label">K8s clusters in production</div></div><div class="stat-item"><div class="stat-value">3</div><div class="stat-label">Open source projects</div></div><div class="stat-item"><div class="stat-value">4</div><div class="stat-label">Cloud providers</div></div></div>
<h2>Focus Areas</h2><ul><li>Staff Platform Engineer</li><li>Cloud Native Architect</li><li>SRE &amp; DevOps</li><li>AI/LLM Infrastructure</li></ul>"#,
    ),
    pane(
        "contact",
        "Contact",
        r#"<h1>Contact</h1><p>Let's talk! I'm always open to discussing new projects and opportunities.</p>
<ul><li>Email: <a href="mailto:contato@andrebassi.com.br">contato@andrebassi.com.br</a></li><li>LinkedIn: <a href="https://linkedin.com/in/andrebassi" target="_blank">linkedin.com/in/andrebassi</a></li><li>GitHub: <a href="https://github.com/andrebassi" target="_blank">github.com/andrebassi</a></li></ul>"#,
    ),
    sized("video-edge-resiliente", "Resilient Edge", 854.0, 520.0, false, video_html!("oVotf8lFOJ0")),
    sized(
        "video-edgeproxy-caos",
        "From Chaos to Control with edgeProxy",
        854.0,
        520.0,
        false,
        video_html!("Qf6TmgFsq1o"),
    ),
    sized("video-runner-codes", "Runner Codes", 854.0, 520.0, false, video_html!("72ngZRru15Q")),
    sized("pdf-carta", "Cover Letter", 800.0, 600.0, true, pdf_html!("docs/carta-apresentacao.pdf")),
    sized("pdf-curriculum", "Resume", 800.0, 600.0, true, pdf_html!("docs/curriculo.pdf")),
    pane(
        "terminal",
        "Terminal",
        r#"<div class="terminal-window">
<div class="terminal-line"><span class="terminal-prompt">andrebassi@ubuntu:~$</span><span class="terminal-command"> neofetch</span></div>
<div class="terminal-output"><span style="color: #e95420;">OS:</span> Linux (Cloud Native)<br><span style="color: #e95420;">Kernel:</span> Platform Engineering<br><span style="color: #e95420;">Uptime:</span> 20+ years<br><span style="color: #e95420;">Memory:</span> Go, Rust, Python</div>
<div class="terminal-line"><span class="terminal-prompt">andrebassi@ubuntu:~$</span><span class="terminal-command"> echo "Thanks for visiting!"</span></div>
<div class="terminal-line terminal-success">Thanks for visiting!</div>
<div class="terminal-line"><span class="terminal-prompt">andrebassi@ubuntu:~$</span><span class="terminal-command terminal-cursor">_</span></div>
</div>"#,
    ),
];

pub fn entries(lang: Lang) -> &'static [WindowContent] {
    match lang {
        Lang::Ptbr => PT,
        Lang::En => EN,
    }
}

pub fn lookup(id: &str, lang: Lang) -> Option<&'static WindowContent> {
    entries(lang).iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_both_languages_define_the_same_ids() {
        let pt: HashSet<_> = PT.iter().map(|c| c.id).collect();
        let en: HashSet<_> = EN.iter().map(|c| c.id).collect();
        assert_eq!(pt.len(), PT.len(), "duplicate id in PT catalog");
        assert_eq!(pt, en);
    }

    #[test]
    fn test_opensource_cards_point_at_known_windows() {
        let html = lookup("opensource", Lang::Ptbr).unwrap().html;
        for project in ["edgeproxy", "infra-operator", "runner-codes"] {
            assert!(html.contains(&format!("data-project=\"{project}\"")));
            assert!(lookup(project, Lang::Ptbr).unwrap().maximized);
        }
    }

    #[test]
    fn test_video_markup_embeds_id() {
        let html = lookup("video-runner-codes", Lang::En).unwrap().html;
        assert!(html.contains("embed/72ngZRru15Q?rel=0"));
    }
}
