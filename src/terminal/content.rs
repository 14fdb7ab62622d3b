//! HTML printed by the terminal commands.

pub const WELCOME: &str = r#"<div class="welcome-banner">
<pre class="ascii-art">
    _              _          ____                 _
   / \   _ __   __| |_ __ ___| __ )  __ _ ___ ___(_)
  / _ \ | '_ \ / _` | '__/ _ \  _ \ / _` / __/ __| |
 / ___ \| | | | (_| | | |  __/ |_) | (_| \__ \__ \ |
/_/   \_\_| |_|\__,_|_|  \___|____/ \__,_|___/___/_|
</pre>
<span class="version">Platform Engineer &amp; Cloud Architect v20.0.0</span>

<span style="color: var(--gray)">────────────────────────────────────────────────────</span>

<span style="color: var(--green)">Bem-vindo ao meu portfolio interativo!</span>
Use comandos de terminal para navegar.

<span style="color: var(--yellow)">Comandos rápidos:</span>
  <span style="color: var(--cyan)">whoami</span>      → Sobre mim
  <span style="color: var(--cyan)">ls</span>          → Listar diretórios
  <span style="color: var(--cyan)">cat skills</span>  → Ver minhas skills
  <span style="color: var(--cyan)">help</span>        → Todos os comandos

<span style="color: var(--gray)">────────────────────────────────────────────────────</span>
</div>"#;

pub const HELP: &str = r#"<div class="file-content">
<h2>Comandos Disponíveis</h2>
<h3>Navegação</h3>
<ul>
<li><span style="color: var(--cyan)">ls</span> - Listar conteúdo do diretório</li>
<li><span style="color: var(--cyan)">cd [dir]</span> - Mudar de diretório</li>
<li><span style="color: var(--cyan)">cat [arquivo]</span> - Ver conteúdo de um arquivo</li>
<li><span style="color: var(--cyan)">pwd</span> - Mostrar diretório atual</li>
</ul>
<h3>Informações</h3>
<ul>
<li><span style="color: var(--cyan)">whoami</span> - Sobre mim</li>
<li><span style="color: var(--cyan)">skills</span> - Minhas tecnologias</li>
<li><span style="color: var(--cyan)">projects</span> - Projetos open source</li>
<li><span style="color: var(--cyan)">experience</span> - Experiência profissional</li>
<li><span style="color: var(--cyan)">contact</span> - Informações de contato</li>
</ul>
<h3>Sistema</h3>
<ul>
<li><span style="color: var(--cyan)">clear</span> - Limpar terminal (ou Ctrl+L)</li>
<li><span style="color: var(--cyan)">history</span> - Histórico de comandos</li>
<li><span style="color: var(--cyan)">neofetch</span> - Informações do sistema</li>
<li><span style="color: var(--cyan)">matrix</span> - Easter egg</li>
</ul>
<p style="color: var(--gray); margin-top: 15px;">Dica: Use ↑↓ para navegar no histórico e Tab para autocompletar</p>
</div>"#;

pub const WHOAMI: &str = r#"<div class="file-content">
<h2>André Bassi</h2>
<p><strong>Platform Engineer &amp; Cloud Architect</strong></p>
<p>Mais de 20 anos construindo infraestruturas escaláveis, plataformas Kubernetes e sistemas distribuídos. Apaixonado por open source e por resolver desafios complexos.</p>
<h3>O que eu faço</h3>
<ul>
<li>Arquitetura de plataformas cloud-native</li>
<li>Kubernetes em produção (18+ clusters)</li>
<li>Infraestrutura como Código</li>
<li>CI/CD &amp; DevOps</li>
<li>Infraestrutura para IA/LLM</li>
</ul>
<h3>Links</h3>
<ul>
<li><a href="https://github.com/andrebassi" target="_blank">github.com/andrebassi</a></li>
<li><a href="https://linkedin.com/in/andrebassi" target="_blank">linkedin.com/in/andrebassi</a></li>
</ul>
</div>"#;

pub const SKILLS: &str = r#"<div class="file-content">
<h2>Skills &amp; Tecnologias</h2>
<h3>Cloud &amp; Plataformas</h3>
<div class="tags"><span class="tag">AWS</span><span class="tag">GCP</span><span class="tag">Azure</span><span class="tag">OCI</span><span class="tag">Cloudflare</span></div>
<h3>Containers &amp; Orquestração</h3>
<div class="tags"><span class="tag cyan">Kubernetes</span><span class="tag cyan">Docker</span><span class="tag cyan">Helm</span><span class="tag cyan">Istio</span><span class="tag cyan">ArgoCD</span></div>
<h3>IaC &amp; Automação</h3>
<div class="tags"><span class="tag yellow">Terraform</span><span class="tag yellow">Ansible</span><span class="tag yellow">Pulumi</span><span class="tag yellow">GitLab CI</span></div>
<h3>Linguagens</h3>
<div class="tags"><span class="tag">Go</span><span class="tag">Rust</span><span class="tag">Python</span><span class="tag">TypeScript</span><span class="tag">Bash</span></div>
<h3>Observabilidade</h3>
<div class="tags"><span class="tag">Prometheus</span><span class="tag">Grafana</span><span class="tag">Datadog</span><span class="tag">ELK Stack</span></div>
</div>"#;

pub const PROJECTS: &str = r#"<div class="file-content">
<h2>Projetos Open Source</h2>
<p>Ferramentas que construí para resolver problemas reais de infraestrutura.</p>
<div class="project-list">
<div class="project-item">
<h4>edgeProxy</h4>
<p>Proxy TCP distribuído de alta performance escrito em Rust. Suporta load balancing, health checks e hot reload de configuração.</p>
<div class="tags"><span class="tag">Rust</span><span class="tag">TCP</span><span class="tag">Proxy</span></div>
<a href="https://edgeproxy-docs.runner.codes/" target="_blank">→ Documentação</a>
</div>
<div class="project-item">
<h4>infra-operator</h4>
<p>Kubernetes Operator para gerenciar recursos AWS usando CRDs. Automatiza criação de buckets S3, filas SQS e mais.</p>
<div class="tags"><span class="tag">Go</span><span class="tag">Kubernetes</span><span class="tag">AWS</span></div>
<a href="https://github.com/andrebassi/infra-operator" target="_blank">→ GitHub</a>
</div>
<div class="project-item">
<h4>runner.codes</h4>
<p>Execução segura de código em microVMs Firecracker isoladas. Ideal para plataformas de coding e avaliação técnica.</p>
<div class="tags"><span class="tag">Go</span><span class="tag">Firecracker</span><span class="tag">KVM</span></div>
<a href="https://runner.codes/" target="_blank">→ Site</a>
</div>
</div>
</div>"#;

pub const EXPERIENCE: &str = r#"<div class="file-content">
<h2>Experiência</h2>
<p>Mais de 20 anos construindo sistemas de alta escala.</p>
<div class="stats-grid">
<div class="stat-item"><div class="stat-value">20+</div><div class="stat-label">ANOS DE EXPERIÊNCIA</div></div>
<div class="stat-item"><div class="stat-value">18+</div><div class="stat-label">CLUSTERS K8S EM PROD</div></div>
<div class="stat-item"><div class="stat-value">3</div><div class="stat-label">PROJETOS OPEN SOURCE</div></div>
<div class="stat-item"><div class="stat-value">4</div><div class="stat-label">CLOUD PROVIDERS</div></div>
</div>
<h3>Áreas de Atuação</h3>
<ul>
<li>Staff Platform Engineer</li>
<li>Cloud Native Architect</li>
<li>SRE &amp; DevOps</li>
<li>Infraestrutura de IA/LLM</li>
</ul>
<h3>Multi-cloud</h3>
<div class="tags"><span class="tag">AWS</span><span class="tag">GCP</span><span class="tag">Azure</span><span class="tag">OCI</span></div>
</div>"#;

pub const CONTACT: &str = r#"<div class="file-content">
<h2>Contato</h2>
<p>Vamos conversar! Estou sempre aberto a discutir novos projetos e oportunidades.</p>
<h3>Entre em contato</h3>
<ul>
<li><span style="color: var(--yellow)">Email:</span> <a href="mailto:contato@andrebassi.com.br">contato@andrebassi.com.br</a></li>
<li><span style="color: var(--yellow)">LinkedIn:</span> <a href="https://linkedin.com/in/andrebassi" target="_blank">linkedin.com/in/andrebassi</a></li>
<li><span style="color: var(--yellow)">GitHub:</span> <a href="https://github.com/andrebassi" target="_blank">github.com/andrebassi</a></li>
</ul>
<h3>Como posso ajudar</h3>
<ul>
<li>Consultoria em arquitetura cloud</li>
<li>Mentoria em DevOps/SRE</li>
<li>Projetos de infraestrutura Kubernetes</li>
<li>Colaboração em projetos open source</li>
</ul>
</div>"#;

pub const NEOFETCH: &str = r#"<div style="display: flex; gap: 30px; align-items: flex-start; flex-wrap: wrap;">
<pre class="ascii-art" style="color: var(--cyan);">
       _,met$$$$$gg.
    ,g$$$$$$$$$$$$$$$P.
  ,g$$P"     """Y$$.".
 ,$$P'              `$$$.
',$$P       ,ggs.     `$$b:
`d$$'     ,$P"'   .    $$$
 $$P      d$'     ,    $$P
 $$:      $$.   -    ,d$$'
 $$;      Y$b._   _,d$P'
 Y$$.    `.`"Y$$$$P"'
 `$$b      "-.__
  `Y$$
   `Y$$.
     `$$b.
       `Y$$b.
          `"Y$b._
              `"""
</pre>
<div style="font-size: 13px;">
<span style="color: var(--cyan)">andrebassi</span>@<span style="color: var(--cyan)">portfolio</span>
<span style="color: var(--gray)">─────────────────────</span>
<span style="color: var(--cyan)">OS:</span> Linux (Cloud Native)
<span style="color: var(--cyan)">Host:</span> Kubernetes v1.28+
<span style="color: var(--cyan)">Kernel:</span> Platform Engineering
<span style="color: var(--cyan)">Uptime:</span> 20+ years
<span style="color: var(--cyan)">Packages:</span> 18+ K8s clusters
<span style="color: var(--cyan)">Shell:</span> bash 5.0
<span style="color: var(--cyan)">Terminal:</span> Portfolio v2.0
<span style="color: var(--cyan)">CPU:</span> Multi-cloud @ 99.9%
<span style="color: var(--cyan)">Memory:</span> Go, Rust, Python
<div style="margin-top: 10px;">
<span style="background: #ff5555; padding: 0 8px;">&nbsp;</span>
<span style="background: #ffbd2e; padding: 0 8px;">&nbsp;</span>
<span style="background: #27c93f; padding: 0 8px;">&nbsp;</span>
<span style="background: #00d4ff; padding: 0 8px;">&nbsp;</span>
<span style="background: #bd93f9; padding: 0 8px;">&nbsp;</span>
<span style="background: #ff79c6; padding: 0 8px;">&nbsp;</span>
</div>
</div>
</div>"#;
