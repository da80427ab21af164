//! HTML pages

use std::fmt::Write;

use crate::customization::{CustomizationKind, Customizations};
use crate::models::{Education, Experience, PersonalData, Resume, Skill, User};

pub const NOT_LOGGED_IN: &str = "Você não está logado. Acesso direto não é permitido.";

/// Escape text for use inside HTML content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Danger,
}

impl MessageKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// User-facing notice shown at the top of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Danger,
        }
    }
}

/// Data shown on the index page
#[derive(Debug, Default)]
pub struct IndexPage<'a> {
    pub user: Option<&'a User>,
    pub resume: Option<&'a Resume>,
    pub message: Option<Message>,
}

fn layout(title: &str, message: Option<&Message>, body: &str) -> String {
    let alert = message
        .map(|m| {
            format!(
                "<div class=\"alert alert-{}\" role=\"alert\">{}</div>",
                m.kind.css_class(),
                escape(&m.text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<main class="container">
{alert}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Landing page, or the editing dashboard when a user is logged in
pub fn index_page(page: &IndexPage<'_>) -> String {
    let body = match page.user {
        None => anonymous_body(),
        Some(user) => dashboard_body(user, page.resume),
    };
    layout("Currículo", page.message.as_ref(), &body)
}

fn anonymous_body() -> String {
    r#"<h1>Currículo</h1>
<section id="login">
<h2>Entrar</h2>
<form method="post" action="/login">
<input type="email" name="email" placeholder="Email">
<input type="password" name="senha" placeholder="Senha">
<button type="submit">Entrar</button>
</form>
</section>
<section id="register">
<h2>Cadastrar</h2>
<form method="post" action="/register">
<input type="email" name="email" placeholder="Email">
<input type="password" name="senha" placeholder="Senha">
<button type="submit">Cadastrar</button>
</form>
</section>"#
        .to_string()
}

fn dashboard_body(user: &User, resume: Option<&Resume>) -> String {
    let empty = Resume::default();
    let resume = resume.unwrap_or(&empty);
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<h1>Olá, {}</h1>
<nav><a href="/curriculo">Ver currículo</a> | <a href="/logout">Sair</a></nav>
"#,
        escape(&user.email)
    );

    body.push_str(&personal_data_form(resume.personal_data.as_ref()));

    body.push_str("<section id=\"formacao\">\n<h2>Formação</h2>\n");
    for entry in &resume.education {
        body.push_str(&education_form(Some(entry)));
    }
    body.push_str(&education_form(None));
    body.push_str("</section>\n");

    body.push_str("<section id=\"experiencia\">\n<h2>Experiência</h2>\n");
    for entry in &resume.experience {
        body.push_str(&experience_form(Some(entry)));
    }
    body.push_str(&experience_form(None));
    body.push_str("</section>\n");

    body.push_str(&skills_section(&resume.skills));
    body.push_str(OBJECTIVE_SCRIPT);
    body
}

fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{}\"></label>\n",
        escape(value)
    )
}

fn personal_data_form(data: Option<&PersonalData>) -> String {
    let field = |get: fn(&PersonalData) -> &str| data.map(get).unwrap_or_default();

    let mut form = String::from(
        "<section id=\"dadospessoais\">\n<h2>Dados pessoais</h2>\n<form method=\"post\" action=\"/add_dadospessoais\">\n",
    );
    form.push_str(&text_input("nome", "Nome", field(|d| d.name.as_str())));
    form.push_str(&text_input("email", "Email", field(|d| d.email.as_str())));
    form.push_str(&text_input("titulo", "Título", field(|d| d.title.as_str())));
    let _ = write!(
        form,
        "<label>Objetivo <textarea name=\"objetivo\" id=\"objetivo\">{}</textarea></label>\n\
         <button type=\"button\" id=\"gerar-objetivo\">Gerar objetivo</button>\n",
        escape(field(|d| d.objective.as_str()))
    );
    form.push_str(&text_input("endereco", "Endereço", field(|d| d.address.as_str())));
    form.push_str(&text_input("site", "Site", field(|d| d.site.as_str())));
    form.push_str(&text_input("telefone", "Telefone", field(|d| d.phone.as_str())));
    form.push_str("<button type=\"submit\">Salvar</button>\n</form>\n</section>\n");
    form
}

fn education_form(entry: Option<&Education>) -> String {
    let mut form = String::from("<form method=\"post\" action=\"/add_formacao\">\n");
    if let Some(entry) = entry {
        let _ = writeln!(form, "<input type=\"hidden\" name=\"id\" value=\"{}\">", entry.id);
    }
    form.push_str(&text_input("curso", "Curso", entry.map_or("", |e| e.course.as_str())));
    form.push_str(&text_input(
        "instituicao",
        "Instituição",
        entry.map_or("", |e| e.institution.as_str()),
    ));
    form.push_str(&text_input("data", "Data", entry.map_or("", |e| e.date.as_str())));
    form.push_str(&text_input(
        "descricao",
        "Descrição",
        entry.map_or("", |e| e.description.as_str()),
    ));
    match entry {
        Some(entry) => {
            let _ = writeln!(
                form,
                "<button type=\"submit\">Atualizar</button> <a href=\"/delete_formacao/{}\">Excluir</a>",
                entry.id
            );
        }
        None => form.push_str("<button type=\"submit\">Adicionar</button>\n"),
    }
    form.push_str("</form>\n");
    form
}

fn experience_form(entry: Option<&Experience>) -> String {
    let mut form = String::from("<form method=\"post\" action=\"/add_experiencia\">\n");
    if let Some(entry) = entry {
        let _ = writeln!(form, "<input type=\"hidden\" name=\"id\" value=\"{}\">", entry.id);
    }
    form.push_str(&text_input("cargo", "Cargo", entry.map_or("", |e| e.role.as_str())));
    form.push_str(&text_input("empresa", "Empresa", entry.map_or("", |e| e.company.as_str())));
    form.push_str(&text_input("data", "Data", entry.map_or("", |e| e.date.as_str())));
    form.push_str(&text_input(
        "descricao",
        "Descrição",
        entry.map_or("", |e| e.description.as_str()),
    ));
    match entry {
        Some(entry) => {
            let _ = writeln!(
                form,
                "<button type=\"submit\">Atualizar</button> <a href=\"/delete_experiencia/{}\">Excluir</a>",
                entry.id
            );
        }
        None => form.push_str("<button type=\"submit\">Adicionar</button>\n"),
    }
    form.push_str("</form>\n");
    form
}

fn skills_section(skills: &[Skill]) -> String {
    let mut section = String::from("<section id=\"habilidades\">\n<h2>Habilidades</h2>\n<ul>\n");
    for skill in skills {
        let _ = writeln!(
            section,
            "<li>{} <a href=\"/delete_habilidade/{}\">Excluir</a></li>",
            escape(&skill.name),
            skill.id
        );
    }
    section.push_str(
        "</ul>\n<form method=\"post\" action=\"/add_habilidade\">\n\
         <input type=\"text\" name=\"nome\" placeholder=\"Habilidade\">\n\
         <button type=\"submit\">Adicionar</button>\n</form>\n</section>\n",
    );
    section
}

const OBJECTIVE_SCRIPT: &str = r#"<script>
document.getElementById('gerar-objetivo').addEventListener('click', async () => {
  const titulo = document.querySelector('input[name="titulo"]').value;
  const resposta = await fetch('/chatgpt', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ titulo }),
  });
  const dados = await resposta.json();
  if (dados.objetivo) {
    document.getElementById('objetivo').value = dados.objetivo;
  }
});
</script>
"#;

/// Base résumé fragment, before any customization wraps it
pub fn resume_fragment(resume: &Resume) -> String {
    let mut html = String::from("<article class=\"curriculo\">\n");

    if let Some(data) = &resume.personal_data {
        let _ = write!(
            html,
            "<header>\n<h1>{}</h1>\n<h2>{}</h2>\n<p>{} | {} | {} | {}</p>\n</header>\n",
            escape(&data.name),
            escape(&data.title),
            escape(&data.email),
            escape(&data.phone),
            escape(&data.address),
            escape(&data.site),
        );
        if !data.objective.is_empty() {
            let _ = write!(
                html,
                "<section>\n<h3>Objetivo</h3>\n<p>{}</p>\n</section>\n",
                escape(&data.objective)
            );
        }
    }

    if !resume.education.is_empty() {
        html.push_str("<section>\n<h3>Formação</h3>\n<ul>\n");
        for entry in &resume.education {
            let _ = writeln!(
                html,
                "<li><strong>{}</strong>, {} ({})<p>{}</p></li>",
                escape(&entry.course),
                escape(&entry.institution),
                escape(&entry.date),
                escape(&entry.description),
            );
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !resume.experience.is_empty() {
        html.push_str("<section>\n<h3>Experiência</h3>\n<ul>\n");
        for entry in &resume.experience {
            let _ = writeln!(
                html,
                "<li><strong>{}</strong>, {} ({})<p>{}</p></li>",
                escape(&entry.role),
                escape(&entry.company),
                escape(&entry.date),
                escape(&entry.description),
            );
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !resume.skills.is_empty() {
        html.push_str("<section>\n<h3>Habilidades</h3>\n<ul>\n");
        for skill in &resume.skills {
            let _ = writeln!(html, "<li>{}</li>", escape(&skill.name));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("</article>");
    html
}

/// Résumé page: customization controls around the rendered résumé
pub fn resume_page(
    rendered: &str,
    customizations: &Customizations,
    message: Option<&Message>,
) -> String {
    let mut body = String::from(
        "<nav><a href=\"/\">Voltar</a> | <a href=\"/reset_customizacao\">Restaurar estilo</a></nav>\n\
         <section id=\"customizacao\">\n",
    );

    for (kind, label, placeholder) in [
        (CustomizationKind::Color, "Cor", "#333333"),
        (CustomizationKind::Font, "Fonte", "Arial"),
        (CustomizationKind::Size, "Tamanho", "14px"),
    ] {
        let _ = writeln!(
            body,
            "<form method=\"post\" action=\"/customizacao/{kind}\">\
             <label>{label} <input type=\"text\" name=\"value\" placeholder=\"{placeholder}\" value=\"{}\"></label>\
             <button type=\"submit\">Aplicar</button></form>",
            escape(customizations.get(kind).unwrap_or_default()),
        );
    }

    body.push_str("</section>\n");
    body.push_str(rendered);
    layout("Currículo", message, &body)
}

/// Page shown for errors that reach the user
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>Erro {status}</h1>\n<p>{}</p>\n<p><a href=\"/\">Voltar ao início</a></p>",
        escape(message)
    );
    layout("Erro", None, &body)
}
