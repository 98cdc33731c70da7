//! HTML for the bill splitter page and the PDF document.
//!
//! Both documents are small and fixed, so they are built with `format!`.
//! Every dynamic value goes through [`escape_html`].

use shared::FormattedShares;

use crate::domain::BillReport;

/// Data shown on the index page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexPage {
    /// Raw text echoed back into the light input
    pub light_input: String,
    /// Raw text echoed back into the water input
    pub water_input: String,
    /// Computed shares, absent before the first submission
    pub shares: Option<FormattedShares>,
    /// Non-blocking message shown above the results
    pub notice: Option<String>,
    /// Whether the download button is offered
    pub pdf_available: bool,
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn input(kind: &str, name: &str, value: &str, extra: &str) -> String {
    format!(
        r#"<input type="{}" name="{}" value="{}"{}>"#,
        kind,
        name,
        escape_html(value),
        extra
    )
}

fn result_row(label: &str, name: &str, value: &str) -> String {
    format!(
        "<tr><th>{}</th><td>{}</td></tr>",
        label,
        input("text", name, value, " readonly")
    )
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:640px;margin:2rem auto;padding:0 1rem;color:#222}\
h1{font-size:1.5rem}fieldset{border:1px solid #ccc;margin-bottom:1rem}\
label{display:block;margin:.5rem 0}table{width:100%;border-collapse:collapse}\
th{text-align:left;padding:.25rem .5rem}td input{width:100%}\
.notice{background:#fff4e5;border:1px solid #f0b35a;padding:.5rem;margin-bottom:1rem}\
button{padding:.5rem 1rem;margin-top:.5rem}";

/// Render the form page
pub fn render_index_page(page: &IndexPage) -> String {
    let empty = FormattedShares::default();
    let shares = page.shares.as_ref().unwrap_or(&empty);

    let notice = page
        .notice
        .as_deref()
        .map(|n| format!(r#"<div class="notice" role="alert">{}</div>"#, escape_html(n)))
        .unwrap_or_default();

    let download = match (&page.shares, page.pdf_available) {
        (Some(shares), true) => {
            let hidden: String = shares
                .fields()
                .iter()
                .map(|(name, value)| input("hidden", name, value, ""))
                .collect();
            format!(
                r#"<form method="post" action="/download_pdf">{}<button type="submit">Baixar PDF</button></form>"#,
                hidden
            )
        }
        (Some(_), false) => "<p>Geração de PDF indisponível no momento.</p>".to_string(),
        (None, _) => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Divisão das contas de água e luz</title>
<style>{style}</style>
</head>
<body>
<h1>Divisão das contas de água e luz</h1>
{notice}
<form method="post" action="/">
<fieldset>
<legend>Valores das contas</legend>
<label>Conta de luz {luz}</label>
<label>Conta de água {agua}</label>
<button type="submit">Calcular</button>
</fieldset>
</form>
<fieldset>
<legend>Iara</legend>
<table>
{luz_iara}
{agua_iara}
{total_iara}
</table>
</fieldset>
<fieldset>
<legend>Rodrigo</legend>
<table>
{luz_rodrigo}
{agua_rodrigo}
{total_rodrigo}
</table>
</fieldset>
{download}
</body>
</html>
"#,
        style = PAGE_STYLE,
        notice = notice,
        luz = input("text", "luz", &page.light_input, r#" placeholder="R$ 0,00" inputmode="decimal""#),
        agua = input("text", "agua", &page.water_input, r#" placeholder="R$ 0,00" inputmode="decimal""#),
        luz_iara = result_row("Luz (1/3)", "luz_iara", &shares.luz_iara),
        agua_iara = result_row("Água (1/2)", "agua_iara", &shares.agua_iara),
        total_iara = result_row("Total", "total_iara", &shares.total_iara),
        luz_rodrigo = result_row("Luz (2/3)", "luz_rodrigo", &shares.luz_rodrigo),
        agua_rodrigo = result_row("Água (1/2)", "agua_rodrigo", &shares.agua_rodrigo),
        total_rodrigo = result_row("Total", "total_rodrigo", &shares.total_rodrigo),
        download = download,
    )
}

/// Render the fixed document that is converted to PDF
pub fn render_report_document(report: &BillReport) -> String {
    let s = &report.shares;
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Conta de Água e Luz</title>
<style>
body {{ font-family: sans-serif; color: #222; }}
h1 {{ font-size: 20pt; margin-bottom: 4pt; }}
.generated {{ color: #666; font-size: 10pt; margin-bottom: 16pt; }}
table {{ width: 100%; border-collapse: collapse; }}
th, td {{ border: 1px solid #999; padding: 6pt; text-align: left; }}
tr.total td, tr.total th {{ font-weight: bold; }}
</style>
</head>
<body>
<h1>Conta de Água e Luz</h1>
<div class="generated">Gerado em {generated_at}</div>
<table>
<tr><th></th><th>Iara</th><th>Rodrigo</th></tr>
<tr><th>Luz</th><td>{luz_iara}</td><td>{luz_rodrigo}</td></tr>
<tr><th>Água</th><td>{agua_iara}</td><td>{agua_rodrigo}</td></tr>
<tr class="total"><th>Total</th><td>{total_iara}</td><td>{total_rodrigo}</td></tr>
</table>
</body>
</html>
"#,
        generated_at = escape_html(&report.generated_at),
        luz_iara = escape_html(&s.luz_iara),
        luz_rodrigo = escape_html(&s.luz_rodrigo),
        agua_iara = escape_html(&s.agua_iara),
        agua_rodrigo = escape_html(&s.agua_rodrigo),
        total_iara = escape_html(&s.total_iara),
        total_rodrigo = escape_html(&s.total_rodrigo),
    )
}
