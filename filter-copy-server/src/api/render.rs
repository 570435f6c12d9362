const FORM_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Copiar filtros VTEX</title>
</head>
<body>
    <h1>Copiar filtros entre cuentas VTEX</h1>

    <form method="POST" enctype="multipart/form-data">

        <label>Cuenta origen:</label><br>
        <input type="text" name="origen" placeholder="simannicor" required><br><br>

        <label>Cuenta destino:</label><br>
        <input type="text" name="destino" placeholder="simandestino" required><br><br>

        <label>Archivo JSON con IDs:</label><br>
        <input type="file" name="file" accept=".json" required><br><br>

        <label>
            <input type="checkbox" name="continuar" value="1">
            Continuar aunque falle un filtro
        </label><br><br>

        <button type="submit">Copiar filtros</button>
    </form>
"#;

const FORM_TAIL: &str = r#"</body>
</html>
"#;

/// Renders the copy form, followed by a result panel when there is text to show.
pub fn render_page(result: Option<&str>) -> String {
    let mut page = String::from(FORM_HEAD);
    if let Some(result) = result.filter(|r| !r.is_empty()) {
        page.push_str("\n    <h2>Resultado:</h2>\n    <pre>");
        page.push_str(&escape_html(result));
        page.push_str("</pre>\n");
    }
    page.push_str(FORM_TAIL);
    page
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
