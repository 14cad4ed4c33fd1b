use crate::{
    core::{display, table::Table},
    error::TableResult,
};
use minijinja::{Environment, Template};
use once_cell::sync::Lazy;
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{error, info};

static TEMPLATES_ENVIRONMENT: Lazy<Environment> = Lazy::new(|| {
    info!("Initializing templating engine environment.");
    let mut env = Environment::new();

    // Use strum to iterate over the variants of the enum.
    for template in PageTemplate::iter() {
        if let Err(e) = env.add_template(template.name(), template.template()) {
            error!("Could not load template {}. {e}", template.name());
        }
    }

    info!("Templates loaded in templating engine environment.");

    env
});

#[derive(EnumIter)]
pub enum PageTemplate {
    Index,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    year: &'a str,
    current_year: &'a str,
    generated_at: Option<String>,
    previous_years: Vec<&'static str>,
    rows: Vec<display::DisplayRow<'a>>,
}

impl PageTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            PageTemplate::Index => "index.html",
        }
    }

    pub fn get(&self) -> TableResult<Template<'_, '_>> {
        Ok(TEMPLATES_ENVIRONMENT.get_template(self.name())?)
    }

    pub fn template(&self) -> &'static str {
        match self {
            PageTemplate::Index => {
                r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>The Hundred combined table {{ year }}</title>
</head>
<body>
  <h1>The Hundred combined table {{ year }}</h1>
  <nav>
    <a href="/">{{ current_year }}</a>
    {%- for previous in previous_years %} | <a href="/?year={{ previous }}">{{ previous }}</a>{% endfor %}
  </nav>
  <table>
    <thead>
      <tr>
        <th rowspan="2">#</th><th rowspan="2">Team</th>
        <th colspan="7">Combined</th><th colspan="2">Women</th><th colspan="2">Men</th>
      </tr>
      <tr>
        <th>P</th><th>W</th><th>L</th><th>T</th><th>NR</th><th>Pts</th><th>NRR</th>
        <th>Pts</th><th>NRR</th><th>Pts</th><th>NRR</th>
      </tr>
    </thead>
    <tbody>
    {%- for row in rows %}
      <tr>
        <td>{{ row.position }}</td><td>{{ row.team }}</td>
        <td>{{ row.combined.played }}</td><td>{{ row.combined.won }}</td><td>{{ row.combined.lost }}</td>
        <td>{{ row.combined.tied }}</td><td>{{ row.combined.no_result }}</td>
        <td><strong>{{ row.combined.points }}</strong></td><td>{{ row.combined.net_run_rate }}</td>
        <td>{{ row.women.points }}</td><td>{{ row.women.net_run_rate }}</td>
        <td>{{ row.men.points }}</td><td>{{ row.men.net_run_rate }}</td>
      </tr>
    {%- else %}
      <tr><td colspan="13">No table for {{ year }}.</td></tr>
    {%- endfor %}
    </tbody>
  </table>
  {%- if generated_at %}
  <p>Generated at {{ generated_at }}.</p>
  {%- endif %}
</body>
</html>
"#
            }
        }
    }
}

/// Render the page for a table, `current_year` being the label of the live season.
pub fn render_index(table: &Table, current_year: &str) -> TableResult<String> {
    let context = IndexContext {
        year: &table.year,
        current_year,
        generated_at: table.generated_at.as_ref().map(display::format_timestamp),
        previous_years: table.previous_years.keys().copied().collect(),
        rows: display::rows(&table.rows),
    };
    Ok(PageTemplate::Index.get()?.render(context)?)
}
