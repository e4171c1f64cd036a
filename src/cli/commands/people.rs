use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_attributes, parse_attributes, truncate_with_ellipsis};
use crate::notify::Notifier;
use crate::table::{Color, PeopleApi, Person, TableController, TableState};

#[derive(Tabled)]
pub(crate) struct PersonDisplay {
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Color")]
    pub(crate) color: String,
    #[tabled(rename = "Attributes")]
    pub(crate) attributes: String,
}

impl From<&Person> for PersonDisplay {
    fn from(person: &Person) -> Self {
        Self {
            name: truncate_with_ellipsis(&person.name, 40),
            color: person.color.to_string(),
            attributes: truncate_with_ellipsis(&format_attributes(&person.attributes), 60),
        }
    }
}

/// JSON shape of a printed page.
#[derive(Debug, Serialize)]
struct PageOutput<'a> {
    page: usize,
    page_size: usize,
    total_pages: usize,
    total_items: usize,
    people: &'a [Person],
}

/// List people, optionally filtered by color, at the requested page
pub async fn list_people<A: PeopleApi, N: Notifier>(
    table: &TableController<A, N>,
    color: Option<&str>,
    page: Option<usize>,
    format: &str,
) -> CliResult<String> {
    match color {
        Some(c) => {
            table.select_color(Some(Color::from(c)));
            table.set_can_filter(true);
            table.load_filtered().await?;
        }
        None => {
            table.load_all().await?;
        }
    }

    if let Some(p) = page {
        table.go_to_page(p)?;
    }

    format_page(&table.state(), format)
}

/// List the colors people can be filtered by
pub async fn list_colors<A: PeopleApi, N: Notifier>(
    table: &TableController<A, N>,
    format: &str,
) -> CliResult<String> {
    let colors = table.load_color_options().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&colors)?),
        _ => Ok(format_colors(&colors)),
    }
}

/// Create a person and print the refreshed first page
pub async fn add_person<A: PeopleApi, N: Notifier>(
    table: &TableController<A, N>,
    name: &str,
    color: &str,
    attributes: &[String],
    format: &str,
) -> CliResult<String> {
    let person = Person {
        name: name.to_string(),
        color: Color::from(color),
        attributes: parse_attributes(attributes)?,
    };

    table.add_record(person).await?;

    match format {
        "json" => format_page(&table.state(), format),
        _ => Ok(format!(
            "✓ Added {} ({})\n{}",
            name,
            color,
            format_page(&table.state(), format)?
        )),
    }
}

pub(crate) fn format_page(state: &TableState, format: &str) -> CliResult<String> {
    let page = &state.page;
    match format {
        "json" => Ok(serde_json::to_string_pretty(&PageOutput {
            page: state.cursor.page_number(),
            page_size: state.cursor.page_size(),
            total_pages: page.total_pages,
            total_items: page.total_items,
            people: &page.visible_rows,
        })?),
        _ => Ok(format!(
            "{}\nPage {} of {} ({} people)",
            format_table(&page.visible_rows),
            state.cursor.page_number(),
            page.total_pages,
            page.total_items
        )),
    }
}

pub(crate) fn format_table(people: &[Person]) -> String {
    if people.is_empty() {
        return "No people found.".to_string();
    }

    let display: Vec<PersonDisplay> = people.iter().map(|p| p.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

pub(crate) fn format_colors(colors: &[Color]) -> String {
    if colors.is_empty() {
        return "No colors found.".to_string();
    }

    let mut builder = tabled::builder::Builder::default();
    builder.push_record(["Color"]);
    for color in colors {
        builder.push_record([color.as_str()]);
    }

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}
